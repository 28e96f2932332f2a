/// Base endpoint of the tny.cz paste API
pub const TINYPASTE_API: &str = "http://tny.cz/api";
/// Method invoked on a message receiver when a request succeeds, unless overridden
pub const DEFAULT_SUCCESS_METHOD: &str = "OnTinyPasteSucceeded";
/// Method invoked on a message receiver when a request fails, unless overridden
pub const DEFAULT_FAILURE_METHOD: &str = "OnTinyPasteFailed";
/// User agent string sent with every request
pub const USER_AGENT: &str = "tinypaste-client/0.1.0";
/// Form field carrying the paste body
pub const FIELD_PASTE: &str = "paste";
/// Form field carrying the paste title
pub const FIELD_TITLE: &str = "title";
/// Form field carrying the paste identifier
pub const FIELD_ID: &str = "id";
/// Form field carrying the composed `username:md5(password)` token
pub const FIELD_AUTHENTICATE: &str = "authenticate";
