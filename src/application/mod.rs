/// Callback targets and their delivery
pub mod callback;
/// The paste API client and request dispatcher
pub mod client;
/// Client configuration
pub mod config;
