/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Credential composition and password hash memoization
pub mod auth;
/// HTTP transport abstraction and its reqwest implementation
pub mod http;
/// Request models: API methods, response formats and form payloads
pub mod requests;
/// Settled response of a single API call
pub mod responses;
