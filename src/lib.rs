/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # tinypaste-client
//!
//! A small client for the [tny.cz](http://tny.cz) paste API.
//!
//! The client exposes the five remote procedures of the API (`create`, `get`,
//! `list`, `delete` and `edit`). Every call is fire-and-forget: the request is
//! spawned as its own tokio task and the raw textual response (or the
//! transport error) is delivered to exactly one callback.
//!
//! ```ignore
//! use tinypaste_client::prelude::*;
//!
//! let client = TinyPasteClient::default();
//! client
//!     .create("hello", "greeting", CallbackTarget::direct(|body, error| {
//!         println!("{body:?} {error:?}");
//!     }))
//!     .wait()
//!     .await;
//! ```

/// Application layer: configuration, callbacks and the client itself
pub mod application;
/// Global constants
pub mod constants;
/// Error type shared by the crate
pub mod error;
/// Credentials, request and response models plus the HTTP transport
pub mod model;
/// Convenient re-exports
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Re-export of the configuration module
pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
