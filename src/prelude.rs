/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # TinyPaste Client Prelude
//!
//! Commonly used types in one import.
//!
//! ```rust
//! use tinypaste_client::prelude::*;
//!
//! let config = Config::with_base_url(TINYPASTE_API);
//! assert_eq!(config.response_format, ResponseFormat::Json);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the paste API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND CALLBACKS
// ============================================================================

/// Client and in-flight request handle
pub use crate::application::client::{PendingRequest, TinyPasteClient};

/// Callback targets
pub use crate::application::callback::{
    CallbackArg, CallbackTarget, MessageReceiver, ResponseHandler,
};

// ============================================================================
// MODELS
// ============================================================================

/// Credential composition
pub use crate::model::auth::{CredentialComposer, md5_hex};

/// Requests and responses
pub use crate::model::requests::{ApiMethod, PasteForm, PasteRequest, ResponseFormat};
pub use crate::model::responses::PasteResponse;

// ============================================================================
// TRANSPORT
// ============================================================================

/// HTTP transport trait and its reqwest implementation
pub use crate::model::http::{ReqwestTransport, Transport};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
