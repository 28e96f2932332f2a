/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Settled outcome of one API call
///
/// The body is handed over unparsed, in whatever format the client asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PasteResponse {
    /// Raw response text
    Succeeded(String),
    /// Transport or HTTP error text
    Failed(String),
}

impl PasteResponse {
    /// Response text, if the call succeeded
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            PasteResponse::Succeeded(body) => Some(body),
            PasteResponse::Failed(_) => None,
        }
    }

    /// Error text, if the call failed
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            PasteResponse::Succeeded(_) => None,
            PasteResponse::Failed(error) => Some(error),
        }
    }

    /// Whether the call succeeded
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, PasteResponse::Succeeded(_))
    }

    /// Splits into the `(body, error)` pair handed to direct callbacks
    ///
    /// Exactly one side is `Some`.
    #[must_use]
    pub fn into_parts(self) -> (Option<String>, Option<String>) {
        match self {
            PasteResponse::Succeeded(body) => (Some(body), None),
            PasteResponse::Failed(error) => (None, Some(error)),
        }
    }
}

impl From<Result<String, AppError>> for PasteResponse {
    fn from(result: Result<String, AppError>) -> Self {
        match result {
            Ok(body) => PasteResponse::Succeeded(body),
            Err(e) => PasteResponse::Failed(e.to_string()),
        }
    }
}
