/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
///
/// Errors never cross the callback boundary as values of this type: the
/// dispatcher renders them with `Display` and hands the text to the callback.
#[derive(Debug)]
pub enum AppError {
    /// Connection, DNS or protocol failure reported by reqwest
    Network(reqwest::Error),
    /// The API answered with a non-success status code
    Unexpected(StatusCode),
    /// Invalid caller or configuration input
    InvalidInput(String),
    /// Opaque transport failure, passed through verbatim
    Transport(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Transport(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}
