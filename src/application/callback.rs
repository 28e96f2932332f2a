/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Callback targets for paste API calls
//!
//! A call reports its outcome to exactly one of three sinks:
//! - a direct handler receiving `(body, error)`
//! - a named-message receiver, addressed by a success and a failure method name
//! - the default sink, which logs errors and drops successes

use crate::constants::{DEFAULT_FAILURE_METHOD, DEFAULT_SUCCESS_METHOD};
use crate::model::responses::PasteResponse;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Direct handler invoked with `(body, error)`; exactly one side is `Some`
pub type ResponseHandler = Box<dyn FnOnce(Option<String>, Option<String>) + Send + 'static>;

/// Object that accepts messages addressed by method name
///
/// Receivers are not required to understand every method name: returning
/// `false` from [`MessageReceiver::receive`] means "not handled" and is not
/// treated as a failure.
pub trait MessageReceiver: Send + Sync {
    /// Delivers `payload` to the method called `method`
    ///
    /// # Returns
    /// `true` if the receiver handled the message
    fn receive(&self, method: &str, payload: &str) -> bool;
}

/// One element of a variadic callback argument list
///
/// Mirrors the loosely-typed `callback...` arguments accepted by the API
/// wrappers; see [`CallbackTarget::resolve`].
pub enum CallbackArg {
    /// An addressable receiver
    Receiver(Arc<dyn MessageReceiver>),
    /// A method name
    Method(String),
    /// A direct handler
    Handler(ResponseHandler),
}

impl CallbackArg {
    /// Wraps a closure as a direct handler argument
    pub fn handler<F>(f: F) -> Self
    where
        F: FnOnce(Option<String>, Option<String>) + Send + 'static,
    {
        CallbackArg::Handler(Box::new(f))
    }

    /// Wraps a method name argument
    pub fn method(name: impl Into<String>) -> Self {
        CallbackArg::Method(name.into())
    }
}

impl fmt::Debug for CallbackArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallbackArg::Receiver(_) => f.write_str("Receiver"),
            CallbackArg::Method(name) => f.debug_tuple("Method").field(name).finish(),
            CallbackArg::Handler(_) => f.write_str("Handler"),
        }
    }
}

/// Where the outcome of a call is delivered
#[derive(Default)]
pub enum CallbackTarget {
    /// Invoke a handler with `(body, error)`
    Direct(ResponseHandler),
    /// Send the body to `success` or the error to `failure` on `receiver`
    Named {
        /// Addressable receiver
        receiver: Arc<dyn MessageReceiver>,
        /// Method receiving the response body
        success: String,
        /// Method receiving the error text
        failure: String,
    },
    /// Log errors, discard successes
    #[default]
    Default,
}

impl CallbackTarget {
    /// Direct handler target
    pub fn direct<F>(f: F) -> Self
    where
        F: FnOnce(Option<String>, Option<String>) + Send + 'static,
    {
        CallbackTarget::Direct(Box::new(f))
    }

    /// Named target using `OnTinyPasteSucceeded` / `OnTinyPasteFailed`
    pub fn named(receiver: Arc<dyn MessageReceiver>) -> Self {
        Self::named_with(receiver, DEFAULT_SUCCESS_METHOD, DEFAULT_FAILURE_METHOD)
    }

    /// Named target with explicit method names
    pub fn named_with(
        receiver: Arc<dyn MessageReceiver>,
        success: impl Into<String>,
        failure: impl Into<String>,
    ) -> Self {
        CallbackTarget::Named {
            receiver,
            success: success.into(),
            failure: failure.into(),
        }
    }

    /// Resolves a variadic callback argument list
    ///
    /// - a receiver first: named target, with the method names taken from the
    ///   second and third arguments when they are names, else the defaults
    /// - a handler first: direct target
    /// - anything else, including no arguments: default sink
    pub fn resolve(args: Vec<CallbackArg>) -> Self {
        let mut args = args.into_iter();
        match args.next() {
            Some(CallbackArg::Receiver(receiver)) => {
                let mut name_or = |default: &str| match args.next() {
                    Some(CallbackArg::Method(name)) => name,
                    _ => default.to_string(),
                };
                let success = name_or(DEFAULT_SUCCESS_METHOD);
                let failure = name_or(DEFAULT_FAILURE_METHOD);
                CallbackTarget::Named {
                    receiver,
                    success,
                    failure,
                }
            }
            Some(CallbackArg::Handler(handler)) => CallbackTarget::Direct(handler),
            Some(other) => {
                debug!("Unusable callback argument {:?}, using default sink", other);
                CallbackTarget::Default
            }
            None => CallbackTarget::Default,
        }
    }

    /// Delivers the settled response; consumes the target so it runs once
    pub fn deliver(self, response: PasteResponse) {
        match self {
            CallbackTarget::Direct(handler) => {
                let (body, error) = response.into_parts();
                handler(body, error);
            }
            CallbackTarget::Named {
                receiver,
                success,
                failure,
            } => {
                let (method, payload) = match &response {
                    PasteResponse::Succeeded(body) => (success.as_str(), body.as_str()),
                    PasteResponse::Failed(error) => (failure.as_str(), error.as_str()),
                };
                if !receiver.receive(method, payload) {
                    debug!("Receiver does not handle {}, message dropped", method);
                }
            }
            CallbackTarget::Default => {
                if let PasteResponse::Failed(error) = response {
                    warn!("{}", error);
                }
            }
        }
    }
}

impl From<Vec<CallbackArg>> for CallbackTarget {
    fn from(args: Vec<CallbackArg>) -> Self {
        Self::resolve(args)
    }
}

impl fmt::Debug for CallbackTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallbackTarget::Direct(_) => f.write_str("Direct"),
            CallbackTarget::Named {
                success, failure, ..
            } => f
                .debug_struct("Named")
                .field("success", success)
                .field("failure", failure)
                .finish(),
            CallbackTarget::Default => f.write_str("Default"),
        }
    }
}
