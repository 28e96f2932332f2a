/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Client for the tny.cz paste API
//!
//! Every wrapper builds its form, resolves the endpoint and spawns one tokio
//! task performing the POST. The outcome reaches the supplied
//! [`CallbackTarget`] exactly once; nothing is returned to the caller except a
//! [`PendingRequest`] that can be awaited.
//!
//! # Example
//! ```ignore
//! use tinypaste_client::prelude::*;
//!
//! let client = TinyPasteClient::new(Config::new())?;
//! client.set_username("me");
//! client.set_password("secret");
//!
//! client
//!     .list(CallbackTarget::direct(|body, error| match (body, error) {
//!         (Some(body), _) => println!("{body}"),
//!         (_, Some(error)) => eprintln!("{error}"),
//!         _ => unreachable!(),
//!     }))
//!     .wait()
//!     .await;
//! ```

use crate::application::callback::CallbackTarget;
use crate::application::config::{Config, Credentials};
use crate::error::AppError;
use crate::model::auth::CredentialComposer;
use crate::model::http::{ReqwestTransport, Transport};
use crate::model::requests::{ApiMethod, PasteForm, PasteRequest, ResponseFormat};
use crate::model::responses::PasteResponse;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error};

/// Mutable, client-wide settings
#[derive(Debug)]
struct Settings {
    credentials: Credentials,
    response_format: ResponseFormat,
    composer: CredentialComposer,
}

/// Handle to an in-flight request
///
/// Dropping the handle detaches the request; it keeps running and still
/// delivers its callback. There is no way to cancel it. A handle without a
/// task belongs to a request that settled before it could be spawned.
#[derive(Debug)]
pub struct PendingRequest {
    handle: Option<JoinHandle<()>>,
}

impl PendingRequest {
    /// Waits until the callback has been delivered
    pub async fn wait(self) {
        if let Some(handle) = self.handle
            && let Err(e) = handle.await
        {
            error!("Paste request task failed: {}", e);
        }
    }

    /// Whether the request has settled and its callback has run
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }
}

/// Paste API client
pub struct TinyPasteClient {
    settings: Mutex<Settings>,
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl TinyPasteClient {
    /// Creates a client backed by reqwest
    ///
    /// # Arguments
    /// * `config` - Credentials, base URL and response format
    ///
    /// # Returns
    /// * `Ok(TinyPasteClient)` - Ready to use client
    /// * `Err(AppError)` - If the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let transport = ReqwestTransport::new(&config.rest_api)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client from the environment, see [`Config::new`]
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new())
    }

    /// Creates a client on top of a custom transport
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        Self {
            settings: Mutex::new(Settings {
                credentials: config.credentials,
                response_format: config.response_format,
                composer: CredentialComposer::new(),
            }),
            base_url: config.rest_api.base_url,
            transport,
        }
    }

    fn settings(&self) -> MutexGuard<'_, Settings> {
        self.settings.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current username
    #[must_use]
    pub fn username(&self) -> String {
        self.settings().credentials.username.clone()
    }

    /// Sets the username used for authentication
    pub fn set_username(&self, username: impl Into<String>) {
        self.settings().credentials.username = username.into();
    }

    /// Sets the password used for authentication
    ///
    /// The memoized hash is recomputed lazily on the next authenticated call.
    pub fn set_password(&self, password: impl Into<String>) {
        self.settings().credentials.password = password.into();
    }

    /// Current response format
    #[must_use]
    pub fn response_format(&self) -> ResponseFormat {
        self.settings().response_format
    }

    /// Sets the response format for subsequent calls
    pub fn set_response_format(&self, format: ResponseFormat) {
        self.settings().response_format = format;
    }

    /// Base URL of the API
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Composes `username:md5hex(password)`, or `""` when credentials are incomplete
    #[must_use]
    pub fn compose_credentials(&self) -> String {
        let mut settings = self.settings();
        let Settings {
            credentials,
            composer,
            ..
        } = &mut *settings;
        composer.compose(&credentials.username, &credentials.password)
    }

    /// Number of password hashes computed so far
    #[must_use]
    pub fn hash_count(&self) -> u64 {
        self.settings().composer.hash_count()
    }

    /// Endpoint URL for `method` with the current response format
    #[must_use]
    pub fn endpoint(&self, method: ApiMethod) -> String {
        PasteRequest::new(method, PasteForm::new()).endpoint(&self.base_url, self.response_format())
    }

    /// Creates a paste
    ///
    /// `title` is sent only when non-empty; authentication only when
    /// credentials are configured.
    pub fn create(&self, body: &str, title: &str, callback: CallbackTarget) -> PendingRequest {
        let auth = self.compose_credentials();
        self.raw(PasteRequest::create(body, title, &auth), callback)
    }

    /// Fetches a paste; never authenticated
    pub fn get(&self, id: &str, callback: CallbackTarget) -> PendingRequest {
        self.raw(PasteRequest::get(id), callback)
    }

    /// Lists the pastes of the configured user
    ///
    /// The `authenticate` field is always sent, empty when no credentials
    /// are configured.
    pub fn list(&self, callback: CallbackTarget) -> PendingRequest {
        let auth = self.compose_credentials();
        self.raw(PasteRequest::list(&auth), callback)
    }

    /// Deletes a paste
    pub fn delete(&self, id: &str, callback: CallbackTarget) -> PendingRequest {
        let auth = self.compose_credentials();
        self.raw(PasteRequest::delete(id, &auth), callback)
    }

    /// Edits a paste; empty `body` or `title` are left unchanged
    pub fn edit(&self, id: &str, body: &str, title: &str, callback: CallbackTarget) -> PendingRequest {
        let auth = self.compose_credentials();
        self.raw(PasteRequest::edit(id, body, title, &auth), callback)
    }

    /// Dispatches an arbitrary request
    ///
    /// Use this for API parameters the wrappers do not cover. The endpoint is
    /// resolved now, with the current response format; the request itself
    /// runs on a spawned task.
    ///
    /// Outside a tokio runtime nothing is sent and the callback receives the
    /// failure immediately.
    pub fn raw(&self, request: PasteRequest, callback: CallbackTarget) -> PendingRequest {
        let url = request.endpoint(&self.base_url, self.response_format());

        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                let error = AppError::Transport(format!("no tokio runtime available: {e}"));
                callback.deliver(PasteResponse::Failed(error.to_string()));
                return PendingRequest { handle: None };
            }
        };

        let transport = Arc::clone(&self.transport);
        debug!("Dispatching {} to {}", request.method, url);

        let handle = runtime.spawn(async move {
            let response = send(transport.as_ref(), &url, &request.form).await;
            callback.deliver(response);
        });

        PendingRequest {
            handle: Some(handle),
        }
    }

    /// Performs a request and returns its settled response
    pub async fn execute(&self, request: PasteRequest) -> PasteResponse {
        let url = request.endpoint(&self.base_url, self.response_format());
        debug!("Executing {} on {}", request.method, url);
        send(self.transport.as_ref(), &url, &request.form).await
    }
}

impl std::fmt::Debug for TinyPasteClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TinyPasteClient")
            .field("base_url", &self.base_url)
            .field("response_format", &self.response_format())
            .finish()
    }
}

async fn send(transport: &dyn Transport, url: &str, form: &PasteForm) -> PasteResponse {
    PasteResponse::from(transport.post_form(url, form).await)
}
