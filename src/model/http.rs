/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::config::RestApiConfig;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::requests::PasteForm;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Sends a URL-encoded form and returns the response text
///
/// This is the seam between the dispatcher and the network. Implementations
/// must settle every call exactly once and must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POSTs `form` to `url`
    ///
    /// # Returns
    /// * `Ok(String)` - Response body of a successful (2xx) response
    /// * `Err(AppError)` - Connection failure or non-success status
    async fn post_form(&self, url: &str, form: &PasteForm) -> Result<String, AppError>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a transport from the REST configuration
    ///
    /// No timeout is applied unless `config.timeout` is set.
    pub fn new(config: &RestApiConfig) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wraps an already configured reqwest client
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_form(&self, url: &str, form: &PasteForm) -> Result<String, AppError> {
        debug!("POST {} ({} fields)", url, form.len());

        let response = self.client.post(url).form(form).send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Request failed with status {}: {}", status, body);
            return Err(AppError::Unexpected(status));
        }

        Ok(response.text().await?)
    }
}
