use alerter_core::config::WeWorkConfig;
use alerter_core::notify::error::NotifyError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::message::{OutboundMessage, WebhookEnvelope};

/// # Summary
/// Raw result of one webhook POST.
///
/// # Invariants
/// - `envelope` is `Err` with the decode error when the body is not a valid envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookReply {
    pub status: u16,
    pub envelope: Result<WebhookEnvelope, String>,
}

/// Errors raised before a response status is available.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, TLS or timeout failure
    #[error("{0}")]
    Network(String),

    /// The request could not be built (body encoding or URL)
    #[error("Invalid request: {0}")]
    Request(String),
}

/// # Summary
/// Sends one JSON message to a webhook URL.
///
/// # Invariants
/// - Implementations must be `Send` and `Sync`; each call is independent.
/// - No retry happens inside `post`.
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    async fn post(&self, url: &str, message: &OutboundMessage)
        -> Result<WebhookReply, ClientError>;
}

/// # Summary
/// `reqwest` backed webhook client.
///
/// # Invariants
/// - The request timeout set at construction is the only bound on a call's duration.
#[derive(Clone)]
pub struct HttpWebhookClient {
    client: Client,
}

impl HttpWebhookClient {
    /// # Summary
    /// Creates a client with the given request timeout.
    ///
    /// # Logic
    /// 1. Installs the `ring` crypto provider for rustls if none is installed yet.
    /// 2. Builds the `reqwest` client.
    ///
    /// # Returns
    /// * `Err(NotifyError::Config)` if the client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, NotifyError> {
        if rustls::crypto::ring::default_provider()
            .install_default()
            .is_err()
        {
            debug!("rustls crypto provider already installed");
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotifyError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// # Summary
    /// Creates a client using the timeout from the WeWork configuration.
    ///
    /// # Arguments
    /// * `config` - Supplies `timeout_secs`.
    ///
    /// # Returns
    /// * `Err(NotifyError::Config)` if the client cannot be built.
    pub fn from_config(config: &WeWorkConfig) -> Result<Self, NotifyError> {
        Self::new(Duration::from_secs(config.timeout_secs))
    }
}

#[async_trait]
impl WebhookTransport for HttpWebhookClient {
    /// # Summary
    /// POSTs `message` as JSON and decodes the response envelope.
    ///
    /// # Logic
    /// 1. Sends the message as a JSON body via `reqwest`.
    /// 2. Records the status and tries to decode the body as a [`WebhookEnvelope`].
    ///
    /// # Returns
    /// * `Ok(WebhookReply)` whenever a response arrives, whatever its status.
    /// * `Err(ClientError)` when the request cannot be built or sent. The URL (which
    ///   holds the webhook key) is stripped from the error.
    async fn post(
        &self,
        url: &str,
        message: &OutboundMessage,
    ) -> Result<WebhookReply, ClientError> {
        let response = self
            .client
            .post(url)
            .json(message)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status().as_u16();
        let envelope = response
            .json::<WebhookEnvelope>()
            .await
            .map_err(|e| e.without_url().to_string());

        Ok(WebhookReply { status, envelope })
    }
}

/// Builder failures (body encoding, bad URL) are not network problems.
fn request_error(e: reqwest::Error) -> ClientError {
    let is_builder = e.is_builder();
    let cause = e.without_url().to_string();
    if is_builder {
        ClientError::Request(cause)
    } else {
        ClientError::Network(cause)
    }
}
