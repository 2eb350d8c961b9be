use alerter_core::config::WeWorkConfig;
use alerter_core::notify::entity::{AlertEvent, NotifyReceiver};
use alerter_core::notify::error::NotifyError;
use alerter_core::notify::port::{AlertNotifyHandler, NoticeRenderer};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::client::{ClientError, HttpWebhookClient, WebhookTransport};
use crate::message::OutboundMessage;
use crate::outcome::{DeliveryOutcome, interpret};

/// Prefix of every error raised by this channel.
pub const WEWORK_CHANNEL_TAG: &str = "WeWork Notify Error";

/// Notification channel type code of the WeWork robot.
pub const WEWORK_CHANNEL_TYPE: u8 = 4;

/// # Summary
/// Delivers alerts to an Enterprise WeChat group robot.
///
/// # Invariants
/// - Holds no per-call state; one instance may serve concurrent `send` calls.
/// - The primary and mention messages of one call are posted strictly one after the other.
pub struct WeWorkNotifyHandler {
    /// Base URL; the receiver's webhook key is appended to it.
    webhook_url: String,
    transport: Arc<dyn WebhookTransport>,
}

impl WeWorkNotifyHandler {
    /// # Summary
    /// Creates a handler over any [`WebhookTransport`].
    ///
    /// # Arguments
    /// * `webhook_url` - Base URL the receiver's webhook key is appended to.
    /// * `transport` - The client that performs the POSTs.
    pub fn new(webhook_url: impl Into<String>, transport: Arc<dyn WebhookTransport>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            transport,
        }
    }

    /// # Summary
    /// Creates a handler posting through [`HttpWebhookClient`].
    ///
    /// # Returns
    /// * `Err(NotifyError::Config)` if the HTTP client cannot be built.
    pub fn from_config(config: &WeWorkConfig) -> Result<Self, NotifyError> {
        let client = HttpWebhookClient::from_config(config)?;
        Ok(Self::new(config.webhook_url.clone(), Arc::new(client)))
    }

    /// # Summary
    /// Renders the alert with `renderer`, then sends it like [`AlertNotifyHandler::send`].
    ///
    /// # Returns
    /// * `Err(NotifyError::Unexpected)` if rendering fails; nothing is posted in that case.
    pub async fn send_rendered(
        &self,
        receiver: &NotifyReceiver,
        renderer: &dyn NoticeRenderer,
        alert: &AlertEvent,
    ) -> Result<(), NotifyError> {
        let rendered = renderer.render(alert).map_err(|cause| NotifyError::Unexpected {
            channel: WEWORK_CHANNEL_TAG,
            cause,
        })?;
        self.send(receiver, &rendered, alert).await
    }

    fn delivery_url(&self, webhook_token: &str) -> String {
        format!("{}{}", self.webhook_url, webhook_token)
    }

    /// # Summary
    /// Posts the mention message; never fails the caller.
    ///
    /// # Logic
    /// The outcome only decides the log level.
    async fn send_mention_best_effort(&self, url: &str, message: &OutboundMessage) {
        let msgtype = message.kind();
        match self.transport.post(url, message).await {
            Ok(reply) => match interpret(&reply) {
                DeliveryOutcome::Delivered => {
                    debug!(msgtype, "Send WeWork mention message success")
                }
                outcome => warn!(msgtype, ?outcome, "Send WeWork mention message failed, ignored"),
            },
            Err(e) => warn!(msgtype, error = %e, "Send WeWork mention message failed, ignored"),
        }
    }
}

/// Folds a client error into the channel error.
fn client_error(e: ClientError) -> NotifyError {
    match e {
        ClientError::Network(cause) => NotifyError::Transport {
            channel: WEWORK_CHANNEL_TAG,
            cause,
        },
        ClientError::Request(_) => NotifyError::Unexpected {
            channel: WEWORK_CHANNEL_TAG,
            cause: e.to_string(),
        },
    }
}

#[async_trait]
impl AlertNotifyHandler for WeWorkNotifyHandler {
    fn channel_type(&self) -> u8 {
        WEWORK_CHANNEL_TYPE
    }

    /// # Summary
    /// Sends the rendered alert, then the optional mention message.
    ///
    /// # Logic
    /// 1. Posts the rendered text as a markdown message to `webhook_url + webhook_token`.
    /// 2. A transport failure or rejection ends the call with an error; nothing else is posted.
    /// 3. On delivery, posts the mention message when the receiver lists phones or user ids.
    ///    Its result never changes the return value.
    ///
    /// # Returns
    /// * `Ok(())` once the primary message is delivered.
    /// * `Err(NotifyError)` tagged with [`WEWORK_CHANNEL_TAG`] otherwise.
    async fn send(
        &self,
        receiver: &NotifyReceiver,
        rendered: &str,
        alert: &AlertEvent,
    ) -> Result<(), NotifyError> {
        let url = self.delivery_url(&receiver.webhook_token);
        let primary = OutboundMessage::markdown(rendered);

        let reply = self
            .transport
            .post(&url, &primary)
            .await
            .map_err(client_error)?;

        let msgtype = primary.kind();
        match interpret(&reply) {
            DeliveryOutcome::Delivered => debug!(msgtype, "Send WeWork webhook success"),
            DeliveryOutcome::Rejected(reason) => {
                warn!(msgtype, reason = %reason, "Send WeWork webhook rejected");
                return Err(NotifyError::Rejected {
                    channel: WEWORK_CHANNEL_TAG,
                    reason,
                });
            }
            DeliveryOutcome::TransportFailed(cause) => {
                warn!(msgtype, cause = %cause, "Send WeWork webhook failed");
                return Err(NotifyError::Transport {
                    channel: WEWORK_CHANNEL_TAG,
                    cause,
                });
            }
        }

        if let Some(mention) = OutboundMessage::mention(receiver, alert) {
            self.send_mention_best_effort(&url, &mention).await;
        }

        Ok(())
    }
}
