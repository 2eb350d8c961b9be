//! Enterprise WeChat (WeWork) group robot notifications.
//!
//! [`WeWorkNotifyHandler`] posts a rendered alert as a markdown message to the
//! receiver's robot webhook. When the receiver lists phone numbers or user ids,
//! a second plain-text message @-mentioning them follows on a best-effort basis.

pub mod client;
pub mod mention;
pub mod message;
pub mod outcome;
pub mod wework;

pub use client::{ClientError, HttpWebhookClient, WebhookReply, WebhookTransport};
pub use message::{OutboundMessage, WebhookEnvelope};
pub use outcome::DeliveryOutcome;
pub use wework::WeWorkNotifyHandler;
