use alerter_core::notify::entity::{AlertEvent, NotifyReceiver};
use serde::{Deserialize, Serialize};

use crate::mention::parse_mention_list;

/// # Summary
/// Request body accepted by the WeWork robot webhook.
///
/// # Invariants
/// - `msgtype` is `"markdown"` or `"text"` and always matches the payload field present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "msgtype", rename_all = "lowercase")]
pub enum OutboundMessage {
    /// Primary alert message carrying the rendered template.
    Markdown { markdown: MarkdownBody },
    /// Follow-up message that @-mentions people.
    Text { text: TextBody },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkdownBody {
    pub content: String,
}

/// # Summary
/// Plain text payload; both mention lists are always serialized, empty when unused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBody {
    pub content: String,
    #[serde(rename = "mentioned_list")]
    pub mentioned_user_ids: Vec<String>,
    #[serde(rename = "mentioned_mobile_list")]
    pub mentioned_mobiles: Vec<String>,
}

impl OutboundMessage {
    /// # Summary
    /// Builds the primary markdown message.
    pub fn markdown(content: impl Into<String>) -> Self {
        OutboundMessage::Markdown {
            markdown: MarkdownBody {
                content: content.into(),
            },
        }
    }

    /// # Summary
    /// Builds the follow-up mention message for a receiver, if one is needed.
    ///
    /// # Logic
    /// 1. Returns `None` when both phone numbers and user ids are blank.
    /// 2. Content is the fixed target/detail text of the alert.
    /// 3. Each mention list is parsed from its source field; a blank field yields an empty list.
    ///
    /// # Arguments
    /// * `receiver` - The receiver holding the raw mention lists.
    /// * `alert` - The alert whose target and content are quoted.
    ///
    /// # Returns
    /// * `Some(OutboundMessage::Text)` when at least one mention list is present.
    pub fn mention(receiver: &NotifyReceiver, alert: &AlertEvent) -> Option<Self> {
        if !receiver.needs_mention() {
            return None;
        }

        Some(OutboundMessage::Text {
            text: TextBody {
                content: format!("Alert target: {}\nDetail: {}", alert.target, alert.content),
                mentioned_user_ids: parse_mention_list(&receiver.im_user_ids),
                mentioned_mobiles: parse_mention_list(&receiver.phone_numbers),
            },
        })
    }

    /// Wire value of the `msgtype` discriminator.
    pub fn kind(&self) -> &'static str {
        match self {
            OutboundMessage::Markdown { .. } => "markdown",
            OutboundMessage::Text { .. } => "text",
        }
    }
}

/// # Summary
/// Response envelope returned by the webhook with every HTTP 200.
///
/// # Invariants
/// - `error_code == 0` means the message was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WebhookEnvelope {
    #[serde(rename = "errcode")]
    pub error_code: i64,
    #[serde(rename = "errmsg", default)]
    pub error_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alert() -> AlertEvent {
        AlertEvent {
            target: "mysql-prod.cpu".to_string(),
            content: "CPU usage 97%".to_string(),
        }
    }

    #[test]
    fn test_markdown_wire_shape() {
        let message = OutboundMessage::markdown("**disk full**");
        assert_eq!(message.kind(), "markdown");
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({ "msgtype": "markdown", "markdown": { "content": "**disk full**" } })
        );
    }

    #[test]
    fn test_kind_matches_wire_msgtype() {
        let receiver = NotifyReceiver {
            webhook_token: "abc".to_string(),
            phone_numbers: "138001".to_string(),
            im_user_ids: String::new(),
        };
        let messages = [
            OutboundMessage::markdown("ok"),
            OutboundMessage::mention(&receiver, &alert()).unwrap(),
        ];
        for message in messages {
            assert_eq!(serde_json::to_value(&message).unwrap()["msgtype"], message.kind());
        }
    }

    #[test]
    fn test_mention_keeps_interior_empty_token_on_wire() {
        let receiver = NotifyReceiver {
            webhook_token: "abc".to_string(),
            phone_numbers: "138001,,138002,".to_string(),
            im_user_ids: String::new(),
        };
        let message = OutboundMessage::mention(&receiver, &alert()).unwrap();
        assert_eq!(
            serde_json::to_value(&message).unwrap()["text"]["mentioned_mobile_list"],
            json!(["138001", "", "138002"])
        );
    }

    #[test]
    fn test_no_mention_for_blank_receiver() {
        let receiver = NotifyReceiver {
            webhook_token: "abc".to_string(),
            phone_numbers: " ".to_string(),
            im_user_ids: String::new(),
        };
        assert!(OutboundMessage::mention(&receiver, &alert()).is_none());
    }

    #[test]
    fn test_mention_phones_only_keeps_empty_user_list() {
        let receiver = NotifyReceiver {
            webhook_token: "abc".to_string(),
            phone_numbers: "138001".to_string(),
            im_user_ids: String::new(),
        };
        let message = OutboundMessage::mention(&receiver, &alert()).unwrap();
        assert_eq!(message.kind(), "text");
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "msgtype": "text",
                "text": {
                    "content": "Alert target: mysql-prod.cpu\nDetail: CPU usage 97%",
                    "mentioned_list": [],
                    "mentioned_mobile_list": ["138001"]
                }
            })
        );
    }

    #[test]
    fn test_mention_both_lists() {
        let receiver = NotifyReceiver {
            webhook_token: "abc".to_string(),
            phone_numbers: "138001, 138002".to_string(),
            im_user_ids: "zhangsan,lisi".to_string(),
        };
        match OutboundMessage::mention(&receiver, &alert()).unwrap() {
            OutboundMessage::Text { text } => {
                assert_eq!(text.mentioned_mobiles, vec!["138001", "138002"]);
                assert_eq!(text.mentioned_user_ids, vec!["zhangsan", "lisi"]);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_envelope_without_errmsg() {
        let envelope: WebhookEnvelope = serde_json::from_str(r#"{"errcode":93000}"#).unwrap();
        assert_eq!(envelope.error_code, 93000);
        assert!(envelope.error_message.is_empty());
    }
}
