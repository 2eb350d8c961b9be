use crate::client::WebhookReply;

/// Classification of a single webhook POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// HTTP 200 and `errcode == 0`
    Delivered,
    /// HTTP 200 but the service refused the message; holds `errmsg`
    Rejected(String),
    /// Non-200 status or unreadable body; holds the status or cause
    TransportFailed(String),
}

/// # Summary
/// Classifies a webhook reply.
///
/// # Logic
/// 1. Any status other than 200 is a transport failure, whatever the body says.
/// 2. A 200 whose body is not an envelope is a transport failure as well.
/// 3. Otherwise `errcode` decides between delivered and rejected.
pub fn interpret(reply: &WebhookReply) -> DeliveryOutcome {
    if reply.status != 200 {
        return DeliveryOutcome::TransportFailed(format!("Http StatusCode {}", reply.status));
    }

    match &reply.envelope {
        Ok(envelope) if envelope.error_code == 0 => DeliveryOutcome::Delivered,
        Ok(envelope) => DeliveryOutcome::Rejected(envelope.error_message.clone()),
        Err(cause) => {
            DeliveryOutcome::TransportFailed(format!("Malformed response body: {}", cause))
        }
    }
}
