use crate::domain::model::ContactMessage;
use chrono::{DateTime, Utc};

pub const ACKNOWLEDGMENT: &str = "Message sent successfully! I'll get back to you soon.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactAcknowledgment {
    pub message: &'static str,
    pub received_at: DateTime<Utc>,
}

/// Accepts contact form submissions. Nothing is validated, stored, or sent:
/// every submission is acknowledged and then dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactFormHandler;

impl ContactFormHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn submit(&self, message: ContactMessage) -> ContactAcknowledgment {
        // 只記錄長度，不記錄內容
        tracing::info!(
            name_len = message.name.len(),
            email_len = message.email.len(),
            body_len = message.body.len(),
            "📨 Contact form submitted"
        );

        ContactAcknowledgment {
            message: ACKNOWLEDGMENT,
            received_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_submission_is_acknowledged() {
        let ack = ContactFormHandler::new().submit(ContactMessage::default());
        assert_eq!(ack.message, ACKNOWLEDGMENT);
    }

    #[test]
    fn test_malformed_email_is_still_acknowledged() {
        let ack = ContactFormHandler::new().submit(ContactMessage {
            name: "Sam".to_string(),
            email: "not-an-email".to_string(),
            body: "Hello!".to_string(),
        });
        assert_eq!(ack.message, "Message sent successfully! I'll get back to you soon.");
    }
}
