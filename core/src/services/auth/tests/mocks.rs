//! Mock implementations for testing the authentication service

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::value_objects::{DeliveryReceipt, OutboundMessage};
use crate::errors::MailError;
use crate::services::mail::MailServiceTrait;

/// Mail service recording every message it is asked to send
pub struct RecordingMailer {
    pub sent: Mutex<Vec<OutboundMessage>>,
    pub should_fail: bool,
}

impl RecordingMailer {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            should_fail,
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Pull the six digit code out of the last message body
    pub fn last_code(&self) -> Option<String> {
        let sent = self.sent.lock().unwrap();
        let body = &sent.last()?.html_body;
        body.split(|c: char| !c.is_ascii_digit())
            .find(|chunk| chunk.len() == 6)
            .map(str::to_string)
    }
}

#[async_trait]
impl MailServiceTrait for RecordingMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<DeliveryReceipt, MailError> {
        if self.should_fail {
            return Err(MailError::transport("smtp.test:25 (plain)", "connection refused"));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(DeliveryReceipt::new("recording", None, "250 OK"))
    }
}
