//! Outbound mail value objects.

use serde::{Deserialize, Serialize};

/// A message handed to the mail delivery engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    /// Recipient address
    pub to: String,
    pub subject: String,
    /// HTML body
    pub html_body: String,
}

impl OutboundMessage {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, html_body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            html_body: html_body.into(),
        }
    }
}

/// Proof of delivery returned by the transport that accepted the message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// Name of the transport that accepted the message
    pub transport: String,

    /// Message identifier assigned by the sender, if any
    pub message_id: Option<String>,

    /// Server response text
    pub response: String,
}

impl DeliveryReceipt {
    pub fn new(transport: impl Into<String>, message_id: Option<String>, response: impl Into<String>) -> Self {
        Self {
            transport: transport.into(),
            message_id,
            response: response.into(),
        }
    }
}
