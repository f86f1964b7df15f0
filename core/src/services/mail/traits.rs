//! Traits for mail transport integration

use async_trait::async_trait;

use crate::domain::value_objects::{DeliveryReceipt, OutboundMessage};
use crate::errors::MailError;

/// A single way of delivering a message (one SMTP endpoint, a log sink, ...)
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Name used in logs and delivery receipts
    fn name(&self) -> &str;

    /// Attempt to deliver the message once
    async fn send(&self, message: &OutboundMessage) -> Result<DeliveryReceipt, MailError>;
}

/// Mail delivery as seen by business services
#[async_trait]
pub trait MailServiceTrait: Send + Sync {
    /// Deliver a message, failing only when no transport accepted it
    async fn send(&self, message: &OutboundMessage) -> Result<DeliveryReceipt, MailError>;
}
