//! Transport that only logs, for development without SMTP credentials

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use atom_core::domain::value_objects::{DeliveryReceipt, OutboundMessage};
use atom_core::errors::MailError;
use atom_core::services::MailTransport;
use atom_shared::masking::mask_email;

/// Accepts every message and logs its subject and masked recipient.
///
/// The body is never logged since it carries the one-time code.
#[derive(Debug, Default, Clone)]
pub struct LogMailTransport;

impl LogMailTransport {
    pub const NAME: &'static str = "log";

    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MailTransport for LogMailTransport {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn send(&self, message: &OutboundMessage) -> Result<DeliveryReceipt, MailError> {
        let message_id = format!("<{}@localhost>", Uuid::new_v4());

        info!(
            to = %mask_email(&message.to),
            subject = %message.subject,
            message_id = %message_id,
            "[DEV MODE] Mail not sent, SMTP is not configured"
        );

        Ok(DeliveryReceipt::new(Self::NAME, Some(message_id), "logged"))
    }
}
