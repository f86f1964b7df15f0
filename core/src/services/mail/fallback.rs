//! Sequential fallback over an ordered list of mail transports

use async_trait::async_trait;
use std::time::Duration;
use tracing::{error, info, warn};

use atom_shared::masking::mask_email;

use crate::domain::value_objects::{DeliveryReceipt, OutboundMessage};
use crate::errors::MailError;

use super::traits::{MailServiceTrait, MailTransport};

/// Mail service trying each transport in order until one accepts the message
///
/// Each transport is tried at most once per message; there is no backoff and
/// no queueing. When every transport fails, the error of the last one is
/// returned.
pub struct FallbackMailer {
    transports: Vec<Box<dyn MailTransport>>,
    /// Upper bound for a single attempt; `None` waits indefinitely
    attempt_timeout: Option<Duration>,
}

impl FallbackMailer {
    /// Create a new fallback mailer
    ///
    /// # Arguments
    ///
    /// * `transports` - Transports in the order they are attempted
    /// * `attempt_timeout` - Upper bound for a single attempt
    pub fn new(transports: Vec<Box<dyn MailTransport>>, attempt_timeout: Option<Duration>) -> Self {
        info!(
            "Initializing fallback mailer with transports: [{}]",
            transports
                .iter()
                .map(|t| t.name())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Self {
            transports,
            attempt_timeout,
        }
    }

    /// Names of the configured transports, in attempt order
    pub fn transport_names(&self) -> Vec<&str> {
        self.transports.iter().map(|t| t.name()).collect()
    }

    async fn attempt(
        &self,
        transport: &dyn MailTransport,
        message: &OutboundMessage,
    ) -> Result<DeliveryReceipt, MailError> {
        match self.attempt_timeout {
            Some(limit) => tokio::time::timeout(limit, transport.send(message))
                .await
                .unwrap_or_else(|_| {
                    Err(MailError::Timeout {
                        transport: transport.name().to_string(),
                        seconds: limit.as_secs(),
                    })
                }),
            None => transport.send(message).await,
        }
    }

    /// Deliver a message through the first transport that accepts it
    pub async fn deliver(&self, message: &OutboundMessage) -> Result<DeliveryReceipt, MailError> {
        let mut last_error = None;

        for transport in &self.transports {
            info!(
                transport = transport.name(),
                to = %mask_email(&message.to),
                "Attempting mail delivery"
            );

            match self.attempt(transport.as_ref(), message).await {
                Ok(receipt) => {
                    info!(transport = transport.name(), "Mail delivered");
                    return Ok(receipt);
                }
                Err(e) => {
                    warn!(transport = transport.name(), "Mail delivery failed: {}", e);
                    last_error = Some(e);
                }
            }
        }

        error!(to = %mask_email(&message.to), "All mail transports failed");
        Err(last_error.unwrap_or(MailError::NoTransports))
    }
}

#[async_trait]
impl MailServiceTrait for FallbackMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<DeliveryReceipt, MailError> {
        self.deliver(message).await
    }
}
