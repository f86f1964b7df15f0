//! Mailer assembly from configuration

use std::time::Duration;
use tracing::{info, warn};

use atom_core::services::{FallbackMailer, MailTransport};
use atom_shared::config::MailConfig;

use super::{LogMailTransport, SmtpMailTransport};

/// Build the application mailer from configuration
///
/// With SMTP credentials present, one transport is created per configured
/// endpoint, in configuration order. Endpoints that cannot be set up are
/// skipped with a warning. Without credentials (or if no endpoint could be
/// built) messages go to the log transport.
pub fn create_mailer(config: &MailConfig) -> FallbackMailer {
    let mut transports: Vec<Box<dyn MailTransport>> = Vec::new();

    if config.is_configured() {
        for endpoint in &config.transports {
            match SmtpMailTransport::new(endpoint, config) {
                Ok(transport) => transports.push(Box::new(transport)),
                Err(e) => warn!(endpoint = %endpoint.label(), error = %e, "Skipping SMTP endpoint"),
            }
        }
    } else {
        info!("SMTP credentials not configured, using log mail transport");
    }

    if transports.is_empty() {
        transports.push(Box::new(LogMailTransport::new()));
    }

    let attempt_timeout = (config.attempt_timeout_secs > 0)
        .then(|| Duration::from_secs(config.attempt_timeout_secs));

    FallbackMailer::new(transports, attempt_timeout)
}
