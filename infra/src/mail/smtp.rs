//! SMTP transport built on lettre

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use atom_core::domain::value_objects::{DeliveryReceipt, OutboundMessage};
use atom_core::errors::MailError;
use atom_core::services::MailTransport;
use atom_shared::config::{MailConfig, SmtpEndpoint, SmtpSecurity};

use crate::InfrastructureError;

/// One SMTP endpoint (host, port and connection security)
pub struct SmtpMailTransport {
    name: String,
    sender: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailTransport {
    /// Build a transport for `endpoint` using the credentials and sender in `config`
    pub fn new(endpoint: &SmtpEndpoint, config: &MailConfig) -> Result<Self, InfrastructureError> {
        let sender = config
            .sender()
            .ok_or_else(|| InfrastructureError::Config("SMTP sender address is not set".to_string()))?
            .parse::<Mailbox>()
            .map_err(|e| InfrastructureError::Config(format!("Invalid sender address: {}", e)))?;

        let builder = match endpoint.security {
            SmtpSecurity::Implicit => AsyncSmtpTransport::<Tokio1Executor>::relay(&endpoint.host),
            SmtpSecurity::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&endpoint.host)
            }
            SmtpSecurity::Plain => Ok(AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(
                &endpoint.host,
            )),
        }
        .map_err(|e| InfrastructureError::Mail(format!("{}: {}", endpoint.label(), e)))?;

        let mut builder = builder.port(endpoint.port);

        if config.attempt_timeout_secs > 0 {
            builder = builder.timeout(Some(Duration::from_secs(config.attempt_timeout_secs)));
        }

        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_pass) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            name: endpoint.label(),
            sender,
            transport: builder.build(),
        })
    }

    fn message_id(&self) -> String {
        format!("<{}@{}>", Uuid::new_v4(), self.sender.email.domain())
    }

    fn build_message(&self, message: &OutboundMessage, message_id: &str) -> Result<Message, MailError> {
        let to = message.to.parse::<Mailbox>().map_err(|e| MailError::Build {
            message: format!("Invalid recipient: {}", e),
        })?;

        Message::builder()
            .from(self.sender.clone())
            .to(to)
            .subject(message.subject.clone())
            .message_id(Some(message_id.to_string()))
            .header(ContentType::TEXT_HTML)
            .body(message.html_body.clone())
            .map_err(|e| MailError::Build {
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    fn name(&self) -> &str {
        &self.name
    }

    async fn send(&self, message: &OutboundMessage) -> Result<DeliveryReceipt, MailError> {
        let message_id = self.message_id();
        let email = self.build_message(message, &message_id)?;

        let response = self
            .transport
            .send(email)
            .await
            .map_err(|e| MailError::transport(self.name.clone(), e))?;

        let text = response.message().collect::<Vec<_>>().join(" ");
        debug!(transport = %self.name, code = %response.code(), "SMTP server accepted message");

        Ok(DeliveryReceipt::new(
            self.name.clone(),
            Some(message_id),
            format!("{} {}", response.code(), text).trim().to_string(),
        ))
    }
}
