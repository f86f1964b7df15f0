use atom_core::domain::value_objects::OutboundMessage;
use atom_core::services::{MailServiceTrait, MailTransport};
use atom_shared::config::{MailConfig, SmtpEndpoint, SmtpSecurity};

use crate::mail::{create_mailer, LogMailTransport, SmtpMailTransport};
use crate::InfrastructureError;

fn configured() -> MailConfig {
    MailConfig {
        smtp_host: "smtp.atom.test".to_string(),
        smtp_user: Some("noreply@atom.test".to_string()),
        smtp_pass: Some("secret".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_unconfigured_mailer_uses_log_transport() {
    let mailer = create_mailer(&MailConfig::default());
    assert_eq!(mailer.transport_names(), vec![LogMailTransport::NAME]);
}

#[tokio::test]
async fn test_configured_mailer_keeps_endpoint_order() {
    let mut config = configured();
    config.transports = vec![
        SmtpEndpoint::new("smtp.atom.test", 25, SmtpSecurity::Plain),
        SmtpEndpoint::new("smtp.atom.test", 465, SmtpSecurity::Implicit),
    ];

    let mailer = create_mailer(&config);

    assert_eq!(
        mailer.transport_names(),
        vec!["smtp.atom.test:25 (plain)", "smtp.atom.test:465 (implicit TLS)"]
    );
}

#[test]
fn test_smtp_transport_requires_valid_sender() {
    let mut config = configured();
    config.from_address = Some("not an address".to_string());
    let endpoint = SmtpEndpoint::new("smtp.atom.test", 587, SmtpSecurity::StartTls);

    let result = SmtpMailTransport::new(&endpoint, &config);

    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[tokio::test]
async fn test_log_transport_accepts_messages() {
    let transport = LogMailTransport::new();
    let message = OutboundMessage::new("student@atom.test", "Hello", "<p>123456</p>");

    let receipt = transport.send(&message).await.unwrap();

    assert_eq!(receipt.transport, "log");
    assert!(receipt.message_id.unwrap().ends_with("@localhost>"));
}

#[tokio::test]
async fn test_unconfigured_mailer_delivers_through_log() {
    let mailer = create_mailer(&MailConfig::default());
    let message = OutboundMessage::new("student@atom.test", "Hello", "<p>hi</p>");

    let receipt = MailServiceTrait::send(&mailer, &message).await.unwrap();

    assert_eq!(receipt.transport, LogMailTransport::NAME);
}
