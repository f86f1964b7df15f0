//! Mail module - outbound delivery transports
//!
//! Provides the concrete [`MailTransport`](atom_core::services::MailTransport)
//! implementations and the factory that orders them into a
//! [`FallbackMailer`](atom_core::services::FallbackMailer).

mod factory;
mod log_transport;
mod smtp;

#[cfg(test)]
mod tests;

pub use factory::create_mailer;
pub use log_transport::LogMailTransport;
pub use smtp::SmtpMailTransport;
