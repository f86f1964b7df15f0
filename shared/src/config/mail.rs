//! Outbound mail configuration
//!
//! Describes the SMTP endpoints the mailer walks, in priority order, for every
//! outgoing message. The order is deployment policy and is read from
//! `SMTP_TRANSPORTS`, e.g. `465:implicit,587:starttls,25:plain`. Each entry may
//! carry its own host (`mail.example.com:2525:starttls`); otherwise `SMTP_HOST`
//! is used.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{env_opt, env_or};

/// Default SMTP relay host
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Connection security for a single SMTP endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SmtpSecurity {
    /// TLS from the first byte (SMTPS, usually port 465)
    Implicit,
    /// Plain connection upgraded with STARTTLS (usually port 587)
    StartTls,
    /// No encryption (usually port 25)
    Plain,
}

impl SmtpSecurity {
    /// Whether the connection is wrapped in TLS from the start
    pub fn is_implicit_tls(&self) -> bool {
        matches!(self, SmtpSecurity::Implicit)
    }
}

impl fmt::Display for SmtpSecurity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmtpSecurity::Implicit => write!(f, "implicit TLS"),
            SmtpSecurity::StartTls => write!(f, "STARTTLS"),
            SmtpSecurity::Plain => write!(f, "plain"),
        }
    }
}

impl FromStr for SmtpSecurity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "implicit" | "tls" | "ssl" | "smtps" => Ok(SmtpSecurity::Implicit),
            "starttls" | "explicit" => Ok(SmtpSecurity::StartTls),
            "plain" | "none" => Ok(SmtpSecurity::Plain),
            other => Err(format!("Invalid SMTP security mode: {}", other)),
        }
    }
}

/// A single SMTP endpoint to attempt delivery through
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SmtpEndpoint {
    pub host: String,
    pub port: u16,
    pub security: SmtpSecurity,
}

impl SmtpEndpoint {
    pub fn new(host: impl Into<String>, port: u16, security: SmtpSecurity) -> Self {
        Self {
            host: host.into(),
            port,
            security,
        }
    }

    /// Human readable label used in logs and delivery receipts
    pub fn label(&self) -> String {
        format!("{}:{} ({})", self.host, self.port, self.security)
    }

    /// Parse one `[host:]port:security` entry
    pub fn parse(entry: &str, default_host: &str) -> Result<Self, String> {
        let parts: Vec<&str> = entry.trim().split(':').map(str::trim).collect();
        let (host, port, security) = match parts.as_slice() {
            [port, security] => (default_host, *port, *security),
            [host, port, security] if !host.is_empty() => (*host, *port, *security),
            _ => return Err(format!("Invalid SMTP transport entry: {}", entry)),
        };

        let port = port
            .parse::<u16>()
            .map_err(|_| format!("Invalid SMTP port in entry: {}", entry))?;

        Ok(Self::new(host, port, security.parse()?))
    }
}

/// Outbound mail configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Default SMTP host for endpoints that do not name one
    pub smtp_host: String,

    /// SMTP username
    #[serde(default)]
    pub smtp_user: Option<String>,

    /// SMTP password
    #[serde(default, skip_serializing)]
    pub smtp_pass: Option<String>,

    /// Sender address (falls back to the SMTP username)
    #[serde(default)]
    pub from_address: Option<String>,

    /// Endpoints in the order they are attempted
    pub transports: Vec<SmtpEndpoint>,

    /// Upper bound for a single delivery attempt, in seconds
    pub attempt_timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: DEFAULT_SMTP_HOST.to_string(),
            smtp_user: None,
            smtp_pass: None,
            from_address: None,
            transports: default_transports(DEFAULT_SMTP_HOST),
            attempt_timeout_secs: 15,
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    ///
    /// Malformed `SMTP_TRANSPORTS` entries are skipped; if nothing valid is
    /// left the default 465/587/25 policy is used.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let smtp_host = env_opt("SMTP_HOST").unwrap_or(defaults.smtp_host);
        let transports = env_opt("SMTP_TRANSPORTS")
            .map(|raw| parse_transports(&raw, &smtp_host))
            .filter(|list| !list.is_empty())
            .unwrap_or_else(|| default_transports(&smtp_host));

        Self {
            smtp_user: env_opt("SMTP_USER"),
            smtp_pass: env_opt("SMTP_PASS"),
            from_address: env_opt("SMTP_FROM"),
            attempt_timeout_secs: env_or("SMTP_ATTEMPT_TIMEOUT_SECS", defaults.attempt_timeout_secs),
            smtp_host,
            transports,
        }
    }

    /// Whether SMTP credentials are present
    pub fn is_configured(&self) -> bool {
        self.smtp_user.is_some() && self.smtp_pass.is_some()
    }

    /// Address messages are sent from
    pub fn sender(&self) -> Option<&str> {
        self.from_address.as_deref().or(self.smtp_user.as_deref())
    }
}

/// Implicit TLS on 465, then STARTTLS on 587, then plain on 25
pub fn default_transports(host: &str) -> Vec<SmtpEndpoint> {
    vec![
        SmtpEndpoint::new(host, 465, SmtpSecurity::Implicit),
        SmtpEndpoint::new(host, 587, SmtpSecurity::StartTls),
        SmtpEndpoint::new(host, 25, SmtpSecurity::Plain),
    ]
}

/// Parse a comma separated transport list, keeping only valid entries
pub fn parse_transports(raw: &str, default_host: &str) -> Vec<SmtpEndpoint> {
    raw.split(',')
        .filter(|entry| !entry.trim().is_empty())
        .filter_map(|entry| SmtpEndpoint::parse(entry, default_host).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_order() {
        let transports = default_transports("smtp.example.com");
        let ports: Vec<u16> = transports.iter().map(|t| t.port).collect();
        assert_eq!(ports, vec![465, 587, 25]);
        assert!(transports[0].security.is_implicit_tls());
        assert_eq!(transports[1].security, SmtpSecurity::StartTls);
        assert_eq!(transports[2].security, SmtpSecurity::Plain);
    }

    #[test]
    fn test_parse_entry_with_and_without_host() {
        let entry = SmtpEndpoint::parse("587:starttls", "smtp.example.com").unwrap();
        assert_eq!(entry, SmtpEndpoint::new("smtp.example.com", 587, SmtpSecurity::StartTls));

        let entry = SmtpEndpoint::parse("relay.local:2525:plain", "smtp.example.com").unwrap();
        assert_eq!(entry.host, "relay.local");
        assert_eq!(entry.port, 2525);
        assert_eq!(entry.security, SmtpSecurity::Plain);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(SmtpEndpoint::parse("465", "h").is_err());
        assert!(SmtpEndpoint::parse("abc:tls", "h").is_err());
        assert!(SmtpEndpoint::parse("465:carrier-pigeon", "h").is_err());
    }

    #[test]
    fn test_parse_transports_keeps_order_and_skips_invalid() {
        let list = parse_transports("25:plain, bogus, 465:implicit", "smtp.example.com");
        let ports: Vec<u16> = list.iter().map(|t| t.port).collect();
        assert_eq!(ports, vec![25, 465]);
    }

    #[test]
    fn test_sender_falls_back_to_user() {
        let mut config = MailConfig {
            smtp_user: Some("noreply@atom.test".to_string()),
            ..Default::default()
        };
        assert_eq!(config.sender(), Some("noreply@atom.test"));

        config.from_address = Some("ATOM <events@atom.test>".to_string());
        assert_eq!(config.sender(), Some("ATOM <events@atom.test>"));
    }

    #[test]
    fn test_is_configured_requires_credentials() {
        let mut config = MailConfig::default();
        assert!(!config.is_configured());
        config.smtp_user = Some("user".to_string());
        assert!(!config.is_configured());
        config.smtp_pass = Some("pass".to_string());
        assert!(config.is_configured());
    }
}
