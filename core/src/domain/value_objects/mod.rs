//! Value objects representing immutable domain concepts.

pub mod mail;
pub mod participant;
pub mod stats;

// Re-export commonly used types
pub use mail::{DeliveryReceipt, OutboundMessage};
pub use participant::{Participant, RegistrationOutcome, UserSummary};
pub use stats::{AdminStats, PublicStats};
