//! Mail delivery with sequential transport fallback
//!
//! This module provides:
//! - The `MailTransport` trait implemented by concrete senders
//! - `FallbackMailer`, which walks an ordered transport list until one succeeds
//! - The `MailServiceTrait` seam used by business services

mod fallback;
mod traits;


pub use fallback::FallbackMailer;
pub use traits::{MailServiceTrait, MailTransport};
