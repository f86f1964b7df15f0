//! In-memory, time-bounded one-time password store
//!
//! This module provides:
//! - `OtpStore`, one live code per email with lazy expiry
//! - An injectable `Clock` so expiry can be driven by tests
//! - An optional background sweeper for expired entries

mod clock;
mod store;
mod sweeper;


pub use clock::{Clock, ManualClock, SystemClock};
pub use store::{OtpStore, OtpVerification};
pub use sweeper::OtpSweeper;
