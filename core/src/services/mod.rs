//! Business services containing domain logic and use cases.

pub mod admin;
pub mod auth;
pub mod events;
pub mod mail;
pub mod otp;

// Re-export commonly used types
pub use admin::AdminService;
pub use auth::{AuthService, AuthServiceConfig, SignupInput};
pub use events::EventService;
pub use mail::{FallbackMailer, MailServiceTrait, MailTransport};
pub use otp::{Clock, ManualClock, OtpStore, OtpSweeper, OtpVerification, SystemClock};
