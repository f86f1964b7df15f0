//! Request guards
//!
//! - `session` - signed session cookie and the logged-in participant extractor
//! - `admin` - `x-admin-password` middleware and guard for the admin panel

pub mod admin;
pub mod session;

pub use admin::{AdminCredentials, AdminGuard, RequireAdmin, ADMIN_PASSWORD_HEADER};
pub use session::{OptionalSession, SessionManager, SessionUser};
