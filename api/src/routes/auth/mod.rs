//! Authentication route handlers
//!
//! This module contains all account-related endpoints including:
//! - Signup and login (both start a session)
//! - Logout and session lookup
//! - Password reset by emailed OTP

pub mod login;
pub mod logout;
pub mod password;
pub mod session;
pub mod signup;

pub use login::login;
pub use logout::logout;
pub use password::{forgot_password, reset_password, verify_otp};
pub use session::session;
pub use signup::signup;
