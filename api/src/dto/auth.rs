use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use atom_core::domain::entities::User;
use atom_core::services::SignupInput;

use crate::middleware::SessionUser;

/// Fields are optional at the JSON level so that missing values are reported
/// with the same messages as invalid ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SignupRequest {
    /// Display name; the registration form posts it as `name`
    #[serde(alias = "username")]
    #[validate(length(max = 100, message = "Username is too long."))]
    pub name: String,

    #[validate(length(max = 254, message = "Email is too long."))]
    pub email: String,

    #[validate(length(max = 20, message = "Mobile number must be exactly 10 digits."))]
    pub mobile: String,

    #[validate(length(max = 128, message = "Password is too long."))]
    pub password: String,

    #[validate(length(max = 200, message = "College name is too long."))]
    pub college: Option<String>,
}

impl From<SignupRequest> for SignupInput {
    fn from(request: SignupRequest) -> Self {
        Self {
            username: request.name,
            email: request.email,
            mobile: request.mobile,
            password: request.password,
            college: request.college,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(length(max = 254, message = "Email is too long."))]
    pub email: String,

    #[validate(length(max = 128, message = "Password is too long."))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ForgotPasswordRequest {
    #[validate(length(max = 254, message = "Email is too long."))]
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VerifyOtpRequest {
    #[validate(length(max = 254, message = "Email is too long."))]
    pub email: String,

    #[validate(length(max = 16, message = "Invalid OTP. Please check and try again."))]
    pub otp: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[validate(length(max = 254, message = "Email is too long."))]
    pub email: String,

    #[validate(length(max = 16, message = "Invalid OTP."))]
    pub otp: String,

    #[serde(alias = "new_password")]
    #[validate(length(max = 128, message = "Password is too long."))]
    pub new_password: String,
}

/// Account summary returned on signup and login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atom_id: Option<String>,
}

impl AccountView {
    pub fn from_user(user: &User, with_atom_id: bool) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            atom_id: with_atom_id.then(|| user.atom_id()),
        }
    }
}

/// `{status: 1, message, user}` returned on signup and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub status: u8,
    pub message: String,
    pub user: AccountView,
}

impl AuthResponse {
    pub fn new(message: impl Into<String>, user: AccountView) -> Self {
        Self {
            status: 1,
            message: message.into(),
            user,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUserView {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub mobile: String,
    pub college: String,
}

impl From<SessionUser> for SessionUserView {
    fn from(session: SessionUser) -> Self {
        Self {
            id: session.user_id,
            username: session.username,
            email: session.email,
            mobile: session.mobile,
            college: session.college,
        }
    }
}

/// `GET /api/auth/session` body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUserView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_accepts_name_or_username() {
        let by_name: SignupRequest =
            serde_json::from_str(r#"{"name":"Arun","email":"a@b.co"}"#).unwrap();
        let by_username: SignupRequest =
            serde_json::from_str(r#"{"username":"Arun","email":"a@b.co"}"#).unwrap();

        assert_eq!(by_name.name, "Arun");
        assert_eq!(by_username.name, "Arun");
        assert!(by_name.password.is_empty());
    }

    #[test]
    fn test_reset_request_reads_camel_case_password() {
        let request: ResetPasswordRequest =
            serde_json::from_str(r#"{"email":"a@b.co","otp":"123456","newPassword":"Secr3t!x"}"#)
                .unwrap();
        assert_eq!(request.new_password, "Secr3t!x");
    }

    #[test]
    fn test_session_response_omits_user_when_logged_out() {
        let json = serde_json::to_value(SessionResponse {
            logged_in: false,
            user: None,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"loggedIn": false}));
    }
}
