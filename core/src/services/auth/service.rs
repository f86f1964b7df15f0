//! Main authentication service implementation

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use atom_shared::masking::mask_email;
use atom_shared::validation::{
    first_failed_rule, is_valid_email, is_valid_mobile, is_valid_username, normalize_email,
    RESET_PASSWORD_RULES, SIGNUP_PASSWORD_RULES,
};

use crate::domain::entities::User;
use crate::domain::value_objects::DeliveryReceipt;
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::mail::MailServiceTrait;
use crate::services::otp::{OtpStore, OtpVerification};

use super::config::AuthServiceConfig;
use super::password::{hash_password, verify_password};
use super::templates::password_reset_email;

/// Fields submitted on signup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupInput {
    pub username: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub college: Option<String>,
}

/// Authentication service for signup, login and password resets
pub struct AuthService<U, M>
where
    U: UserRepository,
    M: MailServiceTrait,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// One-time password store for password resets
    otp_store: Arc<OtpStore>,
    /// Mail service used to deliver reset codes
    mailer: Arc<M>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, M> AuthService<U, M>
where
    U: UserRepository,
    M: MailServiceTrait,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        otp_store: Arc<OtpStore>,
        mailer: Arc<M>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            otp_store,
            mailer,
            config,
        }
    }

    /// The OTP store shared with this service
    pub fn otp_store(&self) -> &Arc<OtpStore> {
        &self.otp_store
    }

    /// Register a new participant
    ///
    /// Fields are checked in a fixed order (username, email, mobile, then
    /// each password rule) and the first failure is reported. Duplicate
    /// email is checked before duplicate mobile.
    pub async fn signup(&self, input: SignupInput) -> DomainResult<User> {
        validate_signup(&input)?;

        let email = normalize_email(&input.email);
        let mobile = input.mobile.trim();

        if self.user_repository.exists_by_email(&email).await? {
            return Err(AuthError::EmailAlreadyExists.into());
        }
        if self.user_repository.exists_by_mobile(mobile).await? {
            return Err(AuthError::MobileAlreadyRegistered.into());
        }

        let password_hash = hash_password(&input.password, self.config.bcrypt_cost).await?;
        let user = User::new(
            &input.username,
            &email,
            mobile,
            password_hash,
            input.college.as_deref(),
        );

        let user = self.user_repository.create(user).await?;
        info!(user_id = %user.id, email = %mask_email(&user.email), "User registered");
        Ok(user)
    }

    /// Authenticate with email and password
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<User> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ValidationError::missing("Please enter both email and password.").into());
        }

        let email = normalize_email(email);
        let user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::EmailNotRegistered)?;

        if !verify_password(password, &user.password_hash).await? {
            warn!(email = %mask_email(&email), "Login rejected: wrong password");
            return Err(AuthError::InvalidPassword.into());
        }

        info!(user_id = %user.id, "User logged in");
        Ok(user)
    }

    /// Issue a reset code and email it to the account holder
    ///
    /// The code stays issued even when delivery fails; a later request
    /// replaces it.
    pub async fn forgot_password(&self, email: &str) -> DomainResult<DeliveryReceipt> {
        if email.trim().is_empty() {
            return Err(ValidationError::missing("Email is required.").into());
        }

        let email = normalize_email(email);
        let user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        let code = self.otp_store.issue(&user.email);
        let message = password_reset_email(
            &user.email,
            &user.username,
            &code,
            self.otp_store.ttl().num_minutes(),
        );

        let receipt = self.mailer.send(&message).await?;
        info!(
            email = %mask_email(&user.email),
            transport = %receipt.transport,
            "Password reset code sent"
        );
        Ok(receipt)
    }

    /// Check a reset code without consuming it
    pub async fn verify_otp(&self, email: &str, otp: &str) -> DomainResult<()> {
        if email.trim().is_empty() || otp.trim().is_empty() {
            return Err(ValidationError::missing("Email and OTP are required.").into());
        }

        match self.otp_store.verify(email, otp) {
            OtpVerification::Ok => Ok(()),
            OtpVerification::Expired => Err(AuthError::OtpExpired.into()),
            OtpVerification::Invalid => Err(AuthError::OtpInvalid.into()),
        }
    }

    /// Re-check the reset code, set the new password, then consume the code
    ///
    /// The code is consumed only after the password update succeeds, so a
    /// failed update can be retried with the same code.
    pub async fn reset_password(&self, email: &str, otp: &str, new_password: &str) -> DomainResult<()> {
        if email.trim().is_empty() || otp.trim().is_empty() || new_password.is_empty() {
            return Err(
                ValidationError::missing("Email, OTP, and new password are required.").into(),
            );
        }

        match self.otp_store.verify(email, otp) {
            OtpVerification::Ok => {}
            OtpVerification::Expired => return Err(AuthError::ResetOtpExpired.into()),
            OtpVerification::Invalid => return Err(AuthError::ResetOtpInvalid.into()),
        }

        self.set_password(email, new_password).await?;
        self.otp_store.consume(email);

        info!(email = %mask_email(email), "Password reset with OTP");
        Ok(())
    }

    /// Set a participant's password on behalf of an administrator
    ///
    /// Any outstanding reset code for the account is discarded.
    pub async fn admin_reset_password(&self, email: &str, new_password: &str) -> DomainResult<()> {
        if email.trim().is_empty() || new_password.is_empty() {
            return Err(ValidationError::missing("Email and new password are required.").into());
        }

        self.set_password(email, new_password).await?;
        self.otp_store.consume(email);

        info!(email = %mask_email(email), "Password reset by administrator");
        Ok(())
    }

    async fn set_password(&self, email: &str, new_password: &str) -> DomainResult<()> {
        if let Some(rule) = first_failed_rule(new_password, &RESET_PASSWORD_RULES) {
            return Err(ValidationError::WeakPassword(rule).into());
        }

        let email = normalize_email(email);
        let user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        let password_hash = hash_password(new_password, self.config.bcrypt_cost).await?;
        if !self
            .user_repository
            .update_password(user.id, &password_hash)
            .await?
        {
            return Err(AuthError::AccountNotFound.into());
        }

        Ok(())
    }
}

fn validate_signup(input: &SignupInput) -> Result<(), ValidationError> {
    if !is_valid_username(&input.username) {
        return Err(ValidationError::InvalidUsername);
    }
    if !is_valid_email(input.email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_valid_mobile(input.mobile.trim()) {
        return Err(ValidationError::InvalidMobile);
    }
    if let Some(rule) = first_failed_rule(&input.password, &SIGNUP_PASSWORD_RULES) {
        return Err(ValidationError::WeakPassword(rule));
    }
    Ok(())
}
