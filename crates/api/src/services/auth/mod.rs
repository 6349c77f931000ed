//! Authentication service.
//!
//! Password login with Argon2id hashes and opaque bearer tokens. Tokens are
//! 32 random bytes, base64url-encoded, stored server-side with a fixed 24h
//! expiry; presenting one authenticates the request.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use sqlx::PgPool;

use nuru_core::{Currency, Email, UserId, UserRole};

use crate::db::RepositoryError;
use crate::db::tokens::TokenRepository;
use crate::db::users::{NewUser, UserRepository};
use crate::models::User;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// How long a bearer token stays valid after issue.
const TOKEN_TTL_HOURS: i64 = 24;

/// A freshly issued bearer token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Registration input, validated by [`AuthService::register`].
#[derive(Debug)]
pub struct RegisterInput<'r> {
    pub name: &'r str,
    pub email: &'r str,
    pub phone: Option<&'r str>,
    pub password: &'r str,
    pub country: &'r str,
    /// Defaults to the currency of `country` when absent.
    pub preferred_currency: Option<Currency>,
}

/// Authentication service.
///
/// Handles registration, login, token authentication, and password changes.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    tokens: TokenRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
            tokens: TokenRepository::new(pool),
        }
    }

    /// Register a new customer and log them in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::EmailTaken` if the email is already registered.
    pub async fn register(
        &self,
        input: RegisterInput<'_>,
    ) -> Result<(User, IssuedToken), AuthError> {
        let email = Email::parse(input.email)?;
        validate_password(input.password)?;

        let password_hash = hash_password(input.password)?;
        let preferred_currency = input
            .preferred_currency
            .unwrap_or_else(|| currency_for_country(input.country));

        let user = self
            .users
            .create(NewUser {
                name: input.name,
                email: &email,
                phone: input.phone,
                password_hash: &password_hash,
                role: UserRole::Customer,
                country: input.country,
                preferred_currency,
            })
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::EmailTaken,
                other => AuthError::Repository(other),
            })?;

        let token = self.issue_token(user.id).await?;
        Ok((user, token))
    }

    /// Create an admin account. Only reachable from the CLI; there is no
    /// HTTP surface for this.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::EmailTaken` if the email is already registered.
    pub async fn create_admin(
        &self,
        name: &str,
        email: &str,
        password: &str,
        country: &str,
    ) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;
        let password_hash = hash_password(password)?;

        let user = self
            .users
            .create(NewUser {
                name,
                email: &email,
                phone: None,
                password_hash: &password_hash,
                role: UserRole::Admin,
                country,
                preferred_currency: currency_for_country(country),
            })
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::EmailTaken,
                other => AuthError::Repository(other),
            })?;

        Ok(user)
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email/password is wrong.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, IssuedToken), AuthError> {
        let user = self.verify_credentials(email, password).await?;
        let token = self.issue_token(user.id).await?;
        Ok((user, token))
    }

    /// Login restricted to admin accounts.
    ///
    /// A valid customer login is rejected the same way as a wrong password,
    /// so this endpoint doesn't reveal which emails hold admin accounts.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email/password is wrong
    /// or the account is not an admin.
    pub async fn admin_login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(User, IssuedToken), AuthError> {
        let user = self.verify_credentials(email, password).await?;
        if !user.role.is_admin() {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issue_token(user.id).await?;
        Ok((user, token))
    }

    /// Resolve a bearer token to its user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` for unknown and expired tokens.
    pub async fn authenticate(&self, token: &str) -> Result<User, AuthError> {
        self.tokens
            .find_user(token)
            .await?
            .ok_or(AuthError::InvalidToken)
    }

    /// Change a user's password, verifying the current one first.
    ///
    /// Every outstanding token for the user is revoked; the caller must log
    /// in again.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the current password is wrong.
    /// Returns `AuthError::WeakPassword` if the new password doesn't meet requirements.
    pub async fn change_password(
        &self,
        user_id: UserId,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        validate_password(new_password)?;

        let hash = self
            .users
            .get_password_hash(user_id)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;
        verify_password(current_password, &hash)?;

        let new_hash = hash_password(new_password)?;
        self.users.update_password(user_id, &new_hash).await?;
        self.tokens.delete_for_user(user_id).await?;

        Ok(())
    }

    async fn verify_credentials(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let (user, password_hash) = self
            .users
            .get_with_password_hash(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;
        Ok(user)
    }

    async fn issue_token(&self, user_id: UserId) -> Result<IssuedToken, AuthError> {
        let token = generate_token();
        let expires_at = Utc::now() + Duration::hours(TOKEN_TTL_HOURS);

        self.tokens.insert(user_id, &token, expires_at).await?;

        Ok(IssuedToken { token, expires_at })
    }
}

/// Pick the store currency matching a country name, falling back to KES.
#[must_use]
pub fn currency_for_country(country: &str) -> Currency {
    Currency::ALL
        .iter()
        .copied()
        .find(|c| c.country().eq_ignore_ascii_case(country))
        .unwrap_or_default()
}

/// Generate an opaque bearer token: 32 random bytes, base64url.
fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_short_password_rejected() {
        assert!(matches!(
            validate_password("short"),
            Err(AuthError::WeakPassword(_))
        ));
        assert!(validate_password("longenough").is_ok());
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(verify_password("correct horse battery", &hash).is_ok());
        assert!(matches!(
            verify_password("wrong password", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_tokens_are_unique_and_url_safe() {
        let a = generate_token();
        let b = generate_token();
        assert_ne!(a, b);
        // 32 bytes -> 43 base64url chars, no padding
        assert_eq!(a.len(), 43);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_currency_follows_country() {
        assert_eq!(currency_for_country("Uganda"), Currency::UGX);
        assert_eq!(currency_for_country("kenya"), Currency::KES);
        assert_eq!(currency_for_country("Atlantis"), Currency::KES);
    }
}
