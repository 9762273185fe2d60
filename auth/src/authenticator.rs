use chrono::DateTime;
use chrono::Utc;

use crate::jwt::AccessToken;
use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and JWT generation.
///
/// Provides high-level authentication operations by coordinating
/// password hashing and JWT token handling. Holds no mutable state, so a
/// single instance is shared across all requests.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator around a configured token handler.
    ///
    /// # Arguments
    /// * `jwt_handler` - Token handler carrying the signing secret and TTL
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(jwt_handler: JwtHandler) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Password too long or hashing failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identity to encode in the token
    /// * `now` - Issue time
    ///
    /// # Returns
    /// Signed access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is malformed
    /// * `JwtError` - Token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.jwt_handler.issue(subject, now)?)
    }

    /// Burn the time a password verification would take.
    pub fn equalize_timing(&self, password: &str) {
        self.password_hasher.equalize(password);
    }

    /// Issue a token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token signing failed
    pub fn generate_token(
        &self,
        subject: &str,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, JwtError> {
        self.jwt_handler.issue(subject, now)
    }

    /// Validate a token and decode its claims.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed token or bad signature
    /// * `Expired` - Token is past its expiry at `now`
    pub fn validate_token(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, JwtError> {
        self.jwt_handler.verify(token, now)
    }
}
