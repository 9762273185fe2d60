use std::fmt;

use auth::password::MAX_PASSWORD_BYTES;
use secrecy::ExposeSecret;
use secrecy::Secret;

use crate::credential::errors::PasswordValidationError;
use crate::credential::errors::UsernameError;

/// Persisted credential record.
///
/// One record per username. Created on registration and never mutated by
/// this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub username: Username,
    pub password_hash: String,
}

impl CredentialRecord {
    pub fn new(username: Username, password_hash: String) -> Self {
        Self {
            username,
            password_hash,
        }
    }
}

/// Username value type
///
/// Non-blank, at most 128 characters, no whitespace or control characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    const MAX_LENGTH: usize = 128;

    /// Create a new valid username.
    ///
    /// # Arguments
    /// * `username` - Raw username string
    ///
    /// # Returns
    /// Validated Username value object
    ///
    /// # Errors
    /// * `Empty` - Username is empty
    /// * `TooLong` - Username longer than 128 characters
    /// * `InvalidCharacters` - Contains whitespace or control characters
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let length = username.chars().count();
        if length == 0 {
            return Err(UsernameError::Empty);
        }
        if length > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        if username
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(UsernameError::InvalidCharacters);
        }
        Ok(Self(username))
    }

    /// Get username as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password supplied at registration.
///
/// Only lives until it is hashed. `Debug` never prints the value.
#[derive(Debug)]
pub struct Password(Secret<String>);

impl Password {
    /// Create a new valid password.
    ///
    /// # Errors
    /// * `Empty` - Password is empty
    /// * `TooLong` - Password exceeds the hasher's input limit
    pub fn new(password: String) -> Result<Self, PasswordValidationError> {
        if password.is_empty() {
            return Err(PasswordValidationError::Empty);
        }
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(PasswordValidationError::TooLong {
                max: MAX_PASSWORD_BYTES,
                actual: password.len(),
            });
        }
        Ok(Self(Secret::new(password)))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct RegisterCommand {
    pub username: Username,
    pub password: Password,
}

impl RegisterCommand {
    pub fn new(username: Username, password: Password) -> Self {
        Self { username, password }
    }
}

/// Command to log in with a username and plaintext password.
///
/// The password is not validated: anything that fails validation simply
/// fails verification.
#[derive(Debug)]
pub struct LoginCommand {
    pub username: Username,
    pub password: Secret<String>,
}

impl LoginCommand {
    pub fn new(username: Username, password: String) -> Self {
        Self {
            username,
            password: Secret::new(password),
        }
    }
}
