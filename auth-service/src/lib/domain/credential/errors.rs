use auth::PasswordError;
use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username must not be empty")]
    Empty,

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Username must not contain whitespace or control characters")]
    InvalidCharacters,
}

/// Error for registration password validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordValidationError {
    #[error("Password must not be empty")]
    Empty,

    #[error("Password too long: maximum {max} bytes, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Failures reported by a user directory implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("No credential record for username: {0}")]
    NotFound(String),

    #[error("Credential record already exists for username: {0}")]
    DuplicateKey(String),

    #[error("Directory store error: {0}")]
    Store(String),
}

/// Top-level error for registration and login.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("User already exists: {0}")]
    Conflict(String),

    // Unknown user and wrong password are deliberately the same variant.
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Directory error: {0}")]
    Store(String),

    #[error("Credential encoding error: {0}")]
    Encoding(String),

    #[error("Token signing error: {0}")]
    Signing(String),
}

impl From<PasswordError> for AuthError {
    fn from(err: PasswordError) -> Self {
        AuthError::Encoding(err.to_string())
    }
}
