//! Authentication utilities library
//!
//! Provides the credential and token primitives the service is built on:
//! - Password hashing and verification (Argon2id, salted, constant work factor)
//! - Access token issuance and verification (HS256 JWT with expiry)
//! - Authentication coordination
//!
//! Nothing in this crate performs I/O. Token verification is a pure function
//! of the token, the supplied time and the signing secret.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{JwtHandler, SigningSecret};
//! use chrono::Utc;
//!
//! let secret = SigningSecret::new("secret_key_at_least_32_bytes_long!").unwrap();
//! let handler = JwtHandler::new(&secret);
//! let issued = handler.issue("alice", Utc::now()).unwrap();
//! let claims = handler.verify(&issued.token, Utc::now()).unwrap();
//! assert_eq!(claims.sub, "alice");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, JwtHandler, SigningSecret};
//! use chrono::Utc;
//!
//! let secret = SigningSecret::new("secret_key_at_least_32_bytes_long!").unwrap();
//! let auth = Authenticator::new(JwtHandler::new(&secret));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let issued = auth.authenticate("password123", &hash, "alice", Utc::now()).unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&issued.token, Utc::now()).unwrap();
//! assert_eq!(claims.sub, "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::AccessToken;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::SigningSecret;
pub use password::PasswordError;
pub use password::PasswordHasher;
