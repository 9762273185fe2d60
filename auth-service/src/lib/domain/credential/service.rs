use std::sync::Arc;

use async_trait::async_trait;
use auth::AccessToken;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;
use secrecy::ExposeSecret;

use crate::credential::errors::AuthError;
use crate::credential::errors::DirectoryError;
use crate::credential::models::CredentialRecord;
use crate::credential::models::LoginCommand;
use crate::credential::models::RegisterCommand;
use crate::credential::models::Username;
use crate::credential::ports::AuthServicePort;
use crate::credential::ports::UserDirectory;

/// Domain service implementation for registration and login.
///
/// Concrete implementation of AuthServicePort with dependency injection.
/// Holds no per-request state; the only shared state is the authenticator's
/// read-only signing secret.
pub struct AuthService<D>
where
    D: UserDirectory,
{
    directory: Arc<D>,
    authenticator: Arc<Authenticator>,
}

impl<D> AuthService<D>
where
    D: UserDirectory,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `directory` - Credential record storage
    /// * `authenticator` - Password hashing and token issuance
    ///
    /// # Returns
    /// Configured auth service instance
    pub fn new(directory: Arc<D>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            directory,
            authenticator,
        }
    }
}

#[async_trait]
impl<D> AuthServicePort for AuthService<D>
where
    D: UserDirectory,
{
    async fn register(&self, command: RegisterCommand) -> Result<Username, AuthError> {
        let RegisterCommand { username, password } = command;

        let exists = self
            .directory
            .exists(&username)
            .await
            .map_err(|e| AuthError::Store(e.to_string()))?;

        if exists {
            tracing::info!(username = %username, "Registration rejected: username taken");
            return Err(AuthError::Conflict(username.to_string()));
        }

        let password_hash = self.authenticator.hash_password(password.expose())?;

        // The directory rejects duplicates at insert time, which covers
        // concurrent registrations that both passed the existence check.
        self.directory
            .insert(CredentialRecord::new(username.clone(), password_hash))
            .await
            .map_err(|e| match e {
                DirectoryError::DuplicateKey(name) => {
                    tracing::info!(username = %name, "Registration lost insert race");
                    AuthError::Conflict(name)
                }
                other => AuthError::Store(other.to_string()),
            })?;

        tracing::info!(username = %username, "User registered");

        Ok(username)
    }

    async fn login(&self, command: LoginCommand) -> Result<AccessToken, AuthError> {
        let record = match self.directory.fetch_by_username(&command.username).await {
            Ok(record) => record,
            Err(DirectoryError::NotFound(_)) => {
                self.authenticator.equalize_timing(command.password.expose_secret());
                tracing::debug!(username = %command.username, "Login rejected: unknown user");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(AuthError::Store(e.to_string())),
        };

        let token = self
            .authenticator
            .authenticate(
                command.password.expose_secret(),
                &record.password_hash,
                record.username.as_str(),
                Utc::now(),
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::debug!(username = %record.username, "Login rejected: wrong password");
                    AuthError::InvalidCredentials
                }
                AuthenticationError::PasswordError(err) => AuthError::Encoding(err.to_string()),
                AuthenticationError::JwtError(err) => AuthError::Signing(err.to_string()),
            })?;

        tracing::info!(
            username = %record.username,
            expires_at = %token.expires_at,
            "Access token issued"
        );

        Ok(token)
    }
}
