use async_trait::async_trait;
use auth::AccessToken;

use crate::credential::errors::AuthError;
use crate::credential::errors::DirectoryError;
use crate::credential::models::CredentialRecord;
use crate::credential::models::LoginCommand;
use crate::credential::models::RegisterCommand;
use crate::credential::models::Username;

/// Port for registration and login operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated username and password
    ///
    /// # Returns
    /// Username of the registered user
    ///
    /// # Errors
    /// * `Conflict` - Username is already taken
    /// * `Encoding` - Password hashing failed
    /// * `Store` - Directory operation failed
    async fn register(&self, command: RegisterCommand) -> Result<Username, AuthError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `command` - Username and plaintext password
    ///
    /// # Returns
    /// Signed access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown user or wrong password (indistinguishable)
    /// * `Encoding` - Stored hash is malformed
    /// * `Signing` - Token signing failed
    /// * `Store` - Directory operation failed
    async fn login(&self, command: LoginCommand) -> Result<AccessToken, AuthError>;
}

/// Storage for credential records, keyed by username.
///
/// Implementations may be backed by anything (relational table, key-value
/// store, in-memory map). Registration checks `exists` before `insert`, and
/// those two calls are not atomic; `insert` MUST therefore enforce username
/// uniqueness itself and fail with `DuplicateKey` when a record already
/// exists. `fetch_by_username` must observe every completed `insert`.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Check whether a record exists for a username.
    ///
    /// # Errors
    /// * `Store` - Backend failure
    async fn exists(&self, username: &Username) -> Result<bool, DirectoryError>;

    /// Persist a new record.
    ///
    /// # Errors
    /// * `DuplicateKey` - A record already exists for this username
    /// * `Store` - Backend failure
    async fn insert(&self, record: CredentialRecord) -> Result<(), DirectoryError>;

    /// Retrieve the record for a username.
    ///
    /// # Errors
    /// * `NotFound` - No record for this username
    /// * `Store` - Backend failure
    async fn fetch_by_username(&self, username: &Username)
        -> Result<CredentialRecord, DirectoryError>;
}
