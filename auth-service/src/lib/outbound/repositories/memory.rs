use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::credential::errors::DirectoryError;
use crate::credential::models::CredentialRecord;
use crate::credential::models::Username;
use crate::credential::ports::UserDirectory;

/// Process-local user directory.
///
/// Records live for the lifetime of the process. Inserts take the write lock
/// and go through the map's entry API, so a duplicate username is rejected
/// atomically even when two registrations race past `exists`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    records: Arc<RwLock<HashMap<String, CredentialRecord>>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn exists(&self, username: &Username) -> Result<bool, DirectoryError> {
        Ok(self.records.read().await.contains_key(username.as_str()))
    }

    async fn insert(&self, record: CredentialRecord) -> Result<(), DirectoryError> {
        let mut records = self.records.write().await;

        match records.entry(record.username.as_str().to_string()) {
            Entry::Occupied(entry) => Err(DirectoryError::DuplicateKey(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(record);
                Ok(())
            }
        }
    }

    async fn fetch_by_username(
        &self,
        username: &Username,
    ) -> Result<CredentialRecord, DirectoryError> {
        self.records
            .read()
            .await
            .get(username.as_str())
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(username.to_string()))
    }
}
