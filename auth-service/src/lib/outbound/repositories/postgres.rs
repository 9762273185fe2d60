use async_trait::async_trait;
use sqlx::PgPool;

use crate::credential::errors::DirectoryError;
use crate::credential::models::CredentialRecord;
use crate::credential::models::Username;
use crate::credential::ports::UserDirectory;

/// User directory backed by the `credentials` table.
///
/// The primary key on `username` makes a concurrent duplicate insert fail
/// with a unique violation, which is reported as `DuplicateKey`.
pub struct PostgresUserDirectory {
    pool: PgPool,
}

impl PostgresUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn exists(&self, username: &Username) -> Result<bool, DirectoryError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM credentials WHERE username = $1)
            "#,
        )
        .bind(username.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DirectoryError::Store(e.to_string()))
    }

    async fn insert(&self, record: CredentialRecord) -> Result<(), DirectoryError> {
        sqlx::query(
            r#"
            INSERT INTO credentials (username, password_hash)
            VALUES ($1, $2)
            "#,
        )
        .bind(record.username.as_str())
        .bind(&record.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return DirectoryError::DuplicateKey(record.username.to_string());
                }
            }
            DirectoryError::Store(e.to_string())
        })?;

        Ok(())
    }

    async fn fetch_by_username(
        &self,
        username: &Username,
    ) -> Result<CredentialRecord, DirectoryError> {
        let row = sqlx::query_as::<_, (String,)>(
            r#"
            SELECT password_hash
            FROM credentials
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DirectoryError::Store(e.to_string()))?;

        match row {
            Some((password_hash,)) => Ok(CredentialRecord::new(username.clone(), password_hash)),
            None => Err(DirectoryError::NotFound(username.to_string())),
        }
    }
}
