mod common;

use std::sync::Arc;

use auth_service::credential::errors::DirectoryError;
use auth_service::credential::models::CredentialRecord;
use auth_service::credential::models::Username;
use auth_service::credential::ports::UserDirectory;
use auth_service::outbound::repositories::PostgresUserDirectory;
use common::TestDb;

// These run against the server in DATABASE_URL and are skipped without it.
macro_rules! test_db_or_skip {
    () => {
        match TestDb::from_env().await {
            Some(db) => db,
            None => {
                eprintln!("DATABASE_URL not set, skipping Postgres directory test");
                return;
            }
        }
    };
}

fn username(value: &str) -> Username {
    Username::new(value.to_string()).unwrap()
}

fn record(name: &str, hash: &str) -> CredentialRecord {
    CredentialRecord::new(username(name), hash.to_string())
}

#[tokio::test]
async fn test_insert_exists_and_fetch() {
    let db = test_db_or_skip!();
    let directory = PostgresUserDirectory::new(db.pool.clone());

    assert!(!directory.exists(&username("alice")).await.unwrap());

    directory.insert(record("alice", "hash-1")).await.unwrap();

    assert!(directory.exists(&username("alice")).await.unwrap());
    assert_eq!(
        directory.fetch_by_username(&username("alice")).await.unwrap(),
        record("alice", "hash-1")
    );

    db.cleanup().await;
}

#[tokio::test]
async fn test_fetch_unknown_user() {
    let db = test_db_or_skip!();
    let directory = PostgresUserDirectory::new(db.pool.clone());

    assert_eq!(
        directory.fetch_by_username(&username("ghost")).await,
        Err(DirectoryError::NotFound("ghost".to_string()))
    );

    db.cleanup().await;
}

#[tokio::test]
async fn test_duplicate_insert_is_rejected() {
    let db = test_db_or_skip!();
    let directory = PostgresUserDirectory::new(db.pool.clone());

    directory.insert(record("alice", "hash-1")).await.unwrap();

    assert_eq!(
        directory.insert(record("alice", "hash-2")).await,
        Err(DirectoryError::DuplicateKey("alice".to_string()))
    );
    assert_eq!(
        directory
            .fetch_by_username(&username("alice"))
            .await
            .unwrap()
            .password_hash,
        "hash-1"
    );

    db.cleanup().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_inserts_admit_exactly_one() {
    let db = test_db_or_skip!();
    let directory = Arc::new(PostgresUserDirectory::new(db.pool.clone()));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let directory = Arc::clone(&directory);
            tokio::spawn(async move {
                directory
                    .insert(record("bob", &format!("hash-{}", i)))
                    .await
            })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => successes += 1,
            Err(DirectoryError::DuplicateKey(name)) => assert_eq!(name, "bob"),
            Err(e) => panic!("unexpected error: {}", e),
        }
    }
    assert_eq!(successes, 1);

    drop(directory);
    db.cleanup().await;
}
