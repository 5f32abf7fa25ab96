#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Repository and schema behaviour below the service's pre-checks.

mod common;

use common::{discord, setup_db, twitter};
use user_profile::domain::error::DomainError;
use user_profile::domain::provider::{IdentityBinding, IdentityKind};
use user_profile::domain::repo::ProfileRepository;
use user_profile::infra::storage::{SeaOrmProfileRepository, ensure_schema};

#[tokio::test]
async fn schema_setup_is_idempotent() {
    let db = setup_db().await;
    ensure_schema(&db).await.unwrap();
    ensure_schema(&db).await.unwrap();
}

#[tokio::test]
async fn unique_user_column_backs_up_the_user_check() {
    let db = setup_db().await;
    let repo = SeaOrmProfileRepository::new();
    let user = repo.create_profile(&db, "0xaaa").await.unwrap().id;

    repo.insert_binding(&db, user, &IdentityBinding::Twitter(twitter("1")))
        .await
        .unwrap();

    let err = repo
        .insert_binding(&db, user, &IdentityBinding::Twitter(twitter("2")))
        .await
        .unwrap_err();
    assert!(
        matches!(err, DomainError::BindingConflict { kind: IdentityKind::Twitter, .. }),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn natural_key_backs_up_the_identity_check() {
    let db = setup_db().await;
    let repo = SeaOrmProfileRepository::new();
    let first = repo.create_profile(&db, "0xaaa").await.unwrap().id;
    let second = repo.create_profile(&db, "0xbbb").await.unwrap().id;

    let binding = IdentityBinding::Discord(discord("12345"));
    repo.insert_binding(&db, first, &binding).await.unwrap();

    let err = repo.insert_binding(&db, second, &binding).await.unwrap_err();
    assert!(
        matches!(err, DomainError::BindingConflict { kind: IdentityKind::Discord, .. }),
        "unexpected error: {err}"
    );
    assert!(repo.identity_bound(&db, &binding).await.unwrap());
    assert!(!repo.user_bound(&db, IdentityKind::Discord, second).await.unwrap());
}

#[tokio::test]
async fn foreign_key_rejects_unknown_profile() {
    let db = setup_db().await;
    let repo = SeaOrmProfileRepository::new();

    let err = repo
        .insert_binding(
            &db,
            77,
            &IdentityBinding::Email {
                email: "a@example.com".to_owned(),
            },
        )
        .await
        .unwrap_err();
    assert!(
        matches!(err, DomainError::ProfileNotFound { id: 77 }),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn soft_deleted_profiles_are_invisible() {
    let db = setup_db().await;
    let repo = SeaOrmProfileRepository::new();
    let user = repo.create_profile(&db, "0xaaa").await.unwrap().id;

    assert!(repo.soft_delete_profile(&db, user).await.unwrap());
    assert!(!repo.soft_delete_profile(&db, user).await.unwrap());
    assert!(repo.find_profile(&db, user).await.unwrap().is_none());
    assert!(repo.find_full_profile(&db, user).await.unwrap().is_none());
    assert!(repo.find_profile_by_address(&db, "0xaaa").await.unwrap().is_none());
}
