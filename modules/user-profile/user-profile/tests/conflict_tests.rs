#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Insert-time conflicts: a bind whose checks read stale state must still
//! report the rule it broke once the storage constraint rejects the insert.

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use common::{setup_db, twitter};
use sea_orm::ConnectionTrait;
use user_profile::domain::error::DomainError;
use user_profile::domain::provider::{IdentityBinding, IdentityKind};
use user_profile::domain::repo::ProfileRepository;
use user_profile::domain::service::{Service, ServiceConfig};
use user_profile::infra::storage::SeaOrmProfileRepository;
use user_profile::{UserProfile, UserProfileError, UserProfileFull};

/// Repository that answers the first N reads of each kind as if a concurrent
/// writer had not committed yet.
#[derive(Default)]
struct LaggingRepo {
    inner: SeaOrmProfileRepository,
    stale_identity_reads: AtomicUsize,
    stale_user_reads: AtomicUsize,
    failing_profile_reads: AtomicUsize,
}

impl LaggingRepo {
    fn stale(identity_reads: usize, user_reads: usize) -> Self {
        Self {
            stale_identity_reads: AtomicUsize::new(identity_reads),
            stale_user_reads: AtomicUsize::new(user_reads),
            ..Self::default()
        }
    }
}

fn take(counter: &AtomicUsize) -> bool {
    counter
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
        .is_ok()
}

#[async_trait]
impl ProfileRepository for LaggingRepo {
    async fn create_profile<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        address: &str,
    ) -> Result<UserProfile, DomainError> {
        self.inner.create_profile(conn, address).await
    }

    async fn find_profile<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Option<UserProfile>, DomainError> {
        if take(&self.failing_profile_reads) {
            return Err(DomainError::database("connection reset"));
        }
        self.inner.find_profile(conn, id).await
    }

    async fn find_profile_by_address<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        address: &str,
    ) -> Result<Option<UserProfile>, DomainError> {
        self.inner.find_profile_by_address(conn, address).await
    }

    async fn soft_delete_profile<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<bool, DomainError> {
        self.inner.soft_delete_profile(conn, id).await
    }

    async fn identity_bound<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        binding: &IdentityBinding,
    ) -> Result<bool, DomainError> {
        if take(&self.stale_identity_reads) {
            return Ok(false);
        }
        self.inner.identity_bound(conn, binding).await
    }

    async fn user_bound<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        kind: IdentityKind,
        user_id: i64,
    ) -> Result<bool, DomainError> {
        if take(&self.stale_user_reads) {
            return Ok(false);
        }
        self.inner.user_bound(conn, kind, user_id).await
    }

    async fn insert_binding<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: i64,
        binding: &IdentityBinding,
    ) -> Result<(), DomainError> {
        self.inner.insert_binding(conn, user_id, binding).await
    }

    async fn find_full_profile<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Option<UserProfileFull>, DomainError> {
        self.inner.find_full_profile(conn, id).await
    }
}

struct Fixture {
    service: Service<LaggingRepo>,
    first: i64,
    second: i64,
}

/// Two profiles; the first already owns Twitter account `12345`, written
/// behind the service's back.
async fn fixture(repo: LaggingRepo) -> Fixture {
    let db = setup_db().await;
    let seed = SeaOrmProfileRepository::new();
    let first = seed.create_profile(&db, "0xaaa").await.unwrap().id;
    let second = seed.create_profile(&db, "0xbbb").await.unwrap().id;
    seed.insert_binding(&db, first, &IdentityBinding::Twitter(twitter("12345")))
        .await
        .unwrap();

    Fixture {
        service: Service::new(db, Arc::new(repo), ServiceConfig::default()),
        first,
        second,
    }
}

#[tokio::test]
async fn lost_race_on_profile_reports_user_already_bound() {
    let f = fixture(LaggingRepo::stale(0, 1)).await;

    let err = f
        .service
        .bind_twitter(f.first, twitter("67890"))
        .await
        .unwrap_err();

    let sdk: UserProfileError = err.into();
    assert_eq!(sdk, UserProfileError::user_already_bound("twitter", f.first));
}

#[tokio::test]
async fn lost_race_on_identity_reports_identity_already_bound() {
    let f = fixture(LaggingRepo::stale(1, 0)).await;

    let err = f
        .service
        .bind_twitter(f.second, twitter("12345"))
        .await
        .unwrap_err();

    let sdk: UserProfileError = err.into();
    assert_eq!(
        sdk,
        UserProfileError::identity_already_bound("twitter", "12345")
    );
}

#[tokio::test]
async fn unexplained_conflict_keeps_original_error() {
    let f = fixture(LaggingRepo::stale(2, 2)).await;

    let err = f
        .service
        .bind_twitter(f.first, twitter("67890"))
        .await
        .unwrap_err();

    assert!(
        matches!(err, DomainError::BindingConflict { kind: IdentityKind::Twitter, .. }),
        "unexpected error: {err}"
    );
    let sdk: UserProfileError = err.into();
    assert!(matches!(sdk, UserProfileError::PersistenceFailure { .. }));
}

#[tokio::test]
async fn precheck_failure_is_not_reclassified() {
    let repo = LaggingRepo {
        failing_profile_reads: AtomicUsize::new(1),
        ..LaggingRepo::default()
    };
    let f = fixture(repo).await;

    let err = f
        .service
        .bind_twitter(f.second, twitter("12345"))
        .await
        .unwrap_err();

    assert!(
        matches!(err, DomainError::Database { ref message } if message == "connection reset"),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn failed_bind_leaves_profile_usable() {
    let f = fixture(LaggingRepo::stale(1, 0)).await;

    f.service
        .bind_twitter(f.second, twitter("12345"))
        .await
        .unwrap_err();
    f.service
        .bind_twitter(f.second, twitter("67890"))
        .await
        .unwrap();

    let full = f.service.get_full_profile(f.second).await.unwrap();
    assert_eq!(full.twitter.twitter_id, "67890");
}
