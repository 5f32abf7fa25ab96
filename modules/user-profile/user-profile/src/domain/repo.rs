use async_trait::async_trait;
use sea_orm::ConnectionTrait;
use user_profile_sdk::{UserProfile, UserProfileFull};

use crate::domain::error::DomainError;
use crate::domain::provider::{IdentityBinding, IdentityKind};

/// Repository trait for profile and identity persistence.
///
/// All methods accept a generic connection (`DatabaseConnection` or
/// `DatabaseTransaction`), so the service decides the transaction boundary.
/// Soft-deleted profiles are invisible to every read.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Insert a new profile row with fresh timestamps.
    async fn create_profile<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        address: &str,
    ) -> Result<UserProfile, DomainError>;

    async fn find_profile<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Option<UserProfile>, DomainError>;

    async fn find_profile_by_address<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        address: &str,
    ) -> Result<Option<UserProfile>, DomainError>;

    /// Mark a profile deleted. Returns `false` if no live profile matched.
    async fn soft_delete_profile<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<bool, DomainError>;

    /// Whether a record with the binding's natural key already exists.
    async fn identity_bound<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        binding: &IdentityBinding,
    ) -> Result<bool, DomainError>;

    /// Whether the profile already has a record for this provider.
    async fn user_bound<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        kind: IdentityKind,
        user_id: i64,
    ) -> Result<bool, DomainError>;

    /// Insert the identity record. Unique-key violations come back as
    /// `DomainError::BindingConflict`.
    async fn insert_binding<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: i64,
        binding: &IdentityBinding,
    ) -> Result<(), DomainError>;

    /// Load a live profile and its four identity records.
    async fn find_full_profile<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Option<UserProfileFull>, DomainError>;
}
