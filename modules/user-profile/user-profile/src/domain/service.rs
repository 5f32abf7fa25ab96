//! Domain service layer - binding rules and profile lifecycle.
//!
//! Every bind follows the same routine, driven by the provider descriptor:
//! profile must be live, the identity must be free (unless the descriptor
//! skips empty keys), the profile must not already have that provider, then
//! the record is inserted. Checks and insert share one transaction, and the
//! storage layer's unique keys catch whatever a concurrent bind slips past
//! the checks.

use std::sync::Arc;

use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use user_profile_sdk::{
    NewDiscordInfo, NewTelegramInfo, NewTwitterInfo, UserProfile, UserProfileFull,
};

use crate::domain::error::DomainError;
use crate::domain::provider::IdentityBinding;
use crate::domain::repo::ProfileRepository;
use crate::infra::storage::db::db_err;

/// Configuration for the domain service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ServiceConfig {
    /// Upper bound for every string attribute; matches the `VARCHAR(255)` columns.
    pub max_field_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_field_length: 255,
        }
    }
}

pub struct Service<R: ProfileRepository> {
    db: DatabaseConnection,
    repo: Arc<R>,
    config: ServiceConfig,
}

impl<R: ProfileRepository> Service<R> {
    #[must_use]
    pub fn new(db: DatabaseConnection, repo: Arc<R>, config: ServiceConfig) -> Self {
        Self { db, repo, config }
    }

    /// Create a profile for `address`.
    ///
    /// # Errors
    /// `Validation` for an empty or oversized address, `AddressTaken` when a
    /// live profile already uses it, `Database` on storage failure.
    #[instrument(skip(self))]
    pub async fn create_profile(&self, address: &str) -> Result<UserProfile, DomainError> {
        info!("Creating user profile");

        if address.is_empty() {
            return Err(DomainError::validation("address", "must not be empty"));
        }
        self.validate_length("address", address)?;

        let txn = self.db.begin().await.map_err(db_err)?;
        let created = match self.repo.find_profile_by_address(&txn, address).await {
            Ok(Some(_)) => Err(DomainError::address_taken(address)),
            Ok(None) => self.repo.create_profile(&txn, address).await,
            Err(e) => Err(e),
        };

        match created {
            Ok(profile) => {
                txn.commit().await.map_err(db_err)?;
                info!("Successfully created user profile with id={}", profile.id);
                Ok(profile)
            }
            Err(e) => {
                rollback(txn).await;
                Err(e)
            }
        }
    }

    /// Find a live profile by address.
    ///
    /// # Errors
    /// `AddressNotFound` when no live profile matches.
    #[instrument(skip(self))]
    pub async fn find_profile_by_address(&self, address: &str) -> Result<UserProfile, DomainError> {
        debug!("Finding user profile by address");
        self.repo
            .find_profile_by_address(&self.db, address)
            .await?
            .ok_or_else(|| DomainError::address_not_found(address))
    }

    /// Soft-delete a profile. Identity records are left in place.
    ///
    /// # Errors
    /// `ProfileNotFound` when the profile is missing or already deleted.
    #[instrument(skip(self))]
    pub async fn delete_profile(&self, user_id: i64) -> Result<(), DomainError> {
        info!("Deleting user profile");
        if self.repo.soft_delete_profile(&self.db, user_id).await? {
            info!("Successfully deleted user profile");
            Ok(())
        } else {
            Err(DomainError::profile_not_found(user_id))
        }
    }

    /// Bind an email address.
    ///
    /// # Errors
    /// See [`Service::bind_identity`].
    pub async fn bind_email(&self, user_id: i64, email: &str) -> Result<(), DomainError> {
        self.bind_identity(
            user_id,
            IdentityBinding::Email {
                email: email.to_owned(),
            },
        )
        .await
    }

    /// Bind a Twitter account.
    ///
    /// # Errors
    /// See [`Service::bind_identity`].
    pub async fn bind_twitter(&self, user_id: i64, info: NewTwitterInfo) -> Result<(), DomainError> {
        self.bind_identity(user_id, IdentityBinding::Twitter(info))
            .await
    }

    /// Bind a Telegram account.
    ///
    /// # Errors
    /// See [`Service::bind_identity`].
    pub async fn bind_telegram(
        &self,
        user_id: i64,
        info: NewTelegramInfo,
    ) -> Result<(), DomainError> {
        self.bind_identity(user_id, IdentityBinding::Telegram(info))
            .await
    }

    /// Bind a Discord account. An empty `discord_id` skips the identity check.
    ///
    /// # Errors
    /// See [`Service::bind_identity`].
    pub async fn bind_discord(&self, user_id: i64, info: NewDiscordInfo) -> Result<(), DomainError> {
        self.bind_identity(user_id, IdentityBinding::Discord(info))
            .await
    }

    /// Link one external identity to a profile.
    ///
    /// # Errors
    /// - `Validation` when an attribute exceeds the configured length
    /// - `ProfileNotFound` when the profile is missing or soft-deleted
    /// - `IdentityAlreadyBound` when the identity belongs to any profile
    /// - `UserAlreadyBound` when the profile already has this provider
    /// - `Database` on storage failure
    #[instrument(skip(self, binding), fields(provider = %binding.kind()))]
    pub async fn bind_identity(
        &self,
        user_id: i64,
        binding: IdentityBinding,
    ) -> Result<(), DomainError> {
        let kind = binding.kind();
        info!(user_id, provider = %kind, "Binding identity");

        for (field, value) in binding.text_fields() {
            self.validate_length(field, value)?;
        }

        let txn = self.db.begin().await.map_err(db_err)?;
        match self.check_and_insert(&txn, user_id, &binding).await {
            Ok(()) => {
                txn.commit().await.map_err(db_err)?;
                info!(user_id, provider = %kind, "Successfully bound identity");
                Ok(())
            }
            Err(e) => {
                rollback(txn).await;
                match e {
                    DomainError::BindingConflict { .. } => {
                        Err(self.classify_insert_failure(user_id, &binding, e).await)
                    }
                    other => Err(other),
                }
            }
        }
    }

    /// Get a live profile with all four identity records.
    ///
    /// # Errors
    /// `ProfileNotFound` when the profile is missing or soft-deleted.
    #[instrument(skip(self))]
    pub async fn get_full_profile(&self, user_id: i64) -> Result<UserProfileFull, DomainError> {
        debug!("Getting full user profile");
        self.repo
            .find_full_profile(&self.db, user_id)
            .await?
            .ok_or_else(|| DomainError::profile_not_found(user_id))
    }

    async fn check_and_insert<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: i64,
        binding: &IdentityBinding,
    ) -> Result<(), DomainError> {
        let kind = binding.kind();

        if self.repo.find_profile(conn, user_id).await?.is_none() {
            return Err(DomainError::profile_not_found(user_id));
        }

        if binding.checks_identity() && self.repo.identity_bound(conn, binding).await? {
            debug!("Identity already bound");
            return Err(DomainError::identity_already_bound(
                kind,
                binding.key().to_string(),
            ));
        }

        if self.repo.user_bound(conn, kind, user_id).await? {
            debug!("Profile already has a binding");
            return Err(DomainError::user_already_bound(kind, user_id));
        }

        self.repo.insert_binding(conn, user_id, binding).await
    }

    /// Re-read committed state after a unique-key rejection to report which
    /// rule the concurrent (or empty-key) writer violated. Falls back to the
    /// original error.
    async fn classify_insert_failure(
        &self,
        user_id: i64,
        binding: &IdentityBinding,
        original: DomainError,
    ) -> DomainError {
        let kind = binding.kind();
        debug!(error = %original, "Classifying failed insert");

        match self.repo.identity_bound(&self.db, binding).await {
            Ok(true) => {
                return DomainError::identity_already_bound(kind, binding.key().to_string());
            }
            Ok(false) => {}
            Err(e) => return e,
        }

        match self.repo.user_bound(&self.db, kind, user_id).await {
            Ok(true) => DomainError::user_already_bound(kind, user_id),
            Ok(false) => original,
            Err(e) => e,
        }
    }

    fn validate_length(&self, field: &str, value: &str) -> Result<(), DomainError> {
        let len = value.chars().count();
        if len > self.config.max_field_length {
            return Err(DomainError::validation(
                field,
                format!(
                    "too long: {len} characters (max: {})",
                    self.config.max_field_length
                ),
            ));
        }
        Ok(())
    }
}

/// Roll back after a failed operation. The caller's error wins over a rollback failure.
async fn rollback(txn: DatabaseTransaction) {
    if let Err(e) = txn.rollback().await {
        warn!(error = %e, "Transaction rollback failed");
    }
}
