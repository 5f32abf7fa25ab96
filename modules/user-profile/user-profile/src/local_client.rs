//! In-process implementation of `UserProfileApi`.
//!
//! Delegates to the domain service and converts errors to SDK error types.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use user_profile_sdk::{
    NewDiscordInfo, NewTelegramInfo, NewTwitterInfo, UserProfile, UserProfileApi,
    UserProfileError, UserProfileFull,
};

use crate::domain::repo::ProfileRepository;
use crate::domain::service::{Service, ServiceConfig};
use crate::infra::storage::SeaOrmProfileRepository;

pub struct LocalClient<R: ProfileRepository = SeaOrmProfileRepository> {
    service: Arc<Service<R>>,
}

impl<R: ProfileRepository> LocalClient<R> {
    /// Create a new local client wrapping the domain service.
    #[must_use]
    pub fn new(service: Arc<Service<R>>) -> Self {
        Self { service }
    }
}

impl LocalClient {
    /// Build the service on top of an open connection with the default repository.
    #[must_use]
    pub fn from_db(db: DatabaseConnection, config: ServiceConfig) -> Self {
        let repo = Arc::new(SeaOrmProfileRepository::new());
        Self::new(Arc::new(Service::new(db, repo, config)))
    }
}

#[async_trait]
impl<R: ProfileRepository + 'static> UserProfileApi for LocalClient<R> {
    async fn create_profile(&self, address: &str) -> Result<UserProfile, UserProfileError> {
        self.service
            .create_profile(address)
            .await
            .map_err(Into::into)
    }

    async fn find_profile_by_address(
        &self,
        address: &str,
    ) -> Result<UserProfile, UserProfileError> {
        self.service
            .find_profile_by_address(address)
            .await
            .map_err(Into::into)
    }

    async fn delete_profile(&self, user_id: i64) -> Result<(), UserProfileError> {
        self.service
            .delete_profile(user_id)
            .await
            .map_err(Into::into)
    }

    async fn bind_email(&self, user_id: i64, email: &str) -> Result<(), UserProfileError> {
        self.service
            .bind_email(user_id, email)
            .await
            .map_err(Into::into)
    }

    async fn bind_twitter(
        &self,
        user_id: i64,
        info: NewTwitterInfo,
    ) -> Result<(), UserProfileError> {
        self.service
            .bind_twitter(user_id, info)
            .await
            .map_err(Into::into)
    }

    async fn bind_telegram(
        &self,
        user_id: i64,
        info: NewTelegramInfo,
    ) -> Result<(), UserProfileError> {
        self.service
            .bind_telegram(user_id, info)
            .await
            .map_err(Into::into)
    }

    async fn bind_discord(
        &self,
        user_id: i64,
        info: NewDiscordInfo,
    ) -> Result<(), UserProfileError> {
        self.service
            .bind_discord(user_id, info)
            .await
            .map_err(Into::into)
    }

    async fn get_full_profile(&self, user_id: i64) -> Result<UserProfileFull, UserProfileError> {
        self.service
            .get_full_profile(user_id)
            .await
            .map_err(Into::into)
    }
}
