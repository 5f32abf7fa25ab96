//! `UserProfileApi` trait definition.
//!
//! This trait defines the public API for the `user-profile` module.

use async_trait::async_trait;

use crate::errors::UserProfileError;
use crate::models::{
    NewDiscordInfo, NewTelegramInfo, NewTwitterInfo, UserProfile, UserProfileFull,
};

/// Public API trait for the `user-profile` module.
///
/// Every bind operation enforces two rules before inserting: the external
/// identity is not linked to any profile yet, and the profile has no binding
/// for that provider yet.
#[async_trait]
pub trait UserProfileApi: Send + Sync {
    /// Create a profile for a wallet address.
    async fn create_profile(&self, address: &str) -> Result<UserProfile, UserProfileError>;

    /// Find a live profile by its address.
    async fn find_profile_by_address(
        &self,
        address: &str,
    ) -> Result<UserProfile, UserProfileError>;

    /// Soft-delete a profile.
    async fn delete_profile(&self, user_id: i64) -> Result<(), UserProfileError>;

    /// Bind an email address to a profile.
    async fn bind_email(&self, user_id: i64, email: &str) -> Result<(), UserProfileError>;

    /// Bind a Twitter account to a profile.
    async fn bind_twitter(
        &self,
        user_id: i64,
        info: NewTwitterInfo,
    ) -> Result<(), UserProfileError>;

    /// Bind a Telegram account to a profile.
    async fn bind_telegram(
        &self,
        user_id: i64,
        info: NewTelegramInfo,
    ) -> Result<(), UserProfileError>;

    /// Bind a Discord account to a profile.
    async fn bind_discord(
        &self,
        user_id: i64,
        info: NewDiscordInfo,
    ) -> Result<(), UserProfileError>;

    /// Get a profile with all four identity records loaded.
    async fn get_full_profile(&self, user_id: i64) -> Result<UserProfileFull, UserProfileError>;
}
