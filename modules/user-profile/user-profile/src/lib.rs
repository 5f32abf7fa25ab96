//! User Profile Module
//!
//! A profile store with four optional linked identities (email, Twitter,
//! Telegram, Discord) persisted through `SeaORM`.
//!
//! ## Public API
//!
//! The public API is defined in the `user-profile-sdk` crate and re-exported here:
//! - `UserProfileApi` - trait implemented by [`LocalClient`]
//! - `UserProfile`, `UserProfileFull` and the identity records - data models
//! - `UserProfileError` - error types
//!
//! ## Wiring
//!
//! ```ignore
//! let config = UserProfileConfig::load(None)?;
//! let db = infra::storage::db::connect(&config.database).await?;
//! infra::storage::ensure_schema(&db).await?;
//! let client = LocalClient::from_db(db, config.service);
//! ```
// === PUBLIC API (from SDK) ===
pub use user_profile_sdk::{
    DiscordInfo, EmailInfo, NewDiscordInfo, NewTelegramInfo, NewTwitterInfo, TelegramInfo,
    TwitterInfo, UserProfile, UserProfileApi, UserProfileError, UserProfileFull,
};

// === LOCAL CLIENT ===
pub mod local_client;
pub use local_client::LocalClient;

pub mod config;
pub use config::UserProfileConfig;

// === INTERNAL MODULES ===
// Exposed for integration tests; consumers should stick to the SDK types.
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
