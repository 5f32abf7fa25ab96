//! User Profile SDK
//!
//! This crate provides the public API for the `user-profile` module:
//! - `UserProfileApi` trait
//! - Model types for profiles and the four linked identity records
//! - Error type (`UserProfileError`)
//!
//! ## Usage
//!
//! ```ignore
//! use user_profile_sdk::{NewTwitterInfo, UserProfileApi};
//!
//! let profile = client.create_profile("0x12345...").await?;
//! client
//!     .bind_twitter(profile.id, NewTwitterInfo::new("12345", "Twitter User", "twitteruser"))
//!     .await?;
//! let full = client.get_full_profile(profile.id).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::UserProfileApi;
pub use errors::UserProfileError;
pub use models::{
    DiscordInfo, EmailInfo, NewDiscordInfo, NewTelegramInfo, NewTwitterInfo, TelegramInfo,
    TwitterInfo, UserProfile, UserProfileFull,
};
