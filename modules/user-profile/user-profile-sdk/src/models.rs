//! Public models for the `user-profile` module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the `user-profile` module and its consumers.
//!
//! Identity records implement `Default`: a provider that has no binding is
//! returned as its default value, so callers check `is_bound()` rather than an
//! `Option`. Natural keys may legitimately be empty (or `0` for Telegram), so
//! `is_bound()` also looks at the owning profile id, which is never `0` for a
//! stored record.

use time::OffsetDateTime;

/// The aggregate root: one account identified by a wallet-style address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: i64,
    pub address: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub deleted_at: Option<OffsetDateTime>,
}

/// Email bound to a profile. The email is the natural key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmailInfo {
    pub email: String,
    pub user_profile_id: i64,
}

impl EmailInfo {
    #[must_use]
    pub fn is_bound(&self) -> bool {
        !self.email.is_empty() || self.user_profile_id != 0
    }
}

/// Twitter account bound to a profile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TwitterInfo {
    pub twitter_id: String,
    pub twitter_name: String,
    pub twitter_username: String,
    pub user_profile_id: i64,
}

impl TwitterInfo {
    #[must_use]
    pub fn is_bound(&self) -> bool {
        !self.twitter_id.is_empty() || self.user_profile_id != 0
    }
}

/// Telegram account bound to a profile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TelegramInfo {
    pub telegram_id: i64,
    pub telegram_first_name: String,
    pub telegram_last_name: String,
    pub telegram_username: String,
    pub telegram_photo: String,
    pub user_profile_id: i64,
}

impl TelegramInfo {
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.telegram_id != 0 || self.user_profile_id != 0
    }
}

/// Discord account bound to a profile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiscordInfo {
    pub discord_id: String,
    pub discord_name: String,
    pub discord_username: String,
    pub discord_email: String,
    pub user_profile_id: i64,
}

impl DiscordInfo {
    #[must_use]
    pub fn is_bound(&self) -> bool {
        !self.discord_id.is_empty() || self.user_profile_id != 0
    }
}

/// Profile together with all four linked identity records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfileFull {
    pub profile: UserProfile,
    pub email: EmailInfo,
    pub twitter: TwitterInfo,
    pub telegram: TelegramInfo,
    pub discord: DiscordInfo,
}

/// Data for binding a Twitter account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTwitterInfo {
    pub twitter_id: String,
    pub name: String,
    pub username: String,
}

impl NewTwitterInfo {
    #[must_use]
    pub fn new(
        twitter_id: impl Into<String>,
        name: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            twitter_id: twitter_id.into(),
            name: name.into(),
            username: username.into(),
        }
    }
}

/// Data for binding a Telegram account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTelegramInfo {
    pub telegram_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub photo_url: String,
}

/// Data for binding a Discord account. `discord_id` may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDiscordInfo {
    pub discord_id: String,
    pub name: String,
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_records_are_unbound() {
        assert!(!EmailInfo::default().is_bound());
        assert!(!TwitterInfo::default().is_bound());
        assert!(!TelegramInfo::default().is_bound());
        assert!(!DiscordInfo::default().is_bound());
    }

    #[test]
    fn discord_with_empty_id_is_bound_when_owned() {
        let info = DiscordInfo {
            user_profile_id: 7,
            ..DiscordInfo::default()
        };
        assert!(info.is_bound());
    }

    #[test]
    fn empty_keys_are_bound_when_owned() {
        let email = EmailInfo {
            user_profile_id: 3,
            ..EmailInfo::default()
        };
        let twitter = TwitterInfo {
            user_profile_id: 3,
            ..TwitterInfo::default()
        };
        let telegram = TelegramInfo {
            user_profile_id: 3,
            ..TelegramInfo::default()
        };
        assert!(email.is_bound());
        assert!(twitter.is_bound());
        assert!(telegram.is_bound());
    }

    #[test]
    fn telegram_bound_by_id() {
        let info = TelegramInfo {
            telegram_id: 12345,
            user_profile_id: 1,
            ..TelegramInfo::default()
        };
        assert!(info.is_bound());
    }
}
