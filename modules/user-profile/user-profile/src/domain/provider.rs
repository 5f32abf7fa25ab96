//! Identity provider descriptors.
//!
//! The four providers share one bind routine; everything that differs between
//! them is captured here: the provider name, the natural-key column, and
//! whether an empty key bypasses the "identity already bound" check.

use std::fmt;

use user_profile_sdk::{NewDiscordInfo, NewTelegramInfo, NewTwitterInfo};

/// External identity providers a profile can be linked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityKind {
    Email,
    Twitter,
    Telegram,
    Discord,
}

/// Static per-provider metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderDescriptor {
    pub name: &'static str,
    pub key_column: &'static str,
    pub skip_identity_check_when_empty: bool,
}

impl IdentityKind {
    pub const ALL: [Self; 4] = [Self::Email, Self::Twitter, Self::Telegram, Self::Discord];

    #[must_use]
    pub const fn descriptor(self) -> ProviderDescriptor {
        match self {
            Self::Email => ProviderDescriptor {
                name: "email",
                key_column: "email",
                skip_identity_check_when_empty: false,
            },
            Self::Twitter => ProviderDescriptor {
                name: "twitter",
                key_column: "twitter_id",
                skip_identity_check_when_empty: false,
            },
            Self::Telegram => ProviderDescriptor {
                name: "telegram",
                key_column: "telegram_id",
                skip_identity_check_when_empty: false,
            },
            // Discord bindings may arrive before the account id is known.
            Self::Discord => ProviderDescriptor {
                name: "discord",
                key_column: "discord_id",
                skip_identity_check_when_empty: true,
            },
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.descriptor().name
    }
}

impl fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Natural key of an identity record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityKey {
    Text(String),
    Integer(i64),
}

impl IdentityKey {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Integer(v) => *v == 0,
        }
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(v) => write!(f, "{v}"),
        }
    }
}

/// One provider's attribute set, ready to be linked to a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityBinding {
    Email { email: String },
    Twitter(NewTwitterInfo),
    Telegram(NewTelegramInfo),
    Discord(NewDiscordInfo),
}

impl IdentityBinding {
    #[must_use]
    pub const fn kind(&self) -> IdentityKind {
        match self {
            Self::Email { .. } => IdentityKind::Email,
            Self::Twitter(_) => IdentityKind::Twitter,
            Self::Telegram(_) => IdentityKind::Telegram,
            Self::Discord(_) => IdentityKind::Discord,
        }
    }

    #[must_use]
    pub fn key(&self) -> IdentityKey {
        match self {
            Self::Email { email } => IdentityKey::Text(email.clone()),
            Self::Twitter(info) => IdentityKey::Text(info.twitter_id.clone()),
            Self::Telegram(info) => IdentityKey::Integer(info.telegram_id),
            Self::Discord(info) => IdentityKey::Text(info.discord_id.clone()),
        }
    }

    /// Whether the "identity already bound" check applies to this binding.
    #[must_use]
    pub fn checks_identity(&self) -> bool {
        let descriptor = self.kind().descriptor();
        !(descriptor.skip_identity_check_when_empty && self.key().is_empty())
    }

    /// String attributes paired with their column names, for length validation.
    #[must_use]
    pub fn text_fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Email { email } => vec![("email", email.as_str())],
            Self::Twitter(info) => vec![
                ("twitter_id", info.twitter_id.as_str()),
                ("twitter_name", info.name.as_str()),
                ("twitter_username", info.username.as_str()),
            ],
            Self::Telegram(info) => vec![
                ("telegram_first_name", info.first_name.as_str()),
                ("telegram_last_name", info.last_name.as_str()),
                ("telegram_username", info.username.as_str()),
                ("telegram_photo", info.photo_url.as_str()),
            ],
            Self::Discord(info) => vec![
                ("discord_id", info.discord_id.as_str()),
                ("discord_name", info.name.as_str()),
                ("discord_username", info.username.as_str()),
                ("discord_email", info.email.as_str()),
            ],
        }
    }
}
