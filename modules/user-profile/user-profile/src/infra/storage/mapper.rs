use user_profile_sdk::{DiscordInfo, EmailInfo, TelegramInfo, TwitterInfo, UserProfile};

use crate::infra::storage::entity::{
    discord_info, email_info, telegram_info, twitter_info, user_profile,
};

impl From<user_profile::Model> for UserProfile {
    fn from(e: user_profile::Model) -> Self {
        Self {
            id: e.id,
            address: e.address,
            created_at: e.created_at,
            updated_at: e.updated_at,
            deleted_at: e.deleted_at,
        }
    }
}

impl From<email_info::Model> for EmailInfo {
    fn from(e: email_info::Model) -> Self {
        Self {
            email: e.email,
            user_profile_id: e.user_profile_id,
        }
    }
}

impl From<twitter_info::Model> for TwitterInfo {
    fn from(e: twitter_info::Model) -> Self {
        Self {
            twitter_id: e.twitter_id,
            twitter_name: e.twitter_name,
            twitter_username: e.twitter_username,
            user_profile_id: e.user_profile_id,
        }
    }
}

impl From<telegram_info::Model> for TelegramInfo {
    fn from(e: telegram_info::Model) -> Self {
        Self {
            telegram_id: e.telegram_id,
            telegram_first_name: e.telegram_first_name,
            telegram_last_name: e.telegram_last_name,
            telegram_username: e.telegram_username,
            telegram_photo: e.telegram_photo,
            user_profile_id: e.user_profile_id,
        }
    }
}

impl From<discord_info::Model> for DiscordInfo {
    fn from(e: discord_info::Model) -> Self {
        Self {
            discord_id: e.discord_id,
            discord_name: e.discord_name,
            discord_username: e.discord_username,
            discord_email: e.discord_email,
            user_profile_id: e.user_profile_id,
        }
    }
}
