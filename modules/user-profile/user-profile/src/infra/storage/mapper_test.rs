#[cfg(test)]
mod tests {
    use super::super::*;
    use time::OffsetDateTime;
    use user_profile_sdk::{DiscordInfo, TelegramInfo, UserProfile};

    #[test]
    fn test_entity_to_profile_conversion() {
        let now = OffsetDateTime::now_utc();
        let entity = entity::user_profile::Model {
            id: 42,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            address: "0x12345...".to_owned(),
        };

        let profile: UserProfile = entity.into();

        assert_eq!(profile.id, 42);
        assert_eq!(profile.address, "0x12345...");
        assert_eq!(profile.created_at, now);
        assert_eq!(profile.deleted_at, None);
    }

    #[test]
    fn test_entity_to_telegram_conversion() {
        let entity = entity::telegram_info::Model {
            telegram_id: 12345,
            telegram_first_name: "Telegram User1".to_owned(),
            telegram_last_name: "Telegram User2".to_owned(),
            telegram_username: "Telegramuser".to_owned(),
            telegram_photo: String::new(),
            user_profile_id: 1,
        };

        let info: TelegramInfo = entity.into();

        assert!(info.is_bound());
        assert_eq!(info.telegram_id, 12345);
        assert_eq!(info.telegram_last_name, "Telegram User2");
        assert_eq!(info.user_profile_id, 1);
    }

    #[test]
    fn test_entity_to_discord_conversion_keeps_empty_id() {
        let entity = entity::discord_info::Model {
            discord_id: String::new(),
            discord_name: "Discord User".to_owned(),
            discord_username: "discorduser".to_owned(),
            discord_email: String::new(),
            user_profile_id: 3,
        };

        let info: DiscordInfo = entity.into();

        assert!(info.discord_id.is_empty());
        assert!(info.is_bound());
    }
}
