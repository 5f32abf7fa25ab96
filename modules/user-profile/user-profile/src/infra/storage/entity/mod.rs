pub mod discord_info;
pub mod email_info;
pub mod telegram_info;
pub mod twitter_info;
pub mod user_profile;
