#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for user-profile integration tests

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use user_profile::config::DatabaseConfig;
use user_profile::domain::service::{Service, ServiceConfig};
use user_profile::infra::storage::{SeaOrmProfileRepository, db, ensure_schema};
use user_profile::{LocalClient, NewDiscordInfo, NewTelegramInfo, NewTwitterInfo};

/// Fresh in-memory database with the schema applied.
///
/// A single pooled connection keeps every query on the same `:memory:` database.
pub async fn setup_db() -> DatabaseConnection {
    let cfg = DatabaseConfig {
        dsn: Some("sqlite::memory:".to_owned()),
        max_conns: 1,
        ..Default::default()
    };
    let db = db::connect(&cfg).await.expect("connect to sqlite");
    ensure_schema(&db).await.expect("apply schema");
    db
}

pub async fn create_client() -> LocalClient {
    LocalClient::from_db(setup_db().await, ServiceConfig::default())
}

pub async fn create_service(config: ServiceConfig) -> Arc<Service<SeaOrmProfileRepository>> {
    let repo = Arc::new(SeaOrmProfileRepository::new());
    Arc::new(Service::new(setup_db().await, repo, config))
}

pub fn twitter(id: &str) -> NewTwitterInfo {
    NewTwitterInfo::new(id, "Twitter User", "twitteruser")
}

pub fn telegram(id: i64) -> NewTelegramInfo {
    NewTelegramInfo {
        telegram_id: id,
        first_name: "Telegram User1".to_owned(),
        last_name: "Telegram User2".to_owned(),
        username: "Telegramuser".to_owned(),
        photo_url: String::new(),
    }
}

pub fn discord(id: &str) -> NewDiscordInfo {
    NewDiscordInfo {
        discord_id: id.to_owned(),
        name: "Discord User".to_owned(),
        username: "discorduser".to_owned(),
        email: String::new(),
    }
}
