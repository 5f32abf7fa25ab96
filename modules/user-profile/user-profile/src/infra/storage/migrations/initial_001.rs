use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

/// Profiles plus the four identity tables.
///
/// Each identity table keys on the provider's natural id and carries a unique
/// `user_profile_id`, so both binding rules hold at the storage level too.
/// `MySQL` has no partial indexes, so there the address stays unique even
/// across soft-deleted rows.
#[derive(DeriveMigrationName)]
pub struct Migration;

const POSTGRES_UP: &[&str] = &[
    r"
CREATE TABLE IF NOT EXISTS user_profiles (
    id BIGSERIAL PRIMARY KEY,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL,
    deleted_at TIMESTAMPTZ NULL,
    address VARCHAR(255) NOT NULL
)",
    r"CREATE UNIQUE INDEX IF NOT EXISTS idx_user_profiles_address
    ON user_profiles(address) WHERE deleted_at IS NULL",
    r"CREATE INDEX IF NOT EXISTS idx_user_profiles_deleted_at ON user_profiles(deleted_at)",
    r"
CREATE TABLE IF NOT EXISTS email_infos (
    email VARCHAR(255) PRIMARY KEY NOT NULL,
    user_profile_id BIGINT NOT NULL REFERENCES user_profiles(id)
)",
    r"CREATE UNIQUE INDEX IF NOT EXISTS idx_email_infos_user_profile_id ON email_infos(user_profile_id)",
    r"
CREATE TABLE IF NOT EXISTS twitter_infos (
    twitter_id VARCHAR(255) PRIMARY KEY NOT NULL,
    twitter_name VARCHAR(255) NOT NULL,
    twitter_username VARCHAR(255) NOT NULL,
    user_profile_id BIGINT NOT NULL REFERENCES user_profiles(id)
)",
    r"CREATE UNIQUE INDEX IF NOT EXISTS idx_twitter_infos_user_profile_id ON twitter_infos(user_profile_id)",
    r"
CREATE TABLE IF NOT EXISTS telegram_infos (
    telegram_id BIGINT PRIMARY KEY NOT NULL,
    telegram_first_name VARCHAR(255) NOT NULL,
    telegram_last_name VARCHAR(255) NOT NULL,
    telegram_username VARCHAR(255) NOT NULL,
    telegram_photo VARCHAR(255) NOT NULL,
    user_profile_id BIGINT NOT NULL REFERENCES user_profiles(id)
)",
    r"CREATE UNIQUE INDEX IF NOT EXISTS idx_telegram_infos_user_profile_id ON telegram_infos(user_profile_id)",
    r"
CREATE TABLE IF NOT EXISTS discord_infos (
    discord_id VARCHAR(255) PRIMARY KEY NOT NULL,
    discord_name VARCHAR(255) NOT NULL,
    discord_username VARCHAR(255) NOT NULL,
    discord_email VARCHAR(255) NOT NULL,
    user_profile_id BIGINT NOT NULL REFERENCES user_profiles(id)
)",
    r"CREATE UNIQUE INDEX IF NOT EXISTS idx_discord_infos_user_profile_id ON discord_infos(user_profile_id)",
];

const MYSQL_UP: &[&str] = &[
    r"
CREATE TABLE IF NOT EXISTS user_profiles (
    id BIGINT PRIMARY KEY AUTO_INCREMENT,
    created_at DATETIME(3) NOT NULL,
    updated_at DATETIME(3) NOT NULL,
    deleted_at DATETIME(3) NULL,
    address VARCHAR(255) NOT NULL,
    UNIQUE KEY idx_user_profiles_address (address),
    KEY idx_user_profiles_deleted_at (deleted_at)
) DEFAULT CHARSET = utf8mb4",
    r"
CREATE TABLE IF NOT EXISTS email_infos (
    email VARCHAR(255) PRIMARY KEY NOT NULL,
    user_profile_id BIGINT NOT NULL,
    UNIQUE KEY idx_email_infos_user_profile_id (user_profile_id),
    CONSTRAINT fk_email_infos_user_profile FOREIGN KEY (user_profile_id) REFERENCES user_profiles(id)
) DEFAULT CHARSET = utf8mb4",
    r"
CREATE TABLE IF NOT EXISTS twitter_infos (
    twitter_id VARCHAR(255) PRIMARY KEY NOT NULL,
    twitter_name VARCHAR(255) NOT NULL,
    twitter_username VARCHAR(255) NOT NULL,
    user_profile_id BIGINT NOT NULL,
    UNIQUE KEY idx_twitter_infos_user_profile_id (user_profile_id),
    CONSTRAINT fk_twitter_infos_user_profile FOREIGN KEY (user_profile_id) REFERENCES user_profiles(id)
) DEFAULT CHARSET = utf8mb4",
    r"
CREATE TABLE IF NOT EXISTS telegram_infos (
    telegram_id BIGINT PRIMARY KEY NOT NULL,
    telegram_first_name VARCHAR(255) NOT NULL,
    telegram_last_name VARCHAR(255) NOT NULL,
    telegram_username VARCHAR(255) NOT NULL,
    telegram_photo VARCHAR(255) NOT NULL,
    user_profile_id BIGINT NOT NULL,
    UNIQUE KEY idx_telegram_infos_user_profile_id (user_profile_id),
    CONSTRAINT fk_telegram_infos_user_profile FOREIGN KEY (user_profile_id) REFERENCES user_profiles(id)
) DEFAULT CHARSET = utf8mb4",
    r"
CREATE TABLE IF NOT EXISTS discord_infos (
    discord_id VARCHAR(255) PRIMARY KEY NOT NULL,
    discord_name VARCHAR(255) NOT NULL,
    discord_username VARCHAR(255) NOT NULL,
    discord_email VARCHAR(255) NOT NULL,
    user_profile_id BIGINT NOT NULL,
    UNIQUE KEY idx_discord_infos_user_profile_id (user_profile_id),
    CONSTRAINT fk_discord_infos_user_profile FOREIGN KEY (user_profile_id) REFERENCES user_profiles(id)
) DEFAULT CHARSET = utf8mb4",
];

const SQLITE_UP: &[&str] = &[
    r"
CREATE TABLE IF NOT EXISTS user_profiles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    deleted_at TEXT NULL,
    address TEXT NOT NULL
)",
    r"CREATE UNIQUE INDEX IF NOT EXISTS idx_user_profiles_address
    ON user_profiles(address) WHERE deleted_at IS NULL",
    r"CREATE INDEX IF NOT EXISTS idx_user_profiles_deleted_at ON user_profiles(deleted_at)",
    r"
CREATE TABLE IF NOT EXISTS email_infos (
    email TEXT PRIMARY KEY NOT NULL,
    user_profile_id INTEGER NOT NULL REFERENCES user_profiles(id)
)",
    r"CREATE UNIQUE INDEX IF NOT EXISTS idx_email_infos_user_profile_id ON email_infos(user_profile_id)",
    r"
CREATE TABLE IF NOT EXISTS twitter_infos (
    twitter_id TEXT PRIMARY KEY NOT NULL,
    twitter_name TEXT NOT NULL,
    twitter_username TEXT NOT NULL,
    user_profile_id INTEGER NOT NULL REFERENCES user_profiles(id)
)",
    r"CREATE UNIQUE INDEX IF NOT EXISTS idx_twitter_infos_user_profile_id ON twitter_infos(user_profile_id)",
    r"
CREATE TABLE IF NOT EXISTS telegram_infos (
    telegram_id INTEGER PRIMARY KEY NOT NULL,
    telegram_first_name TEXT NOT NULL,
    telegram_last_name TEXT NOT NULL,
    telegram_username TEXT NOT NULL,
    telegram_photo TEXT NOT NULL,
    user_profile_id INTEGER NOT NULL REFERENCES user_profiles(id)
)",
    r"CREATE UNIQUE INDEX IF NOT EXISTS idx_telegram_infos_user_profile_id ON telegram_infos(user_profile_id)",
    r"
CREATE TABLE IF NOT EXISTS discord_infos (
    discord_id TEXT PRIMARY KEY NOT NULL,
    discord_name TEXT NOT NULL,
    discord_username TEXT NOT NULL,
    discord_email TEXT NOT NULL,
    user_profile_id INTEGER NOT NULL REFERENCES user_profiles(id)
)",
    r"CREATE UNIQUE INDEX IF NOT EXISTS idx_discord_infos_user_profile_id ON discord_infos(user_profile_id)",
];

const DOWN: &[&str] = &[
    "DROP TABLE IF EXISTS discord_infos",
    "DROP TABLE IF EXISTS telegram_infos",
    "DROP TABLE IF EXISTS twitter_infos",
    "DROP TABLE IF EXISTS email_infos",
    "DROP TABLE IF EXISTS user_profiles",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let statements = match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => POSTGRES_UP,
            sea_orm::DatabaseBackend::MySql => MYSQL_UP,
            sea_orm::DatabaseBackend::Sqlite => SQLITE_UP,
        };

        let conn = manager.get_connection();
        for sql in statements {
            conn.execute_unprepared(sql).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        for sql in DOWN {
            conn.execute_unprepared(sql).await?;
        }
        Ok(())
    }
}
