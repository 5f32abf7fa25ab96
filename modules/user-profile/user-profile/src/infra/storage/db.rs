//! Connection setup and database error conversion helpers.

use std::fmt::Display;

use anyhow::Context;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};

use crate::config::DatabaseConfig;
use crate::domain::error::DomainError;
use crate::domain::provider::IdentityKind;

/// Convert any displayable error into a `DomainError::Database`.
pub fn db_err(e: impl Display) -> DomainError {
    DomainError::database(e.to_string())
}

/// Convert an identity insert failure, keeping constraint violations typed.
pub fn insert_binding_err(e: &DbErr, kind: IdentityKind, user_id: i64) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => {
            DomainError::binding_conflict(kind, message)
        }
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => DomainError::profile_not_found(user_id),
        _ => db_err(e),
    }
}

/// Convert a profile insert failure; a unique violation means the address is taken.
pub fn insert_profile_err(e: &DbErr, address: &str) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::address_taken(address),
        _ => db_err(e),
    }
}

/// Open a pooled connection using the module's database settings.
///
/// # Errors
/// Returns an error if the pool cannot establish a connection.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let redacted = cfg.redacted_dsn();
    tracing::info!(dsn = %redacted, max_conns = cfg.max_conns, "Connecting to database");

    let mut opts = ConnectOptions::new(cfg.dsn());
    opts.max_connections(cfg.max_conns)
        .acquire_timeout(cfg.acquire_timeout)
        .sqlx_logging(false);
    if let Some(min) = cfg.min_conns {
        opts.min_connections(min);
    }

    let db = Database::connect(opts)
        .await
        .with_context(|| format!("failed to connect to {redacted}"))?;
    Ok(db)
}
