//! Infrastructure storage layer - database persistence.
//!
//! This module contains ALL SeaORM-specific code:
//! - `entity/` - entity definitions for profiles and the four identity tables
//! - `mapper.rs` - conversions between entity models and SDK contract types
//! - `migrations/` - database schema migrations
//! - `sea_orm_repo.rs` - `ProfileRepository` implementation
//! - `db.rs` - connection setup and error conversion

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;

pub mod db;
pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod sea_orm_repo;

#[cfg(test)]
mod mapper_test;

pub use sea_orm_repo::SeaOrmProfileRepository;

/// Bring the schema up to date. Safe to call on every start.
///
/// # Errors
/// Returns an error if any pending migration fails.
pub async fn ensure_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    migrations::Migrator::up(db, None).await?;
    tracing::info!("User profile schema is up to date");
    Ok(())
}
