//! Module configuration.
//!
//! Values are layered with `figment`: built-in defaults, then an optional YAML
//! file, then `DB_*` environment variables.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

use crate::domain::service::ServiceConfig;

/// Environment variables recognised under the `DB_` prefix.
const DB_ENV_KEYS: [&str; 6] = ["dsn", "user", "password", "host", "port", "name"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct UserProfileConfig {
    pub database: DatabaseConfig,
    pub service: ServiceConfig,
}

/// Connection and pool settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct DatabaseConfig {
    /// Full connection string; when set, the discrete fields below are ignored.
    pub dsn: Option<String>,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub max_conns: u32,
    pub min_conns: Option<u32>,
    #[serde(with = "humantime_serde")]
    pub acquire_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: None,
            user: "root".to_owned(),
            password: String::new(),
            host: "127.0.0.1".to_owned(),
            port: 3306,
            name: "test".to_owned(),
            max_conns: 10,
            min_conns: None,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

impl DatabaseConfig {
    /// Connection string handed to the driver.
    #[must_use]
    pub fn dsn(&self) -> String {
        if let Some(dsn) = &self.dsn {
            return dsn.clone();
        }
        format!(
            "mysql://{}:{}@{}:{}/{}?charset=utf8mb4&timezone=SYSTEM",
            urlencoding::encode(&self.user),
            urlencoding::encode(&self.password),
            urlencoding::encode(&self.host),
            self.port,
            urlencoding::encode(&self.name),
        )
    }

    /// Connection string with the password masked, safe for logs.
    #[must_use]
    pub fn redacted_dsn(&self) -> String {
        let dsn = self.dsn();
        if !dsn.contains('@') {
            return dsn;
        }
        match url::Url::parse(&dsn) {
            Ok(mut parsed) => {
                if parsed.password().is_some() {
                    let _ = parsed.set_password(Some("***"));
                }
                parsed.to_string()
            }
            Err(_) => "***".to_owned(),
        }
    }
}

impl UserProfileConfig {
    /// Load configuration from defaults, an optional YAML file and the environment.
    ///
    /// # Errors
    /// Returns an error if any layer contains malformed or unknown keys.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(
            Env::prefixed("DB_")
                .only(&DB_ENV_KEYS)
                .map(|key| format!("database.{key}").into()),
        );
        Self::from_figment(figment)
    }

    /// Extract configuration from a prepared figment.
    ///
    /// # Errors
    /// Returns an error if the figment cannot be deserialized.
    pub fn from_figment(figment: Figment) -> anyhow::Result<Self> {
        let config: Self = figment
            .extract()
            .context("invalid user profile configuration")?;
        tracing::debug!(dsn = %config.database.redacted_dsn(), "Loaded user profile configuration");
        Ok(config)
    }
}
