//! Layered server configuration.
//!
//! Precedence, lowest to highest: built-in defaults, YAML file, environment
//! (`MENTORHUB__` prefix, `__` as separator), CLI overrides.

use std::path::Path;

use anyhow::Context;
use directory_sdk::UserRecord;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use mentorship::MentorshipConfig;
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "MENTORHUB__";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    /// Directory seed; stands in for the external user directory until a
    /// remote client is wired in.
    pub directory: DirectoryConfig,
    pub mentorship: MentorshipConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            logging: LoggingConfig::default(),
            directory: DirectoryConfig::default(),
            mentorship: MentorshipConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8087,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SeaORM connection string (`sqlite::memory:`, `sqlite://...`,
    /// `postgres://...`).
    pub dsn: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: "sqlite::memory:".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` env-filter directive, e.g. `info` or `mentorship=debug`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub users: Vec<UserRecord>,
}

impl AppConfig {
    /// Load the layered configuration. A missing `path` means defaults
    /// plus environment only.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file_exact(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        figment
            .extract()
            .context("failed to load server configuration")
    }

    /// Effective configuration for `--print-config` and `check`.
    pub fn to_pretty_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("failed to render configuration")
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8087);
        assert_eq!(config.database.dsn, "sqlite::memory:");
        assert!(!config.mentorship.rerequest_after_rejection);
    }

    #[test]
    fn yaml_then_env_layering() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "mentorhub.yaml",
                r"
server:
  port: 9000
directory:
  users:
    - id: 00000000-0000-0000-0000-000000000001
      name: Grace
      email: grace@example.com
      role: mentor
      skills: [rust]
",
            )?;
            jail.set_env("MENTORHUB__SERVER__PORT", "9100");

            let config = AppConfig::load(Some(Path::new("mentorhub.yaml"))).unwrap();
            assert_eq!(config.server.port, 9100);
            assert_eq!(config.server.host, "127.0.0.1");
            assert_eq!(config.directory.users.len(), 1);
            assert_eq!(config.directory.users[0].name, "Grace");
            Ok(())
        });
    }

    #[test]
    fn log_format_parses_lowercase() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("mentorhub.yaml", "logging:\n  format: json\n")?;
            let config = AppConfig::load(Some(Path::new("mentorhub.yaml"))).unwrap();
            assert_eq!(config.logging.format, LogFormat::Json);
            Ok(())
        });
    }
}
