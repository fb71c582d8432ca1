use serde::{Deserialize, Serialize};

use super::audit::AuditConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::shaper::ShaperConfig;
use crate::synthetic_answer::synthetic_address;

/// Main configuration structure for chaff-dns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Server configuration (bind address, port)
    #[serde(default)]
    pub server: ServerConfig,

    /// Response shaping configuration (record count, address prefix)
    #[serde(default)]
    pub shaper: ShaperConfig,

    /// Audit trail configuration (file path, delimiter)
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. chaff-dns.toml in current directory
    /// 3. /etc/chaff-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("chaff-dns.toml").exists() {
            Self::from_file("chaff-dns.toml")?
        } else if std::path::Path::new("/etc/chaff-dns/config.toml").exists() {
            Self::from_file("/etc/chaff-dns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(path) = overrides.audit_path {
            self.audit.path = path;
        }
        if let Some(count) = overrides.record_count {
            self.shaper.record_count = count;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.shaper.record_count == 0 {
            return Err(ConfigError::Validation(
                "Shaper record count cannot be 0".to_string(),
            ));
        }

        // The prefix must leave room for the hex index at both ends of the
        // range, otherwise every query would fail at record construction.
        for index in [0, self.shaper.record_count - 1] {
            if synthetic_address(&self.shaper.address_prefix, index).is_err() {
                return Err(ConfigError::Validation(format!(
                    "Address prefix '{}' does not form a valid IPv6 address at index {}",
                    self.shaper.address_prefix, index
                )));
            }
        }

        if self.audit.path.is_empty() {
            return Err(ConfigError::Validation(
                "Audit path cannot be empty".to_string(),
            ));
        }

        if matches!(self.audit.field_delimiter, '"' | '\r' | '\n') {
            return Err(ConfigError::Validation(format!(
                "Audit field delimiter {:?} collides with quoting",
                self.audit.field_delimiter
            )));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub audit_path: Option<String>,
    pub record_count: Option<u32>,
    pub log_level: Option<String>,
}
