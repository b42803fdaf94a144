use serde::{Deserialize, Serialize};

use super::deleg::DelegBlock;
use super::directive::parse_directives;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "deleg-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/deleg-dns/config.toml";

/// Main configuration structure for deleg-dns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Enclosing server block (its zones are the default for bare blocks)
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Structured `deleg` blocks, in declaration order
    #[serde(default)]
    pub deleg: Vec<DelegBlock>,

    /// Optional server-block text file holding `deleg` directives
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directives_file: Option<String>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. deleg-dns.toml in current directory
    /// 3. /etc/deleg-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(file) = overrides.directives_file {
            self.directives_file = Some(file);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.zones.is_empty() {
            return Err(ConfigError::Validation(
                "Server block has no zones".to_string(),
            ));
        }

        for block in &self.deleg {
            if block.responses.iter().any(|r| r.trim().is_empty()) {
                return Err(ConfigError::Validation(format!(
                    "Empty response record in deleg block for zones {:?}",
                    block.zones
                )));
            }
        }

        if self.deleg.iter().filter(|b| b.is_bare()).count() > 1 {
            return Err(ConfigError::DuplicateBlock);
        }

        Ok(())
    }

    /// All `deleg` blocks: the structured ones first, then those read from
    /// `directives_file`, each group in declaration order.
    pub fn delegation_blocks(&self) -> Result<Vec<DelegBlock>, ConfigError> {
        let mut blocks = self.deleg.clone();

        if let Some(ref path) = self.directives_file {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| ConfigError::FileRead(path.clone(), e.to_string()))?;
            blocks.extend(parse_directives(&contents)?);
        }

        if blocks.iter().filter(|b| b.is_bare()).count() > 1 {
            return Err(ConfigError::DuplicateBlock);
        }

        Ok(blocks)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub directives_file: Option<String>,
}
