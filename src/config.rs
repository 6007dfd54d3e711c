//! Program Configuration
//!
//! Defines where collections are deployed and how the wizard behaves:
//! - Factory contract address
//! - Target chain (id, RPC endpoint, block explorer)
//! - Notification display window and local time zone
//! - Simulated chain timing

use crate::chain::Address;
use crate::util::timestamp::{LocalZone, TimestampError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// File name looked up under the user config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid time zone: {0}")]
    TimeZone(#[from] TimestampError),
}

/// Complete program configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramConfig {
    /// Collection factory contract
    pub factory_address: Address,
    /// Chain the factory lives on
    pub chain: ChainConfig,
    /// Wizard behaviour
    pub wizard: WizardConfig,
    /// Simulated chain used when no real transaction service is wired in
    pub simulation: SimulationConfig,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            // Placeholder until the factory is deployed
            factory_address: Address::ZERO,
            chain: ChainConfig::default(),
            wizard: WizardConfig::default(),
            simulation: SimulationConfig::default(),
        }
    }
}

/// Target chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    pub name: String,
    pub chain_id: u64,
    pub rpc_url: String,
    /// Block explorer base URL, without trailing slash
    pub explorer_url: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            name: "Base".to_string(),
            chain_id: 8453,
            rpc_url: "https://mainnet.base.org".to_string(),
            explorer_url: "https://basescan.org".to_string(),
        }
    }
}

impl ChainConfig {
    /// Explorer page of a transaction
    pub fn tx_url(&self, tx_hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_url.trim_end_matches('/'), tx_hash)
    }
}

/// Wizard behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// How long a notification stays visible
    pub notification_secs: u64,
    /// UTC offset (`+HH:MM`) used to read minting deadlines; process zone if unset
    pub utc_offset: Option<String>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            notification_secs: 4,
            utc_offset: None,
        }
    }
}

impl WizardConfig {
    pub fn notification_window(&self) -> Duration {
        Duration::from_secs(self.notification_secs)
    }

    pub fn local_zone(&self) -> Result<LocalZone, TimestampError> {
        match &self.utc_offset {
            Some(offset) => LocalZone::parse_offset(offset),
            None => Ok(LocalZone::System),
        }
    }
}

/// Simulated chain timing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Delay between submission and confirmation
    pub confirm_delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            confirm_delay_ms: 1500,
        }
    }
}

impl SimulationConfig {
    pub fn confirm_delay(&self) -> Duration {
        Duration::from_millis(self.confirm_delay_ms)
    }
}

impl ProgramConfig {
    /// Default config file location (`~/.config/artist-program/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("artist-program").join(CONFIG_FILE_NAME))
    }

    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.wizard.local_zone()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Load `path` if given, else the default file if it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ProgramConfig::default();
        assert!(config.factory_address.is_zero());
        assert_eq!(config.chain.chain_id, 8453);
        assert_eq!(config.wizard.notification_window(), Duration::from_secs(4));
        assert_eq!(config.wizard.local_zone(), Ok(LocalZone::System));
        assert_eq!(
            config.chain.tx_url("0xabc"),
            "https://basescan.org/tx/0xabc"
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let content = r#"
factory_address = "0x1111111111111111111111111111111111111111"

[wizard]
utc_offset = "+01:00"
"#;
        let config = ProgramConfig::from_toml_str(content, Path::new("test.toml")).unwrap();
        assert_eq!(
            config.factory_address.to_string(),
            "0x1111111111111111111111111111111111111111"
        );
        assert_eq!(config.wizard.notification_secs, 4);
        assert_eq!(config.chain, ChainConfig::default());
        assert!(matches!(config.wizard.local_zone(), Ok(LocalZone::Fixed(_))));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let bad_address = r#"factory_address = "0x12""#;
        assert!(matches!(
            ProgramConfig::from_toml_str(bad_address, Path::new("a.toml")),
            Err(ConfigError::Parse { .. })
        ));

        let bad_zone = "[wizard]\nutc_offset = \"noon\"\n";
        assert!(matches!(
            ProgramConfig::from_toml_str(bad_zone, Path::new("b.toml")),
            Err(ConfigError::TimeZone(_))
        ));
    }

    #[test]
    fn test_load_from_file_and_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut config = ProgramConfig::default();
        config.simulation.confirm_delay_ms = 10;
        write!(file, "{}", config.to_toml_string().unwrap()).unwrap();

        let loaded = ProgramConfig::load_or_default(Some(file.path())).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            ProgramConfig::load(&missing),
            Err(ConfigError::Io { .. })
        ));
    }
}
