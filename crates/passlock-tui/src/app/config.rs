//! TUI configuration persistence
//!
//! Saves and loads user preferences such as passcode length and the
//! mismatch display delay.

use std::fs;
use std::path::PathBuf;

use passlock_core::{PasscodeMode, DEFAULT_PASSCODE_LENGTH};
use serde::{Deserialize, Serialize};

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "passlock";

/// Delay before the deferred reset after a confirmation mismatch
const DEFAULT_MISMATCH_RESET_MS: u64 = 600;

/// TUI configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Number of digits a passcode must have
    #[serde(default = "default_passcode_length")]
    pub passcode_length: usize,

    /// Milliseconds an error stays on screen before the flow restarts
    #[serde(default = "default_mismatch_reset_ms")]
    pub mismatch_reset_ms: u64,

    /// Mode the first session starts in
    #[serde(default)]
    pub initial_mode: ModeConfig,
}

/// Passcode mode configuration (serializable version)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModeConfig {
    /// Create a new passcode
    #[default]
    Create,
    /// Verify an existing passcode
    Verify,
    /// Replace an existing passcode
    Change,
}

impl From<ModeConfig> for PasscodeMode {
    fn from(config: ModeConfig) -> Self {
        match config {
            ModeConfig::Create => PasscodeMode::Create,
            ModeConfig::Verify => PasscodeMode::Verify,
            ModeConfig::Change => PasscodeMode::Change,
        }
    }
}

impl From<PasscodeMode> for ModeConfig {
    fn from(mode: PasscodeMode) -> Self {
        match mode {
            PasscodeMode::Create => ModeConfig::Create,
            PasscodeMode::Verify => ModeConfig::Verify,
            PasscodeMode::Change => ModeConfig::Change,
        }
    }
}

fn default_passcode_length() -> usize {
    DEFAULT_PASSCODE_LENGTH
}

fn default_mismatch_reset_ms() -> u64 {
    DEFAULT_MISMATCH_RESET_MS
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            passcode_length: default_passcode_length(),
            mismatch_reset_ms: default_mismatch_reset_ms(),
            initial_mode: ModeConfig::Create,
        }
    }
}

impl TuiConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        // Try XDG_CONFIG_HOME first, then fall back to ~/.config
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_config).join(CONFIG_DIR_NAME);
            return Some(path);
        }

        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
    }

    /// Get the full config file path
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from disk
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let path = match Self::config_file_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file: {}", e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_dir = Self::config_dir().ok_or(ConfigError::NoConfigDir)?;
        let config_file = config_dir.join(CONFIG_FILE_NAME);

        // Ensure config directory exists
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io(e.to_string()))?;
        }

        // Serialize and write
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(&config_file, contents).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::debug!("Saved config to {:?}", config_file);
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert_eq!(config.passcode_length, 4);
        assert_eq!(config.mismatch_reset_ms, 600);
        assert_eq!(config.initial_mode, ModeConfig::Create);
    }

    #[test]
    fn test_config_serialization() {
        let config = TuiConfig {
            passcode_length: 6,
            mismatch_reset_ms: 250,
            initial_mode: ModeConfig::Verify,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.passcode_length, 6);
        assert_eq!(parsed.mismatch_reset_ms, 250);
        assert_eq!(parsed.initial_mode, ModeConfig::Verify);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: TuiConfig = serde_json::from_str(r#"{"passcode_length": 8}"#).unwrap();
        assert_eq!(parsed.passcode_length, 8);
        assert_eq!(parsed.mismatch_reset_ms, 600);
        assert_eq!(parsed.initial_mode, ModeConfig::Create);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        let config = TuiConfig {
            passcode_length: 6,
            mismatch_reset_ms: 300,
            initial_mode: ModeConfig::Change,
        };
        config.save().unwrap();

        let loaded = TuiConfig::load();
        assert_eq!(loaded.passcode_length, 6);
        assert_eq!(loaded.mismatch_reset_ms, 300);
        assert_eq!(loaded.initial_mode, ModeConfig::Change);

        std::env::remove_var("XDG_CONFIG_HOME");
    }

    #[test]
    fn test_mode_conversion() {
        assert_eq!(PasscodeMode::from(ModeConfig::Create), PasscodeMode::Create);
        assert_eq!(PasscodeMode::from(ModeConfig::Verify), PasscodeMode::Verify);
        assert_eq!(PasscodeMode::from(ModeConfig::Change), PasscodeMode::Change);
        assert_eq!(ModeConfig::from(PasscodeMode::Change), ModeConfig::Change);
    }
}
