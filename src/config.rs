// src/config.rs
use std::path::PathBuf;

use serde::Deserialize;

use crate::errors::{Result, SimError};

/// Values an optional TOML config file may supply. Every field is
/// optional; environment variables override whatever the file sets.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub executable: Option<PathBuf>,
    pub scratch_root: Option<PathBuf>,
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub timeout_secs: Option<u64>,
    pub strict_decode: Option<bool>,
}

/// High-level application configuration.
///
/// All file paths live here and are injected into the handlers through
/// `AppState`; nothing below this layer reads ambient globals.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the simulation executable.
    pub executable: PathBuf,
    /// Directory under which per-run scratch directories are created.
    pub scratch_root: PathBuf,
    pub bind_address: String,
    pub port: u16,
    /// Upper bound on a single simulation run, in seconds.
    pub timeout_secs: u64,
    /// When true, a malformed JSON body is rejected with a 400 instead
    /// of degrading to an empty parameter set.
    pub strict_decode: bool,
}

impl AppConfig {
    /// Load configuration from the environment, layered on top of the
    /// TOML file named by `SIMBRIDGE_CONFIG` when that variable is set.
    pub fn from_env() -> Result<Self> {
        let file = match std::env::var("SIMBRIDGE_CONFIG") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path).map_err(|e| {
                    SimError::Config(format!("cannot read config file {}: {}", path, e))
                })?;
                toml::from_str(&raw)?
            }
            Err(_) => FileConfig::default(),
        };
        Self::from_file_and_env(file)
    }

    fn from_file_and_env(file: FileConfig) -> Result<Self> {
        let executable = std::env::var("SIMBRIDGE_EXECUTABLE")
            .map(PathBuf::from)
            .ok()
            .or(file.executable)
            .unwrap_or_else(|| PathBuf::from("bin/tuberculosis_simulation"));

        let scratch_root = std::env::var("SIMBRIDGE_SCRATCH_DIR")
            .map(PathBuf::from)
            .ok()
            .or(file.scratch_root)
            .unwrap_or_else(|| std::env::temp_dir().join("simbridge"));

        let bind_address = std::env::var("SIMBRIDGE_BIND")
            .ok()
            .or(file.bind_address)
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match std::env::var("SIMBRIDGE_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| SimError::Config(format!("invalid SIMBRIDGE_PORT: {}", raw)))?,
            Err(_) => file.port.unwrap_or(8080),
        };

        let timeout_secs = match std::env::var("SIMBRIDGE_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                SimError::Config(format!("invalid SIMBRIDGE_TIMEOUT_SECS: {}", raw))
            })?,
            Err(_) => file.timeout_secs.unwrap_or(60),
        };

        let strict_decode = match std::env::var("SIMBRIDGE_STRICT_DECODE") {
            Ok(raw) => matches!(raw.as_str(), "1" | "true" | "yes"),
            Err(_) => file.strict_decode.unwrap_or(false),
        };

        Ok(AppConfig {
            executable,
            scratch_root,
            bind_address,
            port,
            timeout_secs,
            strict_decode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_config_parses_partial_toml() {
        let file: FileConfig = toml::from_str(
            r#"
            executable = "/opt/sim/tb"
            timeout_secs = 30
            "#,
        )
        .unwrap();

        assert_eq!(file.executable, Some(PathBuf::from("/opt/sim/tb")));
        assert_eq!(file.timeout_secs, Some(30));
        assert_eq!(file.port, None);
        assert_eq!(file.strict_decode, None);
    }

    #[test]
    fn test_file_values_fill_unset_fields() {
        let file: FileConfig = toml::from_str(
            r#"
            executable = "/opt/sim/tb"
            port = 9999
            strict_decode = true
            "#,
        )
        .unwrap();

        let config = AppConfig::from_file_and_env(file).unwrap();
        assert_eq!(config.executable, PathBuf::from("/opt/sim/tb"));
        assert_eq!(config.port, 9999);
        assert!(config.strict_decode);
        // untouched fields fall back to defaults
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.bind_address, "0.0.0.0");
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let config = AppConfig::from_file_and_env(FileConfig::default()).unwrap();
        assert_eq!(config.executable, PathBuf::from("bin/tuberculosis_simulation"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.timeout_secs, 60);
        assert!(!config.strict_decode);
    }

    #[test]
    fn test_mistyped_toml_value_fails_to_parse() {
        let result: std::result::Result<FileConfig, _> = toml::from_str("port = \"not a number\"");
        assert!(result.is_err());
    }
}
