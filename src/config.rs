//! Startup configuration for the external Volatility toolchain.
//!
//! Everything here is read from the environment exactly once, before the
//! server starts accepting requests. A broken installation (missing
//! interpreter, missing `vol.py`) is fatal at startup; every later dispatch
//! would fail anyway.

use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default per-invocation timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Ceiling for caller-supplied timeout overrides, in seconds.
pub const DEFAULT_MAX_TIMEOUT_SECS: u64 = 600;

/// Configuration errors detected at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} path does not exist: {path}")]
    MissingPath { name: &'static str, path: String },

    #[error("invalid value for {var}: {value}")]
    BadValue { var: &'static str, value: String },
}

/// Environment-derived configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct VolConfig {
    /// Python interpreter used to run `vol.py`.
    pub python: PathBuf,
    /// Path to the `vol.py` entry script.
    pub script: PathBuf,
    /// Volatility installation directory; working directory for every invocation.
    pub install_dir: PathBuf,
    /// Search directory for bare memory dump file names.
    pub dumps_dir: PathBuf,
    /// Default per-invocation timeout.
    pub default_timeout: Duration,
    /// Ceiling for caller-supplied timeout overrides.
    pub max_timeout: Duration,
}

impl VolConfig {
    /// Read configuration from the environment, applying defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let install_dir = PathBuf::from(
            env::var("VOLATILITY_DIR").unwrap_or_else(|_| "/opt/volatility3".to_string()),
        );
        let script = env::var("VOLATILITY_SCRIPT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| install_dir.join("vol.py"));
        let python = PathBuf::from(
            env::var("VOLATILITY_PYTHON").unwrap_or_else(|_| "/usr/bin/python3".to_string()),
        );
        let dumps_dir = env::var("MEMORY_DUMPS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

        let default_timeout = parse_secs("VOLATILITY_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let max_timeout = parse_secs("VOLATILITY_MAX_TIMEOUT_SECS", DEFAULT_MAX_TIMEOUT_SECS)?;

        Ok(VolConfig {
            python,
            script,
            install_dir,
            dumps_dir,
            default_timeout,
            max_timeout,
        })
    }

    /// Verify that the external toolchain paths exist.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let paths = [
            ("Volatility Python", &self.python),
            ("Volatility Script", &self.script),
            ("Volatility Directory", &self.install_dir),
        ];
        for (name, path) in paths {
            if !path.exists() {
                return Err(ConfigError::MissingPath {
                    name,
                    path: path.display().to_string(),
                });
            }
        }
        Ok(())
    }
}

fn parse_secs(var: &'static str, default: u64) -> Result<Duration, ConfigError> {
    match env::var(var) {
        Ok(value) => match value.parse::<u64>() {
            Ok(secs) => Ok(Duration::from_secs(secs)),
            Err(_) => Err(ConfigError::BadValue { var, value }),
        },
        Err(_) => Ok(Duration::from_secs(default)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &std::path::Path) -> VolConfig {
        VolConfig {
            python: dir.join("python3"),
            script: dir.join("vol.py"),
            install_dir: dir.to_path_buf(),
            dumps_dir: dir.to_path_buf(),
            default_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_timeout: Duration::from_secs(DEFAULT_MAX_TIMEOUT_SECS),
        }
    }

    #[test]
    fn test_validate_ok_when_paths_exist() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::write(&config.python, "").unwrap();
        std::fs::write(&config.script, "").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_missing_script() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::write(&config.python, "").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Volatility Script"));
    }
}
