//! Configuration management and validation.
//!
//! Configuration is layered: built-in defaults, then an optional JSON file,
//! then `SWISSEPH_*` environment variables. The command builder reads it once
//! at construction and never mutates it.

use crate::codes::{EphOption, HouseSystem};
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_EPHEMERIS_DIR, DEFAULT_EXECUTABLE,
    DEFAULT_HOUSE_SYSTEM, DEFAULT_TIMEOUT_SECS, env_vars,
};
use crate::error::{Result, SwissephError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Settings shared by every request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwissephConfig {
    /// Path to the swetest executable
    pub executable: PathBuf,

    /// Directory holding the ephemeris data files
    pub ephemeris_dir: PathBuf,

    /// Ephemeris options applied to every request
    pub eph_options: Vec<EphOption>,

    /// House system code used when a request does not name one
    ///
    /// Kept as a raw code so that an invalid value falls back to Placidus
    /// instead of rejecting the whole configuration.
    pub default_house_system: String,

    /// Seconds before a running swetest process is killed
    pub timeout_secs: u64,
}

impl Default for SwissephConfig {
    fn default() -> Self {
        Self {
            executable: PathBuf::from(DEFAULT_EXECUTABLE),
            ephemeris_dir: PathBuf::from(DEFAULT_EPHEMERIS_DIR),
            eph_options: vec![
                EphOption::SwissType,
                EphOption::TruePositions,
                EphOption::NoNutation,
            ],
            default_house_system: DEFAULT_HOUSE_SYSTEM.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SwissephConfig {
    /// Set the swetest executable path
    pub fn with_executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.executable = executable.into();
        self
    }

    /// Set the ephemeris data directory
    pub fn with_ephemeris_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.ephemeris_dir = dir.into();
        self
    }

    /// Replace the default ephemeris options
    pub fn with_eph_options(mut self, options: impl IntoIterator<Item = EphOption>) -> Self {
        self.eph_options = options.into_iter().collect();
        self
    }

    /// Set the default house system
    pub fn with_default_house_system(mut self, system: HouseSystem) -> Self {
        self.default_house_system = system.code().to_string();
        self
    }

    /// Set the process timeout in seconds
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Process timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Resolve the default house system, falling back to Placidus
    pub fn house_system(&self) -> HouseSystem {
        match self.default_house_system.parse::<HouseSystem>() {
            Ok(system) => system,
            Err(_) => {
                warn!(
                    "Invalid default house system '{}', using Placidus",
                    self.default_house_system
                );
                HouseSystem::Placidus
            }
        }
    }

    /// Default config file location (`<config dir>/swetest-bridge/config.json`)
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SwissephError::configuration("Could not determine config directory"))?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load a configuration file; missing keys take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SwissephError::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: Self = serde_json::from_str(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load defaults, then the config file (if any), then environment variables
    ///
    /// Without an explicit file the default config path is used when a file
    /// exists there.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let default_path = Self::default_config_path().ok();
        let mut config = match config_file_to_load(config_file, default_path) {
            Some(path) => {
                info!("Using config file: {}", path.display());
                Self::from_file(&path)?
            }
            None => {
                info!("No config file found, using defaults and environment variables");
                Self::default()
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Apply `SWISSEPH_*` overrides read through `lookup`
    ///
    /// The three ephemeris option variables each fill one slot (ephemeris
    /// type, true positions, nutation); a slot whose variable is missing or
    /// invalid keeps its default option.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(executable) = lookup(env_vars::EXECUTABLE) {
            self.executable = PathBuf::from(executable);
        }

        if let Some(dir) = lookup(env_vars::EPHEMERIS_DIR) {
            self.ephemeris_dir = PathBuf::from(dir);
        }

        let slots = [
            (env_vars::EPHEMERIS_TYPE, EphOption::SwissType),
            (env_vars::TRUE_POSITIONS, EphOption::TruePositions),
            (env_vars::NO_NUTATION, EphOption::NoNutation),
        ];
        let values: Vec<(Option<String>, EphOption)> = slots
            .iter()
            .map(|(key, default)| (lookup(key), *default))
            .collect();

        if values.iter().any(|(value, _)| value.is_some()) {
            self.eph_options = values
                .into_iter()
                .map(|(value, default)| match value {
                    Some(code) => code.parse().unwrap_or_else(|_| {
                        warn!("Ignoring invalid ephemeris option '{}'", code);
                        default
                    }),
                    None => default,
                })
                .collect();
        }

        if let Some(system) = lookup(env_vars::HOUSE_SYSTEM) {
            self.default_house_system = system;
        }

        if let Some(timeout) = lookup(env_vars::TIMEOUT) {
            match timeout.trim().parse::<u64>() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => warn!("Ignoring invalid {} value '{}'", env_vars::TIMEOUT, timeout),
            }
        }
    }

    /// Check that the configuration can be used to run swetest
    pub fn validate(&self) -> Result<()> {
        if self.executable.as_os_str().is_empty() {
            return Err(SwissephError::configuration(
                "swetest executable path must not be empty",
            ));
        }

        if self.timeout_secs == 0 {
            return Err(SwissephError::configuration(
                "timeout_secs must be greater than zero",
            ));
        }

        Ok(())
    }
}

/// Explicit path if given, else the default path when that file exists
fn config_file_to_load(explicit: Option<&Path>, default_path: Option<PathBuf>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => default_path.filter(|path| path.is_file()),
    }
}
