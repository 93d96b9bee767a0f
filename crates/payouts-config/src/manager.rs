use std::{
    env,
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{Config, ConfigError};

const HOME_ENV: &str = "TEACHER_PAYOUTS_HOME";
const APP_DIR_NAME: &str = "teacher_payouts";
const CONFIG_FILE: &str = "config.json";
const STAGED_EXTENSION: &str = "json.tmp";

/// Handles persistence for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Resolves `$TEACHER_PAYOUTS_HOME`, falling back to the platform config directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = env::var_os(HOME_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::config_dir()
                    .or_else(dirs::home_dir)
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(APP_DIR_NAME)
            });
        Self::with_base_dir(base)
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base).map_err(ConfigError::access(&base))?;
        Ok(Self::new(base.join(CONFIG_FILE)))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the stored preferences, or defaults when no file exists yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let path = &self.config_path;
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(path).map_err(ConfigError::access(path))?;
        serde_json::from_str(&raw).map_err(|err| ConfigError::Malformed {
            path: path.clone(),
            message: err.to_string(),
        })
    }

    /// Writes to a sibling `.tmp` file first, then renames it over the target.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let path = &self.config_path;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(ConfigError::access(dir))?;
        }
        let json = serde_json::to_string_pretty(config).map_err(|err| ConfigError::Malformed {
            path: path.clone(),
            message: err.to_string(),
        })?;

        let staged = path.with_extension(STAGED_EXTENSION);
        write_synced(&staged, &json).map_err(ConfigError::access(&staged))?;
        fs::rename(&staged, path).map_err(ConfigError::access(path))
    }
}

fn write_synced(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}
