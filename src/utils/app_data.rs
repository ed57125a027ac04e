use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "wordgrid";
const CONFIG_FILE: &str = "config.json";
const DEFAULT_DICTIONARY: &str = "words.dawg";

/// Environment variable naming the dictionary artifact
pub const DICTIONARY_ENV: &str = "WORDGRID_DICT";

/// Application configuration stored in the app data directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Dictionary artifact to load when none is given on the command line
    #[serde(default)]
    pub dictionary: Option<PathBuf>,

    /// Colorize terminal output
    #[serde(default)]
    pub color: Option<bool>,
}

impl AppConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load config from a specific file, or return default if it does not exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = fs::read_to_string(config_path)
                .context("Failed to read config file")?;
            let config: AppConfig = serde_json::from_str(&content)
                .context("Failed to parse config file")?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to a specific file
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(config_path, content)
            .context("Failed to write config file")?;
        Ok(())
    }

    /// Pick the dictionary to load
    ///
    /// Order: explicit path, `WORDGRID_DICT`, config file, then
    /// `words.dawg` in the app data directory.
    pub fn resolve_dictionary(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        self.resolve_dictionary_with(explicit, std::env::var_os(DICTIONARY_ENV).map(PathBuf::from))
    }

    fn resolve_dictionary_with(
        &self,
        explicit: Option<&Path>,
        from_env: Option<PathBuf>,
    ) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = from_env.filter(|p| !p.as_os_str().is_empty()) {
            return Ok(path);
        }
        if let Some(path) = &self.dictionary {
            return Ok(path.clone());
        }
        Ok(get_app_data_dir()?.join(DEFAULT_DICTIONARY))
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_app_data_dir()?;
    Ok(app_dir.join(CONFIG_FILE))
}

/// Get the application data directory
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir()
            .map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    Ok(base.join(APP_NAME))
}
