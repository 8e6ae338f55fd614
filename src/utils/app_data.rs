use crate::error::{Result, StreengError};
use crate::index::types::IndexConfig;
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "streeng";
const CONFIG_FILE: &str = "config.json";

impl IndexConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load config from an explicit JSON file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| StreengError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to the app data directory
    pub fn save(&self) -> Result<PathBuf> {
        let dir = get_app_data_dir().ok_or_else(|| StreengError::Io {
            path: PathBuf::from(APP_NAME),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "could not determine app data directory",
            ),
        })?;
        let path = dir.join(CONFIG_FILE);
        let io_err = |source| StreengError::Io {
            path: path.clone(),
            source,
        };
        fs::create_dir_all(&dir).map_err(io_err)?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content).map_err(io_err)?;
        Ok(path)
    }

    /// Worker threads to use (resolves 0 to CPU count)
    pub fn effective_threads(&self) -> usize {
        if self.threads == 0 {
            num_cpus()
        } else {
            self.threads
        }
    }
}

/// Get the number of CPUs available
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

/// Get the path to the config file
pub fn get_config_path() -> Option<PathBuf> {
    get_app_data_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Get the application data directory
pub fn get_app_data_dir() -> Option<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    base.map(|b| b.join(APP_NAME))
}
