//! Path management for filecrypt
//!
//! ## Path Resolution Order
//!
//! 1. `FILECRYPT_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/filecrypt` or `~/.config/filecrypt`
//! 3. Windows: `%APPDATA%\filecrypt`

use std::path::PathBuf;

use crate::error::FilecryptError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "FILECRYPT_CONFIG_DIR";

/// Manages the paths used by filecrypt
#[derive(Debug, Clone)]
pub struct FilecryptPaths {
    /// Base directory for filecrypt configuration
    base_dir: PathBuf,
}

impl FilecryptPaths {
    /// Create a new FilecryptPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, FilecryptError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FilecryptPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/filecrypt/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FilecryptError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FilecryptError::Io(format!("Failed to create config directory: {}", e)))
    }
}

/// Resolve the default config directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FilecryptError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                FilecryptError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("filecrypt"))
}

/// Resolve the default config directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FilecryptError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FilecryptError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("filecrypt"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FilecryptPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(CONFIG_DIR_ENV, custom_path);
        let paths = FilecryptPaths::new().unwrap();
        env::remove_var(CONFIG_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("filecrypt");
        let paths = FilecryptPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();
        assert!(base.is_dir());
    }
}
