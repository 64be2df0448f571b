//! User settings for filecrypt
//!
//! Controls default output naming and the log level. Every field has a
//! serde default, so a partial or missing `config.json` is fine.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::FilecryptPaths;
use crate::error::FilecryptError;

/// User settings for filecrypt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Suffix appended to encrypted files, and stripped on decryption
    #[serde(default = "default_encrypted_suffix")]
    pub encrypted_suffix: String,

    /// Suffix appended on decryption when the input lacks `encrypted_suffix`
    #[serde(default = "default_decrypted_suffix")]
    pub decrypted_suffix: String,

    /// Log filter used when neither the CLI flag nor the env var is set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_encrypted_suffix() -> String {
    ".enc".to_string()
}

fn default_decrypted_suffix() -> String {
    ".dec".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            encrypted_suffix: default_encrypted_suffix(),
            decrypted_suffix: default_decrypted_suffix(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_default(paths: &FilecryptPaths) -> Result<Self, FilecryptError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FilecryptError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FilecryptPaths) -> Result<(), FilecryptError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FilecryptError::Io(format!("Failed to write settings file: {}", e)))
    }

    /// Check that suffixes are usable file extensions
    pub fn validate(&self) -> Result<(), FilecryptError> {
        for (name, suffix) in [
            ("encrypted_suffix", &self.encrypted_suffix),
            ("decrypted_suffix", &self.decrypted_suffix),
        ] {
            if suffix.len() < 2 || !suffix.starts_with('.') {
                return Err(FilecryptError::Config(format!(
                    "{} must start with '.' and be non-empty, got {:?}",
                    name, suffix
                )));
            }
            if suffix.contains(|c: char| c == '/' || c == '\\') {
                return Err(FilecryptError::Config(format!(
                    "{} must not contain path separators, got {:?}",
                    name, suffix
                )));
            }
        }

        if self.encrypted_suffix == self.decrypted_suffix {
            return Err(FilecryptError::Config(
                "encrypted_suffix and decrypted_suffix must differ".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.encrypted_suffix, ".enc");
        assert_eq!(settings.decrypted_suffix, ".dec");
        assert_eq!(settings.log_level, "warn");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FilecryptPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FilecryptPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            encrypted_suffix: ".locked".into(),
            log_level: "debug".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FilecryptPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"log_level": "info"}"#).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.log_level, "info");
        assert_eq!(loaded.encrypted_suffix, ".enc");
    }

    #[test]
    fn test_invalid_json_is_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FilecryptPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, FilecryptError::Json(_)));
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FilecryptPaths::with_base_dir(temp_dir.path().join("fresh"));

        Settings::default().save(&paths).unwrap();

        assert!(paths.settings_file().exists());
        assert_eq!(Settings::load_or_default(&paths).unwrap(), Settings::default());
    }

    #[test]
    fn test_validate_rejects_bad_suffixes() {
        let no_dot = Settings {
            encrypted_suffix: "enc".into(),
            ..Settings::default()
        };
        assert!(no_dot.validate().is_err());

        let just_dot = Settings {
            decrypted_suffix: ".".into(),
            ..Settings::default()
        };
        assert!(just_dot.validate().is_err());

        let separator = Settings {
            encrypted_suffix: ".a/b".into(),
            ..Settings::default()
        };
        assert!(separator.validate().is_err());

        let same = Settings {
            decrypted_suffix: ".enc".into(),
            ..Settings::default()
        };
        assert!(same.validate().is_err());
    }
}
