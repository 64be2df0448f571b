//! `config` command

use clap::Args;

use crate::config::{paths::FilecryptPaths, settings::Settings};
use crate::crypto::{HEADER_LEN, PBKDF2_ITERATIONS};
use crate::error::FilecryptResult;

/// Arguments for `config`
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Write the effective settings to the config file if it does not exist yet
    #[arg(long)]
    pub init: bool,
}

/// Print the resolved config location, effective settings and format constants
pub fn handle_config_command(
    paths: &FilecryptPaths,
    settings: &Settings,
    args: ConfigArgs,
) -> FilecryptResult<()> {
    let settings_file = paths.settings_file();

    if args.init {
        if settings_file.exists() {
            println!("Config file already exists: {}", settings_file.display());
        } else {
            settings.save(paths)?;
            println!("Wrote config file: {}", settings_file.display());
        }
        println!();
    }

    println!("filecrypt Configuration");
    println!("=======================");
    println!("Config file: {}", settings_file.display());
    if !settings_file.exists() {
        println!("             (not present, using defaults)");
    }
    println!();
    println!("Settings:");
    println!("  Encrypted suffix: {}", settings.encrypted_suffix);
    println!("  Decrypted suffix: {}", settings.decrypted_suffix);
    println!("  Log level:        {}", settings.log_level);
    println!();
    println!("Format:");
    println!("  Cipher:           AES-256-GCM");
    println!("  Key derivation:   PBKDF2-HMAC-SHA256, {} iterations", PBKDF2_ITERATIONS);
    println!("  Header:           {} bytes (salt, nonce, tag)", HEADER_LEN);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_settings_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FilecryptPaths::with_base_dir(temp_dir.path().join("filecrypt"));
        let settings = Settings {
            log_level: "info".into(),
            ..Settings::default()
        };

        handle_config_command(&paths, &settings, ConfigArgs { init: true }).unwrap();
        assert_eq!(Settings::load_or_default(&paths).unwrap(), settings);

        // An existing file is left untouched
        handle_config_command(&paths, &Settings::default(), ConfigArgs { init: true }).unwrap();
        assert_eq!(Settings::load_or_default(&paths).unwrap(), settings);
    }

    #[test]
    fn test_show_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FilecryptPaths::with_base_dir(temp_dir.path().join("filecrypt"));

        handle_config_command(&paths, &Settings::default(), ConfigArgs::default()).unwrap();
        assert!(!paths.settings_file().exists());
    }
}
