//! Encrypt and decrypt commands

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::settings::Settings;
use crate::crypto::SecureString;
use crate::error::{FilecryptError, FilecryptResult};
use crate::services::FileCryptService;

/// Password argument value that means "ask on the terminal"
pub const PROMPT_PASSWORD: &str = "-";

/// Arguments shared by `encrypt` and `decrypt`
#[derive(Args)]
pub struct FileArgs {
    /// File to read
    pub input: PathBuf,

    /// Password, or "-" to be prompted without echo
    #[arg(allow_hyphen_values = true)]
    pub password: String,

    /// Where to write the result (defaults to a name derived from the input)
    pub output: Option<PathBuf>,
}

/// Handle `encrypt`, returning the path written
pub fn handle_encrypt_command(settings: &Settings, args: FileArgs) -> FilecryptResult<PathBuf> {
    let password = resolve_password(args.password, true)?;
    FileCryptService::new(settings).encrypt_file(&args.input, &password, args.output.as_deref())
}

/// Handle `decrypt`, returning the path written
pub fn handle_decrypt_command(settings: &Settings, args: FileArgs) -> FilecryptResult<PathBuf> {
    let password = resolve_password(args.password, false)?;
    FileCryptService::new(settings).decrypt_file(&args.input, &password, args.output.as_deref())
}

/// Turn the password argument into a [`SecureString`], prompting if asked
///
/// A new password (for encryption) is asked for twice.
fn resolve_password(arg: String, confirm: bool) -> FilecryptResult<SecureString> {
    let arg = SecureString::new(arg);
    if arg.as_str() != PROMPT_PASSWORD {
        return Ok(arg);
    }

    let password = prompt_password("Password: ")?;
    if confirm {
        let again = prompt_password("Confirm password: ")?;
        if password.as_str() != again.as_str() {
            return Err(FilecryptError::Password("passwords do not match".into()));
        }
    }
    Ok(password)
}

/// Prompt for a password (hidden input)
fn prompt_password(prompt: &str) -> FilecryptResult<SecureString> {
    rpassword::prompt_password(prompt)
        .map(SecureString::from)
        .map_err(|e| FilecryptError::Password(format!("Failed to read password: {}", e)))
}

/// Human-readable success line for a written file
pub fn describe_output(verb: &str, path: &Path) -> String {
    format!("{} file saved as: {}", verb, path.display())
}
