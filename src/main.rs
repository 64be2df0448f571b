use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use filecrypt::cli::{
    file::describe_output, handle_config_command, handle_decrypt_command,
    handle_encrypt_command, ConfigArgs, FileArgs,
};
use filecrypt::config::{paths::FilecryptPaths, settings::Settings};
use filecrypt::telemetry;

#[derive(Parser)]
#[command(
    name = "filecrypt",
    version,
    about = "Password-based authenticated file encryption",
    long_about = "filecrypt encrypts a file with AES-256-GCM under a key derived from \
                  a password (PBKDF2-HMAC-SHA256), and decrypts it again. Tampered \
                  files and wrong passwords are rejected without writing any output."
)]
struct Cli {
    /// Log filter (e.g. "info", "debug"); overrides the settings file
    #[arg(long, global = true, env = telemetry::LOG_ENV)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file
    #[command(alias = "enc")]
    Encrypt(FileArgs),

    /// Decrypt a file produced by `encrypt`
    #[command(alias = "dec")]
    Decrypt(FileArgs),

    /// Show current configuration and paths
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // An explicit filter applies before settings are read, so loading is logged too
    if let Some(level) = cli.log_level.as_deref() {
        telemetry::init(level)?;
    }

    // encrypt/decrypt still work when no config directory can be resolved
    let paths = FilecryptPaths::new();
    let settings = match &paths {
        Ok(paths) => Settings::load_or_default(paths)?,
        Err(e) => {
            debug!(error = %e, "no config directory, using default settings");
            Settings::default()
        }
    };

    if cli.log_level.is_none() {
        telemetry::init(&settings.log_level)?;
    }

    match cli.command {
        Commands::Encrypt(args) => {
            let output = handle_encrypt_command(&settings, args)?;
            println!("{}", describe_output("Encrypted", &output));
        }
        Commands::Decrypt(args) => {
            let output = handle_decrypt_command(&settings, args)?;
            println!("{}", describe_output("Decrypted", &output));
        }
        Commands::Config(args) => handle_config_command(&paths?, &settings, args)?,
    }

    Ok(())
}
