//! Logging initialisation
//!
//! Plain-text logs to stderr, so stdout only carries command output.

use tracing_subscriber::EnvFilter;

use crate::error::FilecryptError;

/// Environment variable holding a log filter, e.g. `debug` or `filecrypt=trace`
pub const LOG_ENV: &str = "FILECRYPT_LOG";

/// Initialise the tracing subscriber with the given filter directive
///
/// # Errors
///
/// Returns an error if the filter does not parse or a subscriber is
/// already installed.
pub fn init(log_level: &str) -> Result<(), FilecryptError> {
    let filter = EnvFilter::try_new(log_level)
        .map_err(|e| FilecryptError::Config(format!("Invalid log level {:?}: {}", log_level, e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| FilecryptError::Config(format!("Failed to initialise logging: {}", e)))
}
