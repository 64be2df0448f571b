//! CLI command handlers
//!
//! This module bridges clap argument parsing with the service layer.

pub mod config;
pub mod file;

pub use config::{handle_config_command, ConfigArgs};
pub use file::{handle_decrypt_command, handle_encrypt_command, FileArgs};
