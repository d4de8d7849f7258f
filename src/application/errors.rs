//! Application layer errors

use std::time::Duration;
use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Recoverable command rejections, each surfaced to the user as a notice
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("Cooldown exceeded, retry after {:.1}s", .retry_after.as_secs_f64())]
    CooldownExceeded { retry_after: Duration },

    #[error("Command not allowed in #{channel}, use #{required}")]
    ChannelUnauthorized { channel: String, required: String },

    #[error("Missing argument: {0}")]
    MissingArgument(String),
}

/// Configuration errors, fatal at startup
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
