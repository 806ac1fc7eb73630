use moments_config::ConfigError;
use moments_core::CoreError;
use thiserror::Error;

use crate::theme::ThemeError;

/// Unified error type for the layers below the shell.
#[derive(Error, Debug)]
pub enum MomentsError {
    #[error("Session storage error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Theme(#[from] ThemeError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, MomentsError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] MomentsError),
    #[error("Input error: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<CoreError> for MomentsError {
    fn from(err: CoreError) -> Self {
        MomentsError::Storage(err.to_string())
    }
}

impl From<ConfigError> for MomentsError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => MomentsError::Storage(io.to_string()),
            ConfigError::UnknownKey(_) | ConfigError::InvalidValue { .. } => {
                MomentsError::InvalidInput(err.to_string())
            }
            ConfigError::Serde(message) => MomentsError::Config(message),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::from(MomentsError::from(err))
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::from(MomentsError::from(err))
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Input(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        CliError::Input(err.to_string())
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::Input(err.to_string())
    }
}
