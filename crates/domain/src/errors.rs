use crate::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("Handler {0} failed: {1}")]
    HandlerFailed(String, String),

    #[error("Failed to write response: {0}")]
    WriteFailed(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
