use std::io;
use thiserror::Error;

/// Custom error type for the NDM application
#[derive(Error, Debug)]
pub enum NdmError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Device unreachable: {0}")]
    Unreachable(String),

    #[error("Monitor error: {0}")]
    Monitor(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for the NDM application
pub type Result<T> = std::result::Result<T, NdmError>;

impl NdmError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        NdmError::Config(msg.into())
    }

    /// Create an invalid address error
    pub fn invalid_address<S: Into<String>>(msg: S) -> Self {
        NdmError::InvalidAddress(msg.into())
    }

    /// Create an unreachable device error
    pub fn unreachable<S: Into<String>>(msg: S) -> Self {
        NdmError::Unreachable(msg.into())
    }

    /// Create a monitor error
    pub fn monitor<S: Into<String>>(msg: S) -> Self {
        NdmError::Monitor(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        NdmError::Other(msg.into())
    }
}
