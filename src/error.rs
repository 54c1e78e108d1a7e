//! Error types for the AWS check service

use std::time::Duration;

use thiserror::Error;

/// Fatal application error, raised during startup
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Address parsing error
    #[error("Address parse error")]
    AddrParse(#[from] std::net::AddrParseError),
}

/// Failure of a single provider call made by `/aws-check`.
///
/// These never abort a request; they are rendered into the response text.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The call did not finish before the probe deadline
    #[error("operation timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    /// The provider or the transport returned an error
    #[error("{0}")]
    Service(String),
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;
