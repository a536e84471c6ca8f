//! Error types for Containment
//!
//! `ContainmentError` covers everything that stops a dispatch before any host
//! is contacted. Per-host failures live in `domain::ports::ExecutionError`
//! and never escape the dispatcher.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Containment operations
pub type ContainmentResult<T> = Result<T, ContainmentError>;

/// Main error type for Containment operations
#[derive(Error, Debug)]
pub enum ContainmentError {
    /// No configuration file at the resolved path
    #[error("couldn't find {}. You're gonna need one of these.", .path.display())]
    ConfigNotFound { path: PathBuf },

    /// Configuration file exists but is not valid YAML for our model
    #[error("couldn't decode {}: {message}", .path.display())]
    InvalidConfig { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The image is not declared in the configuration
    #[error("couldn't find container {0:?}")]
    ContainerNotFound(String),

    /// The image is declared but its clusters don't exist or have no hosts
    #[error("couldn't find a cluster for container {0:?}")]
    NoClustersForContainer(String),
}
