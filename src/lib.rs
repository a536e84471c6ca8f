//! Containment - run docker actions across clusters over SSH
//!
//! Containment takes one action (status, update, start, stop, restart) for
//! one image, finds every host in every cluster that should run that image,
//! and runs the matching docker command on each of them. Output from every
//! host is merged into a single stream with each line prefixed by the host
//! it came from.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    restart, start, status, stop, update, DispatchReport, Dispatcher, ExecutionResult,
    ExecutionState,
};
pub use domain::entities::{Cluster, Configuration, Container, Host};
pub use domain::ports::{ExecutionError, RemoteExecutor};
pub use domain::services::command_builder;
pub use domain::value_objects::{Action, ContainerState, FanOut};
pub use error::{ContainmentError, ContainmentResult};
pub use infrastructure::{SshExecutor, SshExecutorOptions};
