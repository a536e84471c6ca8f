//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod remote_executor;

pub use remote_executor::{ExecutionError, RemoteExecutor};
