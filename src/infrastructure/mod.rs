//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all network and process I/O.
//!
//! ## Structure
//!
//! - `ssh/` - Remote executor over OpenSSH

pub mod ssh;

pub use ssh::{SshExecutor, SshExecutorOptions};
