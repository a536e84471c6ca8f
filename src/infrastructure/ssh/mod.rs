//! SSH Remote Execution
//!
//! Implements `RemoteExecutor` on top of the OpenSSH client:
//!
//! - `agent` - probes ssh-agent once and decides which auth methods to offer
//! - `connection` - one lazily created master connection per host identity
//! - `executor` - runs command sessions over those connections

mod agent;
mod connection;
mod executor;

pub use agent::{AuthMethods, AUTH_SOCK_ENV};
pub use connection::{Connection, ConnectionTable};
pub use executor::{SshExecutor, SshExecutorOptions};
