//! Remote Executor Port
//!
//! Abstracts "run this command on this host". The SSH implementation lives
//! in `infrastructure::ssh`; tests substitute a recording double.

use crate::domain::entities::Host;
use thiserror::Error;

/// Failure running a command on a single host
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// Could not establish (or authenticate) the transport connection
    #[error("couldn't connect to {host}: {message}")]
    Connection { host: String, message: String },

    /// Connected, but opening or running the command session failed
    #[error("couldn't run command on {host}: {message}")]
    Session { host: String, message: String },

    /// The command ran and exited non-zero; displays as its captured output,
    /// or its exit status when it printed nothing
    #[error("{}", remote_exit_message(.code, .output))]
    RemoteExit { code: Option<i32>, output: Vec<u8> },
}

impl ExecutionError {
    /// Bytes to show in place of command output for a failed host
    pub fn display_output(&self) -> Vec<u8> {
        match self {
            ExecutionError::RemoteExit { output, .. } if !output.is_empty() => output.clone(),
            other => other.to_string().into_bytes(),
        }
    }
}

fn remote_exit_message(code: &Option<i32>, output: &[u8]) -> String {
    if !output.is_empty() {
        return String::from_utf8_lossy(output).into_owned();
    }
    match code {
        Some(code) => format!("command exited with status {code}"),
        None => "command was terminated by a signal".to_string(),
    }
}

/// Trait for running commands on remote hosts.
///
/// Implementations must be shareable across threads: a dispatch may call
/// `execute` for many hosts (or the same host twice) concurrently.
pub trait RemoteExecutor: Send + Sync {
    /// Run `command` on `host` and return stdout and stderr combined in the
    /// order the remote process produced them.
    fn execute(&self, host: &Host, command: &str) -> Result<Vec<u8>, ExecutionError>;
}

impl<T: RemoteExecutor + ?Sized> RemoteExecutor for &T {
    fn execute(&self, host: &Host, command: &str) -> Result<Vec<u8>, ExecutionError> {
        (**self).execute(host, command)
    }
}

impl<T: RemoteExecutor + ?Sized> RemoteExecutor for Box<T> {
    fn execute(&self, host: &Host, command: &str) -> Result<Vec<u8>, ExecutionError> {
        (**self).execute(host, command)
    }
}

impl<T: RemoteExecutor + ?Sized> RemoteExecutor for std::sync::Arc<T> {
    fn execute(&self, host: &Host, command: &str) -> Result<Vec<u8>, ExecutionError> {
        (**self).execute(host, command)
    }
}
