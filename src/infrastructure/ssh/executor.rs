//! SSH Remote Executor
//!
//! Runs commands through the system OpenSSH client. Each host identity gets
//! one master connection (`ControlMaster=yes`) whose control socket lives in
//! a temporary directory owned by the executor; every command then opens
//! its own session over that socket. Masters persist only while idle for
//! `control_persist`, so nothing has to tear them down when the process
//! exits.

use std::collections::hash_map::DefaultHasher;
use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::hash::{Hash, Hasher};
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::sync::OnceLock;
use std::time::Duration;

use tempfile::TempDir;
use tracing::debug;

use super::agent::{AuthMethods, AUTH_SOCK_ENV};
use super::connection::{Connection, ConnectionTable};
use crate::domain::entities::Host;
use crate::domain::ports::{ExecutionError, RemoteExecutor};

/// Exit status ssh itself uses for connection and protocol errors
const SSH_ERROR_STATUS: i32 = 255;

/// Options for the SSH executor
#[derive(Debug, Clone)]
pub struct SshExecutorOptions {
    /// Client binary
    pub program: OsString,
    /// Arguments placed before everything else (e.g. `-F <file>`)
    pub leading_args: Vec<OsString>,
    /// Agent socket to probe for authentication
    pub auth_socket: Option<PathBuf>,
    /// How long an idle master connection survives
    pub control_persist: Duration,
}

impl Default for SshExecutorOptions {
    fn default() -> Self {
        Self {
            program: OsString::from("ssh"),
            leading_args: Vec::new(),
            auth_socket: None,
            control_persist: Duration::from_secs(60),
        }
    }
}

impl SshExecutorOptions {
    /// Defaults, with the agent socket taken from `SSH_AUTH_SOCK`
    pub fn from_env() -> Self {
        Self {
            auth_socket: std::env::var_os(AUTH_SOCK_ENV).map(PathBuf::from),
            ..Self::default()
        }
    }
}

/// [`RemoteExecutor`] backed by OpenSSH connection multiplexing
pub struct SshExecutor {
    options: SshExecutorOptions,
    /// Probed on first use, then shared read-only
    auth: OnceLock<AuthMethods>,
    control_dir: TempDir,
    connections: ConnectionTable,
}

impl SshExecutor {
    pub fn new(options: SshExecutorOptions) -> io::Result<Self> {
        let control_dir = tempfile::Builder::new().prefix("containment-").tempdir()?;
        Ok(Self {
            options,
            auth: OnceLock::new(),
            control_dir,
            connections: ConnectionTable::new(),
        })
    }

    pub fn from_env() -> io::Result<Self> {
        Self::new(SshExecutorOptions::from_env())
    }

    /// Authentication methods, probing the agent on first call
    pub fn auth(&self) -> &AuthMethods {
        self.auth
            .get_or_init(|| AuthMethods::probe(self.options.auth_socket.as_deref()))
    }

    /// Number of distinct host identities dialled so far
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    fn control_path(&self, host: &Host) -> PathBuf {
        // Unix socket paths are short; hash the identity instead of spelling it out.
        let mut hasher = DefaultHasher::new();
        host.hash(&mut hasher);
        self.control_dir
            .path()
            .join(format!("{:016x}.sock", hasher.finish()))
    }

    fn common_args(&self, port: u16, control_path: &Path) -> Vec<OsString> {
        let mut args = self.options.leading_args.clone();
        args.push("-p".into());
        args.push(port.to_string().into());

        let mut options = vec![
            "StrictHostKeyChecking=no".to_string(),
            "BatchMode=yes".to_string(),
        ];
        options.extend(self.auth().ssh_options());
        for option in options {
            args.push("-o".into());
            args.push(option.into());
        }

        let mut control = OsString::from("ControlPath=");
        control.push(control_path);
        args.push("-o".into());
        args.push(control);
        args
    }

    /// Arguments that open a backgrounded master connection
    pub(crate) fn master_args(&self, host: &Host, port: u16, control_path: &Path) -> Vec<OsString> {
        let mut args = self.common_args(port, control_path);
        args.extend(
            [
                "-o".to_string(),
                "ControlMaster=yes".to_string(),
                "-o".to_string(),
                format!("ControlPersist={}", self.options.control_persist.as_secs().max(1)),
                "-M".to_string(),
                "-N".to_string(),
                "-f".to_string(),
                host.destination(),
            ]
            .map(OsString::from),
        );
        args
    }

    /// Arguments that run `command` as a session over an existing master
    pub(crate) fn session_args(
        &self,
        host: &Host,
        port: u16,
        control_path: &Path,
        command: &str,
    ) -> Vec<OsString> {
        let mut args = self.common_args(port, control_path);
        args.extend(
            [
                "-o",
                "ControlMaster=no",
                "-T",
                host.destination().as_str(),
                command,
            ]
            .map(OsString::from),
        );
        args
    }

    fn connect(&self, host: &Host, port: u16) -> Result<Connection, String> {
        let control_path = self.control_path(host);
        debug!(%host, control_path = %control_path.display(), "opening master connection");

        // The backgrounded master inherits stderr; a file (unlike a pipe)
        // doesn't keep us waiting for it to close.
        let (status, output) = run_captured(
            &self.options.program,
            &self.master_args(host, port, &control_path),
        )
        .map_err(|e| format!("couldn't launch ssh: {e}"))?;

        if !status.success() {
            let message = String::from_utf8_lossy(&output).trim().to_string();
            return Err(if message.is_empty() {
                format!("ssh exited with {status}")
            } else {
                message
            });
        }

        debug!(%host, "master connection established");
        Ok(Connection::new(control_path))
    }

    fn run_session(
        &self,
        connection: &Connection,
        host: &Host,
        port: u16,
        command: &str,
    ) -> Result<Vec<u8>, ExecutionError> {
        let args = self.session_args(host, port, connection.control_path(), command);
        let (status, output) =
            run_captured(&self.options.program, &args).map_err(|e| ExecutionError::Session {
                host: host.to_string(),
                message: format!("couldn't launch ssh: {e}"),
            })?;

        match status.code() {
            Some(0) => Ok(output),
            Some(SSH_ERROR_STATUS) => Err(ExecutionError::Session {
                host: host.to_string(),
                message: String::from_utf8_lossy(&output).trim().to_string(),
            }),
            code => Err(ExecutionError::RemoteExit { code, output }),
        }
    }
}

impl RemoteExecutor for SshExecutor {
    fn execute(&self, host: &Host, command: &str) -> Result<Vec<u8>, ExecutionError> {
        let port = host.effective_port().ok_or_else(|| ExecutionError::Connection {
            host: host.to_string(),
            message: format!("port {} is out of range", host.port),
        })?;
        let connection = self
            .connections
            .get_or_connect(host, || self.connect(host, port))
            .map_err(|message| ExecutionError::Connection {
                host: host.to_string(),
                message,
            })?;
        self.run_session(&connection, host, port, command)
    }
}

/// Run `program` with stdout and stderr sharing one temporary file, so the
/// capture keeps the order in which the two streams were written.
fn run_captured(program: &OsStr, args: &[OsString]) -> io::Result<(ExitStatus, Vec<u8>)> {
    let mut capture: File = tempfile::tempfile()?;
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(capture.try_clone()?)
        .stderr(capture.try_clone()?)
        .status()?;

    let mut output = Vec::new();
    capture.seek(SeekFrom::Start(0))?;
    capture.read_to_end(&mut output)?;
    Ok((status, output))
}
