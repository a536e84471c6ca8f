//! SSH agent probing
//!
//! Authentication comes from the caller's running ssh-agent. `ssh-add -l`
//! is asked for the agent's identities once; if the agent cannot be reached
//! or holds no keys we fall back to offering no authentication methods at
//! all. Construction never fails, and a misconfigured agent shows up per
//! host as a connection error instead of aborting the whole run.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, warn};

/// Environment variable holding the agent socket path
pub const AUTH_SOCK_ENV: &str = "SSH_AUTH_SOCK";

/// `ssh-add -l` exit status when the agent answered but holds no keys
const SSH_ADD_NO_IDENTITIES: i32 = 1;

/// Authentication methods offered to every host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMethods {
    /// Keys held by the agent listening on `socket`
    Agent { socket: PathBuf, identities: u32 },
    /// Nothing; servers that require authentication will refuse us
    None,
}

impl AuthMethods {
    /// Probe the agent named by `SSH_AUTH_SOCK`
    pub fn from_env() -> Self {
        let socket = std::env::var_os(AUTH_SOCK_ENV).map(PathBuf::from);
        Self::probe(socket.as_deref())
    }

    /// Probe the agent at `socket`, falling back to [`AuthMethods::None`]
    pub fn probe(socket: Option<&Path>) -> Self {
        Self::probe_with(Command::new("ssh-add"), socket)
    }

    /// Probe using `ssh_add` as the `ssh-add` invocation
    pub fn probe_with(ssh_add: Command, socket: Option<&Path>) -> Self {
        let Some(socket) = socket.filter(|s| !s.as_os_str().is_empty()) else {
            warn!("{AUTH_SOCK_ENV} is not set; connecting without authentication methods");
            return AuthMethods::None;
        };

        match list_identities(ssh_add, socket) {
            Ok(0) => {
                warn!(socket = %socket.display(), "ssh agent holds no identities; connecting without authentication methods");
                AuthMethods::None
            }
            Ok(identities) => {
                debug!(socket = %socket.display(), identities, "using ssh agent");
                AuthMethods::Agent {
                    socket: socket.to_path_buf(),
                    identities,
                }
            }
            Err(err) => {
                warn!(socket = %socket.display(), error = %err, "ssh agent unreachable; connecting without authentication methods");
                AuthMethods::None
            }
        }
    }

    pub fn is_agent(&self) -> bool {
        matches!(self, AuthMethods::Agent { .. })
    }

    /// `-o` options that make ssh use exactly these methods
    pub fn ssh_options(&self) -> Vec<String> {
        match self {
            AuthMethods::Agent { socket, .. } => vec![
                format!("IdentityAgent={}", socket.display()),
                "PreferredAuthentications=publickey".to_string(),
                "PasswordAuthentication=no".to_string(),
                "KbdInteractiveAuthentication=no".to_string(),
            ],
            AuthMethods::None => vec![
                "IdentityAgent=none".to_string(),
                "PubkeyAuthentication=no".to_string(),
                "PasswordAuthentication=no".to_string(),
                "KbdInteractiveAuthentication=no".to_string(),
                "HostbasedAuthentication=no".to_string(),
                "GSSAPIAuthentication=no".to_string(),
            ],
        }
    }
}

/// Count the identities the agent at `socket` holds, one per `ssh-add -l` line.
fn list_identities(mut ssh_add: Command, socket: &Path) -> io::Result<u32> {
    let output = ssh_add
        .arg("-l")
        .env(AUTH_SOCK_ENV, socket)
        .stdin(Stdio::null())
        .output()?;

    match output.status.code() {
        Some(0) => {
            let keys = String::from_utf8_lossy(&output.stdout)
                .lines()
                .filter(|line| !line.trim().is_empty())
                .count();
            Ok(u32::try_from(keys).unwrap_or(u32::MAX))
        }
        Some(SSH_ADD_NO_IDENTITIES) => Ok(0),
        _ => {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            Err(io::Error::other(if stderr.is_empty() {
                format!("ssh-add exited with {}", output.status)
            } else {
                stderr
            }))
        }
    }
}
