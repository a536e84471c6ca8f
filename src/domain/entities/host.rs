//! Host entity - one SSH-reachable machine inside a cluster

use serde::{Deserialize, Serialize};

/// Port used when a host does not declare a positive one
pub const DEFAULT_SSH_PORT: u16 = 22;

/// A machine that containers are run on.
///
/// Identity is the full `(address, port, user)` triple: two hosts with the
/// same triple share one SSH connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Host {
    pub address: String,
    /// `0` (or any non-positive value) means "use the ssh default"
    #[serde(default)]
    pub port: i32,
    pub user: String,
}

impl Host {
    pub fn new(address: impl Into<String>, port: i32, user: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            port,
            user: user.into(),
        }
    }

    /// Port to connect to: 22 for non-positive values, `None` when the
    /// declared port doesn't fit in a TCP port number
    pub fn effective_port(&self) -> Option<u16> {
        if self.port <= 0 {
            return Some(DEFAULT_SSH_PORT);
        }
        u16::try_from(self.port).ok()
    }

    /// `user@address`, the ssh destination
    pub fn destination(&self) -> String {
        format!("{}@{}", self.user, self.address)
    }

    /// Prefix used to attribute output lines, e.g. `[derp@1.1.1.2]`
    pub fn identifier(&self) -> String {
        format!("[{}]", self.destination())
    }
}

impl std::fmt::Display for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.effective_port() {
            Some(port) => write!(f, "{}:{}", self.destination(), port),
            None => write!(f, "{}:{}", self.destination(), self.port),
        }
    }
}
