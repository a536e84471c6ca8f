//! Per-host connection table
//!
//! One connection per host identity, created lazily on first use and shared
//! by every later command to that identity. Lookup-or-insert happens under a
//! single mutex; the connect itself runs outside it in a per-host
//! `OnceLock`, so racing callers for the same host wait for the first
//! caller's result while other hosts connect in parallel.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use crate::domain::entities::Host;

/// An established master connection, addressed through its control socket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    control_path: PathBuf,
}

impl Connection {
    pub fn new(control_path: impl Into<PathBuf>) -> Self {
        Self {
            control_path: control_path.into(),
        }
    }

    pub fn control_path(&self) -> &Path {
        &self.control_path
    }
}

/// Outcome of the first connect attempt; failures are kept so a host is
/// never dialled twice in one run.
type Slot = Arc<OnceLock<Result<Arc<Connection>, String>>>;

#[derive(Debug, Default)]
pub struct ConnectionTable {
    slots: Mutex<HashMap<Host, Slot>>,
}

impl ConnectionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the connection for `host`, calling `connect` only if no caller
    /// has done so yet.
    pub fn get_or_connect<F>(&self, host: &Host, connect: F) -> Result<Arc<Connection>, String>
    where
        F: FnOnce() -> Result<Connection, String>,
    {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
            Arc::clone(slots.entry(host.clone()).or_default())
        };
        slot.get_or_init(|| connect().map(Arc::new)).clone()
    }

    /// Number of host identities that have been dialled
    pub fn len(&self) -> usize {
        self.slots.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
