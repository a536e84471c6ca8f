//! Container state as reported by `docker inspect`

/// Running state of a container on one host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerState {
    Running,
    Stopped,
}

impl ContainerState {
    /// Interpret `docker inspect -f '{{.State.Running}}'` output.
    ///
    /// Only a trimmed `true` counts as running.
    pub fn from_inspect_output(output: &[u8]) -> Self {
        if String::from_utf8_lossy(output).trim() == "true" {
            ContainerState::Running
        } else {
            ContainerState::Stopped
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerState::Running => "running",
            ContainerState::Stopped => "stopped",
        }
    }
}

impl std::fmt::Display for ContainerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
