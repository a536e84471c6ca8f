//! Action value object - what an operator asks to happen to an image

/// How a dispatch walks its target hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanOut {
    /// One concurrent execution per host, joined before returning
    Parallel,
    /// Host by host, cluster order then host order
    Sequential,
}

/// One of the operations containment can run against an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Report whether the container is running
    Status,
    /// Pull the image
    Update,
    /// Run the container
    Start,
    /// Stop and remove the container
    Stop,
    /// Stop, remove and run again in one remote invocation
    Restart,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Status,
        Action::Update,
        Action::Start,
        Action::Stop,
        Action::Restart,
    ];

    /// Read-only and idempotent actions fan out in parallel; actions that
    /// change container state run one host at a time.
    pub fn fan_out(&self) -> FanOut {
        match self {
            Action::Status | Action::Update => FanOut::Parallel,
            Action::Start | Action::Stop | Action::Restart => FanOut::Sequential,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Status => "status",
            Action::Update => "update",
            Action::Start => "start",
            Action::Stop => "stop",
            Action::Restart => "restart",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
