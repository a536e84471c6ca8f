//! Dispatch Use Case
//!
//! Drives one action for one image across every resolved host:
//! resolve, build the command once, execute per host (in parallel or one
//! at a time depending on the action), attribute output, and report.
//!
//! Per-host failures are turned into attributed output and never make the
//! dispatch itself fail; only resolution errors do.

use std::io::Write;
use std::panic;
use std::sync::Mutex;
use std::thread;

use tracing::{debug, debug_span, info, warn};

use crate::domain::entities::{Cluster, Configuration, Container, Host};
use crate::domain::ports::{ExecutionError, RemoteExecutor};
use crate::domain::services::{command_builder, resolve};
use crate::domain::value_objects::{Action, ContainerState, FanOut};
use crate::error::ContainmentResult;

/// Lifecycle of one host within a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionState {
    Pending,
    Executing,
    Succeeded,
    Failed,
}

impl std::fmt::Display for ExecutionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ExecutionState::Pending => "pending",
            ExecutionState::Executing => "executing",
            ExecutionState::Succeeded => "succeeded",
            ExecutionState::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Outcome of running the action on one (cluster, host) pair
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Cluster through which the host was targeted
    pub cluster: String,
    pub host: Host,
    /// Combined output; empty when the execution failed
    pub output: Vec<u8>,
    pub error: Option<ExecutionError>,
}

impl ExecutionResult {
    pub fn state(&self) -> ExecutionState {
        if self.error.is_some() {
            ExecutionState::Failed
        } else {
            ExecutionState::Succeeded
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Output to display for this host: the command output, or the error in
    /// its place when the execution failed.
    pub fn display_output(&self) -> Vec<u8> {
        match &self.error {
            Some(err) => err.display_output(),
            None => self.output.clone(),
        }
    }
}

/// Everything one dispatch produced
#[derive(Debug, Clone)]
pub struct DispatchReport {
    pub action: Action,
    pub image: String,
    /// One entry per targeted (cluster, host) pair, in declared order
    pub results: Vec<ExecutionResult>,
}

impl DispatchReport {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }
}

/// Runs actions against remote hosts and writes attributed lines to `out`.
///
/// The executor is an explicit dependency so tests can substitute a double.
pub struct Dispatcher<E, W> {
    executor: E,
    out: Mutex<W>,
}

impl<E, W> Dispatcher<E, W>
where
    E: RemoteExecutor,
    W: Write + Send,
{
    pub fn new(executor: E, out: W) -> Self {
        Self {
            executor,
            out: Mutex::new(out),
        }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Give back the output sink (used by tests to inspect what was written)
    pub fn into_output(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    /// Run `action` for `image` on every host that should have it.
    ///
    /// Returns an error only when the image cannot be resolved, in which
    /// case no host is contacted.
    pub fn dispatch(
        &self,
        action: Action,
        configuration: &Configuration,
        image: &str,
    ) -> ContainmentResult<DispatchReport> {
        let target = resolve(configuration, image)?;
        let command = command_builder::build(action, target.container);
        debug!(%action, image, %command, hosts = target.host_count(), "dispatching");

        let results: Vec<ExecutionResult> = match action.fan_out() {
            FanOut::Parallel => thread::scope(|scope| {
                let handles: Vec<_> = target
                    .hosts()
                    .map(|(cluster, host)| {
                        let command = command.as_str();
                        let container = target.container;
                        debug!(host = %host, cluster = %cluster.name, state = %ExecutionState::Pending);
                        scope.spawn(move || {
                            self.run_on_host(action, container, cluster, host, command)
                        })
                    })
                    .collect();

                handles
                    .into_iter()
                    .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
                    .collect()
            }),
            FanOut::Sequential => target
                .hosts()
                .map(|(cluster, host)| {
                    self.run_on_host(action, target.container, cluster, host, &command)
                })
                .collect(),
        };

        let report = DispatchReport {
            action,
            image: image.to_string(),
            results,
        };
        info!(
            %action,
            image,
            succeeded = report.succeeded(),
            failed = report.failed(),
            "dispatch finished"
        );
        Ok(report)
    }

    fn run_on_host(
        &self,
        action: Action,
        container: &Container,
        cluster: &Cluster,
        host: &Host,
        command: &str,
    ) -> ExecutionResult {
        let _span = debug_span!("host", host = %host, cluster = %cluster.name).entered();
        debug!(state = %ExecutionState::Executing);

        let (output, error) = match self.executor.execute(host, command) {
            Ok(output) => (output, None),
            Err(err) => (Vec::new(), Some(err)),
        };
        let result = ExecutionResult {
            cluster: cluster.name.clone(),
            host: host.clone(),
            output,
            error,
        };
        match &result.error {
            None => debug!(state = %result.state()),
            Some(err) => debug!(state = %result.state(), error = %err),
        }

        self.emit(action, container, &result);
        result
    }

    /// Write one host's attributed lines under a single lock so they stay
    /// contiguous in the merged stream.
    fn emit(&self, action: Action, container: &Container, result: &ExecutionResult) {
        let lines = render_lines(action, container, result);
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        let written = lines
            .iter()
            .try_for_each(|line| writeln!(out, "{line}"))
            .and_then(|()| out.flush());
        if let Err(err) = written {
            warn!(host = %result.host, error = %err, "failed to write output");
        }
    }
}

/// Prefix every line of `output` with the host identifier.
pub fn attribute(host: &Host, output: &[u8]) -> Vec<String> {
    let identifier = host.identifier();
    String::from_utf8_lossy(output)
        .lines()
        .map(|line| format!("{identifier} {line}"))
        .collect()
}

/// Lines a result contributes to the output stream.
///
/// A successful status check is summarised as `<image> running|stopped`;
/// everything else shows the captured output (or the error in its place).
pub fn render_lines(action: Action, container: &Container, result: &ExecutionResult) -> Vec<String> {
    if action == Action::Status && result.is_success() {
        let state = ContainerState::from_inspect_output(&result.output);
        return vec![format!(
            "{} {} {}",
            result.host.identifier(),
            container.image,
            state
        )];
    }
    attribute(&result.host, &result.display_output())
}

/// Pull the image on every host
pub fn update<E: RemoteExecutor, W: Write + Send>(
    dispatcher: &Dispatcher<E, W>,
    configuration: &Configuration,
    image: &str,
) -> ContainmentResult<DispatchReport> {
    dispatcher.dispatch(Action::Update, configuration, image)
}

/// Run the container on every host
pub fn start<E: RemoteExecutor, W: Write + Send>(
    dispatcher: &Dispatcher<E, W>,
    configuration: &Configuration,
    image: &str,
) -> ContainmentResult<DispatchReport> {
    dispatcher.dispatch(Action::Start, configuration, image)
}

/// Stop and remove the container on every host
pub fn stop<E: RemoteExecutor, W: Write + Send>(
    dispatcher: &Dispatcher<E, W>,
    configuration: &Configuration,
    image: &str,
) -> ContainmentResult<DispatchReport> {
    dispatcher.dispatch(Action::Stop, configuration, image)
}

/// Stop, remove and run the container again on every host
pub fn restart<E: RemoteExecutor, W: Write + Send>(
    dispatcher: &Dispatcher<E, W>,
    configuration: &Configuration,
    image: &str,
) -> ContainmentResult<DispatchReport> {
    dispatcher.dispatch(Action::Restart, configuration, image)
}

/// Report whether the container is running on every host
pub fn status<E: RemoteExecutor, W: Write + Send>(
    dispatcher: &Dispatcher<E, W>,
    configuration: &Configuration,
    image: &str,
) -> ContainmentResult<DispatchReport> {
    dispatcher.dispatch(Action::Status, configuration, image)
}
