//! Recording executor double.

use std::sync::Mutex;

use containment::{ExecutionError, Host, RemoteExecutor};

/// One recorded `execute` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub host: Host,
    pub command: String,
}

type Responder = Box<dyn Fn(&Host, &str) -> Result<Vec<u8>, ExecutionError> + Send + Sync>;

/// Records every call and answers with `respond`
pub struct RecordingExecutor {
    calls: Mutex<Vec<Call>>,
    respond: Responder,
}

impl RecordingExecutor {
    /// Answers every call with `output`
    pub fn with_output(output: &str) -> Self {
        let output = output.as_bytes().to_vec();
        Self::new(move |_, _| Ok(output.clone()))
    }

    pub fn new<F>(respond: F) -> Self
    where
        F: Fn(&Host, &str) -> Result<Vec<u8>, ExecutionError> + Send + Sync + 'static,
    {
        Self {
            calls: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl RemoteExecutor for RecordingExecutor {
    fn execute(&self, host: &Host, command: &str) -> Result<Vec<u8>, ExecutionError> {
        self.calls.lock().unwrap().push(Call {
            host: host.clone(),
            command: command.to_string(),
        });
        (self.respond)(host, command)
    }
}

/// Split captured dispatcher output into lines
pub fn output_lines(out: Vec<u8>) -> Vec<String> {
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
