//! Every output line carries the identity of the host it came from.

use containment::{Action, Dispatcher, ExecutionError};

use crate::common::*;

/// CONTRACT: Multi-line output is prefixed line by line, in order.
#[test]
fn contract_multiline_output_is_attributed_per_line() {
    let executor = RecordingExecutor::with_output("Pulling from library/ubuntu\nDigest: sha256:abc\nStatus: Downloaded\n");
    let dispatcher = Dispatcher::new(&executor, Vec::new());

    dispatcher
        .dispatch(Action::Update, &single_host_config(), "ubuntu")
        .unwrap();

    assert_eq!(
        output_lines(dispatcher.into_output()),
        vec![
            "[derp@1.1.1.2] Pulling from library/ubuntu",
            "[derp@1.1.1.2] Digest: sha256:abc",
            "[derp@1.1.1.2] Status: Downloaded",
        ]
    );
}

/// CONTRACT: A host's lines stay contiguous and ordered even when hosts
/// finish concurrently.
#[test]
fn contract_concurrent_hosts_do_not_interleave_lines() {
    let executor = RecordingExecutor::new(|host, _| {
        let lines: String = (1..=20).map(|i| format!("{} line {i}\n", host.address)).collect();
        Ok(lines.into_bytes())
    });
    let dispatcher = Dispatcher::new(&executor, Vec::new());

    dispatcher
        .dispatch(Action::Update, &fleet_config(4), "acme/web")
        .unwrap();

    let lines = output_lines(dispatcher.into_output());
    assert_eq!(lines.len(), 80);
    for block in lines.chunks(20) {
        let prefix = block[0].split(' ').next().unwrap().to_string();
        for (i, line) in block.iter().enumerate() {
            assert!(line.starts_with(&prefix), "interleaved: {line}");
            assert!(line.ends_with(&format!("line {}", i + 1)), "out of order: {line}");
        }
    }
}

/// CONTRACT: Failures read like output, prefixed by the failing host.
#[test]
fn contract_failures_are_attributed_output() {
    let executor = RecordingExecutor::new(|host, _| {
        Err(ExecutionError::RemoteExit {
            code: Some(1),
            output: format!("Error response from daemon: No such container\nfrom {}\n", host.address)
                .into_bytes(),
        })
    });
    let dispatcher = Dispatcher::new(&executor, Vec::new());

    let report = dispatcher
        .dispatch(Action::Stop, &single_host_config(), "something/something")
        .unwrap();

    assert_eq!(report.failed(), 1);
    assert_eq!(
        output_lines(dispatcher.into_output()),
        vec![
            "[derp@1.1.1.2] Error response from daemon: No such container",
            "[derp@1.1.1.2] from 1.1.1.2",
        ]
    );
}

/// CONTRACT: A host that fails without printing anything still gets a line.
#[test]
fn contract_silent_failure_still_reports_the_host() {
    let executor = RecordingExecutor::new(|_, _| {
        Err(ExecutionError::RemoteExit {
            code: Some(1),
            output: Vec::new(),
        })
    });
    let dispatcher = Dispatcher::new(&executor, Vec::new());

    let report = dispatcher
        .dispatch(Action::Stop, &single_host_config(), "ubuntu")
        .unwrap();

    assert_eq!(report.failed(), 1);
    assert_eq!(
        output_lines(dispatcher.into_output()),
        vec!["[derp@1.1.1.2] command exited with status 1"]
    );
}
