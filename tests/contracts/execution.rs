//! Every targeted host gets exactly one attempt and one result.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use containment::{Action, Dispatcher, ExecutionError, ExecutionState};

use crate::common::*;

/// CONTRACT: N hosts produce N results even when some of them fail.
#[test]
fn contract_one_result_per_host_despite_failures() {
    let executor = RecordingExecutor::new(|host, _| {
        if host.address.ends_with(".2") || host.address.ends_with(".5") {
            Err(ExecutionError::Connection {
                host: host.to_string(),
                message: "Connection refused".to_string(),
            })
        } else {
            Ok(b"ok\n".to_vec())
        }
    });
    let config = fleet_config(6);

    for action in Action::ALL {
        let dispatcher = Dispatcher::new(&executor, Vec::new());
        let report = dispatcher.dispatch(action, &config, "acme/web").unwrap();

        assert_eq!(report.results.len(), 6, "{action}");
        assert_eq!(report.failed(), 2, "{action}");
        assert_eq!(report.succeeded(), 4, "{action}");
        let failed: Vec<_> = report
            .results
            .iter()
            .filter(|r| r.state() == ExecutionState::Failed)
            .map(|r| r.host.address.as_str())
            .collect();
        assert_eq!(failed, vec!["10.0.0.2", "10.0.0.5"], "{action}");
    }
    assert_eq!(executor.call_count(), 6 * Action::ALL.len());
}

/// CONTRACT: A host listed in two clusters is executed once per cluster.
#[test]
fn contract_shared_hosts_are_not_deduplicated() {
    let executor = RecordingExecutor::with_output("");
    let dispatcher = Dispatcher::new(&executor, Vec::new());

    let report = dispatcher
        .dispatch(Action::Stop, &overlapping_config(), "acme/web")
        .unwrap();

    let targets: Vec<_> = report
        .results
        .iter()
        .map(|r| (r.cluster.as_str(), r.host.address.as_str()))
        .collect();
    assert_eq!(
        targets,
        vec![
            ("web", "10.0.0.1"),
            ("web", "10.0.0.2"),
            ("workers", "10.0.0.1"),
            ("workers", "10.0.0.3"),
        ]
    );
    assert_eq!(executor.call_count(), 4);
}

/// CONTRACT: Parallel actions have every host in flight at once, so a slow
/// host doesn't hold back the others.
#[test]
fn contract_parallel_actions_run_concurrently() {
    const HOSTS: usize = 5;

    for action in [Action::Status, Action::Update] {
        let in_flight = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));
        let executor = RecordingExecutor::new({
            let in_flight = in_flight.clone();
            let peak = peak.clone();
            move |_, _| {
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                // Wait until every host has started, or give up.
                let deadline = Instant::now() + Duration::from_secs(5);
                while peak.load(Ordering::SeqCst) < HOSTS && Instant::now() < deadline {
                    thread::sleep(Duration::from_millis(5));
                }
                let all_started = peak.load(Ordering::SeqCst) >= HOSTS;
                in_flight.fetch_sub(1, Ordering::SeqCst);
                if all_started {
                    Ok(b"true\n".to_vec())
                } else {
                    Err(ExecutionError::Session {
                        host: "test".to_string(),
                        message: "ran sequentially".to_string(),
                    })
                }
            }
        });
        let dispatcher = Dispatcher::new(&executor, Vec::new());

        let report = dispatcher
            .dispatch(action, &fleet_config(HOSTS), "acme/web")
            .unwrap();

        assert_eq!(report.results.len(), HOSTS);
        assert_eq!(report.succeeded(), HOSTS, "{action} did not run hosts concurrently");
    }
}

/// CONTRACT: Mutating actions run one host at a time in declared order.
#[test]
fn contract_mutating_actions_run_in_order() {
    for action in [Action::Start, Action::Stop, Action::Restart] {
        let in_flight = Arc::new(AtomicUsize::new(0));
        let overlapped = Arc::new(AtomicUsize::new(0));
        let executor = RecordingExecutor::new({
            let in_flight = in_flight.clone();
            let overlapped = overlapped.clone();
            move |_, _| {
                if in_flight.fetch_add(1, Ordering::SeqCst) > 0 {
                    overlapped.fetch_add(1, Ordering::SeqCst);
                }
                thread::sleep(Duration::from_millis(2));
                in_flight.fetch_sub(1, Ordering::SeqCst);
                Ok(Vec::new())
            }
        });
        let dispatcher = Dispatcher::new(&executor, Vec::new());

        dispatcher
            .dispatch(action, &overlapping_config(), "acme/web")
            .unwrap();

        assert_eq!(overlapped.load(Ordering::SeqCst), 0, "{action}");
        let order: Vec<_> = executor
            .calls()
            .into_iter()
            .map(|c| c.host.address)
            .collect();
        assert_eq!(order, vec!["10.0.0.1", "10.0.0.2", "10.0.0.1", "10.0.0.3"]);
    }
}
