// tests/chain_simulation.rs
//
// Whole chains run in-process: every "child" is another `run_link` call.

mod common;
use crate::common::builders::ConfigFileBuilder;
use crate::common::{args, init_tracing};

use proc_chain::chain::{ChainState, FAILURE_EXIT_CODE, exit_code_of, run_link};
use proc_chain::config::ChainSettings;
use proc_chain::sink::LifecycleEvent;
use proc_chain::types::ExitCodePolicy;
use proc_chain_test_utils::recording_sink::RecordingSink;
use proc_chain_test_utils::simulator::ChainSimulator;
use proc_chain_test_utils::with_timeout;

#[tokio::test]
async fn bound_10_without_arguments_runs_eleven_links() {
    init_tracing();
    let settings = ChainSettings::with_bound(10);
    let sink = RecordingSink::new();
    let mut sim = ChainSimulator::new(settings, sink.clone());

    let result = with_timeout(run_link(&[], &settings, &mut sim, &mut sink.clone())).await;

    assert_eq!(exit_code_of(&result), 0);
    assert_eq!(sink.started_states(), (0..=10).collect::<Vec<_>>());
    assert_eq!(sim.launched().len(), 10);
    assert_eq!(sink.count_bound_reached(), 1);
}

#[tokio::test]
async fn bound_500_from_499_runs_two_links() {
    let settings = ChainSettings::with_bound(500);
    let sink = RecordingSink::new();
    let mut sim = ChainSimulator::new(settings, sink.clone());

    let result = run_link(&args(&["499"]), &settings, &mut sim, &mut sink.clone()).await;

    assert_eq!(exit_code_of(&result), 0);
    assert_eq!(sink.started_states(), vec![499, 500]);
    assert_eq!(sim.launched(), vec![args(&["500"])]);
}

#[tokio::test]
async fn start_at_bound_minus_one_spawns_a_single_terminal_child() {
    let settings = ChainSettings::with_bound(7);
    let sink = RecordingSink::new();
    let mut sim = ChainSimulator::new(settings, sink.clone());

    run_link(&args(&["6"]), &settings, &mut sim, &mut sink.clone())
        .await
        .unwrap();

    assert_eq!(sim.launched(), vec![args(&["7"])]);
    assert_eq!(sink.count_bound_reached(), 1);
}

#[tokio::test]
async fn parents_finish_after_all_descendants() {
    let settings = ChainSettings::with_bound(4);
    let sink = RecordingSink::new();
    let mut sim = ChainSimulator::new(settings, sink.clone());

    run_link(&[], &settings, &mut sim, &mut sink.clone())
        .await
        .unwrap();

    let kinds: Vec<String> = sink
        .events()
        .into_iter()
        .map(|(_, ev)| match ev {
            LifecycleEvent::LinkStarted { state, .. } => format!("start {state}"),
            LifecycleEvent::BoundReached { state, .. } => format!("bound {state}"),
            LifecycleEvent::ChildExited { next, .. } => format!("exit {next}"),
            LifecycleEvent::LaunchFailed { next, .. } => format!("fail {next}"),
        })
        .collect();

    assert_eq!(
        kinds,
        vec![
            "start 0", "start 1", "start 2", "start 3", "start 4", "bound 4", "exit 4",
            "exit 3", "exit 2", "exit 1",
        ]
    );
}

#[tokio::test]
async fn deep_launch_failure_propagates_to_the_top() {
    init_tracing();
    let settings = ChainSettings::with_bound(10);
    let sink = RecordingSink::new();
    let mut sim = ChainSimulator::new(settings, sink.clone()).fail_launch_of(5);

    let result = run_link(&[], &settings, &mut sim, &mut sink.clone()).await;

    // Link 4 fails to launch 5 and exits 1; 3, 2, 1, 0 pass that code up.
    assert_eq!(exit_code_of(&result), FAILURE_EXIT_CODE);
    assert_eq!(sink.started_states(), vec![0, 1, 2, 3, 4]);
    assert_eq!(sink.launch_failures(), vec![ChainState::new(5)]);
    assert_eq!(sink.count_bound_reached(), 0);
}

#[tokio::test]
async fn always_zero_masks_a_deep_failure_at_the_first_parent() {
    let settings = ConfigFileBuilder::new()
        .bound(10)
        .exit_code_policy(ExitCodePolicy::AlwaysZero)
        .settings();
    let sink = RecordingSink::new();
    let mut sim = ChainSimulator::new(settings, sink.clone()).fail_launch_of(3);

    let result = run_link(&[], &settings, &mut sim, &mut sink.clone()).await;

    assert_eq!(exit_code_of(&result), 0);

    // Link 1 saw child 2 exit with 1 but still reported 0 upward.
    let child_codes: Vec<(u64, i32)> = sink
        .events()
        .into_iter()
        .filter_map(|(_, ev)| match ev {
            LifecycleEvent::ChildExited { next, exit_code } => Some((next.value(), exit_code)),
            _ => None,
        })
        .collect();
    assert_eq!(child_codes, vec![(2, 1), (1, 0)]);
}
