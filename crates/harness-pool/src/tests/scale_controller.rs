use crate::tests::{StubLauncher, ids};
use crate::{ControlEvent, PoolState, ScaleCommand, ScaleController, ShutdownReason, WorkerId};

use tokio::sync::mpsc;

#[test]
fn given_empty_pool_when_scale_up_then_workers_forked() {
    // Given
    let (launcher, log) = StubLauncher::new();
    let mut controller = ScaleController::new(launcher);

    // When
    controller.scale_up(3);

    // Then
    assert_eq!(controller.registry().size(), 3);
    assert_eq!(log.launched(), ids(&[1, 2, 3]));
    assert_eq!(controller.state(), PoolState::Running);
}

#[test]
fn given_pool_of_four_when_scale_down_two_then_oldest_pair_killed() {
    // Given a pool grown in two steps, ids 1..=4
    let (launcher, log) = StubLauncher::new();
    let mut controller = ScaleController::new(launcher);
    controller.scale_up(1);
    controller.scale_up(3);

    // When
    let still_serving = controller.scale_down(2);

    // Then the first fork and the next-oldest go, the newest two stay
    assert!(still_serving);
    assert_eq!(log.killed(), ids(&[1, 2]));
    assert_eq!(controller.registry().all_ids(), ids(&[3, 4]));
}

#[test]
fn given_pool_of_two_when_scale_down_five_then_full_shutdown() {
    // Given
    let (launcher, log) = StubLauncher::new();
    let mut controller = ScaleController::new(launcher);
    controller.scale_up(2);

    // When
    let still_serving = controller.scale_down(5);

    // Then
    assert!(!still_serving);
    assert_eq!(log.killed(), ids(&[1, 2]));
    assert!(controller.registry().is_empty());
    assert_eq!(controller.state(), PoolState::Terminated);
}

#[test]
fn given_single_worker_when_scale_down_one_then_full_shutdown() {
    // Given
    let (launcher, _log) = StubLauncher::new();
    let mut controller = ScaleController::new(launcher);
    controller.scale_up(1);

    // When / Then: zero workers is not a servable pool
    assert!(!controller.scale_down(1));
    assert_eq!(controller.state(), PoolState::Terminated);
}

#[test]
fn given_terminated_pool_when_shutdown_again_then_unchanged() {
    // Given
    let (launcher, log) = StubLauncher::new();
    let mut controller = ScaleController::new(launcher);
    controller.scale_up(2);
    controller.shutdown();

    // When
    controller.shutdown();

    // Then each worker was terminated exactly once
    assert_eq!(log.killed(), ids(&[1, 2]));
    assert_eq!(controller.state(), PoolState::Terminated);
}

#[test]
fn given_refusing_launcher_when_scale_up_then_partial_pool() {
    // Given a launcher that fails on the third fork
    let (launcher, log) = StubLauncher::failing_after(2);
    let mut controller = ScaleController::new(launcher);

    // When
    controller.scale_up(5);

    // Then only the successful forks are registered
    assert_eq!(controller.registry().size(), 2);
    assert_eq!(log.launched(), ids(&[1, 2]));
}

#[test]
fn given_removed_workers_when_scale_up_then_ids_not_reused() {
    // Given
    let (launcher, log) = StubLauncher::new();
    let mut controller = ScaleController::new(launcher);
    controller.scale_up(2);
    controller.scale_down(1);

    // When
    controller.scale_up(1);

    // Then
    assert_eq!(log.launched(), ids(&[1, 2, 3]));
    assert_eq!(controller.registry().all_ids(), ids(&[2, 3]));
}

#[tokio::test]
async fn given_terminate_event_when_run_then_signal_reason() {
    // Given
    let (launcher, log) = StubLauncher::new();
    let mut controller = ScaleController::new(launcher);
    controller.scale_up(2);

    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(ControlEvent::Terminate(15)).expect("send failed");

    // When
    let reason = controller.run(rx).await;

    // Then
    assert_eq!(reason, ShutdownReason::Signal(15));
    assert_eq!(log.killed(), ids(&[1, 2]));
    assert!(controller.registry().is_empty());
}

#[tokio::test]
async fn given_queued_commands_when_run_then_applied_in_order() {
    // Given
    let (launcher, log) = StubLauncher::new();
    let mut controller = ScaleController::new(launcher);

    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(ControlEvent::Scale(ScaleCommand::ScaleUp { amount: 3 }))
        .expect("send failed");
    tx.send(ControlEvent::Scale(ScaleCommand::ScaleDown { amount: 1 }))
        .expect("send failed");
    tx.send(ControlEvent::Terminate(2)).expect("send failed");

    // When
    let reason = controller.run(rx).await;

    // Then the scale-down hit worker 1 before shutdown took 2 and 3
    assert_eq!(reason, ShutdownReason::Signal(2));
    assert_eq!(log.launched(), ids(&[1, 2, 3]));
    assert_eq!(log.killed(), ids(&[1, 2, 3]));
}

#[tokio::test]
async fn given_draining_scale_down_when_run_then_pool_drained_reason() {
    // Given
    let (launcher, _log) = StubLauncher::new();
    let mut controller = ScaleController::new(launcher);
    controller.scale_up(2);

    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(ControlEvent::Scale(ScaleCommand::ScaleDown { amount: 2 }))
        .expect("send failed");

    // When
    let reason = controller.run(rx).await;

    // Then
    assert_eq!(reason, ShutdownReason::PoolDrained);
    assert_eq!(controller.state(), PoolState::Terminated);
}

#[tokio::test]
async fn given_last_worker_exit_when_run_then_workers_gone_reason() {
    // Given
    let (launcher, _log) = StubLauncher::new();
    let mut controller = ScaleController::new(launcher);
    controller.scale_up(1);

    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(ControlEvent::WorkerExited(WorkerId::new(1)))
        .expect("send failed");

    // When
    let reason = controller.run(rx).await;

    // Then
    assert_eq!(reason, ShutdownReason::WorkersGone);
    assert_eq!(controller.state(), PoolState::Terminated);
}

#[tokio::test]
async fn given_unexpected_exit_with_survivors_when_run_then_pool_keeps_serving() {
    // Given
    let (launcher, log) = StubLauncher::new();
    let mut controller = ScaleController::new(launcher);
    controller.scale_up(2);

    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(ControlEvent::WorkerExited(WorkerId::new(1)))
        .expect("send failed");
    tx.send(ControlEvent::Terminate(15)).expect("send failed");

    // When
    let reason = controller.run(rx).await;

    // Then worker 1 left on its own, only worker 2 was killed
    assert_eq!(reason, ShutdownReason::Signal(15));
    assert_eq!(log.killed(), ids(&[2]));
}

#[tokio::test]
async fn given_terminated_pool_when_scale_event_then_ignored() {
    // Given
    let (launcher, log) = StubLauncher::new();
    let mut controller = ScaleController::new(launcher);
    controller.shutdown();

    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(ControlEvent::Scale(ScaleCommand::ScaleUp { amount: 4 }))
        .expect("send failed");
    tx.send(ControlEvent::Terminate(15)).expect("send failed");

    // When
    let reason = controller.run(rx).await;

    // Then nothing was forked after shutdown
    assert_eq!(reason, ShutdownReason::Signal(15));
    assert!(log.launched().is_empty());
}

#[tokio::test]
async fn given_all_senders_dropped_when_run_then_channel_closed_reason() {
    // Given
    let (launcher, log) = StubLauncher::new();
    let mut controller = ScaleController::new(launcher);
    controller.scale_up(1);

    let (tx, rx) = mpsc::unbounded_channel::<ControlEvent>();
    drop(tx);

    // When
    let reason = controller.run(rx).await;

    // Then the pool is torn down rather than leaked
    assert_eq!(reason, ShutdownReason::ChannelClosed);
    assert_eq!(log.killed(), ids(&[1]));
}
