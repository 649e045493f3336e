//! The timer task on a paused tokio clock

mod common;

use std::time::Duration;

use common::{RecordingDisplay, RecordingSound};
use ring_timer::{spawn_timer, SeverityLevel, TimerConfig, TimerError, TimerStateMachine, TimerStatus};
use tokio::time::{self, Instant};

fn config(total: u64, tick_ms: u64) -> TimerConfig {
    TimerConfig::new(total, 10, 5)
        .and_then(|c| c.with_tick_interval(Duration::from_millis(tick_ms)))
        .unwrap()
}

#[tokio::test(start_paused = true)]
async fn countdown_runs_to_completion_and_resets() {
    let sound = RecordingSound::holding();
    let display = RecordingDisplay::default();
    let machine = TimerStateMachine::new(config(3, 1000), display.clone(), sound.clone());
    let (timer, _task) = spawn_timer(machine);
    let mut snapshots = timer.subscribe();

    let started = Instant::now();
    let snapshot = timer.start().await.unwrap();
    assert_eq!(snapshot.status, TimerStatus::Running);

    let finished = snapshots
        .wait_for(|s| s.status == TimerStatus::Finished)
        .await
        .unwrap()
        .clone();
    assert_eq!(started.elapsed(), Duration::from_secs(3));
    assert_eq!(finished.remaining, 0);
    assert_eq!(finished.label, "0:00");
    assert_eq!(sound.plays(), 1);

    // Stays finished until the sound device signals
    time::sleep(Duration::from_secs(5)).await;
    assert_eq!(timer.snapshot().status, TimerStatus::Finished);
    assert_eq!(display.snapshot().labels.len(), 4);

    assert!(sound.release());
    let idle = snapshots
        .wait_for(|s| s.status == TimerStatus::Idle)
        .await
        .unwrap()
        .clone();
    assert_eq!(idle.elapsed, 0);
    assert_eq!(idle.label, "0:03");
    assert_eq!(sound.plays(), 1);
}

#[tokio::test(start_paused = true)]
async fn first_tick_lands_one_interval_after_start() {
    let machine = TimerStateMachine::new(config(15, 250), RecordingDisplay::default(), RecordingSound::immediate());
    let (timer, _task) = spawn_timer(machine);
    let mut snapshots = timer.subscribe();

    timer.start().await.unwrap();
    let started = Instant::now();
    let first = snapshots.wait_for(|s| s.elapsed == 1).await.unwrap().clone();
    assert_eq!(started.elapsed(), Duration::from_millis(250));
    assert_eq!(first.label, "0:14");
}

#[tokio::test(start_paused = true)]
async fn pause_holds_elapsed_while_ticks_continue() {
    let machine = TimerStateMachine::new(config(15, 1000), RecordingDisplay::default(), RecordingSound::immediate());
    let (timer, _task) = spawn_timer(machine);
    let mut snapshots = timer.subscribe();

    timer.start().await.unwrap();
    snapshots.wait_for(|s| s.elapsed == 2).await.unwrap();
    let paused = timer.pause().await.unwrap();
    assert_eq!(paused.status, TimerStatus::Paused);
    assert_eq!(paused.elapsed, 2);

    time::sleep(Duration::from_secs(30)).await;
    assert_eq!(timer.snapshot().elapsed, 2);
    assert_eq!(timer.snapshot().status, TimerStatus::Paused);

    timer.resume().await.unwrap();
    let resumed = snapshots.wait_for(|s| s.elapsed == 5).await.unwrap().clone();
    assert_eq!(resumed.remaining, 10);
    assert_eq!(resumed.severity, SeverityLevel::Warning);
}

#[tokio::test(start_paused = true)]
async fn second_start_is_ignored() {
    let machine = TimerStateMachine::new(config(15, 1000), RecordingDisplay::default(), RecordingSound::immediate());
    let (timer, _task) = spawn_timer(machine);
    let mut snapshots = timer.subscribe();

    timer.start().await.unwrap();
    snapshots.wait_for(|s| s.elapsed == 3).await.unwrap();
    let again = timer.start().await.unwrap();
    assert_eq!(again.elapsed, 3);

    // One schedule: exactly one more tick per interval
    let before = Instant::now();
    snapshots.wait_for(|s| s.elapsed == 4).await.unwrap();
    assert!(before.elapsed() <= Duration::from_secs(1));
    time::sleep(Duration::from_millis(500)).await;
    assert_eq!(timer.snapshot().elapsed, 4);
}

#[tokio::test(start_paused = true)]
async fn reset_stops_ticking() {
    let machine = TimerStateMachine::new(config(15, 1000), RecordingDisplay::default(), RecordingSound::immediate());
    let (timer, _task) = spawn_timer(machine);
    let mut snapshots = timer.subscribe();

    timer.start().await.unwrap();
    snapshots.wait_for(|s| s.elapsed == 4).await.unwrap();
    let reset = timer.reset().await.unwrap();
    assert_eq!(reset.status, TimerStatus::Idle);
    assert_eq!(reset.elapsed, 0);

    time::sleep(Duration::from_secs(10)).await;
    assert_eq!(timer.snapshot().elapsed, 0);
    assert_eq!(timer.snapshot().status, TimerStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn immediate_sound_returns_to_idle() {
    let sound = RecordingSound::immediate();
    let machine = TimerStateMachine::new(config(2, 1000), RecordingDisplay::default(), sound.clone());
    let (timer, _task) = spawn_timer(machine);
    let mut snapshots = timer.subscribe();

    timer.start().await.unwrap();
    snapshots
        .wait_for(|s| s.status == TimerStatus::Idle)
        .await
        .unwrap();
    assert_eq!(sound.plays(), 1);

    // The timer can run again
    let restarted = timer.start().await.unwrap();
    assert_eq!(restarted.status, TimerStatus::Running);
}

#[tokio::test]
async fn closed_task_reports_error() {
    let machine = TimerStateMachine::new(TimerConfig::default(), RecordingDisplay::default(), RecordingSound::immediate());
    let (timer, task) = spawn_timer(machine);
    task.abort();
    let _ = task.await;
    assert_eq!(timer.start().await, Err(TimerError::Closed));
}
