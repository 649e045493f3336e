//! Countdown background task
//!
//! The task owns the state machine outright and is its only mutator. Drivers
//! talk to it through a [`TimerHandle`] and observe it through a watch
//! channel of [`TimerSnapshot`]s.

use std::time::Duration;
use tokio::{
    sync::{mpsc, oneshot, watch},
    task::JoinHandle,
    time::{interval_at, Instant, Interval},
};
use tracing::{debug, info, warn};

use crate::{
    error::TimerError,
    services::{DisplaySurface, SoundDevice},
    state::{TimerSnapshot, TimerStateMachine},
};

/// Driver requests accepted by the timer task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Start,
    Pause,
    Resume,
    Reset,
}

impl TimerCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Reset => "reset",
        }
    }
}

/// A command plus the channel its resulting snapshot is returned on
#[derive(Debug)]
pub struct TimerRequest {
    command: TimerCommand,
    reply: oneshot::Sender<TimerSnapshot>,
}

/// Cloneable handle to a running timer task
#[derive(Debug, Clone)]
pub struct TimerHandle {
    commands: mpsc::Sender<TimerRequest>,
    snapshots: watch::Receiver<TimerSnapshot>,
}

impl TimerHandle {
    pub async fn start(&self) -> Result<TimerSnapshot, TimerError> {
        self.send(TimerCommand::Start).await
    }

    pub async fn pause(&self) -> Result<TimerSnapshot, TimerError> {
        self.send(TimerCommand::Pause).await
    }

    pub async fn resume(&self) -> Result<TimerSnapshot, TimerError> {
        self.send(TimerCommand::Resume).await
    }

    pub async fn reset(&self) -> Result<TimerSnapshot, TimerError> {
        self.send(TimerCommand::Reset).await
    }

    /// Apply a command and return the snapshot right after it took effect
    pub async fn send(&self, command: TimerCommand) -> Result<TimerSnapshot, TimerError> {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(TimerRequest { command, reply })
            .await
            .map_err(|_| TimerError::Closed)?;
        rx.await.map_err(|_| TimerError::Closed)
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> TimerSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified after every change
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.snapshots.clone()
    }
}

/// Spawn a timer task for `machine` and return its handle
pub fn spawn_timer<D, S>(machine: TimerStateMachine<D, S>) -> (TimerHandle, JoinHandle<()>)
where
    D: DisplaySurface + Send + 'static,
    S: SoundDevice + Send + 'static,
{
    let (command_tx, command_rx) = mpsc::channel(32);
    let (snapshot_tx, snapshot_rx) = watch::channel(machine.snapshot());

    let task = tokio::spawn(timer_task(machine, command_rx, snapshot_tx));
    let handle = TimerHandle {
        commands: command_tx,
        snapshots: snapshot_rx,
    };
    (handle, task)
}

enum Event {
    Command(Option<TimerRequest>),
    Tick,
    SoundDone,
}

/// Background task that ticks the state machine and applies driver commands
async fn timer_task<D, S>(
    mut machine: TimerStateMachine<D, S>,
    mut commands: mpsc::Receiver<TimerRequest>,
    snapshots: watch::Sender<TimerSnapshot>,
) where
    D: DisplaySurface,
    S: SoundDevice,
{
    info!("Starting countdown timer task");

    let mut ticker: Option<Interval> = None;

    loop {
        sync_schedule(machine.is_ticking(), machine.config().tick_interval(), &mut ticker);

        let event = tokio::select! {
            command = commands.recv() => Event::Command(command),
            _ = next_tick(&mut ticker) => Event::Tick,
            _ = machine.completed() => Event::SoundDone,
        };

        let reply = match event {
            Event::Command(Some(TimerRequest { command, reply })) => {
                debug!("Timer task received command: {}", command.as_str());
                match command {
                    TimerCommand::Start => machine.start(),
                    TimerCommand::Pause => machine.pause(),
                    TimerCommand::Resume => machine.resume(),
                    TimerCommand::Reset => machine.reset(),
                }
                Some(reply)
            }
            Event::Command(None) => {
                info!("All timer handles dropped, stopping countdown timer task");
                break;
            }
            Event::Tick => {
                machine.tick();
                None
            }
            Event::SoundDone => {
                debug!("Sound completion handled");
                None
            }
        };

        let snapshot = machine.snapshot();
        if let Err(e) = snapshots.send(snapshot.clone()) {
            warn!("Failed to send timer snapshot: {}", e);
        }
        if let Some(reply) = reply {
            // The requester may have given up waiting
            let _ = reply.send(snapshot);
        }
    }
}

/// Arm or clear the interval so at most one exists and it matches the machine
fn sync_schedule(ticking: bool, period: Duration, ticker: &mut Option<Interval>) {
    match (ticking, ticker.is_some()) {
        (true, false) => {
            debug!("Arming tick schedule every {:?}", period);
            // First tick lands one full period after start
            *ticker = Some(interval_at(Instant::now() + period, period));
        }
        (false, true) => {
            debug!("Clearing tick schedule");
            *ticker = None;
        }
        _ => {}
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn schedule_arms_once_and_clears() {
        let period = Duration::from_secs(1);
        let mut ticker = None;
        sync_schedule(true, period, &mut ticker);
        assert!(ticker.is_some());

        let start = Instant::now();
        next_tick(&mut ticker).await;
        assert_eq!(start.elapsed(), period);

        // Re-syncing while armed keeps the existing interval's cadence
        sync_schedule(true, period, &mut ticker);
        next_tick(&mut ticker).await;
        assert_eq!(start.elapsed(), period * 2);

        sync_schedule(false, period, &mut ticker);
        assert!(ticker.is_none());
        sync_schedule(false, period, &mut ticker);
        assert!(ticker.is_none());
    }

    #[test]
    fn command_names() {
        assert_eq!(TimerCommand::Start.as_str(), "start");
        assert_eq!(TimerCommand::Reset.as_str(), "reset");
    }
}
