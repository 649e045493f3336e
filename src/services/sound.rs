//! Notification sound devices

use std::{
    io::Write,
    path::PathBuf,
};
use tokio::{process::Command, sync::oneshot};
use tracing::{debug, error, info, warn};

/// One-shot token a sound device signals when it is done.
///
/// `signal` consumes the token, so a device can complete at most once per
/// `play` call.
#[derive(Debug)]
pub struct Completion {
    tx: oneshot::Sender<()>,
}

impl Completion {
    /// Create a token together with the receiver the timer waits on
    pub fn channel() -> (Self, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    /// Report completion to the timer
    pub fn signal(self) {
        // The timer drops its receiver when reset before completion
        if self.tx.send(()).is_err() {
            debug!("Sound completion arrived after the timer was reset");
        }
    }
}

/// Plays the notification tone when a countdown reaches zero
pub trait SoundDevice {
    /// Restart playback from the beginning and signal `done`
    fn play(&mut self, done: Completion);
}

impl<T: SoundDevice + ?Sized> SoundDevice for Box<T> {
    fn play(&mut self, done: Completion) {
        (**self).play(done);
    }
}

/// Rings the terminal bell
#[derive(Debug, Default)]
pub struct BellSound;

impl SoundDevice for BellSound {
    fn play(&mut self, done: Completion) {
        info!("Time's up");
        let mut stdout = std::io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            warn!("Failed to ring terminal bell: {}", e);
        }
        done.signal();
    }
}

/// Plays an audio file through an external player program
///
/// Every `play` spawns a fresh player process, so playback always starts from
/// the beginning of the file. Must be used inside a tokio runtime.
#[derive(Debug, Clone)]
pub struct CommandSound {
    pub player: String,
    pub file: PathBuf,
    /// Signal completion after the player exits instead of right after launch
    pub wait_for_playback: bool,
}

impl CommandSound {
    pub fn new(player: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            player: player.into(),
            file: file.into(),
            wait_for_playback: false,
        }
    }

    pub fn wait_for_playback(mut self, wait: bool) -> Self {
        self.wait_for_playback = wait;
        self
    }
}

impl SoundDevice for CommandSound {
    fn play(&mut self, done: Completion) {
        debug!("Launching {} {}", self.player, self.file.display());

        let mut child = match Command::new(&self.player).arg(&self.file).spawn() {
            Ok(child) => child,
            Err(e) => {
                error!("Failed to launch sound player {}: {}", self.player, e);
                done.signal();
                return;
            }
        };

        let player = self.player.clone();
        let pending = if self.wait_for_playback {
            Some(done)
        } else {
            done.signal();
            None
        };

        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if status.success() => debug!("{} finished playback", player),
                Ok(status) => warn!("{} exited with {}", player, status),
                Err(e) => error!("Failed to wait for {}: {}", player, e),
            }
            if let Some(done) = pending {
                done.signal();
            }
        });
    }
}

/// Check that the sound player program can be executed
pub async fn check_player_available(player: &str) -> Result<(), String> {
    Command::new(player)
        .arg("--version")
        .output()
        .await
        .map_err(|e| format!("Sound player '{}' is not available: {}", player, e))?;

    info!("Sound player {} is available", player);
    Ok(())
}
