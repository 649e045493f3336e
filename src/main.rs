//! Ring Timer - A countdown timer rendered as a shrinking ring
//!
//! This is the main entry point for the ring-timer application.

use std::sync::Arc;
use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use ring_timer::{
    api::create_router,
    config::Config,
    services::{check_player_available, BellSound, CommandSound, LogDisplay, SoundDevice},
    state::{AppState, TimerStateMachine, TimerStatus},
    tasks::{spawn_timer, TimerHandle},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("ring_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting ring-timer v{}", env!("CARGO_PKG_VERSION"));
    let timer_config = config.timer_config().context("invalid timer configuration")?;
    info!("Configuration: duration={}s, warning={}s, alert={}s, tick={}ms",
          timer_config.total_duration(), timer_config.warning_threshold(),
          timer_config.alert_threshold(), timer_config.tick_interval().as_millis());
    debug!("Timer config: {}", serde_json::to_string(&timer_config)?);

    let sound = sound_device(&config).await;
    let machine = TimerStateMachine::new(timer_config, LogDisplay::new(), sound);
    let (timer, task) = spawn_timer(machine);

    if config.autostart || config.once {
        timer.start().await?;
    }

    if config.once {
        tokio::select! {
            result = run_once(&timer) => result?,
            result = shutdown_signal() => {
                result?;
                info!("Shutdown signal received");
            }
        }
        drop(timer);
        task.await?;
        return Ok(());
    }

    // Create application state and HTTP router
    let state = Arc::new(AppState::new(config.port, config.host.clone(), timer));
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start  - Start the countdown");
    info!("  POST /pause  - Pause the countdown");
    info!("  POST /resume - Resume the countdown");
    info!("  POST /reset  - Reset the timer");
    info!("  GET  /status - Current label, ring and color");
    info!("  GET  /health - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        result = shutdown_signal() => {
            if let Err(e) = result {
                tracing::error!("Signal handler error: {}", e);
            }
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Pick the sound device from the configuration, falling back to the bell
async fn sound_device(config: &Config) -> Box<dyn SoundDevice + Send> {
    let Some(file) = &config.sound_file else {
        return Box::new(BellSound);
    };

    match check_player_available(&config.player).await {
        Ok(()) => Box::new(
            CommandSound::new(config.player.clone(), file.clone())
                .wait_for_playback(config.wait_for_sound),
        ),
        Err(e) => {
            warn!("{}, using terminal bell instead", e);
            Box::new(BellSound)
        }
    }
}

/// Follow a started countdown until the completion sound returns it to idle
async fn run_once(timer: &TimerHandle) -> anyhow::Result<()> {
    let mut snapshots = timer.subscribe();

    loop {
        snapshots.changed().await.context("timer task stopped")?;
        let snapshot = snapshots.borrow_and_update().clone();
        debug!("{}", serde_json::to_string(&snapshot)?);

        if snapshot.status == TimerStatus::Idle {
            break;
        }
    }

    info!("Countdown complete");
    Ok(())
}
