//! hotkey-picker: headless host for the hotkey capture control
//!
//! Plays the part of the surrounding UI:
//! - Reads focus/key events as JSON lines on stdin
//! - Routes them into a single picker configured from the environment
//! - Writes hotkey notifications and label updates as JSON lines on stdout
//!
//! Logs go to stderr so stdout stays a clean protocol stream.

mod lifecycle;

use anyhow::Result;
use tokio::io::BufReader;
use tokio::sync::broadcast;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use hotkey_picker::host::Driver;
use hotkey_picker::hotkey::names;
use hotkey_picker::{Config, HotkeyPicker};

use crate::lifecycle::ShutdownSignal;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "hotkey-picker starting");

    // Load configuration
    let config = Config::load()?;
    info!(?config.picker, "configuration loaded");

    names::init();

    let shutdown = ShutdownSignal::new();

    let mut driver = Driver::new(HotkeyPicker::new(config.picker));
    let mut event_rx = driver.subscribe();

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    info!("picker initialized, reading host events");

    tokio::select! {
        result = driver.run(stdin, stdout) => {
            if let Err(e) = result {
                error!(?e, "host driver error");
            }
        }

        _ = async {
            loop {
                match event_rx.recv().await {
                    Ok(event) => info!(%event, "hotkey changed"),
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!(skipped = n, "hotkey event receiver lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        } => {
            info!("hotkey event logger exited");
        }

        reason = async {
            match shutdown.wait().await {
                Ok(reason) => reason,
                Err(e) => {
                    error!(?e, "failed to register signal handlers");
                    std::future::pending().await
                }
            }
        } => {
            info!(%reason, "shutdown signal received");
            // The blocking stdin read cannot be cancelled, so do not wait
            // for the runtime to drain it
            info!("hotkey-picker stopped");
            std::process::exit(0);
        }
    }

    info!("hotkey-picker stopped");

    Ok(())
}
