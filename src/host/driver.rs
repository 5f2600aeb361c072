//! Line-oriented host driver
//!
//! Reads host events as JSON lines, applies them to a picker in order and
//! writes the resulting outputs as JSON lines. Hotkey changes reach the
//! driver through a broadcast channel fed by a picker subscription and are
//! written before the response to the event that caused them.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::events::HotkeyChanged;
use crate::hotkey::names;
use crate::state::HotkeyPicker;

use super::protocol::{resolve_all, HostError, HostEvent, Output, PickerStatus};

/// Lines longer than this are rejected without parsing
const MAX_LINE_LEN: usize = 64 * 1024;

/// Drives a picker from host input
pub struct Driver {
    picker: HotkeyPicker,
    event_tx: broadcast::Sender<HotkeyChanged>,
    event_rx: broadcast::Receiver<HotkeyChanged>,
}

impl Driver {
    /// Create a driver owning the given picker
    pub fn new(mut picker: HotkeyPicker) -> Self {
        let (event_tx, event_rx) = broadcast::channel(64);

        let sender = event_tx.clone();
        picker.subscribe(move |event| {
            // No receivers only means nobody is listening yet
            let _ = sender.send(event.clone());
        });

        Self {
            picker,
            event_tx,
            event_rx,
        }
    }

    pub fn picker(&self) -> &HotkeyPicker {
        &self.picker
    }

    /// Subscribe to hotkey changes made through this driver
    pub fn subscribe(&self) -> broadcast::Receiver<HotkeyChanged> {
        self.event_tx.subscribe()
    }

    /// Process input lines until the reader is exhausted
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await.context("failed to read host input")? {
            for output in self.handle_line(&line) {
                let mut bytes = serde_json::to_vec(&output)?;
                bytes.push(b'\n');
                writer
                    .write_all(&bytes)
                    .await
                    .context("failed to write output")?;
            }
            writer.flush().await?;
        }

        info!("host input closed");
        Ok(())
    }

    /// Apply one input line and collect the outputs it produces
    pub fn handle_line(&mut self, line: &str) -> Vec<Output> {
        let line = line.trim();
        if line.is_empty() {
            return Vec::new();
        }
        if line.len() > MAX_LINE_LEN {
            warn!(len = line.len(), "host line too large, skipping");
            return vec![Output::Error {
                code: "line_too_long".to_string(),
                message: format!("line exceeds {} bytes", MAX_LINE_LEN),
            }];
        }

        let result = HostEvent::parse(line).and_then(|event| {
            debug!(?event, "received host event");
            self.apply(event)
        });

        let mut outputs = self.drain_notifications();
        match result {
            Ok(Some(output)) => outputs.push(output),
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "rejected host input");
                outputs.push(Output::from(&e));
            }
        }
        outputs
    }

    /// Apply an event, returning the direct response if it has one
    fn apply(&mut self, event: HostEvent) -> Result<Option<Output>, HostError> {
        let picker = &mut self.picker;

        let output = match event {
            HostEvent::FocusIn => {
                picker.on_focus_gained();
                Some(label_of(picker))
            }
            HostEvent::FocusOut => {
                picker.on_focus_lost();
                Some(label_of(picker))
            }
            HostEvent::Key { key } => {
                let outcome = picker.on_key(key.resolve()?);
                Some(Output::KeyOutcome {
                    outcome: outcome.into(),
                    release_focus: outcome.releases_focus(),
                    label: picker.label().to_string(),
                })
            }
            HostEvent::SetHotkey { key } => {
                let key = key.resolve()?;
                if !picker.set_hotkey(key) {
                    debug!(code = key.value(), "set_hotkey ignored");
                }
                Some(label_of(picker))
            }
            HostEvent::Reset => {
                picker.reset();
                Some(label_of(picker))
            }
            HostEvent::SetName { key, name } => {
                names::set_name(key.resolve()?, name);
                None
            }
            HostEvent::SetDefaultText { text } => {
                picker.set_default_text(text);
                Some(label_of(picker))
            }
            HostEvent::SetSelectionText { text } => {
                picker.set_selection_text(text);
                Some(label_of(picker))
            }
            HostEvent::SetCancelKey { key } => {
                picker.set_cancel_key(key.resolve()?);
                None
            }
            HostEvent::SetFilterEnabled { enabled } => {
                picker.set_key_filter_enabled(enabled);
                None
            }
            HostEvent::SetAllowedKeys { keys } => {
                picker.set_allowed_keys(resolve_all(&keys)?);
                None
            }
            HostEvent::SetForbiddenKeys { keys } => {
                picker.set_forbidden_keys(resolve_all(&keys)?);
                None
            }
            HostEvent::Status => Some(Output::Status(PickerStatus::from(&*picker))),
        };

        Ok(output)
    }

    fn drain_notifications(&mut self) -> Vec<Output> {
        let mut outputs = Vec::new();
        loop {
            match self.event_rx.try_recv() {
                Ok(event) => outputs.push(Output::HotkeyChanged(event)),
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    warn!(skipped = n, "hotkey notifications lagged");
                }
                Err(_) => break,
            }
        }
        outputs
    }
}

fn label_of(picker: &HotkeyPicker) -> Output {
    Output::Label {
        mode: picker.mode().into(),
        label: picker.label().to_string(),
    }
}
