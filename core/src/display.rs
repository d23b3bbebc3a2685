//! The **debounce / display** state machine.
//!
//! Decides when a classified label becomes visible and when it goes away. The
//! controller never reads a clock: every call to [`DisplayController::tick`]
//! carries `now`, so behaviour is fully determined by the sequence of ticks.
//!
//! ```text
//!            Some(label)                         now >= expiry
//!   Idle ───────────────▶ Showing(label, expiry) ───────────────▶ Idle
//!                          │        ▲
//!                          └────────┘ Some(label') once minimum_interval has
//!                                     passed since the last acceptance
//! ```
//!
//! `None` classifications never hide a label early; only expiry does.

use std::time::Duration;

use handsign_common::{ConfigError, Label, RecognitionConfig, Timestamp};
use tracing::debug;

/// What a tick changed, for whoever renders the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayEvent {
    Unchanged,
    /// A label was accepted. Also emitted when the same label is re-accepted
    /// and its expiry pushed back.
    Shown(Label),
    Cleared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Idle,
    Showing { label: Label, expires_at: Timestamp },
}

/// Controller-owned mutable state.
///
/// `current_label` is `Some` exactly when `expires_at` is `Some` and later than
/// the `now` of the most recent tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecognitionState {
    pub current_label: Option<Label>,
    /// `None` until the first label is accepted.
    pub last_accepted_at: Option<Timestamp>,
    pub expires_at: Option<Timestamp>,
}

#[derive(Debug, Clone)]
pub struct DisplayController {
    minimum_interval: Duration,
    display_duration: Duration,
    state: RecognitionState,
}

impl DisplayController {
    pub fn new(config: &RecognitionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            minimum_interval: config.minimum_interval,
            display_duration: config.display_duration,
            state: RecognitionState::default(),
        })
    }

    pub fn state(&self) -> DisplayState {
        match (self.state.current_label, self.state.expires_at) {
            (Some(label), Some(expires_at)) => DisplayState::Showing { label, expires_at },
            _ => DisplayState::Idle,
        }
    }

    pub fn recognition_state(&self) -> &RecognitionState {
        &self.state
    }

    pub fn current_label(&self) -> Option<Label> {
        self.state.current_label
    }

    pub fn expires_at(&self) -> Option<Timestamp> {
        self.state.expires_at
    }

    /// Advances the state machine to `now` with this frame's classification.
    ///
    /// Expiry is applied before the classification, so a tick that both ends
    /// the old label and accepts a new one reports `Shown`.
    pub fn tick(&mut self, now: Timestamp, classification: Option<Label>) -> DisplayEvent {
        let expired = self.expire(now);

        let Some(label) = classification else {
            return if expired {
                DisplayEvent::Cleared
            } else {
                DisplayEvent::Unchanged
            };
        };

        if self.state.current_label.is_some() && self.within_debounce(now) {
            return DisplayEvent::Unchanged;
        }

        self.accept(now, label);
        DisplayEvent::Shown(label)
    }

    fn expire(&mut self, now: Timestamp) -> bool {
        match self.state.expires_at {
            Some(expires_at) if now >= expires_at => {
                debug!(label = ?self.state.current_label, "display expired");
                self.state.current_label = None;
                self.state.expires_at = None;
                true
            }
            _ => false,
        }
    }

    fn within_debounce(&self, now: Timestamp) -> bool {
        self.state
            .last_accepted_at
            .is_some_and(|accepted| now.since(accepted) < self.minimum_interval)
    }

    fn accept(&mut self, now: Timestamp, label: Label) {
        let expires_at = now + self.display_duration;
        debug!(%label, expires_at = expires_at.as_secs_f64(), "label accepted");
        self.state = RecognitionState {
            current_label: Some(label),
            last_accepted_at: Some(now),
            expires_at: Some(expires_at),
        };
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
