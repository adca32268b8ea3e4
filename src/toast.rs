//! Clipboard write plus a self-dismissing "copied" confirmation.
//!
//! Only one confirmation is ever visible. Each `notify` bumps a generation
//! counter; the dismissal timer carries the generation it was armed for, so a
//! timer belonging to a replaced confirmation expires into nothing.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::error::DropperError;

pub const CONFIRMATION: &str = "Copied to clipboard.";

pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), DropperError>;
}

/// The OS clipboard. The handle is opened on first use and kept alive, since
/// some platforms drop the contents together with the owner.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), DropperError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()?,
        };
        self.inner.insert(clipboard).set_text(text.to_owned())?;
        Ok(())
    }
}

/// A pending dismissal for the confirmation of `generation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTimer {
    pub generation: u64,
    pub after: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToastPhase {
    Hidden,
    Visible { generation: u64 },
    Fading { generation: u64, started: Instant },
}

#[derive(Debug, Clone)]
pub struct Toast {
    generation: u64,
    phase: ToastPhase,
    duration: Duration,
    fade: Duration,
}

impl Toast {
    pub fn new(duration: Duration, fade: Duration) -> Self {
        Self {
            generation: 0,
            phase: ToastPhase::Hidden,
            duration,
            fade,
        }
    }

    pub fn phase(&self) -> &ToastPhase {
        &self.phase
    }

    /// Copy `text` and, if the write succeeded, show the confirmation.
    ///
    /// A failed write leaves the toast untouched and returns `None`.
    pub fn notify(&mut self, sink: &mut dyn ClipboardSink, text: &str) -> Option<DismissTimer> {
        if let Err(err) = sink.write_text(text) {
            warn!("clipboard write failed: {err}");
            return None;
        }
        Some(self.show())
    }

    /// Show a fresh confirmation, replacing any visible one.
    pub fn show(&mut self) -> DismissTimer {
        self.generation += 1;
        if self.phase != ToastPhase::Hidden {
            debug!(generation = self.generation, "replacing visible confirmation");
        }
        self.phase = ToastPhase::Visible {
            generation: self.generation,
        };
        DismissTimer {
            generation: self.generation,
            after: self.duration,
        }
    }

    /// The dismissal timer for `generation` fired. Starts the fade when it
    /// belongs to the visible confirmation; returns whether it did.
    pub fn expire(&mut self, generation: u64, now: Instant) -> bool {
        match self.phase {
            ToastPhase::Visible { generation: current } if current == generation => {
                self.phase = ToastPhase::Fading {
                    generation,
                    started: now,
                };
                true
            }
            _ => false,
        }
    }

    /// Advance the fade; removes the confirmation once it is fully faded.
    pub fn tick(&mut self, now: Instant) {
        if let ToastPhase::Fading { started, .. } = self.phase
            && now.saturating_duration_since(started) >= self.fade
        {
            self.phase = ToastPhase::Hidden;
        }
    }

    pub fn is_fading(&self) -> bool {
        matches!(self.phase, ToastPhase::Fading { .. })
    }

    pub fn visible_count(&self) -> usize {
        match self.phase {
            ToastPhase::Hidden => 0,
            _ => 1,
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self.phase {
            ToastPhase::Hidden => None,
            _ => Some(CONFIRMATION),
        }
    }

    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            ToastPhase::Hidden => 0.0,
            ToastPhase::Visible { .. } => 1.0,
            ToastPhase::Fading { started, .. } => {
                if self.fade.is_zero() {
                    return 0.0;
                }
                let elapsed = now.saturating_duration_since(started).as_secs_f32();
                (1.0 - elapsed / self.fade.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }
}
