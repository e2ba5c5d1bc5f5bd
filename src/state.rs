//! Core widget state, separated from UI logic.
//!
//! `WidgetState` holds everything about the panel itself: whether it is
//! open, the in-flight close transition, the one-time greeting flag, and
//! transient status toasts. Conversation content lives in `Transcript`.

use std::time::{Duration, Instant};

/// How long the exit fade runs before the panel actually hides.
pub const CLOSE_TRANSITION: Duration = Duration::from_millis(300);

/// Panel visibility and session flags for the chat widget.
#[derive(Debug, Default)]
pub struct WidgetState {
    /// Whether the panel is logically open (bubble hidden).
    pub is_open: bool,

    /// Set while the exit fade is playing; the panel stays visible and
    /// fully functional until it elapses.
    pub closing_since: Option<Instant>,

    /// Flips false -> true exactly once, on the first open.
    pub has_greeted: bool,

    /// Clock label captured on the first open, e.g. "14:05".
    pub chat_started_at: Option<String>,

    /// Status toast messages with creation time (auto-expire).
    pub status_messages: Vec<(String, Instant)>,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the panel should be drawn (open, or still fading out).
    pub fn panel_visible(&self) -> bool {
        self.is_open || self.closing_since.is_some()
    }

    /// Begin the exit fade. The panel hides once the transition elapses.
    pub fn begin_close(&mut self, now: Instant) {
        if self.is_open && self.closing_since.is_none() {
            self.closing_since = Some(now);
        }
    }

    /// Complete the close once the fade has run. Returns true when the
    /// panel was hidden by this call.
    pub fn finish_close_if_due(&mut self, now: Instant) -> bool {
        if let Some(since) = self.closing_since {
            if now.duration_since(since) >= CLOSE_TRANSITION {
                self.closing_since = None;
                self.is_open = false;
                return true;
            }
        }
        false
    }

    /// Opacity of the panel for the exit fade, 1.0 when fully open.
    pub fn panel_opacity(&self, now: Instant) -> f32 {
        match self.closing_since {
            Some(since) => {
                let elapsed = now.duration_since(since).as_secs_f32();
                (1.0 - elapsed / CLOSE_TRANSITION.as_secs_f32()).max(0.0)
            }
            None => 1.0,
        }
    }

    pub fn push_toast(&mut self, message: impl Into<String>, now: Instant) {
        self.status_messages.push((message.into(), now));
    }

    /// Purge status messages older than the given duration.
    pub fn purge_old_status_messages(&mut self, max_age_secs: u64) {
        self.status_messages
            .retain(|(_, created)| created.elapsed().as_secs() < max_age_secs);
    }
}
