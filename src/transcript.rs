//! Transcript model: the ordered list of message units plus the ephemeral
//! pieces around them (start marker, pending indicator).
//!
//! This is pure state. The egui layer draws it; tests drive it directly.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::typing::TypingReveal;

/// Format an instant as the widget's clock label (local time, hour:minute).
pub fn clock_label(at: DateTime<Local>) -> String {
    at.format("%H:%M").to_string()
}

/// Visual origin of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single message unit: text paired with a togglable "Sent at" label.
#[derive(Debug, Clone)]
pub struct MessageEntry {
    text: String,
    pub sender: Sender,
    /// Clock label captured at creation, e.g. "14:05".
    pub sent_at: String,
    /// Whether the timestamp label is currently shown.
    pub timestamp_visible: bool,
    /// Set each time the label becomes visible, for the fade-in.
    pub timestamp_revealed_at: Option<Instant>,
    /// Creation instant, for the entrance animation.
    pub appeared_at: Instant,
    /// Present while the text is still typing in.
    pub reveal: Option<TypingReveal>,
}

impl MessageEntry {
    /// The text as currently rendered (partial while typing).
    pub fn visible_text(&self) -> String {
        match &self.reveal {
            Some(reveal) => reveal.visible(),
            None => self.text.clone(),
        }
    }

    /// The full text the unit will eventually show.
    pub fn full_text(&self) -> &str {
        &self.text
    }

    /// The companion label text, present whether or not it is shown.
    pub fn timestamp_label(&self) -> String {
        format!("Sent at {}", self.sent_at)
    }

    /// Flip the label's visibility; plays the fade each time it appears.
    pub fn toggle_timestamp(&mut self, now: Instant) {
        self.timestamp_visible = !self.timestamp_visible;
        if self.timestamp_visible {
            self.timestamp_revealed_at = Some(now);
        }
    }
}

/// Placeholder shown while a responder reply is awaited. Carries no
/// timestamp and is not a message unit.
#[derive(Debug, Clone)]
pub struct PendingIndicator {
    pub since: Instant,
}

/// The scrollable conversation: start marker, message units in order, and
/// at most one pending indicator.
#[derive(Debug, Default)]
pub struct Transcript {
    /// "Chat started at HH:MM" line shown above the first message.
    pub start_marker: Option<String>,
    entries: Vec<MessageEntry>,
    pending: Option<PendingIndicator>,
    /// Set whenever content is appended or typing advances.
    pub scroll_to_bottom: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[MessageEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut [MessageEntry] {
        &mut self.entries
    }

    pub fn pending(&self) -> Option<&PendingIndicator> {
        self.pending.as_ref()
    }

    /// Record the one-time "Chat started at" marker.
    pub fn set_start_marker(&mut self, label: &str) {
        self.start_marker = Some(format!("Chat started at {}", label));
    }

    /// Append a fully rendered message unit.
    pub fn push(&mut self, text: &str, sender: Sender, now: Instant) {
        self.entries.push(MessageEntry {
            text: text.to_string(),
            sender,
            sent_at: clock_label(Local::now()),
            timestamp_visible: false,
            timestamp_revealed_at: None,
            appeared_at: now,
            reveal: None,
        });
        self.scroll_to_bottom = true;
    }

    /// Append a message unit whose text types in token by token.
    pub fn push_typing(&mut self, text: &str, sender: Sender, now: Instant, interval: Duration) {
        let reveal = TypingReveal::new(text, now, interval);
        self.entries.push(MessageEntry {
            text: reveal.full(),
            sender,
            sent_at: clock_label(Local::now()),
            timestamp_visible: false,
            timestamp_revealed_at: None,
            appeared_at: now,
            reveal: Some(reveal),
        });
        self.scroll_to_bottom = true;
    }

    /// Attach the pending indicator (replacing any stale one).
    pub fn set_pending(&mut self, now: Instant) {
        self.pending = Some(PendingIndicator { since: now });
        self.scroll_to_bottom = true;
    }

    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    /// Advance typing reveals. Returns true if any text advanced (the view
    /// should re-scroll and repaint).
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut advanced = false;
        for entry in &mut self.entries {
            if let Some(reveal) = &mut entry.reveal {
                if reveal.tick(now) > 0 {
                    advanced = true;
                }
                if reveal.is_done() {
                    entry.reveal = None;
                }
            }
        }
        if advanced {
            self.scroll_to_bottom = true;
        }
        advanced
    }

    /// Whether any message is still typing in.
    pub fn is_animating(&self) -> bool {
        self.pending.is_some() || self.entries.iter().any(|e| e.reveal.is_some())
    }
}
