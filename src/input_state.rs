//! Input state management for message composition and history.
//!
//! This module separates input handling concerns from the main application
//! state. History is session-only and holds previously sent messages for
//! ArrowUp/ArrowDown recall.

/// Manages all input-related state for the chat widget.
#[derive(Default)]
pub struct InputState {
    /// Current message being composed
    pub message_input: String,

    /// Sent-message history (for up/down arrow navigation)
    pub history: Vec<String>,

    /// Current position in history (None = not navigating)
    pub history_pos: Option<usize>,

    /// Saved input when entering history mode
    pub history_saved_input: Option<String>,
}

impl InputState {
    /// Create a new InputState with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sent message and reset navigation.
    pub fn push_history(&mut self, message: &str) {
        self.history.push(message.to_string());
        self.history_pos = None;
        self.history_saved_input = None;
    }

    /// Navigate up in sent-message history.
    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }

        if self.history_pos.is_none() {
            // Store current text to restore if user navigates back
            self.history_saved_input = Some(self.message_input.clone());
            self.history_pos = Some(self.history.len() - 1);
        } else if let Some(pos) = self.history_pos {
            if pos > 0 {
                self.history_pos = Some(pos - 1);
            }
        }

        if let Some(pos) = self.history_pos {
            if let Some(h) = self.history.get(pos) {
                self.message_input = h.clone();
            }
        }
    }

    /// Navigate down in sent-message history.
    pub fn history_down(&mut self) {
        if let Some(pos) = self.history_pos {
            if pos + 1 < self.history.len() {
                self.history_pos = Some(pos + 1);
                if let Some(h) = self.history.get(pos + 1) {
                    self.message_input = h.clone();
                }
            } else {
                // Exit history navigation
                self.history_pos = None;
                self.message_input = self.history_saved_input.take().unwrap_or_default();
            }
        }
    }

    /// Clear the field and leave history mode (Escape).
    pub fn clear(&mut self) {
        self.message_input.clear();
        self.history_pos = None;
        self.history_saved_input = None;
    }
}
