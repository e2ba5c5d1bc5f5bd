//! Word-by-word reveal of bot replies.
//!
//! A `TypingReveal` holds the full text split into whitespace-delimited
//! tokens and exposes `tick(now)`: token `i` becomes visible once
//! `i * interval` has elapsed since the reveal started. The UI drives ticks
//! from its repaint loop; tests drive them with a synthetic clock.

use std::time::{Duration, Instant};

/// Delay between revealed tokens.
pub const DEFAULT_TYPE_INTERVAL: Duration = Duration::from_millis(50);

/// Incremental reveal state for one message.
///
/// Tokens are re-joined with single spaces, so irregular spacing in the
/// source text collapses (intentional normalization).
#[derive(Debug, Clone)]
pub struct TypingReveal {
    tokens: Vec<String>,
    revealed: usize,
    next_at: Instant,
    interval: Duration,
}

impl TypingReveal {
    pub fn new(text: &str, now: Instant, interval: Duration) -> Self {
        Self {
            tokens: text.split_whitespace().map(str::to_string).collect(),
            revealed: 0,
            next_at: now,
            interval,
        }
    }

    /// Reveal every token whose due time has passed. Returns the number of
    /// tokens revealed by this call.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut steps = 0;
        while self.revealed < self.tokens.len() && now >= self.next_at {
            self.revealed += 1;
            self.next_at += self.interval;
            steps += 1;
        }
        steps
    }

    pub fn is_done(&self) -> bool {
        self.revealed == self.tokens.len()
    }

    /// The currently visible portion of the text.
    pub fn visible(&self) -> String {
        self.tokens[..self.revealed].join(" ")
    }

    /// The text as it will read once fully revealed.
    pub fn full(&self) -> String {
        self.tokens.join(" ")
    }
}
