//! Send throttling: a fixed cooldown between accepted messages with an
//! at-most-one-warning-per-violation-streak policy.

use std::time::{Duration, Instant};

/// Minimum time between accepted submissions.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(3000);

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub accepted: bool,
    /// True only on the first rejection since the last accepted send.
    pub should_warn: bool,
}

/// Tracks the instant of the last accepted message and rejects sends that
/// arrive within the cooldown window.
#[derive(Debug)]
pub struct RateLimiter {
    cooldown: Duration,
    last_accepted_at: Option<Instant>,
    warned_since_last_accept: bool,
}

impl RateLimiter {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_accepted_at: None,
            warned_since_last_accept: false,
        }
    }

    /// Check whether a submission at `now` is allowed.
    ///
    /// Accepting a message records `now` and re-arms the warning; a rejected
    /// message warns only once per violation streak.
    pub fn try_accept(&mut self, now: Instant) -> Verdict {
        if let Some(last) = self.last_accepted_at {
            if now.duration_since(last) < self.cooldown {
                let should_warn = !self.warned_since_last_accept;
                self.warned_since_last_accept = true;
                return Verdict {
                    accepted: false,
                    should_warn,
                };
            }
        }
        self.last_accepted_at = Some(now);
        self.warned_since_last_accept = false;
        Verdict {
            accepted: true,
            should_warn: false,
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}
