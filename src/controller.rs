//! Conversation controller: widget open/close, the submission flow, and
//! backend event handling.
//!
//! The controller owns all conversation state and exposes plain methods the
//! egui layer binds to. Time-sensitive operations take `now` so tests can
//! drive a virtual clock.

use std::time::{Duration, Instant};

use chrono::Local;
use crossbeam_channel::Sender as ActionSender;

use crate::export;
use crate::protocol::{BackendAction, WidgetEvent};
use crate::ratelimit::RateLimiter;
use crate::state::WidgetState;
use crate::transcript::{clock_label, Sender, Transcript};
use crate::validation::sanitize_outgoing;

/// Greeting rendered on the first open. Inserted immediately, not animated;
/// every other bot message types in.
pub const GREETING_TEXT: &str = "Welcome!\nHow can I help you?";

/// One-shot warning typed in when the rate limiter rejects a send.
pub const SPAM_WARNING_TEXT: &str =
    "You're sending messages too quickly. Please wait a moment.";

/// Generic apology typed in when the responder call fails.
pub const APOLOGY_TEXT: &str = "Sorry, something went wrong. Please try again later.";

/// What a submission attempt did, so the input layer knows whether to clear
/// the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Empty after trimming: no action at all, input left untouched.
    Ignored,
    /// Rejected by the rate limiter; the attempted text is discarded.
    Rejected { warned: bool },
    /// Accepted and dispatched to the responder.
    Sent,
}

pub struct ChatController {
    pub state: WidgetState,
    pub transcript: Transcript,
    limiter: RateLimiter,
    typing_interval: Duration,
    action_tx: ActionSender<BackendAction>,
}

impl ChatController {
    pub fn new(
        action_tx: ActionSender<BackendAction>,
        cooldown: Duration,
        typing_interval: Duration,
    ) -> Self {
        Self {
            state: WidgetState::new(),
            transcript: Transcript::new(),
            limiter: RateLimiter::new(cooldown),
            typing_interval,
            action_tx,
        }
    }

    /// Bubble clicked: reveal the panel. The very first open records the
    /// start time, inserts the start marker, and renders the greeting.
    pub fn open(&mut self, now: Instant) {
        self.state.is_open = true;
        self.state.closing_since = None;

        if !self.state.has_greeted {
            self.state.has_greeted = true;
            let label = clock_label(Local::now());
            self.transcript.set_start_marker(&label);
            self.state.chat_started_at = Some(label);
            self.transcript.push(GREETING_TEXT, Sender::Bot, now);
        }
    }

    /// Close clicked: start the exit fade. The panel hides after the
    /// transition; submissions during the fade are processed normally.
    pub fn request_close(&mut self, now: Instant) {
        self.state.begin_close(now);
    }

    /// Handle a submission (send button or Enter).
    pub fn submit(&mut self, raw: &str, now: Instant) -> Submission {
        let message = sanitize_outgoing(raw);
        if message.is_empty() {
            return Submission::Ignored;
        }

        let verdict = self.limiter.try_accept(now);
        if !verdict.accepted {
            if verdict.should_warn {
                self.transcript
                    .push_typing(SPAM_WARNING_TEXT, Sender::Bot, now, self.typing_interval);
            }
            return Submission::Rejected {
                warned: verdict.should_warn,
            };
        }

        self.transcript.push(&message, Sender::User, now);
        self.transcript.set_pending(now);
        let _ = self.action_tx.send(BackendAction::SendChat { message });
        Submission::Sent
    }

    /// Apply one event from the backend.
    pub fn handle_event(&mut self, event: WidgetEvent, now: Instant) {
        match event {
            WidgetEvent::ReplyReceived { reply } => {
                self.transcript.clear_pending();
                self.transcript
                    .push_typing(&reply, Sender::Bot, now, self.typing_interval);
            }
            WidgetEvent::RequestFailed { error } => {
                log::warn!("Responder request failed: {}", error);
                self.transcript.clear_pending();
                self.transcript
                    .push_typing(APOLOGY_TEXT, Sender::Bot, now, self.typing_interval);
            }
        }
    }

    /// Advance timers: close transition, typing reveals, toast expiry.
    /// Returns true while anything is still animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.state.finish_close_if_due(now);
        self.transcript.tick(now);
        self.state.purge_old_status_messages(4);
        self.transcript.is_animating() || self.state.closing_since.is_some()
    }

    /// Export the transcript and surface the outcome as a toast.
    pub fn save_transcript(&mut self, now: Instant) {
        match export::save_transcript(&self.transcript) {
            Ok(path) => {
                self.state
                    .push_toast(format!("Transcript saved to {}", path.display()), now);
            }
            Err(e) => {
                log::warn!("Transcript export failed: {}", e);
                self.state.push_toast("Could not save transcript", now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    fn controller() -> (ChatController, crossbeam_channel::Receiver<BackendAction>) {
        let (tx, rx) = unbounded();
        let controller = ChatController::new(
            tx,
            Duration::from_millis(3000),
            Duration::from_millis(50),
        );
        (controller, rx)
    }

    #[test]
    fn test_first_open_greets_exactly_once() {
        let t0 = Instant::now();
        let (mut c, _rx) = controller();

        c.open(t0);
        assert!(c.state.is_open);
        assert!(c.state.has_greeted);
        assert!(c.transcript.start_marker.is_some());
        assert_eq!(c.transcript.entries().len(), 1);
        assert_eq!(c.transcript.entries()[0].sender, Sender::Bot);
        // Greeting is inserted immediately, not typed
        assert_eq!(c.transcript.entries()[0].visible_text(), GREETING_TEXT);

        // Re-opening later must not greet again
        c.request_close(t0);
        c.tick(t0 + Duration::from_millis(400));
        c.open(t0 + Duration::from_secs(1));
        assert_eq!(c.transcript.entries().len(), 1);
    }

    #[test]
    fn test_accepted_submission_renders_and_dispatches_once() {
        let t0 = Instant::now();
        let (mut c, rx) = controller();
        c.open(t0);

        let outcome = c.submit("  Hello  ", t0);
        assert_eq!(outcome, Submission::Sent);

        // Greeting + user message; trimmed text; pending indicator attached
        assert_eq!(c.transcript.entries().len(), 2);
        assert_eq!(c.transcript.entries()[1].visible_text(), "Hello");
        assert_eq!(c.transcript.entries()[1].sender, Sender::User);
        assert!(c.transcript.pending().is_some());

        match rx.try_recv() {
            Ok(BackendAction::SendChat { message }) => assert_eq!(message, "Hello"),
            other => panic!("expected SendChat, got {:?}", other),
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_empty_submission_is_a_complete_no_op() {
        let t0 = Instant::now();
        let (mut c, rx) = controller();
        c.open(t0);

        assert_eq!(c.submit("   ", t0), Submission::Ignored);
        assert_eq!(c.transcript.entries().len(), 1); // greeting only
        assert!(c.transcript.pending().is_none());
        assert!(rx.try_recv().is_err());

        // And it must not arm the rate limiter
        assert_eq!(c.submit("Hello", t0), Submission::Sent);
    }

    #[test]
    fn test_rapid_resend_warns_once_and_never_dispatches() {
        let t0 = Instant::now();
        let (mut c, rx) = controller();
        c.open(t0);

        assert_eq!(c.submit("Hello", t0), Submission::Sent);
        let _ = rx.try_recv();

        let outcome = c.submit("Hello", t0 + Duration::from_millis(1000));
        assert_eq!(outcome, Submission::Rejected { warned: true });
        assert!(rx.try_recv().is_err());

        // The warning types in as a bot message
        let warning = c.transcript.entries().last().unwrap();
        assert_eq!(warning.sender, Sender::Bot);
        assert_eq!(warning.full_text(), SPAM_WARNING_TEXT);

        // A second violation in the same streak stays silent
        let entries_before = c.transcript.entries().len();
        let outcome = c.submit("Hello", t0 + Duration::from_millis(2000));
        assert_eq!(outcome, Submission::Rejected { warned: false });
        assert_eq!(c.transcript.entries().len(), entries_before);
    }

    #[test]
    fn test_reply_replaces_pending_indicator_and_types_in() {
        let t0 = Instant::now();
        let (mut c, _rx) = controller();
        c.open(t0);
        c.submit("Hello", t0);
        assert!(c.transcript.pending().is_some());

        let t1 = t0 + Duration::from_millis(500);
        c.handle_event(
            WidgetEvent::ReplyReceived {
                reply: "Hi there".into(),
            },
            t1,
        );
        assert!(c.transcript.pending().is_none());

        let reply = c.transcript.entries().last().unwrap();
        assert_eq!(reply.sender, Sender::Bot);
        assert_eq!(reply.visible_text(), ""); // not yet ticked

        c.tick(t1 + Duration::from_millis(50));
        assert_eq!(c.transcript.entries().last().unwrap().visible_text(), "Hi there");
    }

    #[test]
    fn test_failure_removes_indicator_and_renders_apology() {
        let t0 = Instant::now();
        let (mut c, _rx) = controller();
        c.open(t0);
        c.submit("Hello", t0);

        c.handle_event(
            WidgetEvent::RequestFailed {
                error: "connection refused".into(),
            },
            t0 + Duration::from_millis(100),
        );
        assert!(c.transcript.pending().is_none());
        assert_eq!(
            c.transcript.entries().last().unwrap().full_text(),
            APOLOGY_TEXT
        );
    }

    #[test]
    fn test_submission_during_close_fade_is_processed() {
        let t0 = Instant::now();
        let (mut c, rx) = controller();
        c.open(t0);
        c.request_close(t0);
        assert!(c.state.panel_visible());

        assert_eq!(c.submit("Still here", t0 + Duration::from_millis(100)), Submission::Sent);
        assert!(matches!(
            rx.try_recv(),
            Ok(BackendAction::SendChat { .. })
        ));
    }

    #[test]
    fn test_tick_reports_animation_activity() {
        let t0 = Instant::now();
        let (mut c, _rx) = controller();
        c.open(t0);
        c.submit("Hello", t0);

        // Pending indicator keeps the widget animating
        assert!(c.tick(t0 + Duration::from_millis(10)));

        c.handle_event(
            WidgetEvent::ReplyReceived {
                reply: "Hi".into(),
            },
            t0 + Duration::from_millis(500),
        );
        // Reply fully typed after one tick past its single token
        assert!(c.tick(t0 + Duration::from_millis(500)) || !c.transcript.is_animating());
        assert!(!c.tick(t0 + Duration::from_secs(2)));
    }
}
