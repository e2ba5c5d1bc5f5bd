//! Channel protocol between the UI and the responder backend, plus the
//! JSON wire types for the responder endpoint.

use serde::{Deserialize, Serialize};

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// Send the user's message to the responder endpoint
    SendChat { message: String },
    /// Stop the backend loop
    Shutdown,
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum WidgetEvent {
    /// The responder answered; emitted after the reveal delay
    ReplyReceived { reply: String },
    /// The request failed (transport, status, or body); emitted immediately.
    /// The error string is diagnostic only and never shown to the user.
    RequestFailed { error: String },
}

/// Request body for `POST /chat`
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Success response body from the responder
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}
