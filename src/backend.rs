//! Responder backend.
//!
//! Architecture (mirrors the app split):
//! - Main thread: runs the egui UI
//! - Backend thread: runs a Tokio runtime for the HTTP responder calls
//! - Communication via crossbeam channels (lock-free, sync-safe)
//!
//! One request is serviced at a time, in arrival order. A successful reply
//! is held back for a short reveal delay before it reaches the UI; failures
//! are reported immediately.

use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use thiserror::Error;
use tokio::runtime::Runtime;

use crate::protocol::{BackendAction, ChatReply, ChatRequest, WidgetEvent};

/// Pause between a successful response and the reply event, so the pending
/// indicator reads as the bot "thinking".
pub const REPLY_REVEAL_DELAY: Duration = Duration::from_millis(500);

/// Per-request timeout; a slow responder counts as a failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything that can go wrong talking to the responder. Diagnostic only;
/// the user always sees the same apology.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("responder returned status {0}")]
    Status(reqwest::StatusCode),
}

/// POST the message to the responder and extract the reply text.
pub async fn send_chat(
    client: &reqwest::Client,
    endpoint: &str,
    message: &str,
) -> Result<String, BackendError> {
    let response = client
        .post(endpoint)
        .json(&ChatRequest {
            message: message.to_string(),
        })
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::Status(status));
    }

    let reply: ChatReply = response.json().await?;
    Ok(reply.reply)
}

/// Backend loop. Runs on its own thread with an owned Tokio runtime;
/// returns when the action channel closes or `Shutdown` arrives.
pub fn run_backend(
    action_rx: Receiver<BackendAction>,
    event_tx: Sender<WidgetEvent>,
    endpoint: String,
) {
    // Create a Tokio runtime for this thread
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Failed to build HTTP client");

    while let Ok(action) = action_rx.recv() {
        match action {
            BackendAction::SendChat { message } => {
                rt.block_on(async {
                    match send_chat(&client, &endpoint, &message).await {
                        Ok(reply) => {
                            tokio::time::sleep(REPLY_REVEAL_DELAY).await;
                            let _ = event_tx.send(WidgetEvent::ReplyReceived { reply });
                        }
                        Err(e) => {
                            log::warn!("Responder call failed: {}", e);
                            let _ = event_tx.send(WidgetEvent::RequestFailed {
                                error: e.to_string(),
                            });
                        }
                    }
                });
            }
            BackendAction::Shutdown => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_send_chat_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(body_json(json!({"message": "Hello"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reply": "Hi there"})))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let endpoint = format!("{}/chat", server.uri());
        let reply = send_chat(&client, &endpoint, "Hello").await.unwrap();
        assert_eq!(reply, "Hi there");
    }

    #[tokio::test]
    async fn test_send_chat_non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let endpoint = format!("{}/chat", server.uri());
        let err = send_chat(&client, &endpoint, "Hello").await.unwrap_err();
        assert!(matches!(err, BackendError::Status(s) if s.as_u16() == 500));
    }

    #[tokio::test]
    async fn test_send_chat_malformed_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "Hi"})))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let endpoint = format!("{}/chat", server.uri());
        assert!(send_chat(&client, &endpoint, "Hello").await.is_err());
    }

    #[test]
    fn test_run_backend_success_flow_with_reveal_delay() {
        // The backend owns its runtime; the test only needs one to host the
        // mock server.
        let rt = Runtime::new().unwrap();
        let server = rt.block_on(MockServer::start());
        rt.block_on(
            Mock::given(method("POST"))
                .and(path("/chat"))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(json!({"reply": "Hi there"})),
                )
                .mount(&server),
        );

        let (action_tx, action_rx) = unbounded();
        let (event_tx, event_rx) = unbounded();
        let endpoint = format!("{}/chat", server.uri());
        let handle = std::thread::spawn(move || run_backend(action_rx, event_tx, endpoint));

        let started = std::time::Instant::now();
        action_tx
            .send(BackendAction::SendChat {
                message: "Hello".into(),
            })
            .unwrap();

        let event = event_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        match event {
            WidgetEvent::ReplyReceived { reply } => assert_eq!(reply, "Hi there"),
            other => panic!("expected ReplyReceived, got {:?}", other),
        }
        assert!(started.elapsed() >= REPLY_REVEAL_DELAY);

        action_tx.send(BackendAction::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_run_backend_reports_failure_immediately() {
        let (action_tx, action_rx) = unbounded();
        let (event_tx, event_rx) = unbounded();
        // Nothing listens on this port; the request fails at the transport
        let handle = std::thread::spawn(move || {
            run_backend(action_rx, event_tx, "http://127.0.0.1:9/chat".into())
        });

        action_tx
            .send(BackendAction::SendChat {
                message: "Hello".into(),
            })
            .unwrap();

        let event = event_rx.recv_timeout(Duration::from_secs(15)).unwrap();
        assert!(matches!(event, WidgetEvent::RequestFailed { .. }));

        action_tx.send(BackendAction::Shutdown).unwrap();
        handle.join().unwrap();
    }
}
