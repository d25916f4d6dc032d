//! WebSocket protocol: the client-facing envelope and its dispatch loop.
//!
//! Inbound frames are JSON envelopes `{"type": ..., "message": ...}`.
//! Per-request failures are always answered with a message envelope;
//! nothing a client sends can take the station down.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use super::state::AppState;

/// Fixed reply when an inbound frame cannot be parsed.
const PARSE_APOLOGY: &str = "Server failed to get your response. D:";
/// Fixed reply for unrecognized commands.
const UNKNOWN_COMMAND: &str = "Server received an unknown command.";

/// Inbound client envelope.
#[derive(Debug, Deserialize)]
struct ClientEnvelope {
    /// Operation kind: `ping`, `query`, or anything else (unknown).
    #[serde(rename = "type")]
    kind: String,
    /// Free-text payload; only meaningful for `query`.
    #[serde(default)]
    message: String,
}

/// Upgrade an HTTP request to the station's WebSocket protocol.
pub async fn ws_upgrade(
    State(state): State<Arc<AppState>>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    while let Some(received) = socket.recv().await {
        let message = match received {
            Ok(message) => message,
            Err(err) => {
                debug!("websocket receive error: {err}");
                break;
            }
        };

        match message {
            Message::Text(text) => {
                let reply = handle_frame(&state, text.as_str()).await;
                if socket.send(Message::Text(reply.into())).await.is_err() {
                    break;
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }
}

/// Dispatch one inbound frame and produce the serialized reply.
async fn handle_frame(state: &AppState, raw: &str) -> String {
    debug!("received: {raw}");

    let envelope: ClientEnvelope = match serde_json::from_str(raw) {
        Ok(envelope) => envelope,
        Err(err) => {
            warn!("unparseable client frame: {err}");
            return message_envelope(PARSE_APOLOGY);
        }
    };

    match envelope.kind.as_str() {
        "ping" => message_envelope("pong"),
        "query" => handle_query(state, &envelope.message).await,
        _ => message_envelope(UNKNOWN_COMMAND),
    }
}

/// Run one suggestion cycle and augment the reply for the client.
async fn handle_query(state: &AppState, utterance: &str) -> String {
    let mut value = match state.engine.suggest(utterance).await {
        Ok(value) => value,
        Err(err) => {
            warn!("suggestion failed: {err}");
            return message_envelope(&format!("The station hit a snag: {err}"));
        }
    };

    let id = Uuid::new_v4();
    let spoken = value
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let has_voice = if spoken.is_empty() {
        false
    } else {
        state.announcer.speak(&spoken, id).await
    };

    if let Value::Object(map) = &mut value {
        map.insert("id".to_string(), Value::String(id.to_string()));
        map.insert("has_voice".to_string(), Value::Bool(has_voice));
        map.insert("type".to_string(), Value::String("message".to_string()));
    }

    value.to_string()
}

fn message_envelope(message: &str) -> String {
    serde_json::json!({ "type": "message", "message": message }).to_string()
}
