//! WebSocket upgrade and subscription protocol.
//!
//! Clients authenticate with `GET /ws?token={jwt}`, then send JSON
//! commands to manage their subscriptions:
//!
//! ```json
//! { "action": "subscribe", "topic": "requests" }
//! { "action": "subscribe", "topic": "notifications" }
//! { "action": "subscribe", "topic": "request:{id}" }
//! { "action": "unsubscribe", "topic": "requests" }
//! ```
//!
//! Events arrive as serialized event envelopes. The `notifications`
//! topic is always the authenticated user's own stream.

use std::collections::HashMap;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use neighborly_realtime::Topic;
use neighborly_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameter for WebSocket authentication.
#[derive(Debug, Deserialize)]
pub struct WsQuery {
    /// JWT access token.
    pub token: String,
}

/// Commands a client may send over the socket.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum ClientCommand {
    Subscribe { topic: String },
    Unsubscribe { topic: String },
}

/// GET /ws?token={jwt} — WebSocket upgrade.
pub async fn ws_upgrade(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
    Query(query): Query<WsQuery>,
) -> Result<Response, ApiError> {
    // Authenticate before upgrade.
    let claims = state.jwt_decoder.decode(&query.token)?;
    let ctx = RequestContext::new(claims.sub, claims.email, claims.user_type);
    Ok(ws.on_upgrade(move |socket| handle_connection(state, ctx, socket)))
}

/// Handles an established WebSocket connection.
async fn handle_connection(state: AppState, ctx: RequestContext, socket: WebSocket) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (out_tx, mut out_rx) = mpsc::channel::<String>(64);
    let max_subscriptions = state.config.realtime.max_subscriptions_per_connection;

    info!(user_id = %ctx.user_id, "WebSocket connection established");

    let outbound_task = tokio::spawn(async move {
        while let Some(text) = out_rx.recv().await {
            if ws_tx.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    // Channel name to forwarder task.
    let mut subscriptions: HashMap<String, JoinHandle<()>> = HashMap::new();

    while let Some(result) = ws_rx.next().await {
        match result {
            Ok(Message::Text(text)) => {
                let command: ClientCommand = match serde_json::from_str(text.as_str()) {
                    Ok(command) => command,
                    Err(_) => {
                        send_json(&out_tx, json!({ "type": "error", "message": "Unrecognized command" })).await;
                        continue;
                    }
                };
                match command {
                    ClientCommand::Subscribe { topic } => {
                        subscribe(&state, &ctx, &out_tx, &mut subscriptions, max_subscriptions, &topic).await;
                    }
                    ClientCommand::Unsubscribe { topic } => {
                        match resolve_topic(&ctx, &topic) {
                            Some(resolved) => {
                                if let Some(task) = subscriptions.remove(&resolved.channel_name()) {
                                    task.abort();
                                }
                                send_json(&out_tx, json!({ "type": "unsubscribed", "topic": topic })).await;
                            }
                            None => {
                                send_json(&out_tx, json!({ "type": "error", "message": format!("Unknown topic: {topic}") })).await;
                            }
                        }
                    }
                }
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                warn!(user_id = %ctx.user_id, error = %e, "WebSocket error");
                break;
            }
        }
    }

    for task in subscriptions.into_values() {
        task.abort();
    }
    outbound_task.abort();

    info!(user_id = %ctx.user_id, "WebSocket connection closed");
}

async fn subscribe(
    state: &AppState,
    ctx: &RequestContext,
    out_tx: &mpsc::Sender<String>,
    subscriptions: &mut HashMap<String, JoinHandle<()>>,
    max_subscriptions: usize,
    topic: &str,
) {
    let Some(resolved) = resolve_topic(ctx, topic) else {
        send_json(out_tx, json!({ "type": "error", "message": format!("Unknown topic: {topic}") })).await;
        return;
    };
    let channel = resolved.channel_name();
    if subscriptions.contains_key(&channel) {
        send_json(out_tx, json!({ "type": "subscribed", "topic": topic })).await;
        return;
    }
    if subscriptions.len() >= max_subscriptions {
        send_json(out_tx, json!({ "type": "error", "message": "Subscription limit reached" })).await;
        return;
    }

    let mut subscription = state.hub.subscribe(resolved).await;
    let forward_tx = out_tx.clone();
    let task = tokio::spawn(async move {
        while let Some(envelope) = subscription.recv().await {
            match serde_json::to_string(&envelope) {
                Ok(text) => {
                    if forward_tx.send(text).await.is_err() {
                        break;
                    }
                }
                Err(e) => warn!(error = %e, "Failed to serialize event envelope"),
            }
        }
    });
    subscriptions.insert(channel, task);
    send_json(out_tx, json!({ "type": "subscribed", "topic": topic })).await;
}

/// Map a client topic string to a hub topic for this user.
fn resolve_topic(ctx: &RequestContext, topic: &str) -> Option<Topic> {
    match topic {
        "requests" => Some(Topic::Requests),
        "notifications" => Some(Topic::UserNotifications(ctx.user_id)),
        other => {
            let id = other.strip_prefix("request:")?;
            id.parse().ok().map(Topic::RequestThread)
        }
    }
}

async fn send_json(out_tx: &mpsc::Sender<String>, value: serde_json::Value) {
    let _ = out_tx.send(value.to_string()).await;
}
