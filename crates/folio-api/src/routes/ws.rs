//! WebSocket endpoint for the live status channel.

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::channel::spawn_ticker;
use crate::state::AppState;
use folio_protocol::ChannelMessage;

/// GET on any path of the channel port: upgrade to WebSocket.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: AppState) {
    let id = Uuid::now_v7();
    let (tx, mut rx) = mpsc::channel::<ChannelMessage>(16);
    state
        .connections
        .register(id, spawn_ticker(state.update_interval, tx))
        .await;
    tracing::info!(connection_id = %id, "WebSocket client connected");

    loop {
        tokio::select! {
            // Periodic status updates from this connection's ticker.
            Some(update) = rx.recv() => {
                if !send(&mut socket, &update).await {
                    break;
                }
            }
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        tracing::debug!(connection_id = %id, len = text.len(), "channel message received");
                        if !send(&mut socket, &ChannelMessage::echo(text.as_str())).await {
                            break;
                        }
                    }
                    Some(Ok(Message::Binary(data))) => {
                        let text = String::from_utf8_lossy(&data).into_owned();
                        if !send(&mut socket, &ChannelMessage::echo(text)).await {
                            break;
                        }
                    }
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Pong(_))) => {}
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        tracing::debug!(connection_id = %id, "WebSocket receive error: {e}");
                        break;
                    }
                }
            }
        }
    }

    state.connections.release(id).await;
    tracing::info!(connection_id = %id, "WebSocket client disconnected");
}

/// Serialize and send one message. Returns false once the client is gone.
async fn send(socket: &mut WebSocket, msg: &ChannelMessage) -> bool {
    let json = match serde_json::to_string(msg) {
        Ok(j) => j,
        Err(e) => {
            tracing::error!("failed to serialize channel message: {e}");
            return true;
        }
    };
    socket.send(Message::Text(json.into())).await.is_ok()
}
