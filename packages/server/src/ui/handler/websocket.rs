//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use tokio::sync::mpsc;

use crate::{
    domain::{Connection, ConnectionId},
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that drains the outbound queue into the WebSocket sender.
///
/// The task ends when the socket write fails or every queue sender is gone.
/// Ending drops `rx`, which marks the connection closed for the registry.
fn pusher_loop(
    mut rx: mpsc::Receiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    let (tx, rx) = mpsc::channel(state.outbound_buffer);
    let connection_id = ConnectionId::generate();

    // Register and queue the history snapshot before the writer starts
    match state
        .join_usecase
        .execute(Connection::new(connection_id, tx))
        .await
    {
        Ok(history_len) => {
            tracing::info!(
                "New user joined: connection '{}' ({} message(s) of history)",
                connection_id,
                history_len
            );
        }
        Err(e) => {
            tracing::error!("Failed to admit connection '{}': {}", connection_id, e);
            return;
        }
    }

    let mut send_task = pusher_loop(rx, sender);

    let submit_message_usecase = state.submit_message_usecase.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
            };

            let raw = match msg {
                Message::Text(text) => text.as_str().as_bytes().to_vec(),
                Message::Binary(data) => data.to_vec(),
                Message::Ping(_) | Message::Pong(_) => {
                    // Ping/pong is handled automatically by the WebSocket protocol
                    continue;
                }
                Message::Close(_) => {
                    tracing::debug!("Connection '{}' requested close", connection_id);
                    break;
                }
            };

            match submit_message_usecase.execute(&connection_id, &raw).await {
                Ok(submitted) => {
                    tracing::info!(
                        "Broadcast message '{}' from '{}' to {} connection(s)",
                        submitted.message.id,
                        submitted.message.user.as_str(),
                        submitted.recipients
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        "Dropping submission from connection '{}': {}",
                        connection_id,
                        e
                    );
                }
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    state.leave_usecase.execute(&connection_id).await;
    tracing::info!("User left: connection '{}'", connection_id);
}
