//! Inert WebSocket endpoint.
//!
//! Connections are accepted and logged; inbound frames are read and dropped.
//! No events are pushed to clients.

use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    response::Response,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

pub async fn ws_handler(ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(handle_socket)
}

async fn handle_socket(mut socket: WebSocket) {
    let connection_id = Uuid::new_v4();
    info!(%connection_id, "WebSocket connected");

    while let Some(frame) = socket.recv().await {
        match frame {
            Ok(Message::Close(_)) => break,
            Ok(_) => debug!(%connection_id, "Ignoring WebSocket frame"),
            Err(e) => {
                warn!(%connection_id, error = %e, "WebSocket receive failed");
                break;
            }
        }
    }

    info!(%connection_id, "WebSocket disconnected");
}
