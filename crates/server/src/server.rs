// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! WebSocket server implementation.
//!
//! Handles client connections and routes each request message to the
//! issue service, replying on the same connection.

use std::net::SocketAddr;

use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, error, info, warn};

use issuebox_core::protocol::{ClientMessage, ServerMessage};
use issuebox_core::{Error, Result};

use crate::state::ServerState;

/// Run the WebSocket server on the given address.
pub async fn run(addr: SocketAddr, state: ServerState) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on: {}", addr);

    loop {
        let (stream, peer_addr) = listener.accept().await?;
        let state = state.clone();

        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, peer_addr, state).await {
                error!("Connection error from {}: {}", peer_addr, e);
            }
        });
    }
}

/// Handle a single WebSocket connection.
pub(crate) async fn handle_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: ServerState,
) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let ws_stream = tokio_tungstenite::accept_async(stream).await?;
    info!("New WebSocket connection from: {}", peer_addr);

    let (mut ws_sink, mut ws_stream) = ws_stream.split();

    while let Some(msg) = ws_stream.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                let response = handle_client_message(text.as_str(), &state).await;
                let json = response.to_json()?;
                ws_sink.send(Message::Text(json.into())).await?;
            }
            Ok(Message::Close(_)) => {
                info!("Client {} disconnected", peer_addr);
                break;
            }
            Ok(Message::Ping(data)) => {
                ws_sink.send(Message::Pong(data)).await?;
            }
            Ok(Message::Binary(_)) => {
                warn!("Ignoring binary frame from {}", peer_addr);
            }
            Ok(_) => {
                // Ignore other message types (Pong, Frame)
            }
            Err(e) => {
                error!("WebSocket error from {}: {}", peer_addr, e);
                break;
            }
        }
    }

    info!("Connection closed: {}", peer_addr);
    Ok(())
}

/// Process a client message and return the response to send back.
pub(crate) async fn handle_client_message(text: &str, state: &ServerState) -> ServerMessage {
    let msg = match ClientMessage::from_json(text) {
        Ok(msg) => msg,
        Err(e) => {
            debug!("Rejected malformed message: {}", e);
            return ServerMessage::from(&Error::from(e));
        }
    };
    debug!("Received message: {:?}", msg);

    match dispatch(msg, state).await {
        Ok(response) => response,
        Err(e) => {
            debug!("Request failed ({}): {}", e.kind(), e);
            ServerMessage::from(&e)
        }
    }
}

async fn dispatch(msg: ClientMessage, state: &ServerState) -> Result<ServerMessage> {
    match msg {
        ClientMessage::ListIssues(spec) => {
            let result = state.list(&spec).await?;
            Ok(ServerMessage::issue_page(result))
        }

        ClientMessage::GetIssue { id } => {
            let issue = state.get(&id).await?;
            Ok(ServerMessage::issue(issue))
        }

        ClientMessage::CreateIssue(draft) => {
            let issue = state.create(draft).await?;
            info!("Created issue {}", issue.id);
            Ok(ServerMessage::issue(issue))
        }

        ClientMessage::UpdateIssue { id, patch } => {
            let issue = state.update(&id, patch).await?;
            info!("Updated issue {}", issue.id);
            Ok(ServerMessage::issue(issue))
        }

        ClientMessage::Health => Ok(ServerMessage::health_ok()),

        ClientMessage::Ping { id } => {
            debug!("Ping received: {}", id);
            Ok(ServerMessage::pong(id))
        }
    }
}
