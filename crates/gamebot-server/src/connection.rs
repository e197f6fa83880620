//! Per-connection handler: one WebSocket, one GameBot session.

use std::net::SocketAddr;
use std::sync::Arc;

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use gamebot_ai::{ChatError, Session};
use gamebot_common::new_correlation_id;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{accept_async, WebSocketStream};
use tracing::{debug, info, warn};

use crate::protocol::{ClientFrame, FrameError, ServerFrame};
use crate::registry::RegistryError;
use crate::state::ServerState;

type WsSink = SplitSink<WebSocketStream<TcpStream>, Message>;
type WsStream = SplitStream<WebSocketStream<TcpStream>>;

/// Accept connections until the listener fails permanently.
pub async fn serve(listener: TcpListener, state: Arc<ServerState>) {
    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let state = Arc::clone(&state);
                tokio::spawn(async move {
                    match accept_async(stream).await {
                        Ok(ws) => handle_connection(ws, addr, state).await,
                        Err(e) => {
                            warn!(peer = %addr, error = %e, "WS handshake failed");
                        }
                    }
                });
            }
            Err(e) => {
                warn!(error = %e, "TCP accept error");
            }
        }
    }
}

/// Handle a single WebSocket connection.
pub async fn handle_connection(
    ws: WebSocketStream<TcpStream>,
    addr: SocketAddr,
    state: Arc<ServerState>,
) {
    let (mut sink, mut stream) = ws.split();

    // 1. Build the session and claim a registry slot.
    let mut session = match state.new_session() {
        Ok(session) => session,
        Err(e) => {
            warn!(peer = %addr, error = %e, "Failed to create session");
            let _ = send_frame(&mut sink, &ServerFrame::error(e.kind(), e.kind().user_message())).await;
            return;
        }
    };

    if let Err(e) = state.registry.register(session.session_id(), addr).await {
        warn!(peer = %addr, error = %e, "Session rejected");
        let message = match e {
            RegistryError::Full(_) => "GameBot is busy with other players. Please try again later.",
            RegistryError::Duplicate(_) => "Could not start a session. Please reconnect.",
        };
        let _ = send_frame(&mut sink, &ServerFrame::error(FrameError::Capacity, message)).await;
        return;
    }

    info!(peer = %addr, session = %session.session_id(), "Session started");

    // 2. Greet without touching the network.
    let welcome = ServerFrame::Welcome {
        session_id: session.session_id().to_string(),
        text: session.welcome_message().to_string(),
        games: state.games().to_vec(),
    };

    if send_frame(&mut sink, &welcome).await {
        run_session(&mut session, &mut sink, &mut stream, addr, &state).await;
    }

    // 3. Cleanup.
    info!(
        peer = %addr,
        session = %session.session_id(),
        turns = session.history().len(),
        tokens = session.usage().total_tokens(),
        "Session ended"
    );
    state.registry.unregister(session.session_id()).await;
}

/// Frame loop. Returns when the client goes away.
async fn run_session(
    session: &mut Session,
    sink: &mut WsSink,
    stream: &mut WsStream,
    addr: SocketAddr,
    state: &ServerState,
) {
    while let Some(frame) = stream.next().await {
        let text = match frame {
            Ok(Message::Text(text)) => text,
            Ok(Message::Ping(data)) => {
                let _ = sink.send(Message::Pong(data)).await;
                continue;
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => continue,
            Err(e) => {
                debug!(peer = %addr, error = %e, "WS error");
                break;
            }
        };

        let reply = match serde_json::from_str::<ClientFrame>(&text) {
            Ok(ClientFrame::Chat { text }) => {
                match chat(session, &text, sink, stream).await {
                    Some(frame) => frame,
                    None => {
                        debug!(peer = %addr, "Client left during a pending reply");
                        break;
                    }
                }
            }
            Ok(ClientFrame::Reset) => {
                let previous = session.session_id().clone();
                session.reset();
                state.registry.rotate(&previous, session.session_id()).await;
                info!(previous = %previous, session = %session.session_id(), "Session reset");
                ServerFrame::ResetDone {
                    session_id: session.session_id().to_string(),
                    text: session.welcome_message().to_string(),
                }
            }
            Ok(ClientFrame::History) => ServerFrame::History {
                turns: session.history().to_vec(),
            },
            Err(e) => {
                debug!(peer = %addr, error = %e, "Invalid client frame");
                ServerFrame::error(FrameError::BadFrame, "Unrecognized message.")
            }
        };

        if !send_frame(sink, &reply).await {
            break;
        }
    }
}

/// Run one exchange while still servicing the socket.
///
/// Frames that arrive meanwhile are answered with a busy error. Returns
/// `None` if the client disconnects; the pending model call is dropped and
/// no assistant turn is recorded.
async fn chat(
    session: &mut Session,
    text: &str,
    sink: &mut WsSink,
    stream: &mut WsStream,
) -> Option<ServerFrame> {
    if text.trim().is_empty() {
        let err = ChatError::Validation("message is empty".into());
        return Some(ServerFrame::error(err.kind(), err.user_message()));
    }

    if !send_frame(sink, &ServerFrame::Thinking).await {
        return None;
    }

    let request_id = new_correlation_id();
    debug!(session = %session.session_id(), request = %request_id, "Chat exchange started");

    let result = {
        let exchange = session.handle_user_message(text);
        tokio::pin!(exchange);
        loop {
            tokio::select! {
                result = &mut exchange => break result,
                frame = stream.next() => match frame {
                    Some(Ok(Message::Text(_))) => {
                        if !send_frame(sink, &ServerFrame::busy()).await {
                            return None;
                        }
                    }
                    Some(Ok(Message::Ping(data))) => {
                        let _ = sink.send(Message::Pong(data)).await;
                    }
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => return None,
                    Some(Ok(_)) => {}
                },
            }
        }
    };

    Some(match result {
        Ok(response) => {
            debug!(
                request = %request_id,
                input_tokens = response.usage.input_tokens,
                output_tokens = response.usage.output_tokens,
                "Chat exchange finished"
            );
            let sequence_number = session
                .history()
                .last()
                .map(|turn| turn.sequence_number())
                .unwrap_or_default();
            ServerFrame::Reply {
                text: response.text,
                sequence_number,
            }
        }
        Err(e) => {
            warn!(
                session = %session.session_id(),
                request = %request_id,
                kind = ?e.kind(),
                error = %e,
                "Chat exchange failed"
            );
            ServerFrame::error(e.kind(), e.user_message())
        }
    })
}

/// Send a frame as JSON text. Returns false once the client is gone.
async fn send_frame(sink: &mut WsSink, frame: &ServerFrame) -> bool {
    let json = match serde_json::to_string(frame) {
        Ok(json) => json,
        Err(e) => {
            warn!(error = %e, "Failed to encode frame");
            return true;
        }
    };
    sink.send(Message::Text(json.into())).await.is_ok()
}
