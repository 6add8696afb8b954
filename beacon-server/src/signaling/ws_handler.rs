use crate::router::RelayCommand;
use crate::signaling::SignalingService;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use beacon_core::{ClientMessage, PeerId, ServerMessage};
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(service): State<SignalingService>,
) -> impl IntoResponse {
    // Connection ids are server-assigned; clients learn theirs from the
    // welcome message.
    let peer_id = PeerId::new();

    ws.on_upgrade(move |socket| handle_socket(socket, peer_id, service))
}

async fn handle_socket(socket: WebSocket, peer_id: PeerId, service: SignalingService) {
    info!("New WebSocket connection: {}", peer_id);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    service.add_peer(peer_id.clone(), tx);
    service.send_message(
        &peer_id,
        ServerMessage::Welcome {
            peer_id: peer_id.clone(),
        },
    );

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let service = service.clone();
        let peer_id = peer_id.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                        Ok(ClientMessage::Identify(req)) => {
                            let cmd = RelayCommand::Identify {
                                peer_id: peer_id.clone(),
                                role: req.role(),
                                session: req.session().cloned(),
                            };
                            if let Err(e) = service.relay_cmd_tx.send(cmd).await {
                                error!("Router died: {}", e);
                                break;
                            }
                        }
                        Ok(ClientMessage::WebrtcSignal(signal)) => {
                            let cmd = RelayCommand::Signal {
                                peer_id: peer_id.clone(),
                                signal,
                            };
                            let _ = service.relay_cmd_tx.send(cmd).await;
                        }
                        // Malformed payloads are logged and discarded; the
                        // connection stays up.
                        Err(e) => warn!("Invalid ClientMessage from {}: {:?}", peer_id, e),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    // Cleanup must run no matter which half of the socket died first.
    let _ = service
        .relay_cmd_tx
        .send(RelayCommand::Disconnect {
            peer_id: peer_id.clone(),
        })
        .await;
    service.remove_peer(&peer_id);
    info!("WebSocket disconnected: {}", peer_id);
}
