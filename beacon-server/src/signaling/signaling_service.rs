use crate::router::RelayCommand;
use crate::signaling::SignalingOutput;
use async_trait::async_trait;
use axum::extract::ws::Message;
use beacon_core::{PeerId, ServerMessage, SignalMessage};
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, warn};

struct SignalingInner {
    peers: DashMap<PeerId, mpsc::UnboundedSender<Message>>,
}

/// Holds the outbound half of every connected socket and the command
/// channel into the router. Cheap to clone.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<SignalingInner>,
    pub(crate) relay_cmd_tx: mpsc::Sender<RelayCommand>,
}

impl SignalingService {
    pub fn new(relay_cmd_tx: mpsc::Sender<RelayCommand>) -> Self {
        Self {
            inner: Arc::new(SignalingInner {
                peers: DashMap::new(),
            }),
            relay_cmd_tx,
        }
    }

    pub fn add_peer(&self, peer_id: PeerId, tx: mpsc::UnboundedSender<Message>) {
        self.inner.peers.insert(peer_id, tx);
    }

    pub fn remove_peer(&self, peer_id: &PeerId) {
        self.inner.peers.remove(peer_id);
    }

    pub fn send_message(&self, peer_id: &PeerId, msg: ServerMessage) {
        if let Some(peer) = self.inner.peers.get(peer_id) {
            match serde_json::to_string(&msg) {
                Ok(json) => {
                    if let Err(e) = peer.send(Message::Text(json.into())) {
                        error!("Failed to send WS message to {}: {:?}", peer_id, e);
                    }
                }
                Err(e) => error!("Failed to serialize server message: {}", e),
            }
        } else {
            warn!("Attempted to send message to disconnected peer {}", peer_id);
        }
    }
}

#[async_trait]
impl SignalingOutput for SignalingService {
    async fn forward_signal(&self, peer_id: PeerId, signal: SignalMessage) {
        self.send_message(&peer_id, ServerMessage::WebrtcSignal(signal));
    }
}
