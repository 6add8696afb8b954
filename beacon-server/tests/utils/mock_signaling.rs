use async_trait::async_trait;
use beacon_core::{PeerId, SignalMessage};
use beacon_server::SignalingOutput;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

/// A signal the router handed to the output, with its destination.
#[derive(Debug, Clone)]
pub struct ForwardedSignal {
    pub peer_id: PeerId,
    pub signal: SignalMessage,
}

/// Mock SignalingOutput that captures all forwarded signals.
#[derive(Clone)]
pub struct MockSignalingOutput {
    /// Channel to send captured signals.
    tx: mpsc::UnboundedSender<ForwardedSignal>,
    /// All captured signals (for verification).
    signals: Arc<Mutex<Vec<ForwardedSignal>>>,
}

impl MockSignalingOutput {
    /// Create a new MockSignalingOutput and its receiver channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ForwardedSignal>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let output = Self {
            tx,
            signals: Arc::new(Mutex::new(Vec::new())),
        };
        (output, rx)
    }

    /// All signals forwarded to a specific peer.
    pub async fn signals_for(&self, peer_id: &PeerId) -> Vec<SignalMessage> {
        self.signals
            .lock()
            .await
            .iter()
            .filter(|f| &f.peer_id == peer_id)
            .map(|f| f.signal.clone())
            .collect()
    }

    /// Total number of forwarded signals, to any peer.
    pub async fn total(&self) -> usize {
        self.signals.lock().await.len()
    }
}

#[async_trait]
impl SignalingOutput for MockSignalingOutput {
    async fn forward_signal(&self, peer_id: PeerId, signal: SignalMessage) {
        tracing::debug!("[MockSignaling] forward_signal to {}", peer_id);

        let fwd = ForwardedSignal { peer_id, signal };

        self.signals.lock().await.push(fwd.clone());
        let _ = self.tx.send(fwd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_captures_forwarded_signal() {
        let (output, mut rx) = MockSignalingOutput::new();
        let peer_id = PeerId::new();

        output
            .forward_signal(
                peer_id.clone(),
                SignalMessage::Offer {
                    sdp: "test-sdp".to_string(),
                    session: None,
                },
            )
            .await;

        let fwd = rx.recv().await.unwrap();
        assert_eq!(fwd.peer_id, peer_id);

        let captured = output.signals_for(&peer_id).await;
        assert_eq!(captured.len(), 1);
        assert!(matches!(captured[0], SignalMessage::Offer { .. }));
    }
}
