use async_trait::async_trait;
use beacon_core::{PeerId, SignalMessage};

/// Seam between the router and the transport. The router decides *who*
/// receives a signal; the implementor decides *how* it gets there
/// (WebSocket in production, a capture buffer in tests).
#[async_trait]
pub trait SignalingOutput: Send + Sync {
    /// Deliver a signal to a single peer. Fire-and-forget: delivery to a
    /// peer that vanished in the meantime is logged, not retried.
    async fn forward_signal(&self, peer_id: PeerId, signal: SignalMessage);
}
