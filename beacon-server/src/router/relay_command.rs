use beacon_core::{PeerId, PeerRole, SessionId, SignalMessage};

/// Commands entering the router from the WebSocket layer.
#[derive(Debug)]
pub enum RelayCommand {
    /// A connected peer declared its role. Session is `None` when the client
    /// identified with a bare role string; the router fills in the default.
    Identify {
        peer_id: PeerId,
        role: PeerRole,
        session: Option<SessionId>,
    },

    /// A signaling payload to forward to the sender's counterpart peers.
    Signal {
        peer_id: PeerId,
        signal: SignalMessage,
    },

    /// The peer's socket closed.
    Disconnect { peer_id: PeerId },
}
