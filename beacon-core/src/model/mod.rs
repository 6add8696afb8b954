mod peer;
mod session;
mod signaling;

pub use peer::{PeerId, PeerRole};
pub use session::SessionId;
pub use signaling::{ClientMessage, IdentifyRequest, ServerMessage, SignalMessage};
