pub mod model;

pub use model::{
    ClientMessage, IdentifyRequest, PeerId, PeerRole, ServerMessage, SessionId, SignalMessage,
};
