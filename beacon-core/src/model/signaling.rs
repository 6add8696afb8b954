use crate::model::peer::{PeerId, PeerRole};
use crate::model::session::SessionId;
use serde::{Deserialize, Serialize};

/// A WebRTC signaling payload relayed between peers. The server never
/// interprets the SDP or candidate contents, it only routes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SignalMessage {
    Offer {
        sdp: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        session: Option<SessionId>,
    },
    Answer {
        sdp: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        session: Option<SessionId>,
    },
    IceCandidate {
        candidate: String,
        sdp_mid: Option<String>,
        sdp_m_line_index: Option<u16>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        session: Option<SessionId>,
    },
}

impl SignalMessage {
    /// The session the sender addressed, if it named one explicitly.
    pub fn session(&self) -> Option<&SessionId> {
        match self {
            SignalMessage::Offer { session, .. }
            | SignalMessage::Answer { session, .. }
            | SignalMessage::IceCandidate { session, .. } => session.as_ref(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SignalMessage::Offer { .. } => "offer",
            SignalMessage::Answer { .. } => "answer",
            SignalMessage::IceCandidate { .. } => "ice-candidate",
        }
    }
}

/// Identify payload. The original control client sends a bare role string,
/// newer clients send an object with an explicit session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdentifyRequest {
    Role(PeerRole),
    Scoped {
        role: PeerRole,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        session: Option<SessionId>,
    },
}

impl IdentifyRequest {
    pub fn role(&self) -> PeerRole {
        match self {
            IdentifyRequest::Role(role) => *role,
            IdentifyRequest::Scoped { role, .. } => *role,
        }
    }

    pub fn session(&self) -> Option<&SessionId> {
        match self {
            IdentifyRequest::Role(_) => None,
            IdentifyRequest::Scoped { session, .. } => session.as_ref(),
        }
    }
}

/// Everything a client may send over the socket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientMessage {
    Identify(IdentifyRequest),
    WebrtcSignal(SignalMessage),
}

/// Everything the server may send back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerMessage {
    Welcome { peer_id: PeerId },
    WebrtcSignal(SignalMessage),
}
