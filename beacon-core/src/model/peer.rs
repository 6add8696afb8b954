use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Server-assigned connection id, created when the socket is upgraded.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq)]
pub struct PeerId(pub Uuid);

impl PeerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PeerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What side of the video link a peer is on.
///
/// A `stream` peer produces media offers (the camera host); a `control` peer
/// observes and answers them. Signals always flow to the counterpart role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum PeerRole {
    Control,
    // The first-generation camera host identified as "drone".
    #[serde(alias = "drone")]
    Stream,
}

impl PeerRole {
    pub fn counterpart(self) -> PeerRole {
        match self {
            PeerRole::Control => PeerRole::Stream,
            PeerRole::Stream => PeerRole::Control,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PeerRole::Control => "control",
            PeerRole::Stream => "stream",
        }
    }
}

impl fmt::Display for PeerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
