use beacon_core::{PeerId, PeerRole, SessionId};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("peer {0} is already identified")]
    AlreadyIdentified(PeerId),
}

/// What the registry knows about an identified peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerEntry {
    pub role: PeerRole,
    pub session: SessionId,
}

/// Tracks identified peers by role and session.
///
/// Owned exclusively by the router task, so every update is atomic with
/// respect to signal dispatch. A connected-but-unidentified peer has no
/// entry here; it only exists in the signaling service's socket map.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    peers: HashMap<PeerId, PeerEntry>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a peer under a role and session. First identify wins:
    /// a duplicate call leaves the existing entry untouched.
    pub fn identify(
        &mut self,
        peer_id: PeerId,
        role: PeerRole,
        session: SessionId,
    ) -> Result<(), RegistryError> {
        if self.peers.contains_key(&peer_id) {
            return Err(RegistryError::AlreadyIdentified(peer_id));
        }
        self.peers.insert(peer_id, PeerEntry { role, session });
        Ok(())
    }

    /// Remove a peer. Idempotent; returns whether it was present.
    pub fn remove(&mut self, peer_id: &PeerId) -> bool {
        self.peers.remove(peer_id).is_some()
    }

    pub fn get(&self, peer_id: &PeerId) -> Option<&PeerEntry> {
        self.peers.get(peer_id)
    }

    /// Peers in `session` on the opposite side of `role`.
    pub fn counterparts(&self, session: &SessionId, role: PeerRole) -> Vec<PeerId> {
        let counterpart = role.counterpart();
        self.peers
            .iter()
            .filter(|(_, entry)| entry.role == counterpart && &entry.session == session)
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn peers_in_session(&self, session: &SessionId) -> Vec<PeerId> {
        self.peers
            .iter()
            .filter(|(_, entry)| &entry.session == session)
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn peers_with_role(&self, role: PeerRole) -> Vec<PeerId> {
        self.peers
            .iter()
            .filter(|(_, entry)| entry.role == role)
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }
}
