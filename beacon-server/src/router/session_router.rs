use crate::registry::ConnectionRegistry;
use crate::router::relay_command::RelayCommand;
use crate::signaling::SignalingOutput;
use beacon_core::{PeerId, SessionId, SignalMessage};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The relay's event loop. Owns the registry and consumes commands from the
/// WebSocket layer one at a time, so connect/identify/disconnect updates are
/// atomic with respect to signal dispatch.
pub struct SessionRouter {
    registry: ConnectionRegistry,
    command_rx: mpsc::Receiver<RelayCommand>,
    signaling: Arc<dyn SignalingOutput>,
    default_session: SessionId,
}

impl SessionRouter {
    pub fn new(
        command_rx: mpsc::Receiver<RelayCommand>,
        signaling: Arc<dyn SignalingOutput>,
        default_session: SessionId,
    ) -> Self {
        Self {
            registry: ConnectionRegistry::new(),
            command_rx,
            signaling,
            default_session,
        }
    }

    pub async fn run(mut self) {
        info!("Signal router started");

        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd).await;
        }

        info!("Command channel closed. Shutting down router.");
    }

    async fn handle_command(&mut self, cmd: RelayCommand) {
        match cmd {
            RelayCommand::Identify {
                peer_id,
                role,
                session,
            } => {
                let session = session.unwrap_or_else(|| self.default_session.clone());
                match self.registry.identify(peer_id.clone(), role, session.clone()) {
                    Ok(()) => {
                        info!(
                            "Peer {} identified as '{}' in session '{}'",
                            peer_id, role, session
                        );
                    }
                    // First identify wins; the repeat is logged and ignored.
                    Err(e) => warn!("Ignoring identify from {}: {}", peer_id, e),
                }
            }

            RelayCommand::Signal { peer_id, signal } => {
                self.route_signal(peer_id, signal).await;
            }

            RelayCommand::Disconnect { peer_id } => {
                if self.registry.remove(&peer_id) {
                    info!(
                        "Peer {} removed from registry ({} left)",
                        peer_id,
                        self.registry.len()
                    );
                }
            }
        }
    }

    /// Forward a signal to every counterpart peer in the sender's session.
    /// Unroutable signals are dropped with a diagnostic log, never queued.
    async fn route_signal(&mut self, sender: PeerId, signal: SignalMessage) {
        let Some(entry) = self.registry.get(&sender) else {
            warn!(
                "Dropping {} from unidentified peer {}",
                signal.kind(),
                sender
            );
            return;
        };

        if let Some(target) = signal.session() {
            if target != &entry.session {
                warn!(
                    "Dropping {} from {}: addressed to session '{}' but sender is in '{}'",
                    signal.kind(),
                    sender,
                    target,
                    entry.session
                );
                return;
            }
        }

        let targets = self.registry.counterparts(&entry.session, entry.role);
        if targets.is_empty() {
            debug!(
                "No {} counterpart in session '{}', dropping {} from {}",
                entry.role.counterpart(),
                entry.session,
                signal.kind(),
                sender
            );
            return;
        }

        for target in targets {
            self.signaling.forward_signal(target, signal.clone()).await;
        }
    }
}
