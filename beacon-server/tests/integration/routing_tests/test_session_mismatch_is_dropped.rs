use beacon_core::{PeerId, PeerRole, SessionId, SignalMessage};
use beacon_server::RelayCommand;

use crate::integration::{create_test_router, init_tracing};
use crate::utils::{SIGNAL_TIMEOUT_MS, offer_for, recv_forwarded};

#[tokio::test]
async fn test_session_mismatch_is_dropped() {
    init_tracing();

    let (cmd_tx, mut signal_rx, output) = create_test_router();

    let control = PeerId::new();
    let stream = PeerId::new();

    cmd_tx
        .send(RelayCommand::Identify {
            peer_id: control.clone(),
            role: PeerRole::Control,
            session: Some(SessionId::from("flight-1")),
        })
        .await
        .unwrap();
    cmd_tx
        .send(RelayCommand::Identify {
            peer_id: stream.clone(),
            role: PeerRole::Stream,
            session: Some(SessionId::from("flight-1")),
        })
        .await
        .unwrap();

    // Addressed to a session the sender is not in: dropped.
    cmd_tx
        .send(RelayCommand::Signal {
            peer_id: stream.clone(),
            signal: offer_for("v=0 wrong-session", "flight-2"),
        })
        .await
        .unwrap();

    // Explicitly naming the sender's own session is fine.
    cmd_tx
        .send(RelayCommand::Signal {
            peer_id: stream.clone(),
            signal: offer_for("v=0 right-session", "flight-1"),
        })
        .await
        .unwrap();

    let fwd = recv_forwarded(&mut signal_rx, SIGNAL_TIMEOUT_MS)
        .await
        .expect("Matching-session offer should be forwarded");

    assert_eq!(fwd.peer_id, control);
    match fwd.signal {
        SignalMessage::Offer { sdp, .. } => assert_eq!(sdp, "v=0 right-session"),
        other => panic!("Expected offer, got {:?}", other),
    }

    assert_eq!(output.total().await, 1);
}
