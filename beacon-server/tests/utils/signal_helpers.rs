use anyhow::{Context, Result};
use beacon_core::{SessionId, SignalMessage};
use tokio::sync::mpsc;

use super::mock_signaling::ForwardedSignal;

/// Timeout for signal forwarding assertions (ms).
pub const SIGNAL_TIMEOUT_MS: u64 = 2000;

/// Window in which no signal is expected to arrive (ms).
pub const SILENCE_WINDOW_MS: u64 = 300;

pub fn offer(sdp: &str) -> SignalMessage {
    SignalMessage::Offer {
        sdp: sdp.to_string(),
        session: None,
    }
}

pub fn offer_for(sdp: &str, session: &str) -> SignalMessage {
    SignalMessage::Offer {
        sdp: sdp.to_string(),
        session: Some(SessionId::from(session)),
    }
}

pub fn answer(sdp: &str) -> SignalMessage {
    SignalMessage::Answer {
        sdp: sdp.to_string(),
        session: None,
    }
}

pub fn ice(candidate: &str) -> SignalMessage {
    SignalMessage::IceCandidate {
        candidate: candidate.to_string(),
        sdp_mid: Some("0".to_string()),
        sdp_m_line_index: Some(0),
        session: None,
    }
}

/// Wait for the next forwarded signal from the mock output.
pub async fn recv_forwarded(
    rx: &mut mpsc::UnboundedReceiver<ForwardedSignal>,
    timeout_ms: u64,
) -> Result<ForwardedSignal> {
    tokio::time::timeout(std::time::Duration::from_millis(timeout_ms), rx.recv())
        .await
        .context("Timeout waiting for forwarded signal")?
        .context("Signal channel closed")
}
