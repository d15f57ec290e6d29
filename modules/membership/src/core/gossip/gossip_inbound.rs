//! Inbound gossip message received from a peer.

use alloc::string::String;

use super::GossipMessage;

/// Message received from a peer, with the address replies go to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GossipInbound {
  /// Sender gossip address (`ip:port`).
  pub from:    String,
  /// Received message.
  pub message: GossipMessage,
}

impl GossipInbound {
  /// Creates a new inbound gossip message.
  #[must_use]
  pub const fn new(from: String, message: GossipMessage) -> Self {
    Self { from, message }
  }
}
