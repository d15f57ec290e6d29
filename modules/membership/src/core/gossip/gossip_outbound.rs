//! Outbound gossip message addressed to a peer.

use alloc::string::String;

use super::GossipMessage;

/// Message destined for a specific peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GossipOutbound {
  /// Target gossip address (`ip:port`).
  pub target:  String,
  /// Message to send.
  pub message: GossipMessage,
}

impl GossipOutbound {
  /// Creates a new outbound gossip message.
  #[must_use]
  pub const fn new(target: String, message: GossipMessage) -> Self {
    Self { target, message }
  }
}
