//! Transport abstraction for gossip messages.

use alloc::vec::Vec;

use super::{GossipInbound, GossipOutbound, GossipTransportError};

/// Carries gossip messages between peers.
///
/// Delivery is best effort: a message may be lost, duplicated or reordered.
pub trait GossipTransport {
  /// Sends one message to its target.
  ///
  /// # Errors
  ///
  /// Returns an error when the message cannot be encoded or handed to the network.
  fn send(&mut self, outbound: GossipOutbound) -> Result<(), GossipTransportError>;

  /// Drains messages received since the last call.
  fn poll_inbound(&mut self) -> Vec<GossipInbound>;
}
