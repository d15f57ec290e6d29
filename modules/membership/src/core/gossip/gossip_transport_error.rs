//! Gossip transport errors.


use alloc::string::String;
use core::fmt;

/// Errors reported by a [`GossipTransport`](super::GossipTransport).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GossipTransportError {
  /// Target is not a valid `ip:port` address.
  InvalidTarget(String),
  /// Message could not be encoded.
  Encode(String),
  /// Encoded message exceeds the datagram limit.
  Oversized {
    /// Encoded size.
    size:  usize,
    /// Configured limit.
    limit: usize,
  },
  /// The send itself failed.
  SendFailed(String),
  /// The socket could not be bound.
  BindFailed(String),
}

impl fmt::Display for GossipTransportError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | GossipTransportError::InvalidTarget(target) => write!(f, "invalid gossip target: {target}"),
      | GossipTransportError::Encode(message) => write!(f, "gossip encode failed: {message}"),
      | GossipTransportError::Oversized { size, limit } => {
        write!(f, "gossip message of {size} bytes exceeds the {limit} byte limit")
      },
      | GossipTransportError::SendFailed(message) => write!(f, "gossip send failed: {message}"),
      | GossipTransportError::BindFailed(message) => write!(f, "gossip bind failed: {message}"),
    }
  }
}
