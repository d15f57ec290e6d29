//! Configuration for Tokio gossip transport.

use alloc::string::String;

/// Configuration for Tokio gossip transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokioGossipTransportConfig {
  /// UDP bind address (e.g. "127.0.0.1:0").
  pub bind_addr:          String,
  /// Maximum datagram size in bytes, for both directions.
  pub max_datagram_bytes: usize,
  /// Received messages kept until the next poll; the oldest is dropped beyond this.
  pub inbound_capacity:   usize,
}

impl TokioGossipTransportConfig {
  /// Creates a new configuration.
  #[must_use]
  pub const fn new(bind_addr: String, max_datagram_bytes: usize, inbound_capacity: usize) -> Self {
    Self { bind_addr, max_datagram_bytes, inbound_capacity }
  }
}
