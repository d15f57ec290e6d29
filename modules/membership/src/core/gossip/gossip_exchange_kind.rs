//! Classification of handled gossip messages.

/// Which reconciliation path a handled message took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GossipExchangeKind {
  /// Hashes matched; only counters moved.
  Quick,
  /// The initiator's snapshot was found in history; only the missing members moved.
  Delta,
  /// Unknown snapshot; the whole membership moved.
  Full,
  /// The initiator pushed its membership back after a delta or full reply.
  Reverse,
}
