//! Result of handling one gossip message.

use super::{GossipExchangeKind, GossipMessage};

/// What handling a message did and what to send back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GossipExchangeOutcome {
  /// Reconciliation path taken.
  pub kind:    GossipExchangeKind,
  /// Message to return to the sender, if any.
  pub reply:   Option<GossipMessage>,
  /// Whether the local membership changed.
  pub changed: bool,
}

impl GossipExchangeOutcome {
  /// Creates a new outcome.
  #[must_use]
  pub const fn new(kind: GossipExchangeKind, reply: Option<GossipMessage>, changed: bool) -> Self {
    Self { kind, reply, changed }
  }
}
