//! Per-node gossip counters.

use super::GossipExchangeKind;

/// Counts of exchanges by path, plus rounds started and transport failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GossipStats {
  /// Rounds this node opened.
  pub rounds:        u64,
  /// Rounds skipped because no partner was available.
  pub idle_rounds:   u64,
  /// Quick exchanges handled.
  pub quick:         u64,
  /// Delta exchanges handled.
  pub delta:         u64,
  /// Full exchanges handled.
  pub full:          u64,
  /// Reverse pushes handled.
  pub reverse:       u64,
  /// Outbound messages the transport rejected.
  pub send_failures: u64,
}

impl GossipStats {
  /// Records one handled exchange.
  pub const fn record(&mut self, kind: GossipExchangeKind) {
    match kind {
      | GossipExchangeKind::Quick => self.quick += 1,
      | GossipExchangeKind::Delta => self.delta += 1,
      | GossipExchangeKind::Full => self.full += 1,
      | GossipExchangeKind::Reverse => self.reverse += 1,
    }
  }

  /// Sum of handled exchanges over every path.
  #[must_use]
  pub const fn exchanges(&self) -> u64 {
    self.quick + self.delta + self.full + self.reverse
  }
}
