//! Gossip cadence per node role.


use core::time::Duration;

use rand::Rng;

/// Role of a process in the gossip topology.
///
/// Super nodes are well-connected rendezvous points and gossip roughly four times as often as
/// ordinary nodes, with a narrower jitter spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineRole {
  /// Rendezvous node: basis 15 ms, 4 jitter rounds.
  SuperNode,
  /// Ordinary node: basis 50 ms, 5 jitter rounds.
  Node,
}

impl EngineRole {
  /// Minimum wait between two gossip rounds, in milliseconds.
  #[must_use]
  pub const fn wait_basis_ms(self) -> u64 {
    match self {
      | Self::SuperNode => 15,
      | Self::Node => 50,
    }
  }

  /// Number of uniform jitter terms added to the basis.
  #[must_use]
  pub const fn wait_rounds(self) -> u32 {
    match self {
      | Self::SuperNode => 4,
      | Self::Node => 5,
    }
  }

  /// Draws the wait before the next gossip round, in milliseconds.
  ///
  /// The result is `basis + Σ uniform(0, basis)` over [`wait_rounds`](Self::wait_rounds) draws, so
  /// it lies in `basis..=basis * (rounds + 1)`.
  pub fn compute_wait_ms<R: Rng + ?Sized>(self, rng: &mut R) -> u64 {
    let basis = self.wait_basis_ms();
    (0..self.wait_rounds()).fold(basis, |total, _| total + rng.gen_range(0..=basis))
  }

  /// Same as [`compute_wait_ms`](Self::compute_wait_ms), as a [`Duration`].
  pub fn compute_wait<R: Rng + ?Sized>(self, rng: &mut R) -> Duration {
    Duration::from_millis(self.compute_wait_ms(rng))
  }
}
