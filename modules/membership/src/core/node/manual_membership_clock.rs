//! Manually advanced clock.


use portable_atomic::{AtomicU64, Ordering};

use super::MembershipClock;

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualMembershipClock {
  now_ms: AtomicU64,
}

impl ManualMembershipClock {
  /// Creates a clock reading `start_ms`.
  #[must_use]
  pub const fn new(start_ms: u64) -> Self {
    Self { now_ms: AtomicU64::new(start_ms) }
  }

  /// Moves the clock forward.
  pub fn advance(&self, delta_ms: u64) {
    self.now_ms.fetch_add(delta_ms, Ordering::AcqRel);
  }

  /// Sets the reading.
  pub fn set(&self, now_ms: u64) {
    self.now_ms.store(now_ms, Ordering::Release);
  }
}

impl MembershipClock for ManualMembershipClock {
  fn now_ms(&self) -> u64 {
    self.now_ms.load(Ordering::Acquire)
  }
}
