//! Wall-clock time source.

extern crate std;

use std::time::Instant;

use crate::core::node::MembershipClock;

/// Milliseconds elapsed since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemMembershipClock {
  origin: Instant,
}

impl SystemMembershipClock {
  /// Creates a clock reading zero now.
  #[must_use]
  pub fn new() -> Self {
    Self { origin: Instant::now() }
  }
}

impl Default for SystemMembershipClock {
  fn default() -> Self {
    Self::new()
  }
}

impl MembershipClock for SystemMembershipClock {
  fn now_ms(&self) -> u64 {
    u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
  }
}
