//! Time source for the node driver.

/// Supplies the current time in milliseconds.
///
/// Only differences between readings matter; the epoch is up to the implementation.
pub trait MembershipClock: Send + Sync {
  /// Current time in milliseconds.
  fn now_ms(&self) -> u64;
}
