//! Closure adapter for [`MembershipWatcher`].

use super::{Endpoint, MembershipWatcher};

/// Wraps a closure so it can be registered as a watcher.
pub struct FnMembershipWatcher<F> {
  callback: F,
}

impl<F> FnMembershipWatcher<F>
where
  F: FnMut(&[Endpoint]) + Send,
{
  /// Creates a watcher that forwards every notification to `callback`.
  #[must_use]
  pub const fn new(callback: F) -> Self {
    Self { callback }
  }
}

impl<F> MembershipWatcher for FnMembershipWatcher<F>
where
  F: FnMut(&[Endpoint]) + Send,
{
  fn on_membership_changed(&mut self, endpoints: &[Endpoint]) {
    (self.callback)(endpoints);
  }
}
