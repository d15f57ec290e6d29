//! Observer notified about membership changes.

use super::Endpoint;

/// Receives the full member list whenever membership changes.
///
/// Called synchronously by the mutating operation, so implementations must not block.
pub trait MembershipWatcher: Send {
  /// Called with every live member, in id order.
  fn on_membership_changed(&mut self, endpoints: &[Endpoint]);
}
