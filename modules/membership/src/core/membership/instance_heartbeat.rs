//! Heartbeat handle bound to one instance.

use alloc::sync::Arc;

use super::Instance;

/// Lets the owning process bump its own instance without going through the chain.
#[derive(Debug, Clone)]
pub struct InstanceHeartbeat {
  instance: Arc<Instance>,
}

impl InstanceHeartbeat {
  pub(crate) const fn new(instance: Arc<Instance>) -> Self {
    Self { instance }
  }

  /// Id of the bound instance.
  #[must_use]
  pub fn id(&self) -> &str {
    self.instance.id()
  }

  /// Counter after the latest beat.
  #[must_use]
  pub fn counter(&self) -> i32 {
    self.instance.counter()
  }

  /// Bumps the bound instance's counter and witness.
  pub fn beat(&self, now_ms: u64) {
    self.instance.bump(now_ms);
  }
}
