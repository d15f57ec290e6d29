//! Configuration for Tokio gossiper.

use core::time::Duration;

/// Configuration for Tokio gossiper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokioGossiperConfig {
  /// Interval between polls of the membership node.
  pub tick_interval: Duration,
}

impl TokioGossiperConfig {
  /// Creates a new configuration.
  #[must_use]
  pub const fn new(tick_interval: Duration) -> Self {
    Self { tick_interval }
  }
}
