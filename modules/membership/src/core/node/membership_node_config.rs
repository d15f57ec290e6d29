//! Configuration for a membership node.

use alloc::{string::String, vec::Vec};
use core::time::Duration;

use crate::core::{MILLISECONDS_FOR_HEARTBEAT, gossip::EngineRole, membership::Endpoint};

/// Identity, role and timer settings of a [`MembershipNode`](super::MembershipNode).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MembershipNodeConfig {
  /// The process's own endpoint, ingested as local.
  pub local:                Endpoint,
  /// Gossip cadence.
  pub role:                 EngineRole,
  /// Static gossip addresses (`ip:port`) used for bootstrap.
  pub seeds:                Vec<String>,
  /// Interval between own heartbeat bumps.
  pub heartbeat_interval:   Duration,
  /// Interval between scan and garbage collection passes.
  pub maintenance_interval: Duration,
}

impl MembershipNodeConfig {
  /// Creates a configuration for an ordinary node without seeds.
  #[must_use]
  pub const fn new(local: Endpoint) -> Self {
    Self {
      local,
      role: EngineRole::Node,
      seeds: Vec::new(),
      heartbeat_interval: Duration::from_millis(MILLISECONDS_FOR_HEARTBEAT),
      maintenance_interval: Duration::from_millis(MILLISECONDS_FOR_HEARTBEAT),
    }
  }

  /// Sets the engine role.
  #[must_use]
  pub const fn with_role(mut self, role: EngineRole) -> Self {
    self.role = role;
    self
  }

  /// Sets the seed addresses.
  #[must_use]
  pub fn with_seeds<I>(mut self, seeds: I) -> Self
  where
    I: IntoIterator,
    I::Item: Into<String>, {
    self.seeds = seeds.into_iter().map(Into::into).collect();
    self
  }

  /// Sets the heartbeat interval.
  #[must_use]
  pub const fn with_heartbeat_interval(mut self, interval: Duration) -> Self {
    self.heartbeat_interval = interval;
    self
  }

  /// Sets the maintenance interval.
  #[must_use]
  pub const fn with_maintenance_interval(mut self, interval: Duration) -> Self {
    self.maintenance_interval = interval;
    self
  }
}
