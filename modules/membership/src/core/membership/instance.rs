//! A single cluster member with mutable health.

#[cfg(test)]
mod tests;

use alloc::{format, string::String};
use core::{
  cmp::Ordering,
  hash::{Hash, Hasher},
};

use portable_atomic::{AtomicI32, AtomicU64, Ordering as AtomicOrdering};

use super::Endpoint;
use crate::core::{MILLISECONDS_FOR_DELETION_CANDIDATE, MILLISECONDS_FOR_RECOMMEND_DELETION_CANDIDATE};

/// One cluster member.
///
/// Identity fields never change. The heartbeat `counter` and the `witness` time are updated in
/// place, so every snapshot holding this instance (through an `Arc`) sees the latest health.
/// Equality, ordering and hashing use the id only.
#[derive(Debug)]
pub struct Instance {
  id:              String,
  ip:              String,
  port:            u16,
  monitoring_port: u16,
  role:            String,
  created:         i64,
  local:           bool,
  counter:         AtomicI32,
  witness:         AtomicU64,
}

impl Instance {
  /// Creates an instance from an endpoint seen at `now_ms`.
  #[must_use]
  pub fn new(endpoint: &Endpoint, now_ms: u64, local: bool) -> Self {
    Self {
      id: endpoint.id.clone(),
      ip: endpoint.ip.clone(),
      port: endpoint.port,
      monitoring_port: endpoint.monitoring_port,
      role: endpoint.role.clone(),
      created: endpoint.created,
      local,
      counter: AtomicI32::new(endpoint.counter),
      witness: AtomicU64::new(now_ms),
    }
  }

  /// Unique member identifier.
  #[must_use]
  pub fn id(&self) -> &str {
    &self.id
  }

  /// Address the member listens on.
  #[must_use]
  pub fn ip(&self) -> &str {
    &self.ip
  }

  /// Gossip port.
  #[must_use]
  pub const fn port(&self) -> u16 {
    self.port
  }

  /// Monitoring port.
  #[must_use]
  pub const fn monitoring_port(&self) -> u16 {
    self.monitoring_port
  }

  /// Role tag.
  #[must_use]
  pub fn role(&self) -> &str {
    &self.role
  }

  /// Creation timestamp assigned by the member.
  #[must_use]
  pub const fn created(&self) -> i64 {
    self.created
  }

  /// Returns true when this instance is the process's own identity.
  #[must_use]
  pub const fn is_local(&self) -> bool {
    self.local
  }

  /// Current heartbeat counter.
  #[must_use]
  pub fn counter(&self) -> i32 {
    self.counter.load(AtomicOrdering::Acquire)
  }

  /// Last time this member's health was known to be fresh.
  #[must_use]
  pub fn witness(&self) -> u64 {
    self.witness.load(AtomicOrdering::Acquire)
  }

  /// Returns the `ip:port` gossip target.
  #[must_use]
  pub fn address(&self) -> String {
    format!("{}:{}", self.ip, self.port)
  }

  /// Advances the own heartbeat by one.
  pub fn bump(&self, now_ms: u64) {
    self.counter.fetch_add(1, AtomicOrdering::AcqRel);
    self.witness.store(now_ms, AtomicOrdering::Release);
  }

  /// Adopts a peer-reported counter when it is strictly newer.
  ///
  /// Ties and regressions change nothing, the witness time included. Returns whether the
  /// counter advanced.
  #[must_use]
  pub fn absorb(&self, counter: i32, now_ms: u64) -> bool {
    if counter <= self.counter() {
      return false;
    }
    self.counter.store(counter, AtomicOrdering::Release);
    self.witness.store(now_ms, AtomicOrdering::Release);
    true
  }

  /// Returns true when peers may be told this member is gone.
  #[must_use]
  pub fn can_delete(&self, now_ms: u64) -> bool {
    now_ms.saturating_sub(self.witness()) > MILLISECONDS_FOR_DELETION_CANDIDATE
  }

  /// Returns true when the local scan must evict this member.
  #[must_use]
  pub fn too_old_must_delete(&self, now_ms: u64) -> bool {
    now_ms.saturating_sub(self.witness()) > MILLISECONDS_FOR_RECOMMEND_DELETION_CANDIDATE
  }

  /// Orders by ip and then role, for display only.
  #[must_use]
  pub fn humanize_compare(&self, other: &Self) -> Ordering {
    self.ip.cmp(&other.ip).then_with(|| self.role.cmp(&other.role))
  }

  /// Returns the wire record for this member.
  #[must_use]
  pub fn to_endpoint(&self) -> Endpoint {
    Endpoint::new(
      self.id.clone(),
      self.ip.clone(),
      self.port,
      self.monitoring_port,
      self.role.clone(),
      self.created,
      self.counter(),
    )
  }
}

impl PartialEq for Instance {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
  }
}

impl Eq for Instance {}

impl PartialOrd for Instance {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Instance {
  fn cmp(&self, other: &Self) -> Ordering {
    self.id.cmp(&other.id)
  }
}

impl Hash for Instance {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.id.hash(state);
  }
}
