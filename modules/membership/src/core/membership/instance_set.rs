//! Immutable, fingerprinted membership snapshot.

#[cfg(test)]
mod tests;

use alloc::{
  collections::{BTreeMap, BTreeSet},
  string::String,
  sync::Arc,
  vec::Vec,
};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use md5::{Digest, Md5};

use super::{Endpoint, Instance};

/// Snapshot of the members known at one moment, sorted by id.
///
/// The fingerprint covers member ids only: heartbeat changes never alter it, and two snapshots
/// with the same ids share it no matter how they were built. Members are shared with the chain
/// that produced the snapshot, so their health keeps moving while the membership stays fixed.
#[derive(Debug)]
pub struct InstanceSet {
  instances: Vec<Arc<Instance>>,
  ids:       BTreeSet<String>,
  hash:      String,
}

impl InstanceSet {
  /// Creates the empty snapshot.
  #[must_use]
  pub fn empty() -> Self {
    Self::from_instances(core::iter::empty())
  }

  /// Builds a snapshot, sorting by id and dropping duplicate ids.
  #[must_use]
  pub fn from_instances<I>(instances: I) -> Self
  where
    I: IntoIterator<Item = Arc<Instance>>, {
    let by_id: BTreeMap<String, Arc<Instance>> =
      instances.into_iter().map(|instance| (String::from(instance.id()), instance)).collect();
    let ids: BTreeSet<String> = by_id.keys().cloned().collect();
    let hash = fingerprint(&ids);
    Self { instances: by_id.into_values().collect(), ids, hash }
  }

  /// Base64 fingerprint of the member ids.
  #[must_use]
  pub fn hash(&self) -> &str {
    &self.hash
  }

  /// Members in id order.
  #[must_use]
  pub fn instances(&self) -> &[Arc<Instance>] {
    &self.instances
  }

  /// Member ids.
  #[must_use]
  pub const fn ids(&self) -> &BTreeSet<String> {
    &self.ids
  }

  /// Returns true when `id` is a member of this snapshot.
  #[must_use]
  pub fn contains(&self, id: &str) -> bool {
    self.ids.contains(id)
  }

  /// Number of members.
  #[must_use]
  pub fn len(&self) -> usize {
    self.instances.len()
  }

  /// Returns true when the snapshot has no members.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.instances.is_empty()
  }

  /// Heartbeat counters in id order, parallel to [`to_endpoints`](Self::to_endpoints).
  #[must_use]
  pub fn counters(&self) -> Vec<i32> {
    self.instances.iter().map(|instance| instance.counter()).collect()
  }

  /// Wire records in id order.
  #[must_use]
  pub fn to_endpoints(&self) -> Vec<Endpoint> {
    self.instances.iter().map(|instance| instance.to_endpoint()).collect()
  }

  /// Endpoints present here whose ids are absent from `prior`.
  #[must_use]
  pub fn missing(&self, prior: &Self) -> Vec<Endpoint> {
    self
      .instances
      .iter()
      .filter(|instance| !prior.contains(instance.id()))
      .map(|instance| instance.to_endpoint())
      .collect()
  }

  /// Gossip targets (`ip:port`) of the members carrying `role`.
  #[must_use]
  pub fn addresses_with_role(&self, role: &str) -> Vec<String> {
    self.instances.iter().filter(|instance| instance.role() == role).map(|instance| instance.address()).collect()
  }

  /// Absorbs a counter array parallel to [`counters`](Self::counters).
  ///
  /// The whole call is ignored when the length does not match the member count. Returns
  /// whether the counters were applied.
  #[must_use]
  pub fn ingest(&self, counters: &[i32], now_ms: u64) -> bool {
    if counters.len() != self.instances.len() {
      return false;
    }
    for (instance, counter) in self.instances.iter().zip(counters) {
      let _ = instance.absorb(*counter, now_ms);
    }
    true
  }
}

impl Default for InstanceSet {
  fn default() -> Self {
    Self::empty()
  }
}

fn fingerprint(ids: &BTreeSet<String>) -> String {
  let mut hasher = Md5::new();
  for id in ids {
    hasher.update(id.as_bytes());
  }
  STANDARD.encode(hasher.finalize())
}
