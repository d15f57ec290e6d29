//! Mutable chain of membership snapshots with history and tombstones.


use alloc::{
  boxed::Box,
  collections::BTreeMap,
  string::{String, ToString},
  sync::Arc,
  vec::Vec,
};
use core::fmt;

use tracing::debug;

use super::{Endpoint, Instance, InstanceHeartbeat, InstanceSet, MembershipWatcher};
use crate::core::{GarbageMap, MAX_DELETES, MAX_HISTORY, MAX_RECENT_ENTRIES};

/// Root of membership truth for one process.
///
/// `primary` is the authoritative id → instance table. A new [`InstanceSet`] is materialised
/// only when membership changes; heartbeat updates mutate the shared instances in place. The
/// replaced snapshot is archived under its own hash so a peer that last agreed on it can still
/// be found and diffed. Recently learned members and tombstones are kept in bounded,
/// age-limited maps.
///
/// Not synchronised: one owner drives every mutation.
pub struct InstanceSetChain {
  primary:                BTreeMap<String, Arc<Instance>>,
  current:                Arc<InstanceSet>,
  history:                GarbageMap<Arc<InstanceSet>>,
  recently_learned_about: GarbageMap<Arc<Instance>>,
  recently_deleted:       GarbageMap<Arc<Instance>>,
  watcher:                Option<Box<dyn MembershipWatcher>>,
}

impl InstanceSetChain {
  /// Creates an empty chain.
  #[must_use]
  pub fn new() -> Self {
    Self {
      primary:                BTreeMap::new(),
      current:                Arc::new(InstanceSet::empty()),
      history:                GarbageMap::new(MAX_HISTORY),
      recently_learned_about: GarbageMap::new(MAX_RECENT_ENTRIES),
      recently_deleted:       GarbageMap::new(MAX_DELETES),
      watcher:                None,
    }
  }

  /// Latest snapshot.
  #[must_use]
  pub fn current(&self) -> Arc<InstanceSet> {
    self.current.clone()
  }

  /// Every live member as a wire record, in id order.
  #[must_use]
  pub fn all(&self) -> Vec<Endpoint> {
    self.current.to_endpoints()
  }

  /// Live member with the given id.
  #[must_use]
  pub fn get(&self, id: &str) -> Option<&Arc<Instance>> {
    self.primary.get(id)
  }

  /// Number of live members.
  #[must_use]
  pub fn len(&self) -> usize {
    self.primary.len()
  }

  /// Returns true when no member is live.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.primary.is_empty()
  }

  /// Merges endpoints and delete requests reported by a peer (or by the process itself).
  ///
  /// Known members absorb the reported counter. Unknown members are resurrected from the
  /// tombstones when possible, so they resume their previous counter, and otherwise created with
  /// `is_local` as their local flag. A delete is honoured only for a live, non-local member that
  /// is a deletion candidate here too. Returns whether membership changed.
  pub fn ingest(&mut self, endpoints: &[Endpoint], deletes: &[String], is_local: bool, now_ms: u64) -> bool {
    let mut changed = false;

    for endpoint in endpoints {
      if let Some(existing) = self.primary.get(&endpoint.id) {
        let _ = existing.absorb(endpoint.counter, now_ms);
        continue;
      }

      let instance = match self.recently_deleted.remove(&endpoint.id) {
        | Some(tombstone) => {
          let _ = tombstone.absorb(endpoint.counter, now_ms);
          debug!(id = %endpoint.id, counter = tombstone.counter(), "member resurrected from tombstone");
          tombstone
        },
        | None => {
          debug!(id = %endpoint.id, address = %endpoint.address(), role = %endpoint.role, "member learned");
          Arc::new(Instance::new(endpoint, now_ms, is_local))
        },
      };
      self.recently_learned_about.put(endpoint.id.clone(), instance.clone(), now_ms);
      self.primary.insert(endpoint.id.clone(), instance);
      changed = true;
    }

    for id in deletes {
      let deletable = self.primary.get(id).is_some_and(|instance| !instance.is_local() && instance.can_delete(now_ms));
      if deletable {
        self.tombstone(id, now_ms);
        debug!(id = %id, "member deleted on peer request");
        changed = true;
      }
    }

    if changed {
      self.install_snapshot(now_ms);
    }
    changed
  }

  /// Evicts members that have been silent for too long.
  ///
  /// Local members are never evicted. Returns the oldest witness time among the remaining
  /// non-local members, or `now_ms` when there are none.
  pub fn scan(&mut self, now_ms: u64) -> u64 {
    let expired: Vec<String> = self
      .primary
      .values()
      .filter(|instance| !instance.is_local() && instance.too_old_must_delete(now_ms))
      .map(|instance| instance.id().to_string())
      .collect();

    for id in &expired {
      self.tombstone(id, now_ms);
      debug!(id = %id, "member expired");
    }
    if !expired.is_empty() {
      self.install_snapshot(now_ms);
    }

    self.primary.values().filter(|instance| !instance.is_local()).map(|instance| instance.witness()).min().unwrap_or(now_ms)
  }

  /// Sweeps aged entries out of the history, tombstone and recently-learned maps.
  ///
  /// Returns the number of entries removed.
  pub fn gc(&mut self, now_ms: u64) -> usize {
    self.history.gc(now_ms) + self.recently_deleted.gc(now_ms) + self.recently_learned_about.gc(now_ms)
  }

  /// Finds the current or an archived snapshot by fingerprint.
  pub fn find(&mut self, hash: &str) -> Option<Arc<InstanceSet>> {
    if self.current.hash() == hash {
      return Some(self.current.clone());
    }
    self.history.get(hash).cloned()
  }

  /// Endpoints this side has that `other` lacks.
  #[must_use]
  pub fn missing(&self, other: &InstanceSet) -> Vec<Endpoint> {
    self.current.missing(other)
  }

  /// Recently learned members.
  #[must_use]
  pub fn recent(&self) -> Vec<Endpoint> {
    self.recently_learned_about.values().map(|instance| instance.to_endpoint()).collect()
  }

  /// Ids of recently deleted members.
  #[must_use]
  pub fn deletes(&self) -> Vec<String> {
    self.recently_deleted.keys().map(String::from).collect()
  }

  /// Returns a heartbeat handle for a live member.
  #[must_use]
  pub fn pick(&self, id: &str) -> Option<InstanceHeartbeat> {
    self.primary.get(id).cloned().map(InstanceHeartbeat::new)
  }

  /// Registers the watcher, replacing any previous one, and notifies it right away.
  pub fn set_watcher(&mut self, watcher: Box<dyn MembershipWatcher>) {
    self.watcher = Some(watcher);
    self.notify();
  }

  /// Removes the registered watcher.
  pub fn clear_watcher(&mut self) -> Option<Box<dyn MembershipWatcher>> {
    self.watcher.take()
  }

  fn tombstone(&mut self, id: &str, now_ms: u64) {
    let Some(instance) = self.primary.remove(id) else {
      return;
    };
    self.recently_learned_about.remove(id);
    self.recently_deleted.put(id.to_string(), instance, now_ms);
  }

  fn install_snapshot(&mut self, now_ms: u64) {
    let next = Arc::new(InstanceSet::from_instances(self.primary.values().cloned()));
    let previous = core::mem::replace(&mut self.current, next);
    self.history.put(previous.hash().to_string(), previous, now_ms);
    debug!(hash = %self.current.hash(), members = self.current.len(), "membership snapshot replaced");
    self.notify();
  }

  fn notify(&mut self) {
    let Some(watcher) = self.watcher.as_mut() else {
      return;
    };
    let endpoints = self.current.to_endpoints();
    watcher.on_membership_changed(&endpoints);
  }
}

impl Default for InstanceSetChain {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for InstanceSetChain {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("InstanceSetChain")
      .field("current", &self.current.hash())
      .field("members", &self.primary.len())
      .field("history", &self.history.len())
      .field("recently_learned_about", &self.recently_learned_about.len())
      .field("recently_deleted", &self.recently_deleted.len())
      .field("watcher", &self.watcher.is_some())
      .finish()
  }
}
