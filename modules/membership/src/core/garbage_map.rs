//! Bounded, access-ordered map whose entries also expire by age.


use alloc::{collections::BTreeMap, string::String};

use ahash::RandomState;
use hashbrown::HashMap;

use crate::core::MILLISECONDS_TO_SIT_IN_GARBAGE_MAP;

/// String-keyed map with two independent bounds.
///
/// - Capacity: inserting beyond `max_size` evicts the least recently accessed entry. Both
///   [`put`](Self::put) and [`get`](Self::get) count as an access.
/// - Age: [`gc`](Self::gc) removes entries inserted more than `max_age_ms` ago. The age is set by
///   `put` and is not refreshed by reads.
///
/// Nothing expires on its own; the owner decides when to call `gc`.
#[derive(Debug, Clone)]
pub struct GarbageMap<T> {
  max_size:     usize,
  max_age_ms:   u64,
  entries:      HashMap<String, GarbageMapSlot<T>, RandomState>,
  access_order: BTreeMap<u64, String>,
  next_access:  u64,
}

#[derive(Debug, Clone)]
struct GarbageMapSlot<T> {
  value:       T,
  inserted_at: u64,
  access:      u64,
}

impl<T> GarbageMap<T> {
  /// Creates a map holding at most `max_size` entries for [`MILLISECONDS_TO_SIT_IN_GARBAGE_MAP`].
  #[must_use]
  pub fn new(max_size: usize) -> Self {
    Self::with_max_age(max_size, MILLISECONDS_TO_SIT_IN_GARBAGE_MAP)
  }

  /// Creates a map with an explicit maximum entry age.
  #[must_use]
  pub fn with_max_age(max_size: usize, max_age_ms: u64) -> Self {
    Self {
      max_size,
      max_age_ms,
      entries: HashMap::with_hasher(RandomState::new()),
      access_order: BTreeMap::new(),
      next_access: 0,
    }
  }

  /// Returns the capacity bound.
  #[must_use]
  pub const fn max_size(&self) -> usize {
    self.max_size
  }

  /// Inserts or overwrites `key`, resetting its age to `now_ms`.
  pub fn put(&mut self, key: String, value: T, now_ms: u64) {
    let access = self.next_access();
    if let Some(slot) = self.entries.get_mut(&key) {
      self.access_order.remove(&slot.access);
      slot.value = value;
      slot.inserted_at = now_ms;
      slot.access = access;
      self.access_order.insert(access, key);
      return;
    }

    self.access_order.insert(access, key.clone());
    self.entries.insert(key, GarbageMapSlot { value, inserted_at: now_ms, access });
    while self.entries.len() > self.max_size {
      if !self.evict_eldest() {
        break;
      }
    }
  }

  /// Returns the value for `key` and marks it as most recently accessed.
  pub fn get(&mut self, key: &str) -> Option<&T> {
    let access = self.next_access();
    let slot = self.entries.get_mut(key)?;
    if let Some(owned_key) = self.access_order.remove(&slot.access) {
      self.access_order.insert(access, owned_key);
    }
    slot.access = access;
    Some(&slot.value)
  }

  /// Returns true when `key` is present, without touching the access order.
  #[must_use]
  pub fn contains_key(&self, key: &str) -> bool {
    self.entries.contains_key(key)
  }

  /// Removes `key` and returns its value.
  pub fn remove(&mut self, key: &str) -> Option<T> {
    let slot = self.entries.remove(key)?;
    self.access_order.remove(&slot.access);
    Some(slot.value)
  }

  /// Number of entries.
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns true when the map holds no entries.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Keys, least recently accessed first.
  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.access_order.values().map(String::as_str)
  }

  /// Values, least recently accessed first.
  pub fn values(&self) -> impl Iterator<Item = &T> {
    self.access_order.values().filter_map(|key| self.entries.get(key).map(|slot| &slot.value))
  }

  /// Removes every entry older than the maximum age and returns how many were removed.
  ///
  /// An entry inserted at `t` survives `gc(t + max_age)` and is removed by `gc(t + max_age + 1)`.
  pub fn gc(&mut self, now_ms: u64) -> usize {
    let max_age_ms = self.max_age_ms;
    let before = self.entries.len();
    let access_order = &mut self.access_order;
    self.entries.retain(|_, slot| {
      let keep = now_ms.saturating_sub(slot.inserted_at) <= max_age_ms;
      if !keep {
        access_order.remove(&slot.access);
      }
      keep
    });
    before - self.entries.len()
  }

  fn next_access(&mut self) -> u64 {
    let access = self.next_access;
    self.next_access = self.next_access.wrapping_add(1);
    access
  }

  fn evict_eldest(&mut self) -> bool {
    let Some((_, key)) = self.access_order.pop_first() else {
      return false;
    };
    self.entries.remove(&key);
    true
  }
}
