//! Chooses the next gossip partner.


use alloc::{
  collections::BTreeSet,
  string::{String, ToString},
  vec::Vec,
};

use ahash::RandomState;
use hashbrown::HashMap;
use rand::Rng;

use crate::core::{GOSSIP_ROLE, membership::InstanceSet};

const MAX_SAMPLE_ATTEMPTS: usize = 4;

/// Power-of-two-choices partner selection over seeds and gossip-role members.
///
/// The candidate list is the sorted union of the static seed addresses and the addresses of the
/// snapshot's gossip-role members. It is rebuilt only when the snapshot fingerprint changes.
/// Each pick draws two candidates and keeps the one this picker has chosen less often, which
/// spreads rounds across peers more evenly than uniform sampling.
#[derive(Debug, Clone)]
pub struct GossipPartnerPicker {
  self_address: String,
  seeds:        BTreeSet<String>,
  cached_hash:  Option<String>,
  candidates:   Vec<String>,
  selections:   HashMap<String, u64, RandomState>,
}

impl GossipPartnerPicker {
  /// Creates a picker that never returns `self_address`.
  #[must_use]
  pub fn new<I>(self_address: impl Into<String>, seeds: I) -> Self
  where
    I: IntoIterator,
    I::Item: Into<String>, {
    Self {
      self_address: self_address.into(),
      seeds:        seeds.into_iter().map(Into::into).collect(),
      cached_hash:  None,
      candidates:   Vec::new(),
      selections:   HashMap::with_hasher(RandomState::new()),
    }
  }

  /// Own gossip address.
  #[must_use]
  pub fn self_address(&self) -> &str {
    &self.self_address
  }

  /// Candidate list as of the last refresh, sorted.
  #[must_use]
  pub fn candidates(&self) -> &[String] {
    &self.candidates
  }

  /// How often `address` has been picked.
  #[must_use]
  pub fn selections(&self, address: &str) -> u64 {
    self.selections.get(address).copied().unwrap_or(0)
  }

  /// Total number of successful picks.
  #[must_use]
  pub fn total_selections(&self) -> u64 {
    self.selections.values().sum()
  }

  /// Rebuilds the candidate list when `snapshot` differs from the one last seen.
  pub fn refresh(&mut self, snapshot: &InstanceSet) {
    if self.cached_hash.as_deref() == Some(snapshot.hash()) {
      return;
    }
    let mut union = self.seeds.clone();
    union.extend(snapshot.addresses_with_role(GOSSIP_ROLE));
    self.candidates = union.into_iter().collect();
    self.cached_hash = Some(snapshot.hash().to_string());
  }

  /// Picks the next partner address, or `None` when no candidate other than self is found.
  pub fn pick<R: Rng + ?Sized>(&mut self, snapshot: &InstanceSet, rng: &mut R) -> Option<String> {
    self.refresh(snapshot);
    let first = self.sample_not_self(rng)?;
    let second = self.sample_not_self(rng);
    let chosen = self.less_selected(first, second);
    let address = self.candidates[chosen].clone();
    *self.selections.entry(address.clone()).or_insert(0) += 1;
    Some(address)
  }

  /// Keeps `first` when the second draw found nothing; a tie goes to `second`.
  fn less_selected(&self, first: usize, second: Option<usize>) -> usize {
    let Some(second) = second else {
      return first;
    };
    if self.selections(&self.candidates[first]) < self.selections(&self.candidates[second]) { first } else { second }
  }

  fn sample_not_self<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
    if self.candidates.is_empty() {
      return None;
    }
    (0..MAX_SAMPLE_ATTEMPTS)
      .map(|_| rng.gen_range(0..self.candidates.len()))
      .find(|index| self.candidates[*index] != self.self_address)
  }
}
