use alloc::{string::String, sync::Arc, vec::Vec};

use super::InstanceSet;
use crate::core::membership::{Endpoint, Instance};

const EMPTY_HASH: &str = "1B2M2Y8AsgTpgAmY7PhCfg==";

fn instance(id: &str, counter: i32) -> Arc<Instance> {
  let endpoint = Endpoint::new(String::from(id), String::from("10.0.0.1"), 4050, 4051, String::from("gossip"), 0, counter);
  Arc::new(Instance::new(&endpoint, 0, false))
}

#[test]
fn empty_set_hashes_to_the_digest_of_zero_bytes() {
  let set = InstanceSet::empty();

  assert_eq!(set.hash(), EMPTY_HASH);
  assert!(set.is_empty());
  assert!(set.counters().is_empty());
}

#[test]
fn hash_ignores_order_duplicates_and_counters() {
  let a = instance("a", 1);
  let b = instance("b", 2);
  let c = instance("c", 3);
  let d = instance("d", 4);

  let sorted = InstanceSet::from_instances([a.clone(), b.clone(), c.clone(), d.clone()]);
  let permuted = InstanceSet::from_instances([d.clone(), b.clone(), a.clone(), c.clone()]);
  let duplicated = InstanceSet::from_instances([c.clone(), a.clone(), d.clone(), a.clone(), b.clone(), d.clone()]);
  let other_counters = InstanceSet::from_instances([instance("c", 30), instance("a", 10), instance("d", 0), instance("b", 7)]);

  assert_eq!(sorted.hash(), "4vxxTEcn7pOV8yTNLn8zHw==");
  assert_eq!(permuted.hash(), sorted.hash());
  assert_eq!(duplicated.hash(), sorted.hash());
  assert_eq!(other_counters.hash(), sorted.hash());
  assert_eq!(duplicated.len(), 4);
}

#[test]
fn members_are_sorted_by_id() {
  let set = InstanceSet::from_instances([instance("id-b", 2), instance("id-a", 1)]);

  let ids: Vec<&str> = set.instances().iter().map(|instance| instance.id()).collect();
  assert_eq!(ids, vec!["id-a", "id-b"]);
  assert_eq!(set.counters(), vec![1, 2]);
  assert_eq!(set.hash(), "ltgPF0P/6UcAj3+6Mnd/sA==");
  assert!(set.contains("id-a"));
  assert!(!set.contains("id-c"));
}

#[test]
fn bumping_a_member_does_not_change_the_hash() {
  let a = instance("id-a", 1);
  let set = InstanceSet::from_instances([a.clone(), instance("id-b", 1)]);
  let before = String::from(set.hash());
  a.bump(100);

  assert_eq!(set.hash(), before);
  assert_eq!(set.counters(), vec![2, 1]);
}

#[test]
fn missing_lists_members_absent_from_the_prior_set() {
  let a = instance("id-a", 1);
  let b = instance("id-b", 2);
  let c = instance("id-c", 3);
  let prior = InstanceSet::from_instances([a.clone(), b.clone()]);
  let latest = InstanceSet::from_instances([a, b, c]);

  let missing = latest.missing(&prior);
  assert_eq!(missing.len(), 1);
  assert_eq!(missing[0].id, "id-c");
  assert_eq!(missing[0].counter, 3);
  assert!(prior.missing(&latest).is_empty());
}

#[test]
fn ingest_applies_parallel_counters() {
  let a = instance("id-a", 1);
  let b = instance("id-b", 5);
  let set = InstanceSet::from_instances([b.clone(), a.clone()]);

  assert!(set.ingest(&[4, 3], 700));
  assert_eq!(a.counter(), 4);
  assert_eq!(a.witness(), 700);
  assert_eq!(b.counter(), 5);
  assert_eq!(b.witness(), 0);
}

#[test]
fn ingest_with_mismatched_length_is_ignored() {
  let a = instance("id-a", 1);
  let set = InstanceSet::from_instances([a.clone(), instance("id-b", 1)]);

  assert!(!set.ingest(&[9], 700));
  assert!(!set.ingest(&[9, 9, 9], 700));
  assert_eq!(set.counters(), vec![1, 1]);
  assert_eq!(a.witness(), 0);
}

#[test]
fn addresses_with_role_filters_members() {
  let proxy_endpoint =
    Endpoint::new(String::from("id-p"), String::from("10.0.0.9"), 80, 81, String::from("proxy"), 0, 0);
  let proxy = Arc::new(Instance::new(&proxy_endpoint, 0, false));
  let set = InstanceSet::from_instances([instance("id-a", 0), proxy]);

  assert_eq!(set.addresses_with_role("gossip"), vec![String::from("10.0.0.1:4050")]);
  assert_eq!(set.addresses_with_role("proxy"), vec![String::from("10.0.0.9:80")]);
}
