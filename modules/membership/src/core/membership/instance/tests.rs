use alloc::string::String;
use core::cmp::Ordering;

use super::Instance;
use crate::core::membership::Endpoint;

fn endpoint(id: &str, ip: &str, role: &str) -> Endpoint {
  Endpoint::new(String::from(id), String::from(ip), 4050, 4051, String::from(role), 17, 3)
}

#[test]
fn new_copies_identity_and_starts_witness_at_now() {
  let instance = Instance::new(&endpoint("id-a", "10.0.0.1", "gossip"), 500, true);

  assert_eq!(instance.id(), "id-a");
  assert_eq!(instance.ip(), "10.0.0.1");
  assert_eq!(instance.port(), 4050);
  assert_eq!(instance.monitoring_port(), 4051);
  assert_eq!(instance.role(), "gossip");
  assert_eq!(instance.created(), 17);
  assert!(instance.is_local());
  assert_eq!(instance.counter(), 3);
  assert_eq!(instance.witness(), 500);
  assert_eq!(instance.address(), "10.0.0.1:4050");
}

#[test]
fn bump_advances_counter_and_witness() {
  let instance = Instance::new(&endpoint("id-a", "10.0.0.1", "gossip"), 0, true);
  instance.bump(1_000);
  instance.bump(2_000);

  assert_eq!(instance.counter(), 5);
  assert_eq!(instance.witness(), 2_000);
}

#[test]
fn absorb_ignores_ties_and_regressions() {
  let instance = Instance::new(&endpoint("id-a", "10.0.0.1", "gossip"), 100, false);

  assert!(!instance.absorb(3, 900));
  assert!(!instance.absorb(1, 900));
  assert_eq!(instance.counter(), 3);
  assert_eq!(instance.witness(), 100);

  assert!(instance.absorb(4, 900));
  assert_eq!(instance.counter(), 4);
  assert_eq!(instance.witness(), 900);
}

#[test]
fn absorb_keeps_the_witness_paired_with_the_maximum_counter() {
  let instance = Instance::new(&endpoint("id-a", "10.0.0.1", "gossip"), 0, false);
  let calls = [(7, 10), (5, 20), (9, 30), (9, 40), (8, 50), (12, 60), (11, 70)];
  for (counter, now) in calls {
    let _ = instance.absorb(counter, now);
  }

  assert_eq!(instance.counter(), 12);
  assert_eq!(instance.witness(), 60);
}

#[test]
fn can_delete_uses_a_strict_threshold() {
  let instance = Instance::new(&endpoint("id-a", "10.0.0.1", "gossip"), 100, false);

  assert!(!instance.can_delete(7_600));
  assert!(instance.can_delete(7_601));
  assert!(instance.can_delete(7_699));
  assert!(instance.can_delete(7_700));
  assert!(!instance.too_old_must_delete(10_100));
  assert!(instance.too_old_must_delete(10_101));
}

#[test]
fn must_delete_implies_can_delete() {
  let instance = Instance::new(&endpoint("id-a", "10.0.0.1", "gossip"), 1_000, false);
  for now in (0..20_000).step_by(250) {
    if instance.too_old_must_delete(now) {
      assert!(instance.can_delete(now), "must-delete without candidacy at {now}");
    }
  }
  assert!(instance.can_delete(9_000) && !instance.too_old_must_delete(9_000));
}

#[test]
fn staleness_checks_tolerate_clock_skew() {
  let instance = Instance::new(&endpoint("id-a", "10.0.0.1", "gossip"), 50_000, false);

  assert!(!instance.can_delete(10));
  assert!(!instance.too_old_must_delete(10));
}

#[test]
fn identity_is_the_id_alone() {
  let a = Instance::new(&endpoint("id-a", "10.0.0.1", "gossip"), 0, false);
  let same_id = Instance::new(&endpoint("id-a", "10.9.9.9", "proxy"), 999, true);
  let b = Instance::new(&endpoint("id-b", "10.0.0.0", "gossip"), 0, false);
  same_id.bump(1_000);

  assert_eq!(a, same_id);
  assert_ne!(a, b);
  assert_eq!(a.cmp(&b), Ordering::Less);
}

#[test]
fn humanize_compare_orders_by_ip_then_role() {
  let gossip = Instance::new(&endpoint("id-z", "10.0.0.1", "gossip"), 0, false);
  let proxy = Instance::new(&endpoint("id-a", "10.0.0.1", "proxy"), 0, false);
  let other_ip = Instance::new(&endpoint("id-b", "10.0.0.2", "gossip"), 0, false);

  assert_eq!(gossip.humanize_compare(&proxy), Ordering::Less);
  assert_eq!(proxy.humanize_compare(&other_ip), Ordering::Less);
  assert_eq!(gossip.humanize_compare(&gossip), Ordering::Equal);
}

#[test]
fn to_endpoint_reports_the_live_counter() {
  let source = endpoint("id-a", "10.0.0.1", "gossip");
  let instance = Instance::new(&source, 0, false);
  let _ = instance.absorb(42, 10);

  let exported = instance.to_endpoint();
  assert_eq!(exported.counter, 42);
  assert_eq!(Endpoint { counter: 3, ..exported }, source);
}
