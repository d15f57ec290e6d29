use alloc::{string::String, vec, vec::Vec};

use super::GossipExchange;
use crate::core::{
  gossip::{GossipExchangeKind, GossipMessage},
  membership::{Endpoint, InstanceSetChain},
};

fn endpoint(id: &str, counter: i32) -> Endpoint {
  Endpoint::new(String::from(id), String::from("10.0.0.1"), 4050, 4051, String::from("gossip"), 0, counter)
}

fn chain_with(endpoints: &[Endpoint], now_ms: u64) -> InstanceSetChain {
  let mut chain = InstanceSetChain::new();
  chain.ingest(endpoints, &[], false, now_ms);
  chain
}

fn ids(chain: &InstanceSetChain) -> Vec<String> {
  chain.all().into_iter().map(|endpoint| endpoint.id).collect()
}

#[test]
fn matching_hashes_exchange_only_counters() {
  let mut initiator = chain_with(&[endpoint("id-a", 9), endpoint("id-b", 1)], 0);
  let mut responder = chain_with(&[endpoint("id-a", 2), endpoint("id-b", 6)], 0);

  let digest = GossipExchange::digest(&initiator);
  let outcome = GossipExchange::handle(&mut responder, digest, 100);
  assert_eq!(outcome.kind, GossipExchangeKind::Quick);
  assert!(!outcome.changed);
  assert_eq!(responder.current().counters(), vec![9, 6]);

  let reply = outcome.reply.unwrap();
  assert!(matches!(reply, GossipMessage::Counters { .. }));
  let closing = GossipExchange::handle(&mut initiator, reply, 200);
  assert_eq!(closing.kind, GossipExchangeKind::Quick);
  assert!(closing.reply.is_none());
  assert_eq!(initiator.current().counters(), vec![9, 6]);
  assert_eq!(initiator.get("id-b").map(|instance| instance.witness()), Some(200));
}

#[test]
fn archived_hash_receives_only_missing_members() {
  let mut initiator = chain_with(&[endpoint("id-a", 0)], 0);
  let mut responder = chain_with(&[endpoint("id-a", 0)], 0);
  responder.ingest(&[endpoint("id-b", 3)], &[], false, 50);

  let outcome = GossipExchange::handle(&mut responder, GossipExchange::digest(&initiator), 100);
  assert_eq!(outcome.kind, GossipExchangeKind::Delta);
  let reply = outcome.reply.unwrap();
  match &reply {
    | GossipMessage::Delta { endpoints, deletes, .. } => {
      assert_eq!(endpoints, &vec![endpoint("id-b", 3)]);
      assert!(deletes.is_empty());
    },
    | other => panic!("unexpected reply {other:?}"),
  }

  let closing = GossipExchange::handle(&mut initiator, reply, 120);
  assert_eq!(closing.kind, GossipExchangeKind::Delta);
  assert!(closing.changed);
  assert!(closing.reply.is_none());
  assert_eq!(initiator.current().hash(), responder.current().hash());
}

#[test]
fn unknown_hash_falls_back_to_full_and_reverse_push() {
  let mut initiator = chain_with(&[endpoint("id-a", 0), endpoint("id-c", 0)], 0);
  let mut responder = chain_with(&[endpoint("id-a", 0), endpoint("id-b", 0)], 0);

  let outcome = GossipExchange::handle(&mut responder, GossipExchange::digest(&initiator), 100);
  assert_eq!(outcome.kind, GossipExchangeKind::Full);

  let push = GossipExchange::handle(&mut initiator, outcome.reply.unwrap(), 110);
  assert_eq!(push.kind, GossipExchangeKind::Full);
  assert_eq!(ids(&initiator), vec!["id-a", "id-b", "id-c"]);
  let push = push.reply.unwrap();
  assert!(matches!(push, GossipMessage::Push { .. }));

  let last = GossipExchange::handle(&mut responder, push, 120);
  assert_eq!(last.kind, GossipExchangeKind::Reverse);
  assert!(last.changed);
  assert!(last.reply.is_none());
  assert_eq!(responder.current().hash(), initiator.current().hash());
}

#[test]
fn deletes_travel_with_deltas() {
  let mut initiator = chain_with(&[endpoint("id-a", 0), endpoint("id-x", 0)], 0);
  let mut responder = chain_with(&[endpoint("id-a", 0), endpoint("id-x", 0)], 0);
  assert!(responder.ingest(&[], &[String::from("id-x")], false, 8_000));

  let outcome = GossipExchange::handle(&mut responder, GossipExchange::digest(&initiator), 8_000);
  assert_eq!(outcome.kind, GossipExchangeKind::Delta);

  let closing = GossipExchange::handle(&mut initiator, outcome.reply.unwrap(), 8_000);
  assert!(closing.changed);
  assert!(closing.reply.is_none());
  assert_eq!(ids(&initiator), vec!["id-a"]);
  assert_eq!(initiator.deletes(), vec![String::from("id-x")]);
}

#[test]
fn counters_for_a_stale_snapshot_are_ignored() {
  let mut chain = chain_with(&[endpoint("id-a", 1)], 0);
  let stale = GossipMessage::Counters { hash: String::from("stale"), counters: vec![50] };

  let outcome = GossipExchange::handle(&mut chain, stale, 100);

  assert_eq!(outcome.kind, GossipExchangeKind::Quick);
  assert_eq!(chain.current().counters(), vec![1]);
}
