use alloc::{string::String, sync::Arc};
use core::time::Duration;

use rand::{SeedableRng, rngs::StdRng};

use crate::{
  core::{
    membership::Endpoint,
    node::{Gossiper, MembershipClock, MembershipNode, MembershipNodeConfig, MembershipNodeShared},
  },
  std::{SystemMembershipClock, TokioGossipTransport, TokioGossipTransportConfig, TokioGossiper, TokioGossiperConfig},
};

fn build_gossiper(tick_interval: Duration) -> TokioGossiper<StdRng> {
  let transport = TokioGossipTransport::bind(
    TokioGossipTransportConfig::new(String::from("127.0.0.1:0"), 1_024, 8),
    tokio::runtime::Handle::current(),
  )
  .expect("transport bind");
  let address = transport.local_addr();
  let local = Endpoint::new(
    String::from("id-local"),
    address.ip().to_string(),
    address.port(),
    0,
    String::from("gossip"),
    0,
    0,
  );
  let clock: Arc<dyn MembershipClock> = Arc::new(SystemMembershipClock::new());
  let node = MembershipNode::new(MembershipNodeConfig::new(local), StdRng::seed_from_u64(1), clock.now_ms());
  TokioGossiper::new(
    TokioGossiperConfig::new(tick_interval),
    MembershipNodeShared::new(node),
    transport,
    clock,
    tokio::runtime::Handle::current(),
  )
}

#[tokio::test]
async fn start_then_stop_is_ok() {
  let mut gossiper = build_gossiper(Duration::from_millis(10));

  assert!(gossiper.start().is_ok());
  assert!(gossiper.stop().is_ok());
}

#[tokio::test]
async fn stop_without_start_returns_err() {
  let mut gossiper = build_gossiper(Duration::from_millis(10));

  assert_eq!(gossiper.stop(), Err("not started"));
}

#[tokio::test]
async fn start_twice_returns_err() {
  let mut gossiper = build_gossiper(Duration::from_millis(10));

  assert!(gossiper.start().is_ok());
  assert_eq!(gossiper.start(), Err("already started"));
  let _ = gossiper.stop();
}

#[tokio::test]
async fn zero_tick_interval_is_rejected() {
  let mut gossiper = build_gossiper(Duration::ZERO);

  assert_eq!(gossiper.start(), Err("tick_interval must be > 0"));
}

#[tokio::test]
async fn running_gossiper_bumps_the_local_heartbeat() {
  let mut gossiper = build_gossiper(Duration::from_millis(10));
  gossiper.start().expect("start");

  tokio::time::sleep(Duration::from_millis(1_300)).await;

  let counter = gossiper.node().with_read(|node| node.chain().current().counters());
  assert!(counter[0] >= 1, "counter {counter:?}");
  gossiper.stop().expect("stop");
}
