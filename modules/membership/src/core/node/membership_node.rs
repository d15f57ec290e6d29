//! Membership node driver.


use alloc::{boxed::Box, string::String, vec::Vec};
use core::time::Duration;

use rand::Rng;
use tracing::{debug, trace};

use super::MembershipNodeConfig;
use crate::core::{
  gossip::{
    EngineRole, GossipExchange, GossipMessage, GossipOutbound, GossipPartnerPicker, GossipStats, GossipTransport,
    GossipTransportError,
  },
  membership::{Endpoint, InstanceSetChain, MembershipWatcher},
};

/// One process's membership view plus the timers that keep it fresh.
///
/// The node is driven from outside by [`poll`](Self::poll): each call answers queued messages,
/// bumps the own heartbeat, runs scan and garbage collection, and opens a gossip round, each
/// only when its timer is due. Time and randomness are injected so the node runs the same way
/// under tokio, in a simulation or in a test.
pub struct MembershipNode<R> {
  local_id:                String,
  local_address:           String,
  role:                    EngineRole,
  heartbeat_interval_ms:   u64,
  maintenance_interval_ms: u64,
  chain:                   InstanceSetChain,
  picker:                  GossipPartnerPicker,
  rng:                     R,
  stats:                   GossipStats,
  next_heartbeat_ms:       u64,
  next_maintenance_ms:     u64,
  next_gossip_ms:          u64,
}

impl<R: Rng> MembershipNode<R> {
  /// Creates a node whose view holds only its own endpoint.
  ///
  /// The first gossip round is due immediately.
  #[must_use]
  pub fn new(config: MembershipNodeConfig, rng: R, now_ms: u64) -> Self {
    let MembershipNodeConfig { local, role, seeds, heartbeat_interval, maintenance_interval } = config;
    let local_address = local.address();
    let mut chain = InstanceSetChain::new();
    chain.ingest(core::slice::from_ref(&local), &[], true, now_ms);
    let heartbeat_interval_ms = millis(heartbeat_interval);
    let maintenance_interval_ms = millis(maintenance_interval);
    debug!(id = %local.id, address = %local_address, ?role, "membership node created");

    Self {
      local_id: local.id,
      picker: GossipPartnerPicker::new(local_address.clone(), seeds),
      local_address,
      role,
      heartbeat_interval_ms,
      maintenance_interval_ms,
      chain,
      rng,
      stats: GossipStats::default(),
      next_heartbeat_ms: now_ms.saturating_add(heartbeat_interval_ms),
      next_maintenance_ms: now_ms.saturating_add(maintenance_interval_ms),
      next_gossip_ms: now_ms,
    }
  }

  /// Own member id.
  #[must_use]
  pub fn local_id(&self) -> &str {
    &self.local_id
  }

  /// Own gossip address.
  #[must_use]
  pub fn local_address(&self) -> &str {
    &self.local_address
  }

  /// Gossip cadence.
  #[must_use]
  pub const fn role(&self) -> EngineRole {
    self.role
  }

  /// Membership view.
  #[must_use]
  pub const fn chain(&self) -> &InstanceSetChain {
    &self.chain
  }

  /// Mutable membership view.
  pub const fn chain_mut(&mut self) -> &mut InstanceSetChain {
    &mut self.chain
  }

  /// Partner picker, with its selection counts.
  #[must_use]
  pub const fn picker(&self) -> &GossipPartnerPicker {
    &self.picker
  }

  /// Exchange counters.
  #[must_use]
  pub const fn stats(&self) -> &GossipStats {
    &self.stats
  }

  /// Live members as wire records.
  #[must_use]
  pub fn members(&self) -> Vec<Endpoint> {
    self.chain.all()
  }

  /// Registers a membership watcher on the view.
  pub fn set_watcher(&mut self, watcher: Box<dyn MembershipWatcher>) {
    self.chain.set_watcher(watcher);
  }

  /// Runs everything that is due at `now_ms`.
  ///
  /// A failed send does not stop the call: every drained message is still applied and the
  /// heartbeat, maintenance and gossip steps still run.
  ///
  /// # Errors
  ///
  /// Returns the first error reported by `transport` once all due work has run.
  pub fn poll<T>(&mut self, now_ms: u64, transport: &mut T) -> Result<(), GossipTransportError>
  where
    T: GossipTransport + ?Sized, {
    let mut first_error = None;
    for inbound in transport.poll_inbound() {
      let Some(reply) = self.handle_message(&inbound.from, inbound.message, now_ms) else {
        continue;
      };
      if let Err(error) = self.send(transport, GossipOutbound::new(inbound.from, reply)) {
        first_error = first_error.or(Some(error));
      }
    }

    if now_ms >= self.next_heartbeat_ms {
      self.next_heartbeat_ms = now_ms.saturating_add(self.heartbeat_interval_ms);
      if let Some(heartbeat) = self.chain.pick(&self.local_id) {
        heartbeat.beat(now_ms);
      }
    }

    if now_ms >= self.next_maintenance_ms {
      self.next_maintenance_ms = now_ms.saturating_add(self.maintenance_interval_ms);
      let oldest_witness_ms = self.chain.scan(now_ms);
      let swept = self.chain.gc(now_ms);
      trace!(oldest_witness_ms, swept, members = self.chain.len(), "membership maintenance");
    }

    if now_ms >= self.next_gossip_ms {
      self.next_gossip_ms = now_ms.saturating_add(self.role.compute_wait_ms(&mut self.rng));
      if let Err(error) = self.begin_round(transport) {
        first_error = first_error.or(Some(error));
      }
    }
    first_error.map_or(Ok(()), Err)
  }

  /// Applies a message from `from` and returns the reply to send back, if any.
  pub fn handle_message(&mut self, from: &str, message: GossipMessage, now_ms: u64) -> Option<GossipMessage> {
    let name = message.name();
    let outcome = GossipExchange::handle(&mut self.chain, message, now_ms);
    self.stats.record(outcome.kind);
    trace!(from, message = name, kind = ?outcome.kind, changed = outcome.changed, "gossip message handled");
    outcome.reply
  }

  /// Opens a gossip round with a picked partner, if there is one.
  ///
  /// # Errors
  ///
  /// Returns the transport error when the digest cannot be sent.
  pub fn begin_round<T>(&mut self, transport: &mut T) -> Result<(), GossipTransportError>
  where
    T: GossipTransport + ?Sized, {
    let snapshot = self.chain.current();
    let Some(target) = self.picker.pick(&snapshot, &mut self.rng) else {
      self.stats.idle_rounds += 1;
      return Ok(());
    };
    self.stats.rounds += 1;
    trace!(target = %target, hash = %snapshot.hash(), "gossip round");
    self.send(transport, GossipOutbound::new(target, GossipExchange::digest(&self.chain)))
  }

  fn send<T>(&mut self, transport: &mut T, outbound: GossipOutbound) -> Result<(), GossipTransportError>
  where
    T: GossipTransport + ?Sized, {
    transport.send(outbound).inspect_err(|_| self.stats.send_failures += 1)
  }
}

fn millis(duration: Duration) -> u64 {
  u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
