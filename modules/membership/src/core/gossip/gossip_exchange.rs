//! Anti-entropy handshake over an [`InstanceSetChain`].

#[cfg(test)]
mod tests;

use alloc::string::{String, ToString};

use tracing::trace;

use super::{GossipExchangeKind, GossipExchangeOutcome, GossipMessage};
use crate::core::membership::{Endpoint, InstanceSetChain};

/// Stateless handshake rules.
///
/// The initiator opens with [`digest`](Self::digest). The responder compares fingerprints:
/// a match only moves counters, a fingerprint found in history moves the members the initiator
/// lacks, and anything else moves the whole membership. When the initiator still differs after
/// applying a delta or full reply it pushes its own membership back.
#[derive(Debug, Clone, Copy)]
pub struct GossipExchange;

impl GossipExchange {
  /// Builds the opening message of a round.
  #[must_use]
  pub fn digest(chain: &InstanceSetChain) -> GossipMessage {
    let current = chain.current();
    GossipMessage::Digest { hash: current.hash().to_string(), counters: current.counters() }
  }

  /// Applies `message` to `chain` and returns the reply to send, if any.
  pub fn handle(chain: &mut InstanceSetChain, message: GossipMessage, now_ms: u64) -> GossipExchangeOutcome {
    match message {
      | GossipMessage::Digest { hash, counters } => Self::answer_digest(chain, &hash, &counters, now_ms),
      | GossipMessage::Counters { hash, counters } => {
        let current = chain.current();
        if current.hash() == hash {
          let _ = current.ingest(&counters, now_ms);
        } else {
          trace!(peer_hash = %hash, local_hash = %current.hash(), "counters for a stale snapshot ignored");
        }
        GossipExchangeOutcome::new(GossipExchangeKind::Quick, None, false)
      },
      | GossipMessage::Delta { hash, endpoints, deletes } => {
        Self::apply_reply(chain, GossipExchangeKind::Delta, &hash, &endpoints, &deletes, now_ms)
      },
      | GossipMessage::Full { hash, endpoints, deletes } => {
        Self::apply_reply(chain, GossipExchangeKind::Full, &hash, &endpoints, &deletes, now_ms)
      },
      | GossipMessage::Push { endpoints, deletes } => {
        let changed = chain.ingest(&endpoints, &deletes, false, now_ms);
        GossipExchangeOutcome::new(GossipExchangeKind::Reverse, None, changed)
      },
    }
  }

  fn answer_digest(chain: &mut InstanceSetChain, hash: &str, counters: &[i32], now_ms: u64) -> GossipExchangeOutcome {
    let current = chain.current();
    if current.hash() == hash {
      let _ = current.ingest(counters, now_ms);
      let reply = GossipMessage::Counters { hash: current.hash().to_string(), counters: current.counters() };
      return GossipExchangeOutcome::new(GossipExchangeKind::Quick, Some(reply), false);
    }

    let local_hash = current.hash().to_string();
    match chain.find(hash) {
      | Some(known) => {
        let reply = GossipMessage::Delta { hash: local_hash, endpoints: chain.missing(&known), deletes: chain.deletes() };
        GossipExchangeOutcome::new(GossipExchangeKind::Delta, Some(reply), false)
      },
      | None => {
        let reply = GossipMessage::Full { hash: local_hash, endpoints: chain.all(), deletes: chain.deletes() };
        GossipExchangeOutcome::new(GossipExchangeKind::Full, Some(reply), false)
      },
    }
  }

  fn apply_reply(
    chain: &mut InstanceSetChain,
    kind: GossipExchangeKind,
    peer_hash: &str,
    endpoints: &[Endpoint],
    deletes: &[String],
    now_ms: u64,
  ) -> GossipExchangeOutcome {
    let changed = chain.ingest(endpoints, deletes, false, now_ms);
    if chain.current().hash() == peer_hash {
      return GossipExchangeOutcome::new(kind, None, changed);
    }
    let push = GossipMessage::Push { endpoints: chain.all(), deletes: chain.deletes() };
    GossipExchangeOutcome::new(kind, Some(push), changed)
  }
}

