//! Messages of the anti-entropy handshake.

use alloc::{string::String, vec::Vec};

use crate::core::membership::Endpoint;

/// One step of a gossip exchange between an initiator and a responder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GossipMessage {
  /// Opening message: the initiator's fingerprint and counters.
  Digest {
    /// Initiator's current snapshot hash.
    hash:     String,
    /// Counters in id order.
    counters: Vec<i32>,
  },
  /// Responder agrees on membership and returns its own counters.
  Counters {
    /// Shared snapshot hash.
    hash:     String,
    /// Responder's counters in id order.
    counters: Vec<i32>,
  },
  /// Responder knew the initiator's snapshot and sends only what it lacks.
  Delta {
    /// Responder's current snapshot hash.
    hash:      String,
    /// Members the initiator's snapshot lacks.
    endpoints: Vec<Endpoint>,
    /// Recently deleted member ids.
    deletes:   Vec<String>,
  },
  /// Responder did not know the initiator's snapshot and sends everything.
  Full {
    /// Responder's current snapshot hash.
    hash:      String,
    /// Every live member.
    endpoints: Vec<Endpoint>,
    /// Recently deleted member ids.
    deletes:   Vec<String>,
  },
  /// Reverse gossip: the initiator still differs after applying the reply.
  Push {
    /// Every live member on the initiator.
    endpoints: Vec<Endpoint>,
    /// Recently deleted member ids.
    deletes:   Vec<String>,
  },
}

impl GossipMessage {
  /// Short name used in logs.
  #[must_use]
  pub const fn name(&self) -> &'static str {
    match self {
      | Self::Digest { .. } => "digest",
      | Self::Counters { .. } => "counters",
      | Self::Delta { .. } => "delta",
      | Self::Full { .. } => "full",
      | Self::Push { .. } => "push",
    }
  }
}
