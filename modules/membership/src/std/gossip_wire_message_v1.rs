//! Wire representation of gossip messages.

#[cfg(test)]
mod tests;

use alloc::{
  string::{String, ToString},
  vec::Vec,
};

use bincode::config::Config;
use serde::{Deserialize, Serialize};

use crate::{
  core::{
    gossip::{GossipMessage, GossipTransportError},
    membership::Endpoint,
  },
  std::gossip_wire_endpoint::GossipWireEndpoint,
};

/// Version 1 of the datagram payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum GossipWireMessageV1 {
  Digest { hash: String, counters: Vec<i32> },
  Counters { hash: String, counters: Vec<i32> },
  Delta { hash: String, endpoints: Vec<GossipWireEndpoint>, deletes: Vec<String> },
  Full { hash: String, endpoints: Vec<GossipWireEndpoint>, deletes: Vec<String> },
  Push { endpoints: Vec<GossipWireEndpoint>, deletes: Vec<String> },
}

impl GossipWireMessageV1 {
  pub(crate) fn from_message(message: &GossipMessage) -> Self {
    match message {
      | GossipMessage::Digest { hash, counters } => Self::Digest { hash: hash.clone(), counters: counters.clone() },
      | GossipMessage::Counters { hash, counters } => Self::Counters { hash: hash.clone(), counters: counters.clone() },
      | GossipMessage::Delta { hash, endpoints, deletes } => {
        Self::Delta { hash: hash.clone(), endpoints: wire_endpoints(endpoints), deletes: deletes.clone() }
      },
      | GossipMessage::Full { hash, endpoints, deletes } => {
        Self::Full { hash: hash.clone(), endpoints: wire_endpoints(endpoints), deletes: deletes.clone() }
      },
      | GossipMessage::Push { endpoints, deletes } => {
        Self::Push { endpoints: wire_endpoints(endpoints), deletes: deletes.clone() }
      },
    }
  }

  pub(crate) fn into_message(self) -> GossipMessage {
    match self {
      | Self::Digest { hash, counters } => GossipMessage::Digest { hash, counters },
      | Self::Counters { hash, counters } => GossipMessage::Counters { hash, counters },
      | Self::Delta { hash, endpoints, deletes } => {
        GossipMessage::Delta { hash, endpoints: core_endpoints(endpoints), deletes }
      },
      | Self::Full { hash, endpoints, deletes } => {
        GossipMessage::Full { hash, endpoints: core_endpoints(endpoints), deletes }
      },
      | Self::Push { endpoints, deletes } => GossipMessage::Push { endpoints: core_endpoints(endpoints), deletes },
    }
  }

  pub(crate) fn encode(&self) -> Result<Vec<u8>, GossipTransportError> {
    bincode::serde::encode_to_vec(self, config()).map_err(|error| GossipTransportError::Encode(error.to_string()))
  }

  pub(crate) fn decode(bytes: &[u8]) -> Option<Self> {
    bincode::serde::decode_from_slice(bytes, config()).ok().map(|(message, _)| message)
  }
}

fn config() -> impl Config {
  bincode::config::standard().with_fixed_int_encoding()
}

fn wire_endpoints(endpoints: &[Endpoint]) -> Vec<GossipWireEndpoint> {
  endpoints.iter().map(GossipWireEndpoint::from_endpoint).collect()
}

fn core_endpoints(endpoints: Vec<GossipWireEndpoint>) -> Vec<Endpoint> {
  endpoints.into_iter().map(GossipWireEndpoint::into_endpoint).collect()
}
