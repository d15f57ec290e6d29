//! Wire representation of an endpoint record.

use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::core::membership::Endpoint;

/// Wire representation of an [`Endpoint`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct GossipWireEndpoint {
  pub id:              String,
  pub ip:              String,
  pub port:            u16,
  pub monitoring_port: u16,
  pub role:            String,
  pub created:         i64,
  pub counter:         i32,
}

impl GossipWireEndpoint {
  pub(crate) fn from_endpoint(endpoint: &Endpoint) -> Self {
    Self {
      id:              endpoint.id.clone(),
      ip:              endpoint.ip.clone(),
      port:            endpoint.port,
      monitoring_port: endpoint.monitoring_port,
      role:            endpoint.role.clone(),
      created:         endpoint.created,
      counter:         endpoint.counter,
    }
  }

  pub(crate) fn into_endpoint(self) -> Endpoint {
    Endpoint::new(self.id, self.ip, self.port, self.monitoring_port, self.role, self.created, self.counter)
  }
}
