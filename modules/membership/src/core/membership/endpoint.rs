//! Endpoint record exchanged between peers.

use alloc::{format, string::String};

/// Wire-level description of a cluster member.
///
/// This is the only membership data that crosses the process boundary. Witness times and the
/// local flag stay inside the process that owns the [`Instance`](super::Instance).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
  /// Unique member identifier.
  pub id:              String,
  /// Address the member listens on.
  pub ip:              String,
  /// Gossip port.
  pub port:            u16,
  /// Port serving monitoring requests.
  pub monitoring_port: u16,
  /// Role tag such as `gossip` or `proxy`.
  pub role:            String,
  /// Creation timestamp assigned by the member itself.
  pub created:         i64,
  /// Heartbeat counter.
  pub counter:         i32,
}

impl Endpoint {
  /// Creates a new endpoint record.
  #[must_use]
  pub const fn new(
    id: String,
    ip: String,
    port: u16,
    monitoring_port: u16,
    role: String,
    created: i64,
    counter: i32,
  ) -> Self {
    Self { id, ip, port, monitoring_port, role, created, counter }
  }

  /// Returns the `ip:port` form used as a gossip target.
  #[must_use]
  pub fn address(&self) -> String {
    format!("{}:{}", self.ip, self.port)
  }
}
