//! std-only adapters: UDP transport, wall clock and the tokio driver.

mod gossip_wire_endpoint;
mod gossip_wire_message_v1;
mod system_membership_clock;
mod tokio_gossip_transport;
mod tokio_gossip_transport_config;
mod tokio_gossiper;
mod tokio_gossiper_config;

pub use system_membership_clock::SystemMembershipClock;
pub use tokio_gossip_transport::TokioGossipTransport;
pub use tokio_gossip_transport_config::TokioGossipTransportConfig;
pub use tokio_gossiper::TokioGossiper;
pub use tokio_gossiper_config::TokioGossiperConfig;
