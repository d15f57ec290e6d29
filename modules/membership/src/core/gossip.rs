//! Gossip cadence, partner selection and the anti-entropy handshake.

mod engine_role;
mod gossip_exchange;
mod gossip_exchange_kind;
mod gossip_exchange_outcome;
mod gossip_inbound;
mod gossip_message;
mod gossip_outbound;
mod gossip_partner_picker;
mod gossip_stats;
mod gossip_transport;
mod gossip_transport_error;

pub use engine_role::EngineRole;
pub use gossip_exchange::GossipExchange;
pub use gossip_exchange_kind::GossipExchangeKind;
pub use gossip_exchange_outcome::GossipExchangeOutcome;
pub use gossip_inbound::GossipInbound;
pub use gossip_message::GossipMessage;
pub use gossip_outbound::GossipOutbound;
pub use gossip_partner_picker::GossipPartnerPicker;
pub use gossip_stats::GossipStats;
pub use gossip_transport::GossipTransport;
pub use gossip_transport_error::GossipTransportError;
