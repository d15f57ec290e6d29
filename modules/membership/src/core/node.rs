//! Node driver: timers, gossip rounds and lifecycle seams.

mod gossiper;
mod manual_membership_clock;
mod membership_clock;
mod membership_node;
mod membership_node_config;
mod membership_node_shared;

pub use gossiper::Gossiper;
pub use manual_membership_clock::ManualMembershipClock;
pub use membership_clock::MembershipClock;
pub use membership_node::MembershipNode;
pub use membership_node_config::MembershipNodeConfig;
pub use membership_node_shared::MembershipNodeShared;
