//! Membership model: members, snapshots and the snapshot chain.

mod endpoint;
mod fn_membership_watcher;
mod instance;
mod instance_heartbeat;
mod instance_set;
mod instance_set_chain;
mod membership_watcher;

pub use endpoint::Endpoint;
pub use fn_membership_watcher::FnMembershipWatcher;
pub use instance::Instance;
pub use instance_heartbeat::InstanceHeartbeat;
pub use instance_set::InstanceSet;
pub use instance_set_chain::InstanceSetChain;
pub use membership_watcher::MembershipWatcher;
