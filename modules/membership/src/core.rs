//! Membership core domain modules (no_std).

mod garbage_map;
pub mod gossip;
pub mod membership;
mod membership_policy;
pub mod node;

pub use garbage_map::GarbageMap;
pub use membership_policy::{
  GOSSIP_ROLE, MAX_DELETES, MAX_HISTORY, MAX_RECENT_ENTRIES, MILLISECONDS_FOR_DELETION_CANDIDATE,
  MILLISECONDS_FOR_HEARTBEAT, MILLISECONDS_FOR_RECOMMEND_DELETION_CANDIDATE, MILLISECONDS_TO_SIT_IN_GARBAGE_MAP,
};
