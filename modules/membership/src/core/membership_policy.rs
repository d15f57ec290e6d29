//! Timing and capacity policy shared by every membership component.
//!
//! These values are one coherent policy: peers running different values disagree about when a
//! member may be dropped, so they are constants rather than configuration.


/// Staleness after which a member may be reported as removed to other peers.
pub const MILLISECONDS_FOR_DELETION_CANDIDATE: u64 = 7_500;

/// Staleness after which the local scan evicts a member.
///
/// Must stay above [`MILLISECONDS_FOR_DELETION_CANDIDATE`] so a peer never force-removes a
/// member it would still refuse to delete on request.
pub const MILLISECONDS_FOR_RECOMMEND_DELETION_CANDIDATE: u64 = 10_000;

/// Age after which entries are swept out of a [`GarbageMap`](crate::core::GarbageMap).
pub const MILLISECONDS_TO_SIT_IN_GARBAGE_MAP: u64 = 60_000;

/// Interval at which a process bumps its own heartbeat counter.
pub const MILLISECONDS_FOR_HEARTBEAT: u64 = 1_000;

/// Number of archived snapshots kept for hash lookups.
pub const MAX_HISTORY: usize = 25;

/// Number of recently learned members kept for small deltas.
pub const MAX_RECENT_ENTRIES: usize = 100;

/// Number of tombstones kept.
pub const MAX_DELETES: usize = 50;

/// Role tag of members that accept gossip exchanges.
pub const GOSSIP_ROLE: &str = "gossip";
