use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use crossbeam_skiplist::SkipMap;
use serde::{Deserialize, Serialize};

/// Key identifying one profiled sub-operation within an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProfileEntryKey {
    pub parent: Option<String>,
    pub name: String,
    pub category: String,
}

/// Counters for one profiled sub-operation.
pub struct ProfileEntry {
    pub execute_count: AtomicU64,
    pub execute_time_nanos: AtomicU64,
}

/// Per-endpoint profile block.
///
/// Created at most once per endpoint, on first access, and shared by every
/// subsequent reader and writer. Entries are kept in a lock-free ordered
/// map keyed by the profiled operation's identity.
pub struct ProfileStat {
    pub entries: SkipMap<ProfileEntryKey, Arc<ProfileEntry>>,
}
