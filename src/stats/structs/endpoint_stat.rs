use std::sync::atomic::{AtomicI64, AtomicU64};
use once_cell::race::OnceBox;
use crate::stats::structs::profile_stat::ProfileStat;

/// Live aggregate counters for a single tracked URI.
///
/// One instance exists per distinct endpoint and lives for the process
/// lifetime (or until evicted from the registry). Every counter is an
/// atomic mutated with read-modify-write operations only; no lock is taken
/// anywhere on the request path.
///
/// Peak fields hold the largest value any *single* request ever
/// contributed, not a cumulative total. `last_access_time_millis` is `-1`
/// until the first request arrives.
pub struct EndpointStat {
    pub uri: String,
    pub running_count: AtomicI64,
    pub concurrent_max: AtomicI64,
    pub request_count: AtomicU64,
    pub request_time_nanos: AtomicU64,
    pub error_count: AtomicU64,
    pub last_access_time_millis: AtomicI64,
    pub db_fetch_row_count: AtomicU64,
    pub db_fetch_row_peak: AtomicU64,
    pub db_execute_count: AtomicU64,
    pub db_execute_error_count: AtomicU64,
    pub db_execute_peak: AtomicU64,
    pub db_execute_time_nanos: AtomicU64,
    pub db_update_count: AtomicU64,
    pub db_update_peak: AtomicU64,
    pub db_commit_count: AtomicU64,
    pub db_rollback_count: AtomicU64,
    pub pool_connection_open_count: AtomicU64,
    pub pool_connection_close_count: AtomicU64,
    pub result_set_open_count: AtomicU64,
    pub result_set_close_count: AtomicU64,
    pub profile: OnceBox<ProfileStat>,
}
