use std::sync::atomic::AtomicU64;

/// Scratch counters for one in-flight request.
///
/// Exclusively owned by the single request that created it: exactly one
/// execution context holds the current binding at a time, so the counters
/// see one writer and no contention. They are folded into the owning
/// endpoint's aggregate exactly once, at request completion.
pub struct RequestScopeStat {
    pub start_millis: i64,
    pub db_fetch_row_count: AtomicU64,
    pub db_execute_count: AtomicU64,
    pub db_execute_error_count: AtomicU64,
    pub db_execute_time_nanos: AtomicU64,
    pub db_update_count: AtomicU64,
    pub db_commit_count: AtomicU64,
    pub db_rollback_count: AtomicU64,
    pub pool_connection_open_count: AtomicU64,
    pub pool_connection_close_count: AtomicU64,
    pub result_set_open_count: AtomicU64,
    pub result_set_close_count: AtomicU64,
}
