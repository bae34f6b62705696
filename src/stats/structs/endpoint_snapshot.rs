use serde::{Deserialize, Serialize};

/// Snapshot of one endpoint's current counter values.
///
/// Each field is individually up to date at read time; the snapshot as a
/// whole is not a point-in-time cut across fields, since writers keep
/// running while it is taken.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EndpointSnapshot {
    pub uri: String,
    pub running_count: i64,
    pub concurrent_max: i64,
    pub request_count: u64,
    pub request_time_nanos: u64,
    pub error_count: u64,
    pub last_access_time_millis: i64,
    pub db_fetch_row_count: u64,
    pub db_fetch_row_peak: u64,
    pub db_execute_count: u64,
    pub db_execute_error_count: u64,
    pub db_execute_peak: u64,
    pub db_execute_time_nanos: u64,
    pub db_update_count: u64,
    pub db_update_peak: u64,
    pub db_commit_count: u64,
    pub db_rollback_count: u64,
    pub pool_connection_open_count: u64,
    pub pool_connection_close_count: u64,
    pub result_set_open_count: u64,
    pub result_set_close_count: u64,
}
