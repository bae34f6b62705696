//! Statistics event types for per-request resource tracking.

use serde::{Deserialize, Serialize};

/// Enumeration of all recordable per-request resource events.
///
/// Each variant names a metric on the current request's scratch stat. Used
/// with `RequestScopeStat::record()` / `RequestScopeStat::record_current()`
/// to accumulate sub-event counts while a request is in flight.
///
/// # Categories
///
/// - **Row Metrics**: FetchRow
/// - **Statement Metrics**: Execute, ExecuteError, ExecuteTime, Update
/// - **Transaction Metrics**: Commit, Rollback
/// - **Pool Metrics**: PoolConnectionOpen, PoolConnectionClose
/// - **Result-Set Metrics**: ResultSetOpen, ResultSetClose
///
/// # Example
///
/// ```rust,ignore
/// use uristat::stats::enums::stats_event::StatsEvent;
/// use uristat::stats::structs::request_scope_stat::RequestScopeStat;
///
/// // Record 25 fetched rows against the current request
/// RequestScopeStat::record_current(StatsEvent::FetchRow, 25);
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    FetchRow,
    Execute,
    ExecuteError,
    ExecuteTime,
    Update,
    Commit,
    Rollback,
    PoolConnectionOpen,
    PoolConnectionClose,
    ResultSetOpen,
    ResultSetClose,
}
