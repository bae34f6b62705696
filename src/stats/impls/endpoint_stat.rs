use std::cell::RefCell;
use std::error::Error;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::time::Instant;
use chrono::{DateTime, TimeZone, Utc};
use log::debug;
use once_cell::race::OnceBox;
use serde_json::{Map, Value, json};
use crate::stats::structs::endpoint_snapshot::EndpointSnapshot;
use crate::stats::structs::endpoint_stat::EndpointStat;
use crate::stats::structs::profile_stat::ProfileStat;
use crate::stats::structs::request_guard::RequestGuard;
use crate::stats::structs::request_scope_stat::RequestScopeStat;

thread_local! {
    static CURRENT_ENDPOINT: RefCell<Option<Arc<EndpointStat>>> = const { RefCell::new(None) };
}

impl EndpointStat {
    pub fn new(uri: &str) -> EndpointStat
    {
        EndpointStat {
            uri: uri.to_string(),
            running_count: AtomicI64::new(0),
            concurrent_max: AtomicI64::new(0),
            request_count: AtomicU64::new(0),
            request_time_nanos: AtomicU64::new(0),
            error_count: AtomicU64::new(0),
            last_access_time_millis: AtomicI64::new(-1),
            db_fetch_row_count: AtomicU64::new(0),
            db_fetch_row_peak: AtomicU64::new(0),
            db_execute_count: AtomicU64::new(0),
            db_execute_error_count: AtomicU64::new(0),
            db_execute_peak: AtomicU64::new(0),
            db_execute_time_nanos: AtomicU64::new(0),
            db_update_count: AtomicU64::new(0),
            db_update_peak: AtomicU64::new(0),
            db_commit_count: AtomicU64::new(0),
            db_rollback_count: AtomicU64::new(0),
            pool_connection_open_count: AtomicU64::new(0),
            pool_connection_close_count: AtomicU64::new(0),
            result_set_open_count: AtomicU64::new(0),
            result_set_close_count: AtomicU64::new(0),
            profile: OnceBox::new(),
        }
    }

    /// Returns the endpoint bound to the calling thread, if a request is
    /// currently active on it.
    pub fn current() -> Option<Arc<EndpointStat>>
    {
        CURRENT_ENDPOINT.with(|slot| slot.borrow().clone())
    }

    /// Starts one request against this endpoint.
    ///
    /// Binds the endpoint and a fresh scratch stat to the calling thread,
    /// raises the in-flight counters and returns the scratch stat so async
    /// callers can also hold it across suspension points. Must be paired
    /// with exactly one `after_invoke` on the same thread.
    pub fn before_invoke(self: Arc<Self>) -> Arc<RequestScopeStat>
    {
        let scope = Arc::new(RequestScopeStat::new());
        RequestScopeStat::set_current(scope.clone());

        let running = self.running_count.fetch_add(1, Ordering::SeqCst) + 1;
        self.concurrent_max.fetch_max(running, Ordering::SeqCst);
        self.request_count.fetch_add(1, Ordering::SeqCst);
        self.last_access_time_millis.store(scope.start_millis, Ordering::SeqCst);

        CURRENT_ENDPOINT.with(|slot| *slot.borrow_mut() = Some(self));
        scope
    }

    /// Completes one request against this endpoint.
    ///
    /// Lowers the in-flight count, accumulates the elapsed time, records a
    /// reported failure, folds the calling thread's scratch stat into the
    /// aggregate exactly once and releases both bindings. Never panics: a
    /// missing scratch stat skips the fold and nothing else.
    pub fn after_invoke(&self, error: Option<&dyn Error>, nanos: u64)
    {
        self.running_count.fetch_sub(1, Ordering::SeqCst);
        self.request_time_nanos.fetch_add(nanos, Ordering::SeqCst);

        if let Some(error) = error {
            self.error_count.fetch_add(1, Ordering::SeqCst);
            debug!("request on {} completed with error: {}", self.uri, error);
        }

        if let Some(scope) = RequestScopeStat::take_current() {
            self.merge(&scope);
        }

        CURRENT_ENDPOINT.with(|slot| *slot.borrow_mut() = None);
    }

    /// Starts one request and returns a guard that completes it on drop.
    pub fn begin_request(self: Arc<Self>) -> RequestGuard
    {
        let endpoint = self.clone();
        let scope = self.before_invoke();
        RequestGuard {
            endpoint,
            scope,
            started: Instant::now(),
            completed: false,
        }
    }

    /// Folds one completed request's scratch counters into the aggregate.
    ///
    /// Cumulative counters receive the scratch value additively; peak
    /// fields are raised with the per-request magnitude itself, not the new
    /// running total.
    pub fn merge(&self, scope: &RequestScopeStat)
    {
        let fetch_rows = scope.get_db_fetch_row_count();
        self.db_fetch_row_count.fetch_add(fetch_rows, Ordering::SeqCst);
        self.db_fetch_row_peak.fetch_max(fetch_rows, Ordering::SeqCst);

        let executes = scope.get_db_execute_count();
        self.db_execute_count.fetch_add(executes, Ordering::SeqCst);
        self.db_execute_peak.fetch_max(executes, Ordering::SeqCst);

        let updates = scope.get_db_update_count();
        self.db_update_count.fetch_add(updates, Ordering::SeqCst);
        self.db_update_peak.fetch_max(updates, Ordering::SeqCst);

        self.db_execute_error_count.fetch_add(scope.get_db_execute_error_count(), Ordering::SeqCst);
        self.db_execute_time_nanos.fetch_add(scope.get_db_execute_time_nanos(), Ordering::SeqCst);
        self.db_commit_count.fetch_add(scope.get_db_commit_count(), Ordering::SeqCst);
        self.db_rollback_count.fetch_add(scope.get_db_rollback_count(), Ordering::SeqCst);
        self.pool_connection_open_count.fetch_add(scope.get_pool_connection_open_count(), Ordering::SeqCst);
        self.pool_connection_close_count.fetch_add(scope.get_pool_connection_close_count(), Ordering::SeqCst);
        self.result_set_open_count.fetch_add(scope.get_result_set_open_count(), Ordering::SeqCst);
        self.result_set_close_count.fetch_add(scope.get_result_set_close_count(), Ordering::SeqCst);
    }

    /// Returns the shared profile block, creating it on first access.
    ///
    /// Concurrent first callers race a single compare-and-swap from absent
    /// to a fresh allocation; the losers' allocations are dropped and every
    /// caller observes the same instance forever after.
    pub fn profile(&self) -> &ProfileStat
    {
        self.profile.get_or_init(|| Box::new(ProfileStat::new()))
    }

    pub fn get_uri(&self) -> &str
    {
        &self.uri
    }

    pub fn get_running_count(&self) -> i64
    {
        self.running_count.load(Ordering::SeqCst)
    }

    pub fn get_concurrent_max(&self) -> i64
    {
        self.concurrent_max.load(Ordering::SeqCst)
    }

    pub fn get_request_count(&self) -> u64
    {
        self.request_count.load(Ordering::SeqCst)
    }

    pub fn get_request_time_nanos(&self) -> u64
    {
        self.request_time_nanos.load(Ordering::SeqCst)
    }

    pub fn get_request_time_millis(&self) -> u64
    {
        self.get_request_time_nanos() / 1_000_000
    }

    pub fn get_error_count(&self) -> u64
    {
        self.error_count.load(Ordering::SeqCst)
    }

    pub fn get_last_access_time_millis(&self) -> i64
    {
        self.last_access_time_millis.load(Ordering::SeqCst)
    }

    /// Wall-clock start time of the most recently started request, or
    /// `None` when the endpoint was never accessed.
    pub fn get_last_access_time(&self) -> Option<DateTime<Utc>>
    {
        let millis = self.get_last_access_time_millis();
        if millis < 0 {
            return None;
        }
        Utc.timestamp_millis_opt(millis).single()
    }

    pub fn set_last_access_time_millis(&self, millis: i64)
    {
        self.last_access_time_millis.store(millis, Ordering::SeqCst);
    }

    pub fn get_db_fetch_row_count(&self) -> u64
    {
        self.db_fetch_row_count.load(Ordering::SeqCst)
    }

    pub fn get_db_fetch_row_peak(&self) -> u64
    {
        self.db_fetch_row_peak.load(Ordering::SeqCst)
    }

    pub fn add_db_fetch_row_count(&self, delta: u64)
    {
        self.db_fetch_row_count.fetch_add(delta, Ordering::SeqCst);
    }

    pub fn get_db_execute_count(&self) -> u64
    {
        self.db_execute_count.load(Ordering::SeqCst)
    }

    pub fn get_db_execute_error_count(&self) -> u64
    {
        self.db_execute_error_count.load(Ordering::SeqCst)
    }

    pub fn get_db_execute_peak(&self) -> u64
    {
        self.db_execute_peak.load(Ordering::SeqCst)
    }

    pub fn get_db_execute_time_nanos(&self) -> u64
    {
        self.db_execute_time_nanos.load(Ordering::SeqCst)
    }

    pub fn get_db_execute_time_millis(&self) -> u64
    {
        self.get_db_execute_time_nanos() / 1_000_000
    }

    pub fn increment_db_execute_count(&self)
    {
        self.db_execute_count.fetch_add(1, Ordering::SeqCst);
    }

    pub fn add_db_execute_count(&self, delta: u64)
    {
        self.db_execute_count.fetch_add(delta, Ordering::SeqCst);
    }

    pub fn get_db_update_count(&self) -> u64
    {
        self.db_update_count.load(Ordering::SeqCst)
    }

    pub fn get_db_update_peak(&self) -> u64
    {
        self.db_update_peak.load(Ordering::SeqCst)
    }

    pub fn add_db_update_count(&self, delta: u64)
    {
        self.db_update_count.fetch_add(delta, Ordering::SeqCst);
    }

    pub fn get_db_commit_count(&self) -> u64
    {
        self.db_commit_count.load(Ordering::SeqCst)
    }

    pub fn increment_db_commit_count(&self)
    {
        self.db_commit_count.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get_db_rollback_count(&self) -> u64
    {
        self.db_rollback_count.load(Ordering::SeqCst)
    }

    pub fn increment_db_rollback_count(&self)
    {
        self.db_rollback_count.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get_pool_connection_open_count(&self) -> u64
    {
        self.pool_connection_open_count.load(Ordering::SeqCst)
    }

    pub fn add_pool_connection_open_count(&self, delta: u64)
    {
        self.pool_connection_open_count.fetch_add(delta, Ordering::SeqCst);
    }

    pub fn increment_pool_connection_open_count(&self)
    {
        self.pool_connection_open_count.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get_pool_connection_close_count(&self) -> u64
    {
        self.pool_connection_close_count.load(Ordering::SeqCst)
    }

    pub fn add_pool_connection_close_count(&self, delta: u64)
    {
        self.pool_connection_close_count.fetch_add(delta, Ordering::SeqCst);
    }

    pub fn increment_pool_connection_close_count(&self)
    {
        self.pool_connection_close_count.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get_result_set_open_count(&self) -> u64
    {
        self.result_set_open_count.load(Ordering::SeqCst)
    }

    pub fn add_result_set_open_count(&self, delta: u64)
    {
        self.result_set_open_count.fetch_add(delta, Ordering::SeqCst);
    }

    pub fn get_result_set_close_count(&self) -> u64
    {
        self.result_set_close_count.load(Ordering::SeqCst)
    }

    pub fn add_result_set_close_count(&self, delta: u64)
    {
        self.result_set_close_count.fetch_add(delta, Ordering::SeqCst);
    }

    pub fn get_stats(&self) -> EndpointSnapshot
    {
        EndpointSnapshot {
            uri: self.uri.clone(),
            running_count: self.running_count.load(Ordering::SeqCst),
            concurrent_max: self.concurrent_max.load(Ordering::SeqCst),
            request_count: self.request_count.load(Ordering::SeqCst),
            request_time_nanos: self.request_time_nanos.load(Ordering::SeqCst),
            error_count: self.error_count.load(Ordering::SeqCst),
            last_access_time_millis: self.last_access_time_millis.load(Ordering::SeqCst),
            db_fetch_row_count: self.db_fetch_row_count.load(Ordering::SeqCst),
            db_fetch_row_peak: self.db_fetch_row_peak.load(Ordering::SeqCst),
            db_execute_count: self.db_execute_count.load(Ordering::SeqCst),
            db_execute_error_count: self.db_execute_error_count.load(Ordering::SeqCst),
            db_execute_peak: self.db_execute_peak.load(Ordering::SeqCst),
            db_execute_time_nanos: self.db_execute_time_nanos.load(Ordering::SeqCst),
            db_update_count: self.db_update_count.load(Ordering::SeqCst),
            db_update_peak: self.db_update_peak.load(Ordering::SeqCst),
            db_commit_count: self.db_commit_count.load(Ordering::SeqCst),
            db_rollback_count: self.db_rollback_count.load(Ordering::SeqCst),
            pool_connection_open_count: self.pool_connection_open_count.load(Ordering::SeqCst),
            pool_connection_close_count: self.pool_connection_close_count.load(Ordering::SeqCst),
            result_set_open_count: self.result_set_open_count.load(Ordering::SeqCst),
            result_set_close_count: self.result_set_close_count.load(Ordering::SeqCst),
        }
    }

    /// Insertion-ordered metric map for external reporting, including the
    /// nested profile block.
    pub fn get_stats_data(&self) -> Map<String, Value>
    {
        let mut data = Map::new();

        data.insert(String::from("Uri"), json!(self.get_uri()));
        data.insert(String::from("RunningCount"), json!(self.get_running_count()));
        data.insert(String::from("ConcurrentMax"), json!(self.get_concurrent_max()));
        data.insert(String::from("RequestCount"), json!(self.get_request_count()));
        data.insert(String::from("RequestTimeMillis"), json!(self.get_request_time_millis()));
        data.insert(String::from("ErrorCount"), json!(self.get_error_count()));
        data.insert(String::from("LastAccessTime"), match self.get_last_access_time() {
            Some(time) => json!(time.to_rfc3339()),
            None => Value::Null,
        });

        data.insert(String::from("DbCommitCount"), json!(self.get_db_commit_count()));
        data.insert(String::from("DbRollbackCount"), json!(self.get_db_rollback_count()));

        data.insert(String::from("DbExecuteCount"), json!(self.get_db_execute_count()));
        data.insert(String::from("DbExecuteErrorCount"), json!(self.get_db_execute_error_count()));
        data.insert(String::from("DbExecutePeak"), json!(self.get_db_execute_peak()));
        data.insert(String::from("DbExecuteTimeMillis"), json!(self.get_db_execute_time_millis()));

        data.insert(String::from("DbFetchRowCount"), json!(self.get_db_fetch_row_count()));
        data.insert(String::from("DbFetchRowPeak"), json!(self.get_db_fetch_row_peak()));

        data.insert(String::from("DbUpdateCount"), json!(self.get_db_update_count()));
        data.insert(String::from("DbUpdatePeak"), json!(self.get_db_update_peak()));

        data.insert(String::from("PoolConnectionOpenCount"), json!(self.get_pool_connection_open_count()));
        data.insert(String::from("PoolConnectionCloseCount"), json!(self.get_pool_connection_close_count()));

        data.insert(String::from("ResultSetOpenCount"), json!(self.get_result_set_open_count()));
        data.insert(String::from("ResultSetCloseCount"), json!(self.get_result_set_close_count()));

        data.insert(String::from("Profiles"), Value::Array(self.profile().get_stats_data()));

        data
    }
}
