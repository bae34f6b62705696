use std::cell::RefCell;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use crate::common::common::current_time_millis;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::request_scope_stat::RequestScopeStat;

thread_local! {
    static CURRENT_SCOPE: RefCell<Option<Arc<RequestScopeStat>>> = const { RefCell::new(None) };
}

impl RequestScopeStat {
    pub fn new() -> RequestScopeStat
    {
        RequestScopeStat {
            start_millis: current_time_millis(),
            db_fetch_row_count: AtomicU64::new(0),
            db_execute_count: AtomicU64::new(0),
            db_execute_error_count: AtomicU64::new(0),
            db_execute_time_nanos: AtomicU64::new(0),
            db_update_count: AtomicU64::new(0),
            db_commit_count: AtomicU64::new(0),
            db_rollback_count: AtomicU64::new(0),
            pool_connection_open_count: AtomicU64::new(0),
            pool_connection_close_count: AtomicU64::new(0),
            result_set_open_count: AtomicU64::new(0),
            result_set_close_count: AtomicU64::new(0),
        }
    }

    /// Returns the scratch stat bound to the calling thread, if a request
    /// is currently active on it.
    pub fn current() -> Option<Arc<RequestScopeStat>>
    {
        CURRENT_SCOPE.with(|slot| slot.borrow().clone())
    }

    pub fn set_current(stat: Arc<RequestScopeStat>)
    {
        CURRENT_SCOPE.with(|slot| *slot.borrow_mut() = Some(stat));
    }

    /// Removes and returns the calling thread's binding.
    pub fn take_current() -> Option<Arc<RequestScopeStat>>
    {
        CURRENT_SCOPE.with(|slot| slot.borrow_mut().take())
    }

    pub fn clear_current()
    {
        CURRENT_SCOPE.with(|slot| *slot.borrow_mut() = None);
    }

    /// Records `value` against the stat bound to the calling thread.
    ///
    /// Instrumentation may fire on paths where no request is active (or
    /// where tracking is disabled); in that case nothing is recorded.
    pub fn record_current(event: StatsEvent, value: u64)
    {
        if let Some(stat) = RequestScopeStat::current() {
            stat.record(event, value);
        }
    }

    pub fn record(&self, event: StatsEvent, value: u64)
    {
        match event {
            StatsEvent::FetchRow => {
                self.db_fetch_row_count.fetch_add(value, Ordering::SeqCst);
            }
            StatsEvent::Execute => {
                self.db_execute_count.fetch_add(value, Ordering::SeqCst);
            }
            StatsEvent::ExecuteError => {
                self.db_execute_error_count.fetch_add(value, Ordering::SeqCst);
            }
            StatsEvent::ExecuteTime => {
                self.db_execute_time_nanos.fetch_add(value, Ordering::SeqCst);
            }
            StatsEvent::Update => {
                self.db_update_count.fetch_add(value, Ordering::SeqCst);
            }
            StatsEvent::Commit => {
                self.db_commit_count.fetch_add(value, Ordering::SeqCst);
            }
            StatsEvent::Rollback => {
                self.db_rollback_count.fetch_add(value, Ordering::SeqCst);
            }
            StatsEvent::PoolConnectionOpen => {
                self.pool_connection_open_count.fetch_add(value, Ordering::SeqCst);
            }
            StatsEvent::PoolConnectionClose => {
                self.pool_connection_close_count.fetch_add(value, Ordering::SeqCst);
            }
            StatsEvent::ResultSetOpen => {
                self.result_set_open_count.fetch_add(value, Ordering::SeqCst);
            }
            StatsEvent::ResultSetClose => {
                self.result_set_close_count.fetch_add(value, Ordering::SeqCst);
            }
        }
    }

    pub fn get_start_millis(&self) -> i64
    {
        self.start_millis
    }

    pub fn get_db_fetch_row_count(&self) -> u64
    {
        self.db_fetch_row_count.load(Ordering::SeqCst)
    }

    pub fn get_db_execute_count(&self) -> u64
    {
        self.db_execute_count.load(Ordering::SeqCst)
    }

    pub fn get_db_execute_error_count(&self) -> u64
    {
        self.db_execute_error_count.load(Ordering::SeqCst)
    }

    pub fn get_db_execute_time_nanos(&self) -> u64
    {
        self.db_execute_time_nanos.load(Ordering::SeqCst)
    }

    pub fn get_db_update_count(&self) -> u64
    {
        self.db_update_count.load(Ordering::SeqCst)
    }

    pub fn get_db_commit_count(&self) -> u64
    {
        self.db_commit_count.load(Ordering::SeqCst)
    }

    pub fn get_db_rollback_count(&self) -> u64
    {
        self.db_rollback_count.load(Ordering::SeqCst)
    }

    pub fn get_pool_connection_open_count(&self) -> u64
    {
        self.pool_connection_open_count.load(Ordering::SeqCst)
    }

    pub fn get_pool_connection_close_count(&self) -> u64
    {
        self.pool_connection_close_count.load(Ordering::SeqCst)
    }

    pub fn get_result_set_open_count(&self) -> u64
    {
        self.result_set_open_count.load(Ordering::SeqCst)
    }

    pub fn get_result_set_close_count(&self) -> u64
    {
        self.result_set_close_count.load(Ordering::SeqCst)
    }
}

impl Default for RequestScopeStat {
    fn default() -> Self
    {
        RequestScopeStat::new()
    }
}
