#[cfg(test)]
mod stats_tests {
    mod stats_event_tests {
        use crate::stats::enums::stats_event::StatsEvent;

        #[test]
        fn test_stats_event_serialization() {
            let event = StatsEvent::FetchRow;
            let serialized = serde_json::to_string(&event).unwrap();
            assert_eq!(serialized, "\"FetchRow\"");
        }

        #[test]
        fn test_stats_event_deserialization() {
            let event: StatsEvent = serde_json::from_str("\"PoolConnectionOpen\"").unwrap();
            assert_eq!(event, StatsEvent::PoolConnectionOpen);
        }

        #[test]
        fn test_stats_event_copy() {
            let event = StatsEvent::Commit;
            let copied = event;
            assert_eq!(event, copied);
        }

        #[test]
        fn test_stats_event_debug() {
            let debug_str = format!("{:?}", StatsEvent::ResultSetClose);
            assert_eq!(debug_str, "ResultSetClose");
        }
    }

    mod request_scope_stat_tests {
        use crate::stats::enums::stats_event::StatsEvent;
        use crate::stats::structs::request_scope_stat::RequestScopeStat;

        #[test]
        fn test_new_scope_is_zeroed() {
            let scope = RequestScopeStat::new();
            assert_eq!(scope.get_db_fetch_row_count(), 0);
            assert_eq!(scope.get_db_execute_count(), 0);
            assert_eq!(scope.get_db_execute_error_count(), 0);
            assert_eq!(scope.get_db_execute_time_nanos(), 0);
            assert_eq!(scope.get_db_update_count(), 0);
            assert_eq!(scope.get_db_commit_count(), 0);
            assert_eq!(scope.get_db_rollback_count(), 0);
            assert_eq!(scope.get_pool_connection_open_count(), 0);
            assert_eq!(scope.get_pool_connection_close_count(), 0);
            assert_eq!(scope.get_result_set_open_count(), 0);
            assert_eq!(scope.get_result_set_close_count(), 0);
        }

        #[test]
        fn test_new_scope_has_start_timestamp() {
            let scope = RequestScopeStat::new();
            assert!(scope.get_start_millis() > 1_577_836_800_000, "Start should be a live wall-clock value");
        }

        #[test]
        fn test_record_dispatches_to_the_right_counter() {
            let scope = RequestScopeStat::new();

            scope.record(StatsEvent::FetchRow, 25);
            scope.record(StatsEvent::Execute, 3);
            scope.record(StatsEvent::ExecuteError, 1);
            scope.record(StatsEvent::ExecuteTime, 9_000);
            scope.record(StatsEvent::Update, 4);
            scope.record(StatsEvent::Commit, 2);
            scope.record(StatsEvent::Rollback, 1);
            scope.record(StatsEvent::PoolConnectionOpen, 2);
            scope.record(StatsEvent::PoolConnectionClose, 2);
            scope.record(StatsEvent::ResultSetOpen, 5);
            scope.record(StatsEvent::ResultSetClose, 5);

            assert_eq!(scope.get_db_fetch_row_count(), 25);
            assert_eq!(scope.get_db_execute_count(), 3);
            assert_eq!(scope.get_db_execute_error_count(), 1);
            assert_eq!(scope.get_db_execute_time_nanos(), 9_000);
            assert_eq!(scope.get_db_update_count(), 4);
            assert_eq!(scope.get_db_commit_count(), 2);
            assert_eq!(scope.get_db_rollback_count(), 1);
            assert_eq!(scope.get_pool_connection_open_count(), 2);
            assert_eq!(scope.get_pool_connection_close_count(), 2);
            assert_eq!(scope.get_result_set_open_count(), 5);
            assert_eq!(scope.get_result_set_close_count(), 5);
        }

        #[test]
        fn test_record_accumulates() {
            let scope = RequestScopeStat::new();
            scope.record(StatsEvent::FetchRow, 10);
            scope.record(StatsEvent::FetchRow, 15);
            assert_eq!(scope.get_db_fetch_row_count(), 25);
        }

        #[test]
        fn test_current_is_absent_outside_requests() {
            assert!(RequestScopeStat::current().is_none());
        }

        #[test]
        fn test_record_current_without_binding_is_a_noop() {
            // Must not panic when no request is active on this thread.
            RequestScopeStat::record_current(StatsEvent::Execute, 1);
            assert!(RequestScopeStat::current().is_none());
        }

        #[test]
        fn test_set_take_current_round_trip() {
            use std::sync::Arc;

            let scope = Arc::new(RequestScopeStat::new());
            RequestScopeStat::set_current(scope.clone());

            let bound = RequestScopeStat::current().unwrap();
            assert!(Arc::ptr_eq(&scope, &bound));

            let taken = RequestScopeStat::take_current().unwrap();
            assert!(Arc::ptr_eq(&scope, &taken));
            assert!(RequestScopeStat::current().is_none());
        }

        #[test]
        fn test_record_current_hits_the_bound_scope() {
            use std::sync::Arc;

            let scope = Arc::new(RequestScopeStat::new());
            RequestScopeStat::set_current(scope.clone());

            RequestScopeStat::record_current(StatsEvent::Update, 7);
            assert_eq!(scope.get_db_update_count(), 7);

            RequestScopeStat::clear_current();
        }
    }

    mod endpoint_stat_tests {
        use std::sync::Arc;
        use crate::stats::enums::stats_event::StatsEvent;
        use crate::stats::structs::endpoint_stat::EndpointStat;
        use crate::stats::structs::request_scope_stat::RequestScopeStat;

        #[test]
        fn test_new_endpoint_is_zeroed() {
            let endpoint = EndpointStat::new("/api/users");
            assert_eq!(endpoint.get_uri(), "/api/users");
            assert_eq!(endpoint.get_running_count(), 0);
            assert_eq!(endpoint.get_concurrent_max(), 0);
            assert_eq!(endpoint.get_request_count(), 0);
            assert_eq!(endpoint.get_error_count(), 0);
            assert_eq!(endpoint.get_last_access_time_millis(), -1);
            assert!(endpoint.get_last_access_time().is_none());
        }

        #[test]
        fn test_single_request_lifecycle() {
            let endpoint = Arc::new(EndpointStat::new("/api/users"));

            endpoint.clone().before_invoke();
            assert_eq!(endpoint.get_running_count(), 1);
            assert_eq!(endpoint.get_concurrent_max(), 1);
            assert_eq!(endpoint.get_request_count(), 1);
            assert!(endpoint.get_last_access_time_millis() > 0);
            assert!(EndpointStat::current().is_some());
            assert!(RequestScopeStat::current().is_some());

            endpoint.after_invoke(None, 2_000_000);
            assert_eq!(endpoint.get_running_count(), 0);
            assert_eq!(endpoint.get_request_time_nanos(), 2_000_000);
            assert_eq!(endpoint.get_request_time_millis(), 2);
            assert!(EndpointStat::current().is_none());
            assert!(RequestScopeStat::current().is_none());
        }

        #[test]
        fn test_before_invoke_returns_the_bound_scope() {
            let endpoint = Arc::new(EndpointStat::new("/api/users"));
            let scope = endpoint.clone().before_invoke();
            let bound = RequestScopeStat::current().unwrap();
            assert!(Arc::ptr_eq(&scope, &bound));
            endpoint.after_invoke(None, 1);
        }

        #[test]
        fn test_error_is_counted() {
            let endpoint = Arc::new(EndpointStat::new("/api/users"));

            endpoint.clone().before_invoke();
            let error = std::io::Error::other("boom");
            endpoint.after_invoke(Some(&error), 1_000);

            assert_eq!(endpoint.get_error_count(), 1);
            assert_eq!(endpoint.get_request_count(), 1);
        }

        #[test]
        fn test_request_scope_is_merged_on_completion() {
            let endpoint = Arc::new(EndpointStat::new("/api/users"));

            endpoint.clone().before_invoke();
            RequestScopeStat::record_current(StatsEvent::FetchRow, 50);
            RequestScopeStat::record_current(StatsEvent::Execute, 3);
            RequestScopeStat::record_current(StatsEvent::ExecuteTime, 7_000_000);
            RequestScopeStat::record_current(StatsEvent::PoolConnectionOpen, 1);
            RequestScopeStat::record_current(StatsEvent::PoolConnectionClose, 1);
            endpoint.after_invoke(None, 9_000_000);

            assert_eq!(endpoint.get_db_fetch_row_count(), 50);
            assert_eq!(endpoint.get_db_fetch_row_peak(), 50);
            assert_eq!(endpoint.get_db_execute_count(), 3);
            assert_eq!(endpoint.get_db_execute_peak(), 3);
            assert_eq!(endpoint.get_db_execute_time_nanos(), 7_000_000);
            assert_eq!(endpoint.get_pool_connection_open_count(), 1);
            assert_eq!(endpoint.get_pool_connection_close_count(), 1);
        }

        #[test]
        fn test_peaks_do_not_regress_on_smaller_requests() {
            let endpoint = Arc::new(EndpointStat::new("/api/users"));

            let first = RequestScopeStat::new();
            first.record(StatsEvent::FetchRow, 12);
            endpoint.merge(&first);

            let second = RequestScopeStat::new();
            second.record(StatsEvent::FetchRow, 5);
            endpoint.merge(&second);

            assert_eq!(endpoint.get_db_fetch_row_count(), 17, "Counts accumulate");
            assert_eq!(endpoint.get_db_fetch_row_peak(), 12, "Peak keeps the larger request");
        }

        #[test]
        fn test_cumulative_counts_are_exactly_additive() {
            let endpoint = Arc::new(EndpointStat::new("/api/users"));

            for executes in [3u64, 7, 2] {
                let scope = RequestScopeStat::new();
                scope.record(StatsEvent::Execute, executes);
                endpoint.merge(&scope);
            }

            assert_eq!(endpoint.get_db_execute_count(), 12);
            assert_eq!(endpoint.get_db_execute_peak(), 7);
        }

        #[test]
        fn test_after_invoke_without_scope_touches_no_resource_counter() {
            let endpoint = Arc::new(EndpointStat::new("/api/users"));
            RequestScopeStat::clear_current();

            let error = std::io::Error::other("boom");
            endpoint.after_invoke(Some(&error), 5_000);

            assert_eq!(endpoint.get_request_time_nanos(), 5_000);
            assert_eq!(endpoint.get_error_count(), 1);
            assert_eq!(endpoint.get_db_fetch_row_count(), 0);
            assert_eq!(endpoint.get_db_execute_count(), 0);
            assert_eq!(endpoint.get_db_update_count(), 0);
            assert_eq!(endpoint.get_pool_connection_open_count(), 0);
            assert_eq!(endpoint.get_result_set_open_count(), 0);
        }

        #[test]
        fn test_direct_increment_operations() {
            let endpoint = EndpointStat::new("/api/users");

            endpoint.increment_db_execute_count();
            endpoint.add_db_execute_count(2);
            endpoint.increment_db_commit_count();
            endpoint.increment_db_rollback_count();
            endpoint.add_db_fetch_row_count(40);
            endpoint.add_db_update_count(6);
            endpoint.increment_pool_connection_open_count();
            endpoint.increment_pool_connection_close_count();
            endpoint.add_result_set_open_count(3);
            endpoint.add_result_set_close_count(3);

            assert_eq!(endpoint.get_db_execute_count(), 3);
            assert_eq!(endpoint.get_db_commit_count(), 1);
            assert_eq!(endpoint.get_db_rollback_count(), 1);
            assert_eq!(endpoint.get_db_fetch_row_count(), 40);
            assert_eq!(endpoint.get_db_update_count(), 6);
            assert_eq!(endpoint.get_pool_connection_open_count(), 1);
            assert_eq!(endpoint.get_pool_connection_close_count(), 1);
            assert_eq!(endpoint.get_result_set_open_count(), 3);
            assert_eq!(endpoint.get_result_set_close_count(), 3);
        }

        #[test]
        fn test_last_access_tracks_request_start() {
            let endpoint = Arc::new(EndpointStat::new("/api/users"));

            let scope = endpoint.clone().before_invoke();
            assert_eq!(endpoint.get_last_access_time_millis(), scope.get_start_millis());
            endpoint.after_invoke(None, 1);
            assert_eq!(endpoint.get_last_access_time_millis(), scope.get_start_millis());
        }
    }

    mod request_guard_tests {
        use std::sync::Arc;
        use crate::stats::enums::stats_event::StatsEvent;
        use crate::stats::structs::endpoint_stat::EndpointStat;
        use crate::stats::structs::request_scope_stat::RequestScopeStat;

        #[test]
        fn test_guard_completes_the_lifecycle() {
            let endpoint = Arc::new(EndpointStat::new("/api/orders"));

            let guard = endpoint.clone().begin_request();
            assert_eq!(endpoint.get_running_count(), 1);
            RequestScopeStat::record_current(StatsEvent::FetchRow, 9);
            guard.complete(None);

            assert_eq!(endpoint.get_running_count(), 0);
            assert_eq!(endpoint.get_request_count(), 1);
            assert_eq!(endpoint.get_db_fetch_row_count(), 9);
            assert!(RequestScopeStat::current().is_none());
        }

        #[test]
        fn test_guard_reports_errors() {
            let endpoint = Arc::new(EndpointStat::new("/api/orders"));

            let guard = endpoint.clone().begin_request();
            let error = std::io::Error::other("boom");
            guard.complete(Some(&error));

            assert_eq!(endpoint.get_error_count(), 1);
        }

        #[test]
        fn test_dropped_guard_still_pairs_the_lifecycle() {
            let endpoint = Arc::new(EndpointStat::new("/api/orders"));

            {
                let _guard = endpoint.clone().begin_request();
                assert_eq!(endpoint.get_running_count(), 1);
            }

            assert_eq!(endpoint.get_running_count(), 0, "Drop must release the in-flight slot");
            assert!(RequestScopeStat::current().is_none(), "Drop must release the binding");
        }
    }

    mod profile_stat_tests {
        use crate::stats::structs::endpoint_stat::EndpointStat;
        use crate::stats::structs::profile_stat::{ProfileEntryKey, ProfileStat};

        fn key(name: &str) -> ProfileEntryKey {
            ProfileEntryKey {
                parent: None,
                name: name.to_string(),
                category: String::from("sql"),
            }
        }

        #[test]
        fn test_profile_is_created_once() {
            let endpoint = EndpointStat::new("/api/users");
            let first = endpoint.profile() as *const ProfileStat;
            let second = endpoint.profile() as *const ProfileStat;
            assert_eq!(first, second, "Profile identity is fixed after first access");
        }

        #[test]
        fn test_record_accumulates_per_key() {
            let profile = ProfileStat::new();
            profile.record(key("select users"), 3_000_000);
            profile.record(key("select users"), 1_000_000);
            profile.record(key("select orders"), 2_000_000);

            assert_eq!(profile.len(), 2);
            let entry = profile.get(&key("select users")).unwrap();
            assert_eq!(entry.get_execute_count(), 2);
            assert_eq!(entry.get_execute_time_nanos(), 4_000_000);
        }

        #[test]
        fn test_empty_profile() {
            let profile = ProfileStat::new();
            assert!(profile.is_empty());
            assert!(profile.get_stats_data().is_empty());
        }

        #[test]
        fn test_stats_data_contains_entry_fields() {
            let profile = ProfileStat::new();
            profile.record(key("select users"), 5_000_000);

            let data = profile.get_stats_data();
            assert_eq!(data.len(), 1);
            let item = data[0].as_object().unwrap();
            assert_eq!(item.get("Name").unwrap(), "select users");
            assert_eq!(item.get("Category").unwrap(), "sql");
            assert_eq!(item.get("ExecuteCount").unwrap(), 1);
            assert_eq!(item.get("ExecuteTimeMillis").unwrap(), 5);
        }
    }

    mod snapshot_tests {
        use std::sync::Arc;
        use crate::stats::enums::stats_event::StatsEvent;
        use crate::stats::structs::endpoint_stat::EndpointStat;
        use crate::stats::structs::request_scope_stat::RequestScopeStat;

        #[test]
        fn test_get_stats_reflects_counters() {
            let endpoint = Arc::new(EndpointStat::new("/api/users"));

            endpoint.clone().before_invoke();
            RequestScopeStat::record_current(StatsEvent::FetchRow, 80);
            endpoint.after_invoke(None, 4_000_000);

            let stats = endpoint.get_stats();
            assert_eq!(stats.uri, "/api/users");
            assert_eq!(stats.running_count, 0);
            assert_eq!(stats.concurrent_max, 1);
            assert_eq!(stats.request_count, 1);
            assert_eq!(stats.request_time_nanos, 4_000_000);
            assert_eq!(stats.db_fetch_row_count, 80);
            assert_eq!(stats.db_fetch_row_peak, 80);
        }

        #[test]
        fn test_get_stats_serializes() {
            let endpoint = EndpointStat::new("/api/users");
            let serialized = serde_json::to_string(&endpoint.get_stats()).unwrap();
            assert!(serialized.contains("\"uri\":\"/api/users\""));
        }

        #[test]
        fn test_stats_data_key_order_is_stable() {
            let endpoint = EndpointStat::new("/api/users");
            let data = endpoint.get_stats_data();

            let keys: Vec<&String> = data.keys().collect();
            assert_eq!(keys.first().unwrap().as_str(), "Uri");
            assert_eq!(keys.last().unwrap().as_str(), "Profiles");

            let running_position = keys.iter().position(|k| k.as_str() == "RunningCount").unwrap();
            let fetch_position = keys.iter().position(|k| k.as_str() == "DbFetchRowCount").unwrap();
            assert!(running_position < fetch_position, "Request metrics come before resource metrics");
        }

        #[test]
        fn test_stats_data_reports_never_accessed_as_null() {
            let endpoint = EndpointStat::new("/api/users");
            let data = endpoint.get_stats_data();
            assert!(data.get("LastAccessTime").unwrap().is_null());
        }

        #[test]
        fn test_stats_data_contains_every_metric() {
            let endpoint = EndpointStat::new("/api/users");
            let data = endpoint.get_stats_data();

            for key in [
                "Uri", "RunningCount", "ConcurrentMax", "RequestCount", "RequestTimeMillis",
                "ErrorCount", "LastAccessTime", "DbCommitCount", "DbRollbackCount",
                "DbExecuteCount", "DbExecuteErrorCount", "DbExecutePeak", "DbExecuteTimeMillis",
                "DbFetchRowCount", "DbFetchRowPeak", "DbUpdateCount", "DbUpdatePeak",
                "PoolConnectionOpenCount", "PoolConnectionCloseCount",
                "ResultSetOpenCount", "ResultSetCloseCount", "Profiles",
            ] {
                assert!(data.contains_key(key), "Missing metric key: {}", key);
            }
        }
    }
}
