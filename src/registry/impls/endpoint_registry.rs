use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use crossbeam_skiplist::SkipMap;
use log::warn;
use serde_json::{Map, Value};
use crate::config::structs::configuration::Configuration;
use crate::registry::structs::endpoint_registry::EndpointRegistry;
use crate::stats::structs::endpoint_stat::EndpointStat;
use crate::stats::structs::profile_stat::ProfileEntryKey;

impl EndpointRegistry {
    pub fn new(config: Arc<Configuration>) -> EndpointRegistry
    {
        EndpointRegistry {
            config,
            endpoints: SkipMap::new(),
            overflow_count: AtomicU64::new(0),
        }
    }

    pub fn get(&self, uri: &str) -> Option<Arc<EndpointStat>>
    {
        self.endpoints.get(uri).map(|entry| entry.value().clone())
    }

    /// Resolves the stat block for `uri`, creating it on first sight.
    ///
    /// Returns `None` when the registry already holds `max_endpoint_count`
    /// entries and the URI is not among them. Concurrent first requests for
    /// the same unseen URI all receive the same created instance.
    pub fn get_or_create(&self, uri: &str) -> Option<Arc<EndpointStat>>
    {
        if let Some(entry) = self.endpoints.get(uri) {
            return Some(entry.value().clone());
        }

        // The size check walks the list, but this path only runs for URIs
        // that are not yet tracked. The bound can be overshot by concurrent
        // creations of distinct URIs; it is a cap on growth, not an exact
        // ceiling.
        if self.endpoints.len() >= self.config.max_endpoint_count {
            self.overflow_count.fetch_add(1, Ordering::SeqCst);
            warn!("endpoint registry at maximum capacity: {} entries, dropping {}", self.config.max_endpoint_count, uri);
            return None;
        }

        let entry = self.endpoints.get_or_insert_with(uri.to_string(), || Arc::new(EndpointStat::new(uri)));
        Some(entry.value().clone())
    }

    pub fn remove(&self, uri: &str) -> bool
    {
        self.endpoints.remove(uri).is_some()
    }

    pub fn len(&self) -> usize
    {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.endpoints.is_empty()
    }

    pub fn clear(&self)
    {
        while self.endpoints.pop_front().is_some() {}
    }

    pub fn get_overflow_count(&self) -> u64
    {
        self.overflow_count.load(Ordering::SeqCst)
    }

    /// Records a profiled sub-operation against the endpoint serving the
    /// current request.
    ///
    /// Nothing is recorded when profiling is disabled or when no request is
    /// active on the calling thread.
    pub fn record_profile(&self, key: ProfileEntryKey, nanos: u64)
    {
        if !self.config.profile_enabled {
            return;
        }

        if let Some(endpoint) = EndpointStat::current() {
            endpoint.profile().record(key, nanos);
        }
    }

    /// Ordered stat map for every tracked endpoint, sorted by URI.
    pub fn get_stats_data(&self) -> Vec<Map<String, Value>>
    {
        self.endpoints.iter().map(|entry| entry.value().get_stats_data()).collect()
    }

    /// Prometheus plaintext exposition of every tracked endpoint.
    pub fn get_stats_prometheus(&self) -> String
    {
        let id = &self.config.prometheus_id;
        let mut string_output = String::with_capacity(4096);
        let mut first = true;

        for entry in self.endpoints.iter() {
            let stats = entry.value().get_stats();
            let uri = stats.uri.as_str();

            string_output.push_str(&prom_generate_line(id, "gauge", "running_count", uri, stats.running_count, first, Some(&format!("{id} gauge metrics"))));
            string_output.push_str(&prom_generate_line(id, "gauge", "concurrent_max", uri, stats.concurrent_max, false, None));

            string_output.push_str(&prom_generate_line(id, "counter", "request_count", uri, stats.request_count, first, Some(&format!("{id} counter metrics"))));
            string_output.push_str(&prom_generate_line(id, "counter", "request_time_millis", uri, stats.request_time_nanos / 1_000_000, false, None));
            string_output.push_str(&prom_generate_line(id, "counter", "error_count", uri, stats.error_count, false, None));
            string_output.push_str(&prom_generate_line(id, "counter", "db_fetch_row_count", uri, stats.db_fetch_row_count, false, None));
            string_output.push_str(&prom_generate_line(id, "counter", "db_execute_count", uri, stats.db_execute_count, false, None));
            string_output.push_str(&prom_generate_line(id, "counter", "db_execute_error_count", uri, stats.db_execute_error_count, false, None));
            string_output.push_str(&prom_generate_line(id, "counter", "db_update_count", uri, stats.db_update_count, false, None));
            string_output.push_str(&prom_generate_line(id, "counter", "db_commit_count", uri, stats.db_commit_count, false, None));
            string_output.push_str(&prom_generate_line(id, "counter", "db_rollback_count", uri, stats.db_rollback_count, false, None));
            string_output.push_str(&prom_generate_line(id, "counter", "pool_connection_open_count", uri, stats.pool_connection_open_count, false, None));
            string_output.push_str(&prom_generate_line(id, "counter", "pool_connection_close_count", uri, stats.pool_connection_close_count, false, None));
            string_output.push_str(&prom_generate_line(id, "counter", "result_set_open_count", uri, stats.result_set_open_count, false, None));
            string_output.push_str(&prom_generate_line(id, "counter", "result_set_close_count", uri, stats.result_set_close_count, false, None));

            string_output.push_str(&prom_generate_line(id, "gauge", "db_fetch_row_peak", uri, stats.db_fetch_row_peak, false, None));
            string_output.push_str(&prom_generate_line(id, "gauge", "db_execute_peak", uri, stats.db_execute_peak, false, None));
            string_output.push_str(&prom_generate_line(id, "gauge", "db_update_peak", uri, stats.db_update_peak, false, None));

            first = false;
        }

        string_output
    }
}

pub fn prom_generate_line(id: &str, type_metric: &str, metric: &str, uri: &str, value: impl std::fmt::Display, with_header: bool, description: Option<&str>) -> String
{
    if with_header {
        format!(
            "# HELP {}_{} {}\n# TYPE {}_{} {}\n{}_{}{{metric=\"{}\",uri=\"{}\"}} {}\n",
            id, type_metric, description.unwrap_or(""),
            id, type_metric, type_metric,
            id, type_metric, metric, uri, value
        )
    } else {
        format!("{id}_{type_metric}{{metric=\"{metric}\",uri=\"{uri}\"}} {value}\n")
    }
}
