#![allow(dead_code)]
use std::sync::Arc;
use uristat::config::structs::configuration::Configuration;
use uristat::registry::structs::endpoint_registry::EndpointRegistry;
use uristat::stats::enums::stats_event::StatsEvent;
use uristat::stats::structs::endpoint_stat::EndpointStat;

pub type TestRegistry = Arc<EndpointRegistry>;
pub type TestConfig = Arc<Configuration>;

pub fn create_test_config() -> TestConfig {
    Arc::new(Configuration::init())
}

pub fn create_test_config_with_capacity(max_endpoint_count: usize) -> TestConfig {
    let mut config: Configuration = Configuration::init();
    config.max_endpoint_count = max_endpoint_count;
    Arc::new(config)
}

pub fn create_test_registry() -> TestRegistry {
    Arc::new(EndpointRegistry::new(create_test_config()))
}

pub fn create_test_endpoint(uri: &str) -> Arc<EndpointStat> {
    Arc::new(EndpointStat::new(uri))
}

/// Drives one full request lifecycle on the calling thread.
pub fn run_request(endpoint: &Arc<EndpointStat>, events: &[(StatsEvent, u64)], error: bool, nanos: u64) {
    use uristat::stats::structs::request_scope_stat::RequestScopeStat;

    endpoint.clone().before_invoke();
    for (event, value) in events {
        RequestScopeStat::record_current(*event, *value);
    }

    if error {
        let failure = std::io::Error::other("request failed");
        endpoint.after_invoke(Some(&failure), nanos);
    } else {
        endpoint.after_invoke(None, nanos);
    }
}
