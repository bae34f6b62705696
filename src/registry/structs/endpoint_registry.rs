use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use crossbeam_skiplist::SkipMap;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::endpoint_stat::EndpointStat;

/// Process-wide, capacity-bounded map from URI to its shared stat block.
pub struct EndpointRegistry {
    pub config: Arc<Configuration>,
    pub endpoints: SkipMap<String, Arc<EndpointStat>>,
    pub overflow_count: AtomicU64,
}
