use serde::{Deserialize, Serialize};

/// Engine configuration, loaded from a flat TOML file.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub max_endpoint_count: usize,
    pub profile_enabled: bool,
    pub prometheus_id: String,
}
