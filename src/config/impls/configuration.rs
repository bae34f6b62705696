use std::fs;
use std::fs::File;
use std::io::Write;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;

impl Configuration {
    pub fn init() -> Configuration
    {
        Configuration {
            log_level: String::from("info"),
            max_endpoint_count: 1000,
            profile_enabled: true,
            prometheus_id: String::from("uristat"),
        }
    }

    pub fn load_from_file(path: &str) -> Result<Configuration, ConfigurationError>
    {
        let data = fs::read_to_string(path)?;
        let config: Configuration = toml::from_str(&data)?;
        Ok(config)
    }

    pub fn save_to_file(path: &str, config: &Configuration) -> Result<(), ConfigurationError>
    {
        let data = toml::to_string_pretty(config)?;
        let mut file = File::create(path)?;
        file.write_all(data.as_bytes())?;
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self
    {
        Configuration::init()
    }
}
