mod grouping_config;
mod grouping_config_error;

pub use grouping_config::GroupingConfig;
pub use grouping_config_error::GroupingConfigError;
