use super::GroupingConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// behaviors for grouping one batch of delivery stops
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    /// number of leading characters of the latitude text compared
    pub latitude_precision: usize,
    /// number of leading characters of the longitude text compared
    pub longitude_precision: usize,
    /// when false, every row is emitted as its own group
    pub group_by_coordinates: bool,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            latitude_precision: Self::DEFAULT_PRECISION,
            longitude_precision: Self::DEFAULT_PRECISION,
            group_by_coordinates: true,
        }
    }
}

impl GroupingConfig {
    pub const DEFAULT_PRECISION: usize = 7;

    /// prefix for environment variables overriding file values, e.g.
    /// `STOPMERGE_LATITUDE_PRECISION=6`.
    pub const ENV_PREFIX: &str = "STOPMERGE";

    /// reads a `.toml` or `.json` configuration file. keys missing from the
    /// file keep their defaults, and `STOPMERGE_*` environment variables take
    /// precedence over the file.
    pub fn from_file(filepath: &Path) -> Result<Self, GroupingConfigError> {
        let format = match filepath.extension().and_then(|e| e.to_str()) {
            Some("toml") => config::FileFormat::Toml,
            Some("json") => config::FileFormat::Json,
            _ => {
                return Err(GroupingConfigError::UnsupportedFileType(
                    filepath.display().to_string(),
                ))
            }
        };
        let file = config::File::from(filepath).format(format);
        Self::build(Some(file))
    }

    /// defaults layered with `STOPMERGE_*` environment overrides
    pub fn from_env() -> Result<Self, GroupingConfigError> {
        Self::build(None)
    }

    fn build(
        file: Option<config::File<config::FileSourceFile, config::FileFormat>>,
    ) -> Result<Self, GroupingConfigError> {
        let source_name = match file {
            Some(_) => "configuration file",
            None => "environment",
        };
        let mut builder = config::Config::builder();
        if let Some(f) = file {
            builder = builder.add_source(f);
        }
        let config = builder
            .add_source(config::Environment::with_prefix(Self::ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| GroupingConfigError::ConfigReadError {
                msg: format!("failed reading grouping {source_name}"),
                source: e,
            })?;
        config
            .try_deserialize::<GroupingConfig>()
            .map_err(|e| GroupingConfigError::ConfigReadError {
                msg: format!("failed decoding grouping {source_name}"),
                source: e,
            })
    }
}
