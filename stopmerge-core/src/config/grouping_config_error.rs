#[derive(thiserror::Error, Debug)]
pub enum GroupingConfigError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("unsupported configuration file type: {0}")]
    UnsupportedFileType(String),
}
