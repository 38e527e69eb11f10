use crate::io::SheetIoError;
use stopmerge_core::{algorithm::validation::BatchValidationError, config::GroupingConfigError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StopMergeAppError {
    #[error("failure reading run configuration: {source}")]
    ConfigurationError {
        #[from]
        source: GroupingConfigError,
    },
    #[error("{source}")]
    SheetError {
        #[from]
        source: SheetIoError,
    },
    #[error("sheet rejected: {source}")]
    ValidationError {
        #[from]
        source: BatchValidationError,
    },
    #[error("failure writing summary '{filepath}': {error}")]
    SummaryWriteError { filepath: String, error: String },
    #[error("failure building thread pool: {0}")]
    ThreadPoolError(String),
    #[error("failure reading directory: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("{0}")]
    BatchError(String),
}
