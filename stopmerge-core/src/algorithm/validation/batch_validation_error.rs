use crate::model::CanonicalField;

/// rejection of a whole batch, raised before any grouping happens.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchValidationError {
    #[error("empty batch")]
    EmptyBatch,
    #[error("required field \"{0}\" not found in batch")]
    MissingRequiredField(CanonicalField),
}
