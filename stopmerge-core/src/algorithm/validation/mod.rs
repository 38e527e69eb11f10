mod batch_validation_error;
mod validation_ops;

pub use batch_validation_error::BatchValidationError;
pub use validation_ops::{count_incomplete_rows, validate_batch};
