mod pipeline_ops;

pub use pipeline_ops::{process_canonical_rows, process_rows};
