mod field_alias;
mod normalize_ops;

pub use field_alias::{aliases, FIELD_ALIASES};
pub use normalize_ops::{normalize_row, normalize_rows};
