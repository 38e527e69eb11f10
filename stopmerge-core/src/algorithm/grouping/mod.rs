mod address_number;
mod group_key;
mod grouping_ops;

pub use address_number::extract_address_number;
pub use group_key::{coordinate_prefix, GroupKey};
pub use grouping_ops::{group_by_coordinates, ungrouped};
