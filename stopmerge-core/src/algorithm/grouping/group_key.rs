use super::address_number::extract_address_number;
use crate::{config::GroupingConfig, model::CanonicalRow};
use std::fmt::Display;

/// identity of a physical drop-off point: `<lat prefix>_<lon prefix>_<number>`.
/// rows with byte-equal keys are merged. the address number may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey(String);

impl GroupKey {
    pub fn new(latitude_key: &str, longitude_key: &str, address_number: &str) -> Self {
        GroupKey(format!("{latitude_key}_{longitude_key}_{address_number}"))
    }

    pub fn from_row(row: &CanonicalRow, config: &GroupingConfig) -> Self {
        GroupKey::new(
            coordinate_prefix(&row.latitude, config.latitude_precision),
            coordinate_prefix(&row.longitude, config.longitude_precision),
            extract_address_number(&row.destination_address),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// the first `precision` characters of a coordinate string, or the whole
/// string when it is shorter. this is a textual prefix, not a numeric
/// rounding: "23.5500000" and "23.55" differ at precision 7.
pub fn coordinate_prefix(coordinate: &str, precision: usize) -> &str {
    match coordinate.char_indices().nth(precision) {
        Some((end, _)) => &coordinate[..end],
        None => coordinate,
    }
}
