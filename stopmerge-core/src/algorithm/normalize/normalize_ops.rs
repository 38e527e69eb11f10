use super::field_alias::aliases;
use crate::model::{CanonicalField, CanonicalRow, RawRow};

/// maps raw rows onto canonical rows, preserving order and length.
pub fn normalize_rows(rows: &[RawRow]) -> Vec<CanonicalRow> {
    rows.iter().map(normalize_row).collect()
}

/// maps one raw row onto the canonical shape. fields with no matching
/// header become empty strings; this never fails.
pub fn normalize_row(row: &RawRow) -> CanonicalRow {
    CanonicalRow {
        sequence: lookup(row, CanonicalField::Sequence),
        package_code: lookup_optional(row, CanonicalField::PackageCode),
        destination_address: lookup(row, CanonicalField::DestinationAddress),
        bairro: lookup(row, CanonicalField::Bairro),
        city: lookup(row, CanonicalField::City),
        zipcode: lookup(row, CanonicalField::Zipcode),
        latitude: lookup(row, CanonicalField::Latitude),
        longitude: lookup(row, CanonicalField::Longitude),
    }
}

/// value of the first alias header holding a non-empty cell. an empty cell
/// under a higher-priority header falls through to the next spelling; a
/// `0` or `false` cell is a value and does not.
fn lookup(row: &RawRow, field: CanonicalField) -> String {
    aliases(field)
        .iter()
        .filter_map(|header| row.get(header))
        .map(|cell| cell.to_cell_string())
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

/// like [`lookup`], but `None` when the row has none of the alias headers.
fn lookup_optional(row: &RawRow, field: CanonicalField) -> Option<String> {
    let modeled = aliases(field).iter().any(|h| row.contains_header(h));
    if modeled {
        Some(lookup(row, field))
    } else {
        None
    }
}
