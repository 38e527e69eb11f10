use super::{CanonicalField, CanonicalRow};
use serde::{Deserialize, Serialize};

/// a delivery stop that may stand for several source rows. `sequence` and
/// `package_code` accumulate the values of every merged row joined by
/// [`GroupedRow::SEPARATOR`], in merge order. every other field belongs to
/// the first row of the group and is never overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedRow {
    pub sequence: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_code: Option<String>,
    pub destination_address: String,
    pub bairro: String,
    pub city: String,
    pub zipcode: String,
    pub latitude: String,
    pub longitude: String,
}

impl GroupedRow {
    pub const SEPARATOR: &str = "; ";

    /// appends the identifiers of another stop at the same drop-off point.
    ///
    /// a group that does not model package codes ignores the merged row's
    /// package code. a group that does model them appends an empty value for
    /// a row without one so both accumulators stay aligned.
    pub fn merge(&mut self, row: &CanonicalRow) {
        self.sequence.push_str(Self::SEPARATOR);
        self.sequence.push_str(&row.sequence);
        if let Some(package_code) = self.package_code.as_mut() {
            package_code.push_str(Self::SEPARATOR);
            package_code.push_str(row.package_code.as_deref().unwrap_or_default());
        }
    }

    pub fn get(&self, field: CanonicalField) -> &str {
        match field {
            CanonicalField::Sequence => &self.sequence,
            CanonicalField::PackageCode => self.package_code.as_deref().unwrap_or_default(),
            CanonicalField::DestinationAddress => &self.destination_address,
            CanonicalField::Bairro => &self.bairro,
            CanonicalField::City => &self.city,
            CanonicalField::Zipcode => &self.zipcode,
            CanonicalField::Latitude => &self.latitude,
            CanonicalField::Longitude => &self.longitude,
        }
    }

    /// the individual sequence values merged into this group.
    pub fn sequences(&self) -> impl Iterator<Item = &str> {
        self.sequence.split(Self::SEPARATOR)
    }
}

impl From<&CanonicalRow> for GroupedRow {
    fn from(row: &CanonicalRow) -> Self {
        GroupedRow {
            sequence: row.sequence.clone(),
            package_code: row.package_code.clone(),
            destination_address: row.destination_address.clone(),
            bairro: row.bairro.clone(),
            city: row.city.clone(),
            zipcode: row.zipcode.clone(),
            latitude: row.latitude.clone(),
            longitude: row.longitude.clone(),
        }
    }
}
