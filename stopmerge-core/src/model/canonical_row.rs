use super::CanonicalField;
use serde::{Deserialize, Serialize};

/// a delivery stop with every field present, possibly as an empty string.
///
/// coordinates are kept as the source text rather than parsed numbers so
/// that grouping compares exact source precision and re-serialization does
/// not reformat them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRow {
    pub sequence: String,
    /// `None` when the source sheet has no package code column at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_code: Option<String>,
    pub destination_address: String,
    pub bairro: String,
    pub city: String,
    pub zipcode: String,
    pub latitude: String,
    pub longitude: String,
}

impl CanonicalRow {
    /// the text value of a field. a missing package code reads as empty.
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

    /// the first required field that is empty on this row, if any.
    pub fn first_missing_required_field(&self) -> Option<CanonicalField> {
        CanonicalField::REQUIRED
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }
}
