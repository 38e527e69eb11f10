use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the fields of a [`super::CanonicalRow`], in export column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalField {
    Sequence,
    PackageCode,
    DestinationAddress,
    Bairro,
    City,
    Zipcode,
    Latitude,
    Longitude,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 8] = [
        CanonicalField::Sequence,
        CanonicalField::PackageCode,
        CanonicalField::DestinationAddress,
        CanonicalField::Bairro,
        CanonicalField::City,
        CanonicalField::Zipcode,
        CanonicalField::Latitude,
        CanonicalField::Longitude,
    ];

    /// fields that must be non-empty for a batch to be accepted, in the
    /// order they are checked.
    pub const REQUIRED: [CanonicalField; 3] = [
        CanonicalField::Latitude,
        CanonicalField::Longitude,
        CanonicalField::DestinationAddress,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::Sequence => "sequence",
            CanonicalField::PackageCode => "packageCode",
            CanonicalField::DestinationAddress => "destinationAddress",
            CanonicalField::Bairro => "bairro",
            CanonicalField::City => "city",
            CanonicalField::Zipcode => "zipcode",
            CanonicalField::Latitude => "latitude",
            CanonicalField::Longitude => "longitude",
        }
    }
}

impl Display for CanonicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
