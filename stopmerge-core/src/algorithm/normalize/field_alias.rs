use crate::model::CanonicalField;

/// accepted header spellings for each canonical field, in lookup priority.
///
/// the trailing spellings of several fields are the export headers, so a
/// sheet written by this crate reads back into the same canonical rows.
pub const FIELD_ALIASES: [(CanonicalField, &[&str]); 8] = [
    (
        CanonicalField::Sequence,
        &["Sequence", "sequence", "Sequencia", "Sequência"],
    ),
    (
        CanonicalField::PackageCode,
        &["Package Code", "PackageCode", "packageCode", "Código do Pacote"],
    ),
    (
        CanonicalField::DestinationAddress,
        &["Destination Address", "destinationAddress", "Endereço"],
    ),
    (CanonicalField::Bairro, &["Bairro", "bairro"]),
    (CanonicalField::City, &["City", "city", "Cidade"]),
    (
        CanonicalField::Zipcode,
        &["Zipcode/Postal code", "Zipcode", "zipcode", "CEP"],
    ),
    (CanonicalField::Latitude, &["Latitude", "latitude"]),
    (CanonicalField::Longitude, &["Longitude", "longitude"]),
];

pub fn aliases(field: CanonicalField) -> &'static [&'static str] {
    FIELD_ALIASES
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, a)| *a)
        .unwrap_or_default()
}
