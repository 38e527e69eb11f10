use super::{CanonicalField, GroupedRow};
use serde::{Deserialize, Serialize};

/// declared header sets for writing grouped rows back to a sheet. the column
/// order is the same for every schema; only the header text differs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportSchema {
    /// headers matching the input sheet spellings
    #[default]
    Source,
    /// Portuguese headers. an empty sequence exports as its 1-based row number.
    Localized,
}

/// a header row plus one string record per grouped row, ready for any
/// tabular writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl ExportSchema {
    pub fn header(&self, field: CanonicalField) -> &'static str {
        use CanonicalField as F;
        match self {
            ExportSchema::Source => match field {
                F::Sequence => "Sequencia",
                F::PackageCode => "Package Code",
                F::DestinationAddress => "Destination Address",
                F::Bairro => "Bairro",
                F::City => "City",
                F::Zipcode => "Zipcode/Postal code",
                F::Latitude => "Latitude",
                F::Longitude => "Longitude",
            },
            ExportSchema::Localized => match field {
                F::Sequence => "Sequência",
                F::PackageCode => "Código do Pacote",
                F::DestinationAddress => "Endereço",
                F::Bairro => "Bairro",
                F::City => "Cidade",
                F::Zipcode => "CEP",
                F::Latitude => "Latitude",
                F::Longitude => "Longitude",
            },
        }
    }

    /// export columns in order. the package code column is only present
    /// when requested.
    pub fn columns(include_package_code: bool) -> Vec<CanonicalField> {
        CanonicalField::ALL
            .into_iter()
            .filter(|f| include_package_code || *f != CanonicalField::PackageCode)
            .collect()
    }

    /// lays out grouped rows under this schema. the package code column is
    /// included when at least one row models a package code.
    pub fn tabulate(&self, rows: &[GroupedRow]) -> ExportTable {
        let include_package_code = rows.iter().any(|r| r.package_code.is_some());
        let columns = Self::columns(include_package_code);
        let headers = columns
            .iter()
            .map(|f| self.header(*f).to_string())
            .collect();
        let records = rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                columns
                    .iter()
                    .map(|field| self.cell(index, row, *field))
                    .collect()
            })
            .collect();
        ExportTable { headers, records }
    }

    fn cell(&self, index: usize, row: &GroupedRow, field: CanonicalField) -> String {
        match (self, field) {
            (ExportSchema::Localized, CanonicalField::Sequence) if row.sequence.is_empty() => {
                (index + 1).to_string()
            }
            _ => row.get(field).to_string(),
        }
    }
}
