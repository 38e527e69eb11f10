use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use stopmerge_core::model::ExportSchema;

/// header set used for the grouped output sheet
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, Default)]
pub enum ExportSchemaOption {
    /// same header spellings as the input sheets
    #[default]
    Source,
    /// Portuguese headers
    Localized,
}

impl From<&ExportSchemaOption> for ExportSchema {
    fn from(value: &ExportSchemaOption) -> Self {
        match value {
            ExportSchemaOption::Source => ExportSchema::Source,
            ExportSchemaOption::Localized => ExportSchema::Localized,
        }
    }
}
