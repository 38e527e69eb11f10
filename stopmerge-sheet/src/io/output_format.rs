use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// file type of a grouped route export
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// single-worksheet xlsx workbook
    #[default]
    Xlsx,
    Csv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
        }
    }
}
