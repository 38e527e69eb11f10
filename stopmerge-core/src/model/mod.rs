mod canonical_field;
mod canonical_row;
mod cell_value;
mod export_schema;
mod grouped_row;
mod grouping_summary;
mod raw_row;

pub use canonical_field::CanonicalField;
pub use canonical_row::CanonicalRow;
pub use cell_value::CellValue;
pub use export_schema::{ExportSchema, ExportTable};
pub use grouped_row::GroupedRow;
pub use grouping_summary::GroupingSummary;
pub use raw_row::RawRow;
