mod export_file_name;
mod output_format;
mod sheet_format;
mod sheet_io_error;
mod sheet_reader;
mod sheet_writer;

pub use export_file_name::{export_file_name, sanitize_route_name};
pub use output_format::OutputFormat;
pub use sheet_format::SheetFormat;
pub use sheet_io_error::SheetIoError;
pub use sheet_reader::{read_sheet, DEFAULT_MAX_FILE_BYTES};
pub use sheet_writer::{write_csv, write_sheet, write_xlsx, XLSX_SHEET_NAME};
