use super::{OutputFormat, SheetIoError};
use csv::QuoteStyle;
use rust_xlsxwriter::{ColNum, RowNum, Workbook, XlsxError};
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use stopmerge_core::model::ExportTable;

/// name of the single worksheet in an xlsx export
pub const XLSX_SHEET_NAME: &str = "Dados";

/// writes an export table in the requested output format.
pub fn write_sheet(
    filepath: &Path,
    table: &ExportTable,
    format: OutputFormat,
    overwrite: bool,
) -> Result<(), SheetIoError> {
    match format {
        OutputFormat::Xlsx => write_xlsx(filepath, table, overwrite),
        OutputFormat::Csv => write_csv(filepath, table, overwrite),
    }
}

/// writes an export table as a csv file with a header row.
///
/// fails with [`SheetIoError::OutputExists`] when the file exists and
/// `overwrite` is false.
pub fn write_csv(filepath: &Path, table: &ExportTable, overwrite: bool) -> Result<(), SheetIoError> {
    let file = create_output(filepath, overwrite)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(file);
    writer.write_record(&table.headers)?;
    for record in table.records.iter() {
        writer.write_record(record)?;
    }
    writer.flush()?;
    log::debug!(
        "wrote {} rows to {}",
        table.records.len(),
        filepath.display()
    );
    Ok(())
}

/// writes an export table as an xlsx workbook holding one worksheet, the
/// header row followed by one row per record. every cell is written as text.
///
/// fails with [`SheetIoError::OutputExists`] when the file exists and
/// `overwrite` is false.
pub fn write_xlsx(filepath: &Path, table: &ExportTable, overwrite: bool) -> Result<(), SheetIoError> {
    let mut workbook = Workbook::new();
    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(XLSX_SHEET_NAME)?;
        let rows = std::iter::once(&table.headers).chain(table.records.iter());
        for (row_idx, record) in rows.enumerate() {
            let row = RowNum::try_from(row_idx).map_err(|_| XlsxError::RowColumnLimitError)?;
            for (col_idx, value) in record.iter().enumerate() {
                let col = ColNum::try_from(col_idx).map_err(|_| XlsxError::RowColumnLimitError)?;
                worksheet.write_string(row, col, value)?;
            }
        }
        worksheet.autofit();
    }
    let buffer = workbook.save_to_buffer()?;
    let mut file = create_output(filepath, overwrite)?;
    file.write_all(&buffer)?;
    log::debug!(
        "wrote {} rows to {}",
        table.records.len(),
        filepath.display()
    );
    Ok(())
}

/// opens the output file for writing. without `overwrite` the file is created
/// exclusively, so an existing file, including one created concurrently by
/// another writer, is reported as [`SheetIoError::OutputExists`].
fn create_output(filepath: &Path, overwrite: bool) -> Result<File, SheetIoError> {
    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    options.open(filepath).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => SheetIoError::OutputExists(filepath.display().to_string()),
        _ => SheetIoError::from(e),
    })
}
