use super::{SheetFormat, SheetIoError};
use calamine::{open_workbook_auto, Data, Reader};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use stopmerge_core::model::{CellValue, RawRow};

/// largest accepted input sheet, in bytes
pub const DEFAULT_MAX_FILE_BYTES: u64 = 1024 * 1024;

/// header name given to columns whose header cell is empty
const EMPTY_HEADER: &str = "__EMPTY";

/// reads the rows of a route sheet in file order.
///
/// the first row is the header row. every data row carries every header,
/// with missing cells as [`CellValue::Empty`]. rows whose cells are all
/// empty are skipped. for workbooks only the first worksheet is read.
///
/// # Arguments
///
/// * `filepath` - xlsx/xlsm/xls/ods or csv file
/// * `max_file_bytes` - reject files larger than this
pub fn read_sheet(filepath: &Path, max_file_bytes: u64) -> Result<Vec<RawRow>, SheetIoError> {
    let format = SheetFormat::from_path(filepath)?;
    let size = std::fs::metadata(filepath)?.len();
    if size > max_file_bytes {
        return Err(SheetIoError::FileTooLarge {
            filepath: filepath.display().to_string(),
            size,
            limit: max_file_bytes,
        });
    }
    let rows = match format {
        SheetFormat::Workbook => read_workbook(filepath)?,
        SheetFormat::Csv => read_csv(filepath)?,
    };
    log::debug!("read {} rows from {}", rows.len(), filepath.display());
    Ok(rows)
}

fn read_workbook(filepath: &Path) -> Result<Vec<RawRow>, SheetIoError> {
    let mut workbook = open_workbook_auto(filepath)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| SheetIoError::EmptyWorkbook(filepath.display().to_string()))?;
    let range = workbook.worksheet_range(&sheet_name)?;
    let mut rows = range.rows();
    let headers = match rows.next() {
        None => return Ok(vec![]),
        Some(header_row) => unique_headers(
            header_row
                .iter()
                .map(|c| cell_value(c).to_cell_string())
                .collect(),
        ),
    };
    let raw_rows = rows
        .map(|cells| to_raw_row(&headers, cells.iter().map(cell_value)))
        .filter(|row| !row.is_blank())
        .collect();
    Ok(raw_rows)
}

fn read_csv(filepath: &Path) -> Result<Vec<RawRow>, SheetIoError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(filepath)?;
    let headers = unique_headers(reader.headers()?.iter().map(String::from).collect());
    let mut raw_rows = vec![];
    for record in reader.records() {
        let record = record?;
        let row = to_raw_row(&headers, record.iter().map(text_cell));
        if !row.is_blank() {
            raw_rows.push(row);
        }
    }
    Ok(raw_rows)
}

/// pairs cells with headers. headers past the end of the cells get empty
/// values; cells past the last header are dropped.
fn to_raw_row(headers: &[String], mut cells: impl Iterator<Item = CellValue>) -> RawRow {
    headers
        .iter()
        .map(|h| (h.clone(), cells.next().unwrap_or_default()))
        .collect()
}

fn text_cell(text: &str) -> CellValue {
    if text.is_empty() {
        CellValue::Empty
    } else {
        CellValue::from(text)
    }
}

/// converts a workbook cell. dates keep their serial number, and error
/// cells degrade to empty.
fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => text_cell(s),
    }
}

/// names empty headers `__EMPTY` and suffixes repeats with `_1`, `_2`, ...
/// so every column has a distinct key.
fn unique_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut repeats: HashMap<String, usize> = HashMap::new();
    headers
        .into_iter()
        .map(|text| {
            let base = if text.is_empty() {
                String::from(EMPTY_HEADER)
            } else {
                text
            };
            let mut name = base.clone();
            while seen.contains(&name) {
                let n = repeats.entry(base.clone()).or_insert(0);
                *n += 1;
                name = format!("{base}_{n}");
            }
            seen.insert(name.clone());
            name
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{cell_value, read_sheet, unique_headers, DEFAULT_MAX_FILE_BYTES};
    use crate::io::SheetIoError;
    use calamine::{CellErrorType, Data};
    use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
    use stopmerge_core::model::{CellValue, RawRow};

    fn cell_text(row: &RawRow, header: &str) -> Option<String> {
        row.get(header).map(|c| c.to_cell_string())
    }

    #[test]
    fn test_unique_headers() {
        let headers = ["Latitude", "", "Latitude", "", "Latitude_1"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(
            unique_headers(headers),
            vec!["Latitude", "__EMPTY", "Latitude_1", "__EMPTY_1", "Latitude_1_1"]
        );
    }

    #[test]
    fn test_read_csv_with_defval_semantics() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rota.csv");
        std::fs::write(
            &path,
            "Sequence,Destination Address,Latitude,Longitude,City\n\
             1,\"Rua A, 10\",-23.551234,-46.633211\n\
             ,,,,\n\
             2,\"Rua B, 20\",-23.551299,-46.633255,Santos\n",
        )
        .unwrap();
        let rows = read_sheet(&path, DEFAULT_MAX_FILE_BYTES).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Sequence"), Some(&CellValue::from("1")));
        assert_eq!(rows[0].get("Destination Address"), Some(&CellValue::from("Rua A, 10")));
        assert_eq!(rows[0].get("City"), Some(&CellValue::Empty));
        assert_eq!(rows[1].get("City"), Some(&CellValue::from("Santos")));
        assert_eq!(rows[1].get("Latitude"), Some(&CellValue::from("-23.551299")));
    }

    #[test]
    fn test_file_size_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rota.csv");
        std::fs::write(&path, "Sequence\n1\n2\n3\n").unwrap();
        let result = read_sheet(&path, 4);
        assert!(matches!(result, Err(SheetIoError::FileTooLarge { limit: 4, .. })));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rota.txt");
        std::fs::write(&path, "Sequence\n1\n").unwrap();
        let result = read_sheet(&path, DEFAULT_MAX_FILE_BYTES);
        assert!(matches!(result, Err(SheetIoError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_read_workbook_first_sheet_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rota.xlsx");
        let mut workbook = Workbook::new();
        let date_format = Format::new().set_num_format("dd/mm/yyyy");
        let delivery_date = ExcelDateTime::from_ymd(2025, 1, 31).unwrap();

        let first = workbook.add_worksheet();
        first.write_string(0, 0, "Sequence").unwrap();
        first.write_string(0, 2, "Latitude").unwrap();
        first.write_string(0, 3, "Entrega").unwrap();
        first.write_number(1, 0, 1).unwrap();
        first.write_string(1, 1, "nota").unwrap();
        first.write_number(1, 2, -23.5512345).unwrap();
        first
            .write_datetime_with_format(1, 3, &delivery_date, &date_format)
            .unwrap();
        first.write_number(3, 0, 2).unwrap();
        first.write_boolean(3, 1, true).unwrap();

        let second = workbook.add_worksheet();
        second.write_string(0, 0, "Sequence").unwrap();
        second.write_number(1, 0, 99).unwrap();
        workbook.save(&path).unwrap();

        let rows = read_sheet(&path, DEFAULT_MAX_FILE_BYTES).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(cell_text(&rows[0], "Sequence").as_deref(), Some("1"));
        assert_eq!(cell_text(&rows[0], "__EMPTY").as_deref(), Some("nota"));
        assert_eq!(cell_text(&rows[0], "Latitude").as_deref(), Some("-23.5512345"));
        assert_eq!(cell_text(&rows[0], "Entrega").as_deref(), Some("45688"));
        assert_eq!(cell_text(&rows[1], "Sequence").as_deref(), Some("2"));
        assert_eq!(cell_text(&rows[1], "__EMPTY").as_deref(), Some("true"));
        assert_eq!(rows[1].get("Latitude"), Some(&CellValue::Empty));
        assert_eq!(rows[1].get("Entrega"), Some(&CellValue::Empty));
    }

    #[test]
    fn test_workbook_cell_conversion() {
        assert_eq!(cell_value(&Data::Error(CellErrorType::Div0)), CellValue::Empty);
        assert_eq!(cell_value(&Data::Error(CellErrorType::NA)), CellValue::Empty);
        assert_eq!(cell_value(&Data::String(String::new())), CellValue::Empty);
        assert_eq!(cell_value(&Data::Int(7)), CellValue::Int(7));
        assert_eq!(
            cell_value(&Data::Float(-23.5512345)).to_cell_string(),
            "-23.5512345"
        );
    }
}
