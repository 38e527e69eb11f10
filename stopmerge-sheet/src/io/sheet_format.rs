use super::SheetIoError;
use std::path::Path;

/// the kinds of tabular files a route sheet may arrive in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    /// xlsx, xlsm, xls or ods, read through calamine
    Workbook,
    Csv,
}

impl SheetFormat {
    /// detects the format from the file extension, ignoring case.
    pub fn from_path(filepath: &Path) -> Result<Self, SheetIoError> {
        let extension = filepath
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("xlsx" | "xlsm" | "xls" | "ods") => Ok(SheetFormat::Workbook),
            Some("csv") => Ok(SheetFormat::Csv),
            _ => Err(SheetIoError::UnsupportedFormat(
                filepath.display().to_string(),
            )),
        }
    }

    pub fn is_supported(filepath: &Path) -> bool {
        Self::from_path(filepath).is_ok()
    }
}
