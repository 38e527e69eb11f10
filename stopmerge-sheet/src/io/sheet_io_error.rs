use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetIoError {
    #[error("unsupported sheet file type: {0}")]
    UnsupportedFormat(String),
    #[error("sheet '{filepath}' is {size} bytes, over the limit of {limit} bytes")]
    FileTooLarge {
        filepath: String,
        size: u64,
        limit: u64,
    },
    #[error("workbook '{0}' has no worksheets")]
    EmptyWorkbook(String),
    #[error("output file '{0}' exists and overwrite is disabled")]
    OutputExists(String),
    #[error("failure reading workbook: {source}")]
    WorkbookError {
        #[from]
        source: calamine::Error,
    },
    #[error("failure writing workbook: {source}")]
    XlsxError {
        #[from]
        source: rust_xlsxwriter::XlsxError,
    },
    #[error("failure reading or writing csv: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure accessing sheet file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
}
