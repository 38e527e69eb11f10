//! Spreadsheet reading and writing plus the `stopmerge` command line tool
//! built on the grouping engine in `stopmerge-core`.
pub mod app;
pub mod io;
