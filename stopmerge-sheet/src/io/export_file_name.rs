use super::OutputFormat;
use chrono::{Datelike, NaiveDate};

/// replaces every character that is not an ASCII letter or digit with `_`.
pub fn sanitize_route_name(route_name: &str) -> String {
    route_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// file name for a grouped route export, `<route>_<day>-<month>-<year>.<ext>`
/// with day and month not zero-padded.
pub fn export_file_name(route_name: &str, date: NaiveDate, format: OutputFormat) -> String {
    format!(
        "{}_{}-{}-{}.{}",
        sanitize_route_name(route_name),
        date.day(),
        date.month(),
        date.year(),
        format.extension()
    )
}
