use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stopmerge_core::model::{GroupedRow, GroupingSummary};

/// record of one grouped route sheet, written as the run summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedRoute {
    pub route_name: String,
    pub original_file_name: String,
    pub total_rows: usize,
    pub grouped_rows: usize,
    pub processed_at: DateTime<Utc>,
    pub output_file: String,
    pub data: Vec<GroupedRow>,
}

impl ProcessedRoute {
    pub fn new(
        route_name: &str,
        original_file_name: &str,
        output_file: &str,
        summary: GroupingSummary,
    ) -> Self {
        Self {
            route_name: route_name.to_string(),
            original_file_name: original_file_name.to_string(),
            total_rows: summary.total_rows,
            grouped_rows: summary.grouped_rows,
            processed_at: Utc::now(),
            output_file: output_file.to_string(),
            data: summary.data,
        }
    }
}
