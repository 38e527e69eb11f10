use super::GroupedRow;
use serde::{Deserialize, Serialize};

/// result of grouping one batch of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupingSummary {
    /// number of source rows in the batch
    pub total_rows: usize,
    /// number of rows after grouping, equal to `data.len()`
    pub grouped_rows: usize,
    pub data: Vec<GroupedRow>,
}

impl GroupingSummary {
    pub fn new(total_rows: usize, data: Vec<GroupedRow>) -> Self {
        Self {
            total_rows,
            grouped_rows: data.len(),
            data,
        }
    }

    /// number of stops removed from the route by grouping
    pub fn merged_rows(&self) -> usize {
        self.total_rows.saturating_sub(self.grouped_rows)
    }
}
