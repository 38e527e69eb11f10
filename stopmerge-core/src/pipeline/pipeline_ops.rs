use crate::{
    algorithm::{
        grouping::{group_by_coordinates, ungrouped},
        normalize::normalize_rows,
        validation::{count_incomplete_rows, validate_batch, BatchValidationError},
    },
    config::GroupingConfig,
    model::{CanonicalRow, GroupingSummary, RawRow},
};

/// normalizes, validates and groups one batch of raw sheet rows.
///
/// # Arguments
///
/// * `raw_rows` - rows in source sheet order, with missing cells present as empty
/// * `config` - grouping precision and whether to group at all
///
/// # Returns
///
/// the grouped rows with their counts, or the reason the whole batch was
/// rejected. no grouping work happens for a rejected batch.
pub fn process_rows(
    raw_rows: &[RawRow],
    config: &GroupingConfig,
) -> Result<GroupingSummary, BatchValidationError> {
    let rows = normalize_rows(raw_rows);
    log::debug!("normalized {} raw rows", rows.len());
    process_canonical_rows(&rows, config)
}

/// validates and groups rows that are already in canonical form.
pub fn process_canonical_rows(
    rows: &[CanonicalRow],
    config: &GroupingConfig,
) -> Result<GroupingSummary, BatchValidationError> {
    validate_batch(rows)?;

    let incomplete = count_incomplete_rows(rows);
    if incomplete > 0 {
        log::warn!(
            "{incomplete} of {} rows are missing a latitude, longitude or destination address",
            rows.len()
        );
    }

    let data = if config.group_by_coordinates {
        group_by_coordinates(rows, config)
    } else {
        ungrouped(rows)
    };
    let summary = GroupingSummary::new(rows.len(), data);
    log::info!(
        "{} rows grouped into {} stops",
        summary.total_rows,
        summary.grouped_rows
    );
    Ok(summary)
}
