use super::group_key::GroupKey;
use crate::{
    config::GroupingConfig,
    model::{CanonicalRow, GroupedRow},
};
use indexmap::{map::Entry, IndexMap};

/// merges rows that share a [`GroupKey`]. groups are returned in the order
/// their key was first seen; within a group, sequences are concatenated in
/// input order and all other fields come from the group's first row.
///
/// the accumulator lives only for the duration of this call, so concurrent
/// calls over separate batches never interact.
///
/// # Arguments
///
/// * `rows` - canonical rows in source order
/// * `config` - coordinate prefix lengths used to build group keys
///
/// # Returns
///
/// one [`GroupedRow`] per distinct key. empty input yields empty output.
pub fn group_by_coordinates(rows: &[CanonicalRow], config: &GroupingConfig) -> Vec<GroupedRow> {
    let mut groups: IndexMap<GroupKey, GroupedRow> = IndexMap::with_capacity(rows.len());
    for row in rows {
        match groups.entry(GroupKey::from_row(row, config)) {
            Entry::Occupied(mut entry) => entry.get_mut().merge(row),
            Entry::Vacant(entry) => {
                entry.insert(GroupedRow::from(row));
            }
        }
    }
    log::debug!("grouped {} rows into {} stops", rows.len(), groups.len());
    groups.into_values().collect()
}

/// one grouped row per canonical row, used when grouping is disabled.
pub fn ungrouped(rows: &[CanonicalRow]) -> Vec<GroupedRow> {
    rows.iter().map(GroupedRow::from).collect()
}
