use crate::models::session::SessionTable;
use std::collections::BTreeSet;

/// Distinct start times listed in a day's table, ascending.
pub fn distinct_start_times(table: &SessionTable) -> Vec<String> {
    table
        .rows
        .iter()
        .filter_map(|row| row.start_time())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
