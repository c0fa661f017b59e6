use super::source::TableSource;
use crate::models::roster::Roster;
use crate::models::session::SessionTable;
use std::collections::HashMap;

/// Tables held in memory. Days that were never added are empty.
#[derive(Debug, Clone, Default)]
pub struct StaticTableSource {
    roster: Roster,
    days: HashMap<String, SessionTable>,
}

impl StaticTableSource {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            days: HashMap::new(),
        }
    }

    pub fn with_day(mut self, day: impl Into<String>, table: SessionTable) -> Self {
        self.days.insert(day.into(), table);
        self
    }
}

impl TableSource for StaticTableSource {
    fn roster(&self) -> Roster {
        self.roster.clone()
    }

    fn day_table(&self, day: &str) -> SessionTable {
        self.days.get(day).cloned().unwrap_or_default()
    }
}
