use super::loader::{load_roster, load_session_table};
use crate::config::Config;
use crate::models::roster::Roster;
use crate::models::session::SessionTable;
use std::path::{Component, PathBuf};
use tracing::{info, warn};

/// Where the roster and the day timetables come from.
/// Implementations never fail: missing data is an empty table.
pub trait TableSource: Send + Sync {
    fn roster(&self) -> Roster;
    fn day_table(&self, day: &str) -> SessionTable;
}

/// Reads `<data_dir>/<roster_file>` and `<data_dir>/<Day>.csv` on every call.
#[derive(Debug, Clone)]
pub struct FsTableSource {
    data_dir: PathBuf,
    roster_file: String,
}

impl FsTableSource {
    pub fn new(data_dir: impl Into<PathBuf>, roster_file: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            roster_file: roster_file.into(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.data_path(), cfg.roster_file.clone())
    }

    pub fn roster_path(&self) -> PathBuf {
        self.data_dir.join(&self.roster_file)
    }

    /// Path of the timetable for `day`, or None when the name would
    /// escape the data directory.
    pub fn day_path(&self, day: &str) -> Option<PathBuf> {
        let file = PathBuf::from(format!("{day}.csv"));
        let mut components = file.components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Some(self.data_dir.join(file)),
            _ => None,
        }
    }
}

impl TableSource for FsTableSource {
    fn roster(&self) -> Roster {
        load_roster(&self.roster_path())
    }

    fn day_table(&self, day: &str) -> SessionTable {
        let Some(path) = self.day_path(day) else {
            warn!("Refusing to load timetable for day {day:?}: not a plain file name.");
            return SessionTable::default();
        };

        let table = load_session_table(&path);
        if !table.is_empty() {
            info!("Loaded timetable for {day}.");
        }
        table
    }
}
