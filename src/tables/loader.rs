use super::encoding::decode_latin1;
use crate::errors::{AppError, AppResult};
use crate::models::roster::Roster;
use crate::models::session::{SessionTable, TableRow};
use csv::ReaderBuilder;
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::{debug, error, warn};

/// Read every record of a header-less, comma separated latin-1 file.
/// Records that cannot be parsed are skipped with a warning.
pub fn read_records(path: &Path) -> AppResult<Vec<Vec<String>>> {
    let file = File::open(path)?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for (idx, result) in rdr.byte_records().enumerate() {
        match result {
            Ok(record) => {
                if record.len() == 1 && record[0].is_empty() {
                    continue;
                }
                records.push(record.iter().map(decode_latin1).collect());
            }
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => warn!("{}: skipping record {}: {}", path.display(), idx + 1, e),
        }
    }

    Ok(records)
}

fn report_unreadable(path: &Path, err: &AppError) {
    match err {
        AppError::Io(e) if e.kind() == io::ErrorKind::NotFound => {
            error!("{} not found.", path.display())
        }
        other => error!("Failed to read {}: {}", path.display(), other),
    }
}

/// Load the name → group roster. A missing or unreadable file yields an
/// empty roster; the failure is only logged.
pub fn load_roster(path: &Path) -> Roster {
    let records = match read_records(path) {
        Ok(records) => records,
        Err(e) => {
            report_unreadable(path, &e);
            return Roster::new();
        }
    };

    let mut roster = Roster::new();
    for (idx, mut fields) in records.into_iter().enumerate() {
        if fields.len() < 2 {
            warn!(
                "{}: line {} has {} field(s), expected name,group",
                path.display(),
                idx + 1,
                fields.len()
            );
            continue;
        }
        fields.truncate(2);
        let group = fields.pop().unwrap_or_default();
        let name = fields.pop().unwrap_or_default();
        roster.insert(name, group);
    }

    debug!("Loaded {} pupil(s) from {}.", roster.len(), path.display());
    roster
}

/// Load one day's timetable in file order. A missing or unreadable file
/// yields an empty table; the failure is only logged.
pub fn load_session_table(path: &Path) -> SessionTable {
    match read_records(path) {
        Ok(records) => {
            let table = SessionTable::new(records.into_iter().map(TableRow::from_fields).collect());
            debug!("Loaded {} row(s) from {}.", table.len(), path.display());
            table
        }
        Err(e) => {
            report_unreadable(path, &e);
            SessionTable::default()
        }
    }
}
