use super::clock::{Clock, SystemClock};
use super::indexer::distinct_start_times;
use super::matcher::find_sessions;
use super::week::SchoolWeek;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::lookup::LookupOutcome;
use crate::tables::{FsTableSource, TableSource};
use crate::utils::time::format_hhmm;
use chrono::NaiveDateTime;
use tracing::{debug, warn};

/// Day the request asked for, or the default day for `now`.
/// A requested day is used verbatim, even when it is empty or not a school day.
pub fn resolve_day(week: &SchoolWeek, requested_day: Option<&str>, now: &NaiveDateTime) -> String {
    match requested_day {
        Some(day) => {
            if !week.contains(day) {
                warn!("Requested day {day:?} is not a configured school day.");
            }
            day.to_string()
        }
        None => week.default_day(now),
    }
}

/// One complete lookup: resolve the day, find the pupil's group, match the
/// day's sessions and list its start times.
///
/// An unknown name leaves `results` empty; a known name with no sessions
/// gets the single "No pupil sessions found" record.
pub fn handle_lookup(
    source: &dyn TableSource,
    week: &SchoolWeek,
    requested_name: &str,
    requested_day: Option<&str>,
    now: NaiveDateTime,
) -> LookupOutcome {
    let day = resolve_day(week, requested_day, &now);
    let name = requested_name.trim().to_string();

    let roster = source.roster();
    let group = roster.group_of(&name);
    let table = source.day_table(&day);

    let results = match group {
        Some(group) => find_sessions(&name, group, &table, &day, &format_hhmm(&now)),
        None => {
            if !name.is_empty() {
                debug!("No pupil named {name:?} in the roster.");
            }
            Vec::new()
        }
    };

    let time_options = distinct_start_times(&table);

    LookupOutcome {
        day,
        name,
        results,
        time_options,
    }
}

/// Lookup service with its table source and clock injected.
pub struct Locator {
    source: Box<dyn TableSource>,
    clock: Box<dyn Clock>,
    week: SchoolWeek,
}

impl Locator {
    pub fn new(
        source: impl TableSource + 'static,
        clock: impl Clock + 'static,
        week: SchoolWeek,
    ) -> Self {
        Self {
            source: Box::new(source),
            clock: Box::new(clock),
            week,
        }
    }

    /// Files under the configured data directory, local wall clock.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let week = SchoolWeek::new(cfg.school_days.clone())?;
        Ok(Self::new(FsTableSource::from_config(cfg), SystemClock, week))
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn week(&self) -> &SchoolWeek {
        &self.week
    }

    pub fn lookup(&self, name: &str, day: Option<&str>) -> LookupOutcome {
        handle_lookup(self.source.as_ref(), &self.week, name, day, self.clock.now())
    }

    /// Resolved day and its distinct start times.
    pub fn start_times(&self, day: Option<&str>) -> (String, Vec<String>) {
        let day = resolve_day(&self.week, day, &self.clock.now());
        let times = distinct_start_times(&self.source.day_table(&day));
        (day, times)
    }
}
