use crate::models::match_result::{MatchResult, SessionMatch};
use crate::models::session::SessionTable;
use crate::utils::time::is_current_session;

/// Sessions of `group` on `day`, in timetable order, each flagged when it
/// contains `now` (`HH:MM`).
///
/// Returns either one record per matching row, or exactly one
/// "No pupil sessions found" record when nothing matches.
pub fn find_sessions(
    name: &str,
    group: &str,
    table: &SessionTable,
    day: &str,
    now: &str,
) -> Vec<MatchResult> {
    let results: Vec<MatchResult> = table
        .sessions()
        .filter(|row| row.group == group)
        .map(|row| {
            MatchResult::Session(SessionMatch {
                day: day.to_string(),
                name: name.to_string(),
                group: group.to_string(),
                subject: row.subject.clone(),
                start: row.start.clone(),
                end: row.end.clone(),
                location: row.location.clone(),
                session: row.session.clone(),
                current: is_current_session(&row.start, &row.end, now),
            })
        })
        .collect();

    if results.is_empty() {
        return vec![MatchResult::no_sessions(day)];
    }
    results
}
