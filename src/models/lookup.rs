use super::match_result::MatchResult;
use serde::Serialize;

/// Everything the page needs after one lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LookupOutcome {
    pub day: String,
    pub name: String,
    /// Empty for an unknown name; otherwise all sessions or one error record.
    pub results: Vec<MatchResult>,
    pub time_options: Vec<String>,
}

impl LookupOutcome {
    pub fn current_sessions(&self) -> impl Iterator<Item = &MatchResult> {
        self.results
            .iter()
            .filter(|r| r.as_session().is_some_and(|m| m.current))
    }
}
