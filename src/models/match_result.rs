use serde::Serialize;

/// A timetable row the pupil attends on the looked-up day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionMatch {
    pub day: String,
    pub name: String,
    pub group: String,
    pub subject: String,
    pub start: String,
    pub end: String,
    pub location: String,
    pub session: String,
    pub current: bool,
}

/// Either a matched session or the single "nothing found" marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MatchResult {
    Session(SessionMatch),
    Error { error: String },
}

impl MatchResult {
    pub fn no_sessions(day: &str) -> Self {
        MatchResult::Error {
            error: format!("No pupil sessions found on {day}."),
        }
    }

    pub fn as_session(&self) -> Option<&SessionMatch> {
        match self {
            MatchResult::Session(m) => Some(m),
            MatchResult::Error { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            MatchResult::Session(_) => None,
            MatchResult::Error { error } => Some(error),
        }
    }
}
