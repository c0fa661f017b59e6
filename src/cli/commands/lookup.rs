use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{FixedClock, Locator};
use crate::errors::AppResult;
use crate::models::lookup::LookupOutcome;
use crate::models::match_result::MatchResult;
use crate::ui::messages::{error, header, info, warning};
use crate::utils::date;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::{parse_optional_time, session_minutes};
use ansi_term::{Colour, Style};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Lookup {
        name,
        day,
        at,
        json,
    } = cmd
    {
        // validate --at before touching any file
        let pinned = parse_optional_time(at.as_ref())?;

        let mut locator = Locator::from_config(cfg)?;
        if let Some(t) = pinned {
            locator = locator.with_clock(FixedClock::at(date::today(), t));
        }

        let outcome = locator.lookup(name, day.as_deref());

        if *json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            print_outcome(&outcome);
        }
    }
    Ok(())
}

fn print_outcome(outcome: &LookupOutcome) {
    header(format!("{} on {}", outcome.name, outcome.day));

    if outcome.results.is_empty() {
        warning(format!("No pupil named '{}' in the roster.", outcome.name));
        return;
    }

    if let Some(msg) = outcome.results.iter().find_map(MatchResult::error) {
        error(msg);
        return;
    }

    let mut table = Table::new(
        ["", "Start", "End", "Length", "Subject", "Session", "Location", "Group"]
            .iter()
            .map(|h| Column::new(h))
            .collect(),
    );

    for m in outcome.results.iter().filter_map(MatchResult::as_session) {
        let length = session_minutes(&m.start, &m.end)
            .map(|mins| mins2readable(mins, true))
            .unwrap_or_else(|| "--:--".to_string());
        let (marker, style) = if m.current {
            ("▶", Colour::Green.bold())
        } else {
            ("", Style::new())
        };
        table.add_row(
            vec![
                marker.to_string(),
                m.start.clone(),
                m.end.clone(),
                length,
                m.subject.clone(),
                m.session.clone(),
                m.location.clone(),
                m.group.clone(),
            ],
            style,
        );
    }

    print!("{}", table.render());

    if outcome.current_sessions().next().is_none() {
        info("No session in progress right now.");
    }
}
