//! HTML page: lookup form plus results table.

use crate::models::lookup::LookupOutcome;
use crate::models::match_result::MatchResult;
use crate::utils::escape_html;
use std::fmt::Write;

const STYLE: &str = "body{font-family:sans-serif;margin:2em}\
table{border-collapse:collapse}\
th,td{border:1px solid #ccc;padding:.3em .6em;text-align:left}\
tr.current{background:#d4f7d4;font-weight:bold}\
.error{color:#b00020}";

fn options(out: &mut String, values: &[String], selected: Option<&str>) {
    for v in values {
        let v = escape_html(v);
        let sel = if selected == Some(v.as_str()) { " selected" } else { "" };
        let _ = write!(out, "<option value=\"{v}\"{sel}>{v}</option>");
    }
}

pub fn render(days: &[String], outcome: &LookupOutcome) -> String {
    let mut out = String::with_capacity(4096);
    let selected_day = escape_html(&outcome.day);

    let _ = write!(
        out,
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>Pupil locator</title><style>{STYLE}</style></head><body>\
         <h1>Pupil locator</h1>\
         <form method=\"post\" action=\"/\">\
         <label>Pupil name <input type=\"text\" name=\"pupil_name\" value=\"{}\"></label> \
         <label>Day <select name=\"day\">",
        escape_html(&outcome.name)
    );

    options(&mut out, days, Some(selected_day.as_str()));
    if !days.iter().any(|d| escape_html(d) == selected_day) {
        // requested day outside the school week stays visible
        let _ = write!(out, "<option value=\"{selected_day}\" selected>{selected_day}</option>");
    }
    out.push_str("</select></label> <label>Time <select name=\"time\">");
    options(&mut out, &outcome.time_options, None);
    out.push_str("</select></label> <button type=\"submit\">Find</button></form>");

    render_results(&mut out, &outcome.results);

    out.push_str("</body></html>");
    out
}

fn render_results(out: &mut String, results: &[MatchResult]) {
    if results.is_empty() {
        return;
    }

    if let Some(error) = results.iter().find_map(MatchResult::error) {
        let _ = write!(out, "<p class=\"error\">{}</p>", escape_html(error));
        return;
    }

    out.push_str(
        "<table><thead><tr><th>Day</th><th>Name</th><th>Group</th><th>Subject</th>\
         <th>Start</th><th>End</th><th>Location</th><th>Session</th><th>Now</th></tr></thead><tbody>",
    );
    for m in results.iter().filter_map(MatchResult::as_session) {
        let class = if m.current { " class=\"current\"" } else { "" };
        let now = if m.current { "&#9679;" } else { "" };
        let _ = write!(
            out,
            "<tr{class}><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td>{}</td><td>{}</td><td>{}</td><td>{now}</td></tr>",
            escape_html(&m.day),
            escape_html(&m.name),
            escape_html(&m.group),
            escape_html(&m.subject),
            escape_html(&m.start),
            escape_html(&m.end),
            escape_html(&m.location),
            escape_html(&m.session),
        );
    }
    out.push_str("</tbody></table>");
}
