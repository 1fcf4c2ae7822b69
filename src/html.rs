//! HTML rendering for the digest view models.
//!
//! Plain semantic markup; styling is left to whatever wraps the email.

use std::fmt::Write;

use crate::digest::{CombinedDigest, DayView, EventRow, SportDigest};

pub const LOGO_URL: &str =
    "https://raw.githubusercontent.com/DJazzTest/sports-calendar/main/assets/PlanetSport.png";

const HIGH_LABEL: &str = "HIGH!";
const STANDARD_LABEL: &str = "Standard";

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\" />\n  <title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        body
    )
}

fn channel_cell(row: &EventRow) -> String {
    match row.channel_meta {
        Some(meta) => {
            let logo = meta
                .logo
                .map(|src| format!("<img src=\"{}\" alt=\"{}\" /> ", escape(src), escape(meta.name)))
                .unwrap_or_default();
            format!("{}<a href=\"{}\">{}</a>", logo, escape(meta.url), escape(&row.channel))
        }
        None => escape(&row.channel),
    }
}

fn render_row(out: &mut String, row: &EventRow) {
    let (class, label) = if row.high_priority {
        ("priority-high", HIGH_LABEL)
    } else {
        ("priority-standard", STANDARD_LABEL)
    };

    let _ = writeln!(
        out,
        "      <tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        class,
        channel_cell(row),
        escape(&row.competition),
        escape(&row.event_name),
        escape(&row.time),
        label
    );
}

fn render_day(out: &mut String, day: &DayView) {
    let _ = writeln!(out, "      <tr><th colspan=\"5\">{}</th></tr>", escape(&day.date));
    for row in &day.rows {
        render_row(out, row);
    }
}

/// Schedule table for one sport (no surrounding page).
pub fn render_sport_table(digest: &SportDigest) -> String {
    let mut out = String::new();
    out.push_str("  <table>\n    <thead>\n      <tr><th>Channel</th><th>Competition</th><th>Event</th><th>Time</th><th>Priority</th></tr>\n    </thead>\n    <tbody>\n");
    for day in &digest.days {
        render_day(&mut out, day);
    }
    out.push_str("    </tbody>\n  </table>\n");
    out
}

fn sport_header(digest: &SportDigest) -> String {
    format!(
        "  <h1>{} <img src=\"{}\" alt=\"\" /> <img src=\"{}\" alt=\"PlanetSport\" /> Sports Schedule</h1>\n",
        escape(&digest.display_name),
        escape(digest.icon_url),
        LOGO_URL
    )
}

/// Full page for one sport. An empty digest renders a "no events" page.
pub fn render_sport_page(digest: &SportDigest, window_days: u32) -> String {
    let title = format!("{} Sports Schedule", digest.display_name);
    let mut body = sport_header(digest);

    if digest.is_empty() {
        let _ = writeln!(
            body,
            "  <p>No scheduled {} events currently.</p>",
            escape(&digest.display_name)
        );
    } else {
        let _ = writeln!(body, "  <p>Upcoming events for the next {} days.</p>", window_days);
        body.push_str(&render_sport_table(digest));
    }

    page(&title, &body)
}

fn render_section(out: &mut String, digest: &SportDigest) {
    out.push_str("  <details>\n    <summary>");
    let _ = write!(
        out,
        "<img src=\"{}\" alt=\"\" /> <strong>{}</strong>",
        escape(digest.icon_url),
        escape(&digest.display_name)
    );
    if let Some(preview) = digest.preview() {
        let _ = write!(out, " <span class=\"preview\">{}</span>", escape(&preview));
    }
    out.push_str("</summary>\n");

    if digest.is_empty() {
        let _ = writeln!(
            out,
            "    <p>\u{2705} {} \u{2013} No Schedule \u{2705}</p>",
            escape(&digest.display_name)
        );
    } else {
        out.push_str(&render_sport_table(digest));
    }
    out.push_str("  </details>\n");
}

/// One page with a collapsible section per sport.
pub fn render_combined_page(combined: &CombinedDigest, window_days: u32) -> String {
    let mut body = format!(
        "  <h1><img src=\"{}\" alt=\"PlanetSport\" /> Sports Schedule</h1>\n  <p>Upcoming events for the next {} days. Expand a sport to see its schedule.</p>\n",
        LOGO_URL, window_days
    );
    for section in &combined.sections {
        render_section(&mut body, section);
    }
    page("Sky Sports Weekly Schedule \u{2013} All sports", &body)
}
