//! Schedule Page Extraction
//!
//! Walks a rendered snapshot of the Sky Sports "sport on sky" listings page and pulls
//! out one raw row per event group.
//!
//! Page layout this relies on:
//! - day headings are `h3` elements reading like "Wed 4th February";
//! - each sport heading is an `h3` directly before its `div.event-group`s;
//! - a group holds `ul.row-table.event` (teams in `strong`, time in an `li`) and
//!   `p.event-detail` ("competition, channel").

use anyhow::{anyhow, Result};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::classifier::classify_row;
use crate::detail::parse_event_detail;
use crate::types::{RawEvent, ScrapedRow};

static RE_DAY_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(Mon|Tue|Wed|Thu|Fri|Sat|Sun)\b").expect("invalid regex: day heading")
});

static RE_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}:\d{2})").expect("invalid regex: time"));

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("invalid selector {css:?}: {e:?}"))
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn elem_text(element: ElementRef) -> String {
    normalize_whitespace(&element.text().collect::<String>())
}

/// Whether a heading reads like a day heading ("Wed 4th February").
pub fn is_day_heading(text: &str) -> bool {
    RE_DAY_HEADING.is_match(text)
}

/// Nearest previous `h3` sibling of the group.
fn sport_heading(group: ElementRef) -> String {
    group
        .prev_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "h3")
        .map(elem_text)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Day heading for a group: the nearest previous `h3` sibling that looks like a day,
/// searching the group's own level first, then each ancestor's.
fn day_heading(group: ElementRef) -> String {
    let mut current = Some(*group);
    while let Some(node) = current {
        let found = node
            .prev_siblings()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "h3")
            .map(elem_text)
            .find(|t| is_day_heading(t));
        if let Some(text) = found {
            return text;
        }
        current = node.parent();
    }
    String::new()
}

fn event_name_from(strongs: &[String]) -> String {
    match strongs {
        [] => String::new(),
        [only] => only.clone(),
        [first, .., last] => format!("{} vs {}", first, last),
    }
}

/// Pull raw rows out of a page snapshot. Groups missing their list or detail
/// paragraph, or with an empty paragraph, are skipped.
pub fn extract_rows(html: &str) -> Result<Vec<ScrapedRow>> {
    let document = Html::parse_document(html);
    let group_sel = selector("div.event-group")?;
    let list_sel = selector("ul.row-table.event")?;
    let para_sel = selector("p.event-detail")?;
    let strong_sel = selector("strong")?;
    let li_sel = selector("li")?;

    let mut rows = Vec::new();

    for group in document.select(&group_sel) {
        let (Some(list), Some(para)) = (group.select(&list_sel).next(), group.select(&para_sel).next())
        else {
            continue;
        };

        let para_text = elem_text(para);
        if para_text.is_empty() {
            continue;
        }

        let strongs: Vec<String> = list.select(&strong_sel).map(elem_text).collect();
        let event_name = event_name_from(&strongs);

        let time = list
            .select(&li_sel)
            .map(elem_text)
            .find_map(|t| RE_TIME.captures(&t).map(|c| c[1].to_string()))
            .unwrap_or_default();

        let (competition, channel) = parse_event_detail(&para_text, &event_name).into_parts();

        rows.push(ScrapedRow {
            sport: sport_heading(group),
            date: day_heading(group),
            time,
            competition,
            event_name,
            channel,
        });
    }

    Ok(rows)
}

/// Extract rows and classify each into a `RawEvent`.
pub fn extract_events(html: &str) -> Result<Vec<RawEvent>> {
    Ok(extract_rows(html)?.into_iter().map(classify_row).collect())
}
