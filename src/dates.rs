//! Year-less Date Labels
//!
//! The listings page only prints day headings like "Wed 4th February". This module
//! parses them, orders them, and places them in a concrete year when needed.

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// A month/day placed more than this many days before today is taken to be next year.
pub const YEAR_ROLLOVER_DAYS: i64 = 183;

static RE_DAY_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2})(?:st|nd|rd|th)?\s+([A-Za-z]+)").expect("invalid regex: day month")
});

/// Month (0-based) and day of month, with no year attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthDay {
    pub month_index: u32,
    pub day: u32,
}

impl MonthDay {
    /// Place this month/day in a concrete year relative to `today`.
    ///
    /// Uses today's year unless that lands more than `YEAR_ROLLOVER_DAYS` in the past,
    /// in which case the following year is used. `None` for impossible dates.
    pub fn resolve(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = NaiveDate::from_ymd_opt(today.year(), self.month_index + 1, self.day);

        match this_year {
            Some(date) if (today - date).num_days() <= YEAR_ROLLOVER_DAYS => Some(date),
            _ => {
                let next_year =
                    NaiveDate::from_ymd_opt(today.year() + 1, self.month_index + 1, self.day)?;
                // 29 Feb only exists in one of the two years; don't jump a whole year for it
                if this_year.is_none() && (next_year - today).num_days() > 366 - YEAR_ROLLOVER_DAYS {
                    return None;
                }
                Some(next_year)
            }
        }
    }
}

/// Parse a day label like "Wed 4th February" into a month/day.
///
/// Only the first `<day> <word>` occurrence is considered; the word must be an
/// English month name. Returns `None` otherwise.
pub fn parse_date_label(label: &str) -> Option<MonthDay> {
    let caps = RE_DAY_MONTH.captures(label)?;
    let day: u32 = caps[1].parse().ok()?;
    let month_name = caps[2].to_lowercase();
    let month_index = MONTHS.iter().position(|m| *m == month_name)? as u32;

    Some(MonthDay { month_index, day })
}

/// Order two date labels chronologically within a single year.
///
/// Falls back to plain string order if either label does not parse. December and
/// January are not disambiguated here; see `compare_date_labels_from`.
pub fn compare_date_labels(a: &str, b: &str) -> Ordering {
    match (parse_date_label(a), parse_date_label(b)) {
        (Some(pa), Some(pb)) => pa.cmp(&pb),
        _ => a.cmp(b),
    }
}

/// Resolve a label to a concrete date relative to `today`.
pub fn resolve_date_label(label: &str, today: NaiveDate) -> Option<NaiveDate> {
    parse_date_label(label)?.resolve(today)
}

/// Sort key for date labels that is a total order.
///
/// Dated labels come first in `D` order, anything else follows in string order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum LabelKey<D> {
    Dated(D),
    Undated(String),
}

impl LabelKey<NaiveDate> {
    /// Keyed on the calendar date the label resolves to relative to `today`.
    pub(crate) fn anchored(label: &str, today: NaiveDate) -> Self {
        match resolve_date_label(label, today) {
            Some(date) => LabelKey::Dated(date),
            None => LabelKey::Undated(label.to_string()),
        }
    }
}

impl LabelKey<MonthDay> {
    /// Keyed on month then day, same as `compare_date_labels` for parsed labels.
    pub(crate) fn in_year(label: &str) -> Self {
        match parse_date_label(label) {
            Some(md) => LabelKey::Dated(md),
            None => LabelKey::Undated(label.to_string()),
        }
    }
}

/// Order two labels by their resolved calendar dates relative to `today`.
pub fn compare_date_labels_from(a: &str, b: &str, today: NaiveDate) -> Ordering {
    LabelKey::anchored(a, today).cmp(&LabelKey::anchored(b, today))
}
