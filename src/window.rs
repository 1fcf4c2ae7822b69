//! Upcoming Window Filter
//!
//! Decides which date labels fall inside the rolling "next N days" digest window.

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::dates::resolve_date_label;
use crate::types::RawEvent;

pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// An inclusive run of `days` calendar days starting today or tomorrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UpcomingWindow {
    pub days: u32,
    pub start_from_tomorrow: bool,
}

impl Default for UpcomingWindow {
    fn default() -> Self {
        Self {
            days: DEFAULT_WINDOW_DAYS,
            start_from_tomorrow: true,
        }
    }
}

impl UpcomingWindow {
    pub fn new(days: u32, start_from_tomorrow: bool) -> Self {
        Self { days, start_from_tomorrow }
    }

    /// First and last day of the window, or `None` when it is empty.
    pub fn bounds(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        if self.days == 0 {
            return None;
        }
        let start = if self.start_from_tomorrow {
            today.checked_add_days(Days::new(1))?
        } else {
            today
        };
        let end = start.checked_add_days(Days::new(u64::from(self.days - 1)))?;
        Some((start, end))
    }

    /// Whether `date_label` falls inside the window anchored at `today`.
    pub fn contains(&self, date_label: &str, today: NaiveDate) -> bool {
        let Some((start, end)) = self.bounds(today) else {
            return false;
        };
        match resolve_date_label(date_label, today) {
            Some(date) => date >= start && date <= end,
            None => false,
        }
    }

    /// Events inside the window, input order kept.
    pub fn filter<'a>(&self, events: &'a [RawEvent], today: NaiveDate) -> Vec<&'a RawEvent> {
        events.iter().filter(|e| self.contains(&e.date, today)).collect()
    }
}

/// Wall-clock variant of `UpcomingWindow::contains` using the local date.
pub fn is_in_window(date_label: &str, window_days: u32, start_from_tomorrow: bool) -> bool {
    UpcomingWindow::new(window_days, start_from_tomorrow).contains(date_label, today())
}

/// Today's local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
