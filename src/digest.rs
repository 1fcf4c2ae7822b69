//! Digest View Models
//!
//! Turns per-sport buckets into render-ready structures: window-filtered, grouped by
//! day, and tagged with priority and channel metadata. Rendering to HTML lives in
//! `html`.

use chrono::NaiveDate;

use crate::channels::{resolve_channel, SkyChannel};
use crate::grouping::group_and_order_from;
use crate::priority::PriorityRules;
use crate::types::{RawEvent, SportEvents, SportKey};
use crate::window::UpcomingWindow;

/// Shown in place of an empty time.
pub const UNSCHEDULED_TIME: &str = "Scheduled";

const PREVIEW_EVENTS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    pub channel: String,
    pub channel_meta: Option<&'static SkyChannel>,
    pub competition: String,
    pub event_name: String,
    pub time: String,
    pub high_priority: bool,
}

impl EventRow {
    fn from_event(sport_key: SportKey, ev: &RawEvent, rules: &PriorityRules) -> Self {
        let time = if ev.time.is_empty() {
            UNSCHEDULED_TIME.to_string()
        } else {
            ev.time.clone()
        };

        Self {
            channel: ev.channel.clone(),
            channel_meta: resolve_channel(&ev.channel),
            competition: ev.competition.clone(),
            event_name: ev.event_name.clone(),
            time,
            high_priority: rules.is_high_priority(sport_key, ev),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayView {
    pub date: String,
    pub rows: Vec<EventRow>,
}

/// One sport's upcoming schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct SportDigest {
    pub sport_key: SportKey,
    pub display_name: String,
    pub icon_url: &'static str,
    pub days: Vec<DayView>,
    /// Window-filtered events in input order, used for previews.
    pub upcoming: Vec<RawEvent>,
}

impl SportDigest {
    pub fn build(
        sport: &SportEvents,
        window: &UpcomingWindow,
        rules: &PriorityRules,
        today: NaiveDate,
    ) -> Self {
        let upcoming: Vec<RawEvent> = window
            .filter(&sport.events, today)
            .into_iter()
            .cloned()
            .collect();

        let days = group_and_order_from(&upcoming, today)
            .into_iter()
            .map(|group| DayView {
                rows: group
                    .events
                    .iter()
                    .map(|ev| EventRow::from_event(sport.sport_key, ev, rules))
                    .collect(),
                date: group.date,
            })
            .collect();

        Self {
            sport_key: sport.sport_key,
            display_name: sport.sport_display_name.clone(),
            icon_url: sport.sport_key.icon_url(),
            days,
            upcoming,
        }
    }

    /// No events in the window; still rendered, as a "no events" page.
    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty()
    }

    pub fn event_count(&self) -> usize {
        self.upcoming.len()
    }

    pub fn high_priority_count(&self) -> usize {
        self.days
            .iter()
            .flat_map(|d| &d.rows)
            .filter(|r| r.high_priority)
            .count()
    }

    /// Short teaser like "Arsenal vs Chelsea | Liverpool vs Everton +3 more".
    pub fn preview(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .upcoming
            .iter()
            .take(PREVIEW_EVENTS)
            .map(|ev| {
                if ev.event_name.is_empty() {
                    ev.competition.as_str()
                } else {
                    ev.event_name.as_str()
                }
            })
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            return None;
        }

        let mut text = parts.join(" | ");
        if self.upcoming.len() > parts.len() {
            text.push_str(&format!(" +{} more", self.upcoming.len() - parts.len()));
        }
        Some(text)
    }
}

/// Every sport, in combined-digest order.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedDigest {
    pub sections: Vec<SportDigest>,
}

impl CombinedDigest {
    /// Sports missing from `buckets` get an empty section.
    pub fn build(
        buckets: &[SportEvents],
        window: &UpcomingWindow,
        rules: &PriorityRules,
        today: NaiveDate,
    ) -> Self {
        let sections = SportKey::COMBINED_ORDER
            .iter()
            .map(|key| match buckets.iter().find(|b| b.sport_key == *key) {
                Some(bucket) => SportDigest::build(bucket, window, rules, today),
                None => SportDigest::build(&SportEvents::new(*key, Vec::new()), window, rules, today),
            })
            .collect();

        Self { sections }
    }

    pub fn total_events(&self) -> usize {
        self.sections.iter().map(SportDigest::event_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn event(key: SportKey, name: &str, competition: &str, date: &str, time: &str) -> RawEvent {
        RawEvent {
            sport: key.display_name().to_string(),
            sport_key: key,
            date: date.to_string(),
            time: time.to_string(),
            competition: competition.to_string(),
            event_name: name.to_string(),
            channel: "Sky Sports Main Event".to_string(),
        }
    }

    fn football_bucket() -> SportEvents {
        SportEvents::new(
            SportKey::Football,
            vec![
                event(SportKey::Football, "Liverpool vs Everton", "Premier League", "Tue 3rd June", "20:00"),
                event(SportKey::Football, "Old Match", "Premier League", "Sun 1st June", "12:00"),
                event(SportKey::Football, "", "Friendly", "Mon 2nd June", ""),
                event(SportKey::Football, "Arsenal Women vs Chelsea Women", "WSL", "Tue 3rd June", "12:30"),
                event(SportKey::Football, "Luton vs Hull", "Championship", "Wed 4th June", "19:45"),
            ],
        )
    }

    #[test]
    fn test_sport_digest_filters_and_groups() {
        let digest = SportDigest::build(
            &football_bucket(),
            &UpcomingWindow::default(),
            &PriorityRules::default(),
            today(),
        );

        assert_eq!(digest.event_count(), 4);
        let dates: Vec<_> = digest.days.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, vec!["Mon 2nd June", "Tue 3rd June", "Wed 4th June"]);

        let tuesday = &digest.days[1];
        assert_eq!(tuesday.rows[0].event_name, "Liverpool vs Everton");
        assert!(tuesday.rows[0].high_priority);
        assert!(!tuesday.rows[1].high_priority);
        assert_eq!(digest.high_priority_count(), 1);
    }

    #[test]
    fn test_unscheduled_time_and_channel_meta() {
        let digest = SportDigest::build(
            &football_bucket(),
            &UpcomingWindow::default(),
            &PriorityRules::default(),
            today(),
        );
        let monday = &digest.days[0].rows[0];
        assert_eq!(monday.time, UNSCHEDULED_TIME);
        assert_eq!(monday.channel_meta.map(|c| c.name), Some("Sky Sports Main Event"));
    }

    #[test]
    fn test_preview_text() {
        let digest = SportDigest::build(
            &football_bucket(),
            &UpcomingWindow::default(),
            &PriorityRules::default(),
            today(),
        );
        assert_eq!(
            digest.preview().as_deref(),
            Some("Liverpool vs Everton | Friendly +2 more")
        );
    }

    #[test]
    fn test_preview_skips_blank_events() {
        let bucket = SportEvents::new(
            SportKey::Darts,
            vec![
                event(SportKey::Darts, "", "", "Mon 2nd June", ""),
                event(SportKey::Darts, "Final", "", "Mon 2nd June", ""),
                event(SportKey::Darts, "Extra", "", "Mon 2nd June", ""),
            ],
        );
        let digest = SportDigest::build(&bucket, &UpcomingWindow::default(), &PriorityRules::default(), today());
        assert_eq!(digest.preview().as_deref(), Some("Final +2 more"));
    }

    #[test]
    fn test_empty_sport_digest() {
        let bucket = SportEvents::new(SportKey::Netball, vec![]);
        let digest = SportDigest::build(&bucket, &UpcomingWindow::default(), &PriorityRules::default(), today());
        assert!(digest.is_empty());
        assert!(digest.days.is_empty());
        assert_eq!(digest.preview(), None);
        assert_eq!(digest.display_name, "Netball");
    }

    #[test]
    fn test_combined_digest_has_every_sport_in_order() {
        let combined = CombinedDigest::build(
            &[football_bucket()],
            &UpcomingWindow::default(),
            &PriorityRules::default(),
            today(),
        );
        let keys: Vec<_> = combined.sections.iter().map(|s| s.sport_key).collect();
        assert_eq!(keys, SportKey::COMBINED_ORDER.to_vec());
        assert_eq!(combined.total_events(), 4);
        assert!(combined.sections[1].is_empty());
    }
}
