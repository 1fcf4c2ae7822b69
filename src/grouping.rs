//! Schedule Grouping
//!
//! Splits events into per-sport buckets and groups a sport's events by day heading.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::dates::LabelKey;
use crate::types::{DateGroup, RawEvent, SportEvents, SportKey};

/// One bucket per canonical sport, in canonical order. Empty buckets are kept.
pub fn split_by_sport(events: &[RawEvent]) -> Vec<SportEvents> {
    let mut buckets: HashMap<SportKey, Vec<RawEvent>> = HashMap::new();
    for ev in events {
        buckets.entry(ev.sport_key).or_default().push(ev.clone());
    }

    SportKey::ALL
        .iter()
        .map(|key| SportEvents::new(*key, buckets.remove(key).unwrap_or_default()))
        .collect()
}

/// Group events by exact date label and order the groups by month/day.
///
/// Events keep their input order inside a group. Labels that don't parse sort after
/// the ones that do, in string order.
pub fn group_and_order<'a, I>(events: I) -> Vec<DateGroup>
where
    I: IntoIterator<Item = &'a RawEvent>,
{
    let mut groups = partition_by_date(events);
    groups.sort_by_cached_key(|g| LabelKey::in_year(&g.date));
    groups
}

/// Like `group_and_order`, but orders by the calendar date each label resolves to
/// relative to `today`, so a run spanning New Year stays chronological.
pub fn group_and_order_from<'a, I>(events: I, today: NaiveDate) -> Vec<DateGroup>
where
    I: IntoIterator<Item = &'a RawEvent>,
{
    let mut groups = partition_by_date(events);
    groups.sort_by_cached_key(|g| LabelKey::anchored(&g.date, today));
    groups
}

/// Stable partition by date label, groups in first-seen order.
fn partition_by_date<'a, I>(events: I) -> Vec<DateGroup>
where
    I: IntoIterator<Item = &'a RawEvent>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<DateGroup> = Vec::new();

    for ev in events {
        match index.get(ev.date.as_str()) {
            Some(&i) => groups[i].events.push(ev.clone()),
            None => {
                index.insert(ev.date.as_str(), groups.len());
                groups.push(DateGroup {
                    date: ev.date.clone(),
                    events: vec![ev.clone()],
                });
            }
        }
    }

    groups
}
