//! Sport Classification
//!
//! Maps the free-text sport heading from the listings page onto a canonical `SportKey`.

use crate::types::{RawEvent, ScrapedRow, SportKey};

/// Ordered substring rules, first match wins.
///
/// More specific labels sit above the generic ones they contain:
/// "american football" before "football", "rugby league" before "rugby".
const SPORT_RULES: &[(&[&str], SportKey)] = &[
    // Must precede "football": American Football is NFL, never soccer
    (&["american football"], SportKey::Nfl),
    (&["football", "soccer"], SportKey::Football),
    (&["cricket"], SportKey::Cricket),
    (&["formula", "f1"], SportKey::F1),
    (&["golf"], SportKey::Golf),
    (&["rugby league"], SportKey::RugbyLeague),
    (&["rugby"], SportKey::RugbyUnion),
    (&["racing", "race"], SportKey::Racing),
    (&["tennis"], SportKey::Tennis),
    (&["boxing"], SportKey::Boxing),
    (&["nfl"], SportKey::Nfl),
    (&["darts"], SportKey::Darts),
    (&["basketball"], SportKey::Basketball),
    (&["netball"], SportKey::Netball),
];

/// Classify a raw sport label. Never fails: unknown labels fall back to `OtherSports`.
pub fn classify(raw_label: &str) -> SportKey {
    let label = raw_label.trim().to_lowercase();

    SPORT_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| label.contains(n)))
        .map(|(_, key)| *key)
        .unwrap_or(SportKey::OtherSports)
}

/// Attach a sport key to a freshly scraped row.
pub fn classify_row(row: ScrapedRow) -> RawEvent {
    let sport_key = classify(&row.sport);
    RawEvent {
        sport: row.sport,
        sport_key,
        date: row.date,
        time: row.time,
        competition: row.competition,
        event_name: row.event_name,
        channel: row.channel,
    }
}
