use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical sport categories. Every event lands in exactly one of these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SportKey {
    Football,
    Cricket,
    F1,
    Golf,
    RugbyUnion,
    RugbyLeague,
    Racing,
    Tennis,
    Boxing,
    Nfl,
    Darts,
    Basketball,
    Netball,
    #[default]
    OtherSports,
}

impl SportKey {
    /// Canonical order, used for bucket files.
    pub const ALL: [SportKey; 14] = [
        SportKey::Football,
        SportKey::Cricket,
        SportKey::F1,
        SportKey::Golf,
        SportKey::RugbyUnion,
        SportKey::RugbyLeague,
        SportKey::Racing,
        SportKey::Tennis,
        SportKey::Boxing,
        SportKey::Nfl,
        SportKey::Darts,
        SportKey::Basketball,
        SportKey::Netball,
        SportKey::OtherSports,
    ];

    /// Order of sections in the combined digest.
    pub const COMBINED_ORDER: [SportKey; 14] = [
        SportKey::Football,
        SportKey::Cricket,
        SportKey::F1,
        SportKey::RugbyUnion,
        SportKey::RugbyLeague,
        SportKey::Golf,
        SportKey::Tennis,
        SportKey::Racing,
        SportKey::Darts,
        SportKey::Boxing,
        SportKey::Nfl,
        SportKey::Basketball,
        SportKey::Netball,
        SportKey::OtherSports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SportKey::Football => "football",
            SportKey::Cricket => "cricket",
            SportKey::F1 => "f1",
            SportKey::Golf => "golf",
            SportKey::RugbyUnion => "rugby_union",
            SportKey::RugbyLeague => "rugby_league",
            SportKey::Racing => "racing",
            SportKey::Tennis => "tennis",
            SportKey::Boxing => "boxing",
            SportKey::Nfl => "nfl",
            SportKey::Darts => "darts",
            SportKey::Basketball => "basketball",
            SportKey::Netball => "netball",
            SportKey::OtherSports => "other_sports",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SportKey::Football => "Football",
            SportKey::Cricket => "Cricket",
            SportKey::F1 => "Formula 1",
            SportKey::Golf => "Golf",
            SportKey::RugbyUnion => "Rugby Union",
            SportKey::RugbyLeague => "Rugby League",
            SportKey::Racing => "Racing",
            SportKey::Tennis => "Tennis",
            SportKey::Boxing => "Boxing",
            SportKey::Nfl => "NFL",
            SportKey::Darts => "Darts",
            SportKey::Basketball => "Basketball",
            SportKey::Netball => "Netball",
            SportKey::OtherSports => "Other Sports",
        }
    }

    /// Name of the per-sport bucket file.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }

    pub fn icon_url(&self) -> &'static str {
        match self {
            SportKey::Football => {
                "https://raw.githubusercontent.com/DJazzTest/sports-calendar/main/assets/football.png"
            }
            SportKey::RugbyUnion | SportKey::RugbyLeague => {
                "https://raw.githubusercontent.com/DJazzTest/sports-calendar/main/assets/rugby.png"
            }
            SportKey::Cricket => {
                "https://raw.githubusercontent.com/DJazzTest/sports-calendar/main/assets/cricket.png"
            }
            SportKey::Darts => {
                "https://raw.githubusercontent.com/DJazzTest/sports-calendar/main/assets/darts.png"
            }
            SportKey::Tennis => {
                "https://raw.githubusercontent.com/DJazzTest/sports-calendar/main/assets/tennis.png"
            }
            SportKey::Golf => {
                "https://raw.githubusercontent.com/DJazzTest/sports-calendar/main/assets/golf.png"
            }
            SportKey::F1 => "https://www.wheresthematch.com/images/sports/f1.gif",
            SportKey::Racing => "https://www.wheresthematch.com/images/sports/horseracing.gif",
            SportKey::Boxing => "https://www.wheresthematch.com/images/sports/boxing.gif",
            SportKey::Nfl => "https://www.wheresthematch.com/images/sports/americanfootball.gif",
            SportKey::Basketball | SportKey::Netball => {
                "https://www.wheresthematch.com/images/sports/basketball.gif"
            }
            SportKey::OtherSports => "https://www.wheresthematch.com/images/nav4-more-sports-on-tv-off.png",
        }
    }
}

impl fmt::Display for SportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One scheduled broadcast as scraped from the listings page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub sport: String,
    #[serde(default)]
    pub sport_key: SportKey,
    pub date: String,
    /// `HH:MM`, or empty when not yet scheduled.
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub competition: String,
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub channel: String,
}

/// A raw tuple straight off the page, before classification.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScrapedRow {
    pub sport: String,
    pub date: String,
    pub time: String,
    pub competition: String,
    pub event_name: String,
    pub channel: String,
}

/// All events for one sport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SportEvents {
    pub sport_key: SportKey,
    pub sport_display_name: String,
    pub events: Vec<RawEvent>,
}

impl SportEvents {
    pub fn new(sport_key: SportKey, events: Vec<RawEvent>) -> Self {
        Self {
            sport_key,
            sport_display_name: sport_key.display_name().to_string(),
            events,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Events sharing one date label, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateGroup {
    pub date: String,
    pub events: Vec<RawEvent>,
}
