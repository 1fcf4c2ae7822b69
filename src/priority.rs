//! Priority Rules
//!
//! Flags an event as high priority when its name or competition mentions a major
//! team or competition for its sport. Women's and youth fixtures are always demoted,
//! and that check runs before any keyword match.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::types::{RawEvent, SportKey};

const DEMOTION_MARKERS: &[&str] = &[
    "women",
    "woman",
    "ladies",
    "u21",
    "under-21",
    "under 21",
    "junior",
];

const FOOTBALL_CLUBS: &[&str] = &[
    "arsenal",
    "aston villa",
    "bournemouth",
    "brentford",
    "brighton & hove albion",
    "brighton and hove albion",
    "burnley",
    "chelsea",
    "crystal palace",
    "everton",
    "fulham",
    "leeds united",
    "liverpool",
    "manchester city",
    "man city",
    "manchester united",
    "man utd",
    "newcastle united",
    "nottingham forest",
    "sunderland",
    "tottenham hotspur",
    "spurs",
    "west ham united",
    "wolverhampton wanderers",
    "wolves",
];

const CRICKET_TEAMS: &[&str] = &[
    "england",
    "surrey",
    "yorkshire",
    "lancashire",
    "australia",
    "india",
    "pakistan",
    "new zealand",
    "south africa",
];

const GOLF_EVENTS: &[&str] = &[
    "the open championship",
    "british open",
    "the masters",
    "masters tournament",
    "ryder cup",
    "pga championship",
    "us open",
];

const RUGBY_UNION_TEAMS: &[&str] = &[
    "england",
    "all blacks",
    "new zealand",
    "springboks",
    "south africa",
    "ireland",
    "france",
    "wales",
    "wallabies",
    "australia",
    "scotland",
];

const RUGBY_LEAGUE_TEAMS: &[&str] = &[
    "wigan warriors",
    "st helens",
    "leeds rhinos",
    "warrington wolves",
    "hull fc",
    "england",
    "australia",
    "kangaroos",
    "new zealand",
    "kiwis",
    "tonga",
    "samoa",
];

const RACING_MEETINGS: &[&str] = &[
    "grand national",
    "cheltenham festival",
    "royal ascot",
    "epsom derby",
    "st leger",
];

const TENNIS_EVENTS: &[&str] = &[
    "wimbledon",
    "us open",
    "australian open",
    "french open",
    "roland garros",
    "atp finals",
    "wta finals",
    "miami open",
];

const NFL_TEAMS: &[&str] = &[
    "kansas city chiefs",
    "dallas cowboys",
    "green bay packers",
    "new england patriots",
    "pittsburgh steelers",
    "super bowl",
];

/// Demotion markers plus one ordered keyword list per sport.
///
/// Sports without an entry never rank as high priority. When deserialized, each sport
/// listed under `keywords` replaces that sport's built-in list; the others stay.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PriorityRules {
    pub demotion_markers: Vec<String>,
    #[serde(deserialize_with = "keywords_over_defaults")]
    pub keywords: BTreeMap<SportKey, Vec<String>>,
}

fn keywords_over_defaults<'de, D>(deserializer: D) -> Result<BTreeMap<SportKey, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = BTreeMap::<SportKey, Vec<String>>::deserialize(deserializer)?;
    let mut keywords = PriorityRules::default().keywords;
    keywords.extend(overrides);
    Ok(keywords)
}

impl Default for PriorityRules {
    fn default() -> Self {
        let tables: [(SportKey, &[&str]); 8] = [
            (SportKey::Football, FOOTBALL_CLUBS),
            (SportKey::Cricket, CRICKET_TEAMS),
            (SportKey::Golf, GOLF_EVENTS),
            (SportKey::RugbyUnion, RUGBY_UNION_TEAMS),
            (SportKey::RugbyLeague, RUGBY_LEAGUE_TEAMS),
            (SportKey::Racing, RACING_MEETINGS),
            (SportKey::Tennis, TENNIS_EVENTS),
            (SportKey::Nfl, NFL_TEAMS),
        ];

        Self {
            demotion_markers: to_owned_list(DEMOTION_MARKERS),
            keywords: tables
                .into_iter()
                .map(|(key, terms)| (key, to_owned_list(terms)))
                .collect(),
        }
    }
}

impl PriorityRules {
    /// Lowercase and trim every term, dropping blanks, so matching can stay a plain
    /// substring test against lowercased text.
    pub fn normalized(self) -> Self {
        let clean = |terms: Vec<String>| -> Vec<String> {
            terms
                .into_iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect()
        };

        Self {
            demotion_markers: clean(self.demotion_markers),
            keywords: self
                .keywords
                .into_iter()
                .map(|(key, terms)| (key, clean(terms)))
                .collect(),
        }
    }

    pub fn keywords_for(&self, sport_key: SportKey) -> &[String] {
        self.keywords.get(&sport_key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the event is a demoted (women's / youth) fixture.
    pub fn is_demoted(&self, event: &RawEvent) -> bool {
        let text = search_text(event);
        contains_any(&text, &self.demotion_markers)
    }

    pub fn is_high_priority(&self, sport_key: SportKey, event: &RawEvent) -> bool {
        let text = search_text(event);

        if contains_any(&text, &self.demotion_markers) {
            return false;
        }

        contains_any(&text, self.keywords_for(sport_key))
    }
}

static DEFAULT_RULES: LazyLock<PriorityRules> = LazyLock::new(PriorityRules::default);

/// Priority check against the built-in tables.
pub fn is_high_priority(sport_key: SportKey, event: &RawEvent) -> bool {
    DEFAULT_RULES.is_high_priority(sport_key, event)
}

/// Lowercased "event name + competition" text the rules run against.
fn search_text(event: &RawEvent) -> String {
    format!("{} {}", event.event_name, event.competition).to_lowercase()
}

fn contains_any(text: &str, terms: &[String]) -> bool {
    terms.iter().any(|t| text.contains(t.as_str()))
}

fn to_owned_list(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_event(event_name: &str, competition: &str) -> RawEvent {
        RawEvent {
            sport: "Football".to_string(),
            sport_key: SportKey::Football,
            date: "Sat 7th February".to_string(),
            time: "15:00".to_string(),
            competition: competition.to_string(),
            event_name: event_name.to_string(),
            channel: "Sky Sports Main Event".to_string(),
        }
    }

    #[test]
    fn test_keyword_match() {
        let ev = create_test_event("Liverpool vs Everton", "Premier League");
        assert!(is_high_priority(SportKey::Football, &ev));
    }

    #[test]
    fn test_demotion_beats_keywords() {
        let ev = create_test_event("Arsenal Women vs Chelsea Women", "Women's Super League");
        assert!(!is_high_priority(SportKey::Football, &ev));

        let ev = create_test_event("England U21 vs France U21", "");
        assert!(!is_high_priority(SportKey::RugbyUnion, &ev));

        let ev = create_test_event("Arsenal vs Chelsea", "Under-21 Premier League");
        assert!(!is_high_priority(SportKey::Football, &ev));
    }

    #[test]
    fn test_demotion_is_case_insensitive() {
        let ev = create_test_event("England LADIES vs Wales", "");
        assert!(!is_high_priority(SportKey::RugbyUnion, &ev));
        assert!(PriorityRules::default().is_demoted(&ev));
    }

    #[test]
    fn test_no_keyword_match() {
        let ev = create_test_event("Luton Town vs Hull City", "Championship");
        assert!(!is_high_priority(SportKey::Football, &ev));
    }

    #[test]
    fn test_competition_alone_can_match() {
        let ev = create_test_event("", "Wimbledon Men's Final");
        assert!(is_high_priority(SportKey::Tennis, &ev));

        let ev = create_test_event("", "The Grand National");
        assert!(is_high_priority(SportKey::Racing, &ev));
    }

    #[test]
    fn test_keywords_are_per_sport() {
        // "england" is a cricket keyword but not a football one
        let ev = create_test_event("England vs India", "Test Match");
        assert!(is_high_priority(SportKey::Cricket, &ev));
        assert!(!is_high_priority(SportKey::Football, &ev));
    }

    #[test]
    fn test_sports_without_tables_never_high() {
        let ev = create_test_event("Liverpool vs Everton", "Premier League");
        for key in [
            SportKey::Boxing,
            SportKey::F1,
            SportKey::Darts,
            SportKey::Basketball,
            SportKey::Netball,
            SportKey::OtherSports,
        ] {
            assert!(!is_high_priority(key, &ev), "{key}");
        }
    }

    #[test]
    fn test_shared_defaults_match_fresh_rules() {
        let ev = create_test_event("Manchester United vs Burnley", "Premier League");
        assert_eq!(*DEFAULT_RULES, PriorityRules::default());
        for key in SportKey::ALL {
            assert_eq!(
                is_high_priority(key, &ev),
                PriorityRules::default().is_high_priority(key, &ev),
                "{key}"
            );
        }
    }

    #[test]
    fn test_normalized_rules() {
        let mut rules = PriorityRules::default();
        rules
            .keywords
            .insert(SportKey::Darts, vec!["  Luke LITTLER ".to_string(), " ".to_string()]);
        let rules = rules.normalized();
        assert_eq!(rules.keywords_for(SportKey::Darts), ["luke littler".to_string()]);

        let ev = create_test_event("Luke Littler vs Michael van Gerwen", "Premier League Darts");
        assert!(rules.is_high_priority(SportKey::Darts, &ev));
    }
}
