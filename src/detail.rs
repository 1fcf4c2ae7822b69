//! Event Detail Parsing
//!
//! Each listing carries a paragraph like "Premier League, Sky Sports Main Event (15:00)".
//! Some sports print only the channel, some only a competition.

/// What the event-detail paragraph turned out to contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDetail {
    /// "competition, channel". The channel keeps any further commas.
    Split { competition: String, channel: String },
    /// Only channel text; the competition is taken from the event name.
    ChannelOnly { competition: String, channel: String },
    /// No comma and not a channel.
    CompetitionOnly { competition: String },
    Empty,
}

impl EventDetail {
    pub fn competition(&self) -> &str {
        match self {
            EventDetail::Split { competition, .. }
            | EventDetail::ChannelOnly { competition, .. }
            | EventDetail::CompetitionOnly { competition } => competition,
            EventDetail::Empty => "",
        }
    }

    pub fn channel(&self) -> &str {
        match self {
            EventDetail::Split { channel, .. } | EventDetail::ChannelOnly { channel, .. } => channel,
            EventDetail::CompetitionOnly { .. } | EventDetail::Empty => "",
        }
    }

    pub fn into_parts(self) -> (String, String) {
        match self {
            EventDetail::Split { competition, channel }
            | EventDetail::ChannelOnly { competition, channel } => (competition, channel),
            EventDetail::CompetitionOnly { competition } => (competition, String::new()),
            EventDetail::Empty => (String::new(), String::new()),
        }
    }
}

/// Parse the detail paragraph. `event_name` stands in as the competition when the
/// paragraph is channel-only.
pub fn parse_event_detail(paragraph: &str, event_name: &str) -> EventDetail {
    let text = paragraph.trim();
    if text.is_empty() {
        return EventDetail::Empty;
    }

    if let Some((competition, channel)) = text.split_once(',') {
        return EventDetail::Split {
            competition: competition.trim().to_string(),
            channel: channel.trim().to_string(),
        };
    }

    if starts_with_ignore_case(text, "sky sports") {
        return EventDetail::ChannelOnly {
            competition: event_name.to_string(),
            channel: text.to_string(),
        };
    }

    EventDetail::CompetitionOnly {
        competition: text.to_string(),
    }
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .map(|head| head.eq_ignore_ascii_case(prefix))
        .unwrap_or(false)
}
