//! Known Sky Sports channels, for watch links and logos in the digest.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkyChannel {
    pub name: &'static str,
    pub url: &'static str,
    pub logo: Option<&'static str>,
}

const fn channel(name: &'static str, url: &'static str, logo: Option<&'static str>) -> SkyChannel {
    SkyChannel { name, url, logo }
}

// Most specific first; the bare "Sky Sports" entry has to stay last.
const SKY_CHANNELS: &[SkyChannel] = &[
    channel(
        "Sky Sports Main Event",
        "https://www.skysports.com/watch/sky-sports-main-event",
        Some("https://img001-eu-mo-prd.delivery.skycdp.com/select/logo?entityId=7023540979985581117&width=600&height=100&rule=Stations%20-%20light"),
    ),
    channel(
        "Sky Sports Premier League",
        "https://www.skysports.com/watch/sky-sports-premier-league",
        None,
    ),
    channel(
        "Sky Sports Football",
        "https://www.skysports.com/watch/sky-sports-football",
        Some("https://img001-eu-mo-prd.delivery.skycdp.com/select/logo?entityId=6419044864297754117&width=600&height=100&rule=Stations%20-%20light"),
    ),
    channel(
        "Sky Sports Cricket",
        "https://www.skysports.com/watch/sky-sports-cricket",
        Some("https://img001-eu-mo-prd.delivery.skycdp.com/select/logo?entityId=8800573917753836117&width=600&height=100&rule=Stations%20-%20light"),
    ),
    channel(
        "Sky Sports Golf",
        "https://www.skysports.com/watch/sky-sports-golf",
        Some("https://img001-eu-mo-prd.delivery.skycdp.com/select/logo?entityId=8844525863258642117&width=600&height=100&rule=Stations%20-%20light"),
    ),
    channel(
        "Sky Sports F1",
        "https://www.skysports.com/watch/sky-sports-f1",
        Some("https://img001-eu-mo-prd.delivery.skycdp.com/select/logo?entityId=5158758531313507117&width=600&height=100&rule=Stations%20-%20light"),
    ),
    channel(
        "Sky Sports Tennis",
        "https://www.skysports.com/watch/sky-sports-tennis",
        Some("https://img001-eu-mo-prd.delivery.skycdp.com/select/logo?entityId=4896228439428403117&width=600&height=100&rule=Stations%20-%20light"),
    ),
    channel(
        "Sky Sports NFL",
        "https://www.skysports.com/watch/sky-sports-nfl",
        Some("https://img001-eu-mo-prd.delivery.skycdp.com/select/logo?entityId=8719200523741613117&width=600&height=100&rule=Stations%20-%20light"),
    ),
    channel(
        "Sky Sports News",
        "https://www.skysports.com/watch/sky-sports-news",
        None,
    ),
    channel(
        "Sky Sports+",
        "https://www.skysports.com/watch/sky-sports-plus",
        Some("https://img001-eu-mo-prd.delivery.skycdp.com/select/logo?entityId=6858995960279493117&width=600&height=100&rule=Stations%20-%20light"),
    ),
    channel(
        "Sky Sports Racing",
        "https://www.skysports.com/watch/sky-sports-racing",
        Some("https://img001-eu-mo-prd.delivery.skycdp.com/select/logo?entityId=6627732418081674117&width=600&height=100&rule=Stations%20-%20light"),
    ),
    channel(
        "Sky Sports Mix",
        "https://www.skysports.com/watch/sky-sports-mix",
        Some("https://img001-eu-mo-prd.delivery.skycdp.com/select/logo?entityId=8350774144114096117&width=600&height=100&rule=Stations%20-%20light"),
    ),
    channel(
        "Sky Sports",
        "https://www.skysports.com/watch",
        Some("https://img001-eu-mo-prd.delivery.skycdp.com/select/logo?entityId=6814741578518519117&width=600&height=100&rule=Stations%20-%20light"),
    ),
];

/// First known channel whose name appears in `channel_text`, ignoring case.
pub fn resolve_channel(channel_text: &str) -> Option<&'static SkyChannel> {
    if channel_text.is_empty() {
        return None;
    }
    let lower = channel_text.to_lowercase();
    SKY_CHANNELS
        .iter()
        .find(|c| lower.contains(&c.name.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specific_channel_wins() {
        let ch = resolve_channel("Sky Sports Main Event (15:00)").unwrap();
        assert_eq!(ch.name, "Sky Sports Main Event");
        assert!(ch.logo.is_some());
    }

    #[test]
    fn test_generic_fallback() {
        let ch = resolve_channel("Sky Sports Arena").unwrap();
        assert_eq!(ch.name, "Sky Sports");
        assert_eq!(ch.url, "https://www.skysports.com/watch");
    }

    #[test]
    fn test_channel_without_logo() {
        let ch = resolve_channel("sky sports premier league").unwrap();
        assert_eq!(ch.name, "Sky Sports Premier League");
        assert_eq!(ch.logo, None);
    }

    #[test]
    fn test_unknown_channel() {
        assert_eq!(resolve_channel("TNT Sports 1"), None);
        assert_eq!(resolve_channel(""), None);
    }
}
