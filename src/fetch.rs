use anyhow::{bail, Context, Result};
use std::time::Duration;
use tracing::info;

pub const SCHEDULE_URL: &str = "https://www.skysports.com/watch/sport-on-sky";

/// Fetch the schedule page HTML.
///
/// The live page fills most of its listings in with JavaScript, so this only helps
/// when the server-rendered markup already carries the event groups. A snapshot saved
/// from a browser works with `--html` instead.
pub fn fetch_page(url: &str) -> Result<String> {
    info!(%url, "fetching schedule page");

    let client = reqwest::blocking::Client::builder()
        .user_agent("Mozilla/5.0 (compatible; SkyScheduleBot/1.0)")
        .timeout(Duration::from_secs(30))
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .context("Failed to build HTTP client")?;

    let resp = client
        .get(url)
        .send()
        .with_context(|| format!("Request to {} failed", url))?;

    let status = resp.status();
    if !status.is_success() {
        bail!("HTTP {} fetching {}", status.as_u16(), url);
    }

    let html = resp.text().context("Failed to read response body")?;
    info!(bytes = html.len(), "schedule page fetched");
    Ok(html)
}
