use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use crate::types::{RawEvent, SportEvents, SportKey};

pub const RAW_EVENTS_FILE: &str = "rawEvents.json";
pub const COMBINED_EMAIL_FILE: &str = "email-combined.html";

/// Output directory under `root`.
pub fn output_dir(root: &str) -> PathBuf {
    PathBuf::from(root).join("output")
}

pub fn save_raw_events(dir: &Path, events: &[RawEvent]) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {:?}", dir))?;

    let path = dir.join(RAW_EVENTS_FILE);
    let json = serde_json::to_string_pretty(events)?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write raw events to {:?}", path))?;

    info!(count = events.len(), path = %path.display(), "wrote raw events");
    Ok(path)
}

/// Load `rawEvents.json`. Its absence is fatal: the extract step has not run.
pub fn load_raw_events(dir: &Path) -> Result<Vec<RawEvent>> {
    let path = dir.join(RAW_EVENTS_FILE);

    if !path.exists() {
        bail!(
            "{} not found at {:?}. Run the extract step first.",
            RAW_EVENTS_FILE,
            path
        );
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read raw events from {:?}", path))?;
    let events: Vec<RawEvent> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse raw events in {:?}", path))?;

    Ok(events)
}

/// Write one file per sport that has events. Files left over from an earlier run for
/// sports that are now empty are removed.
pub fn save_buckets(dir: &Path, buckets: &[SportEvents]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {:?}", dir))?;

    let mut written = Vec::new();
    for bucket in buckets {
        let path = dir.join(bucket.sport_key.file_name());
        if bucket.is_empty() {
            if path.exists() {
                fs::remove_file(&path)
                    .with_context(|| format!("Failed to remove stale bucket {:?}", path))?;
                debug!(sport = %bucket.sport_key, "removed stale bucket file");
            }
            continue;
        }

        let json = serde_json::to_string_pretty(&bucket.events)?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write {} events to {:?}", bucket.sport_key, path))?;

        info!(sport = %bucket.sport_key, count = bucket.events.len(), "wrote sport bucket");
        written.push(path);
    }

    Ok(written)
}

/// Load one sport's bucket. A missing file is an empty bucket, not an error.
pub fn load_bucket(dir: &Path, sport_key: SportKey) -> Result<SportEvents> {
    let path = dir.join(sport_key.file_name());

    if !path.exists() {
        debug!(sport = %sport_key, "no bucket file, treating as empty");
        return Ok(SportEvents::new(sport_key, vec![]));
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {} events from {:?}", sport_key, path))?;
    let events: Vec<RawEvent> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} events in {:?}", sport_key, path))?;

    Ok(SportEvents::new(sport_key, events))
}

/// Every sport's bucket, canonical order.
pub fn load_all_buckets(dir: &Path) -> Result<Vec<SportEvents>> {
    if !dir.exists() {
        bail!(
            "Output directory does not exist: {:?}. Run extract & split first.",
            dir
        );
    }

    SportKey::ALL
        .iter()
        .map(|key| load_bucket(dir, *key))
        .collect()
}

pub fn save_html(dir: &Path, file_name: &str, html: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {:?}", dir))?;

    let path = dir.join(file_name);
    fs::write(&path, html)
        .with_context(|| format!("Failed to write HTML to {:?}", path))?;

    info!(path = %path.display(), "wrote email HTML");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::split_by_sport;
    use tempfile::TempDir;

    fn sample_events() -> Vec<RawEvent> {
        vec![
            RawEvent {
                sport: "Cricket".to_string(),
                sport_key: SportKey::Cricket,
                date: "Mon 2nd June".to_string(),
                time: "10:30".to_string(),
                competition: "Test Match".to_string(),
                event_name: "England vs India".to_string(),
                channel: "Sky Sports Cricket".to_string(),
            },
            RawEvent {
                sport: "Golf".to_string(),
                sport_key: SportKey::Golf,
                date: "Thu 5th June".to_string(),
                time: String::new(),
                competition: "US Open".to_string(),
                event_name: String::new(),
                channel: "Sky Sports Golf".to_string(),
            },
        ]
    }

    #[test]
    fn test_raw_events_file_uses_camel_case() {
        let tmp = TempDir::new().unwrap();
        let path = save_raw_events(tmp.path(), &sample_events()).unwrap();
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("\"sportKey\": \"cricket\""));
        assert!(content.contains("\"eventName\": \"England vs India\""));

        let loaded = load_raw_events(tmp.path()).unwrap();
        assert_eq!(loaded, sample_events());
    }

    #[test]
    fn test_missing_raw_events_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_raw_events(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("Run the extract step first"));
    }

    #[test]
    fn test_missing_sport_key_defaults_to_other() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(RAW_EVENTS_FILE),
            r#"[{"sport":"Snooker","date":"Mon 2nd June","time":"","competition":"","eventName":"","channel":""}]"#,
        )
        .unwrap();
        let loaded = load_raw_events(tmp.path()).unwrap();
        assert_eq!(loaded[0].sport_key, SportKey::OtherSports);
    }

    #[test]
    fn test_buckets_round_trip_with_missing_files() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path();
        let buckets = split_by_sport(&sample_events());
        let written = save_buckets(dir, &buckets).unwrap();
        assert_eq!(written.len(), 2);
        assert!(dir.join("cricket.json").exists());
        assert!(!dir.join("tennis.json").exists());

        let loaded = load_all_buckets(dir).unwrap();
        assert_eq!(loaded.len(), 14);
        assert_eq!(loaded[1].events.len(), 1);
        let tennis = loaded.iter().find(|b| b.sport_key == SportKey::Tennis).unwrap();
        assert!(tennis.is_empty());
    }

    #[test]
    fn test_stale_bucket_removed() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path();
        save_buckets(dir, &split_by_sport(&sample_events())).unwrap();
        assert!(dir.join("golf.json").exists());

        let cricket_only: Vec<_> = sample_events()
            .into_iter()
            .filter(|e| e.sport_key == SportKey::Cricket)
            .collect();
        save_buckets(dir, &split_by_sport(&cricket_only)).unwrap();
        assert!(dir.join("cricket.json").exists());
        assert!(!dir.join("golf.json").exists());
    }

    #[test]
    fn test_missing_output_dir_is_an_error() {
        let tmp = TempDir::new().unwrap();
        assert!(load_all_buckets(&tmp.path().join("output")).is_err());
    }

    #[test]
    fn test_save_html_creates_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = output_dir(&tmp.path().to_string_lossy());
        let path = save_html(&dir, COMBINED_EMAIL_FILE, "<p>hi</p>").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "<p>hi</p>");
    }
}
