//! Configuration
//!
//! Two sources: an optional `config/schedule.yaml` holding window and priority
//! settings, and the environment for mail delivery settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::priority::PriorityRules;
use crate::window::UpcomingWindow;

const SCHEDULE_CONFIG: &str = "config/schedule.yaml";

/// Settings for one pipeline run. Anything left out of the file keeps its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub window: UpcomingWindow,
    pub priority: PriorityRules,
}

impl ScheduleConfig {
    pub fn from_yaml(content: &str) -> Result<Self> {
        let mut config: ScheduleConfig =
            serde_yaml::from_str(content).with_context(|| "Failed to parse schedule.yaml")?;
        config.priority = config.priority.normalized();
        Ok(config)
    }
}

/// Load `config/schedule.yaml` under `root`, or the built-in defaults if absent.
pub fn load_schedule_config(root: &str) -> Result<ScheduleConfig> {
    let path = Path::new(root).join(SCHEDULE_CONFIG);

    if !path.exists() {
        debug!(path = %path.display(), "no schedule config, using defaults");
        return Ok(ScheduleConfig::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read schedule config from {:?}", path))?;
    let config = ScheduleConfig::from_yaml(&content)?;
    info!(path = %path.display(), "loaded schedule config");
    Ok(config)
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing email configuration. Please set {}.", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("SMTP_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("EMAIL_TO has no recipients")]
    NoRecipients,
}

/// Mail delivery settings. The transport itself lives outside this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub host: String,
    pub port: u16,
    /// Implicit TLS, i.e. port 465.
    pub secure: bool,
    pub user: String,
    pub pass: String,
    pub from: String,
    pub to: Vec<String>,
}

const EMAIL_VARS: [&str; 6] = [
    "SMTP_HOST",
    "SMTP_PORT",
    "SMTP_USER",
    "SMTP_PASS",
    "EMAIL_FROM",
    "EMAIL_TO",
];

impl EmailConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars: HashMap<&str, String> = EMAIL_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok().map(|v| (*name, v)))
            .collect();
        Self::from_vars(&vars)
    }

    /// Build from a name → value lookup. Every missing or blank variable is reported
    /// together. Values are trimmed, except `SMTP_PASS` which is kept as given.
    pub fn from_vars(vars: &HashMap<&str, String>) -> Result<Self, ConfigError> {
        let get = |name: &str| vars.get(name).map(|v| v.trim()).filter(|v| !v.is_empty());

        let missing: Vec<&'static str> = EMAIL_VARS
            .iter()
            .copied()
            .filter(|name| get(*name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let value = |name: &str| get(name).unwrap_or_default().to_string();

        let port_text = value("SMTP_PORT");
        let port: u16 = port_text
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port_text.clone()))?;

        let to = parse_recipients(&value("EMAIL_TO"));
        if to.is_empty() {
            return Err(ConfigError::NoRecipients);
        }

        Ok(Self {
            host: value("SMTP_HOST"),
            port,
            secure: port == 465,
            user: value("SMTP_USER"),
            pass: vars.get("SMTP_PASS").cloned().unwrap_or_default(),
            from: value("EMAIL_FROM"),
            to,
        })
    }
}

/// Split a comma-separated address list, trimming and dropping empty entries.
pub fn parse_recipients(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SportKey;

    fn full_vars() -> HashMap<&'static str, String> {
        [
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_PORT", "465"),
            ("SMTP_USER", "bot"),
            ("SMTP_PASS", "secret"),
            ("EMAIL_FROM", "bot@example.com"),
            ("EMAIL_TO", " a@example.com, ,b@example.com ,"),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.to_string()))
        .collect()
    }

    #[test]
    fn test_email_config_from_vars() {
        let config = EmailConfig::from_vars(&full_vars()).unwrap();
        assert_eq!(config.host, "smtp.example.com");
        assert_eq!(config.port, 465);
        assert!(config.secure);
        assert_eq!(config.to, vec!["a@example.com", "b@example.com"]);
    }

    #[test]
    fn test_password_kept_verbatim() {
        let mut vars = full_vars();
        vars.insert("SMTP_PASS", "  pa ss ".to_string());
        vars.insert("SMTP_USER", " bot ".to_string());
        let config = EmailConfig::from_vars(&vars).unwrap();
        assert_eq!(config.pass, "  pa ss ");
        assert_eq!(config.user, "bot");
    }

    #[test]
    fn test_non_tls_port() {
        let mut vars = full_vars();
        vars.insert("SMTP_PORT", "587".to_string());
        let config = EmailConfig::from_vars(&vars).unwrap();
        assert!(!config.secure);
    }

    #[test]
    fn test_missing_vars_reported_together() {
        let mut vars = full_vars();
        vars.remove("SMTP_PASS");
        vars.insert("EMAIL_FROM", "   ".to_string());
        let err = EmailConfig::from_vars(&vars).unwrap_err();
        assert_eq!(err, ConfigError::Missing(vec!["SMTP_PASS", "EMAIL_FROM"]));
        assert_eq!(
            err.to_string(),
            "Missing email configuration. Please set SMTP_PASS, EMAIL_FROM."
        );
    }

    #[test]
    fn test_invalid_port() {
        let mut vars = full_vars();
        vars.insert("SMTP_PORT", "smtp".to_string());
        assert_eq!(
            EmailConfig::from_vars(&vars).unwrap_err(),
            ConfigError::InvalidPort("smtp".to_string())
        );
    }

    #[test]
    fn test_only_commas_means_no_recipients() {
        let mut vars = full_vars();
        vars.insert("EMAIL_TO", " , ,".to_string());
        assert_eq!(EmailConfig::from_vars(&vars).unwrap_err(), ConfigError::NoRecipients);
    }

    #[test]
    fn test_schedule_config_partial_yaml() {
        let yaml = r#"
window:
  days: 3
priority:
  keywords:
    darts: ["Luke Littler"]
"#;
        let config = ScheduleConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.window.days, 3);
        assert!(config.window.start_from_tomorrow);
        assert_eq!(config.priority.keywords_for(SportKey::Darts), ["luke littler".to_string()]);
        // Demotion markers and other sports keep their defaults when not given
        assert!(config.priority.demotion_markers.contains(&"women".to_string()));
        assert!(config
            .priority
            .keywords_for(SportKey::Football)
            .contains(&"liverpool".to_string()));
    }

    #[test]
    fn test_schedule_config_empty_yaml_is_default() {
        let config = ScheduleConfig::from_yaml("{}").unwrap();
        assert_eq!(config, ScheduleConfig::default());
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = load_schedule_config(&tmp.path().to_string_lossy()).unwrap();
        assert_eq!(config, ScheduleConfig::default());
    }

    #[test]
    fn test_loads_schedule_file_under_root() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config_dir = tmp.path().join("config");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(
            config_dir.join("schedule.yaml"),
            "window:\n  days: 3\n  start_from_tomorrow: false\n",
        )
        .unwrap();

        let config = load_schedule_config(&tmp.path().to_string_lossy()).unwrap();
        assert_eq!(config.window, UpcomingWindow::new(3, false));
        assert_eq!(config.priority, PriorityRules::default());
    }
}
