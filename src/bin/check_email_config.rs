//! Configuration Check Binary
//!
//! Validates delivery and schedule settings before a digest run:
//! - all SMTP / email environment variables are present and well-formed
//! - config/schedule.yaml parses and has a usable window
//! - priority tables don't carry empty keyword lists

use anyhow::{Context, Result};

use sky_schedule::config::{load_schedule_config, EmailConfig};
use sky_schedule::logging::init_logging;
use sky_schedule::types::SportKey;

fn main() -> Result<()> {
    init_logging("warn");
    let root = std::env::var("ROOT").unwrap_or_else(|_| ".".to_string());

    println!("=== Email & Schedule Configuration Check ===");

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    match EmailConfig::from_env() {
        Ok(email) => {
            println!(
                "SMTP {}:{} ({}), {} recipient(s)",
                email.host,
                email.port,
                if email.secure { "TLS" } else { "STARTTLS/plain" },
                email.to.len()
            );
            if !email.from.contains('@') {
                warnings.push(format!("EMAIL_FROM does not look like an address: {}", email.from));
            }
            for to in email.to.iter().filter(|t| !t.contains('@')) {
                warnings.push(format!("EMAIL_TO entry does not look like an address: {}", to));
            }
        }
        Err(e) => errors.push(e.to_string()),
    }

    let schedule = load_schedule_config(&root).context("Failed to load schedule config")?;

    if schedule.window.days == 0 {
        errors.push("window.days is 0, every digest would be empty".to_string());
    } else {
        println!(
            "Window: {} day(s) starting {}",
            schedule.window.days,
            if schedule.window.start_from_tomorrow { "tomorrow" } else { "today" }
        );
    }

    if schedule.priority.demotion_markers.is_empty() {
        warnings.push("priority.demotion_markers is empty, no fixture will be demoted".to_string());
    }

    for key in SportKey::ALL {
        if schedule.priority.keywords.get(&key).is_some_and(|terms| terms.is_empty()) {
            warnings.push(format!("priority.keywords.{} is an empty list", key));
        }
    }

    if errors.is_empty() && warnings.is_empty() {
        println!("✓ Configuration is valid");
        return Ok(());
    }

    if !errors.is_empty() {
        println!("\n❌ ERRORS (must fix):");
        for error in &errors {
            println!("  - {}", error);
        }
    }

    if !warnings.is_empty() {
        println!("\n⚠️  WARNINGS:");
        for warning in &warnings {
            println!("  - {}", warning);
        }
    }

    if !errors.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
