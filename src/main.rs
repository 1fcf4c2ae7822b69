use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use sky_schedule::config::{load_schedule_config, ScheduleConfig};
use sky_schedule::digest::{CombinedDigest, SportDigest};
use sky_schedule::grouping::split_by_sport;
use sky_schedule::{extract, fetch, html, logging, storage, window};

#[derive(Debug, Parser)]
#[command(name = "sky_schedule", about = "Sky Sports weekly schedule digests")]
struct Cli {
    /// Working root holding `config/` and `output/`
    #[arg(long, env = "ROOT", default_value = ".")]
    root: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract events from the schedule page into rawEvents.json
    Extract(SourceArgs),
    /// Split rawEvents.json into one file per sport
    Split,
    /// Render the combined and per-sport email HTML
    Render(WindowArgs),
    /// Extract, split and render in one go
    Run {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        window: WindowArgs,
    },
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// Saved page snapshot to read instead of fetching
    #[arg(long)]
    html: Option<PathBuf>,

    #[arg(long, default_value = fetch::SCHEDULE_URL)]
    url: String,
}

#[derive(Debug, Args)]
struct WindowArgs {
    /// Number of days shown in the digest
    #[arg(long)]
    days: Option<u32>,

    /// Start the window today instead of tomorrow
    #[arg(long)]
    from_today: bool,
}

impl WindowArgs {
    fn apply(&self, config: &mut ScheduleConfig) {
        if let Some(days) = self.days {
            config.window.days = days;
        }
        if self.from_today {
            config.window.start_from_tomorrow = false;
        }
    }
}

fn extract_step(source: &SourceArgs, out_dir: &Path) -> Result<()> {
    let page = match &source.html {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read page snapshot {:?}", path))?,
        None => fetch::fetch_page(&source.url)?,
    };

    let events = extract::extract_events(&page)?;
    if events.is_empty() {
        warn!("no events found on the schedule page");
    }
    storage::save_raw_events(out_dir, &events)?;
    Ok(())
}

fn split_step(out_dir: &Path) -> Result<()> {
    let events = storage::load_raw_events(out_dir)?;
    let buckets = split_by_sport(&events);
    storage::save_buckets(out_dir, &buckets)?;
    Ok(())
}

fn render_step(root: &str, out_dir: &Path, window_args: &WindowArgs) -> Result<()> {
    let mut config = load_schedule_config(root)?;
    window_args.apply(&mut config);

    let today = window::today();
    let buckets = storage::load_all_buckets(out_dir)?;

    for bucket in &buckets {
        let digest = SportDigest::build(bucket, &config.window, &config.priority, today);
        let page = html::render_sport_page(&digest, config.window.days);
        storage::save_html(out_dir, &format!("email-{}.html", bucket.sport_key), &page)?;
    }

    let combined = CombinedDigest::build(&buckets, &config.window, &config.priority, today);
    info!(
        events = combined.total_events(),
        days = config.window.days,
        from_tomorrow = config.window.start_from_tomorrow,
        "built combined digest"
    );
    let page = html::render_combined_page(&combined, config.window.days);
    storage::save_html(out_dir, storage::COMBINED_EMAIL_FILE, &page)?;
    Ok(())
}

fn main() -> Result<()> {
    logging::init_logging("info");
    let cli = Cli::parse();
    let out_dir = storage::output_dir(&cli.root);

    match &cli.command {
        Command::Extract(source) => extract_step(source, &out_dir),
        Command::Split => split_step(&out_dir),
        Command::Render(window_args) => render_step(&cli.root, &out_dir, window_args),
        Command::Run { source, window } => {
            extract_step(source, &out_dir)?;
            split_step(&out_dir)?;
            render_step(&cli.root, &out_dir, window)
        }
    }
}
