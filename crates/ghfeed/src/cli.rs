//! CLI definition.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use ghfeed_client::GitHubClient;
use ghfeed_config::{Config, ConfigError, GitHubConfig};
use ghfeed_core::{EventKind, KindFilter, RawEvent};
use tracing::debug;

use crate::render;

/// Show a GitHub user's recent public activity as one-line summaries.
#[derive(Debug, Parser)]
#[command(name = "ghfeed")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// GitHub username whose public events to show
    #[arg(required_unless_present = "input", conflicts_with = "input")]
    pub username: Option<String>,

    /// Read events from a saved JSON feed instead of the GitHub API ("-" for stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Only render these event kinds (e.g. PushEvent); repeatable
    #[arg(short, long = "kind", value_name = "KIND", conflicts_with = "all")]
    pub kinds: Vec<EventKind>,

    /// Dispatch every event, reporting kinds that cannot be rendered
    #[arg(long)]
    pub all: bool,

    /// Fail on the first event that cannot be rendered instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Configuration file (default: ghfeed.toml in the current directory or a parent)
    #[arg(short, long, value_name = "FILE", env = "GHFEED_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        let config = self.load_config()?;
        let events = self.load_events(&config.github)?;
        let filter = self.filter(&config);

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let printed = render::print_feed(&mut out, &events, &filter, &config.output, self.strict)?;

        debug!(received = events.len(), printed, "done");
        Ok(())
    }

    fn load_config(&self) -> Result<Config> {
        if let Some(path) = &self.config {
            return ghfeed_config::load_config(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()));
        }

        match ghfeed_config::find_and_load_config() {
            Ok(config) => Ok(config),
            Err(ConfigError::NotFound(_)) => {
                debug!("no configuration file found, using defaults");
                Ok(Config::default())
            }
            Err(e) => Err(e).context("failed to load configuration"),
        }
    }

    fn load_events(&self, github: &GitHubConfig) -> Result<Vec<RawEvent>> {
        if let Some(path) = &self.input {
            return read_events(path);
        }

        // clap guarantees a username whenever --input is absent
        let username = self.username.as_deref().unwrap_or_default();

        let client = GitHubClient::new(github).context("failed to create GitHub client")?;
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("failed to create async runtime")?;

        rt.block_on(client.fetch_user_events(username))
            .with_context(|| format!("failed to fetch events for {username}"))
    }

    fn filter(&self, config: &Config) -> KindFilter {
        if self.all {
            KindFilter::All
        } else if self.kinds.is_empty() {
            config.events.filter()
        } else {
            KindFilter::only(self.kinds.iter().copied())
        }
    }
}

/// Reads a JSON event list, as returned by the Events API, from a file or stdin.
fn read_events(path: &Path) -> Result<Vec<RawEvent>> {
    let content = if path == Path::new("-") {
        std::io::read_to_string(std::io::stdin()).context("failed to read events from stdin")?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };

    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse events from {}", path.display()))
}
