use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::duration::parse_duration;
use crate::services::store::DEFAULT_STATE_FILE;

const AFTER_HELP: &str = "\
Gets GitHub status by pinging the status API and sends a notification to a
Slack channel when the status changes.

Slack team is required to be set as environment variable \"SLACK_TEAM\".
Slack token is required to be set as environment variable \"SLACK_TOKEN\".

Example:
    SLACK_TEAM=myteam SLACK_TOKEN=123456 github-status --high 2s --low 1m --channel github";

/// Command-line flags
#[derive(Parser, Debug, Clone)]
#[command(name = "github-status")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "GitHub status monitor", long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// High frequency ping interval (e.g. "1s", "5m", "1.5h"), used when GitHub is not good
    #[arg(long, value_name = "DURATION", default_value = "5s", value_parser = parse_duration)]
    pub high: Duration,

    /// Low frequency ping interval (e.g. "1s", "5m", "1.5h"), used when GitHub is good
    #[arg(long, value_name = "DURATION", default_value = "1m", value_parser = parse_duration)]
    pub low: Duration,

    /// Slack channel to send notifications to
    #[arg(long)]
    pub channel: Option<String>,

    /// Output verbose log
    #[arg(long)]
    pub verbose: bool,

    /// File holding the last known status
    #[arg(long, value_name = "PATH", default_value = DEFAULT_STATE_FILE)]
    pub state_file: PathBuf,

    /// Timeout for each outbound HTTP request
    #[arg(long, value_name = "DURATION", default_value = "10s", value_parser = parse_duration)]
    pub timeout: Duration,

    /// Do not treat failed fetches as a status change
    #[arg(long)]
    pub ignore_unknown: bool,
}
