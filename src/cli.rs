use clap::Parser;
use std::path::PathBuf;
use upgrade_graph::application::dto::OutputFormat;

/// Discover release versions and upgrade paths from an update graph
#[derive(Parser, Debug)]
#[command(name = "upgrade-graph")]
#[command(version)]
#[command(
    about = "Discover release versions and upgrade paths from a channel-partitioned update graph",
    long_about = None
)]
pub struct Args {
    /// Start channel, e.g. stable-4.16 (repeatable; the lowest version sets the threshold)
    #[arg(short = 'c', long = "channel", value_name = "CHANNEL")]
    pub channels: Vec<String>,

    /// Architecture to query [default: multi]
    #[arg(short, long)]
    pub arch: Option<String>,

    /// Graph endpoint URL [default: https://api.openshift.com/api/upgrades_info/graph]
    #[arg(short = 'u', long = "graph-url", value_name = "URL")]
    pub graph_url: Option<String>,

    /// Accept a named risk so its conditional edges are followed (repeatable)
    #[arg(short = 'r', long = "accept-risk", value_name = "RISK")]
    pub accept_risks: Vec<String>,

    /// Channel fetched directly without discovery, e.g. eus-4.16 (repeatable)
    #[arg(short = 'x', long = "extra-channel", value_name = "CHANNEL")]
    pub extra_channels: Vec<String>,

    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report each channel separately instead of merging channel groups
    #[arg(long)]
    pub per_channel: bool,

    /// Path to a config file (defaults to ./upgrade-graph.config.yml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
