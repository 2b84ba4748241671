mod cli;
mod config;

use anyhow::anyhow;
use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile};
use std::path::{Path, PathBuf};
use std::process;
use upgrade_graph::adapters::outbound::console::StderrProgressReporter;
use upgrade_graph::adapters::outbound::network::CincinnatiGraphSource;
use upgrade_graph::application::dto::{DiscoveryRequest, OutputFormat};
use upgrade_graph::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use upgrade_graph::application::read_models::ReleaseReportBuilder;
use upgrade_graph::application::use_cases::DiscoverReleasesUseCase;
use upgrade_graph::shared::error::ExitCode;
use upgrade_graph::shared::{GraphError, Result};

const DEFAULT_ARCH: &str = "multi";

/// Effective settings after merging CLI arguments, config file and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    graph_url: String,
    arch: String,
    channels: Vec<String>,
    extra_channels: Vec<String>,
    accepted_risks: Vec<String>,
    format: OutputFormat,
    per_channel: bool,
    output: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();
    let config = load_config(args.config.as_deref())?;
    let settings = resolve_settings(args, config)?;

    let graph_source = CincinnatiGraphSource::new(Some(&settings.graph_url))?;
    let progress_reporter = StderrProgressReporter::new();
    let use_case = DiscoverReleasesUseCase::new(graph_source, progress_reporter);

    let request = DiscoveryRequest::new(settings.channels.clone(), settings.arch.clone())
        .with_extra_channels(settings.extra_channels.clone())
        .with_accepted_risks(settings.accepted_risks.clone())
        .with_aggregate(!settings.per_channel);

    let response = use_case.execute(request.clone())?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let report = ReleaseReportBuilder::build(&request, &response)?;
    let formatted_output = FormatterFactory::create(settings.format).format(&report)?;

    let presenter = PresenterFactory::create(PresenterType::from(settings.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Loads the explicit config file, or the one in the current directory
fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(&std::env::current_dir()?),
    }
}

/// Merges settings with precedence CLI > config file > defaults
fn resolve_settings(args: Args, config: Option<ConfigFile>) -> Result<Settings> {
    let config = config.unwrap_or_default();

    let pick_list = |cli: Vec<String>, file: Option<Vec<String>>| {
        if cli.is_empty() {
            file.unwrap_or_default()
        } else {
            cli
        }
    };

    let channels = pick_list(args.channels, config.channels);
    if channels.is_empty() {
        return Err(GraphError::NoStartChannels.into());
    }

    let format = match (args.format, config.format) {
        (Some(format), _) => format,
        (None, Some(raw)) => raw.parse::<OutputFormat>().map_err(|e| anyhow!(e))?,
        (None, None) => OutputFormat::default(),
    };

    Ok(Settings {
        graph_url: args
            .graph_url
            .or(config.graph_url)
            .unwrap_or_else(|| CincinnatiGraphSource::DEFAULT_GRAPH_URL.to_string()),
        arch: args
            .arch
            .or(config.arch)
            .unwrap_or_else(|| DEFAULT_ARCH.to_string()),
        channels,
        extra_channels: pick_list(args.extra_channels, config.extra_channels),
        accepted_risks: pick_list(args.accept_risks, config.accepted_risks),
        format,
        per_channel: args.per_channel || config.per_channel.unwrap_or(false),
        output: args.output,
    })
}

/// Input errors raised before any fetch exit like argument errors
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<GraphError>() {
        Some(e) if e.is_input_error() => ExitCode::InvalidArguments,
        _ => ExitCode::ApplicationError,
    }
}
