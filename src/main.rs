//! html-insight main entry point
//!
//! This is the command-line interface for html-insight. It binds the URL
//! argument to a `Search`, validates it, runs the inspection and prints the
//! result. Every failure is reported as a bad request.

use anyhow::Context;
use clap::Parser;
use html_insight::config::{load_config_with_hash, Config};
use html_insight::output::{render, write_output, OutputFormat};
use html_insight::{Inspector, ParsedInfo, Search};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// html-insight: structured facts about a web page
///
/// Fetches a single HTML page and reports its title, HTML version, whether
/// it is a login page, its heading histogram, and its internal and external
/// hypermedia links.
#[derive(Parser, Debug)]
#[command(name = "html-insight")]
#[command(version = "1.0.0")]
#[command(about = "Structured facts about a web page", long_about = None)]
struct Cli {
    /// URL of the page to inspect
    #[arg(value_name = "URL")]
    url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Write the result to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Exit status for a request the core could not handle
const BAD_REQUEST: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match load_configuration(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load {}: {}", config_name(&cli), e);
            return ExitCode::FAILURE;
        }
    };

    let info = match handle_search(config, Search::new(cli.url.clone())).await {
        Ok(info) => info,
        Err(e) => {
            eprintln!("Bad request: {}", e);
            return ExitCode::from(BAD_REQUEST);
        }
    };

    match emit(&info, &cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Failed to write result: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so that stdout only carries the result.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("html_insight=warn,warn"),
            1 => EnvFilter::new("html_insight=info,warn"),
            2 => EnvFilter::new("html_insight=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file if one was given, defaults otherwise
fn load_configuration(cli: &Cli) -> html_insight::Result<Config> {
    let Some(path) = &cli.config else {
        tracing::debug!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    Ok(config)
}

fn config_name(cli: &Cli) -> String {
    cli.config
        .as_ref()
        .map_or_else(|| "configuration".to_string(), |path| path.display().to_string())
}

/// Validates the search and runs the inspection
async fn handle_search(config: Config, search: Search) -> html_insight::Result<ParsedInfo> {
    search.validate()?;
    let inspector = Inspector::new(config)?;
    inspector.parse(&search.url).await
}

/// Writes the rendered result to the output file or stdout
fn emit(info: &ParsedInfo, cli: &Cli) -> anyhow::Result<()> {
    match &cli.output {
        Some(path) => {
            write_output(info, cli.format, path)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!("Result written to: {}", path.display());
        }
        None => println!("{}", render(info, cli.format)?),
    }
    Ok(())
}
