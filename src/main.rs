//! roster - Entry Point

use clap::Parser;
use roster::view::{ColorConfig, RunOptions};
use std::path::PathBuf;
use tracing::info;

/// roster - browse, search and edit a member list in the terminal
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version)]
#[command(about = "TUI for paginating, searching, selecting and editing member records")]
pub struct Args {
    /// URL or JSON file to load members from (defaults to the configured endpoint)
    pub source: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Apply this search once the members have loaded
    #[arg(short, long)]
    pub search: Option<String>,

    /// Do not re-fetch the collection when the page changes
    #[arg(long)]
    pub no_refetch: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = roster::config::load_config_with_precedence(args.config.clone())?;
        let merged = roster::config::merge_config(config_file);
        let with_env = roster::config::apply_env_overrides(merged);

        // --no-refetch only ever turns refetching off
        let refetch_override = args.no_refetch.then_some(false);
        roster::config::apply_cli_overrides(with_env, args.source.clone(), refetch_override)
    };

    roster::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let source = roster::source::detect_record_source(&config.endpoint, config.request_timeout())?;

    let options = RunOptions {
        refetch_on_page_change: config.refetch_on_page_change,
        initial_search: args.search,
        color: ColorConfig::from_env_and_args(args.no_color),
    };

    roster::view::run_with_source(source, options)?;

    Ok(())
}
