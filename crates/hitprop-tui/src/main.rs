// Hit-prop recommender entry point.
//
// Startup sequence:
// 1. Parse command line
// 2. Load config (seeding config/ from defaults/ when needed)
// 3. Initialize tracing (log to file, not terminal)
// 4. Resolve input/export paths
// 5. Run the pipeline once
// 6. Either print a summary and export (--no-tui) or open the viewer

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use hitprop_core::config::{self, Config};
use hitprop_core::export::write_artifact;
use hitprop_core::run_files;
use hitprop_tui::logging::init_tracing;
use hitprop_tui::summary::{format_columns, format_summary};
use hitprop_tui::tui::{self, ViewState};

#[derive(Parser)]
#[command(name = "hitprop")]
#[command(about = "MLB hit prop model: daily bet recommendations", long_about = None)]
struct Cli {
    /// Directory containing config/ and defaults/ (default: current directory)
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Player stats CSV (overrides data_paths.stats)
    #[arg(long)]
    stats: Option<PathBuf>,

    /// Betting odds CSV (overrides data_paths.odds)
    #[arg(long)]
    odds: Option<PathBuf>,

    /// Run once, write recommended_bets.csv and print a summary instead of
    /// opening the viewer
    #[arg(long)]
    no_tui: bool,
}

fn main() -> anyhow::Result<()> {
    // 1. Parse command line
    let cli = Cli::parse();

    // 2. Load config
    let base_dir = match cli.config_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    let config = config::load_config(&base_dir).context("failed to load configuration")?;

    // 3. Initialize tracing
    init_tracing(&Config::resolve(&base_dir, &config.logging.dir))?;
    info!("hitprop starting up (base dir {})", base_dir.display());

    // 4. Resolve paths; command-line paths are taken as given
    let stats_path = cli
        .stats
        .unwrap_or_else(|| Config::resolve(&base_dir, &config.data_paths.stats));
    let odds_path = cli
        .odds
        .unwrap_or_else(|| Config::resolve(&base_dir, &config.data_paths.odds));
    let export_dir = Config::resolve(&base_dir, &config.export.dir);
    info!(
        "stats: {}, odds: {}, export dir: {}",
        stats_path.display(),
        odds_path.display(),
        export_dir.display()
    );

    // 5/6. Headless mode
    if cli.no_tui {
        let report = match run_files(&stats_path, &odds_path) {
            Ok(report) => report,
            Err(e) => {
                error!("pipeline run failed: {}", e);
                if let Some(columns) = e.columns() {
                    print!("{}", format_columns(columns));
                }
                return Err(e).context("no recommendations produced");
            }
        };
        let artifact = report.artifact().context("failed to build CSV export")?;
        let path = write_artifact(&export_dir, &artifact).context("failed to write CSV export")?;
        print!("{}", format_summary(&report, &path));
        return Ok(());
    }

    let mut view_state = ViewState::new(stats_path, odds_path, export_dir);
    view_state.rerun();
    tui::run(view_state)?;

    info!("hitprop shut down cleanly");
    Ok(())
}
