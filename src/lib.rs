pub mod chart;
pub mod error;
pub mod fetch;
pub mod lookup;
pub mod models;
pub mod series;
pub mod settings;
pub mod utils;
pub mod viewer;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use chart::{annotate, render_to_file, WINDOW_TITLE};
use error::ChartError;
use fetch::StressFetcher;
use models::StressSeries;
use settings::{Settings, DEFAULT_SETTINGS_FILE};
use viewer::{ImageDisplay, TerminalDisplay, ViewerSession, NO_DATA_MESSAGE, NO_DATA_TITLE};

#[derive(Parser, Debug)]
#[command(author, version, about = "Chart a user's historical stress levels", long_about = None)]
pub struct Cli {
    /// Numeric id of the user whose history is shown
    #[arg(allow_negative_numbers = true)]
    pub user_id: i64,

    /// Settings file (JSON)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Where to write the chart; `.svg` selects SVG output
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Do not hand selected images to the platform image viewer
    #[arg(long)]
    pub no_viewer: bool,
}

/// Build the chart for `series` and write it to `chart_path`.
///
/// Returns `None` when there is nothing to show: the fetch failed or the
/// backend returned zero records.
pub fn prepare_session(
    series: Option<StressSeries>,
    chart_path: &Path,
    size: (u32, u32),
) -> anyhow::Result<Option<ViewerSession>> {
    let Some(series) = series else {
        return Ok(None);
    };

    let chart = match annotate(&series) {
        Ok(chart) => chart,
        Err(ChartError::NoData) => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    render_to_file(&chart, chart_path, size)
        .with_context(|| format!("Failed to write chart to {}", chart_path.display()))?;
    log::info!(
        "Rendered {} points ({} legend entries) to {}",
        chart.markers.len(),
        chart.legend.len(),
        chart_path.display()
    );

    Ok(Some(ViewerSession::new(series)))
}

pub fn run() -> anyhow::Result<()> {
    // Argument errors print usage and exit before anything else happens.
    let cli = Cli::parse();

    utils::logging::init();
    log::info!("StressTrend starting up for user {}...", cli.user_id);

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));
    let settings = Settings::load(&config_path)?.with_env_overrides();
    let chart_path = cli
        .output
        .clone()
        .unwrap_or_else(|| settings.chart_output.clone());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let fetcher = StressFetcher::new(settings.endpoint_url());
    let series = runtime.block_on(fetcher.fetch(cli.user_id));

    let mut display = TerminalDisplay::new(io::stdout(), !cli.no_viewer);
    let Some(session) = prepare_session(series, &chart_path, settings.chart_size())? else {
        display.show_notice(NO_DATA_TITLE, NO_DATA_MESSAGE);
        return Ok(());
    };

    println!("[{WINDOW_TITLE}] chart written to {}", chart_path.display());
    session
        .run_interactive(io::stdin().lock(), &mut io::stdout(), &mut display)
        .context("Viewer session failed")?;

    log::info!("StressTrend session closed");
    Ok(())
}
