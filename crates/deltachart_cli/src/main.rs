//! deltachart CLI
//!
//! Loads time series from JSON and reports drag selections, per-series deltas,
//! and Y-axis bounds the same way the interactive chart computes them.

mod config;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::DeltaChartConfig;
use deltachart_charts::{AnalysisChart, BrushRelease, Domain1D, LinearScale};
use deltachart_core::{Series, TimeRange};

#[derive(Parser)]
#[command(name = "deltachart")]
#[command(author, version, about = "Inspect time-series selections, deltas, and axis bounds", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute per-series deltas for a time range
    Delta {
        /// Series file (JSON array of {name, color, data: [{x, y}]})
        #[arg(short, long)]
        series: PathBuf,

        /// Range start (Unix seconds)
        #[arg(long, allow_hyphen_values = true)]
        from: f64,

        /// Range end (Unix seconds)
        #[arg(long, allow_hyphen_values = true)]
        to: f64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Replay a drag gesture over a plot of the given width
    Select {
        /// Series file (JSON array of {name, color, data: [{x, y}]})
        #[arg(short, long)]
        series: PathBuf,

        /// Pixel where the drag started
        #[arg(long, allow_hyphen_values = true)]
        start_px: f64,

        /// Pixel where the drag ended
        #[arg(long, allow_hyphen_values = true)]
        end_px: f64,

        /// Plot width in pixels (overrides the config file)
        #[arg(short, long)]
        width: Option<f64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show Y-axis bounds for a scaling mode
    Bounds {
        /// Series file (JSON array of {name, color, data: [{x, y}]})
        #[arg(short, long)]
        series: PathBuf,

        /// Scaling mode (fixed-zero, fixed, rescale); defaults to the configured mode
        #[arg(short, long)]
        mode: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => DeltaChartConfig::load_from_path(path)?,
        None => DeltaChartConfig::default(),
    };
    debug!("Using config: {:?}", config);

    match cli.command {
        Commands::Delta {
            series,
            from,
            to,
            json,
        } => cmd_delta(&config, &series, from, to, json),
        Commands::Select {
            series,
            start_px,
            end_px,
            width,
            json,
        } => cmd_select(&config, &series, start_px, end_px, width, json),
        Commands::Bounds { series, mode, json } => cmd_bounds(&config, &series, mode, json),
    }
}

fn load_series(path: &Path) -> Result<Vec<Series>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let series: Vec<Series> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse series from {}", path.display()))?;
    info!("Loaded {} series from {}", series.len(), path.display());
    Ok(series)
}

fn load_chart(config: &DeltaChartConfig, path: &Path) -> Result<AnalysisChart> {
    let series = load_series(path)?;
    AnalysisChart::new(series, config.analysis_config())
        .with_context(|| format!("Invalid series in {}", path.display()))
}

fn print_selection(chart: &AnalysisChart, json: bool) -> Result<()> {
    if json {
        println!("{}", report::selection_json(chart.selection())?);
    } else {
        print!("{}", report::selection_text(chart.selection()));
    }
    Ok(())
}

fn cmd_delta(config: &DeltaChartConfig, path: &Path, from: f64, to: f64, json: bool) -> Result<()> {
    let range = TimeRange::try_new(from, to)?;
    let mut chart = load_chart(config, path)?;
    chart.select(range);
    print_selection(&chart, json)
}

fn cmd_select(
    config: &DeltaChartConfig,
    path: &Path,
    start_px: f64,
    end_px: f64,
    width: Option<f64>,
    json: bool,
) -> Result<()> {
    let width = width.unwrap_or(config.chart.plot_width);
    anyhow::ensure!(
        width.is_finite() && width > 0.0,
        "plot width must be positive (got {width})"
    );

    let mut chart = load_chart(config, path)?;

    // The whole data set is visible: the x-extent spans the plot width.
    let mut x_domain =
        Domain1D::x_extent(chart.series()).context("series contain no data points")?;
    x_domain.clamp_span_min(1.0);
    let scale = LinearScale::for_plot(x_domain, width);
    debug!(
        "Mapping 0..{} px onto {}..{}",
        width, x_domain.min, x_domain.max
    );

    chart.on_mouse_down(start_px);
    chart.on_mouse_move(end_px, &scale);
    match chart.on_mouse_up(end_px, &scale) {
        BrushRelease::Selected(left, right) => {
            debug!("Drag {}..{} px is a selection", left, right);
        }
        BrushRelease::Click | BrushRelease::Idle => {
            info!(
                "Drag of {} px is within the click threshold",
                (end_px - start_px).abs()
            );
        }
    }
    print_selection(&chart, json)
}

fn cmd_bounds(
    config: &DeltaChartConfig,
    path: &Path,
    mode: Option<String>,
    json: bool,
) -> Result<()> {
    let mut chart = load_chart(config, path)?;
    let bounds = match mode {
        Some(m) => chart.set_scaling_param(&m),
        None => chart.y_bounds(),
    };
    let mode = chart.scaling_mode();
    if json {
        println!("{}", report::bounds_json(mode, bounds)?);
    } else {
        print!("{}", report::bounds_text(mode, bounds));
    }
    Ok(())
}
