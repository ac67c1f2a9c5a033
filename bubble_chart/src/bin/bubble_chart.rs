use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use bubble_chart::config::{ChartConfig, resolve_config};
use bubble_chart::layout;
use bubble_chart::surface::TextSurface;
use clap::{Parser, Subcommand, ValueEnum};
use market_sim::{RngDraws, Series, cache, simulated_series};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Buy/sell volume bubble chart over simulated buckets")]
struct Cli {
    /// Chart config TOML (defaults to $BUBBLE_CHART_CONFIG, then built-ins)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Seed the simulated market instead of drawing fresh entropy
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Lay out the most recent buckets and print the drawing primitives
    Render {
        /// Number of buckets to show; must be a slider position
        #[arg(long)]
        window: Option<usize>,

        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Print the simulated buckets as JSON
    Series {
        /// Only the most recent N buckets
        #[arg(long)]
        tail: Option<usize>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn series_for(cfg: &ChartConfig, seed: Option<u64>) -> Result<Arc<Series>> {
    let series = match seed {
        Some(seed) => cache::global().get_or_generate(&cfg.generator, || RngDraws::seeded(seed)),
        None => simulated_series(&cfg.generator),
    };
    series.context("generate simulated series")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = resolve_config(cli.config.as_deref())?;
    let series = series_for(&cfg, cli.seed)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.cmd {
        Cmd::Render { window, format } => {
            let window_size = cfg
                .slider
                .validate(window.unwrap_or(cfg.slider.default))
                .with_context(|| {
                    let allowed: Vec<String> =
                        cfg.slider.values().map(|v| v.to_string()).collect();
                    format!("choose a window size from {}", allowed.join(", "))
                })?;
            let window = series.tail(window_size);
            let chart = layout(window, &cfg.style);
            info!(
                window = window.len(),
                bubbles = chart.bubbles.len(),
                skipped = chart.skipped(window.len()),
                "rendering bubble chart"
            );
            match format {
                Format::Json => {
                    serde_json::to_writer_pretty(&mut out, &chart)?;
                    writeln!(out)?;
                }
                Format::Text => chart.draw_onto(&mut TextSurface::new(&mut out))?,
            }
        }
        Cmd::Series { tail } => {
            let buckets = series.tail(tail.unwrap_or(series.len()));
            serde_json::to_writer_pretty(&mut out, buckets)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
