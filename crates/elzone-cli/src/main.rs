//! elzone - false-color exposure zones for camera log stills
//!
//! Decodes S-Log3, LogC3, Blackmagic Film and V-Log frames and paints each
//! pixel with the color of its exposure zone relative to 18% grey.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "elzone")]
#[command(author, version, about = "False-color exposure zones for camera log stills")]
#[command(long_about = "
Paints every pixel of a log-encoded still with one of 15 exposure-zone colors,
from +6 stops (white) through mid-grey (grey) to -6 stops (black).

Examples:
  elzone render frame.png -o zones.png            # S-Log3, full range
  elzone render frame.jpg -o zones.png -c logc3_ei800 --legal
  elzone render frame.png -o zones.png -e -1      # re-centre one stop darker
  elzone stats frame.png -c bmd_film_gen5         # pixels per zone
  elzone probe 0.41 -c slog3                      # one code value
  elzone curves                                   # registered curves
  elzone legend                                   # zone colors
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a false-color overlay
    #[command(visible_alias = "r")]
    Render(RenderArgs),

    /// Count pixels per exposure zone
    #[command(visible_alias = "s")]
    Stats(StatsArgs),

    /// Trace one code value through the pipeline
    #[command(visible_alias = "p")]
    Probe(ProbeArgs),

    /// List registered log curves
    Curves,

    /// Print the zone legend
    Legend,

    /// Print the effective configuration as YAML
    Config(ZoneArgs),
}

/// Zone parameters shared by commands. Unset flags fall back to the config.
#[derive(Args)]
struct ZoneArgs {
    /// Curve key (see `elzone curves`)
    #[arg(short, long)]
    curve: Option<String>,

    /// Treat input as legal-range (16-235) video
    #[arg(short, long, conflicts_with = "full")]
    legal: bool,

    /// Treat input as full-range (0-255), overriding `legal_levels` in the config
    #[arg(long)]
    full: bool,

    /// Exposure offset in stops
    #[arg(short, long, allow_hyphen_values = true)]
    exposure: Option<f32>,

    /// Luminance mode: max, average, weighted
    #[arg(long)]
    luma: Option<String>,

    /// Render single-threaded
    #[arg(long, conflicts_with = "parallel")]
    sequential: bool,

    /// Render across threads, overriding `parallel: false` in the config
    #[arg(long)]
    parallel: bool,
}

#[derive(Args)]
struct RenderArgs {
    /// Input image (PNG or JPEG)
    input: PathBuf,

    /// Output PNG
    #[arg(short, long)]
    output: PathBuf,

    #[command(flatten)]
    zone: ZoneArgs,
}

#[derive(Args)]
struct StatsArgs {
    /// Input image (PNG or JPEG)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    #[command(flatten)]
    zone: ZoneArgs,
}

#[derive(Args)]
struct ProbeArgs {
    /// Code value: 0-255, or normalized 0.0-1.0 when it has a decimal point
    code: String,

    #[command(flatten)]
    zone: ZoneArgs,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Render(args) => commands::render::run(args, &config, cli.verbose),
        Commands::Stats(args) => commands::stats::run(args, &config, cli.verbose),
        Commands::Probe(args) => commands::probe::run(args, &config),
        Commands::Curves => commands::curves::run(&config),
        Commands::Legend => commands::legend::run(),
        Commands::Config(args) => commands::show_config(&args, &config),
    }
}
