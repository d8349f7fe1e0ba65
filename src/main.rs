//! Binary entrypoint for photo-poster.
//!
//! Delegates all logic to the library crate; no local modules here.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use photo_poster::config::{self, Mode};
use photo_poster::{grid, loader, mosaic, scan, writer};

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "photo-poster", about = "Grid and mosaic posters from a photo folder")]
struct Cli {
    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE", default_value = "config.yaml")]
    config: PathBuf,

    /// Override the configured mode (grid, mosaic, both)
    #[arg(long, value_name = "MODE")]
    mode: Option<String>,

    /// Override the mosaic shuffle seed
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("photo_poster={}", level).parse()?);
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

fn parse_mode(raw: &str) -> Result<Mode> {
    match raw {
        "grid" => Ok(Mode::Grid),
        "mosaic" => Ok(Mode::Mosaic),
        "both" => Ok(Mode::Both),
        other => anyhow::bail!("invalid mode {other:?}, expected grid, mosaic, or both"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let cfg = config::from_yaml_file(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    cfg.validate().context("validating configuration")?;

    let mode = match &cli.mode {
        Some(raw) => parse_mode(raw)?,
        None => cfg.mode,
    };

    let opts = scan::ScanOptions {
        recursive: cfg.recursive,
        extensions: cfg.extensions.clone(),
    };
    let paths = scan::scan_folder(&cfg.image_folder, &opts)
        .with_context(|| format!("scanning {}", cfg.image_folder.display()))?;
    info!(count = paths.len(), "scanned image files");

    let report = loader::load_photos(&paths);
    if !report.skipped.is_empty() {
        warn!(count = report.skipped.len(), "files skipped during decode");
    }
    if report.photos.is_empty() {
        anyhow::bail!(
            "no decodable images in {}, nothing to compose",
            cfg.image_folder.display()
        );
    }
    let images: Vec<_> = report.photos.into_iter().map(|p| p.image).collect();

    if matches!(mode, Mode::Grid | Mode::Both) {
        let poster = grid::compose(&images, cfg.poster_size, cfg.background)?;
        writer::save_poster(&poster, &cfg.output_grid)
            .with_context(|| format!("writing {}", cfg.output_grid.display()))?;
    }

    if matches!(mode, Mode::Mosaic | Mode::Both) {
        // Seed only at this outermost boundary so library runs stay reproducible.
        let mut rng = match cli.seed.or(cfg.shuffle_seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let poster = mosaic::compose(&images, cfg.poster_size, cfg.background, &mut rng)?;
        writer::save_poster(&poster, &cfg.output_mosaic)
            .with_context(|| format!("writing {}", cfg.output_mosaic.display()))?;
    }

    Ok(())
}
