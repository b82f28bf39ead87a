mod batch;
mod provenance;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use geoprim::sample::{Bounds2, SampleCfg};
use geoprim::GeomCfg;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::provenance::{build_info, write_sidecar, Provenance};

#[derive(Parser)]
#[command(name = "geoprim")]
#[command(about = "Batch orientation queries over CSV point triples")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify every `ax,ay,bx,by,cx,cy` row and write a JSON array
    Classify {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Absolute tolerance for collinearity and coincidence checks
        #[arg(long, default_value_t = geoprim::TOLERANCE)]
        tolerance: f64,
    },
    /// Write random point triples as CSV
    Sample {
        #[arg(long, default_value_t = 100)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
        lo: f64,
        #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
        hi: f64,
        /// Round coordinates to integers
        #[arg(long)]
        grid: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print build provenance as JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Classify {
            input,
            out,
            tolerance,
        } => classify(&input, &out, tolerance),
        Action::Sample {
            n,
            seed,
            lo,
            hi,
            grid,
            out,
        } => {
            let cfg = SampleCfg {
                bounds: Bounds2 { lo, hi },
                snap_to_grid: grid,
            };
            sample(&out, n, seed, cfg)
        }
        Action::Report => report(),
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn classify(input: &Path, out: &Path, tolerance: f64) -> Result<()> {
    if !(tolerance.is_finite() && tolerance > 0.0) {
        bail!("tolerance must be a positive finite number, got {tolerance}");
    }
    tracing::info!(input = %input.display(), out = %out.display(), tolerance, "classify");
    let cfg = GeomCfg::with_tolerance(tolerance);
    let rows = batch::read_triples(input)?;
    let (records, summary) = batch::classify_rows(&rows, &cfg);
    tracing::info!(
        rows = summary.rows,
        classified = summary.classified,
        failed = summary.failed,
        on_segment = summary.on_segment,
        "classify_done"
    );

    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&records)?)?;
    let prov = Provenance::new(serde_json::json!({
        "command": "classify",
        "input": input.to_string_lossy(),
        "tolerance": tolerance,
    }))
    .with_summary(serde_json::to_value(&summary)?);
    write_sidecar(out, prov)?;
    Ok(())
}

fn sample(out: &Path, n: usize, seed: u64, cfg: SampleCfg) -> Result<()> {
    tracing::info!(n, seed, lo = cfg.bounds.lo, hi = cfg.bounds.hi, grid = cfg.snap_to_grid, "sample");
    ensure_parent(out)?;
    batch::write_samples(out, n, cfg, seed)?;
    let prov = Provenance::new(serde_json::json!({
        "command": "sample",
        "n": n,
        "seed": seed,
        "lo": cfg.bounds.lo,
        "hi": cfg.bounds.hi,
        "grid": cfg.snap_to_grid,
    }));
    write_sidecar(out, prov)?;
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&build_info())?);
    Ok(())
}
