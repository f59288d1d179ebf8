// Entry point: loads the sweep config, runs it, writes the TSV table.
mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use logistic_sweep::{write_tsv_file, SweepHarness};
use logistic_types::SweepConfig;

use crate::cli::Args;

fn main() -> Result<()> {
    // Logs go to stderr; `log` records are bridged into the subscriber.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let base = match &args.config {
        Some(path) => SweepConfig::load(path).with_context(|| format!("loading {path}"))?,
        None => SweepConfig::default(),
    };
    let config = args.apply(base);

    if args.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let harness = SweepHarness::from_config(&config).context("invalid sweep config")?;
    let report = harness.run()?;

    for (cfg, err) in report.failures() {
        log::error!(
            "configuration {} (r={}, alpha={}, n={}, n_steps={}) failed: {err}",
            cfg.idx,
            cfg.r,
            cfg.alpha,
            cfg.n,
            cfg.n_steps
        );
    }
    for (idx, summary) in report.summaries() {
        log::debug!(
            "configuration {idx}: {} steps, mean order {:.6}, mean variance {:.6}, final order {:.6}",
            summary.steps,
            summary.mean_order,
            summary.mean_variance,
            summary.final_order
        );
    }
    let diverged = report.non_finite_configs();
    if !diverged.is_empty() {
        log::warn!("{} configurations went non-finite: {diverged:?}", diverged.len());
    }

    write_tsv_file(&args.output, &report.rows())
        .with_context(|| format!("writing {}", args.output))?;

    if !report.outcomes.is_empty() && report.succeeded() == 0 {
        bail!("every configuration failed");
    }
    Ok(())
}
