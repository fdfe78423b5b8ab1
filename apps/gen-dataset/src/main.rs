//! gen-dataset: build an intent-prediction dataset from simulated
//! human-robot interactions.
//!
//! Each trial samples two agents at rest and three candidate goals in
//! `[-10, 10]²`, then rolls the pair forward for 200 steps of 0.05 s with the
//! robot's control passed through the minimum-distance safety filter.  The
//! per-trial labels are the human's final reached flag and the index of its
//! pursued goal.
//!
//! ```text
//! gen-dataset --trials 1000 --seed 7 --out output/run7
//! RUST_LOG=hri_dataset=debug gen-dataset --config sim.toml --format sqlite
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use hri_agent::NoReaction;
use hri_core::SimConfig;
use hri_dataset::{Dataset, DatasetBuilder};
use hri_output::{CsvWriter, DatasetWriter, SqliteWriter};

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Generate a labelled human-robot interaction dataset.
#[derive(Parser)]
#[command(name = "gen-dataset", version, about)]
struct Cli {
    /// TOML file with `SimConfig` fields (missing fields use defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of trials (overrides the config file).
    #[arg(long)]
    trials: Option<usize>,

    /// Master RNG seed (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads for the trial loop (defaults to all logical cores).
    #[arg(long)]
    threads: Option<usize>,

    /// Output directory.
    #[arg(long, default_value = "output/gen-dataset")]
    out: PathBuf,

    /// Output backend.
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Humans ignore the robot instead of stepping away from it.
    #[arg(long)]
    no_reaction: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Sqlite,
}

fn load_config(cli: &Cli) -> Result<SimConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(n) = cli.trials {
        config.num_trials = n;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if cli.threads.is_some() {
        config.num_threads = cli.threads;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn write(dataset: &Dataset, format: Format, out: &Path) -> Result<()> {
    let mut writer: Box<dyn DatasetWriter> = match format {
        Format::Csv => Box::new(CsvWriter::new(out)?),
        Format::Sqlite => Box::new(SqliteWriter::new(out)?),
    };
    writer.write_dataset(dataset)?;
    writer.finish()?;
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    println!("=== gen-dataset: human-robot interaction ===");
    println!(
        "Trials: {}  |  Horizon: {} × {} s  |  Seed: {}  |  dmin: {}",
        config.num_trials, config.horizon, config.ts, config.seed, config.dmin
    );
    println!();

    // 1. Run trials.
    let t0 = Instant::now();
    let builder = DatasetBuilder::new(config.clone());
    let dataset = if cli.no_reaction {
        builder.reaction(NoReaction).build()?
    } else {
        builder.build()?
    };
    let elapsed = t0.elapsed();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());

    // 2. Write.
    write(&dataset, cli.format, &cli.out)
        .with_context(|| format!("writing dataset to {}", cli.out.display()))?;
    info!(out = %cli.out.display(), format = ?cli.format, "dataset written");

    // 3. Summary.
    let summary = dataset.summary();
    println!("  trials                : {}", summary.trials);
    println!("  reach rate            : {:.3}", summary.reach_rate);
    println!("  mean interventions    : {:.2}", summary.mean_interventions);
    println!("  trials w/ infeasible  : {}", summary.trials_with_infeasible);
    println!("  min separation        : {:.3}", summary.min_separation);
    println!();

    println!("{:<10} {:<8}", "Goal", "Trials");
    println!("{}", "-".repeat(18));
    for (goal, count) in summary.goal_histogram.iter().enumerate() {
        println!("{goal:<10} {count:<8}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_config_parses() {
        let config: SimConfig = toml::from_str(include_str!("../sim.toml")).unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn partial_config_uses_defaults() {
        let config: SimConfig = toml::from_str("horizon = 50\n[gains]\nkp = 2.0\n").unwrap();
        assert_eq!(config.horizon, 50);
        assert_eq!(config.gains.kp, 2.0);
        assert_eq!(config.gains.kd, 2.0);
        assert_eq!(config.ts, 0.05);
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["gen-dataset", "--trials", "12", "--seed", "3", "--threads", "2"]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.num_trials, 12);
        assert_eq!(config.seed, 3);
        assert_eq!(config.num_threads, Some(2));
    }
}
