//! Run a single impact projection from the command line
//!
//! Parameters come from an optional JSON config, overridden by flags.
//! Prints the final-year summary and full table, or a JSON run report.

use anyhow::{Context, Result};
use clap::Parser;
use impact_simulator::config::load_config;
use impact_simulator::report::{render_table, write_csv_file, RunReport, Summary};
use impact_simulator::{ProjectionEngine, SimulationConfig};
use log::info;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(author, version, about = "Project employment, emissions, water use and health under industrial growth")]
struct Cli {
    /// JSON config to start from (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Years to simulate (5-50)
    #[arg(long)]
    time_steps: Option<u32>,

    /// Operations in year 1 (10-500)
    #[arg(long)]
    initial_operations: Option<f64>,

    /// Annual growth rate as a fraction, e.g. 0.05 for 5% (0.01-0.20)
    #[arg(long)]
    growth_rate: Option<f64>,

    /// Jobs per operation (1-100)
    #[arg(long)]
    jobs_per_op: Option<f64>,

    /// Emissions per operation (0.1-2.0)
    #[arg(long)]
    emission_per_op: Option<f64>,

    /// Water use per operation (0.1-2.0)
    #[arg(long)]
    water_per_op: Option<f64>,

    /// Health index points lost per unit of emissions (0.1-2.0)
    #[arg(long)]
    health_impact: Option<f64>,

    /// Write the full table to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print a JSON run report instead of text tables
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn build_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => SimulationConfig::default(),
        };

        if let Some(v) = self.time_steps { config.time_steps = v; }
        if let Some(v) = self.initial_operations { config.initial_operations = v; }
        if let Some(v) = self.growth_rate { config.growth_rate = v; }
        if let Some(v) = self.jobs_per_op { config.jobs_per_op = v; }
        if let Some(v) = self.emission_per_op { config.emission_per_op = v; }
        if let Some(v) = self.water_per_op { config.water_per_op = v; }
        if let Some(v) = self.health_impact { config.health_impact = v; }

        config.validate().context("invalid simulation parameters")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.build_config()?;

    let start = Instant::now();
    let result = ProjectionEngine::new(config).project();
    info!("Projected {} years in {:?}", result.len(), start.elapsed());

    if let Some(path) = &cli.output {
        write_csv_file(path, &result)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    if cli.json {
        let report = RunReport::new(config, result);
        println!("{}", report.to_json_pretty()?);
        return Ok(());
    }

    if let Some(summary) = Summary::from_result(&result) {
        println!("{summary}");
    }
    println!("Full Data Table");
    print!("{}", render_table(&result));

    if let Some(path) = &cli.output {
        println!("\nOutput written to {}", path.display());
    }
    Ok(())
}
