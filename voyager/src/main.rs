use voyager::visualization::{ovito, save_with, series};
use voyager::{bench_beeman_curve, PhysicalConstants, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up under `scenarios/` unless it exists as given
    #[arg(short, default_value = "voyager.yaml")]
    file_name: String,

    /// Run the time step sweep instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let given = PathBuf::from(file_name);
    let config_path = if given.exists() {
        given
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };
    info!("loading scenario from {}", config_path.display());

    ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.bench {
        bench_beeman_curve()?;
        return Ok(());
    }

    info!("Hello, Voyager!");
    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg, PhysicalConstants::default())?;
    let dt = scenario.parameters.dt;
    let (mut engine, termination, output) = scenario.into_engine();

    // First, simulate
    info!("Starting simulation...");
    engine.simulate(termination.predicate())?;
    let total_time = engine.system().time();
    let results = engine.into_results();
    info!("Finished simulation: {} snapshots", results.len());

    // Then, save
    info!("Saving outputs...");
    if let Some(path) = &output.ovito {
        save_with(path, |w| ovito::write_ovito(w, &results))
            .with_context(|| format!("writing {}", path.display()))?;
    }
    if let Some(path) = &output.distances {
        save_with(path, |w| series::write_distances(w, &results, dt, total_time))
            .with_context(|| format!("writing {}", path.display()))?;
    }
    if let Some(path) = &output.speed {
        save_with(path, |w| series::write_speed(w, &results))
            .with_context(|| format!("writing {}", path.display()))?;
    }
    if let Some(path) = &output.trajectory {
        save_with(path, |w| series::write_trajectory(w, &results))
            .with_context(|| format!("writing {}", path.display()))?;
    }
    info!("Finished saving output in all formats.");
    info!("Bye-bye!");

    Ok(())
}
