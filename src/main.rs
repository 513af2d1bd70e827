use fourbody::{IntegratorConfig, Scenario, ScenarioConfig, Simulation};
use fourbody::{bench_gravity, bench_precompute};

use anyhow::Result;
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "four_body_rkf45.yaml")]
    file_name: String,

    /// Run the timing harness instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_precompute();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    let mut sim = Simulation::new(&scenario);
    let trajectory = sim.run()?;

    info!(
        "recorded {} steps for {} bodies (playback stride {})",
        trajectory.len(),
        trajectory.body_count(),
        scenario.engine.skip_frames
    );
    if scenario.engine.integrator == IntegratorConfig::Rkf45 {
        info!("final adaptive step size: {:e}", sim.current_h());
    }
    for (i, b) in sim.system().bodies.iter().enumerate() {
        info!(
            "body {i}: position ({:.3}, {:.3}), velocity ({:.3}, {:.3})",
            b.x.x, b.x.y, b.v.x, b.v.y
        );
    }

    Ok(())
}
