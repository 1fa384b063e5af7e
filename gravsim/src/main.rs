use gravsim::{Scenario, ScenarioConfig};
use gravsim::{bench_gravity, bench_step_curve};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "random_cluster.yaml")]
    file_name: String,

    /// Number of ticks to run
    #[arg(long, default_value_t = 1000)]
    steps: u64,

    /// Print a status line every this many ticks
    #[arg(long, default_value_t = 100)]
    report_every: u64,

    /// Run the force/step benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn report(scenario: &Scenario) {
    let sys = &scenario.system;
    let p = &scenario.parameters;
    let trail = sys.bodies.first().map_or(0, |b| b.history().len());
    println!(
        "step {:6}  t = {:9.4} s  |p| = {:10.4e}  KE = {:10.4e}  U = {:10.4e}  trail = {}",
        sys.steps,
        sys.t,
        sys.total_momentum().norm(),
        sys.kinetic_energy(),
        sys.potential_energy(p.g, p.softening),
        trail,
    );
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_gravity()?;
        bench_step_curve()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(&scenario_cfg)?;

    println!(
        "gravsim: {} bodies, dt = {} s, G = {:e}, softening = {}",
        scenario.system.bodies.len(),
        scenario.parameters.dt,
        scenario.parameters.g,
        scenario.parameters.softening,
    );
    report(&scenario);

    let every = args.report_every.max(1);
    for _ in 0..args.steps {
        scenario.tick()?;

        if !scenario.system.is_finite() {
            println!("non-finite state at step {}, stopping", scenario.system.steps);
            break;
        }
        if scenario.system.steps % every == 0 {
            report(&scenario);
        }
    }

    Ok(())
}
