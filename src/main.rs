use planetsim::{Scenario, ScenarioConfig};
use planetsim::{run_2d, run_headless};

use clap::Parser;
use anyhow::{bail, Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML, looked up as given and then under `scenarios/`.
    /// The built-in inner solar system is used when omitted
    #[arg(short, long)]
    file_name: Option<String>,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Steps to run in headless mode
    #[arg(long, default_value_t = 365)]
    steps: u64,
}

fn resolve_scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario(file_name: Option<&str>) -> Result<Scenario> {
    let Some(file_name) = file_name else {
        return Ok(Scenario::inner_solar_system()?);
    };

    let config_path = resolve_scenario_path(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(Scenario::build_scenario(scenario_cfg)?)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.headless {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        let mut scenario = load_scenario(args.file_name.as_deref())?;
        run_headless(&mut scenario, args.steps)?;
        return Ok(());
    }

    let scenario = load_scenario(args.file_name.as_deref())?;
    if run_2d(scenario).is_error() {
        bail!("viewer exited after a failed simulation step");
    }

    Ok(())
}
