use cisim::base::ScenarioConfig;
use cisim::scenario::{Scenario, ScenarioManager};
use cisim::SimError;
use std::fs;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "cisim_report",
    about = "Runs a what-if scenario comparison and prints the report"
)]
struct Options {
    /// Path to a JSON file holding an array of scenario configurations
    scenario_file: String,

    /// Print the full comparison as JSON instead of the summary
    #[structopt(long)]
    json: bool,
}

fn main() -> Result<(), SimError> {
    // parse options
    let options = Options::from_args();

    // load scenario configurations
    let text = fs::read_to_string(&options.scenario_file).map_err(|e| SimError::InvalidInput(e.to_string()))?;
    let configs: Vec<ScenarioConfig> = serde_json::from_str(&text).map_err(|e| SimError::InvalidInput(e.to_string()))?;

    // populate the manager
    let mut manager = ScenarioManager::new();
    for config in &configs {
        manager.add_scenario(Scenario::new(config)?);
    }

    // run the comparison
    let comparison = manager.compare_scenarios(None)?;

    // report
    if options.json {
        let json = serde_json::to_string_pretty(&comparison).map_err(|e| SimError::InvalidInput(e.to_string()))?;
        println!("{}", json);
    } else {
        let summary = comparison.summary();
        let thin_line = format!("{:─^1$}", "", summary.len().min(100));
        println!("\n{}", thin_line);
        for scenario in &comparison.scenarios {
            println!(
                "{:<24} stress {:>6.2}  risk {:<8}  failure {:>5.1}%",
                scenario.scenario_name,
                scenario.stress_score,
                scenario.risk_level.label(),
                scenario.failure_probability
            );
        }
        println!("{}", thin_line);
        println!("{}\n", summary);
    }
    Ok(())
}
