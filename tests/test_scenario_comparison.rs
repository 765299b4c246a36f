use cisim::base::SampleConfigs;
use cisim::scenario::{Scenario, ScenarioManager};
use cisim::SimError;

#[test]
fn test_baseline_versus_reinforced_comparison() -> Result<(), SimError> {
    let mut manager = ScenarioManager::new();
    for config in SampleConfigs::bridge_flood_scenarios() {
        manager.add_scenario(Scenario::new(&config)?);
    }

    let comparison = manager.compare_scenarios(None)?;
    assert_eq!(comparison.scenarios.len(), 2);

    // best scenario carries the minimum stress score
    let min = comparison
        .scenarios
        .iter()
        .map(|s| s.stress_score)
        .fold(f64::INFINITY, f64::min);
    assert_eq!(comparison.best_scenario.stress_score, min);
    assert_eq!(comparison.best_scenario.name, "Foundation + Deck");

    // the reinforced scenario reduces stress relative to the baseline
    let baseline = &comparison.scenarios[0];
    let reinforced = &comparison.scenarios[1];
    assert!(baseline.reinforcements.is_empty());
    assert_eq!(reinforced.reinforcements.len(), 2);
    assert!(reinforced.stress_score < baseline.stress_score);

    // cost-benefit section covers exactly the non-baseline scenarios
    assert_eq!(comparison.cost_benefit_analysis.len(), 1);
    let entry = &comparison.cost_benefit_analysis[0];
    assert_eq!(entry.cost_factor, 4.5);
    assert_eq!(
        entry.risk_reduction_percent,
        ((baseline.failure_probability - reinforced.failure_probability) * 100.0).round() / 100.0
    );

    // chart series stay aligned with the scenario list
    let chart = &comparison.comparison_chart_data;
    assert_eq!(chart.scenario_names.len(), 2);
    assert_eq!(chart.stress_scores[0], baseline.stress_score);
    assert_eq!(chart.stress_scores[1], reinforced.stress_score);

    let summary = comparison.summary();
    assert!(summary.contains("Optimal scenario: 'Foundation + Deck'"));
    Ok(())
}

#[test]
fn test_comparison_is_idempotent() -> Result<(), SimError> {
    let mut manager = ScenarioManager::new();
    for config in SampleConfigs::bridge_flood_scenarios() {
        manager.add_scenario(Scenario::new(&config)?);
    }
    let first = manager.compare_scenarios(None)?;
    let second = manager.compare_scenarios(None)?;
    for (a, b) in first.scenarios.iter().zip(second.scenarios.iter()) {
        assert_eq!(a.stress_score, b.stress_score);
        assert_eq!(a.failure_probability, b.failure_probability);
    }
    Ok(())
}

#[test]
fn test_reinforcement_never_reduces_stress_beyond_forty_percent() -> Result<(), SimError> {
    // stack every strategy in the catalog onto one scenario
    let mut config = SampleConfigs::bridge_flood_scenarios().remove(1);
    config.reinforcements = cisim::scenario::strategy_catalog()
        .iter()
        .map(|s| s.id.to_string())
        .collect();
    let mut scenario = Scenario::new(&config)?;
    let results = scenario.run_analysis();

    let original = results.analysis.stress_score_original.unwrap();
    let adjusted = results.analysis.stress_score;
    assert!(adjusted >= original * 0.6 - 1e-9, "reduction exceeded 40%");
    assert_eq!(results.analysis.stress_reduction_percent, Some(40.0));
    Ok(())
}

#[test]
fn test_scenario_config_round_trips_through_json() -> Result<(), SimError> {
    let configs = SampleConfigs::bridge_flood_scenarios();
    let json = serde_json::to_string(&configs).map_err(|e| SimError::InvalidInput(e.to_string()))?;
    let parsed: Vec<cisim::base::ScenarioConfig> =
        serde_json::from_str(&json).map_err(|e| SimError::InvalidInput(e.to_string()))?;

    assert_eq!(parsed.len(), configs.len());
    assert_eq!(parsed[1].scenario_id, "reinforced");
    assert_eq!(parsed[1].infrastructure.span_length, Some(150.0));
    assert_eq!(parsed[1].climate_event.water_level, Some(5.0));
    assert_eq!(parsed[1].reinforcements.len(), 2);

    // a scenario built from the round-tripped config behaves identically
    let mut original = Scenario::new(&configs[1])?;
    let mut round_tripped = Scenario::new(&parsed[1])?;
    assert_eq!(
        original.run_analysis().analysis.stress_score,
        round_tripped.run_analysis().analysis.stress_score
    );
    Ok(())
}
