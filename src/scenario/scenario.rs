use crate::analysis::{AnalysisResult, RecommendationEngine, StressAnalyzer};
use crate::asset::InfrastructureAsset;
use crate::base::{round1, round2, AssetConfig, EventConfig, ScenarioConfig};
use crate::event::ClimateEvent;
use crate::scenario::{ModOperation, ReinforcementStrategy};
use crate::SimError;
use serde::Serialize;
use tracing::debug;

/// Binds one asset configuration, one climate event configuration, and a
/// list of reinforcement strategies for what-if analysis
///
/// The asset and event objects are built once at construction; a failed
/// construction yields no scenario at all. The only mutation is the cached
/// result written by [`Scenario::run_analysis`].
#[derive(Clone, Debug)]
pub struct Scenario {
    /// Unique scenario identifier
    pub scenario_id: String,

    /// Display name
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Raw asset configuration
    pub infrastructure_config: AssetConfig,

    /// Raw climate event configuration
    pub climate_event_config: EventConfig,

    /// Applied reinforcement strategies, in application order
    reinforcements: Vec<ReinforcementStrategy>,

    /// Asset built from the configuration
    infrastructure: InfrastructureAsset,

    /// Event built from the configuration
    climate_event: ClimateEvent,

    /// Cached result of the last analysis run
    last_results: Option<AnalysisResult>,
}

impl Scenario {
    /// Builds the asset and event from the configuration and resolves the
    /// reinforcement strategy ids
    ///
    /// Any invalid label or unknown strategy id fails the construction;
    /// nothing is partially built.
    pub fn new(config: &ScenarioConfig) -> Result<Self, SimError> {
        let infrastructure = config.infrastructure.build()?;
        let climate_event = config.climate_event.build()?;
        let mut reinforcements = Vec::with_capacity(config.reinforcements.len());
        for id in &config.reinforcements {
            reinforcements.push(ReinforcementStrategy::find(id)?);
        }
        Ok(Scenario {
            scenario_id: config.scenario_id.clone(),
            name: config.name.clone(),
            description: config.description.clone(),
            infrastructure_config: config.infrastructure.clone(),
            climate_event_config: config.climate_event.clone(),
            reinforcements,
            infrastructure,
            climate_event,
            last_results: None,
        })
    }

    /// Indicates whether any reinforcement strategy is applied
    pub fn has_reinforcements(&self) -> bool {
        !self.reinforcements.is_empty()
    }

    /// Returns the applied reinforcement strategies
    pub fn reinforcements(&self) -> &[ReinforcementStrategy] {
        &self.reinforcements
    }

    /// Returns the cached result of the last analysis run, if any
    pub fn last_results(&self) -> Option<&AnalysisResult> {
        self.last_results.as_ref()
    }

    /// Runs the stress analysis for this scenario
    ///
    /// Re-executes the analyzer and the reinforcement adjustment on every
    /// call and overwrites the cached result.
    pub fn run_analysis(&mut self) -> AnalysisResult {
        let analyzer = StressAnalyzer::new(&self.infrastructure, &self.climate_event);
        let mut results = analyzer.analyze();

        if !self.reinforcements.is_empty() {
            self.apply_reinforcement_benefits(&mut results);
        }

        let report = RecommendationEngine::new(&results).summary_report();
        results.recommendations_summary = Some(report);
        results.scenario_info = Some(ScenarioInfo {
            scenario_id: self.scenario_id.clone(),
            scenario_name: self.name.clone(),
            description: self.description.clone(),
            reinforcements_applied: self.reinforcements.iter().map(|s| s.name.to_string()).collect(),
        });

        debug!(
            scenario_id = self.scenario_id.as_str(),
            stress_score = results.analysis.stress_score,
            "scenario analysis completed"
        );
        self.last_results = Some(results.clone());
        results
    }

    /// Applies the benefits of the reinforcement strategies to the results
    ///
    /// The additive "integrity_boost" modifications raise the baseline
    /// integrity (capped at 100); each multiplicative "*_resistance"
    /// modification contributes `(1 - value) * 20` stress points, and the
    /// resulting reduction is capped at 40% of the original score. Risk
    /// level and failure probability are recomputed from the adjusted
    /// score. Strategy costs stack additively.
    fn apply_reinforcement_benefits(&self, results: &mut AnalysisResult) {
        let mut total_stress_reduction = 0.0;
        let mut total_integrity_boost = 0.0;
        let mut total_cost_factor = 0.0;

        for strategy in &self.reinforcements {
            total_cost_factor += strategy.cost_factor;
            for modification in strategy.modifications {
                if modification.parameter == "integrity_boost" && modification.operation == ModOperation::Add {
                    total_integrity_boost += modification.value;
                } else if modification.parameter.contains("resistance")
                    && modification.operation == ModOperation::Multiply
                {
                    total_stress_reduction += (1.0 - modification.value) * 20.0;
                }
            }
        }

        let original_stress = results.analysis.stress_score;
        let stress_reduction_factor = f64::min(0.4, total_stress_reduction / 100.0);
        let adjusted_stress = round2(original_stress * (1.0 - stress_reduction_factor));

        let original_integrity = results.infrastructure.baseline_integrity;
        let adjusted_integrity = f64::min(100.0, original_integrity + total_integrity_boost);

        let analyzer = StressAnalyzer::new(&self.infrastructure, &self.climate_event);
        results.analysis.stress_score_original = Some(original_stress);
        results.analysis.stress_score = adjusted_stress;
        results.analysis.stress_reduction_percent = Some(round1(stress_reduction_factor * 100.0));
        results.analysis.risk_level = StressAnalyzer::classify_risk(adjusted_stress);
        results.analysis.failure_probability = analyzer.failure_probability(adjusted_stress);
        results.analysis.failure_probability_percent = round2(results.analysis.failure_probability * 100.0);

        results.infrastructure.baseline_integrity_original = Some(original_integrity);
        results.infrastructure.baseline_integrity = adjusted_integrity;

        results.reinforcement_impact = Some(ReinforcementImpact {
            strategies_applied: self.reinforcements.len(),
            estimated_cost_factor: round2(total_cost_factor),
            stress_reduction: format!("{:.1}%", stress_reduction_factor * 100.0),
            integrity_improvement: format!("+{} points", total_integrity_boost),
        });
    }
}

/// Holds the scenario binding attached to an analysis result
#[derive(Clone, Debug, Serialize)]
pub struct ScenarioInfo {
    /// Unique scenario identifier
    pub scenario_id: String,

    /// Display name
    pub scenario_name: String,

    /// Free-form description
    pub description: String,

    /// Names of the applied reinforcement strategies
    pub reinforcements_applied: Vec<String>,
}

/// Holds the reinforcement adjustment summary of a scenario run
#[derive(Clone, Debug, Serialize)]
pub struct ReinforcementImpact {
    /// Number of strategies applied
    pub strategies_applied: usize,

    /// Summed cost factor of the applied strategies
    pub estimated_cost_factor: f64,

    /// Stress reduction as a percent string, e.g. "24.0%"
    pub stress_reduction: String,

    /// Integrity improvement as a points string, e.g. "+15 points"
    pub integrity_improvement: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Scenario;
    use crate::base::SampleConfigs;
    use crate::SimError;

    #[test]
    fn reinforcement_adjustment_works() {
        let configs = SampleConfigs::bridge_flood_scenarios();
        let mut baseline = Scenario::new(&configs[0]).unwrap();
        let mut reinforced = Scenario::new(&configs[1]).unwrap();
        assert!(!baseline.has_reinforcements());
        assert!(reinforced.has_reinforcements());

        let base_results = baseline.run_analysis();
        let reinforced_results = reinforced.run_analysis();

        let impact = reinforced_results.reinforcement_impact.as_ref().unwrap();
        // foundation strengthening (2.5) + deck rehabilitation (2.0)
        assert_eq!(impact.estimated_cost_factor, 4.5);
        assert_eq!(impact.strategies_applied, 2);
        assert_eq!(impact.integrity_improvement, "+35 points");

        // reduction: (1-0.6)*20 + (1-0.7)*20 = 14 points -> 14%
        let original = reinforced_results.analysis.stress_score_original.unwrap();
        assert_eq!(original, base_results.analysis.stress_score);
        let expected = (original * 0.86 * 100.0).round() / 100.0;
        assert_eq!(reinforced_results.analysis.stress_score, expected);
        assert_eq!(reinforced_results.analysis.stress_reduction_percent, Some(14.0));

        // integrity boosted but capped at 100
        let info = &reinforced_results.infrastructure;
        assert_eq!(
            info.baseline_integrity,
            f64::min(100.0, info.baseline_integrity_original.unwrap() + 35.0)
        );
    }

    #[test]
    fn stress_reduction_caps_at_forty_percent() {
        let mut config = SampleConfigs::bridge_flood_scenarios().remove(1);
        // pile up every flood-relevant strategy in the catalog
        config.reinforcements = vec![
            "bridge_foundation_strengthening".to_string(),
            "bridge_deck_rehabilitation".to_string(),
            "building_flood_barriers".to_string(),
            "road_drainage_improvement".to_string(),
            "road_elevation".to_string(),
        ];
        let mut scenario = Scenario::new(&config).unwrap();
        let results = scenario.run_analysis();
        let original = results.analysis.stress_score_original.unwrap();
        assert_eq!(results.analysis.stress_reduction_percent, Some(40.0));
        let expected = (original * 0.6 * 100.0).round() / 100.0;
        assert_eq!(results.analysis.stress_score, expected);
    }

    #[test]
    fn unknown_strategy_id_fails_construction() {
        let mut config = SampleConfigs::bridge_flood_scenarios().remove(1);
        config.reinforcements = vec!["anti_gravity_field".to_string()];
        match Scenario::new(&config) {
            Err(SimError::UnsupportedVariant { kind, value }) => {
                assert_eq!(kind, "reinforcement strategy");
                assert_eq!(value, "anti_gravity_field");
            }
            _ => panic!("expected UnsupportedVariant"),
        }
    }

    #[test]
    fn run_analysis_overwrites_cache() {
        let configs = SampleConfigs::bridge_flood_scenarios();
        let mut scenario = Scenario::new(&configs[0]).unwrap();
        assert!(scenario.last_results().is_none());
        let first = scenario.run_analysis();
        let second = scenario.run_analysis();
        assert_eq!(first.analysis.stress_score, second.analysis.stress_score);
        assert!(scenario.last_results().is_some());
    }
}
