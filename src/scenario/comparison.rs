use crate::analysis::AnalysisResult;
use crate::base::{round2, round3, RiskLevel};
use crate::scenario::ScenarioManager;
use crate::SimError;
use serde::Serialize;
use tracing::debug;

/// Holds the key metrics of one compared scenario
#[derive(Clone, Debug, Serialize)]
pub struct ComparisonEntry {
    /// Unique scenario identifier
    pub scenario_id: String,

    /// Display name
    pub scenario_name: String,

    /// Stress score after any reinforcement adjustment
    pub stress_score: f64,

    /// Risk classification
    pub risk_level: RiskLevel,

    /// Failure probability in percent
    pub failure_probability: f64,

    /// Names of the applied reinforcement strategies
    pub reinforcements: Vec<String>,

    /// Summed cost factor of the applied strategies (0 when unreinforced)
    pub cost_factor: f64,
}

/// Holds the per-metric series for charting
#[derive(Clone, Debug, Serialize)]
pub struct ChartData {
    pub scenario_names: Vec<String>,
    pub stress_scores: Vec<f64>,
    pub failure_probabilities: Vec<f64>,
    pub risk_levels: Vec<RiskLevel>,
}

/// Holds the winning scenario of a comparison
#[derive(Clone, Debug, Serialize)]
pub struct BestScenario {
    /// Display name
    pub name: String,

    /// Stress score (the minimum among the compared scenarios)
    pub stress_score: f64,

    /// Risk classification
    pub risk_level: RiskLevel,

    /// Improvement over the baseline scenario, or "N/A" without a baseline
    pub improvement_over_baseline: String,
}

/// Holds the cost-effectiveness metrics of one reinforced scenario
#[derive(Clone, Debug, Serialize)]
pub struct CostBenefitEntry {
    /// Display name of the scenario
    pub scenario: String,

    /// Summed cost factor of the applied strategies
    pub cost_factor: f64,

    /// Failure-probability reduction relative to the baseline, in percent
    /// points
    pub risk_reduction_percent: f64,

    /// Risk reduction per unit cost (0 when the cost factor is 0)
    pub cost_effectiveness_score: f64,
}

/// Holds the side-by-side comparison of a set of scenarios
#[derive(Clone, Debug, Serialize)]
pub struct ComparisonResult {
    /// Compared scenarios in comparison order
    pub scenarios: Vec<ComparisonEntry>,

    /// Per-metric series for charting
    pub comparison_chart_data: ChartData,

    /// The scenario with the minimum stress score (first minimum wins)
    pub best_scenario: BestScenario,

    /// Cost-effectiveness of each reinforced scenario against the baseline
    /// (empty when no baseline exists)
    pub cost_benefit_analysis: Vec<CostBenefitEntry>,
}

impl ComparisonResult {
    /// Generates the executive summary of the comparison
    pub fn summary(&self) -> String {
        let best = &self.best_scenario;
        let mut summary = format!(
            "Compared {} scenarios. Optimal scenario: '{}' with {:.1} stress score ({} risk). ",
            self.scenarios.len(),
            best.name,
            best.stress_score,
            best.risk_level.label().to_uppercase()
        );
        if best.improvement_over_baseline != "N/A" {
            summary.push_str(&format!("Improvements: {}.", best.improvement_over_baseline));
        }
        if let Some(top) = self
            .cost_benefit_analysis
            .iter()
            .max_by(|a, b| a.cost_effectiveness_score.total_cmp(&b.cost_effectiveness_score))
        {
            summary.push_str(&format!(" Most cost-effective: '{}'.", top.scenario));
        }
        summary
    }
}

impl ComparisonEntry {
    /// Extracts the comparison metrics from a scenario's analysis result
    fn from_results(scenario_id: &str, results: &AnalysisResult) -> Self {
        let (scenario_name, reinforcements) = match &results.scenario_info {
            Some(info) => (info.scenario_name.clone(), info.reinforcements_applied.clone()),
            None => (scenario_id.to_string(), Vec::new()),
        };
        ComparisonEntry {
            scenario_id: scenario_id.to_string(),
            scenario_name,
            stress_score: results.analysis.stress_score,
            risk_level: results.analysis.risk_level,
            failure_probability: results.analysis.failure_probability_percent,
            reinforcements,
            cost_factor: results
                .reinforcement_impact
                .as_ref()
                .map(|impact| impact.estimated_cost_factor)
                .unwrap_or(0.0),
        }
    }
}

impl ScenarioManager {
    /// Compares scenarios side by side
    ///
    /// Re-runs the analysis of every selected scenario (ids not present in
    /// the store are skipped). The baseline is the first compared scenario
    /// with no reinforcements; without one, the cost-benefit list stays
    /// empty and the improvement is reported as "N/A".
    pub fn compare_scenarios(&mut self, scenario_ids: Option<&[String]>) -> Result<ComparisonResult, SimError> {
        let ids: Vec<String> = match scenario_ids {
            Some(ids) => ids.to_vec(),
            None => self.scenario_ids(),
        };
        debug!(count = ids.len(), "comparing scenarios");

        let mut entries = Vec::new();
        for id in &ids {
            if let Some(scenario) = self.get_mut(id) {
                let results = scenario.run_analysis();
                entries.push(ComparisonEntry::from_results(id, &results));
            }
        }
        if entries.is_empty() {
            return Err(SimError::InvalidInput("no valid scenarios to compare".to_string()));
        }

        let chart = ChartData {
            scenario_names: entries.iter().map(|e| e.scenario_name.clone()).collect(),
            stress_scores: entries.iter().map(|e| e.stress_score).collect(),
            failure_probabilities: entries.iter().map(|e| e.failure_probability).collect(),
            risk_levels: entries.iter().map(|e| e.risk_level).collect(),
        };

        // first minimum wins on ties
        let mut best = entries[0].clone();
        for entry in &entries[1..] {
            if entry.stress_score < best.stress_score {
                best = entry.clone();
            }
        }

        let baseline = entries.iter().find(|e| e.reinforcements.is_empty()).cloned();
        let improvement = match &baseline {
            Some(baseline) => format!(
                "{:.1} stress points, {:.1}% failure probability",
                baseline.stress_score - best.stress_score,
                baseline.failure_probability - best.failure_probability
            ),
            None => "N/A".to_string(),
        };

        let mut cost_benefit = Vec::new();
        if let Some(baseline) = &baseline {
            for entry in entries.iter().filter(|e| e.scenario_id != baseline.scenario_id) {
                let risk_reduction = baseline.failure_probability - entry.failure_probability;
                let cost_effectiveness = if entry.cost_factor > 0.0 {
                    risk_reduction / entry.cost_factor
                } else {
                    0.0
                };
                cost_benefit.push(CostBenefitEntry {
                    scenario: entry.scenario_name.clone(),
                    cost_factor: entry.cost_factor,
                    risk_reduction_percent: round2(risk_reduction),
                    cost_effectiveness_score: round3(cost_effectiveness),
                });
            }
        }

        Ok(ComparisonResult {
            best_scenario: BestScenario {
                name: best.scenario_name,
                stress_score: best.stress_score,
                risk_level: best.risk_level,
                improvement_over_baseline: improvement,
            },
            scenarios: entries,
            comparison_chart_data: chart,
            cost_benefit_analysis: cost_benefit,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use crate::base::SampleConfigs;
    use crate::scenario::{Scenario, ScenarioManager};
    use crate::SimError;

    fn manager_with_samples() -> ScenarioManager {
        let mut manager = ScenarioManager::new();
        for config in SampleConfigs::bridge_flood_scenarios() {
            manager.add_scenario(Scenario::new(&config).unwrap());
        }
        manager
    }

    #[test]
    fn best_scenario_has_minimum_stress_score() {
        let mut manager = manager_with_samples();
        let comparison = manager.compare_scenarios(None).unwrap();
        let min = comparison
            .scenarios
            .iter()
            .map(|s| s.stress_score)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(comparison.best_scenario.stress_score, min);
        // the reinforced scenario wins over the identical baseline
        assert_ne!(comparison.best_scenario.improvement_over_baseline, "N/A");
    }

    #[test]
    fn cost_benefit_uses_first_unreinforced_baseline() {
        let mut manager = manager_with_samples();
        let comparison = manager.compare_scenarios(None).unwrap();
        assert_eq!(comparison.cost_benefit_analysis.len(), 1);
        let entry = &comparison.cost_benefit_analysis[0];
        assert_eq!(entry.cost_factor, 4.5);
        let expected = entry.risk_reduction_percent / entry.cost_factor;
        assert!((entry.cost_effectiveness_score - expected).abs() < 1e-3);
    }

    #[test]
    fn comparison_without_baseline_degrades_gracefully() {
        let mut configs = SampleConfigs::bridge_flood_scenarios();
        configs.remove(0); // keep only the reinforced scenario
        let mut manager = ScenarioManager::new();
        for config in &configs {
            manager.add_scenario(Scenario::new(config).unwrap());
        }
        let comparison = manager.compare_scenarios(None).unwrap();
        assert_eq!(comparison.best_scenario.improvement_over_baseline, "N/A");
        assert!(comparison.cost_benefit_analysis.is_empty());
    }

    #[test]
    fn unknown_ids_are_skipped_and_empty_selection_fails() {
        let mut manager = manager_with_samples();
        let ids = vec!["nope".to_string()];
        match manager.compare_scenarios(Some(&ids)) {
            Err(SimError::InvalidInput(message)) => {
                assert_eq!(message, "no valid scenarios to compare")
            }
            _ => panic!("expected InvalidInput"),
        }
    }

    #[test]
    fn summary_mentions_optimal_and_cost_effective_scenarios() {
        let mut manager = manager_with_samples();
        let comparison = manager.compare_scenarios(None).unwrap();
        let summary = comparison.summary();
        assert!(summary.starts_with("Compared 2 scenarios."));
        assert!(summary.contains("Optimal scenario:"));
        assert!(summary.contains("Most cost-effective:"));
    }
}
