use crate::analysis::AnalysisResult;
use crate::scenario::{ComparisonResult, Scenario};
use crate::SimError;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// Stores scenarios in insertion order and runs batch analyses
///
/// Insertion order matters: baseline detection during comparison picks the
/// first scenario with no reinforcements. A manager instance is not thread
/// safe; either give each request its own transient manager or share one
/// through [`SharedScenarioManager`].
#[derive(Default)]
pub struct ScenarioManager {
    /// Stored scenarios in insertion order
    scenarios: Vec<Scenario>,
}

impl ScenarioManager {
    /// Allocates a new empty instance
    pub fn new() -> Self {
        ScenarioManager { scenarios: Vec::new() }
    }

    /// Adds a scenario, replacing any existing one with the same id
    /// (the replaced scenario keeps its original position)
    pub fn add_scenario(&mut self, scenario: Scenario) {
        match self.scenarios.iter_mut().find(|s| s.scenario_id == scenario.scenario_id) {
            Some(slot) => *slot = scenario,
            None => self.scenarios.push(scenario),
        }
    }

    /// Returns a scenario by id
    pub fn get(&self, scenario_id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.scenario_id == scenario_id)
    }

    /// Returns a mutable scenario by id
    pub(crate) fn get_mut(&mut self, scenario_id: &str) -> Option<&mut Scenario> {
        self.scenarios.iter_mut().find(|s| s.scenario_id == scenario_id)
    }

    /// Returns the stored scenario ids in insertion order
    pub fn scenario_ids(&self) -> Vec<String> {
        self.scenarios.iter().map(|s| s.scenario_id.clone()).collect()
    }

    /// Returns the number of stored scenarios
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Indicates whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Removes all stored scenarios
    pub fn clear(&mut self) {
        self.scenarios.clear();
    }

    /// Runs the analysis of every stored scenario in insertion order
    pub fn run_all_scenarios(&mut self) -> Vec<(String, AnalysisResult)> {
        debug!(count = self.scenarios.len(), "running all scenarios");
        self.scenarios
            .iter_mut()
            .map(|scenario| (scenario.scenario_id.clone(), scenario.run_analysis()))
            .collect()
    }
}

/// Shares one scenario store between threads behind a mutex
///
/// Every read-modify-write sequence (replace-and-compare in particular)
/// holds the lock for its whole duration, so concurrent request handlers
/// cannot interleave against the store.
#[derive(Clone, Default)]
pub struct SharedScenarioManager {
    inner: Arc<Mutex<ScenarioManager>>,
}

impl SharedScenarioManager {
    /// Allocates a new handle with an empty store
    pub fn new() -> Self {
        SharedScenarioManager {
            inner: Arc::new(Mutex::new(ScenarioManager::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ScenarioManager> {
        // a poisoned lock only means another thread panicked mid-analysis;
        // the store itself stays consistent (scenarios are replaced whole)
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Adds a scenario, replacing any existing one with the same id
    pub fn add_scenario(&self, scenario: Scenario) {
        self.lock().add_scenario(scenario);
    }

    /// Removes all stored scenarios
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Returns the stored scenario ids in insertion order
    pub fn scenario_ids(&self) -> Vec<String> {
        self.lock().scenario_ids()
    }

    /// Runs the analysis of every stored scenario
    pub fn run_all_scenarios(&self) -> Vec<(String, AnalysisResult)> {
        self.lock().run_all_scenarios()
    }

    /// Compares the given scenarios (or all stored ones)
    pub fn compare_scenarios(&self, scenario_ids: Option<&[String]>) -> Result<ComparisonResult, SimError> {
        self.lock().compare_scenarios(scenario_ids)
    }

    /// Replaces the whole store and compares the new scenarios in one
    /// locked sequence
    pub fn replace_and_compare(&self, scenarios: Vec<Scenario>) -> Result<ComparisonResult, SimError> {
        let mut manager = self.lock();
        manager.clear();
        for scenario in scenarios {
            manager.add_scenario(scenario);
        }
        manager.compare_scenarios(None)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{ScenarioManager, SharedScenarioManager};
    use crate::base::SampleConfigs;
    use crate::scenario::Scenario;

    #[test]
    fn store_preserves_insertion_order_and_replaces_in_place() {
        let configs = SampleConfigs::bridge_flood_scenarios();
        let mut manager = ScenarioManager::new();
        for config in &configs {
            manager.add_scenario(Scenario::new(config).unwrap());
        }
        assert_eq!(manager.len(), 2);
        let ids = manager.scenario_ids();
        assert_eq!(ids[0], configs[0].scenario_id);
        assert_eq!(ids[1], configs[1].scenario_id);

        // re-adding the second scenario keeps its position
        manager.add_scenario(Scenario::new(&configs[1]).unwrap());
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.scenario_ids(), ids);
    }

    #[test]
    fn run_all_scenarios_works() {
        let configs = SampleConfigs::bridge_flood_scenarios();
        let mut manager = ScenarioManager::new();
        for config in &configs {
            manager.add_scenario(Scenario::new(config).unwrap());
        }
        let results = manager.run_all_scenarios();
        assert_eq!(results.len(), 2);
        for (id, result) in &results {
            assert_eq!(result.scenario_info.as_ref().unwrap().scenario_id, *id);
        }
    }

    #[test]
    fn shared_manager_serializes_access() {
        let shared = SharedScenarioManager::new();
        let configs = SampleConfigs::bridge_flood_scenarios();
        let scenarios: Vec<Scenario> = configs.iter().map(|c| Scenario::new(c).unwrap()).collect();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                let scenarios = scenarios.clone();
                std::thread::spawn(move || shared.replace_and_compare(scenarios).unwrap())
            })
            .collect();
        for handle in handles {
            let comparison = handle.join().unwrap();
            // each locked sequence sees exactly its own two scenarios
            assert_eq!(comparison.scenarios.len(), 2);
        }
        assert_eq!(shared.scenario_ids().len(), 2);
    }
}
