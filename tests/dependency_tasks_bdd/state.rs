//! Scenario state for the dependency task BDD tests.

use dependency_tasks::{LaunchConfig, SyncError, run_with_store};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wiremock::MockServer;

use super::harness::InMemoryParameterStore;
use super::runtime::{SharedRuntime, ensure_runtime, ensure_server};

#[derive(ScenarioState, Default)]
pub(crate) struct SyncState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) github: Slot<MockServer>,
    pub(crate) asana: Slot<MockServer>,
    pub(crate) store: Slot<InMemoryParameterStore>,
    pub(crate) task_count: Slot<usize>,
    pub(crate) error: Slot<SyncError>,
}

impl SyncState {
    /// Returns the scenario runtime, creating it on first use.
    pub(crate) fn runtime(&self) -> SharedRuntime {
        ensure_runtime(&self.runtime)
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"))
    }
}

/// Runs the job against the scenario's store and mock servers.
pub(crate) fn run_job(state: &SyncState) {
    let runtime = state.runtime();
    let github_uri = ensure_server(&runtime, &state.github);
    let asana_uri = ensure_server(&runtime, &state.asana);
    let store = state
        .store
        .get()
        .unwrap_or_else(|| panic!("parameter store not configured"));

    let launch = LaunchConfig {
        stage: Some("test".to_owned()),
        config_path: Some("dependency_tasks".to_owned()),
        github_api_base: format!("{github_uri}/api/v3"),
        asana_api_base: asana_uri,
        ..LaunchConfig::default()
    };

    match runtime.block_on(run_with_store(&store, &launch)) {
        Ok(count) => state.task_count.set(count),
        Err(error) => state.error.set(error),
    }
}
