//! Wires the launch configuration, parameter store, and gateways into one run.

use crate::asana::{AsanaConfig, AsanaTaskTracker};
use crate::config::LaunchConfig;
use crate::error::{ASANA, GITHUB, SyncError};
use crate::github::OctocrabSourceControl;
use crate::parameters::{ParameterStore, SsmParameterStore, load_parameters};
use crate::settings::RunSettings;
use crate::sync::{DependencyTaskSync, TaskPlacement};
use crate::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};
use crate::token::AccessToken;

/// Runs the job against the AWS parameter store in the configured region.
///
/// Returns the number of tasks created.
///
/// # Errors
///
/// Returns the first configuration, settings, or gateway error encountered.
pub async fn run(launch: &LaunchConfig) -> Result<usize, SyncError> {
    let region = launch.resolve_region();
    tracing::debug!(%region, "using parameter store region");
    let store = SsmParameterStore::for_region(&region).await;
    run_with_store(&store, launch).await
}

/// Runs the job with settings read from `store`.
///
/// # Errors
///
/// Returns [`SyncError::Configuration`] when the parameter path cannot be
/// resolved, [`SyncError::MissingSetting`] when the store lacks a required
/// key, and gateway errors from GitHub or Asana.
pub async fn run_with_store<P>(store: &P, launch: &LaunchConfig) -> Result<usize, SyncError>
where
    P: ParameterStore + ?Sized,
{
    let path = launch.parameter_path()?;
    let parameters = load_parameters(store, &path).await;
    tracing::info!(%path, loaded = parameters.len(), "loaded run settings");
    let settings = RunSettings::from_parameters(&parameters)?;

    let github_token = AccessToken::new(GITHUB, &settings.github_token)?;
    let asana_token = AccessToken::new(ASANA, &settings.asana_token)?;

    let source = OctocrabSourceControl::for_token(&github_token, &launch.github_api_base)?;
    let tracker = AsanaTaskTracker::for_token(
        asana_token,
        &AsanaConfig::with_base_url(launch.asana_api_base.as_str()),
    )?;
    let telemetry = telemetry_sink(launch.telemetry);
    let placement = TaskPlacement {
        project_id: &settings.project_id,
        section_id: &settings.section_id,
    };

    DependencyTaskSync::new(&source, &tracker, telemetry.as_ref(), placement)
        .run(&settings.organisation)
        .await
}

fn telemetry_sink(enabled: bool) -> Box<dyn TelemetrySink> {
    if enabled {
        Box::new(StderrJsonlTelemetrySink)
    } else {
        Box::new(NoopTelemetrySink)
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
