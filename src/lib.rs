//! Dependency update task filing for a GitHub organisation.
//!
//! The library reads run settings from a hierarchical parameter store, scans
//! every repository of the configured organisation for open pull requests
//! raised by the dependency bot or from the shared `dependency-updates`
//! branch, and files one Asana task per affected repository with fixed
//! deployment subtasks.

pub mod app;
pub mod asana;
pub mod config;
pub mod error;
pub mod filter;
pub mod github;
pub mod parameters;
pub mod settings;
pub mod sync;
pub mod telemetry;
pub mod tls;
pub mod token;

pub use app::{run, run_with_store};
pub use asana::{AsanaConfig, AsanaTaskTracker, TaskRef, TaskTracker};
pub use config::LaunchConfig;
pub use error::SyncError;
pub use filter::{dependency_pull_requests, select_dependency_updates};
pub use github::{OctocrabSourceControl, PullRequest, Repository, SourceControlGateway};
pub use parameters::{
    ParameterPage, ParameterStore, Parameters, SsmParameterStore, StoredParameter,
    load_parameters,
};
pub use settings::RunSettings;
pub use sync::{DependencyTaskSync, TaskPlacement, summary_line};
pub use telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
pub use tls::install_crypto_provider;
pub use token::AccessToken;
