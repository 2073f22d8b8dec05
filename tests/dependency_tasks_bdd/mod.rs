//! Support modules for the dependency task BDD tests.

pub(crate) mod harness;
#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use harness::{
    InMemoryParameterStore, mount_asana_tracker, mount_organisation, recorded_posts,
};
pub(crate) use state::{SyncState, run_job};
