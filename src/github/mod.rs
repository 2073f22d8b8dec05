//! GitHub organisation scanning.
//!
//! This module wraps Octocrab to list an organisation's repositories and their
//! open pull requests. Errors are mapped into [`crate::SyncError`] variants so
//! callers never see Octocrab internals.

pub mod gateway;
pub mod models;

pub use gateway::{OctocrabSourceControl, SourceControlGateway};
pub use models::{PullRequest, Repository};

#[cfg(test)]
pub use gateway::MockSourceControlGateway;
