//! Gateways for listing repositories and pull requests through Octocrab.
//!
//! The trait-based design enables mocking in tests while the Octocrab
//! implementation handles real HTTP requests.

mod client;
mod error_mapping;
mod organisation;

pub use organisation::OctocrabSourceControl;

use async_trait::async_trait;

use crate::error::SyncError;
use crate::github::models::{PullRequest, Repository};

/// Gateway for organisation and repository reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SourceControlGateway: Send + Sync {
    /// List every repository in the organisation, in API order.
    async fn organisation_repositories(
        &self,
        organisation: &str,
    ) -> Result<Vec<Repository>, SyncError>;

    /// List every open pull request for the repository.
    async fn open_pull_requests(
        &self,
        repository: &Repository,
    ) -> Result<Vec<PullRequest>, SyncError>;
}
