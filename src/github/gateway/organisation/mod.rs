//! Octocrab-backed organisation and pull request listing.

use async_trait::async_trait;
use octocrab::{Octocrab, Page};

use crate::error::SyncError;
use crate::github::models::{ApiPullRequest, ApiRepository, PullRequest, Repository};
use crate::token::AccessToken;

use super::SourceControlGateway;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;

/// Largest page size accepted by the GitHub REST API.
const PER_PAGE: &str = "100";

/// Octocrab-backed source-control gateway.
pub struct OctocrabSourceControl {
    client: Octocrab,
}

impl OctocrabSourceControl {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and API base.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::InvalidUrl` when the base URI cannot be parsed or
    /// `SyncError::Api` when Octocrab fails to construct a client.
    pub fn for_token(token: &AccessToken, api_base: &str) -> Result<Self, SyncError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl SourceControlGateway for OctocrabSourceControl {
    async fn organisation_repositories(
        &self,
        organisation: &str,
    ) -> Result<Vec<Repository>, SyncError> {
        let route = format!("/orgs/{organisation}/repos");
        let query_params = [("per_page", PER_PAGE)];

        let first_page: Page<ApiRepository> = self
            .client
            .get(route, Some(&query_params))
            .await
            .map_err(|error| map_octocrab_error("list repositories", &error))?;
        let items = self
            .client
            .all_pages(first_page)
            .await
            .map_err(|error| map_octocrab_error("list repositories", &error))?;

        tracing::debug!(organisation, count = items.len(), "listed repositories");
        Ok(items
            .into_iter()
            .map(|item| item.into_repository(organisation))
            .collect())
    }

    async fn open_pull_requests(
        &self,
        repository: &Repository,
    ) -> Result<Vec<PullRequest>, SyncError> {
        let query_params = [("state", "open"), ("per_page", PER_PAGE)];

        let first_page: Page<ApiPullRequest> = self
            .client
            .get(repository.pulls_path(), Some(&query_params))
            .await
            .map_err(|error| map_octocrab_error("list pulls", &error))?;
        let items = self
            .client
            .all_pages(first_page)
            .await
            .map_err(|error| map_octocrab_error("list pulls", &error))?;

        Ok(items.into_iter().map(ApiPullRequest::into).collect())
    }
}
