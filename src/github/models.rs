//! Repository and pull request models returned by the GitHub API.
//!
//! Types prefixed with `Api` are internal deserialisation targets that convert
//! into public domain types.

use serde::Deserialize;

/// Repository belonging to the scanned organisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Owner login (the organisation).
    pub owner: String,
    /// Repository name, used as the task name.
    pub name: String,
}

impl Repository {
    /// Creates a repository from owner and name.
    #[must_use]
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Returns the API path for listing pull requests.
    pub(crate) fn pulls_path(&self) -> String {
        format!("/repos/{}/{}/pulls", self.owner, self.name)
    }
}

/// Open pull request summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    /// Stable pull request identifier, used for de-duplication.
    pub id: u64,
    /// Title, copied into the task notes.
    pub title: String,
    /// Author login if present.
    pub author: Option<String>,
    /// Name of the source branch.
    pub head_ref: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUser {
    pub(super) login: Option<String>,
}

/// API response type for organisation repository listing.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiRepository {
    pub(super) name: String,
    pub(super) owner: Option<ApiUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiHead {
    #[serde(rename = "ref")]
    pub(super) ref_name: String,
}

/// API response type for pull request listing.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequest {
    pub(super) id: u64,
    pub(super) title: Option<String>,
    pub(super) user: Option<ApiUser>,
    pub(super) head: ApiHead,
}

impl ApiRepository {
    /// Converts into a [`Repository`], falling back to `organisation` when
    /// the owner is absent from the response.
    pub(super) fn into_repository(self, organisation: &str) -> Repository {
        let owner = self
            .owner
            .and_then(|user| user.login)
            .unwrap_or_else(|| organisation.to_owned());
        Repository {
            owner,
            name: self.name,
        }
    }
}

impl From<ApiPullRequest> for PullRequest {
    fn from(value: ApiPullRequest) -> Self {
        Self {
            id: value.id,
            title: value.title.unwrap_or_default(),
            author: value.user.and_then(|user| user.login),
            head_ref: value.head.ref_name,
        }
    }
}
