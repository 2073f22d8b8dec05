//! Selection of dependency-update pull requests.
//!
//! A pull request qualifies when Dependabot opened it or when it comes from
//! the shared `dependency-updates` branch. Pull requests matching both rules
//! are reported once, keyed by their id.

use std::collections::HashSet;

use crate::error::SyncError;
use crate::github::{PullRequest, Repository, SourceControlGateway};

/// Substring identifying the dependency-update bot in an author login.
pub const DEPENDENCY_BOT_LOGIN: &str = "dependabot";

/// Source branch used for batched manual dependency updates.
pub const DEPENDENCY_UPDATE_BRANCH: &str = "dependency-updates";

/// Returns the repository's open dependency-update pull requests.
///
/// # Errors
///
/// Propagates any gateway error from listing the pull requests.
pub async fn dependency_pull_requests<G>(
    gateway: &G,
    repository: &Repository,
) -> Result<Vec<PullRequest>, SyncError>
where
    G: SourceControlGateway + ?Sized,
{
    let pulls = gateway.open_pull_requests(repository).await?;
    let selected = select_dependency_updates(&pulls);
    tracing::debug!(
        repository = %repository.name,
        open = pulls.len(),
        selected = selected.len(),
        "filtered pull requests"
    );
    Ok(selected)
}

/// Selects bot-authored pull requests followed by update-branch pull
/// requests, dropping repeated ids.
#[must_use]
pub fn select_dependency_updates(pulls: &[PullRequest]) -> Vec<PullRequest> {
    let by_bot = pulls.iter().filter(|pull| is_bot_authored(pull));
    let by_branch = pulls.iter().filter(|pull| is_update_branch(pull));

    let mut seen = HashSet::new();
    by_bot
        .chain(by_branch)
        .filter(|pull| seen.insert(pull.id))
        .cloned()
        .collect()
}

fn is_bot_authored(pull: &PullRequest) -> bool {
    pull.author
        .as_deref()
        .is_some_and(|login| login.contains(DEPENDENCY_BOT_LOGIN))
}

fn is_update_branch(pull: &PullRequest) -> bool {
    pull.head_ref == DEPENDENCY_UPDATE_BRANCH
}
