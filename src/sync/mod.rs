//! Organisation scan that files one Asana task per repository with pending
//! dependency updates.

use crate::asana::{TaskTracker, subtask_data, task_data};
use crate::error::SyncError;
use crate::filter::dependency_pull_requests;
use crate::github::{Repository, SourceControlGateway};
use crate::telemetry::{TelemetryEvent, TelemetrySink};

/// Follow-up subtasks created under every task, in creation order.
pub const SUBTASK_NAMES: [&str; 2] = [
    "deploy development branch with updates",
    "deploy production branch with updates",
];

/// Asana placement for created tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskPlacement<'a> {
    /// Project gid.
    pub project_id: &'a str,
    /// Section gid within the project.
    pub section_id: &'a str,
}

/// Scans an organisation and creates tracking tasks.
pub struct DependencyTaskSync<'a, S, T>
where
    S: SourceControlGateway + ?Sized,
    T: TaskTracker + ?Sized,
{
    source: &'a S,
    tracker: &'a T,
    telemetry: &'a dyn TelemetrySink,
    placement: TaskPlacement<'a>,
}

impl<'a, S, T> DependencyTaskSync<'a, S, T>
where
    S: SourceControlGateway + ?Sized,
    T: TaskTracker + ?Sized,
{
    /// Creates a sync over the given gateways.
    #[must_use]
    pub const fn new(
        source: &'a S,
        tracker: &'a T,
        telemetry: &'a dyn TelemetrySink,
        placement: TaskPlacement<'a>,
    ) -> Self {
        Self {
            source,
            tracker,
            telemetry,
            placement,
        }
    }

    /// Scans every repository of `organisation` and returns the number of
    /// tasks created.
    ///
    /// # Errors
    ///
    /// Returns the first gateway error; repositories after the failing one
    /// are not processed.
    pub async fn run(&self, organisation: &str) -> Result<usize, SyncError> {
        let repositories = self.source.organisation_repositories(organisation).await?;
        let mut task_count = 0_usize;

        for repository in &repositories {
            if self.sync_repository(repository).await? {
                task_count += 1;
            }
        }

        self.telemetry.record(TelemetryEvent::RunCompleted {
            organisation: organisation.to_owned(),
            repositories: repositories.len(),
            tasks_created: task_count,
        });
        Ok(task_count)
    }

    /// Returns whether a task was created for `repository`.
    async fn sync_repository(&self, repository: &Repository) -> Result<bool, SyncError> {
        let pulls = dependency_pull_requests(self.source, repository).await?;
        if pulls.is_empty() {
            tracing::debug!(repository = %repository.name, "no dependency updates");
            return Ok(false);
        }

        let payload = task_data(
            repository,
            &pulls,
            self.placement.project_id,
            self.placement.section_id,
        );
        let task = self.tracker.create_task(&payload).await?;

        for name in SUBTASK_NAMES {
            self.tracker
                .create_subtask(&task, &subtask_data(name, &task))
                .await?;
        }

        tracing::info!(
            repository = %repository.name,
            task_gid = %task.gid,
            pull_requests = pulls.len(),
            "created dependency task"
        );
        self.telemetry.record(TelemetryEvent::TaskCreated {
            repository: repository.name.clone(),
            task_gid: task.gid,
            pull_requests: pulls.len(),
        });
        Ok(true)
    }
}

/// Human-readable run summary, e.g. `1 task created` or `3 tasks created`.
#[must_use]
pub fn summary_line(task_count: usize) -> String {
    let noun = if task_count == 1 { "task" } else { "tasks" };
    format!("{task_count} {noun} created")
}
