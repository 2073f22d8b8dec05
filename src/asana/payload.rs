//! Task and subtask creation payloads.
//!
//! Asana wraps every request body in a `data` envelope; the payload types
//! serialise to that shape directly.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::github::{PullRequest, Repository};

use super::TaskRef;

/// Custom field gid classifying the task.
pub const CLASSIFICATION_FIELD: &str = "1200689146072910";

/// Enum option gid set on [`CLASSIFICATION_FIELD`].
pub const CLASSIFICATION_VALUE: &str = "1200689146072911";

/// Request body for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskPayload {
    /// Task fields.
    pub data: NewTask,
}

/// Fields of a task to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    /// Always `false` at creation.
    pub completed: bool,
    /// Task name, the repository name.
    pub name: String,
    /// Pull request titles, one per line.
    pub notes: String,
    /// Custom field gid to value gid.
    pub custom_fields: BTreeMap<String, String>,
    /// Projects the task belongs to.
    pub projects: Vec<String>,
    /// Project and section placement.
    pub memberships: Vec<Membership>,
}

/// Section placement within a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Membership {
    /// Project gid.
    pub project: String,
    /// Section gid.
    pub section: String,
}

/// Request body for creating a subtask.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtaskPayload {
    /// Subtask fields.
    pub data: NewSubtask,
}

/// Fields of a subtask to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSubtask {
    /// Always `false` at creation.
    pub completed: bool,
    /// Subtask name.
    pub name: String,
    /// Parent task gid.
    pub parent: String,
}

/// Formats the tracking task for a repository's dependency pull requests.
///
/// Notes list the pull request titles in the given order.
#[must_use]
pub fn task_data(
    repository: &Repository,
    pull_requests: &[PullRequest],
    project_id: &str,
    section_id: &str,
) -> TaskPayload {
    let notes = pull_requests
        .iter()
        .map(|pull| pull.title.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    TaskPayload {
        data: NewTask {
            completed: false,
            name: repository.name.clone(),
            notes,
            custom_fields: BTreeMap::from([(
                CLASSIFICATION_FIELD.to_owned(),
                CLASSIFICATION_VALUE.to_owned(),
            )]),
            projects: vec![project_id.to_owned()],
            memberships: vec![Membership {
                project: project_id.to_owned(),
                section: section_id.to_owned(),
            }],
        },
    }
}

/// Formats a follow-up subtask under `parent`.
#[must_use]
pub fn subtask_data(name: &str, parent: &TaskRef) -> SubtaskPayload {
    SubtaskPayload {
        data: NewSubtask {
            completed: false,
            name: name.to_owned(),
            parent: parent.gid.clone(),
        },
    }
}
