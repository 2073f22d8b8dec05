//! Asana task tracking.
//!
//! The orchestrator only needs two calls: create a task and create a subtask
//! under it. [`TaskTracker`] exposes exactly those, and [`AsanaTaskTracker`]
//! implements them over the Asana REST API.

mod client;
pub mod payload;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::SyncError;

pub use client::{AsanaConfig, AsanaTaskTracker};
pub use payload::{SubtaskPayload, TaskPayload, subtask_data, task_data};

/// Reference to a task returned by the tracker after creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskRef {
    /// Opaque Asana identifier.
    pub gid: String,
}

/// Tracker that can create tasks and subtasks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskTracker: Send + Sync {
    /// Create a task and return its reference.
    async fn create_task(&self, payload: &TaskPayload) -> Result<TaskRef, SyncError>;

    /// Create a subtask under `parent` and return its reference.
    async fn create_subtask(
        &self,
        parent: &TaskRef,
        payload: &SubtaskPayload,
    ) -> Result<TaskRef, SyncError>;
}
