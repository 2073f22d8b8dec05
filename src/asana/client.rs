//! Asana REST implementation of [`TaskTracker`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::DEFAULT_ASANA_API_BASE;
use crate::error::{ASANA, SyncError};
use crate::token::AccessToken;

use super::payload::{SubtaskPayload, TaskPayload};
use super::{TaskRef, TaskTracker};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`AsanaTaskTracker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsanaConfig {
    /// Base API URL (e.g., `https://app.asana.com/api/1.0`).
    pub base_url: String,
    /// HTTP timeout.
    pub timeout: Duration,
}

impl Default for AsanaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ASANA_API_BASE.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AsanaConfig {
    /// Configuration for `base_url` with the default timeout.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Asana-backed task tracker.
#[derive(Debug, Clone)]
pub struct AsanaTaskTracker {
    client: Client,
    token: AccessToken,
    base_url: String,
}

impl AsanaTaskTracker {
    /// Builds a tracker authenticated with `token`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Configuration`] when the HTTP client cannot be
    /// constructed.
    pub fn for_token(token: AccessToken, config: &AsanaConfig) -> Result<Self, SyncError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|error| SyncError::Configuration {
                message: format!("failed to configure Asana HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            token,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    async fn post<B, T>(&self, operation: &str, path: &str, body: &B) -> Result<T, SyncError>
    where
        B: serde::Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send,
    {
        let endpoint = format!("{}{path}", self.base_url);
        let response = self
            .client
            .post(endpoint)
            .bearer_auth(self.token.value())
            .json(body)
            .send()
            .await
            .map_err(|error| SyncError::Network {
                service: ASANA,
                message: format!("{operation} failed: {error}"),
            })?;

        let response = check_status(operation, response).await?;
        let envelope: DataEnvelope<T> =
            response.json().await.map_err(|error| SyncError::Api {
                service: ASANA,
                message: format!("{operation} response JSON decoding failed: {error}"),
            })?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl TaskTracker for AsanaTaskTracker {
    async fn create_task(&self, payload: &TaskPayload) -> Result<TaskRef, SyncError> {
        self.post("create task", "/tasks", payload).await
    }

    async fn create_subtask(
        &self,
        parent: &TaskRef,
        payload: &SubtaskPayload,
    ) -> Result<TaskRef, SyncError> {
        let path = format!("/tasks/{}/subtasks", parent.gid);
        self.post("create subtask", &path, payload).await
    }
}

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

async fn check_status(operation: &str, response: Response) -> Result<Response, SyncError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "(failed to read error response body)".to_owned());
    Err(map_http_error(operation, status, &body))
}

fn map_http_error(operation: &str, status: StatusCode, body: &str) -> SyncError {
    let message = extract_asana_message(body).unwrap_or_else(|| truncate_for_message(body, 160));
    if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
        SyncError::Authentication {
            service: ASANA,
            message: format!("{operation} failed: Asana returned {status} {message}"),
        }
    } else {
        SyncError::Api {
            service: ASANA,
            message: format!("{operation} failed with status {status}: {message}"),
        }
    }
}

fn extract_asana_message(body: &str) -> Option<String> {
    let envelope: ErrorEnvelope = serde_json::from_str(body).ok()?;
    let messages: Vec<&str> = envelope
        .errors
        .iter()
        .map(|detail| detail.message.as_str())
        .collect();
    if messages.is_empty() {
        None
    } else {
        Some(messages.join("; "))
    }
}

fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut output = String::new();
    let mut chars = message.chars();

    for _ in 0..max_chars {
        let Some(character) = chars.next() else {
            return output;
        };
        output.push(character);
    }

    if chars.next().is_some() {
        output.push_str("...");
    }

    output
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
