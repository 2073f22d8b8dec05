//! Fake parameter store and mock API fixtures for the dependency task BDD
//! tests.

use async_trait::async_trait;
use dependency_tasks::{ParameterPage, ParameterStore, StoredParameter, SyncError};
use serde_json::{Value, json};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub(crate) const PARAMETER_PATH: &str = "/test/dependency_tasks";
pub(crate) const ORGANISATION: &str = "octo-org";
pub(crate) const PROJECT_ID: &str = "123456789";
pub(crate) const SECTION_ID: &str = "987654321";
const TASK_GID: &str = "1234";

/// Parameter store holding a fixed set of parameters.
#[derive(Debug, Clone, Default)]
pub(crate) struct InMemoryParameterStore {
    parameters: Vec<StoredParameter>,
    unreadable: bool,
}

impl InMemoryParameterStore {
    /// Store holding complete run settings for `organisation`.
    pub(crate) fn with_settings(organisation: &str) -> Self {
        let entries = [
            ("ORG_NAME", organisation),
            ("PROJECT_ID", PROJECT_ID),
            ("SECTION_ID", SECTION_ID),
            ("GITHUB_ACCESS_TOKEN", "ghp_example"),
            ("ASANA_ACCESS_TOKEN", "asana_example"),
        ];
        Self {
            parameters: entries
                .iter()
                .map(|(key, value)| StoredParameter::new(format!("{PARAMETER_PATH}/{key}"), *value))
                .collect(),
            unreadable: false,
        }
    }

    /// Store whose every read fails.
    pub(crate) fn unreadable() -> Self {
        Self {
            parameters: Vec::new(),
            unreadable: true,
        }
    }
}

#[async_trait]
impl ParameterStore for InMemoryParameterStore {
    async fn parameters_by_path(
        &self,
        path: &str,
        _next_token: Option<String>,
    ) -> Result<ParameterPage, SyncError> {
        if self.unreadable {
            return Err(SyncError::ParameterStore {
                message: "AccessDeniedException".to_owned(),
            });
        }

        let parameters = self
            .parameters
            .iter()
            .filter(|parameter| {
                parameter
                    .name
                    .strip_prefix(path)
                    .and_then(|rest| rest.strip_prefix('/'))
                    .is_some_and(|key| !key.contains('/'))
            })
            .cloned()
            .collect();

        Ok(ParameterPage {
            parameters,
            next_token: None,
        })
    }
}

fn repository_json(name: &str) -> Value {
    json!({
        "id": 1,
        "name": name,
        "full_name": format!("{ORGANISATION}/{name}"),
        "owner": { "login": ORGANISATION }
    })
}

fn dependency_pulls_json() -> Value {
    json!([
        {
            "id": 101,
            "number": 1,
            "title": "Bump serde from 1.0.1 to 1.0.2",
            "user": { "login": "dependabot[bot]" },
            "head": { "ref": "dependabot/cargo/serde-1.0.2" }
        },
        {
            "id": 102,
            "number": 2,
            "title": "Update lockfile",
            "user": { "login": "octocat" },
            "head": { "ref": "dependency-updates" }
        }
    ])
}

fn feature_pulls_json() -> Value {
    json!([
        {
            "id": 201,
            "number": 3,
            "title": "Add a feature",
            "user": { "login": "octocat" },
            "head": { "ref": "feature" }
        }
    ])
}

/// Mounts an organisation with `count` repositories on the GitHub mock.
pub(crate) async fn mount_organisation(server: &MockServer, count: usize, with_updates: bool) {
    let names: Vec<String> = (1..=count).map(|index| format!("repo-{index}")).collect();
    let repositories: Vec<Value> = names.iter().map(|name| repository_json(name)).collect();

    Mock::given(method("GET"))
        .and(path(format!("/api/v3/orgs/{ORGANISATION}/repos")))
        .respond_with(ResponseTemplate::new(200).set_body_json(repositories))
        .mount(server)
        .await;

    let pulls = if with_updates {
        dependency_pulls_json()
    } else {
        feature_pulls_json()
    };
    for name in &names {
        Mock::given(method("GET"))
            .and(path(format!("/api/v3/repos/{ORGANISATION}/{name}/pulls")))
            .respond_with(ResponseTemplate::new(200).set_body_json(pulls.clone()))
            .mount(server)
            .await;
    }
}

/// Mounts task and subtask creation on the Asana mock.
pub(crate) async fn mount_asana_tracker(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/tasks"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "gid": TASK_GID, "resource_type": "task" }
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path_regex(r"^/tasks/[0-9]+/subtasks$"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "gid": "5678", "resource_type": "task" }
        })))
        .mount(server)
        .await;
}

/// JSON bodies of POST requests received at paths matching `predicate`.
pub(crate) async fn recorded_posts(
    server: &MockServer,
    predicate: impl Fn(&str) -> bool,
) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.method.as_str() == "POST" && predicate(request.url.path()))
        .map(|request| {
            serde_json::from_slice(&request.body)
                .unwrap_or_else(|error| panic!("request body should be JSON: {error}"))
        })
        .collect()
}
