//! Best-effort loading of run settings from a path-scoped parameter store.
//!
//! Parameters live below a hierarchical path such as `/dev/dependency_tasks`.
//! Only the direct children of the path are read, and each parameter is keyed
//! by the last segment of its name. A failing store call never aborts the
//! run: the failure is logged and whatever was loaded so far is returned.

mod ssm;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::SyncError;

pub use ssm::SsmParameterStore;

/// One decrypted parameter as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredParameter {
    /// Full hierarchical name, e.g. `/dev/dependency_tasks/ORG_NAME`.
    pub name: String,
    /// Decrypted value.
    pub value: String,
}

impl StoredParameter {
    /// Creates a parameter from its full name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Last `/`-delimited segment of the parameter name.
    #[must_use]
    pub fn key(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(self.name.as_str())
    }
}

/// A single page of parameters plus the continuation token, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterPage {
    /// Parameters on this page.
    pub parameters: Vec<StoredParameter>,
    /// Token for the next page; `None` when the listing is exhausted.
    pub next_token: Option<String>,
}

/// Store that can list the direct children of a parameter path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetch one page of non-recursive, decrypted parameters below `path`.
    async fn parameters_by_path(
        &self,
        path: &str,
        next_token: Option<String>,
    ) -> Result<ParameterPage, SyncError>;
}

/// Flat mapping of parameter key to decrypted value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters(HashMap<String, String>);

impl Parameters {
    /// Looks up a parameter by its key (the last path segment).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Number of loaded parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, parameter: StoredParameter) {
        let key = parameter.key().to_owned();
        self.0.insert(key, parameter.value);
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Loads every parameter directly below `path`.
///
/// Store failures are logged and swallowed; the returned mapping holds the
/// parameters from any pages read before the failure.
pub async fn load_parameters<S>(store: &S, path: &str) -> Parameters
where
    S: ParameterStore + ?Sized,
{
    let mut parameters = Parameters::default();
    let mut next_token = None;

    loop {
        let page = match store.parameters_by_path(path, next_token.take()).await {
            Ok(page) => page,
            Err(error) => {
                tracing::error!(
                    path,
                    loaded = parameters.len(),
                    "encountered an error loading config from the parameter store: {error}"
                );
                return parameters;
            }
        };

        for parameter in page.parameters {
            parameters.insert(parameter);
        }

        match page.next_token {
            Some(token) => next_token = Some(token),
            None => break,
        }
    }

    tracing::debug!(path, loaded = parameters.len(), "loaded parameters");
    parameters
}
