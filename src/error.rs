//! Error types surfaced by the dependency task job.

use thiserror::Error;

/// Errors surfaced while loading settings or talking to GitHub and Asana.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SyncError {
    /// A required run setting was absent from the parameter store.
    #[error("required setting `{key}` is missing from the parameter store")]
    MissingSetting {
        /// Parameter name (last path segment) that was expected.
        key: String,
    },

    /// An access token was missing or blank.
    #[error("{service} access token is required")]
    MissingToken {
        /// Service the token authenticates against.
        service: &'static str,
    },

    /// A configured API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// The remote service rejected the credentials.
    #[error("{service} rejected the token: {message}")]
    Authentication {
        /// Service that returned the 401/403 response.
        service: &'static str,
        /// Error detail returned with the response.
        message: String,
    },

    /// The remote service returned a non-authentication API error.
    #[error("{service} API error: {message}")]
    Api {
        /// Service that returned the failure.
        service: &'static str,
        /// Response detail describing the failure.
        message: String,
    },

    /// Networking failed while calling a remote service.
    #[error("network error talking to {service}: {message}")]
    Network {
        /// Service being called.
        service: &'static str,
        /// Transport-level error detail.
        message: String,
    },

    /// The parameter store call failed.
    #[error("parameter store error: {message}")]
    ParameterStore {
        /// Error detail from the SDK.
        message: String,
    },

    /// Launch configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

/// Service label used in GitHub errors.
pub(crate) const GITHUB: &str = "GitHub";

/// Service label used in Asana errors.
pub(crate) const ASANA: &str = "Asana";
