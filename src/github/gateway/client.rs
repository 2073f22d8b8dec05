//! Octocrab client construction.

use http::Uri;
use octocrab::Octocrab;

use crate::error::{GITHUB, SyncError};
use crate::tls::install_crypto_provider;
use crate::token::AccessToken;

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client for the given token and API base URL.
///
/// # Errors
///
/// Returns `SyncError::InvalidUrl` when the base URI cannot be parsed or
/// `SyncError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: &AccessToken,
    api_base: &str,
) -> Result<Octocrab, SyncError> {
    install_crypto_provider();

    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| SyncError::InvalidUrl(format!("{api_base}: {error}")))?;

    Octocrab::builder()
        .personal_token(token.as_ref())
        .base_uri(base_uri)
        .map_err(|error| SyncError::Api {
            service: GITHUB,
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
