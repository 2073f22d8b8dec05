//! Access token wrapper shared by the GitHub and Asana gateways.

use crate::error::SyncError;

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::MissingToken` naming `service` when the supplied
    /// string is blank.
    pub fn new(service: &'static str, token: impl AsRef<str>) -> Result<Self, SyncError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SyncError::MissingToken { service });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}
