//! Typed run settings derived from the loaded parameters.

use crate::error::SyncError;
use crate::parameters::Parameters;

/// Parameter key holding the GitHub organisation name.
pub const ORG_NAME: &str = "ORG_NAME";
/// Parameter key holding the Asana project identifier.
pub const PROJECT_ID: &str = "PROJECT_ID";
/// Parameter key holding the Asana section identifier.
pub const SECTION_ID: &str = "SECTION_ID";
/// Parameter key holding the GitHub access token.
pub const GITHUB_ACCESS_TOKEN: &str = "GITHUB_ACCESS_TOKEN";
/// Parameter key holding the Asana access token.
pub const ASANA_ACCESS_TOKEN: &str = "ASANA_ACCESS_TOKEN";

/// Settings for one run, built once and passed by reference.
#[derive(Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// GitHub organisation whose repositories are scanned.
    pub organisation: String,
    /// Asana project receiving the tasks.
    pub project_id: String,
    /// Asana section within the project.
    pub section_id: String,
    /// GitHub personal access token.
    pub github_token: String,
    /// Asana personal access token.
    pub asana_token: String,
}

impl RunSettings {
    /// Builds settings from loaded parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::MissingSetting`] naming the first absent key.
    pub fn from_parameters(parameters: &Parameters) -> Result<Self, SyncError> {
        let require = |key: &str| {
            parameters
                .get(key)
                .map(ToOwned::to_owned)
                .ok_or_else(|| SyncError::MissingSetting {
                    key: key.to_owned(),
                })
        };

        Ok(Self {
            organisation: require(ORG_NAME)?,
            project_id: require(PROJECT_ID)?,
            section_id: require(SECTION_ID)?,
            github_token: require(GITHUB_ACCESS_TOKEN)?,
            asana_token: require(ASANA_ACCESS_TOKEN)?,
        })
    }
}

impl std::fmt::Debug for RunSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunSettings")
            .field("organisation", &self.organisation)
            .field("project_id", &self.project_id)
            .field("section_id", &self.section_id)
            .field("github_token", &"<redacted>")
            .field("asana_token", &"<redacted>")
            .finish()
    }
}
