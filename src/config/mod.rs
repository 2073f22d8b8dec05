//! Launch configuration loaded from CLI, environment, and files.
//!
//! The launch configuration only says *where* the run settings live. Tokens,
//! the organisation, and the Asana identifiers are stored in the parameter
//! store and loaded separately (see [`crate::parameters`]).
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.dependency-tasks.toml` in current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `DEPENDENCY_TASKS_STAGE`,
//!    `DEPENDENCY_TASKS_CONFIG_PATH`, or the legacy `ENV` and
//!    `APP_CONFIG_PATH`
//! 4. **Command-line arguments** – `--stage`/`-s` and `--config-path`/`-c`
//!
//! # Configuration File
//!
//! ```toml
//! stage = "dev"
//! config_path = "dependency_tasks"
//! aws_region = "us-east-1"
//! telemetry = true
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::SyncError;

/// Default GitHub REST API base.
pub const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";

/// Default Asana REST API base.
pub const DEFAULT_ASANA_API_BASE: &str = "https://app.asana.com/api/1.0";

/// Region used when neither configuration nor `AWS_DEFAULT_REGION` supply one.
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

/// Launch configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `DEPENDENCY_TASKS_STAGE`, `ENV`, or `--stage`: deployment stage
/// - `DEPENDENCY_TASKS_CONFIG_PATH`, `APP_CONFIG_PATH`, or `--config-path`:
///   parameter path name below the stage
/// - `DEPENDENCY_TASKS_AWS_REGION`, `AWS_DEFAULT_REGION`, or `--aws-region`
///
/// # Example
///
/// ```no_run
/// use dependency_tasks::LaunchConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = LaunchConfig::load().expect("failed to load configuration");
/// let path = config.parameter_path().expect("stage and path required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "DEPENDENCY_TASKS",
    discovery(
        dotfile_name = ".dependency-tasks.toml",
        config_file_name = "dependency-tasks.toml",
        app_name = "dependency-tasks"
    )
)]
pub struct LaunchConfig {
    /// Deployment stage, the first segment of the parameter path.
    ///
    /// Falls back to the `ENV` environment variable.
    #[ortho_config(cli_short = 's')]
    pub stage: Option<String>,

    /// Parameter path name below the stage.
    ///
    /// Falls back to the `APP_CONFIG_PATH` environment variable.
    #[ortho_config(cli_short = 'c')]
    pub config_path: Option<String>,

    /// AWS region hosting the parameter store.
    #[ortho_config()]
    pub aws_region: Option<String>,

    /// GitHub REST API base URL.
    #[ortho_config()]
    pub github_api_base: String,

    /// Asana REST API base URL.
    #[ortho_config()]
    pub asana_api_base: String,

    /// Writes telemetry events to stderr as JSON lines.
    ///
    /// Booleans are not read from the environment by `ortho_config`; use
    /// `--telemetry` or `telemetry = true` in the configuration file.
    #[ortho_config()]
    pub telemetry: bool,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            stage: None,
            config_path: None,
            aws_region: None,
            github_api_base: DEFAULT_GITHUB_API_BASE.to_owned(),
            asana_api_base: DEFAULT_ASANA_API_BASE.to_owned(),
            telemetry: false,
        }
    }
}

impl LaunchConfig {
    /// Resolves the stage from configuration or the legacy `ENV` variable.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Configuration`] when no source provides a stage.
    pub fn resolve_stage(&self) -> Result<String, SyncError> {
        resolve_with_fallback(self.stage.as_deref(), "ENV", "stage (use --stage or ENV)")
    }

    /// Resolves the config path name from configuration or the legacy
    /// `APP_CONFIG_PATH` variable.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Configuration`] when no source provides a path.
    pub fn resolve_config_path(&self) -> Result<String, SyncError> {
        resolve_with_fallback(
            self.config_path.as_deref(),
            "APP_CONFIG_PATH",
            "config path (use --config-path or APP_CONFIG_PATH)",
        )
    }

    /// Full parameter store path, `/{stage}/{config_path}`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Configuration`] when the stage or config path
    /// cannot be resolved.
    pub fn parameter_path(&self) -> Result<String, SyncError> {
        let stage = self.resolve_stage()?;
        let config_path = self.resolve_config_path()?;
        Ok(format!(
            "/{}/{}",
            stage.trim_matches('/'),
            config_path.trim_matches('/')
        ))
    }

    /// Region for the parameter store client.
    #[must_use]
    pub fn resolve_region(&self) -> String {
        resolve_optional(self.aws_region.as_deref(), "AWS_DEFAULT_REGION")
            .unwrap_or_else(|| DEFAULT_AWS_REGION.to_owned())
    }
}

fn resolve_with_fallback(
    configured: Option<&str>,
    legacy_variable: &str,
    description: &str,
) -> Result<String, SyncError> {
    resolve_optional(configured, legacy_variable).ok_or_else(|| SyncError::Configuration {
        message: format!("{description} is required"),
    })
}

/// Blank values count as unset, so a blank configured value still falls
/// through to `legacy_variable`.
fn resolve_optional(configured: Option<&str>, legacy_variable: &str) -> Option<String> {
    let is_present = |value: &str| !value.trim().is_empty();
    configured
        .filter(|value| is_present(value))
        .map(ToOwned::to_owned)
        .or_else(|| env::var(legacy_variable).ok().filter(|value| is_present(value)))
}
