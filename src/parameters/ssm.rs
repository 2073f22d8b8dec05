//! AWS Systems Manager Parameter Store adapter.

use async_trait::async_trait;
use aws_sdk_ssm::error::DisplayErrorContext;

use crate::error::SyncError;

use super::{ParameterPage, ParameterStore, StoredParameter};

/// Parameter store backed by `GetParametersByPath`.
#[derive(Debug, Clone)]
pub struct SsmParameterStore {
    client: aws_sdk_ssm::Client,
}

impl SsmParameterStore {
    /// Creates a store from an SSM client.
    #[must_use]
    pub const fn new(client: aws_sdk_ssm::Client) -> Self {
        Self { client }
    }

    /// Builds a store for `region` using the default AWS credential chain
    /// (environment variables, shared config, IMDS, etc.).
    pub async fn for_region(region: &str) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_owned()))
            .load()
            .await;

        tracing::debug!(region, "parameter store client created");
        Self::new(aws_sdk_ssm::Client::new(&sdk_config))
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn parameters_by_path(
        &self,
        path: &str,
        next_token: Option<String>,
    ) -> Result<ParameterPage, SyncError> {
        let output = self
            .client
            .get_parameters_by_path()
            .path(path)
            .recursive(false)
            .with_decryption(true)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|error| SyncError::ParameterStore {
                message: format!(
                    "GetParametersByPath {path} failed: {}",
                    DisplayErrorContext(&error)
                ),
            })?;

        let parameters = output
            .parameters()
            .iter()
            .filter_map(|parameter| {
                let name = parameter.name()?;
                let value = parameter.value()?;
                Some(StoredParameter::new(name, value))
            })
            .collect();

        Ok(ParameterPage {
            parameters,
            next_token: output.next_token().map(ToOwned::to_owned),
        })
    }
}
