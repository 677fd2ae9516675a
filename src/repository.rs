//! The Dryad adapter as seen by the host.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::client::{DryadClient, DryadHttpClient};
use crate::deposit::DepositOrchestrator;
use crate::reference::ReferenceData;
use crate::spi::{
    ConfigError, Depositor, LicenseConfigInfo, RepoProperty, Repository, RepositoryConfig,
    RepositoryConfigurer, RepositoryOperationResult, Subject, SubmissionMetadata,
};

pub const CONNECTION_OK_MESSAGE: &str = "Test connection OK!";
pub const CONNECTION_REJECTED_MESSAGE: &str = "Test connection failed - please check settings.";

/// Repository adapter depositing into Dryad.
///
/// Holds only read-only state set at configuration time, so one instance can
/// serve concurrent calls.
pub struct DryadRepository {
    config: RepositoryConfig,
    client: Arc<dyn DryadClient>,
    deposits: DepositOrchestrator,
    reference: Arc<ReferenceData>,
}

impl DryadRepository {
    /// Configures an adapter talking to the Dryad API named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unusable server URL or token, or when the
    /// bundled reference data is malformed.
    pub fn configure(config: RepositoryConfig) -> Result<Self, ConfigError> {
        let client = DryadHttpClient::new(&config)?;
        Self::with_client(config, Arc::new(client))
    }

    /// Configures an adapter around an existing client.
    ///
    /// # Errors
    ///
    /// Same as [`Self::configure`], minus client construction.
    pub fn with_client(
        config: RepositoryConfig,
        client: Arc<dyn DryadClient>,
    ) -> Result<Self, ConfigError> {
        let base_url = config.base_url()?;
        let reference = ReferenceData::bundled()?;
        info!(server_url = %config.server_url, %base_url, "Configured Dryad repository");

        Ok(Self {
            deposits: DepositOrchestrator::new(client.clone(), base_url),
            config,
            client,
            reference,
        })
    }

    #[must_use]
    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }
}

impl std::fmt::Debug for DryadRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DryadRepository")
            .field("server_url", &self.config.server_url.as_str())
            .field("deposits", &self.deposits)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Repository for DryadRepository {
    async fn submit_deposit(
        &self,
        _depositor: Option<&Depositor>,
        file: &Path,
        metadata: &SubmissionMetadata,
        _config: Option<&RepositoryConfig>,
    ) -> RepositoryOperationResult {
        self.deposits.submit(file, metadata).await
    }

    #[tracing::instrument(skip_all)]
    async fn test_connection(&self) -> RepositoryOperationResult {
        match self.client.test_connection().await {
            Ok(true) => RepositoryOperationResult::ok(CONNECTION_OK_MESSAGE),
            Ok(false) => RepositoryOperationResult::failure(CONNECTION_REJECTED_MESSAGE),
            Err(error) => {
                warn!(error = %error, "Couldn't perform Dryad test connection");
                RepositoryOperationResult::failure(format!("Test connection failed - {error}"))
            }
        }
    }

    fn configurer(&self) -> &dyn RepositoryConfigurer {
        self
    }
}

impl RepositoryConfigurer for DryadRepository {
    fn subjects(&self) -> Vec<Subject> {
        self.reference.subjects().to_vec()
    }

    fn license_config_info(&self) -> LicenseConfigInfo {
        LicenseConfigInfo {
            license_required: true,
            other_license_permitted: false,
            licenses: self.reference.licenses().to_vec(),
        }
    }

    fn other_properties(&self) -> HashMap<String, RepoProperty> {
        HashMap::new()
    }
}
