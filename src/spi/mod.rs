//! Host repository SPI.
//!
//! The host application talks to any repository adapter through the
//! [`Repository`] and [`RepositoryConfigurer`] traits. The types here mirror
//! the values the host hands in (configuration, submission metadata) and the
//! values it expects back (operation results, subjects, license options).

mod config;
mod license;
mod metadata;
mod result;

pub use config::{ConfigError, RepositoryConfig};
pub use license::{License, LicenseConfigInfo, LicenseDef, RepoProperty, Subject};
pub use metadata::{Depositor, FUNDER_PROPERTY, SubmissionMetadata};
pub use result::RepositoryOperationResult;

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;

/// Operations the host invokes on a configured repository adapter.
///
/// Every operation reports its outcome through [`RepositoryOperationResult`];
/// recoverable faults never escape as errors.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Deposits `file` together with `metadata` into the repository.
    ///
    /// `depositor` and `config` are supplied by the host for adapters that
    /// need per-call context; adapters configured at construction may ignore them.
    async fn submit_deposit(
        &self,
        depositor: Option<&Depositor>,
        file: &Path,
        metadata: &SubmissionMetadata,
        config: Option<&RepositoryConfig>,
    ) -> RepositoryOperationResult;

    /// Probes the repository with the configured credentials.
    async fn test_connection(&self) -> RepositoryOperationResult;

    /// Returns the reference-data side of this adapter.
    fn configurer(&self) -> &dyn RepositoryConfigurer;
}

/// Reference data the host shows when a user prepares a submission.
pub trait RepositoryConfigurer: Send + Sync {
    /// Subject taxonomy accepted by the repository, in display order.
    fn subjects(&self) -> Vec<Subject>;

    /// License options and whether a license must be chosen.
    fn license_config_info(&self) -> LicenseConfigInfo;

    /// Extra repository-specific properties the host should collect.
    fn other_properties(&self) -> HashMap<String, RepoProperty>;
}
