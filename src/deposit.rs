//! Deposit flow: create a draft dataset, stage the file, resolve the edit page.
//!
//! A deposit attempt moves through [`DepositStage`]s strictly in order and
//! stops at the first fault. Every fault is reported as a failed
//! [`RepositoryOperationResult`]; nothing is retried and nothing escapes to
//! the host as an error.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info};
use url::Url;

use crate::client::{ClientError, DryadClient};
use crate::mapper::{MappingError, build_submission};
use crate::spi::{RepositoryOperationResult, SubmissionMetadata};

/// Message attached to a successful deposit.
pub const SUCCESS_MESSAGE: &str = "Export uploaded to dryad successfully.";

/// Why a deposit attempt failed, by fault category.
#[derive(Debug, Error)]
pub enum DepositError {
    /// The host metadata cannot be mapped to a Dryad submission.
    #[error("Invalid submission metadata for dryad: {0}")]
    Mapping(#[from] MappingError),

    /// A Dryad API call failed.
    #[error("Transport error occurred while submitting to dryad: {0}")]
    Transport(#[from] ClientError),

    /// The edit link returned by Dryad does not form a valid URL.
    #[error("Malformed URL error occurred while submitting to dryad: '{url}': {reason}")]
    Url {
        /// The concatenated URL text.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The deposit file could not be read.
    #[error("IO error occurred while submitting to dryad: {path}: {source}")]
    Io {
        /// The deposit file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },
}

impl DepositError {
    /// Short category name used in logs.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Mapping(_) => "mapping",
            Self::Transport(_) => "transport",
            Self::Url { .. } => "url",
            Self::Io { .. } => "io",
        }
    }

    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Progress of a single deposit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DepositStage {
    Started,
    DraftCreated,
    FileStaged,
    UrlResolved,
    Succeeded,
}

/// Runs deposit attempts against one Dryad instance.
#[derive(Clone)]
pub struct DepositOrchestrator {
    client: Arc<dyn DryadClient>,
    base_url: String,
}

impl DepositOrchestrator {
    /// Creates an orchestrator; `base_url` is the site root edit links are relative to.
    #[must_use]
    pub fn new(client: Arc<dyn DryadClient>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Deposits `file` with `metadata` and reports the outcome.
    ///
    /// On success the result URL is the draft's edit page, where the user
    /// completes and publishes the dataset.
    #[tracing::instrument(skip_all, fields(file = %file.display()))]
    pub async fn submit(
        &self,
        file: &Path,
        metadata: &SubmissionMetadata,
    ) -> RepositoryOperationResult {
        let mut stage = DepositStage::Started;
        match self.run(file, metadata, &mut stage).await {
            Ok(edit_url) => {
                advance(&mut stage, DepositStage::Succeeded);
                info!(%edit_url, "Deposit to dryad succeeded");
                RepositoryOperationResult::success(SUCCESS_MESSAGE, edit_url)
            }
            Err(err) => {
                error!(
                    last_stage = ?stage,
                    category = err.category(),
                    error = %err,
                    "Deposit to dryad failed"
                );
                RepositoryOperationResult::failure(err.to_string())
            }
        }
    }

    async fn run(
        &self,
        file: &Path,
        metadata: &SubmissionMetadata,
        stage: &mut DepositStage,
    ) -> Result<Url, DepositError> {
        let submission = build_submission(metadata)?;

        let dataset = self.client.create_submission(&submission).await?;
        debug!(identifier = %dataset.identifier, "Created in-progress dataset");
        advance(stage, DepositStage::DraftCreated);

        let file_name = file
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                DepositError::io(
                    file,
                    io::Error::new(io::ErrorKind::InvalidInput, "file has no UTF-8 file name"),
                )
            })?;
        let content = tokio::fs::read(file)
            .await
            .map_err(|e| DepositError::io(file, e))?;
        self.client
            .stage_file(&dataset.identifier, file_name, content)
            .await?;
        advance(stage, DepositStage::FileStaged);

        let edit_url = edit_url(&self.base_url, &dataset.edit_link)?;
        debug!(%edit_url, "Resolved edit URL");
        advance(stage, DepositStage::UrlResolved);

        Ok(edit_url)
    }
}

impl std::fmt::Debug for DepositOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DepositOrchestrator")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

fn advance(stage: &mut DepositStage, next: DepositStage) {
    debug!(from = ?*stage, to = ?next, "Deposit stage");
    *stage = next;
}

/// Joins the site root and a site-relative edit link.
///
/// # Errors
///
/// Returns [`DepositError::Url`] when the link is not an absolute path or the
/// result does not parse.
pub fn edit_url(base_url: &str, edit_link: &str) -> Result<Url, DepositError> {
    let joined = format!("{base_url}{edit_link}");
    if !edit_link.starts_with('/') {
        return Err(DepositError::Url {
            url: joined,
            reason: "edit link is not a site-relative path".to_string(),
        });
    }
    Url::parse(&joined).map_err(|e| DepositError::Url {
        url: joined.clone(),
        reason: e.to_string(),
    })
}
