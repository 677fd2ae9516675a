//! Dryad REST API client.
//!
//! - [`DryadClient`] - Async trait the deposit flow calls; mockable in tests
//! - [`DryadHttpClient`] - reqwest-backed implementation against `/api/v2`
//! - [`model`] - Request/response bodies
//! - [`ClientError`] - Transport-level failures

mod error;
mod http;
pub mod model;

pub use error::{ClientError, MAX_ERROR_BODY_CHARS};
pub use http::DryadHttpClient;
pub use model::{DryadAuthor, DryadDataset, DryadFile, DryadFunder, DryadSubmission};

use async_trait::async_trait;

/// Operations the adapter needs from the Dryad API.
///
/// # Object Safety
///
/// Uses `async_trait` so the repository can hold an `Arc<dyn DryadClient>`
/// and tests can substitute a scripted client.
#[async_trait]
pub trait DryadClient: Send + Sync {
    /// Creates an in-progress dataset from `submission`.
    async fn create_submission(
        &self,
        submission: &DryadSubmission,
    ) -> Result<DryadDataset, ClientError>;

    /// Uploads `content` as `file_name` into the in-progress dataset `dataset_id`.
    async fn stage_file(
        &self,
        dataset_id: &str,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<DryadFile, ClientError>;

    /// Returns whether the configured credentials are accepted.
    async fn test_connection(&self) -> Result<bool, ClientError>;
}
