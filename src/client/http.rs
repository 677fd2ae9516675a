//! reqwest-backed [`DryadClient`] implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};

use crate::spi::{ConfigError, RepositoryConfig};
use crate::user_agent;

use super::{ClientError, DryadClient, DryadDataset, DryadFile, DryadSubmission};

const CONNECT_TIMEOUT_SECS: u64 = 10;
/// Covers uploading a whole dataset file in one request.
const REQUEST_TIMEOUT_SECS: u64 = 300;

/// Calls the Dryad v2 REST API with a bearer token.
pub struct DryadHttpClient {
    client: Client,
    api_root: String,
    token: String,
}

impl DryadHttpClient {
    /// Builds a client for the API root and token in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the token cannot be used as a header value
    /// or the HTTP client cannot be built.
    #[tracing::instrument(skip_all, fields(server_url = %config.server_url))]
    pub fn new(config: &RepositoryConfig) -> Result<Self, ConfigError> {
        if config
            .identifier
            .chars()
            .any(|c| c == '\n' || c == '\r' || c == '\0')
        {
            return Err(ConfigError::InvalidToken);
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(user_agent::default_user_agent())
            .gzip(true)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            client,
            api_root: config.server_url.as_str().trim_end_matches('/').to_string(),
            token: config.identifier.clone(),
        })
    }

    fn datasets_url(&self) -> String {
        format!("{}/datasets", self.api_root)
    }

    fn file_url(&self, dataset_id: &str, file_name: &str) -> String {
        format!(
            "{}/datasets/{}/files/{}",
            self.api_root,
            urlencoding::encode(dataset_id),
            urlencoding::encode(file_name)
        )
    }

    fn test_url(&self) -> String {
        format!("{}/test", self.api_root)
    }
}

impl std::fmt::Debug for DryadHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DryadHttpClient")
            .field("api_root", &self.api_root)
            .finish_non_exhaustive()
    }
}

/// Passes success responses through and turns anything else into [`ClientError::HttpStatus`].
async fn ensure_success(url: &str, response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    debug!(status = status.as_u16(), %url, "Dryad API error response");
    Err(ClientError::http_status(url, status.as_u16(), &body))
}

#[async_trait]
impl DryadClient for DryadHttpClient {
    #[tracing::instrument(skip_all, fields(title = %submission.title))]
    async fn create_submission(
        &self,
        submission: &DryadSubmission,
    ) -> Result<DryadDataset, ClientError> {
        let url = self.datasets_url();
        debug!(%url, "Creating Dryad submission");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
            .json(submission)
            .send()
            .await
            .map_err(|e| ClientError::network(&url, e))?;
        let response = ensure_success(&url, response).await?;

        response
            .json::<DryadDataset>()
            .await
            .map_err(|e| ClientError::decode(&url, e))
    }

    #[tracing::instrument(skip(self, content), fields(bytes = content.len()))]
    async fn stage_file(
        &self,
        dataset_id: &str,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<DryadFile, ClientError> {
        let url = self.file_url(dataset_id, file_name);
        debug!(%url, "Staging file into Dryad dataset");

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(content)
            .send()
            .await
            .map_err(|e| ClientError::network(&url, e))?;
        let response = ensure_success(&url, response).await?;

        response
            .json::<DryadFile>()
            .await
            .map_err(|e| ClientError::decode(&url, e))
    }

    #[tracing::instrument(skip_all)]
    async fn test_connection(&self) -> Result<bool, ClientError> {
        let url = self.test_url();
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ClientError::network(&url, e))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warn!(status = response.status().as_u16(), "Dryad rejected credentials");
                Ok(false)
            }
            _ => ensure_success(&url, response).await.map(|_| true),
        }
    }
}
