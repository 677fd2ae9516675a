//! Repository connection configuration supplied by the host.

use thiserror::Error;
use url::Url;

/// Errors raised while turning host configuration into a usable adapter.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The server URL uses a scheme other than http or https.
    #[error(
        "server URL '{url}' uses unsupported scheme '{scheme}'\n  Suggestion: Use the Dryad API URL, e.g. https://datadryad.org/api/v2"
    )]
    UnsupportedScheme {
        /// The offending server URL.
        url: String,
        /// The rejected scheme.
        scheme: String,
    },

    /// The access token cannot be sent as an HTTP header value.
    #[error("access token contains invalid control characters")]
    InvalidToken,

    /// The bundled reference data could not be loaded.
    #[error(transparent)]
    ReferenceData(#[from] crate::reference::ReferenceDataError),

    /// The HTTP client could not be built.
    #[error("HTTP client construction failed: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Connection settings for one repository instance.
///
/// Built once by the host and treated as read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    /// Dryad API root, e.g. `https://dryad-stg.cdlib.org/api/v2`.
    pub server_url: Url,
    /// Access token issued by Dryad for the depositing application.
    pub identifier: String,
    /// Optional repository display name.
    pub repo_name: String,
    /// Host application identifier (e.g. `app.dryad`).
    pub app_name: String,
}

impl RepositoryConfig {
    /// Creates a configuration for the given API URL and access token.
    #[must_use]
    pub fn new(
        server_url: Url,
        identifier: impl Into<String>,
        repo_name: impl Into<String>,
        app_name: impl Into<String>,
    ) -> Self {
        Self {
            server_url,
            identifier: identifier.into(),
            repo_name: repo_name.into(),
            app_name: app_name.into(),
        }
    }

    /// Derives the user-facing site root (scheme, host and any explicit port)
    /// from the API URL. Edit links returned by Dryad are relative to it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the server URL is not an http(s) URL.
    pub fn base_url(&self) -> Result<String, ConfigError> {
        let url = &self.server_url;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                url: url.to_string(),
                scheme: url.scheme().to_string(),
            });
        }
        Ok(url.origin().ascii_serialization())
    }
}
