//! Uniform outcome reported back to the host.

use url::Url;

/// Outcome of a repository operation.
///
/// The only channel through which an adapter reports success or failure to
/// the host. A URL is present only on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOperationResult {
    succeeded: bool,
    message: String,
    url: Option<Url>,
}

impl RepositoryOperationResult {
    /// Creates a succeeded result pointing at `url`.
    #[must_use]
    pub fn success(message: impl Into<String>, url: Url) -> Self {
        Self {
            succeeded: true,
            message: message.into(),
            url: Some(url),
        }
    }

    /// Creates a succeeded result with no resulting URL (e.g. a connection probe).
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            message: message.into(),
            url: None,
        }
    }

    /// Creates a failed result.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            message: message.into(),
            url: None,
        }
    }

    #[must_use]
    pub fn is_succeeded(&self) -> bool {
        self.succeeded
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_never_carries_url() {
        let result = RepositoryOperationResult::failure("boom");
        assert!(!result.is_succeeded());
        assert_eq!(result.message(), "boom");
        assert!(result.url().is_none());
    }

    #[test]
    fn test_success_carries_url() {
        let url = Url::parse("https://datadryad.org/stash/edit/x").unwrap();
        let result = RepositoryOperationResult::success("done", url.clone());
        assert!(result.is_succeeded());
        assert_eq!(result.url(), Some(&url));
    }
}
