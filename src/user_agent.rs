//! Shared User-Agent string for Dryad API requests.
//!
//! Single source for project URL and UA format so every request the adapter
//! makes identifies itself the same way (RFC 9308).

/// Project URL for User-Agent identification.
const PROJECT_UA_URL: &str = "https://github.com/nicksrandall/dryad-adapter";

/// Default User-Agent for Dryad API requests.
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("dryad-adapter/{version} (research-data-deposit; +{PROJECT_UA_URL})")
}
