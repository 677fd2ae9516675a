//! Submission metadata handed over by the host for a single deposit.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use url::Url;

/// Property key under which the host passes a JSON-encoded funder record.
pub const FUNDER_PROPERTY: &str = "funder";

/// A person taking part in a deposit (author, contact or depositor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Depositor {
    /// Display name as known to the host.
    pub unique_name: String,
    /// Contact email address.
    pub email: String,
}

impl Depositor {
    /// Creates a depositor identity.
    #[must_use]
    pub fn new(unique_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            unique_name: unique_name.into(),
            email: email.into(),
        }
    }
}

/// Descriptive metadata for one dataset submission.
///
/// Read-only from the adapter's point of view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionMetadata {
    pub title: String,
    pub description: String,
    /// Subject tags in the order the user chose them. Must be non-empty for a deposit.
    pub subjects: Vec<String>,
    pub authors: Vec<Depositor>,
    pub contacts: Vec<Depositor>,
    pub publish: bool,
    /// Selected license definition URL, if any.
    pub license: Option<Url>,
    /// Repository-specific extension properties as raw strings.
    pub other_properties: HashMap<String, String>,
}
