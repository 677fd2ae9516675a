//! Subject taxonomy and license option types shown by the host.

use serde::Serialize;
use url::Url;

/// A subject (research domain) the user can tag a submission with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    pub name: String,
}

impl Subject {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Where a license is defined and what it is called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseDef {
    pub url: Url,
    pub name: String,
}

/// A license option offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub license_definition: LicenseDef,
    /// Whether the host should preselect this license.
    pub default_license: bool,
}

/// License options together with the repository's license policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseConfigInfo {
    /// A license must be chosen before depositing.
    pub license_required: bool,
    /// Licenses outside [`Self::licenses`] may be entered.
    pub other_license_permitted: bool,
    pub licenses: Vec<License>,
}

/// A repository-specific property the host should collect from the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoProperty {
    pub display_name: String,
    pub required: bool,
    pub default_value: Option<String>,
}
