//! Bundled Dryad reference data: research domains and license options.
//!
//! Both tables are parsed once per process into an immutable
//! [`ReferenceData`]. Malformed bundled data is a configuration error, so an
//! adapter is never constructed with a silently empty subject list.

use std::sync::{Arc, LazyLock};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::spi::{License, LicenseDef, Subject};

/// Dryad research domains (OECD fields of science), versioned with the adapter.
const RESEARCH_DOMAINS_JSON: &str = include_str!("../resources/dryad-research-domains.json");

/// Resource name used in error messages.
const RESEARCH_DOMAINS_RESOURCE: &str = "dryad-research-domains.json";

/// Dryad publishes every dataset under CC0.
pub const CC0_LICENSE_URL: &str = "https://creativecommons.org/publicdomain/zero/1.0/";
pub const CC0_LICENSE_NAME: &str = "CC-0";

static BUNDLED: LazyLock<Result<Arc<ReferenceData>, ReferenceDataError>> =
    LazyLock::new(|| ReferenceData::from_json(RESEARCH_DOMAINS_JSON).map(Arc::new));

/// Errors loading reference data.
#[derive(Debug, Clone, Error)]
pub enum ReferenceDataError {
    /// The resource is not the expected JSON document.
    #[error("malformed reference data in {resource}: {reason}")]
    Malformed {
        /// Resource name.
        resource: &'static str,
        /// Parser message.
        reason: String,
    },

    /// The resource parsed but lists nothing.
    #[error("reference data in {resource} is empty")]
    Empty {
        /// Resource name.
        resource: &'static str,
    },

    /// A license definition URL does not parse.
    #[error("invalid license URL '{url}': {reason}")]
    InvalidLicenseUrl {
        /// The URL text.
        url: &'static str,
        /// Parser message.
        reason: String,
    },
}

#[derive(Debug, Deserialize)]
struct ResearchDomains {
    domains: Vec<String>,
}

/// Immutable subject and license tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceData {
    subjects: Vec<Subject>,
    licenses: Vec<License>,
}

impl ReferenceData {
    /// Returns the process-wide tables parsed from the bundled resources.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceDataError`] if the bundled resources are malformed.
    pub fn bundled() -> Result<Arc<Self>, ReferenceDataError> {
        (*BUNDLED).clone()
    }

    /// Parses a research-domains document (`{"domains": [...]}`) and pairs it
    /// with the fixed license table.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceDataError`] when the document is malformed or lists no domains.
    pub fn from_json(domains_json: &str) -> Result<Self, ReferenceDataError> {
        let parsed: ResearchDomains =
            serde_json::from_str(domains_json).map_err(|e| ReferenceDataError::Malformed {
                resource: RESEARCH_DOMAINS_RESOURCE,
                reason: e.to_string(),
            })?;
        if parsed.domains.is_empty() {
            return Err(ReferenceDataError::Empty {
                resource: RESEARCH_DOMAINS_RESOURCE,
            });
        }

        let subjects: Vec<Subject> = parsed.domains.into_iter().map(Subject::new).collect();
        let licenses = dryad_licenses()?;
        debug!(
            subjects = subjects.len(),
            licenses = licenses.len(),
            "Loaded Dryad reference data"
        );

        Ok(Self { subjects, licenses })
    }

    /// Research domains in bundled order.
    #[must_use]
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// License options accepted by Dryad.
    #[must_use]
    pub fn licenses(&self) -> &[License] {
        &self.licenses
    }
}

fn dryad_licenses() -> Result<Vec<License>, ReferenceDataError> {
    let url = Url::parse(CC0_LICENSE_URL).map_err(|e| ReferenceDataError::InvalidLicenseUrl {
        url: CC0_LICENSE_URL,
        reason: e.to_string(),
    })?;
    Ok(vec![License {
        license_definition: LicenseDef {
            url,
            name: CC0_LICENSE_NAME.to_string(),
        },
        default_license: true,
    }])
}
