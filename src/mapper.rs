//! Maps host submission metadata onto a Dryad dataset-creation request.

use thiserror::Error;
use tracing::warn;

use crate::client::{DryadAuthor, DryadFunder, DryadSubmission};
use crate::spi::{Depositor, FUNDER_PROPERTY, SubmissionMetadata};

/// Metadata that cannot be turned into a Dryad submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// Dryad requires a field of science, taken from the first subject.
    #[error("submission has no subjects\n  Suggestion: Select at least one subject before depositing")]
    NoSubjects,

    /// A required extension property is absent.
    #[error("submission is missing the '{0}' property")]
    MissingProperty(&'static str),
}

/// Builds the dataset-creation request for `metadata`.
///
/// Only the first subject becomes the field of science. Authors keep their
/// order; each display name is sent as the first name. A malformed funder
/// record is logged and dropped.
///
/// # Errors
///
/// Returns [`MappingError::NoSubjects`] when `metadata.subjects` is empty and
/// [`MappingError::MissingProperty`] when no funder property was supplied.
pub fn build_submission(metadata: &SubmissionMetadata) -> Result<DryadSubmission, MappingError> {
    let field_of_science = metadata
        .subjects
        .first()
        .ok_or(MappingError::NoSubjects)?
        .clone();
    let funder_json = metadata
        .other_properties
        .get(FUNDER_PROPERTY)
        .ok_or(MappingError::MissingProperty(FUNDER_PROPERTY))?;

    Ok(DryadSubmission {
        title: metadata.title.clone(),
        dryad_abstract: metadata.description.clone(),
        field_of_science,
        authors: map_authors(&metadata.authors),
        funders: parse_funders(funder_json),
        license: metadata
            .license
            .as_ref()
            .map(|url| url.as_str().to_string())
            .unwrap_or_default(),
    })
}

fn map_authors(authors: &[Depositor]) -> Vec<DryadAuthor> {
    authors
        .iter()
        .map(|author| DryadAuthor {
            first_name: author.unique_name.clone(),
            email: author.email.clone(),
            ..DryadAuthor::default()
        })
        .collect()
}

fn parse_funders(funder_json: &str) -> Vec<DryadFunder> {
    match serde_json::from_str::<DryadFunder>(funder_json) {
        Ok(funder) => vec![funder],
        Err(error) => {
            warn!(error = %error, "Ignoring malformed funder property");
            Vec::new()
        }
    }
}
