//! Dryad API request and response bodies.

use serde::{Deserialize, Serialize};

/// Dataset-creation request body (`POST /datasets`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DryadSubmission {
    pub title: String,
    #[serde(rename = "abstract")]
    pub dryad_abstract: String,
    pub field_of_science: String,
    pub authors: Vec<DryadAuthor>,
    pub funders: Vec<DryadFunder>,
    pub license: String,
}

/// An author entry in a Dryad dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DryadAuthor {
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
}

/// A funding source in a Dryad dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DryadFunder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub award_number: Option<String>,
}

/// An in-progress dataset as returned by `POST /datasets`.
///
/// Only the fields the adapter reads are modelled; the rest of the response is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DryadDataset {
    /// Dataset DOI, e.g. `doi:10.7959/dryad.5dv41ns2h`.
    pub identifier: String,
    /// Site-relative path of the page where the draft can be completed.
    pub edit_link: String,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub version_status: Option<String>,
    #[serde(default)]
    pub sharing_link: Option<String>,
}

/// A staged file as returned by `PUT /datasets/{doi}/files/{name}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DryadFile {
    pub path: Option<String>,
    pub url: Option<String>,
    pub size: Option<u64>,
    pub mime_type: Option<String>,
    pub status: Option<String>,
    pub digest: Option<String>,
    pub digest_type: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_serializes_dryad_field_names() {
        let submission = DryadSubmission {
            title: "title".to_string(),
            dryad_abstract: "desc".to_string(),
            field_of_science: "Other natural sciences".to_string(),
            authors: vec![DryadAuthor {
                first_name: "anyone".to_string(),
                email: "email@somewhere.com".to_string(),
                ..DryadAuthor::default()
            }],
            funders: vec![],
            license: String::new(),
        };

        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["abstract"], "desc");
        assert_eq!(value["fieldOfScience"], "Other natural sciences");
        assert_eq!(value["authors"][0]["firstName"], "anyone");
        assert!(
            value["authors"][0].get("lastName").is_none(),
            "unset optional author fields must be omitted"
        );
    }

    #[test]
    fn test_dataset_deserialize_ignores_unknown_fields() {
        let json = serde_json::json!({
            "_links": {"self": {"href": "/api/v2/datasets/doi%3A10.7959%2Fdryad.5dv41ns2h"}},
            "identifier": "doi:10.7959/dryad.5dv41ns2h",
            "id": 134_455,
            "storageSize": 0,
            "editLink": "/stash/edit/doi%3A10.7959%2Fdryad.5dv41ns2h/9pnE2U9VVe3mMQ",
            "versionStatus": "in_progress"
        });

        let dataset: DryadDataset = serde_json::from_value(json).unwrap();
        assert_eq!(dataset.identifier, "doi:10.7959/dryad.5dv41ns2h");
        assert_eq!(
            dataset.edit_link,
            "/stash/edit/doi%3A10.7959%2Fdryad.5dv41ns2h/9pnE2U9VVe3mMQ"
        );
        assert_eq!(dataset.version_status.as_deref(), Some("in_progress"));
        assert!(dataset.title.is_none());
    }

    #[test]
    fn test_dataset_without_edit_link_is_rejected() {
        let json = serde_json::json!({"identifier": "doi:10.7959/dryad.x"});
        assert!(serde_json::from_value::<DryadDataset>(json).is_err());
    }

    #[test]
    fn test_funder_deserialize_partial_record() {
        let json = serde_json::json!({"organization": "National Science Foundation"});
        let funder: DryadFunder = serde_json::from_value(json).unwrap();
        assert_eq!(
            funder.organization.as_deref(),
            Some("National Science Foundation")
        );
        assert!(funder.award_number.is_none());
    }
}
