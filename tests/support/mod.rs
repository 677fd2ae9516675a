//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod socket_guard;

use std::collections::HashMap;

use dryad_adapter::spi::FUNDER_PROPERTY;
use dryad_adapter::{Depositor, RepositoryConfig, SubmissionMetadata};
use url::Url;

/// Dataset-creation response captured from the Dryad staging server.
pub const DATASET_CREATION_RESPONSE: &str = include_str!("../fixtures/dataset_creation_response.json");

/// Funder record as the host passes it in submission properties.
pub const FUNDER_PROPERTY_JSON: &str = include_str!("../fixtures/funder_property.json");

/// Edit link contained in [`DATASET_CREATION_RESPONSE`].
pub const EDIT_LINK: &str = "/stash/edit/doi%3A10.7959%2Fdryad.5dv41ns2h/9pnE2U9VVe3mMQ";

/// Dataset identifier contained in [`DATASET_CREATION_RESPONSE`].
pub const DATASET_DOI: &str = "doi:10.7959/dryad.5dv41ns2h";

pub fn dataset_creation_response() -> serde_json::Value {
    serde_json::from_str(DATASET_CREATION_RESPONSE).expect("fixture is valid JSON")
}

/// Config pointing the adapter at `server_uri` (e.g. a wiremock server) under `/api/v2`.
pub fn config_for(server_uri: &str) -> RepositoryConfig {
    let server_url = Url::parse(&format!("{server_uri}/api/v2")).expect("valid mock server URL");
    RepositoryConfig::new(server_url, "token", "", "app.dryad")
}

/// Metadata resembling what the host sends for a single-file export.
pub fn submission_metadata() -> SubmissionMetadata {
    let author = Depositor::new("anyone", "email@somewhere.com");
    SubmissionMetadata {
        title: "title".to_string(),
        description: "desc".to_string(),
        subjects: vec!["Other natural sciences".to_string()],
        authors: vec![author.clone()],
        contacts: vec![author],
        publish: false,
        license: Some(
            Url::parse("https://creativecommons.org/publicdomain/zero/1.0/").expect("valid URL"),
        ),
        other_properties: HashMap::from([(
            FUNDER_PROPERTY.to_string(),
            FUNDER_PROPERTY_JSON.to_string(),
        )]),
    }
}
