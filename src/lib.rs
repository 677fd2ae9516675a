//! Dryad Repository Adapter
//!
//! Deposits a dataset (metadata plus one file) from a research data
//! management host into the Dryad repository, and reports connection health,
//! subject taxonomy and license options back to the host.
//!
//! # Architecture
//!
//! - [`spi`] - Host-facing traits and value types
//! - [`repository`] - [`DryadRepository`], the adapter the host configures and calls
//! - [`deposit`] - Create draft, stage file, resolve edit URL
//! - [`mapper`] - Host metadata to Dryad submission mapping
//! - [`client`] - Dryad REST API client
//! - [`reference`] - Bundled research domains and license table

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod deposit;
pub mod mapper;
pub mod reference;
pub mod repository;
pub mod spi;
pub(crate) mod user_agent;

// Re-export commonly used types
pub use client::{ClientError, DryadClient, DryadHttpClient};
pub use deposit::{DepositError, DepositOrchestrator, DepositStage};
pub use mapper::{MappingError, build_submission};
pub use reference::{ReferenceData, ReferenceDataError};
pub use repository::DryadRepository;
pub use spi::{
    ConfigError, Depositor, License, LicenseConfigInfo, LicenseDef, Repository, RepositoryConfig,
    RepositoryConfigurer, RepositoryOperationResult, Subject, SubmissionMetadata,
};
