#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

//! # Service Monitoring
//!
//! Reporting core for a web-service monitoring bundle.
//!
//! ## Overview
//!
//! The crate turns what a service knows about itself into transfer objects an
//! HTTP layer can serve:
//!
//! - **Manifest lookup**: service id and version from build metadata, with
//!   default fallbacks when an attribute is absent
//! - **Report translation**: service metadata plus a health snapshot become a
//!   single immutable [`ServiceHealthReportDto`]
//! - **Transfer objects**: plain serde types sharing one JSON-shaped `Display`
//!
//! Running health checks, serving HTTP and embedding manifests at build time
//! are the host application's concern.
//!
//! ## Module Organization
//!
//! - [`manifest`] - Manifest sources and service identity lookup
//! - [`domain`] - Service metadata and health snapshots
//! - [`api`] - Transfer objects
//! - [`reporting`] - Health report translation
//! - [`config`] - Layered configuration
//! - [`logging`] - Structured logging setup
//! - [`error`] - Error types
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use service_monitoring::config::MonitoringConfig;
//! use service_monitoring::domain::{HealthCheckResult, ServiceHealth, ServiceMetadata};
//! use service_monitoring::manifest::ServiceManifestEntries;
//! use service_monitoring::reporting::create_report;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MonitoringConfig::load()?;
//! service_monitoring::logging::init_structured_logging(&config.logging);
//!
//! let manifest = service_monitoring::embedded_manifest!().merge(config.load_manifest()?);
//! let entries = ServiceManifestEntries::new(manifest);
//! let metadata = ServiceMetadata::resolve(&entries, &config);
//!
//! let health = ServiceHealth::evaluate(vec![HealthCheckResult::healthy("database", 3)]);
//! let report = create_report(&metadata, &health);
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod reporting;

pub use api::{
    Dto, HealthCheckResultDto, InstanceMetadataDto, MetadataDto, ServiceHealthReportDto,
    ServiceInstanceHealthDto, ServiceMetadataDto,
};
pub use config::MonitoringConfig;
pub use domain::{
    CheckStatus, HealthCheckResult, HealthStatus, InstanceMetadata, ServiceHealth,
    ServiceMetadata,
};
pub use error::{MonitoringError, Result};
pub use manifest::{Manifest, ManifestSource, ServiceManifestEntries};
pub use reporting::{
    create_report, DefaultHealthCheckResultTranslator, HealthCheckResultTranslator,
    ServiceHealthTranslator,
};
