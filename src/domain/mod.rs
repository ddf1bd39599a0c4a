//! # Monitoring Domain
//!
//! Internal values the report translator consumes: who the service is
//! ([`ServiceMetadata`]) and how it is doing ([`ServiceHealth`]).

pub mod health;
pub mod metadata;

pub use health::{CheckStatus, HealthCheckResult, HealthStatus, ServiceHealth};
pub use metadata::{InstanceId, InstanceMetadata, ServiceMetadata, ServiceName, ServiceVersion};
