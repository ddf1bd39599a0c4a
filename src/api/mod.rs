//! # Transfer Objects
//!
//! Plain, serializable output shapes. They hold translated values and nothing
//! else; every one of them shares the [`Dto`] string representation.

pub mod dto;
pub mod health;
pub mod metadata;
pub mod reporting;

pub use dto::Dto;
pub use health::{HealthCheckResultDto, ServiceInstanceHealthDto};
pub use metadata::{InstanceMetadataDto, MetadataDto, ServiceMetadataDto};
pub use reporting::ServiceHealthReportDto;
