//! # Health Report Translation
//!
//! Combines a service's static identity with a freshly computed health
//! snapshot into a [`ServiceHealthReportDto`].
//!
//! Translation is pure and total: inputs are borrowed and left untouched, and
//! every call produces one fully populated report. Check results keep the
//! order in which they were executed; each one goes through the injected
//! [`HealthCheckResultTranslator`] with no filtering or deduplication.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use service_monitoring::domain::{
//!     HealthCheckResult, HealthStatus, InstanceMetadata, ServiceHealth, ServiceMetadata,
//! };
//! use service_monitoring::reporting::create_report;
//! use uuid::Uuid;
//!
//! let metadata = ServiceMetadata::new(
//!     "billing",
//!     "1.4.0",
//!     InstanceMetadata::new("node-1", "10.0.0.1"),
//! );
//! let health = ServiceHealth::new(
//!     Uuid::new_v4(),
//!     NaiveDate::from_ymd_opt(2024, 3, 1)
//!         .unwrap()
//!         .and_hms_opt(12, 0, 0)
//!         .unwrap(),
//!     HealthStatus::Healthy,
//!     vec![HealthCheckResult::healthy("database", 3)],
//! );
//!
//! let report = create_report(&metadata, &health);
//! assert_eq!(report.health.status, "HEALTHY");
//! assert_eq!(report.metadata.service.name, "billing");
//! ```

mod check_result;

pub use check_result::{DefaultHealthCheckResultTranslator, HealthCheckResultTranslator};

use chrono::{TimeZone, Utc};
use tracing::debug;

use crate::api::{
    HealthCheckResultDto, InstanceMetadataDto, MetadataDto, ServiceHealthReportDto,
    ServiceInstanceHealthDto, ServiceMetadataDto,
};
use crate::domain::{HealthCheckResult, ServiceHealth, ServiceMetadata};

/// Builds health reports using an injected check-result translator.
#[derive(Debug, Clone, Default)]
pub struct ServiceHealthTranslator<T = DefaultHealthCheckResultTranslator> {
    check_translator: T,
}

impl ServiceHealthTranslator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: HealthCheckResultTranslator> ServiceHealthTranslator<T> {
    pub fn with_check_translator(check_translator: T) -> Self {
        Self { check_translator }
    }

    pub fn create_report(
        &self,
        service_metadata: &ServiceMetadata,
        service_health: &ServiceHealth,
    ) -> ServiceHealthReportDto {
        let metadata = translate_metadata(service_metadata);
        let health = self.translate_health(service_health);

        debug!(
            report_id = %service_health.id(),
            service = %metadata.service.name,
            status = %health.status,
            checks = health.checks.len(),
            "Created service health report"
        );

        // The snapshot instant carries no zone; it is taken as UTC, not converted.
        ServiceHealthReportDto::new(
            service_health.id().to_string(),
            Utc.from_utc_datetime(&service_health.timestamp()),
            metadata,
            health,
        )
    }

    fn translate_health(&self, service_health: &ServiceHealth) -> ServiceInstanceHealthDto {
        ServiceInstanceHealthDto::new(
            service_health.status().name(),
            self.translate_checks(service_health.executed_checks()),
        )
    }

    fn translate_checks(&self, checks: &[HealthCheckResult]) -> Vec<HealthCheckResultDto> {
        checks
            .iter()
            .map(|check| self.check_translator.map_to_dto(check))
            .collect()
    }
}

fn translate_metadata(service_metadata: &ServiceMetadata) -> MetadataDto {
    let instance = service_metadata.instance_metadata();

    MetadataDto::new(
        ServiceMetadataDto::new(
            service_metadata.service_name().name(),
            service_metadata.service_version().version(),
        ),
        InstanceMetadataDto::new(instance.instance_id().id(), instance.host_address()),
    )
}

/// Report using the default check-result translator.
pub fn create_report(
    service_metadata: &ServiceMetadata,
    service_health: &ServiceHealth,
) -> ServiceHealthReportDto {
    ServiceHealthTranslator::new().create_report(service_metadata, service_health)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HealthStatus, InstanceMetadata};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn metadata() -> ServiceMetadata {
        ServiceMetadata::new(
            "billing",
            "1.4.0",
            InstanceMetadata::new("node-1", "10.0.0.1"),
        )
    }

    fn health(status: HealthStatus, checks: Vec<HealthCheckResult>) -> ServiceHealth {
        ServiceHealth::new(
            Uuid::parse_str("5f0c6a2e-1b7d-4a43-9d8e-2a9b3c1d4e5f").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(12, 30, 15)
                .unwrap(),
            status,
            checks,
        )
    }

    #[test]
    fn test_healthy_without_checks() {
        let report = create_report(&metadata(), &health(HealthStatus::Healthy, Vec::new()));
        assert_eq!(report.health, ServiceInstanceHealthDto::new("HEALTHY", Vec::new()));
    }

    #[test]
    fn test_metadata_is_copied_verbatim() {
        let report = create_report(&metadata(), &health(HealthStatus::Healthy, Vec::new()));

        assert_eq!(report.metadata.service.name, "billing");
        assert_eq!(report.metadata.service.version, "1.4.0");
        assert_eq!(report.metadata.instance.instance_id, "node-1");
        assert_eq!(report.metadata.instance.host_address, "10.0.0.1");
    }

    #[test]
    fn test_id_and_timestamp() {
        let report = create_report(&metadata(), &health(HealthStatus::Degraded, Vec::new()));

        assert_eq!(report.id, "5f0c6a2e-1b7d-4a43-9d8e-2a9b3c1d4e5f");
        assert_eq!(report.timestamp.to_rfc3339(), "2024-03-01T12:30:15+00:00");
        assert_eq!(report.health.status, "DEGRADED");
    }

    #[test]
    fn test_injected_translator_applied_in_order() {
        let translator = ServiceHealthTranslator::with_check_translator(
            |check: &HealthCheckResult| {
                HealthCheckResultDto::new(format!("t({})", check.name()), "X", None, 0)
            },
        );
        let checks = vec![
            HealthCheckResult::healthy("c1", 1),
            HealthCheckResult::unhealthy("c2", "down", 2),
            HealthCheckResult::healthy("c3", 3),
        ];

        let report = translator.create_report(&metadata(), &health(HealthStatus::Degraded, checks));
        let names: Vec<&str> = report.health.checks.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, vec!["t(c1)", "t(c2)", "t(c3)"]);
    }

    #[test]
    fn test_duplicate_checks_are_kept() {
        let checks = vec![
            HealthCheckResult::healthy("db", 1),
            HealthCheckResult::healthy("db", 1),
        ];
        let report = create_report(&metadata(), &health(HealthStatus::Healthy, checks));
        assert_eq!(report.health.checks.len(), 2);
    }
}
