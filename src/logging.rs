//! # Structured Logging
//!
//! Environment-aware `tracing` setup for services embedding the monitoring
//! core, plus a helper for logging produced reports.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api::ServiceHealthReportDto;
use crate::config::LoggingConfig;

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Install the global subscriber once. `RUST_LOG` takes precedence over the
/// environment-derived level.
pub fn init_structured_logging(config: &LoggingConfig) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(log_level(&config.environment)));

        let (plain, json) = if config.json {
            (None, Some(fmt::layer().with_target(true).json()))
        } else {
            (Some(fmt::layer().with_target(true)), None)
        };

        // Another subscriber may already own the global slot (e.g. the host
        // service installed its own); keep using it.
        if tracing_subscriber::registry()
            .with(filter)
            .with(plain)
            .with(json)
            .try_init()
            .is_err()
        {
            tracing::debug!("Global tracing subscriber already initialized");
        }

        tracing::info!(
            environment = %config.environment,
            json = config.json,
            "Structured logging initialized"
        );
    });
}

fn log_level(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        _ => "debug",
    }
}

/// Emit a one-line summary of a report, with the full report at trace level.
pub fn log_report(report: &ServiceHealthReportDto) {
    tracing::info!(
        report_id = %report.id,
        service = %report.metadata.service.name,
        version = %report.metadata.service.version,
        instance_id = %report.metadata.instance.instance_id,
        status = %report.health.status,
        checks = report.health.checks.len(),
        "SERVICE_HEALTH_REPORT"
    );
    tracing::trace!(report = %report, "Service health report detail");
}
