//! Health snapshots produced by the health-check engine.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Aggregate health of a service instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    pub fn name(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "HEALTHY",
            HealthStatus::Degraded => "DEGRADED",
            HealthStatus::Unhealthy => "UNHEALTHY",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    Healthy,
    Unhealthy,
}

impl CheckStatus {
    pub fn name(&self) -> &'static str {
        match self {
            CheckStatus::Healthy => "HEALTHY",
            CheckStatus::Unhealthy => "UNHEALTHY",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckResult {
    name: String,
    status: CheckStatus,
    message: Option<String>,
    duration_ms: u64,
}

impl HealthCheckResult {
    pub fn new(
        name: impl Into<String>,
        status: CheckStatus,
        message: Option<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            name: name.into(),
            status,
            message,
            duration_ms,
        }
    }

    pub fn healthy(name: impl Into<String>, duration_ms: u64) -> Self {
        Self::new(name, CheckStatus::Healthy, None, duration_ms)
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>, duration_ms: u64) -> Self {
        Self::new(
            name,
            CheckStatus::Unhealthy,
            Some(message.into()),
            duration_ms,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> CheckStatus {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn is_healthy(&self) -> bool {
        self.status == CheckStatus::Healthy
    }
}

/// Aggregate status plus the ordered results of every executed check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    id: Uuid,
    timestamp: NaiveDateTime,
    status: HealthStatus,
    executed_checks: Vec<HealthCheckResult>,
}

impl ServiceHealth {
    pub fn new(
        id: Uuid,
        timestamp: NaiveDateTime,
        status: HealthStatus,
        executed_checks: Vec<HealthCheckResult>,
    ) -> Self {
        Self {
            id,
            timestamp,
            status,
            executed_checks,
        }
    }

    /// Snapshot `checks` now under a fresh id.
    ///
    /// Healthy when every check passed, unhealthy when every check failed,
    /// degraded in between. No checks counts as healthy.
    pub fn evaluate(executed_checks: Vec<HealthCheckResult>) -> Self {
        let passed = executed_checks.iter().filter(|c| c.is_healthy()).count();
        let status = if passed == executed_checks.len() {
            HealthStatus::Healthy
        } else if passed == 0 {
            HealthStatus::Unhealthy
        } else {
            HealthStatus::Degraded
        };

        Self::new(
            Uuid::new_v4(),
            Utc::now().naive_utc(),
            status,
            executed_checks,
        )
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn status(&self) -> HealthStatus {
        self.status
    }

    pub fn executed_checks(&self) -> &[HealthCheckResult] {
        &self.executed_checks
    }
}
