use serde::{Deserialize, Serialize};

use crate::api::dto::dto;

/// Translated result of a single health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckResultDto {
    pub name: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub duration_ms: u64,
}

/// Health of one service instance: aggregate status and per-check results in
/// execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInstanceHealthDto {
    pub status: String,
    pub checks: Vec<HealthCheckResultDto>,
}

impl HealthCheckResultDto {
    pub fn new(
        name: impl Into<String>,
        status: impl Into<String>,
        message: Option<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
            message,
            duration_ms,
        }
    }
}

impl ServiceInstanceHealthDto {
    pub fn new(status: impl Into<String>, checks: Vec<HealthCheckResultDto>) -> Self {
        Self {
            status: status.into(),
            checks,
        }
    }
}

dto!(HealthCheckResultDto, ServiceInstanceHealthDto);
