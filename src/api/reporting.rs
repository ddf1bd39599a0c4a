use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::dto::dto;
use crate::api::health::ServiceInstanceHealthDto;
use crate::api::metadata::MetadataDto;

/// Health report for one service instance at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealthReportDto {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub metadata: MetadataDto,
    pub health: ServiceInstanceHealthDto,
}

impl ServiceHealthReportDto {
    pub fn new(
        id: impl Into<String>,
        timestamp: DateTime<Utc>,
        metadata: MetadataDto,
        health: ServiceInstanceHealthDto,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp,
            metadata,
            health,
        }
    }
}

dto!(ServiceHealthReportDto);
