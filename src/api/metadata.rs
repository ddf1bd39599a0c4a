use serde::{Deserialize, Serialize};

use crate::api::dto::dto;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMetadataDto {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceMetadataDto {
    pub instance_id: String,
    pub host_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataDto {
    pub service: ServiceMetadataDto,
    pub instance: InstanceMetadataDto,
}

impl ServiceMetadataDto {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl InstanceMetadataDto {
    pub fn new(instance_id: impl Into<String>, host_address: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            host_address: host_address.into(),
        }
    }
}

impl MetadataDto {
    pub fn new(service: ServiceMetadataDto, instance: InstanceMetadataDto) -> Self {
        Self { service, instance }
    }
}

dto!(ServiceMetadataDto, InstanceMetadataDto, MetadataDto);
