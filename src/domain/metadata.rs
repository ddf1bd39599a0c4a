//! Static identity of a running service instance.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::MonitoringConfig;
use crate::manifest::{ManifestSource, ServiceManifestEntries};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceName(String);

impl ServiceName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceVersion(String);

impl ServiceVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn version(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(String);

impl InstanceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh random (v4) instance id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

macro_rules! string_newtype_from {
    ($($ty:ident),+) => {
        $(
            impl From<&str> for $ty {
                fn from(value: &str) -> Self {
                    Self(value.to_string())
                }
            }

            impl From<String> for $ty {
                fn from(value: String) -> Self {
                    Self(value)
                }
            }
        )+
    };
}

string_newtype_from!(ServiceName, ServiceVersion, InstanceId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceMetadata {
    instance_id: InstanceId,
    host_address: String,
}

impl InstanceMetadata {
    pub fn new(instance_id: impl Into<InstanceId>, host_address: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            host_address: host_address.into(),
        }
    }

    pub fn instance_id(&self) -> &InstanceId {
        &self.instance_id
    }

    pub fn host_address(&self) -> &str {
        &self.host_address
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMetadata {
    service_name: ServiceName,
    service_version: ServiceVersion,
    instance_metadata: InstanceMetadata,
}

impl ServiceMetadata {
    pub fn new(
        service_name: impl Into<ServiceName>,
        service_version: impl Into<ServiceVersion>,
        instance_metadata: InstanceMetadata,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: service_version.into(),
            instance_metadata,
        }
    }

    /// Resolve identity from manifest entries, with configured defaults.
    ///
    /// The instance id is generated when none is configured.
    pub fn resolve<S: ManifestSource>(
        entries: &ServiceManifestEntries<S>,
        config: &MonitoringConfig,
    ) -> Self {
        let service_name = entries.service_id(&config.service.default_id);
        let service_version = entries.service_version();
        let instance_id = config
            .instance
            .instance_id
            .clone()
            .map(InstanceId::new)
            .unwrap_or_else(InstanceId::generate);

        debug!(
            service_name = %service_name,
            service_version = %service_version,
            instance_id = instance_id.id(),
            "Resolved service metadata"
        );

        Self::new(
            service_name,
            service_version,
            InstanceMetadata::new(instance_id, config.instance.host_address.clone()),
        )
    }

    pub fn service_name(&self) -> &ServiceName {
        &self.service_name
    }

    pub fn service_version(&self) -> &ServiceVersion {
        &self.service_version
    }

    pub fn instance_metadata(&self) -> &InstanceMetadata {
        &self.instance_metadata
    }
}
