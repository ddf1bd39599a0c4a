//! # Service Manifest Entries
//!
//! Resolves the service identity attributes packaged with a build. Absent
//! attributes fall back to a default; absence is never an error.

mod source;

pub use source::{Manifest, ManifestSource};

use tracing::debug;

pub const SERVICE_ID: &str = "Service-Id";
pub const SERVICE_VERSION: &str = "Service-Version";
pub const NOT_AVAILABLE: &str = "N/A";

/// Service identity lookups over an injected [`ManifestSource`].
///
/// The source is consulted on every call; nothing is cached here.
#[derive(Debug, Clone)]
pub struct ServiceManifestEntries<S> {
    source: S,
}

impl<S: ManifestSource> ServiceManifestEntries<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// `Service-Id` if present, otherwise `default_id`.
    pub fn service_id(&self, default_id: &str) -> String {
        self.value(SERVICE_ID, default_id)
    }

    /// `Service-Version` if present, otherwise `"N/A"`.
    pub fn service_version(&self) -> String {
        self.value(SERVICE_VERSION, NOT_AVAILABLE)
    }

    fn value(&self, name: &str, default_value: &str) -> String {
        if self.source.exists(name) {
            if let Some(value) = self.source.read(name) {
                return value;
            }
        }

        debug!(
            attribute = name,
            fallback = default_value,
            "Manifest attribute absent, using default"
        );
        default_value.to_string()
    }
}
