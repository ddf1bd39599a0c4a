//! Service identity lookup from manifests.

use std::sync::Arc;

use service_monitoring::manifest::{NOT_AVAILABLE, SERVICE_ID, SERVICE_VERSION};
use service_monitoring::{
    Manifest, ManifestSource, MonitoringConfig, ServiceManifestEntries, ServiceMetadata,
};

#[test]
fn missing_service_id_uses_fallback() {
    let entries = ServiceManifestEntries::new(Manifest::new());
    assert_eq!(entries.service_id("fallback-svc"), "fallback-svc");
    assert_eq!(entries.service_version(), NOT_AVAILABLE);
}

#[test]
fn packaged_manifest_file_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("MANIFEST.MF");
    std::fs::write(
        &path,
        "Manifest-Version: 1.0\r\nService-Id: payments\r\nService-Version: 5.2.0-SNAPSHOT\r\n\r\nName: x\r\n",
    )
    .unwrap();

    let entries = ServiceManifestEntries::new(Manifest::from_file(&path).unwrap());
    assert_eq!(entries.service_id("ignored"), "payments");
    assert_eq!(entries.service_version(), "5.2.0-SNAPSHOT");
}

#[test]
fn malformed_manifest_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("MANIFEST.MF");
    std::fs::write(&path, "Manifest-Version: 1.0\nBuild-Jdk\n").unwrap();

    let err = Manifest::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn entries_accept_shared_sources() {
    let manifest: Arc<Manifest> = Arc::new(Manifest::new().with_attribute(SERVICE_ID, "shared"));
    let first = ServiceManifestEntries::new(Arc::clone(&manifest));
    let second = ServiceManifestEntries::new(manifest);

    assert_eq!(first.service_id("x"), "shared");
    assert_eq!(second.service_id("y"), "shared");
}

struct CountingSource {
    reads: std::cell::Cell<usize>,
}

impl ManifestSource for CountingSource {
    fn exists(&self, name: &str) -> bool {
        name == SERVICE_VERSION
    }

    fn read(&self, _name: &str) -> Option<String> {
        self.reads.set(self.reads.get() + 1);
        Some(format!("v{}", self.reads.get()))
    }
}

#[test]
fn source_is_consulted_on_every_call() {
    let entries = ServiceManifestEntries::new(CountingSource {
        reads: std::cell::Cell::new(0),
    });

    assert_eq!(entries.service_version(), "v1");
    assert_eq!(entries.service_version(), "v2");
    // Absent attributes are never read.
    assert_eq!(entries.service_id("svc"), "svc");
    assert_eq!(entries.source().reads.get(), 2);
}

#[test]
fn metadata_resolves_from_manifest_and_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("MANIFEST.MF");
    std::fs::write(&path, "Service-Version: 0.9.0\n").unwrap();

    let mut config = MonitoringConfig::default();
    config.service.default_id = "catalog".to_string();
    config.service.manifest_path = Some(path);
    config.instance.instance_id = Some("catalog-1".to_string());

    let entries = ServiceManifestEntries::new(config.load_manifest().unwrap());
    let metadata = ServiceMetadata::resolve(&entries, &config);

    assert_eq!(metadata.service_name().name(), "catalog");
    assert_eq!(metadata.service_version().version(), "0.9.0");
    assert_eq!(metadata.instance_metadata().instance_id().id(), "catalog-1");
}

#[test]
fn embedded_manifest_layers_under_file_manifest() {
    let file = Manifest::parse("Service-Id: from-file\n").unwrap();
    let merged = service_monitoring::embedded_manifest!().merge(file);

    let entries = ServiceManifestEntries::new(merged);
    assert_eq!(entries.service_id("default"), "from-file");
}

#[test]
fn manifest_with_wrapped_multibyte_value_and_cr_endings_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("MANIFEST.MF");
    std::fs::write(&path, b"Service-Id: caf\xC3\r \xA9\rService-Version: 1.0\r").unwrap();

    let entries = ServiceManifestEntries::new(Manifest::from_file(&path).unwrap());
    assert_eq!(entries.service_id("ignored"), "caf\u{e9}");
    assert_eq!(entries.service_version(), "1.0");
}
