//! Manifest attribute sources.
//!
//! A [`ManifestSource`] is anything that can answer "is this attribute present"
//! and "what is its value". [`Manifest`] is the in-memory implementation, built
//! either from `MANIFEST.MF` text or from build-time environment variables via
//! [`embedded_manifest!`](crate::embedded_manifest).

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::error::{MonitoringError, Result};

/// Read-only view over build metadata.
pub trait ManifestSource {
    fn exists(&self, name: &str) -> bool;

    fn read(&self, name: &str) -> Option<String>;
}

impl<S: ManifestSource + ?Sized> ManifestSource for &S {
    fn exists(&self, name: &str) -> bool {
        (**self).exists(name)
    }

    fn read(&self, name: &str) -> Option<String> {
        (**self).read(name)
    }
}

impl<S: ManifestSource + ?Sized> ManifestSource for Arc<S> {
    fn exists(&self, name: &str) -> bool {
        (**self).exists(name)
    }

    fn read(&self, name: &str) -> Option<String> {
        (**self).read(name)
    }
}

/// Main-section attributes of a manifest. Attribute names are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    attributes: HashMap<String, String>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Layer `other` on top of this manifest; attributes in `other` win.
    pub fn merge(mut self, other: Manifest) -> Self {
        self.attributes.extend(other.attributes);
        self
    }

    /// Parse `MANIFEST.MF` text.
    ///
    /// Lines are `Name: value`, ended by CRLF, LF or a lone CR. A line starting
    /// with a single space continues the previous value. The first blank line
    /// ends the main section; per-entry sections after it are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_bytes(text.as_bytes())
    }

    /// Parse raw manifest bytes.
    ///
    /// Continuations are joined before decoding, so a multi-byte character
    /// wrapped across lines is accepted. Values must be UTF-8 once joined.
    pub fn parse_bytes(bytes: &[u8]) -> Result<Self> {
        let mut attributes = HashMap::new();
        // (name, raw value, line the attribute started on)
        let mut current: Option<(String, Vec<u8>, usize)> = None;

        for (index, line) in split_lines(bytes).into_iter().enumerate() {
            let line_number = index + 1;

            if line.is_empty() {
                break;
            }

            if let Some(rest) = line.strip_prefix(b" ") {
                match current.as_mut() {
                    Some((_, value, _)) => value.extend_from_slice(rest),
                    None => {
                        return Err(MonitoringError::manifest_parse(
                            line_number,
                            "continuation line without a preceding attribute",
                        ))
                    }
                }
                continue;
            }

            if let Some(attribute) = current.take() {
                insert_attribute(&mut attributes, attribute)?;
            }

            let separator = line.iter().position(|b| *b == b':').ok_or_else(|| {
                MonitoringError::manifest_parse(line_number, "missing ':' separator")
            })?;

            let name = std::str::from_utf8(&line[..separator]).map_err(|_| {
                MonitoringError::manifest_parse(line_number, "attribute name is not valid UTF-8")
            })?;

            if name.is_empty() || name.contains(char::is_whitespace) {
                return Err(MonitoringError::manifest_parse(
                    line_number,
                    format!("invalid attribute name '{name}'"),
                ));
            }

            let value = &line[separator + 1..];
            let value = value.strip_prefix(b" ").unwrap_or(value);
            current = Some((name.to_string(), value.to_vec(), line_number));
        }

        if let Some(attribute) = current {
            insert_attribute(&mut attributes, attribute)?;
        }

        Ok(Self { attributes })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let manifest = Self::parse_bytes(&bytes)?;

        info!(
            path = %path.display(),
            attributes = manifest.len(),
            "Loaded manifest"
        );

        Ok(manifest)
    }
}

fn insert_attribute(
    attributes: &mut HashMap<String, String>,
    (name, value, line_number): (String, Vec<u8>, usize),
) -> Result<()> {
    let value = String::from_utf8(value).map_err(|_| {
        MonitoringError::manifest_parse(
            line_number,
            format!("value of '{name}' is not valid UTF-8"),
        )
    })?;
    attributes.insert(name, value);
    Ok(())
}

/// Split on CRLF, LF or a lone CR. A trailing terminator yields no empty line.
fn split_lines(bytes: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut index = 0;

    while index < bytes.len() {
        match bytes[index] {
            b'\n' => {
                lines.push(&bytes[start..index]);
                index += 1;
                start = index;
            }
            b'\r' => {
                lines.push(&bytes[start..index]);
                index += if bytes.get(index + 1) == Some(&b'\n') { 2 } else { 1 };
                start = index;
            }
            _ => index += 1,
        }
    }

    if start < bytes.len() {
        lines.push(&bytes[start..]);
    }

    lines
}

impl ManifestSource for Manifest {
    fn exists(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    fn read(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}

/// Build a [`Manifest`] from the calling crate's compile-time `SERVICE_ID` and
/// `SERVICE_VERSION` environment variables.
///
/// Variables unset at build time are simply absent from the manifest.
#[macro_export]
macro_rules! embedded_manifest {
    () => {{
        let mut manifest = $crate::manifest::Manifest::new();
        if let Some(id) = option_env!("SERVICE_ID") {
            manifest.insert($crate::manifest::SERVICE_ID, id);
        }
        if let Some(version) = option_env!("SERVICE_VERSION") {
            manifest.insert($crate::manifest::SERVICE_VERSION, version);
        }
        manifest
    }};
}
