//! Package manifest: artboard list and embedded resources

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use serde::Deserialize;
use tracing::debug;

use crate::error::PackageError;

use super::{read_json, PackageSource};

pub const MANIFEST_PATH: &str = "manifest";

#[derive(Debug, Deserialize)]
struct RawManifest {
    id: Option<String>,
    #[serde(rename = "uxdesign#version")]
    version: Option<serde_json::Value>,
    #[serde(default)]
    children: Vec<RawSection>,
}

#[derive(Debug, Deserialize)]
struct RawSection {
    #[serde(default)]
    name: String,
    #[serde(default)]
    children: Vec<RawArtboardEntry>,
    #[serde(default)]
    components: Vec<ResourceEntry>,
}

#[derive(Debug, Deserialize)]
struct RawArtboardEntry {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    path: String,
    #[serde(rename = "uxdesign#bounds")]
    bounds: Option<serde_json::Value>,
}

/// An artboard listed in the manifest
#[derive(Debug, Clone, PartialEq)]
pub struct ArtboardEntry {
    pub id: String,
    pub name: String,
    /// Directory of the artboard under `artwork/`
    pub path: String,
}

impl ArtboardEntry {
    /// Location of the artboard's scene description
    pub fn artwork_path(&self) -> String {
        format!("artwork/{}/graphics/graphicContent.agc", self.path)
    }
}

/// A resource file listed in the manifest
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub mime: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Manifest {
    pub id: Option<String>,
    pub version: Option<String>,
    pub artboards: Vec<ArtboardEntry>,
    pub resources: Vec<ResourceEntry>,
}

impl Manifest {
    /// Read and parse the manifest of a package
    pub fn read(source: &dyn PackageSource) -> Result<Self, PackageError> {
        let raw: RawManifest = read_json(source, MANIFEST_PATH)?;
        let mut manifest = Manifest {
            id: raw.id,
            version: raw.version.map(|v| match v {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            }),
            ..Default::default()
        };

        for section in raw.children {
            match section.name.as_str() {
                "artwork" => manifest.artboards.extend(
                    section
                        .children
                        .into_iter()
                        // Pasteboards carry no bounds
                        .filter(|entry| entry.bounds.is_some())
                        .map(|entry| ArtboardEntry {
                            id: entry.id,
                            name: entry.name,
                            path: entry.path,
                        }),
                ),
                "resources" => manifest.resources.extend(section.components),
                _ => {}
            }
        }

        debug!(
            artboards = manifest.artboards.len(),
            resources = manifest.resources.len(),
            "manifest read"
        );
        Ok(manifest)
    }

    /// Read every listed resource and encode it as a data URI, keyed by path
    pub fn data_uris(
        &self,
        source: &dyn PackageSource,
    ) -> Result<HashMap<String, String>, PackageError> {
        self.resources
            .iter()
            .map(|res| {
                let bytes = source.read(&format!("resources/{}", res.path))?;
                Ok((res.path.clone(), data_uri(&res.mime, &bytes)))
            })
            .collect()
    }
}

/// `data:<mime>;base64,<payload>`
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, BASE64_STANDARD.encode(bytes))
}
