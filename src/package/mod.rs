//! Design package loading
//!
//! Reads the manifest, the shared graphic content and each artboard's scene
//! description from a [`PackageSource`], and assembles the typed model the
//! renderer consumes.

pub mod artwork;
pub mod manifest;
pub mod resources;
pub mod source;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{Error, PackageError};
use crate::model::{ArtboardDescriptor, ResourceIndex};

pub use manifest::{ArtboardEntry, Manifest, ResourceEntry};
pub use resources::{ArtboardInfo, GraphicContent};
pub use source::{open_package, DirectorySource, PackageSource, ZipSource};

use artwork::RawArtwork;

/// Everything needed to convert a package
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Package {
    pub id: Option<String>,
    pub version: Option<String>,
    /// In manifest order
    pub artboards: Vec<ArtboardDescriptor>,
    pub resources: ResourceIndex,
}

/// Read and parse a JSON file of the package
///
/// Group nesting has no depth limit, so the parser's recursion limit is
/// lifted and deep input grows the stack on demand instead.
pub(crate) fn read_json<T: DeserializeOwned>(
    source: &dyn PackageSource,
    path: &str,
) -> Result<T, PackageError> {
    let bytes = source.read(path)?;
    parse_json(&bytes).map_err(|e| PackageError::Json {
        path: path.to_string(),
        source: e,
    })
}

fn parse_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    deserializer.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}

/// Load a whole package into the document model
pub fn load_package(source: &dyn PackageSource) -> Result<Package, Error> {
    let manifest = Manifest::read(source)?;
    let content = GraphicContent::read(source)?;
    let resources = ResourceIndex {
        data_uris: manifest.data_uris(source)?,
        gradients: content.gradients,
    };

    let artboards = manifest
        .artboards
        .iter()
        .map(|entry| load_artboard(source, entry, &content.artboards))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        artboards = artboards.len(),
        gradients = resources.gradients.len(),
        "package loaded"
    );
    Ok(Package {
        id: manifest.id,
        version: manifest.version,
        artboards,
        resources,
    })
}

fn load_artboard(
    source: &dyn PackageSource,
    entry: &ArtboardEntry,
    infos: &indexmap::IndexMap<String, ArtboardInfo>,
) -> Result<ArtboardDescriptor, Error> {
    let info = infos
        .get(&entry.name)
        .ok_or_else(|| PackageError::MissingArtboardInfo(entry.name.clone()))?;

    let path = entry.artwork_path();
    let raw: RawArtwork = read_json(source, &path)?;
    if raw.children.len() > 1 {
        warn!(artboard = %entry.name, roots = raw.children.len(), "artwork has several roots, using the first");
    }
    let root = raw
        .children
        .into_iter()
        .next()
        .ok_or(PackageError::EmptyArtwork(path))?;

    let style = root.style.map(|s| s.into_style(&root.id)).transpose()?;
    let children = root
        .artboard
        .children
        .into_iter()
        .map(|node| node.into_node())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ArtboardDescriptor {
        id: root.id,
        name: info.name.clone(),
        bounds: info.bounds,
        viewport: info.viewport,
        style,
        children,
    })
}
