//! Access to the files of a design package

use std::collections::HashMap;
use std::fs;
use std::io::{Cursor, ErrorKind, Read};
use std::path::{Path, PathBuf};

use tracing::debug;
use zip::ZipArchive;

use crate::error::PackageError;

/// Read-only view of the files inside a package, addressed by
/// `/`-separated paths relative to the package root
pub trait PackageSource {
    fn read(&self, path: &str) -> Result<Vec<u8>, PackageError>;
}

/// An already extracted package directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PackageSource for DirectorySource {
    fn read(&self, path: &str) -> Result<Vec<u8>, PackageError> {
        let full = self.root.join(path);
        fs::read(&full).map_err(|source| match source.kind() {
            ErrorKind::NotFound => PackageError::MissingEntry(path.to_string()),
            _ => PackageError::Io { path: full, source },
        })
    }
}

/// A zipped package, held in memory
#[derive(Debug, Clone, Default)]
pub struct ZipSource {
    entries: HashMap<String, Vec<u8>>,
}

/// Largest buffer preallocated from an entry's declared size
const MAX_PREALLOC: u64 = 1 << 20;

/// Declared entry sizes come from the archive header and are untrusted
fn capacity_hint(declared: u64) -> usize {
    declared.min(MAX_PREALLOC) as usize
}

impl ZipSource {
    /// Read the archive at `path`
    pub fn open(path: &Path) -> Result<Self, PackageError> {
        let bytes = fs::read(path).map_err(|source| PackageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(bytes)
    }

    /// Read an archive from raw bytes
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self, PackageError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes.into()))?;
        let mut entries = HashMap::with_capacity(archive.len());

        for index in 0..archive.len() {
            let mut file = archive.by_index(index)?;
            if file.is_dir() {
                continue;
            }
            let name = file.name().to_string();
            let mut content = Vec::with_capacity(capacity_hint(file.size()));
            file.read_to_end(&mut content)
                .map_err(|source| PackageError::Io {
                    path: PathBuf::from(&name),
                    source,
                })?;
            entries.insert(name, content);
        }

        debug!(entries = entries.len(), "archive loaded");
        Ok(Self { entries })
    }
}

impl PackageSource for ZipSource {
    fn read(&self, path: &str) -> Result<Vec<u8>, PackageError> {
        self.entries
            .get(path)
            .cloned()
            .ok_or_else(|| PackageError::MissingEntry(path.to_string()))
    }
}

/// Open a package: a directory is read in place, anything else as a zip archive
pub fn open_package(path: &Path) -> Result<Box<dyn PackageSource>, PackageError> {
    if path.is_dir() {
        Ok(Box::new(DirectorySource::new(path)))
    } else {
        Ok(Box::new(ZipSource::open(path)?))
    }
}
