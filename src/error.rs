//! Error types for conversion and package loading

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// What an unresolved reference pointed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Gradient,
    Pattern,
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceKind::Gradient => write!(f, "gradient"),
            ReferenceKind::Pattern => write!(f, "pattern resource"),
        }
    }
}

/// Errors raised while turning an artboard into markup
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// A gradient or pattern reference is missing from the resource index
    #[error("unresolved {kind} reference '{id}' on node '{node}'")]
    UnresolvedReference {
        kind: ReferenceKind,
        id: String,
        node: String,
    },

    /// Shape kind other than path, rect or circle
    #[error("unknown shape kind '{kind}' on node '{node}'")]
    UnknownShapeKind { kind: String, node: String },

    /// Scene node kind other than shape, text or group
    #[error("unknown node kind '{kind}' on node '{node}'")]
    UnknownNodeKind { kind: String, node: String },

    /// Line part range outside of the raw text
    #[error("invalid text range {from}..{to} on node '{node}' (text length {len})")]
    InvalidRange {
        node: String,
        from: usize,
        to: usize,
        len: usize,
    },

    /// Two different pattern definitions registered under one id
    #[error("conflicting pattern definitions for id '{id}'")]
    DuplicatePatternId { id: String },
}

/// Errors raised while reading a design package
#[derive(Error, Debug)]
pub enum PackageError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("invalid JSON in '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("package entry not found: {0}")]
    MissingEntry(String),

    #[error("no artboard information for '{0}'")]
    MissingArtboardInfo(String),

    #[error("artwork '{0}' has no artboard root")]
    EmptyArtwork(String),

    /// A scene node is missing data its kind requires
    #[error("malformed node '{node}': {message}")]
    MalformedNode { node: String, message: String },
}

/// Any failure of the load-and-convert pipeline
#[derive(Error, Debug)]
pub enum Error {
    #[error("package error: {0}")]
    Package(#[from] PackageError),

    #[error("conversion error: {0}")]
    Convert(#[from] ConvertError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
