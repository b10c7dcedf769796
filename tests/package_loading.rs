//! Loading packages from extracted directories and archives on disk

use std::fs;
use std::path::{Path, PathBuf};

use xd2svg::model::{NodeKind, Paint};
use xd2svg::package::DirectorySource;
use xd2svg::{convert_path, load_package, ConvertConfig, Error, Output, PackageError};

const MANIFEST: &str = r#"{
    "children": [
        {"name": "artwork", "children": [
            {"id": "a", "name": "Only", "path": "artboard-a", "uxdesign#bounds": {}}
        ]}
    ]
}"#;

const GRAPHIC_CONTENT: &str = r#"{
    "artboards": {"artboard-a": {"name": "Only", "width": 10, "height": 20}}
}"#;

const ARTWORK: &str = r#"{
    "children": [{
        "id": "only-root",
        "artboard": {"children": [
            {"id": "legacy", "type": "shape",
             "shape": {"type": "circle", "cx": 5, "cy": 5, "r": 5},
             "style": {"fill": {"color": {"value": {"r": 0, "g": 0, "b": 255}, "alpha": 0.5}}}}
        ]}
    }]
}"#;

/// A scratch package directory removed on drop
struct ScratchPackage {
    root: PathBuf,
}

impl ScratchPackage {
    fn new(name: &str, files: &[(&str, &str)]) -> Self {
        let root = std::env::temp_dir().join(format!("xd2svg-{}-{}", name, std::process::id()));
        for (path, content) in files {
            let full = root.join(path);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(full, content).unwrap();
        }
        Self { root }
    }

    fn path(&self) -> &Path {
        &self.root
    }
}

impl Drop for ScratchPackage {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

fn complete_files() -> Vec<(&'static str, &'static str)> {
    vec![
        ("manifest", MANIFEST),
        ("resources/graphics/graphicContent.agc", GRAPHIC_CONTENT),
        ("artwork/artboard-a/graphics/graphicContent.agc", ARTWORK),
    ]
}

#[test]
fn test_load_directory_package() {
    let scratch = ScratchPackage::new("load", &complete_files());
    let package = load_package(&DirectorySource::new(scratch.path())).unwrap();

    assert_eq!(package.artboards.len(), 1);
    let artboard = &package.artboards[0];
    assert_eq!(artboard.id, "only-root");
    assert_eq!(artboard.name, "Only");
    assert_eq!(artboard.bounds.width, 10.0);
    assert!(package.resources.gradients.is_empty());

    let node = &artboard.children[0];
    assert!(matches!(node.kind, NodeKind::Shape(_)));
    let fill = node.style.as_ref().unwrap().fill.as_ref().unwrap();
    assert!(matches!(fill.paint, Paint::LegacyColor(_)));
}

#[test]
fn test_convert_directory_path() {
    let scratch = ScratchPackage::new("convert", &complete_files());
    let output = convert_path(scratch.path(), &ConvertConfig::new()).unwrap();
    let Output::Multiple { defs, documents } = output else {
        panic!("expected multiple output");
    };

    assert!(defs.ends_with("/>"));
    assert_eq!(
        documents["Only"],
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" id="only-root" viewBox="0 0 10 20" enable-background="new 0 0 10 20">"#,
            r#"<title>Only</title>"#,
            r#"<rect width="10" height="20"/>"#,
            r#"<circle cx="5" cy="5" r="5" fill="rgba(0,0,255,0.5)"/>"#,
            r#"</svg>"#
        )
    );
}

#[test]
fn test_missing_artwork_file() {
    let scratch = ScratchPackage::new("missing", &complete_files()[..2]);
    let err = load_package(&DirectorySource::new(scratch.path())).unwrap_err();
    assert!(matches!(
        err,
        Error::Package(PackageError::MissingEntry(ref p))
            if p == "artwork/artboard-a/graphics/graphicContent.agc"
    ));
}

#[test]
fn test_missing_artboard_info() {
    let mut files = complete_files();
    files[1] = ("resources/graphics/graphicContent.agc", "{}");
    let scratch = ScratchPackage::new("info", &files);
    let err = load_package(&DirectorySource::new(scratch.path())).unwrap_err();
    assert!(matches!(
        err,
        Error::Package(PackageError::MissingArtboardInfo(ref name)) if name == "Only"
    ));
}

#[test]
fn test_empty_artwork() {
    let mut files = complete_files();
    files[2] = (
        "artwork/artboard-a/graphics/graphicContent.agc",
        r#"{"children": []}"#,
    );
    let scratch = ScratchPackage::new("empty", &files);
    let err = load_package(&DirectorySource::new(scratch.path())).unwrap_err();
    assert!(matches!(
        err,
        Error::Package(PackageError::EmptyArtwork(_))
    ));
}

#[test]
fn test_nonexistent_input_path() {
    let err = convert_path(Path::new("/nonexistent/design.xd"), &ConvertConfig::new()).unwrap_err();
    assert!(matches!(err, Error::Package(PackageError::Io { .. })));
}
