//! Images, documentation and package archives on disk.

#![cfg(feature = "interchange")]

#[path = "helpers/mod.rs"]
mod helpers;

use std::io::Write;

use helpers::formula_assertions::ids;
use helpers::image_fixtures::{ACME_DOCS, ACME_IDS, acme_library, corlib};
use tempfile::TempDir;
use typesearch::docs::annotate;
use typesearch::inspect::MetadataCorpus;
use typesearch::interchange::{
    ImageFormat, InterchangeError, JsonImage, PackageArchive, PackageContents, XmlDocs, YamlImage,
    read_image,
};
use typesearch::runtime::{Package, load_corpus_or_none};
use typesearch::{Corpus, CorpusOptions};

fn acme_package() -> Vec<u8> {
    let contents = PackageContents {
        images: vec![corlib(), acme_library()],
        documentation: XmlDocs.read(ACME_DOCS.as_bytes()).unwrap(),
    };
    PackageArchive.write(&contents).unwrap()
}

#[test]
fn test_documentation_file_skips_malformed_member() {
    let docs = XmlDocs.read(ACME_DOCS.as_bytes()).unwrap();
    assert_eq!(docs.len(), 4);

    let draw = docs.get("M:Acme.Canvas.Draw(Acme.Shape,System.Int32)").unwrap();
    assert_eq!(draw.summary.as_deref(), Some("Draws a Acme.Shape on a layer."));
    assert_eq!(draw.param("layer"), Some("Where, see layer."));
    assert_eq!(draw.returns.as_deref(), Some("True when drawn."));
    assert_eq!(
        docs.get("P:Acme.Shape.Name").and_then(|e| e.value.as_deref()),
        Some("Never empty.")
    );
}

#[test]
fn test_image_files_on_disk_round_trip() {
    let dir = TempDir::new().unwrap();
    let image = acme_library();

    let formats: [&dyn ImageFormat; 2] = [&JsonImage, &YamlImage];
    for (format, file) in formats.iter().zip(["acme.json", "acme.yml"]) {
        let path = dir.path().join(file);
        let mut handle = std::fs::File::create(&path).unwrap();
        handle.write_all(&format.write(&image).unwrap()).unwrap();
        drop(handle);

        assert_eq!(read_image(&path).unwrap(), image, "{file}");
    }
}

#[test]
fn test_read_image_rejects_non_object_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "[]").unwrap();
    assert!(matches!(read_image(&path), Err(InterchangeError::Json(_))));
}

#[test]
fn test_package_archive_builds_both_corpora() {
    let bytes = acme_package();

    let corpus = MetadataCorpus::from_archive(&bytes, CorpusOptions::default()).unwrap();
    let extracted = ids(corpus.formulas());
    assert_eq!(extracted[..2], ["M:System.Object.ToString", "M:System.Object.#ctor"]);
    assert_eq!(extracted[2..], *ACME_IDS);

    let package = Package::from_archive("acme", &bytes).unwrap();
    assert_eq!(package.formulas().len(), ACME_IDS.len() + 2);
}

#[test]
fn test_archived_documentation_annotates_formulas() {
    let bytes = acme_package();
    let contents = PackageArchive.open(&bytes).unwrap();
    let mut corpus = MetadataCorpus::new();
    corpus.add_images(&contents.images);

    let annotated = annotate(corpus.formulas(), &contents.documentation);
    let documented: Vec<_> = annotated
        .documented()
        .map(|a| a.formula.documentation_id())
        .collect();
    assert_eq!(
        documented,
        [
            "P:Acme.Shape.Name",
            "M:Acme.Circle.#ctor(System.Double)",
            "M:Acme.Canvas.Draw(Acme.Shape,System.Int32)",
        ]
    );
}

#[test]
fn test_archive_file_on_disk_loads_as_package() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Acme.zip");
    std::fs::write(&path, acme_package()).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let package = load_corpus_or_none("acme", &bytes).unwrap();
    assert!(!package.formulas().is_empty());
}
