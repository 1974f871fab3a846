//! Reading and writing metadata images, documentation and packages.
//!
//! Images are the static description of compiled types that both corpus
//! backends consume. They travel as JSON or YAML files, usually bundled
//! with their XML documentation inside a package archive:
//!
//! ```text
//! ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐
//! │  JSON image  │  │  YAML image  │  │   XML docs   │  │ ZIP package  │
//! └──────┬───────┘  └──────┬───────┘  └──────┬───────┘  └──────┬───────┘
//!        │                 │                 │                 │
//!        ▼                 ▼                 ▼                 ▼
//! ┌───────────────────────────────┐  ┌─────────────┐  ┌─────────────────┐
//! │       ImageFormat trait       │  │   XmlDocs   │  │ PackageArchive  │
//! │  read(&[u8]) -> Image         │  │             │  │  lib/  → images │
//! │  write(&Image) -> Vec<u8>     │  │             │  │  docs/ → docs   │
//! └───────────────┬───────────────┘  └──────┬──────┘  └────────┬────────┘
//!                 ▼                         ▼                  ▼
//!           metadata::Image        docs::Documentation   PackageContents
//! ```
//!
//! The handlers always exist; without the `interchange` feature every read
//! and write returns [`InterchangeError::Unsupported`].
//!
//! ## Usage
//!
//! ```ignore
//! use typesearch::interchange::PackageArchive;
//! use typesearch::inspect::MetadataCorpus;
//!
//! let bytes = std::fs::read("Acme.Core.zip")?;
//! let contents = PackageArchive.open(&bytes)?;
//! let mut corpus = MetadataCorpus::new();
//! corpus.add_images(&contents.images);
//! ```

mod archive;
mod error;
mod format;
mod json;
mod xmldoc;
mod yaml;

pub use archive::{PackageArchive, PackageContents, paths};
pub use error::InterchangeError;
pub use format::ImageFormat;
pub use json::JsonImage;
pub use xmldoc::XmlDocs;
pub use yaml::YamlImage;

/// Detect an image format from a file extension.
pub fn detect_format(path: &std::path::Path) -> Option<Box<dyn ImageFormat>> {
    let ext = path.extension()?.to_str()?;
    match ext.to_lowercase().as_str() {
        "json" => Some(Box::new(JsonImage)),
        "yaml" | "yml" => Some(Box::new(YamlImage)),
        _ => None,
    }
}

/// Read one image file from disk, choosing the format by extension.
pub fn read_image(path: &std::path::Path) -> Result<crate::metadata::Image, InterchangeError> {
    let format = detect_format(path).ok_or_else(|| {
        InterchangeError::Unsupported(format!("no image format for {}", path.display()))
    })?;
    let bytes = std::fs::read(path)?;
    format.validate(&bytes)?;
    format.read(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_detect_format_by_extension() {
        assert_eq!(detect_format(Path::new("a/corlib.json")).map(|f| f.name()), Some("JSON"));
        assert_eq!(detect_format(Path::new("corlib.YML")).map(|f| f.name()), Some("YAML"));
        assert!(detect_format(Path::new("corlib.dll")).is_none());
        assert!(detect_format(Path::new("corlib")).is_none());
    }

    #[test]
    fn test_read_image_unknown_extension_is_unsupported() {
        let error = read_image(Path::new("corlib.dll")).unwrap_err();
        assert!(matches!(error, InterchangeError::Unsupported(_)));
    }
}
