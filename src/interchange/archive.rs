//! Package archives.
//!
//! A package is a ZIP archive bundling metadata images with the XML
//! documentation generated for them:
//!
//! ```text
//! package.zip
//! ├── lib/
//! │   ├── Acme.Core.json       # one image per file (JSON or YAML)
//! │   └── net8.0/Acme.Io.yaml
//! └── docs/
//!     └── Acme.Core.xml        # XML documentation, merged
//! ```
//!
//! Entries outside `lib/` and `docs/`, and entries with unknown extensions,
//! are ignored. Images are returned in archive order.

use super::{ImageFormat, InterchangeError, JsonImage, XmlDocs, YamlImage};
use crate::docs::Documentation;
use crate::metadata::Image;

/// Standard paths within a package archive.
pub mod paths {
    /// Image directory.
    pub const LIB_DIR: &str = "lib/";
    /// Documentation directory.
    pub const DOCS_DIR: &str = "docs/";
}

/// Everything read from one package.
#[derive(Debug, Clone, Default)]
pub struct PackageContents {
    pub images: Vec<Image>,
    pub documentation: Documentation,
}

/// Package archive handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageArchive;

impl PackageArchive {
    pub fn extensions(&self) -> &'static [&'static str] {
        &["zip", "nupkg"]
    }

    /// Read every image and documentation file in the archive.
    pub fn open(&self, input: &[u8]) -> Result<PackageContents, InterchangeError> {
        self.validate(input)?;
        #[cfg(feature = "interchange")]
        {
            reader::read(input)
        }
        #[cfg(not(feature = "interchange"))]
        {
            Err(InterchangeError::feature_disabled("Package reading"))
        }
    }

    /// Write images as JSON and documentation as one XML file.
    pub fn write(&self, contents: &PackageContents) -> Result<Vec<u8>, InterchangeError> {
        #[cfg(feature = "interchange")]
        {
            writer::write(contents)
        }
        #[cfg(not(feature = "interchange"))]
        {
            let _ = contents;
            Err(InterchangeError::feature_disabled("Package writing"))
        }
    }

    pub fn validate(&self, input: &[u8]) -> Result<(), InterchangeError> {
        // Quick check for ZIP magic number
        if input.len() < 4 {
            return Err(InterchangeError::archive("File too small"));
        }

        // ZIP files start with PK\x03\x04
        if &input[0..4] != b"PK\x03\x04" {
            return Err(InterchangeError::archive("Not a valid ZIP archive"));
        }

        Ok(())
    }
}

/// The image format for an entry path, by extension.
#[cfg_attr(not(feature = "interchange"), allow(dead_code))]
fn image_format(path: &str) -> Option<&'static dyn ImageFormat> {
    if JsonImage.handles(path) {
        Some(&JsonImage)
    } else if YamlImage.handles(path) {
        Some(&YamlImage)
    } else {
        None
    }
}

// ============================================================================
// ARCHIVE READER (requires interchange feature)
// ============================================================================

#[cfg(feature = "interchange")]
mod reader {
    use super::*;
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    enum EntryKind {
        Image(&'static dyn ImageFormat),
        Documentation,
    }

    fn classify(path: &str) -> Option<EntryKind> {
        if path.ends_with('/') {
            return None;
        }
        if path.starts_with(paths::LIB_DIR) {
            return image_format(path).map(EntryKind::Image);
        }
        if path.starts_with(paths::DOCS_DIR) && XmlDocs.handles(path) {
            return Some(EntryKind::Documentation);
        }
        None
    }

    pub fn read(input: &[u8]) -> Result<PackageContents, InterchangeError> {
        let cursor = Cursor::new(input);
        let mut archive = ZipArchive::new(cursor)
            .map_err(|e| InterchangeError::archive(format!("Failed to open archive: {e}")))?;

        let mut contents = PackageContents::default();
        for i in 0..archive.len() {
            let mut file = archive
                .by_index(i)
                .map_err(|e| InterchangeError::archive(format!("Failed to read entry {i}: {e}")))?;
            let path = file.name().to_string();
            let Some(kind) = classify(&path) else {
                tracing::trace!(path = %path, "archive entry ignored");
                continue;
            };

            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes)
                .map_err(|e| InterchangeError::archive(format!("Failed to read {path}: {e}")))?;

            match kind {
                EntryKind::Image(format) => contents.images.push(format.read(&bytes)?),
                EntryKind::Documentation => contents.documentation.merge(XmlDocs.read(&bytes)?),
            }
        }

        if contents.images.is_empty() {
            return Err(InterchangeError::invalid_package(format!(
                "no images under {}",
                paths::LIB_DIR
            )));
        }
        tracing::debug!(
            images = contents.images.len(),
            documented = contents.documentation.len(),
            "package archive read"
        );
        Ok(contents)
    }
}

// ============================================================================
// ARCHIVE WRITER (requires interchange feature)
// ============================================================================

#[cfg(feature = "interchange")]
mod writer {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    fn add_file(
        zip: &mut ZipWriter<&mut Cursor<Vec<u8>>>,
        path: &str,
        bytes: &[u8],
        options: SimpleFileOptions,
    ) -> Result<(), InterchangeError> {
        zip.start_file(path, options)
            .map_err(|e| InterchangeError::archive(format!("Failed to create {path}: {e}")))?;
        zip.write_all(bytes)
            .map_err(|e| InterchangeError::archive(format!("Failed to write {path}: {e}")))
    }

    pub fn write(contents: &PackageContents) -> Result<Vec<u8>, InterchangeError> {
        let mut buffer = Cursor::new(Vec::new());
        let mut zip = ZipWriter::new(&mut buffer);

        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for (i, image) in contents.images.iter().enumerate() {
            let path = format!("{}{:03}-{}.json", paths::LIB_DIR, i, image.name);
            add_file(&mut zip, &path, &JsonImage.write(image)?, options)?;
        }

        if !contents.documentation.is_empty() {
            let path = format!("{}documentation.xml", paths::DOCS_DIR);
            add_file(&mut zip, &path, &XmlDocs.write(&contents.documentation)?, options)?;
        }

        zip.finish()
            .map_err(|e| InterchangeError::archive(format!("Failed to finalize archive: {e}")))?;

        Ok(buffer.into_inner())
    }
}
