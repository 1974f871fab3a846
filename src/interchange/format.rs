//! Common trait for metadata image formats.

use super::InterchangeError;
use crate::metadata::Image;

/// A serialization of a single metadata [`Image`].
pub trait ImageFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format.
    fn extensions(&self) -> &'static [&'static str];

    /// Read an image from bytes.
    fn read(&self, input: &[u8]) -> Result<Image, InterchangeError>;

    /// Write an image to bytes.
    fn write(&self, image: &Image) -> Result<Vec<u8>, InterchangeError>;

    /// Quick well-formedness check that doesn't fully parse the content.
    fn validate(&self, input: &[u8]) -> Result<(), InterchangeError> {
        let _ = input;
        Ok(())
    }

    /// True when `path` carries one of this format's extensions.
    fn handles(&self, path: &str) -> bool {
        path.rsplit_once('.').is_some_and(|(_, ext)| {
            self.extensions()
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
    }
}
