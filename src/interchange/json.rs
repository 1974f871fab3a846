//! JSON metadata images.
//!
//! ```json
//! {
//!   "name": "corlib",
//!   "types": [
//!     { "namespace": "System", "name": "String", "base": "System.Object",
//!       "methods": [ { "name": "Trim", "returns": "System.String" } ] }
//!   ]
//! }
//! ```

use super::{ImageFormat, InterchangeError};
use crate::metadata::Image;

/// JSON image handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonImage;

impl ImageFormat for JsonImage {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn read(&self, input: &[u8]) -> Result<Image, InterchangeError> {
        #[cfg(feature = "interchange")]
        {
            serde_json::from_slice(input).map_err(|e| InterchangeError::json(e.to_string()))
        }
        #[cfg(not(feature = "interchange"))]
        {
            let _ = input;
            Err(InterchangeError::feature_disabled("JSON reading"))
        }
    }

    fn write(&self, image: &Image) -> Result<Vec<u8>, InterchangeError> {
        #[cfg(feature = "interchange")]
        {
            serde_json::to_vec_pretty(image).map_err(|e| InterchangeError::json(e.to_string()))
        }
        #[cfg(not(feature = "interchange"))]
        {
            let _ = image;
            Err(InterchangeError::feature_disabled("JSON writing"))
        }
    }

    fn validate(&self, input: &[u8]) -> Result<(), InterchangeError> {
        let first = input.iter().find(|b| !b.is_ascii_whitespace());
        match first {
            Some(b'{') => Ok(()),
            _ => Err(InterchangeError::json("image must be a JSON object")),
        }
    }
}

#[cfg(all(test, feature = "interchange"))]
mod tests {
    use super::*;
    use crate::metadata::{MethodDef, TypeDef, TypeRef};

    #[test]
    fn test_read_minimal_image_with_defaults() {
        let json = br#"{
            "name": "corlib",
            "types": [
                { "namespace": "System", "name": "String", "base": "System.Object",
                  "methods": [ { "name": "Trim", "returns": "System.String" } ] }
            ]
        }"#;
        let image = JsonImage.read(json).unwrap();
        let string = &image.types[0];
        assert_eq!(string.base, Some(TypeRef::new("System", "Object")));
        assert!(string.is_public());
        assert_eq!(string.methods[0], MethodDef::new("Trim", TypeRef::new("System", "String")));
    }

    #[test]
    fn test_write_then_read_preserves_image() {
        let image = Image::new("lib").with_type(
            TypeDef::new("N", "Foo").with_method(
                MethodDef::constructor().with_parameter("x", TypeRef::new("System", "Int32")),
            ),
        );
        let bytes = JsonImage.write(&image).unwrap();
        assert_eq!(JsonImage.read(&bytes).unwrap(), image);
    }

    #[test]
    fn test_validate_rejects_non_object() {
        assert!(JsonImage.validate(b"  {}").is_ok());
        assert!(JsonImage.validate(b"[1]").is_err());
    }
}
