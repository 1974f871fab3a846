//! YAML metadata images.
//!
//! Same structure as the JSON form, in YAML syntax:
//!
//! ```yaml
//! name: corlib
//! types:
//!   - namespace: System
//!     name: String
//!     base: System.Object
//! ```

use super::{ImageFormat, InterchangeError};
use crate::metadata::Image;

/// YAML image handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlImage;

impl ImageFormat for YamlImage {
    fn name(&self) -> &'static str {
        "YAML"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["yaml", "yml"]
    }

    fn read(&self, input: &[u8]) -> Result<Image, InterchangeError> {
        #[cfg(feature = "interchange")]
        {
            serde_yaml::from_slice(input).map_err(|e| InterchangeError::yaml(e.to_string()))
        }
        #[cfg(not(feature = "interchange"))]
        {
            let _ = input;
            Err(InterchangeError::feature_disabled("YAML reading"))
        }
    }

    fn write(&self, image: &Image) -> Result<Vec<u8>, InterchangeError> {
        #[cfg(feature = "interchange")]
        {
            serde_yaml::to_string(image)
                .map(String::into_bytes)
                .map_err(|e| InterchangeError::yaml(e.to_string()))
        }
        #[cfg(not(feature = "interchange"))]
        {
            let _ = image;
            Err(InterchangeError::feature_disabled("YAML writing"))
        }
    }
}

#[cfg(all(test, feature = "interchange"))]
mod tests {
    use super::*;
    use crate::metadata::{FieldDef, TypeKind, TypeRef};

    #[test]
    fn test_read_yaml_image() {
        let yaml = b"name: shapes
types:
  - namespace: N
    name: IShape
    kind: interface
  - namespace: N
    name: Circle
    interfaces: [N.IShape]
    fields:
      - name: Radius
        type: System.Double
";
        let image = YamlImage.read(yaml).unwrap();
        assert_eq!(image.types[0].kind, TypeKind::Interface);
        assert_eq!(image.types[1].interfaces, [TypeRef::new("N", "IShape")]);
        assert_eq!(
            image.types[1].fields[0],
            FieldDef::new("Radius", TypeRef::new("System", "Double"))
        );
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let error = YamlImage.read(b"name: [unclosed").unwrap_err();
        assert!(matches!(error, InterchangeError::Yaml(_)));
    }
}
