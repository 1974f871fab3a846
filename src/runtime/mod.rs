//! Isolated load-context backend.
//!
//! Images are loaded into a [`LoadContext`] that binds every type reference
//! eagerly, by full name, at load time. Assignability is the context's
//! native rule: a type is assignable to itself, its whole base chain, and
//! every interface it implements, including interfaces inherited through
//! other interfaces.
//!
//! A [`Package`] owns exactly one context and unloads it when disposed or
//! dropped, whichever comes first:
//!
//! ```text
//! Package::new ─► add_image* ─► search ─► dispose()   (or drop)
//!                                              │
//!                                              ▼
//!                             context tables freed, UnloadProbe reports it,
//!                             surviving RuntimeType handles go inert
//! ```

mod context;
mod ty;

use thiserror::Error;

use crate::base::Name;
use crate::corpus::{Corpus, CorpusOptions, matches_query};
use crate::formula::Formula;
use crate::interchange::{InterchangeError, PackageArchive};
use crate::metadata::{Image, TypeDef, TypeRef};
use crate::types::Disjunctive;

use context::Role;

pub use context::{LoadContext, UnloadProbe};
pub use ty::RuntimeType;

/// Errors from loading code into a context.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image defines a type the context already has.
    #[error("image '{image}' redefines {full_name} in load context '{context}'")]
    DuplicateType {
        image: String,
        full_name: String,
        context: String,
    },

    /// The context was unloaded before the load.
    #[error("load context '{0}' is unloaded")]
    Unloaded(String),

    /// The package could not be read.
    #[error(transparent)]
    Interchange(#[from] InterchangeError),
}

/// A corpus backed by one isolated load context.
#[derive(Debug)]
pub struct Package {
    context: LoadContext,
    options: CorpusOptions,
    formulas: Vec<Formula<RuntimeType>>,
}

impl Package {
    pub fn new(name: impl Into<Name>) -> Self {
        Self::with_options(name, CorpusOptions::default())
    }

    pub fn with_options(name: impl Into<Name>, options: CorpusOptions) -> Self {
        Self {
            context: LoadContext::new(name),
            options,
            formulas: Vec::new(),
        }
    }

    /// Load every image of a package archive into a fresh context.
    pub fn from_archive(name: impl Into<Name>, bytes: &[u8]) -> Result<Self, LoadError> {
        let contents = PackageArchive.open(bytes)?;
        let mut package = Self::new(name);
        package.add_images(&contents.images)?;
        Ok(package)
    }

    pub fn name(&self) -> &str {
        self.context.name()
    }

    pub fn probe(&self) -> UnloadProbe {
        self.context.probe()
    }

    pub fn context(&self) -> &LoadContext {
        &self.context
    }

    /// Load an image and extract its members.
    pub fn add_image(&mut self, image: &Image) -> Result<(), LoadError> {
        self.add_images(std::slice::from_ref(image))
    }

    /// Load several images, then extract them in order.
    ///
    /// The images load as one batch: if any is rejected, none is loaded and
    /// no formula is added. Members whose signatures cross between the
    /// images bind to each other.
    pub fn add_images(&mut self, images: &[Image]) -> Result<(), LoadError> {
        let declared = self.context.load(images, Role::Primary)?;
        let mut extracted = Vec::new();
        for (image, handles) in images.iter().zip(declared) {
            let before = extracted.len();
            for (def, declaring) in image.types.iter().zip(handles) {
                if def.is_public() {
                    self.extract_type(def, &declaring, &mut extracted)?;
                }
            }
            tracing::debug!(
                context = %self.context.name(),
                image = %image.name,
                formulas = extracted.len() - before,
                "image loaded"
            );
        }
        self.formulas.extend(extracted);
        Ok(())
    }

    /// Load an image only so references into it bind.
    pub fn add_reference(&mut self, image: &Image) -> Result<(), LoadError> {
        self.context.load(std::slice::from_ref(image), Role::Reference)?;
        tracing::debug!(context = %self.context.name(), image = %image.name, "reference loaded");
        Ok(())
    }

    /// Unload the context now.
    pub fn dispose(mut self) {
        self.context.unload();
    }

    /// The handle for a type the context has already bound.
    fn bound(&self, reference: &TypeRef) -> Result<RuntimeType, LoadError> {
        self.context
            .type_named(&reference.full_name())
            .ok_or_else(|| LoadError::Unloaded(self.context.name().to_string()))
    }

    fn bound_all<'a>(
        &self,
        refs: impl IntoIterator<Item = &'a TypeRef>,
    ) -> Result<Vec<RuntimeType>, LoadError> {
        refs.into_iter().map(|r| self.bound(r)).collect()
    }

    /// Same member order as the static backend: fields, methods and
    /// constructors as declared, then properties.
    fn extract_type(
        &self,
        def: &TypeDef,
        declaring: &RuntimeType,
        out: &mut Vec<Formula<RuntimeType>>,
    ) -> Result<(), LoadError> {
        for field in def.fields.iter().filter(|f| f.visibility.is_public()) {
            let field_type = self.bound(&field.field_type)?;
            let name = field.name.as_str();
            out.push(if field.is_static {
                Formula::static_field(declaring.clone(), name, field_type)
            } else {
                Formula::field(declaring.clone(), name, field_type)
            });
        }

        let callable = def.methods.iter().filter(|m| {
            m.visibility.is_public() && !m.is_type_initializer() && !def.is_accessor(&m.name)
        });
        for method in callable {
            let parameters = self.bound_all(method.parameters.iter().map(|p| &p.param_type))?;
            let name = method.name.as_str();
            out.push(if method.is_constructor() {
                Formula::constructor(declaring.clone(), parameters)
            } else if method.is_static {
                Formula::static_method(declaring.clone(), name, parameters, self.bound(&method.return_type)?)
            } else {
                Formula::method(declaring.clone(), name, parameters, self.bound(&method.return_type)?)
            });
        }

        for property in &def.properties {
            let Some(getter) = property.getter.as_deref().and_then(|g| def.method(g)) else {
                continue;
            };
            if !getter.visibility.is_public() {
                continue;
            }
            let property_type = self.bound(&property.property_type)?;
            let name = property.name.as_str();
            out.push(if property.is_indexer() {
                let index = self.bound_all(property.parameters.iter().map(|p| &p.param_type))?;
                Formula::index_property(declaring.clone(), name, index, property_type)
            } else if getter.is_static {
                Formula::static_property(declaring.clone(), name, property_type)
            } else {
                Formula::property(declaring.clone(), name, property_type)
            });
        }
        Ok(())
    }
}

impl Corpus for Package {
    type Type = RuntimeType;

    fn formulas(&self) -> &[Formula<RuntimeType>] {
        &self.formulas
    }

    fn type_from_query(&self, text: &str) -> Disjunctive<RuntimeType> {
        let include_references = self.options.include_references_in_queries;
        let candidates = self.context.defined_types(|slot, definition| {
            definition.public
                && (include_references || definition.role == Role::Primary)
                && matches_query(&slot.namespace, &slot.name, text)
        });
        Disjunctive::new(text, candidates)
    }
}

/// Load a package archive, or log why not and return `None`.
///
/// A failed acquisition means "no corpus", never a partial one.
pub fn load_corpus_or_none(name: &str, bytes: &[u8]) -> Option<Package> {
    match Package::from_archive(name, bytes) {
        Ok(package) => Some(package),
        Err(error) => {
            tracing::warn!(package = name, %error, "package could not be loaded");
            None
        }
    }
}
