//! Static metadata backend.
//!
//! Reads [`Image`]s without executing or binding anything up front. Each
//! corpus owns one resolution [`Scope`](scope::Scope); type handles point into
//! it by full name and bind lazily, so images may be added in any order.
//!
//! ```text
//! add_image(img) ──► scope.define(types) ──► extract (rayon, read lock) ──► formulas
//! add_reference(img) ──► scope.define(types)            (no formulas)
//!
//! InspectType::is_assignable_to(target):
//!   for ancestor in self, base, base.base, ...   (stop at unresolved/cycle)
//!       ancestor.name == target.name
//!       || any declared interface name == target.name   (Direct)
//!       || ... or any inherited interface name           (Transitive)
//! ```
//!
//! The default [`InterfaceWalk::Direct`] only looks at interfaces declared
//! on each ancestor. An interface inherited through another interface is not
//! seen, which is the historical behavior of this backend.

mod extract;
mod scope;
mod ty;

use std::sync::Arc;

use rayon::prelude::*;

use crate::base::Name;
use crate::corpus::{Corpus, CorpusOptions, InterfaceWalk, matches_query};
use crate::formula::Formula;
use crate::interchange::{InterchangeError, PackageArchive};
use crate::metadata::Image;
use crate::types::Disjunctive;

use scope::{Origin, Scope, TypeNode};

pub use ty::InspectType;

/// A corpus built from static metadata images.
#[derive(Debug)]
pub struct MetadataCorpus {
    scope: Arc<Scope>,
    options: CorpusOptions,
    formulas: Vec<Formula<InspectType>>,
    images: Vec<Name>,
}

impl Default for MetadataCorpus {
    fn default() -> Self {
        Self::with_options(CorpusOptions::default())
    }
}

impl MetadataCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CorpusOptions) -> Self {
        Self {
            scope: Arc::new(Scope::new(options.interface_walk)),
            options,
            formulas: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Build a corpus from every image in a package archive.
    pub fn from_archive(bytes: &[u8], options: CorpusOptions) -> Result<Self, InterchangeError> {
        let contents = PackageArchive.open(bytes)?;
        let mut corpus = Self::with_options(options);
        corpus.add_images(&contents.images);
        Ok(corpus)
    }

    pub fn options(&self) -> &CorpusOptions {
        &self.options
    }

    pub fn interface_walk(&self) -> InterfaceWalk {
        self.options.interface_walk
    }

    /// Load an image and extract its members.
    pub fn add_image(&mut self, image: &Image) {
        self.add_images(std::slice::from_ref(image));
    }

    /// Load several images, then extract them in parallel.
    ///
    /// All images are defined before any is extracted, so references between
    /// them bind regardless of order. Formulas are appended in image order.
    pub fn add_images(&mut self, images: &[Image]) {
        for image in images {
            self.define(image, Origin::Primary);
        }
        let scope = &self.scope;
        let extracted: Vec<Vec<Formula<InspectType>>> = images
            .par_iter()
            .map(|image| extract::extract_image(image, scope))
            .collect();
        let before = self.formulas.len();
        self.formulas.extend(extracted.into_iter().flatten());
        tracing::debug!(
            images = images.len(),
            formulas = self.formulas.len() - before,
            "metadata images added"
        );
    }

    /// Load an image only so references into it bind.
    ///
    /// No formulas are extracted. Its public types answer queries unless
    /// [`CorpusOptions::include_references_in_queries`] is off.
    pub fn add_reference(&mut self, image: &Image) {
        self.define(image, Origin::Reference);
        tracing::debug!(image = %image.name, "metadata reference added");
    }

    fn define(&mut self, image: &Image, origin: Origin) {
        for def in &image.types {
            self.scope.define(TypeNode::from_def(def, origin));
        }
        self.images.push(Name::new(&image.name));
    }

    /// Names of every image loaded so far, primary and reference.
    pub fn images(&self) -> &[Name] {
        &self.images
    }

    /// Number of distinct type definitions in scope.
    pub fn type_count(&self) -> usize {
        self.scope.len()
    }

    /// A handle for `full_name`, bound lazily.
    pub fn type_named(&self, full_name: &str) -> InspectType {
        InspectType::reference(Name::new(full_name), self.scope.clone())
    }
}

impl Corpus for MetadataCorpus {
    type Type = InspectType;

    fn formulas(&self) -> &[Formula<InspectType>] {
        &self.formulas
    }

    fn type_from_query(&self, text: &str) -> Disjunctive<InspectType> {
        let include_references = self.options.include_references_in_queries;
        let candidates = self
            .scope
            .select(|node| {
                node.public
                    && (include_references || node.origin == Origin::Primary)
                    && matches_query(&node.namespace, &node.name, text)
            })
            .into_iter()
            .map(|node| InspectType::bound(node, self.scope.clone()))
            .collect();
        Disjunctive::new(text, candidates)
    }
}
