//! External member documentation.
//!
//! Documentation files key their entries by the same identifier every
//! [`Formula`](crate::formula::Formula) renders (`M:N.Foo.Bar(System.Int32)`),
//! so search results can be paired with their prose by exact string match.
//! Reading the XML itself lives in [`interchange`](crate::interchange); this
//! module only holds the model and the pairing.

mod annotate;
mod identifier;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

pub use annotate::{Annotated, Annotation, annotate};
pub use identifier::{MemberIdentifier, MemberKind};

/// Documentation for one member, as plain text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocEntry {
    pub identifier: MemberIdentifier,
    pub summary: Option<String>,
    pub remarks: Option<String>,
    /// `<value>` of fields and properties.
    pub value: Option<String>,
    pub returns: Option<String>,
    /// `(name, text)` per `<param>`, in document order.
    pub params: Vec<(String, String)>,
    pub type_params: Vec<(String, String)>,
}

impl DocEntry {
    pub fn new(identifier: MemberIdentifier) -> Self {
        Self {
            identifier,
            summary: None,
            remarks: None,
            value: None,
            returns: None,
            params: Vec::new(),
            type_params: Vec::new(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(param, _)| param == name)
            .map(|(_, text)| text.as_str())
    }
}

/// All entries of one or more documentation files, by identifier.
#[derive(Clone, Debug, Default)]
pub struct Documentation {
    entries: IndexMap<String, DocEntry, FxBuildHasher>,
}

impl Documentation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. An identifier already present keeps its first entry.
    pub fn insert(&mut self, entry: DocEntry) -> bool {
        let key = entry.identifier.to_string();
        if self.entries.contains_key(&key) {
            tracing::warn!(identifier = %key, "duplicate documentation entry ignored");
            return false;
        }
        self.entries.insert(key, entry);
        true
    }

    /// Fold another file's entries in, first entry winning.
    pub fn merge(&mut self, other: Documentation) {
        for entry in other.entries.into_values() {
            self.insert(entry);
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, identifier: &str) -> Option<&DocEntry> {
        self.entries.get(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocEntry> {
        self.entries.values()
    }

    pub fn of_kind(&self, kind: MemberKind) -> impl Iterator<Item = &DocEntry> {
        self.iter().filter(move |e| e.identifier.kind() == kind)
    }
}

/// Collapse every whitespace run to one space and trim the ends.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, summary: &str) -> DocEntry {
        DocEntry::new(MemberIdentifier::parse(id).unwrap()).with_summary(summary)
    }

    #[test]
    fn test_duplicate_identifier_keeps_first() {
        let mut docs = Documentation::new();
        assert!(docs.insert(entry("M:N.Foo.Bar", "first")));
        assert!(!docs.insert(entry("M:N.Foo.Bar", "second")));
        assert_eq!(docs.len(), 1);
        assert_eq!(docs.get("M:N.Foo.Bar").unwrap().summary.as_deref(), Some("first"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut docs = Documentation::new();
        docs.insert(entry("T:N.Foo", "a type"));
        assert!(docs.get("T:N.Foo").is_some());
        assert!(docs.get("T:n.foo").is_none());
    }

    #[test]
    fn test_merge_and_filter_by_kind() {
        let mut a = Documentation::new();
        a.insert(entry("T:N.Foo", "type"));
        let mut b = Documentation::new();
        b.insert(entry("F:N.Foo.X", "field"));
        b.insert(entry("T:N.Foo", "again"));
        a.merge(b);
        assert_eq!(a.len(), 2);
        assert_eq!(a.of_kind(MemberKind::Field).count(), 1);
        assert_eq!(a.get("T:N.Foo").unwrap().summary.as_deref(), Some("type"));
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  Returns\n   the   value. "), "Returns the value.");
        assert_eq!(normalize_text("\n\t"), "");
    }
}
