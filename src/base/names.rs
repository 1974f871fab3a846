//! Name primitives.

use smol_str::SmolStr;

/// A type or member name. Inline for short names, reference-counted otherwise.
pub type Name = SmolStr;

/// Case-insensitive ordinal comparison of two bare names.
///
/// ASCII names (the overwhelming majority of metadata) take the fast path;
/// anything else is compared by simple uppercase mapping, char by char.
#[inline]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars()
        .flat_map(char::to_uppercase)
        .eq(b.chars().flat_map(char::to_uppercase))
}

/// Join a namespace and a bare type name into a full name.
///
/// Types in the global namespace have no leading dot.
pub fn full_name(namespace: &str, name: &str) -> Name {
    if namespace.is_empty() {
        Name::new(name)
    } else {
        smol_str::format_smolstr!("{namespace}.{name}")
    }
}
