//! C#-style "pretty" type rendering.
//!
//! Queries may name a type either by its bare name (`Int32`) or by the way a
//! C# programmer would write it (`int`, `System.Text.StringBuilder`). This
//! module produces the second form so query resolution can compare against it.

use std::borrow::Cow;

/// Built-in `System` types that C# spells with a keyword.
const KEYWORD_ALIASES: &[(&str, &str)] = &[
    ("Boolean", "bool"),
    ("Byte", "byte"),
    ("SByte", "sbyte"),
    ("Char", "char"),
    ("Decimal", "decimal"),
    ("Double", "double"),
    ("Single", "float"),
    ("Int16", "short"),
    ("UInt16", "ushort"),
    ("Int32", "int"),
    ("UInt32", "uint"),
    ("Int64", "long"),
    ("UInt64", "ulong"),
    ("Object", "object"),
    ("String", "string"),
    ("Void", "void"),
];

/// The keyword alias for a built-in type, if it has one.
pub fn keyword_alias(namespace: &str, name: &str) -> Option<&'static str> {
    if namespace != "System" {
        return None;
    }
    KEYWORD_ALIASES
        .iter()
        .find(|(type_name, _)| *type_name == name)
        .map(|(_, alias)| *alias)
}

/// Render a type the way C# source would name it.
///
/// Built-in types become their keyword; everything else is the dotted full
/// name with any generic arity suffix (`` `1 ``) and nested-type separators
/// (`+`) normalized away.
pub fn pretty_name<'a>(namespace: &str, name: &'a str) -> Cow<'a, str> {
    if let Some(alias) = keyword_alias(namespace, name) {
        return Cow::Borrowed(alias);
    }

    let bare = match name.find('`') {
        Some(tick) => &name[..tick],
        None => name,
    };
    let bare = bare.replace('+', ".");

    if namespace.is_empty() {
        Cow::Owned(bare)
    } else {
        Cow::Owned(format!("{namespace}.{bare}"))
    }
}
