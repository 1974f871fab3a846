//! Documentation identifier rendering.
//!
//! Grammar: `<Kind>:<DeclaringFullName>.<MemberName>[(<P1FullName>,<P2FullName>,..)]`.
//! The parameter list uses full type names, no spaces, and is omitted
//! entirely when there are no parameters. Identifiers are compared
//! byte-for-byte against external documentation, so this format is fixed.

use crate::types::MaterializedType;

/// Member name used for constructors.
pub const CONSTRUCTOR_NAME: &str = "#ctor";

/// Render a documentation identifier.
///
/// `parameters` is `None` for members whose identifiers never carry a
/// parameter list (fields, plain properties). Parameters are written with
/// [`MaterializedType::documentation_name`].
pub fn documentation_id<T: MaterializedType>(
    prefix: char,
    declaring_full_name: &str,
    member_name: &str,
    parameters: Option<&[T]>,
) -> String {
    let mut id = String::with_capacity(declaring_full_name.len() + member_name.len() + 3);
    id.push(prefix);
    id.push(':');
    id.push_str(declaring_full_name);
    id.push('.');
    id.push_str(member_name);

    if let Some(parameters) = parameters.filter(|p| !p.is_empty()) {
        id.push('(');
        for (i, parameter) in parameters.iter().enumerate() {
            if i > 0 {
                id.push(',');
            }
            id.push_str(parameter.documentation_name());
        }
        id.push(')');
    }

    id
}
