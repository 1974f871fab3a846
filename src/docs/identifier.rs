//! Documentation identifiers (`M:N.Foo.Bar(System.Int32)`).

use std::fmt;

/// The kind letter in front of an identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Event,
    Field,
    Method,
    Property,
    Type,
}

impl MemberKind {
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'E' => Some(MemberKind::Event),
            'F' => Some(MemberKind::Field),
            'M' => Some(MemberKind::Method),
            'P' => Some(MemberKind::Property),
            'T' => Some(MemberKind::Type),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            MemberKind::Event => 'E',
            MemberKind::Field => 'F',
            MemberKind::Method => 'M',
            MemberKind::Property => 'P',
            MemberKind::Type => 'T',
        }
    }
}

/// A parsed documentation identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MemberIdentifier {
    kind: MemberKind,
    full_name: String,
}

impl MemberIdentifier {
    /// Parse `<K>:<name>`. Unknown kind letters and empty names are rejected.
    pub fn parse(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        let kind = MemberKind::from_letter(chars.next()?)?;
        let full_name = chars.as_str().strip_prefix(':')?;
        if full_name.is_empty() {
            return None;
        }
        Some(Self {
            kind,
            full_name: full_name.to_string(),
        })
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    /// Everything after the colon.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    fn head(&self) -> &str {
        self.full_name
            .split_once('(')
            .map_or(self.full_name.as_str(), |(head, _)| head)
    }

    fn split_member(&self) -> Option<(&str, &str)> {
        match self.kind {
            MemberKind::Type => None,
            _ => self.head().rsplit_once('.'),
        }
    }

    /// The declaring type's full name, for member identifiers.
    pub fn declaring_type(&self) -> Option<&str> {
        self.split_member().map(|(declaring, _)| declaring)
    }

    /// The member's own name (`#ctor` for constructors).
    pub fn member_name(&self) -> Option<&str> {
        self.split_member().map(|(_, member)| member)
    }

    /// Parameter type names, split at top-level commas.
    pub fn parameters(&self) -> Vec<&str> {
        let Some((_, rest)) = self.full_name.split_once('(') else {
            return Vec::new();
        };
        let list = rest.strip_suffix(')').unwrap_or(rest);
        if list.is_empty() {
            return Vec::new();
        }

        let mut parameters = Vec::new();
        let mut depth = 0usize;
        let mut start = 0;
        for (i, c) in list.char_indices() {
            match c {
                '{' | '[' | '(' => depth += 1,
                '}' | ']' | ')' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    parameters.push(&list[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }
        parameters.push(&list[start..]);
        parameters
    }
}

impl fmt::Display for MemberIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.letter(), self.full_name)
    }
}

impl std::str::FromStr for MemberIdentifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("not a documentation identifier: {s:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("T:N.Foo", MemberKind::Type)]
    #[case("E:N.Foo.Changed", MemberKind::Event)]
    #[case("F:N.Foo.Empty", MemberKind::Field)]
    #[case("P:N.Foo.Item(System.Int32)", MemberKind::Property)]
    #[case("M:N.Foo.#ctor", MemberKind::Method)]
    fn test_parse_kinds(#[case] text: &str, #[case] kind: MemberKind) {
        let id = MemberIdentifier::parse(text).unwrap();
        assert_eq!(id.kind(), kind);
        assert_eq!(id.to_string(), text);
    }

    #[rstest]
    #[case("")]
    #[case("M")]
    #[case("M:")]
    #[case("X:N.Foo")]
    #[case("M.N.Foo")]
    #[case("!:N.Foo")]
    fn test_parse_rejects_malformed(#[case] text: &str) {
        assert!(MemberIdentifier::parse(text).is_none());
    }

    #[test]
    fn test_member_parts() {
        let id = MemberIdentifier::parse("M:N.Foo.Bar(System.Int32,System.String)").unwrap();
        assert_eq!(id.declaring_type(), Some("N.Foo"));
        assert_eq!(id.member_name(), Some("Bar"));
        assert_eq!(id.parameters(), ["System.Int32", "System.String"]);
    }

    #[test]
    fn test_parameters_respect_generic_braces() {
        let id = MemberIdentifier::parse(
            "M:N.Foo.Bar(System.Collections.Generic.Dictionary{System.String,System.Int32},System.Int32)",
        )
        .unwrap();
        assert_eq!(
            id.parameters(),
            [
                "System.Collections.Generic.Dictionary{System.String,System.Int32}",
                "System.Int32"
            ]
        );
    }

    #[test]
    fn test_type_identifier_has_no_member_parts() {
        let id = MemberIdentifier::parse("T:N.Foo").unwrap();
        assert_eq!(id.declaring_type(), None);
        assert_eq!(id.member_name(), None);
        assert!(id.parameters().is_empty());
    }

    #[test]
    fn test_constructor_member_name() {
        let id = MemberIdentifier::parse("M:N.Foo.#ctor").unwrap();
        assert_eq!(id.member_name(), Some("#ctor"));
        assert!(id.parameters().is_empty());
    }
}
