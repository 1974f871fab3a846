//! In-memory metadata images.
//!
//! An [`Image`] is the unit of loadable code both backends consume: a named
//! list of type definitions, each with its members. Type references are by
//! namespace-qualified name and are bound (or not) by whichever backend loads
//! the image.
//!
//! ```text
//! Image
//! └── types: Vec<TypeDef>
//!     ├── base: Option<TypeRef>, interfaces: Vec<TypeRef>
//!     ├── fields:     Vec<FieldDef>
//!     ├── methods:    Vec<MethodDef>      (.ctor, .cctor, get_X, add_E ...)
//!     ├── properties: Vec<PropertyDef>    (getter/setter name a method)
//!     └── events:     Vec<EventDef>       (add/remove name a method)
//! ```
//!
//! With the `interchange` feature every type here is serde-serializable, and
//! a [`TypeRef`] is written as its dotted full name.

#[cfg(feature = "interchange")]
use serde::{Deserialize, Serialize};

use crate::base::{Name, full_name};

/// Method name the metadata uses for instance constructors.
pub const INSTANCE_CONSTRUCTOR: &str = ".ctor";

/// Method name the metadata uses for type initializers.
pub const TYPE_INITIALIZER: &str = ".cctor";

// ============================================================================
// REFERENCES
// ============================================================================

/// A reference to a type by namespace and name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "interchange", serde(from = "String", into = "String"))]
pub struct TypeRef {
    pub namespace: String,
    pub name: String,
}

impl TypeRef {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Split a dotted full name at its last dot.
    pub fn parse(full: &str) -> Self {
        match full.rsplit_once('.') {
            Some((namespace, name)) => Self::new(namespace, name),
            None => Self::new("", full),
        }
    }

    pub fn full_name(&self) -> Name {
        full_name(&self.namespace, &self.name)
    }
}

impl From<String> for TypeRef {
    fn from(full: String) -> Self {
        Self::parse(&full)
    }
}

impl From<TypeRef> for String {
    fn from(reference: TypeRef) -> Self {
        reference.full_name().to_string()
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full_name())
    }
}

// ============================================================================
// DEFINITIONS
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "snake_case"))]
pub enum Visibility {
    #[default]
    Public,
    NonPublic,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "snake_case"))]
pub enum TypeKind {
    #[default]
    Class,
    Struct,
    Interface,
    Enum,
}

/// A named, typed method or indexer parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct ParamDef {
    pub name: String,
    #[cfg_attr(feature = "interchange", serde(rename = "type"))]
    pub param_type: TypeRef,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct FieldDef {
    pub name: String,
    #[cfg_attr(feature = "interchange", serde(rename = "type"))]
    pub field_type: TypeRef,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub visibility: Visibility,
    #[cfg_attr(feature = "interchange", serde(default, rename = "static"))]
    pub is_static: bool,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, field_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            field_type,
            visibility: Visibility::Public,
            is_static: false,
        }
    }

    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn non_public(mut self) -> Self {
        self.visibility = Visibility::NonPublic;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct MethodDef {
    pub name: String,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub parameters: Vec<ParamDef>,
    #[cfg_attr(feature = "interchange", serde(rename = "returns"))]
    pub return_type: TypeRef,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub visibility: Visibility,
    #[cfg_attr(feature = "interchange", serde(default, rename = "static"))]
    pub is_static: bool,
}

impl MethodDef {
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type,
            visibility: Visibility::Public,
            is_static: false,
        }
    }

    /// A public instance constructor with no parameters yet.
    pub fn constructor() -> Self {
        Self::new(INSTANCE_CONSTRUCTOR, TypeRef::new("System", "Void"))
    }

    /// A type initializer. Never public in well-formed images.
    pub fn type_initializer() -> Self {
        Self::new(TYPE_INITIALIZER, TypeRef::new("System", "Void"))
            .as_static()
            .non_public()
    }

    pub fn with_parameter(mut self, name: impl Into<String>, param_type: TypeRef) -> Self {
        self.parameters.push(ParamDef {
            name: name.into(),
            param_type,
        });
        self
    }

    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn non_public(mut self) -> Self {
        self.visibility = Visibility::NonPublic;
        self
    }

    pub fn is_constructor(&self) -> bool {
        self.name == INSTANCE_CONSTRUCTOR
    }

    pub fn is_type_initializer(&self) -> bool {
        self.name == TYPE_INITIALIZER
    }
}

/// A property. Accessors are named methods of the same type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct PropertyDef {
    pub name: String,
    #[cfg_attr(feature = "interchange", serde(rename = "type"))]
    pub property_type: TypeRef,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub getter: Option<String>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub setter: Option<String>,
    /// Index parameters; non-empty for indexers.
    #[cfg_attr(feature = "interchange", serde(default))]
    pub parameters: Vec<ParamDef>,
}

impl PropertyDef {
    pub fn new(name: impl Into<String>, property_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            property_type,
            getter: None,
            setter: None,
            parameters: Vec::new(),
        }
    }

    pub fn with_getter(mut self, method: impl Into<String>) -> Self {
        self.getter = Some(method.into());
        self
    }

    pub fn with_setter(mut self, method: impl Into<String>) -> Self {
        self.setter = Some(method.into());
        self
    }

    pub fn with_index_parameter(mut self, name: impl Into<String>, param_type: TypeRef) -> Self {
        self.parameters.push(ParamDef {
            name: name.into(),
            param_type,
        });
        self
    }

    pub fn is_indexer(&self) -> bool {
        !self.parameters.is_empty()
    }
}

/// An event. Events never become formulas, but their accessors must be
/// recognized so they are not emitted as plain methods either.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct EventDef {
    pub name: String,
    #[cfg_attr(feature = "interchange", serde(rename = "type"))]
    pub event_type: TypeRef,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub add: Option<String>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub remove: Option<String>,
}

impl EventDef {
    pub fn new(name: impl Into<String>, event_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            event_type,
            add: None,
            remove: None,
        }
    }

    pub fn with_accessors(mut self, add: impl Into<String>, remove: impl Into<String>) -> Self {
        self.add = Some(add.into());
        self.remove = Some(remove.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct TypeDef {
    #[cfg_attr(feature = "interchange", serde(default))]
    pub namespace: String,
    pub name: String,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub kind: TypeKind,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub visibility: Visibility,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub base: Option<TypeRef>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub interfaces: Vec<TypeRef>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub fields: Vec<FieldDef>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub methods: Vec<MethodDef>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub properties: Vec<PropertyDef>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub events: Vec<EventDef>,
}

impl TypeDef {
    /// A public class with no members.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            kind: TypeKind::Class,
            visibility: Visibility::Public,
            base: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            properties: Vec::new(),
            events: Vec::new(),
        }
    }

    /// A public interface with no members.
    pub fn interface(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(namespace, name).with_kind(TypeKind::Interface)
    }

    pub fn with_kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn non_public(mut self) -> Self {
        self.visibility = Visibility::NonPublic;
        self
    }

    pub fn with_base(mut self, base: TypeRef) -> Self {
        self.base = Some(base);
        self
    }

    pub fn with_interface(mut self, interface: TypeRef) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodDef) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_property(mut self, property: PropertyDef) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_event(mut self, event: EventDef) -> Self {
        self.events.push(event);
        self
    }

    /// Add a property together with its public `get_<name>` accessor.
    pub fn with_read_only_property(
        self,
        name: &str,
        property_type: TypeRef,
        is_static: bool,
    ) -> Self {
        let getter_name = format!("get_{name}");
        let mut getter = MethodDef::new(getter_name.clone(), property_type.clone());
        getter.is_static = is_static;
        self.with_method(getter)
            .with_property(PropertyDef::new(name, property_type).with_getter(getter_name))
    }

    pub fn reference(&self) -> TypeRef {
        TypeRef::new(self.namespace.clone(), self.name.clone())
    }

    pub fn full_name(&self) -> Name {
        full_name(&self.namespace, &self.name)
    }

    pub fn is_public(&self) -> bool {
        self.visibility.is_public()
    }

    pub fn method(&self, name: &str) -> Option<&MethodDef> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// True when `method` is a property or event accessor of this type.
    pub fn is_accessor(&self, method: &str) -> bool {
        let named = |slot: &Option<String>| slot.as_deref() == Some(method);
        self.properties
            .iter()
            .any(|p| named(&p.getter) || named(&p.setter))
            || self.events.iter().any(|e| named(&e.add) || named(&e.remove))
    }

    /// Every type named by a member signature, in declaration order.
    pub fn signature_types(&self) -> impl Iterator<Item = &TypeRef> {
        let fields = self.fields.iter().map(|f| &f.field_type);
        let methods = self.methods.iter().flat_map(|m| {
            m.parameters
                .iter()
                .map(|p| &p.param_type)
                .chain(std::iter::once(&m.return_type))
        });
        let properties = self.properties.iter().flat_map(|p| {
            std::iter::once(&p.property_type).chain(p.parameters.iter().map(|i| &i.param_type))
        });
        let events = self.events.iter().map(|e| &e.event_type);
        fields.chain(methods).chain(properties).chain(events)
    }
}

// ============================================================================
// IMAGE
// ============================================================================

/// One loadable unit of metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct Image {
    pub name: String,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub types: Vec<TypeDef>,
}

impl Image {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
        }
    }

    pub fn with_type(mut self, ty: TypeDef) -> Self {
        self.types.push(ty);
        self
    }

    pub fn add_type(&mut self, ty: TypeDef) -> &mut Self {
        self.types.push(ty);
        self
    }

    pub fn find_type(&self, qualified: &str) -> Option<&TypeDef> {
        self.types.iter().find(|t| t.full_name().as_str() == qualified)
    }

    pub fn public_types(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.iter().filter(|t| t.is_public())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ref_parse_splits_at_last_dot() {
        let r = TypeRef::parse("System.Collections.Generic.List`1");
        assert_eq!(r.namespace, "System.Collections.Generic");
        assert_eq!(r.name, "List`1");
        assert_eq!(TypeRef::parse("Global"), TypeRef::new("", "Global"));
    }

    #[test]
    fn test_read_only_property_adds_getter() {
        let ty = TypeDef::new("N", "Foo").with_read_only_property(
            "Count",
            TypeRef::new("System", "Int32"),
            true,
        );
        let getter = ty.method("get_Count").unwrap();
        assert!(getter.is_static);
        assert!(ty.is_accessor("get_Count"));
        assert!(!ty.is_accessor("Count"));
    }

    #[test]
    fn test_event_accessors_are_accessors() {
        let ty = TypeDef::new("N", "Button").with_event(
            EventDef::new("Click", TypeRef::new("System", "EventHandler"))
                .with_accessors("add_Click", "remove_Click"),
        );
        assert!(ty.is_accessor("add_Click"));
        assert!(ty.is_accessor("remove_Click"));
    }

    #[test]
    fn test_constructor_names() {
        assert!(MethodDef::constructor().is_constructor());
        let cctor = MethodDef::type_initializer();
        assert!(cctor.is_type_initializer());
        assert!(!cctor.visibility.is_public());
    }

    #[test]
    fn test_image_lookup_by_full_name() {
        let image = Image::new("lib")
            .with_type(TypeDef::new("N", "Visible"))
            .with_type(TypeDef::new("N", "Hidden").non_public());
        assert!(image.find_type("N.Hidden").is_some());
        assert_eq!(image.public_types().count(), 1);
    }

    #[cfg(feature = "interchange")]
    #[test]
    fn test_type_ref_serializes_as_full_name() {
        let field = FieldDef::new("Empty", TypeRef::new("System", "String")).as_static();
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "System.String");
        assert_eq!(json["static"], true);
        let back: FieldDef = serde_json::from_value(json).unwrap();
        assert_eq!(back, field);
    }
}
