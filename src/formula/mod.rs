//! Members modelled as formulas.
//!
//! A formula is a corpus member seen as "consumes these ingredient types,
//! produces this result type". The implicit receiver of an instance member is
//! an ingredient like any other:
//!
//! | Kind                          | Ingredients                          | Result          |
//! |-------------------------------|--------------------------------------|-----------------|
//! | `Field` / `Property`          | `[declaring]`                        | member type     |
//! | `StaticField` / `StaticProperty` | `[]`                              | member type     |
//! | `IndexProperty`               | `[declaring, ..index parameters]`    | property type   |
//! | `Method`                      | `[declaring, ..parameters]`          | return type     |
//! | `StaticMethod`                | `[..parameters]`                     | return type     |
//! | `Constructor`                 | `[..parameters]`                     | declaring type  |
//!
//! Formulas are built once during extraction and never mutated.

mod doc_id;

use crate::base::Name;
use crate::types::MaterializedType;

pub use doc_id::{CONSTRUCTOR_NAME, documentation_id};

/// The closed set of member shapes a formula can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormulaKind {
    Field,
    StaticField,
    Property,
    StaticProperty,
    IndexProperty,
    Method,
    StaticMethod,
    Constructor,
}

impl FormulaKind {
    /// The documentation-identifier kind letter.
    pub fn documentation_prefix(self) -> char {
        match self {
            FormulaKind::Field | FormulaKind::StaticField => 'F',
            FormulaKind::Property | FormulaKind::StaticProperty | FormulaKind::IndexProperty => {
                'P'
            }
            FormulaKind::Method | FormulaKind::StaticMethod | FormulaKind::Constructor => 'M',
        }
    }

    /// True when invoking the member needs no receiver.
    pub fn is_static(self) -> bool {
        match self {
            FormulaKind::StaticField
            | FormulaKind::StaticProperty
            | FormulaKind::StaticMethod
            | FormulaKind::Constructor => true,
            FormulaKind::Field
            | FormulaKind::Property
            | FormulaKind::IndexProperty
            | FormulaKind::Method => false,
        }
    }

    /// True when the documentation identifier carries a parameter list.
    fn has_parameter_list(self) -> bool {
        match self {
            FormulaKind::IndexProperty
            | FormulaKind::Method
            | FormulaKind::StaticMethod
            | FormulaKind::Constructor => true,
            FormulaKind::Field
            | FormulaKind::StaticField
            | FormulaKind::Property
            | FormulaKind::StaticProperty => false,
        }
    }
}

/// One member of a corpus, reduced to ingredients and a result.
#[derive(Clone, Debug)]
pub struct Formula<T> {
    kind: FormulaKind,
    name: Name,
    declaring_type: T,
    parameters: Vec<T>,
    ingredients: Vec<T>,
    result: T,
    documentation_id: String,
}

impl<T: MaterializedType + Clone> Formula<T> {
    /// An instance field: `[declaring] -> field type`.
    pub fn field(declaring_type: T, name: impl Into<Name>, field_type: T) -> Self {
        Self::build(FormulaKind::Field, declaring_type, name.into(), Vec::new(), field_type)
    }

    /// A static field: `[] -> field type`.
    pub fn static_field(declaring_type: T, name: impl Into<Name>, field_type: T) -> Self {
        Self::build(FormulaKind::StaticField, declaring_type, name.into(), Vec::new(), field_type)
    }

    /// An instance property: `[declaring] -> property type`.
    pub fn property(declaring_type: T, name: impl Into<Name>, property_type: T) -> Self {
        Self::build(FormulaKind::Property, declaring_type, name.into(), Vec::new(), property_type)
    }

    /// A static property: `[] -> property type`.
    pub fn static_property(declaring_type: T, name: impl Into<Name>, property_type: T) -> Self {
        Self::build(
            FormulaKind::StaticProperty,
            declaring_type,
            name.into(),
            Vec::new(),
            property_type,
        )
    }

    /// An indexer: `[declaring, ..index parameters] -> property type`.
    pub fn index_property(
        declaring_type: T,
        name: impl Into<Name>,
        index_parameters: Vec<T>,
        property_type: T,
    ) -> Self {
        Self::build(
            FormulaKind::IndexProperty,
            declaring_type,
            name.into(),
            index_parameters,
            property_type,
        )
    }

    /// An instance method: `[declaring, ..parameters] -> return type`.
    pub fn method(declaring_type: T, name: impl Into<Name>, parameters: Vec<T>, return_type: T) -> Self {
        Self::build(FormulaKind::Method, declaring_type, name.into(), parameters, return_type)
    }

    /// A static method: `[..parameters] -> return type`.
    pub fn static_method(
        declaring_type: T,
        name: impl Into<Name>,
        parameters: Vec<T>,
        return_type: T,
    ) -> Self {
        Self::build(FormulaKind::StaticMethod, declaring_type, name.into(), parameters, return_type)
    }

    /// A constructor: `[..parameters] -> declaring`.
    pub fn constructor(declaring_type: T, parameters: Vec<T>) -> Self {
        let result = declaring_type.clone();
        Self::build(
            FormulaKind::Constructor,
            declaring_type,
            Name::new_static(CONSTRUCTOR_NAME),
            parameters,
            result,
        )
    }

    fn build(kind: FormulaKind, declaring_type: T, name: Name, parameters: Vec<T>, result: T) -> Self {
        let ingredients = match kind {
            FormulaKind::Field | FormulaKind::Property => vec![declaring_type.clone()],
            FormulaKind::StaticField | FormulaKind::StaticProperty => Vec::new(),
            FormulaKind::IndexProperty | FormulaKind::Method => {
                let mut ingredients = Vec::with_capacity(parameters.len() + 1);
                ingredients.push(declaring_type.clone());
                ingredients.extend(parameters.iter().cloned());
                ingredients
            }
            FormulaKind::StaticMethod | FormulaKind::Constructor => parameters.clone(),
        };

        let parameter_list = kind.has_parameter_list().then_some(parameters.as_slice());
        let documentation_id = documentation_id(
            kind.documentation_prefix(),
            declaring_type.documentation_name(),
            &name,
            parameter_list,
        );

        Self {
            kind,
            name,
            declaring_type,
            parameters,
            ingredients,
            result,
            documentation_id,
        }
    }
}

impl<T> Formula<T> {
    pub fn kind(&self) -> FormulaKind {
        self.kind
    }

    /// The member name (`#ctor` for constructors).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declaring_type(&self) -> &T {
        &self.declaring_type
    }

    /// Declared parameters (index parameters for indexers), receiver excluded.
    pub fn parameters(&self) -> &[T] {
        &self.parameters
    }

    /// Everything needed to invoke the member, receiver first for instance members.
    pub fn ingredients(&self) -> &[T] {
        &self.ingredients
    }

    pub fn result(&self) -> &T {
        &self.result
    }

    /// The cross-reference key into external documentation.
    pub fn documentation_id(&self) -> &str {
        &self.documentation_id
    }
}

impl<T> std::fmt::Display for Formula<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.documentation_id)
    }
}
