//! Formula extraction from one image.

use std::sync::Arc;

use super::InspectType;
use super::scope::{Origin, Scope, TypeNode};
use crate::formula::Formula;
use crate::metadata::{Image, ParamDef, PropertyDef, TypeDef, TypeRef};

/// Extract the formulas of every public type in `image`.
///
/// The image's types must already be defined in `scope`. Only the read lock
/// is taken, so several images can be extracted at once.
pub(crate) fn extract_image(image: &Image, scope: &Arc<Scope>) -> Vec<Formula<InspectType>> {
    let mut formulas = Vec::new();
    for def in image.public_types() {
        let declaring = match scope.get(&def.full_name()) {
            Some(node) => InspectType::bound(node, scope.clone()),
            None => InspectType::bound(
                Arc::new(TypeNode::from_def(def, Origin::Primary)),
                scope.clone(),
            ),
        };
        extract_type(def, &declaring, scope, &mut formulas);
    }
    tracing::trace!(image = %image.name, formulas = formulas.len(), "image extracted");
    formulas
}

fn extract_type(
    def: &TypeDef,
    declaring: &InspectType,
    scope: &Arc<Scope>,
    out: &mut Vec<Formula<InspectType>>,
) {
    let resolve = |r: &TypeRef| InspectType::reference(r.full_name(), scope.clone());
    let params = |ps: &[ParamDef]| ps.iter().map(|p| resolve(&p.param_type)).collect::<Vec<_>>();

    for field in def.fields.iter().filter(|f| f.visibility.is_public()) {
        let field_type = resolve(&field.field_type);
        out.push(if field.is_static {
            Formula::static_field(declaring.clone(), field.name.as_str(), field_type)
        } else {
            Formula::field(declaring.clone(), field.name.as_str(), field_type)
        });
    }

    for method in &def.methods {
        if !method.visibility.is_public()
            || method.is_type_initializer()
            || def.is_accessor(&method.name)
        {
            continue;
        }
        let parameters = params(&method.parameters);
        let formula = if method.is_constructor() {
            Formula::constructor(declaring.clone(), parameters)
        } else if method.is_static {
            Formula::static_method(
                declaring.clone(),
                method.name.as_str(),
                parameters,
                resolve(&method.return_type),
            )
        } else {
            Formula::method(
                declaring.clone(),
                method.name.as_str(),
                parameters,
                resolve(&method.return_type),
            )
        };
        out.push(formula);
    }

    for property in &def.properties {
        if let Some(formula) = property_formula(def, property, declaring, &resolve, &params) {
            out.push(formula);
        }
    }
}

/// A property is visible through its getter: no public getter, no formula.
fn property_formula(
    def: &TypeDef,
    property: &PropertyDef,
    declaring: &InspectType,
    resolve: &dyn Fn(&TypeRef) -> InspectType,
    params: &dyn Fn(&[ParamDef]) -> Vec<InspectType>,
) -> Option<Formula<InspectType>> {
    let getter = def.method(property.getter.as_deref()?)?;
    if !getter.visibility.is_public() {
        return None;
    }
    let property_type = resolve(&property.property_type);
    let name = property.name.as_str();
    Some(if property.is_indexer() {
        Formula::index_property(declaring.clone(), name, params(&property.parameters), property_type)
    } else if getter.is_static {
        Formula::static_property(declaring.clone(), name, property_type)
    } else {
        Formula::property(declaring.clone(), name, property_type)
    })
}
