//! Conversion between generated value types and associated external types.
//!
//! A member with an associated external type gets a pair of generated
//! functions, `To<External>` and `From<External>`, on its value type. Members
//! without one describe how a parent object converts them through
//! [`ToFromConversion`].

use crate::error::Result;
use crate::identifier::{to_camel_case, to_pascal_case};
use crate::imports::{Import, Imports, CONTEXT_IMPORT, DIAG_IMPORT, TYPES_IMPORT};
use crate::spec::AssociatedExternalType;
use crate::templates::{
    Templates, TO_FROM_COLLECTION, TO_FROM_NESTED_OBJECT, TO_FROM_OBJECT, TO_FROM_SCALAR,
};
use serde::Serialize;

/// Reference to a foreign Go type, e.g. `*apisdk.Type`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssocExtType {
    imports: Imports,
    type_: String,
}

impl AssocExtType {
    pub fn new(spec: &AssociatedExternalType) -> Self {
        let mut imports = Imports::new();
        if let Some(import) = &spec.import {
            imports.add(import.clone());
        }
        Self {
            imports,
            type_: spec.r#type.clone(),
        }
    }

    /// The type as declared, e.g. `*apisdk.Type`.
    pub fn type_(&self) -> &str {
        &self.type_
    }

    /// The type without pointer indirection, e.g. `apisdk.Type`.
    pub fn type_reference(&self) -> &str {
        self.type_.trim_start_matches('*')
    }

    /// Identifier suffix of the converter functions, e.g. `ApisdkType`.
    pub fn to_pascal_case(&self) -> String {
        to_pascal_case(self.type_reference())
    }

    pub fn imports(&self) -> &Imports {
        &self.imports
    }
}

/// Builtin conversion of a list, map or set.
///
/// `to` fills `go_type`; `from` fills `element_type` and `type_value_func`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectionFields {
    pub go_type: String,
    pub element_type: String,
    pub type_value_func: String,
}

/// How a member converts to or from its external representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToFromConversion {
    /// Delegate to the member's own generated converter functions.
    AssocExtType(AssocExtType),
    /// Framework value method or `types` constructor, e.g. `ValueBoolPointer`.
    Default(String),
    Collection(CollectionFields),
}

/// Imports of every generated converter pair.
pub fn to_from_imports() -> Imports {
    [CONTEXT_IMPORT, DIAG_IMPORT, TYPES_IMPORT]
        .iter()
        .map(|p| Import::new(*p))
        .collect()
}

#[derive(Serialize)]
struct ScalarContext<'a> {
    name: String,
    kind: &'a str,
    assoc_pascal: String,
    assoc_type: &'a str,
    type_reference: &'a str,
    to_func: &'a str,
    from_func: &'a str,
    go_type: &'a str,
    dereference: bool,
}

/// Scalar converter inputs.
#[derive(Debug, Clone, Copy)]
pub struct ScalarToFrom<'a> {
    /// Framework kind, e.g. `Bool`.
    pub kind: &'a str,
    pub to_func: &'a str,
    pub from_func: &'a str,
    /// Native Go pointer type, e.g. `*bool`.
    pub go_type: &'a str,
}

pub fn render_scalar(
    templates: &Templates,
    name: &str,
    assoc: &AssocExtType,
    scalar: ScalarToFrom<'_>,
) -> Result<String> {
    templates.render(
        TO_FROM_SCALAR,
        &ScalarContext {
            name: to_pascal_case(name),
            kind: scalar.kind,
            assoc_pascal: assoc.to_pascal_case(),
            assoc_type: assoc.type_(),
            type_reference: assoc.type_reference(),
            to_func: scalar.to_func,
            from_func: scalar.from_func,
            go_type: scalar.go_type,
            // Number values are already pointers.
            dereference: scalar.kind == "Number",
        },
    )
}

#[derive(Serialize)]
struct CollectionContext<'a> {
    name: String,
    kind: &'a str,
    assoc_pascal: String,
    assoc_type: &'a str,
    type_reference: &'a str,
    elem_type: &'a str,
    elem_value: &'a str,
}

/// Renders the converter pair of a list, map or set of `kind`, whose elements
/// have attr type `elem_type` and are built with `elem_value`.
pub fn render_collection(
    templates: &Templates,
    name: &str,
    assoc: &AssocExtType,
    kind: &str,
    elem_type: &str,
    elem_value: &str,
) -> Result<String> {
    templates.render(
        TO_FROM_COLLECTION,
        &CollectionContext {
            name: to_pascal_case(name),
            kind,
            assoc_pascal: assoc.to_pascal_case(),
            assoc_type: assoc.type_(),
            type_reference: assoc.type_reference(),
            elem_type,
            elem_value,
        },
    )
}

#[derive(Serialize)]
struct ObjectContext<'a> {
    name: String,
    assoc_pascal: String,
    assoc_type: &'a str,
    type_reference: &'a str,
    attr_types: &'a str,
}

/// `attr_types` holds the `"<name>": <type>,` lines of the object.
pub fn render_object(
    templates: &Templates,
    name: &str,
    assoc: &AssocExtType,
    attr_types: &str,
) -> Result<String> {
    templates.render(
        TO_FROM_OBJECT,
        &ObjectContext {
            name: to_pascal_case(name),
            assoc_pascal: assoc.to_pascal_case(),
            assoc_type: assoc.type_(),
            type_reference: assoc.type_reference(),
            attr_types,
        },
    )
}

/// One field of a nested object converter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToFromField {
    pascal: String,
    camel: String,
    kind: &'static str,
    to_func: String,
    from_func: String,
    go_type: String,
    elem_type: String,
    type_value_func: String,
    assoc_pascal: String,
    attr_value: String,
}

impl ToFromField {
    /// Combines the `to` and `from` conversions of a child member. Returns
    /// `None` when the two conversions do not share a variant.
    pub fn new(
        name: &str,
        to: &ToFromConversion,
        from: &ToFromConversion,
        attr_value: &str,
    ) -> Option<Self> {
        let mut field = ToFromField {
            pascal: to_pascal_case(name),
            camel: to_camel_case(name),
            attr_value: attr_value.to_string(),
            ..Default::default()
        };
        match (to, from) {
            (ToFromConversion::AssocExtType(assoc), _) => {
                field.kind = "assoc";
                field.assoc_pascal = assoc.to_pascal_case();
            }
            (ToFromConversion::Collection(to), ToFromConversion::Collection(from)) => {
                field.kind = "collection";
                field.go_type = to.go_type.clone();
                field.elem_type = from.element_type.clone();
                field.type_value_func = from.type_value_func.clone();
            }
            (ToFromConversion::Default(to), ToFromConversion::Default(from)) => {
                field.kind = "default";
                field.to_func = to.clone();
                field.from_func = from.clone();
            }
            _ => return None,
        }
        Some(field)
    }
}

#[derive(Serialize)]
struct NestedObjectContext<'a> {
    name: String,
    assoc_pascal: String,
    assoc_type: &'a str,
    type_reference: &'a str,
    fields: &'a [ToFromField],
}

pub fn render_nested_object(
    templates: &Templates,
    name: &str,
    assoc: &AssocExtType,
    fields: &[ToFromField],
) -> Result<String> {
    templates.render(
        TO_FROM_NESTED_OBJECT,
        &NestedObjectContext {
            name: to_pascal_case(name),
            assoc_pascal: assoc.to_pascal_case(),
            assoc_type: assoc.type_(),
            type_reference: assoc.type_reference(),
            fields,
        },
    )
}
