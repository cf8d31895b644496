//! Element type resolution.
//!
//! Collection attributes (and object attribute types) describe their contents
//! with a recursive [`ElementType`]. This module projects that description into
//! the framework type expression used in schema text, the native Go storage
//! type used by converter code, the attr type / value constructor pair used by
//! generated conversion functions, and the imports those need.

use crate::convert::custom_type_imports;
use crate::error::{Error, Result};
use crate::identifier::go_quote;
use crate::imports::{Imports, ATTR_IMPORT, MATH_BIG_IMPORT, TYPES_IMPORT};
use crate::spec::{ElementKind, ElementType, ObjectAttributeType};

/// Framework type expression, e.g. `types.ListType{\nElemType: types.StringType,\n}`.
/// A custom type override on a node is emitted verbatim in place of that node.
pub fn element_type_string(element_type: &ElementType) -> Result<String> {
    let kind = element_type.kind()?;
    if let Some(custom_type) = kind.custom_type() {
        return Ok(custom_type.r#type.clone());
    }

    let s = match kind {
        ElementKind::Bool(_) => "types.BoolType".to_string(),
        ElementKind::Float64(_) => "types.Float64Type".to_string(),
        ElementKind::Int64(_) => "types.Int64Type".to_string(),
        ElementKind::Number(_) => "types.NumberType".to_string(),
        ElementKind::String(_) => "types.StringType".to_string(),
        ElementKind::List(l) => format!(
            "types.ListType{{\nElemType: {},\n}}",
            element_type_string(&l.element_type)?
        ),
        ElementKind::Map(m) => format!(
            "types.MapType{{\nElemType: {},\n}}",
            element_type_string(&m.element_type)?
        ),
        ElementKind::Set(s) => format!(
            "types.SetType{{\nElemType: {},\n}}",
            element_type_string(&s.element_type)?
        ),
        ElementKind::Object(o) => format!(
            "types.ObjectType{{\nAttrTypes: map[string]attr.Type{{\n{}}},\n}}",
            attr_types_string(&o.attribute_types)?
        ),
    };
    Ok(s)
}

/// One `"<name>": <type>,` line per object attribute type, in declared order.
pub fn attr_types_string(attribute_types: &[ObjectAttributeType]) -> Result<String> {
    let mut s = String::new();
    for attr in attribute_types {
        s.push_str(&format!(
            "{}: {},\n",
            go_quote(&attr.name),
            element_type_string(&attr.element_type)?
        ));
    }
    Ok(s)
}

/// Native Go storage type of an element, used for `ElementsAs` targets.
/// Objects have no native representation at any depth.
pub fn element_type_go_type(element_type: &ElementType) -> Result<String> {
    let s = match element_type.kind()? {
        ElementKind::Bool(_) => "*bool".to_string(),
        ElementKind::Float64(_) => "*float64".to_string(),
        ElementKind::Int64(_) => "*int64".to_string(),
        ElementKind::Number(_) => "*big.Float".to_string(),
        ElementKind::String(_) => "*string".to_string(),
        ElementKind::List(l) => format!("[]{}", element_type_go_type(&l.element_type)?),
        ElementKind::Map(m) => format!("map[string]{}", element_type_go_type(&m.element_type)?),
        ElementKind::Set(s) => format!("[]{}", element_type_go_type(&s.element_type)?),
        ElementKind::Object(_) => return Err(Error::UnconvertibleType { element: "object" }),
    };
    Ok(s)
}

/// `(types.<K>Type, types.<K>Value)` for a single scalar element kind.
/// Nested collections and objects are not supported.
pub fn element_attr_type_and_value(element_type: &ElementType) -> Result<(String, String)> {
    let kind = element_type.kind()?;
    let name = match kind {
        ElementKind::Bool(_) => "Bool",
        ElementKind::Float64(_) => "Float64",
        ElementKind::Int64(_) => "Int64",
        ElementKind::Number(_) => "Number",
        ElementKind::String(_) => "String",
        ElementKind::List(_) | ElementKind::Map(_) | ElementKind::Set(_) | ElementKind::Object(_) => {
            return Err(Error::UnsupportedConversion {
                element: kind.name(),
            })
        }
    };
    Ok((format!("types.{}Type", name), format!("types.{}Value", name)))
}

/// Imports required by the type expression and Go storage type of an element.
pub fn element_type_imports(element_type: &ElementType) -> Imports {
    let mut imports = Imports::new();
    collect_imports(element_type, &mut imports);
    imports
}

fn collect_imports(element_type: &ElementType, imports: &mut Imports) {
    let kind = match element_type.kind() {
        Ok(kind) => kind,
        Err(_) => return,
    };

    if let Some(custom_type) = kind.custom_type() {
        imports.append(&custom_type_imports(Some(custom_type)));
        return;
    }

    imports.add_path(TYPES_IMPORT);
    match kind {
        ElementKind::Number(_) => imports.add_path(MATH_BIG_IMPORT),
        ElementKind::List(c) | ElementKind::Map(c) | ElementKind::Set(c) => {
            collect_imports(&c.element_type, imports)
        }
        ElementKind::Object(o) => {
            imports.add_path(ATTR_IMPORT);
            for attr in &o.attribute_types {
                collect_imports(&attr.element_type, imports);
            }
        }
        _ => (),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::imports::Import;
    use serde_json::json;

    fn element(v: serde_json::Value) -> ElementType {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_scalar_strings() {
        assert_eq!(element_type_string(&element(json!({"bool": {}}))).unwrap(), "types.BoolType");
        assert_eq!(element_type_string(&element(json!({"number": {}}))).unwrap(), "types.NumberType");
    }

    #[test]
    fn test_nested_collection_string() {
        let e = element(json!({"list": {"element_type": {"map": {"element_type": {"string": {}}}}}}));
        assert_eq!(
            element_type_string(&e).unwrap(),
            "types.ListType{\nElemType: types.MapType{\nElemType: types.StringType,\n},\n}"
        );
    }

    #[test]
    fn test_object_string_keeps_declared_order() {
        let e = element(json!({"object": {"attribute_types": [
            {"name": "zeta", "string": {}},
            {"name": "alpha", "int64": {}}
        ]}}));
        assert_eq!(
            element_type_string(&e).unwrap(),
            "types.ObjectType{\nAttrTypes: map[string]attr.Type{\n\"zeta\": types.StringType,\n\"alpha\": types.Int64Type,\n},\n}"
        );
    }

    #[test]
    fn test_custom_type_override_wins() {
        let e = element(json!({"list": {
            "custom_type": {"type": "mytypes.ListType{}", "value_type": "mytypes.List"},
            "element_type": {"string": {}}
        }}));
        assert_eq!(element_type_string(&e).unwrap(), "mytypes.ListType{}");
    }

    #[test]
    fn test_go_types() {
        let e = element(json!({"map": {"element_type": {"set": {"element_type": {"number": {}}}}}}));
        assert_eq!(element_type_go_type(&e).unwrap(), "map[string][]*big.Float");
    }

    #[test]
    fn test_object_go_type_fails_at_any_depth() {
        let shallow = element(json!({"object": {"attribute_types": []}}));
        let deep = element(json!({"list": {"element_type": {"map": {"element_type": {"object": {"attribute_types": [{"name": "a", "bool": {}}]}}}}}}));
        for e in [shallow, deep].iter() {
            assert!(matches!(
                element_type_go_type(e),
                Err(Error::UnconvertibleType { .. })
            ));
        }
    }

    #[test]
    fn test_attr_type_and_value() {
        let (t, v) = element_attr_type_and_value(&element(json!({"string": {}}))).unwrap();
        assert_eq!(t, "types.StringType");
        assert_eq!(v, "types.StringValue");

        let nested = element(json!({"list": {"element_type": {"string": {}}}}));
        assert!(matches!(
            element_attr_type_and_value(&nested),
            Err(Error::UnsupportedConversion { element: "list" })
        ));
    }

    #[test]
    fn test_empty_element_type_is_an_error() {
        assert!(matches!(
            element_type_string(&ElementType::default()),
            Err(Error::UnknownKind { .. })
        ));
        assert!(element_type_imports(&ElementType::default()).is_empty());
    }

    #[test]
    fn test_imports() {
        let e = element(json!({"list": {"element_type": {"object": {"attribute_types": [
            {"name": "n", "number": {}},
            {"name": "s", "string": {"custom_type": {
                "import": {"path": "github.com/example/mytypes"},
                "type": "mytypes.StringType{}",
                "value_type": "mytypes.String"
            }}}
        ]}}}}));
        let imports = element_type_imports(&e);
        assert_eq!(
            imports.all(),
            &[
                Import::new(TYPES_IMPORT),
                Import::new(ATTR_IMPORT),
                Import::new(MATH_BIG_IMPORT),
                Import::new("github.com/example/mytypes"),
            ]
        );
    }

    #[test]
    fn test_overridden_number_skips_math_big() {
        let e = element(json!({"number": {"custom_type": {"type": "mytypes.NumberType{}", "value_type": "mytypes.Number"}}}));
        assert!(element_type_imports(&e).is_empty());
    }
}
