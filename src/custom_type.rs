//! Custom type and value declarations.
//!
//! Members with an associated external type, and every nested object, get a
//! generated `<Name>Type` / `<Name>Value` pair wrapping the framework base
//! types.

use crate::error::Result;
use crate::identifier::{to_camel_case, to_pascal_case};
use crate::imports::{
    Imports, ATTR_IMPORT, BASE_TYPES_IMPORT, CONTEXT_IMPORT, DIAG_IMPORT, FMT_IMPORT,
    TFTYPES_IMPORT, TYPES_IMPORT,
};
use crate::templates::{Templates, CUSTOM_OBJECT, CUSTOM_TYPE};
use serde::Serialize;

#[derive(Serialize)]
struct CustomTypeContext<'a> {
    name: String,
    kind: &'a str,
    type_literal: &'a str,
}

/// Renders a type/value pair embedding `basetypes.<kind>Type` and
/// `basetypes.<kind>Value`. `type_literal` is the base type value returned by
/// the value's `Type` method.
pub fn render_custom_type(
    templates: &Templates,
    name: &str,
    kind: &str,
    type_literal: &str,
) -> Result<String> {
    templates.render(
        CUSTOM_TYPE,
        &CustomTypeContext {
            name: to_pascal_case(name),
            kind,
            type_literal,
        },
    )
}

/// A field of a generated object value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectField {
    name: String,
    pascal: String,
    camel: String,
    attr_type: String,
    attr_value: String,
}

impl ObjectField {
    pub fn new(name: &str, attr_type: String, attr_value: String) -> Self {
        Self {
            name: name.to_string(),
            pascal: to_pascal_case(name),
            camel: to_camel_case(name),
            attr_type,
            attr_value,
        }
    }
}

#[derive(Serialize)]
struct CustomObjectContext<'a> {
    name: String,
    attributes: &'a [ObjectField],
}

/// Renders the object type/value pair of a nested object. Fields are emitted
/// in the given order.
pub fn render_custom_object(
    templates: &Templates,
    name: &str,
    fields: &[ObjectField],
) -> Result<String> {
    templates.render(
        CUSTOM_OBJECT,
        &CustomObjectContext {
            name: to_pascal_case(name),
            attributes: fields,
        },
    )
}

/// Imports of generated type/value pairs.
pub fn custom_value_imports() -> Imports {
    let mut imports = Imports::new();
    for path in [
        CONTEXT_IMPORT,
        FMT_IMPORT,
        ATTR_IMPORT,
        DIAG_IMPORT,
        BASE_TYPES_IMPORT,
        TYPES_IMPORT,
        TFTYPES_IMPORT,
    ] {
        imports.add_path(path);
    }
    imports
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_render_custom_type() {
        let templates = Templates::new().unwrap();
        let out =
            render_custom_type(&templates, "enabled", "Bool", "basetypes.BoolType{}").unwrap();
        assert!(out.starts_with("var _ basetypes.BoolTypable = EnabledType{}\n"));
        assert!(out.contains("func (t EnabledType) ValueFromBool(ctx context.Context, in basetypes.BoolValue) (basetypes.BoolValuable, diag.Diagnostics) {"));
        assert!(out.contains("\t\tBoolType: basetypes.BoolType{},\n"));
    }

    #[test]
    fn test_render_custom_object() {
        let templates = Templates::new().unwrap();
        let fields = vec![
            ObjectField::new(
                "bool_attribute",
                "basetypes.BoolType{}".to_string(),
                "basetypes.BoolValue".to_string(),
            ),
            ObjectField::new(
                "tags",
                "basetypes.ListType{\nElemType: types.StringType,\n}".to_string(),
                "basetypes.ListValue".to_string(),
            ),
        ];
        let out = render_custom_object(&templates, "list_nested_attribute", &fields).unwrap();
        assert!(out.contains("type ListNestedAttributeValue struct {\n\tBoolAttribute basetypes.BoolValue `tfsdk:\"bool_attribute\"`\n\tTags basetypes.ListValue `tfsdk:\"tags\"`\n\tstate attr.ValueState\n}"));
        assert!(out.contains("boolAttributeVal, ok := boolAttributeAttribute.(basetypes.BoolValue)"));
        assert!(out.contains("\t\t\"tags\": basetypes.ListType{\nElemType: types.StringType,\n},\n"));
        assert!(out.contains("func NewListNestedAttributeValueNull() ListNestedAttributeValue {"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let templates = Templates::new().unwrap();
        let fields = vec![ObjectField::new(
            "a",
            "basetypes.StringType{}".to_string(),
            "basetypes.StringValue".to_string(),
        )];
        assert_eq!(
            render_custom_object(&templates, "x", &fields).unwrap(),
            render_custom_object(&templates, "x", &fields).unwrap()
        );
    }
}
