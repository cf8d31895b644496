//! Generated attributes.
//!
//! [`GeneratorAttribute`] is the closed set of attribute kinds. Each variant
//! renders its schema struct literal, its model field, the imports those need,
//! and, when it carries an associated external type or nested object, its
//! custom type/value declarations and converter functions.

mod collection;
mod nested_collection;
mod object;
mod scalar;
mod single_nested;

pub use collection::{CollectionAttribute, CollectionKind};
pub use nested_collection::NestedCollectionAttribute;
pub use object::ObjectAttribute;
pub use scalar::{ScalarAttribute, ScalarKind};
pub use single_nested::SingleNestedAttribute;

use crate::error::Result;
use crate::imports::Imports;
use crate::model::{Model, ModelField};
use crate::spec::{AttributeKind, AttributeSpec};
use crate::templates::Templates;
use crate::to_from::{CollectionFields, ToFromConversion};
use std::collections::BTreeMap;
use std::fmt;

/// Kind tag of a generated attribute or block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeneratorSchemaType {
    BoolAttribute,
    Float64Attribute,
    Int64Attribute,
    NumberAttribute,
    StringAttribute,
    ListAttribute,
    MapAttribute,
    SetAttribute,
    ObjectAttribute,
    ListNestedAttribute,
    MapNestedAttribute,
    SetNestedAttribute,
    SingleNestedAttribute,
    ListNestedBlock,
    SetNestedBlock,
    SingleNestedBlock,
}

impl fmt::Display for GeneratorSchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Attributes of one schema level, iterated in key order.
pub type GeneratorAttributes = BTreeMap<String, GeneratorAttribute>;

/// Generated representation of a schema attribute.
///
/// Equality never holds across variants, whatever their resolved fields.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorAttribute {
    Bool(ScalarAttribute),
    Float64(ScalarAttribute),
    Int64(ScalarAttribute),
    Number(ScalarAttribute),
    String(ScalarAttribute),
    List(CollectionAttribute),
    Map(CollectionAttribute),
    Set(CollectionAttribute),
    Object(ObjectAttribute),
    ListNested(NestedCollectionAttribute),
    MapNested(NestedCollectionAttribute),
    SetNested(NestedCollectionAttribute),
    SingleNested(SingleNestedAttribute),
}

impl GeneratorAttribute {
    /// Builds the variant matching the populated kind of `spec`, recursing
    /// into nested attributes.
    pub fn new(spec: &AttributeSpec) -> Result<Self> {
        tracing::debug!("building attribute {}", spec.name);
        let attribute = match spec.kind()? {
            AttributeKind::Bool(a) => GeneratorAttribute::Bool(ScalarAttribute::bool(a)),
            AttributeKind::Float64(a) => GeneratorAttribute::Float64(ScalarAttribute::float64(a)),
            AttributeKind::Int64(a) => GeneratorAttribute::Int64(ScalarAttribute::int64(a)),
            AttributeKind::Number(a) => GeneratorAttribute::Number(ScalarAttribute::number(a)),
            AttributeKind::String(a) => GeneratorAttribute::String(ScalarAttribute::string(a)),
            AttributeKind::List(a) => {
                GeneratorAttribute::List(CollectionAttribute::new(CollectionKind::List, a))
            }
            AttributeKind::Map(a) => {
                GeneratorAttribute::Map(CollectionAttribute::new(CollectionKind::Map, a))
            }
            AttributeKind::Set(a) => {
                GeneratorAttribute::Set(CollectionAttribute::new(CollectionKind::Set, a))
            }
            AttributeKind::Object(a) => GeneratorAttribute::Object(ObjectAttribute::new(a)),
            AttributeKind::ListNested(a) => GeneratorAttribute::ListNested(
                NestedCollectionAttribute::new(CollectionKind::List, &spec.name, a)?,
            ),
            AttributeKind::MapNested(a) => GeneratorAttribute::MapNested(
                NestedCollectionAttribute::new(CollectionKind::Map, &spec.name, a)?,
            ),
            AttributeKind::SetNested(a) => GeneratorAttribute::SetNested(
                NestedCollectionAttribute::new(CollectionKind::Set, &spec.name, a)?,
            ),
            AttributeKind::SingleNested(a) => {
                GeneratorAttribute::SingleNested(SingleNestedAttribute::new(a)?)
            }
        };
        Ok(attribute)
    }

    pub fn generator_schema_type(&self) -> GeneratorSchemaType {
        match self {
            GeneratorAttribute::Bool(_) => GeneratorSchemaType::BoolAttribute,
            GeneratorAttribute::Float64(_) => GeneratorSchemaType::Float64Attribute,
            GeneratorAttribute::Int64(_) => GeneratorSchemaType::Int64Attribute,
            GeneratorAttribute::Number(_) => GeneratorSchemaType::NumberAttribute,
            GeneratorAttribute::String(_) => GeneratorSchemaType::StringAttribute,
            GeneratorAttribute::List(_) => GeneratorSchemaType::ListAttribute,
            GeneratorAttribute::Map(_) => GeneratorSchemaType::MapAttribute,
            GeneratorAttribute::Set(_) => GeneratorSchemaType::SetAttribute,
            GeneratorAttribute::Object(_) => GeneratorSchemaType::ObjectAttribute,
            GeneratorAttribute::ListNested(_) => GeneratorSchemaType::ListNestedAttribute,
            GeneratorAttribute::MapNested(_) => GeneratorSchemaType::MapNestedAttribute,
            GeneratorAttribute::SetNested(_) => GeneratorSchemaType::SetNestedAttribute,
            GeneratorAttribute::SingleNested(_) => GeneratorSchemaType::SingleNestedAttribute,
        }
    }

    /// Schema struct literal entry, `"<name>": schema.<Kind>Attribute{...},`.
    pub fn schema(&self, name: &str, templates: &Templates) -> Result<String> {
        match self {
            GeneratorAttribute::Bool(a)
            | GeneratorAttribute::Float64(a)
            | GeneratorAttribute::Int64(a)
            | GeneratorAttribute::Number(a)
            | GeneratorAttribute::String(a) => Ok(a.schema(name)),
            GeneratorAttribute::List(a) | GeneratorAttribute::Map(a) | GeneratorAttribute::Set(a) => {
                a.schema(name)
            }
            GeneratorAttribute::Object(a) => a.schema(name),
            GeneratorAttribute::ListNested(a)
            | GeneratorAttribute::MapNested(a)
            | GeneratorAttribute::SetNested(a) => a.schema(name, templates),
            GeneratorAttribute::SingleNested(a) => a.schema(name, templates),
        }
    }

    pub fn imports(&self) -> Imports {
        match self {
            GeneratorAttribute::Bool(a)
            | GeneratorAttribute::Float64(a)
            | GeneratorAttribute::Int64(a)
            | GeneratorAttribute::Number(a)
            | GeneratorAttribute::String(a) => a.imports(),
            GeneratorAttribute::List(a) | GeneratorAttribute::Map(a) | GeneratorAttribute::Set(a) => {
                a.imports()
            }
            GeneratorAttribute::Object(a) => a.imports(),
            GeneratorAttribute::ListNested(a)
            | GeneratorAttribute::MapNested(a)
            | GeneratorAttribute::SetNested(a) => a.imports(),
            GeneratorAttribute::SingleNested(a) => a.imports(),
        }
    }

    pub fn model_field(&self, name: &str) -> ModelField {
        match self {
            GeneratorAttribute::Bool(a)
            | GeneratorAttribute::Float64(a)
            | GeneratorAttribute::Int64(a)
            | GeneratorAttribute::Number(a)
            | GeneratorAttribute::String(a) => a.model_field(name),
            GeneratorAttribute::List(a) | GeneratorAttribute::Map(a) | GeneratorAttribute::Set(a) => {
                a.model_field(name)
            }
            GeneratorAttribute::Object(a) => a.model_field(name),
            GeneratorAttribute::ListNested(a)
            | GeneratorAttribute::MapNested(a)
            | GeneratorAttribute::SetNested(a) => a.model_field(name),
            GeneratorAttribute::SingleNested(a) => a.model_field(name),
        }
    }

    /// Attr type expression used for this member inside a parent object type.
    pub fn attr_type(&self, name: &str) -> Result<String> {
        match self {
            GeneratorAttribute::Bool(a)
            | GeneratorAttribute::Float64(a)
            | GeneratorAttribute::Int64(a)
            | GeneratorAttribute::Number(a)
            | GeneratorAttribute::String(a) => Ok(a.attr_type(name)),
            GeneratorAttribute::List(a) | GeneratorAttribute::Map(a) | GeneratorAttribute::Set(a) => {
                a.attr_type(name)
            }
            GeneratorAttribute::Object(a) => a.attr_type(name),
            GeneratorAttribute::ListNested(a)
            | GeneratorAttribute::MapNested(a)
            | GeneratorAttribute::SetNested(a) => Ok(a.attr_type(name)),
            GeneratorAttribute::SingleNested(a) => Ok(a.attr_type(name)),
        }
    }

    /// Attr value type used for this member inside a parent object value.
    pub fn attr_value(&self, name: &str) -> String {
        match self {
            GeneratorAttribute::Bool(a)
            | GeneratorAttribute::Float64(a)
            | GeneratorAttribute::Int64(a)
            | GeneratorAttribute::Number(a)
            | GeneratorAttribute::String(a) => a.attr_value(name),
            GeneratorAttribute::List(a) | GeneratorAttribute::Map(a) | GeneratorAttribute::Set(a) => {
                a.attr_value(name)
            }
            GeneratorAttribute::Object(a) => a.attr_value(name),
            GeneratorAttribute::ListNested(a)
            | GeneratorAttribute::MapNested(a)
            | GeneratorAttribute::SetNested(a) => a.attr_value(),
            GeneratorAttribute::SingleNested(a) => a.attr_value(name),
        }
    }

    /// Conversion towards the external representation. `None` when the kind
    /// has no conversion.
    pub fn to(&self) -> Result<Option<ToFromConversion>> {
        match self {
            GeneratorAttribute::Bool(a)
            | GeneratorAttribute::Float64(a)
            | GeneratorAttribute::Int64(a)
            | GeneratorAttribute::Number(a)
            | GeneratorAttribute::String(a) => Ok(Some(a.to())),
            GeneratorAttribute::List(a) | GeneratorAttribute::Map(a) | GeneratorAttribute::Set(a) => {
                a.to().map(Some)
            }
            GeneratorAttribute::Object(a) => Ok(a.to()),
            GeneratorAttribute::ListNested(a)
            | GeneratorAttribute::MapNested(a)
            | GeneratorAttribute::SetNested(a) => a.to(),
            GeneratorAttribute::SingleNested(a) => Ok(a.to()),
        }
    }

    /// Conversion from the external representation.
    pub fn from(&self) -> Result<Option<ToFromConversion>> {
        match self {
            GeneratorAttribute::Bool(a)
            | GeneratorAttribute::Float64(a)
            | GeneratorAttribute::Int64(a)
            | GeneratorAttribute::Number(a)
            | GeneratorAttribute::String(a) => Ok(Some(a.from())),
            GeneratorAttribute::List(a) | GeneratorAttribute::Map(a) | GeneratorAttribute::Set(a) => {
                a.from().map(Some)
            }
            GeneratorAttribute::Object(a) => Ok(a.from()),
            GeneratorAttribute::ListNested(a)
            | GeneratorAttribute::MapNested(a)
            | GeneratorAttribute::SetNested(a) => a.from(),
            GeneratorAttribute::SingleNested(a) => Ok(a.from()),
        }
    }

    /// Element type and value function of list, map and set attributes.
    pub fn collection_type(&self) -> Result<Option<CollectionFields>> {
        match self {
            GeneratorAttribute::List(a) | GeneratorAttribute::Map(a) | GeneratorAttribute::Set(a) => {
                a.collection_type()
            }
            _ => Ok(None),
        }
    }

    pub fn custom_type_and_value(&self, name: &str, templates: &Templates) -> Result<String> {
        match self {
            GeneratorAttribute::Bool(a)
            | GeneratorAttribute::Float64(a)
            | GeneratorAttribute::Int64(a)
            | GeneratorAttribute::Number(a)
            | GeneratorAttribute::String(a) => a.custom_type_and_value(name, templates),
            GeneratorAttribute::List(a) | GeneratorAttribute::Map(a) | GeneratorAttribute::Set(a) => {
                a.custom_type_and_value(name, templates)
            }
            GeneratorAttribute::Object(a) => a.custom_type_and_value(name, templates),
            GeneratorAttribute::ListNested(a)
            | GeneratorAttribute::MapNested(a)
            | GeneratorAttribute::SetNested(a) => a.custom_type_and_value(name, templates),
            GeneratorAttribute::SingleNested(a) => a.custom_type_and_value(name, templates),
        }
    }

    pub fn to_from_functions(&self, name: &str, templates: &Templates) -> Result<String> {
        match self {
            GeneratorAttribute::Bool(a)
            | GeneratorAttribute::Float64(a)
            | GeneratorAttribute::Int64(a)
            | GeneratorAttribute::Number(a)
            | GeneratorAttribute::String(a) => a.to_from_functions(name, templates),
            GeneratorAttribute::List(a) | GeneratorAttribute::Map(a) | GeneratorAttribute::Set(a) => {
                a.to_from_functions(name, templates)
            }
            GeneratorAttribute::Object(a) => a.to_from_functions(name, templates),
            GeneratorAttribute::ListNested(a)
            | GeneratorAttribute::MapNested(a)
            | GeneratorAttribute::SetNested(a) => a.to_from_functions(name, templates),
            GeneratorAttribute::SingleNested(a) => a.to_from_functions(name, templates),
        }
    }

    /// Model structs of the nested objects below this attribute.
    pub fn models(&self, name: &str) -> Vec<Model> {
        match self {
            GeneratorAttribute::ListNested(a)
            | GeneratorAttribute::MapNested(a)
            | GeneratorAttribute::SetNested(a) => a.models(name),
            GeneratorAttribute::SingleNested(a) => a.models(name),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;
    use crate::test_utils::attribute_from_json as attribute;
    use serde_json::json;

    #[test]
    fn test_dispatch_exhaustiveness() {
        let cases = [
            ("bool", json!({}), GeneratorSchemaType::BoolAttribute),
            ("float64", json!({}), GeneratorSchemaType::Float64Attribute),
            ("int64", json!({}), GeneratorSchemaType::Int64Attribute),
            ("number", json!({}), GeneratorSchemaType::NumberAttribute),
            ("string", json!({}), GeneratorSchemaType::StringAttribute),
            ("list", json!({}), GeneratorSchemaType::ListAttribute),
            ("map", json!({}), GeneratorSchemaType::MapAttribute),
            ("set", json!({}), GeneratorSchemaType::SetAttribute),
            ("object", json!({}), GeneratorSchemaType::ObjectAttribute),
            (
                "list_nested",
                json!({"nested_object": {}}),
                GeneratorSchemaType::ListNestedAttribute,
            ),
            (
                "map_nested",
                json!({"nested_object": {}}),
                GeneratorSchemaType::MapNestedAttribute,
            ),
            (
                "set_nested",
                json!({"nested_object": {}}),
                GeneratorSchemaType::SetNestedAttribute,
            ),
            ("single_nested", json!({}), GeneratorSchemaType::SingleNestedAttribute),
        ];
        for (field, payload, expected) in cases.iter() {
            let mut spec = json!({"name": "member"});
            spec[*field] = payload.clone();
            let attr = attribute(spec).unwrap();
            assert_eq!(attr.generator_schema_type(), *expected, "{}", field);
        }
    }

    #[test]
    fn test_dispatch_rejection() {
        let spec = AttributeSpec {
            name: "orphan".to_string(),
            ..Default::default()
        };
        match GeneratorAttribute::new(&spec) {
            Err(Error::UnknownKind { member, spec: text }) => {
                assert_eq!(member, "attribute");
                assert_eq!(text, format!("{:?}", spec));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_equality_is_variant_strict() {
        let b = attribute(json!({"name": "x", "bool": {}})).unwrap();
        let l = attribute(json!({"name": "x", "list": {}})).unwrap();
        let i = attribute(json!({"name": "x", "int64": {}})).unwrap();
        assert_ne!(b, l);
        assert_ne!(b, i);
        assert_eq!(b, attribute(json!({"name": "x", "bool": {}})).unwrap());
        assert_ne!(
            b,
            attribute(json!({"name": "x", "bool": {"sensitive": true}})).unwrap()
        );
    }

    #[test]
    fn test_schema_is_deterministic() {
        let templates = Templates::new().unwrap();
        let attr = attribute(json!({
            "name": "rules",
            "list_nested": {"nested_object": {"attributes": [
                {"name": "zeta", "string": {}},
                {"name": "alpha", "bool": {}},
                {"name": "mid", "single_nested": {"attributes": [{"name": "x", "int64": {}}]}}
            ]}}
        }))
        .unwrap();
        let first = attr.schema("rules", &templates).unwrap();
        assert_eq!(first, attr.schema("rules", &templates).unwrap());
        let alpha = first.find("\"alpha\"").unwrap();
        let mid = first.find("\"mid\"").unwrap();
        let zeta = first.find("\"zeta\"").unwrap();
        assert!(alpha < mid && mid < zeta);
    }

    #[test]
    fn test_set_nested_conversion_unimplemented() {
        let attr = attribute(json!({"name": "s", "set_nested": {"nested_object": {}}})).unwrap();
        assert!(matches!(attr.to(), Err(Error::UnimplementedFeature(_))));
        assert!(matches!(attr.from(), Err(Error::UnimplementedFeature(_))));

        let list = attribute(json!({"name": "l", "list_nested": {"nested_object": {}}})).unwrap();
        assert!(matches!(list.to(), Ok(None)));
    }

    #[test]
    fn test_nested_child_failure_is_reported() {
        let err = attribute(json!({
            "name": "outer",
            "list_nested": {"nested_object": {"attributes": [
                {"name": "inner", "single_nested": {"attributes": [{"name": "deepest"}]}}
            ]}}
        }))
        .unwrap_err();
        match err {
            Error::UnknownKind { spec, .. } => assert!(spec.contains("deepest")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_collection_type() {
        let list = attribute(json!({"name": "l", "list": {"element_type": {"bool": {}}}})).unwrap();
        assert_eq!(
            list.collection_type().unwrap().unwrap().type_value_func,
            "types.ListValueFrom"
        );
        let b = attribute(json!({"name": "b", "bool": {}})).unwrap();
        assert_eq!(b.collection_type().unwrap(), None);
    }
}
