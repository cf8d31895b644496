//! Generated blocks.
//!
//! Blocks follow the nested attribute contract but may hold child blocks, and
//! carry no computed/optional/required, sensitivity or default.

mod nested_collection;
mod single_nested;

pub use nested_collection::NestedCollectionBlock;
pub use single_nested::SingleNestedBlock;

use crate::attribute::{CollectionKind, GeneratorSchemaType};
use crate::error::Result;
use crate::imports::Imports;
use crate::model::{Model, ModelField};
use crate::spec::{BlockKind, BlockSpec};
use crate::templates::Templates;
use crate::to_from::ToFromConversion;
use std::collections::BTreeMap;

/// Blocks of one schema level, iterated in key order.
pub type GeneratorBlocks = BTreeMap<String, GeneratorBlock>;

#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorBlock {
    ListNested(NestedCollectionBlock),
    SetNested(NestedCollectionBlock),
    SingleNested(SingleNestedBlock),
}

impl GeneratorBlock {
    pub fn new(spec: &BlockSpec) -> Result<Self> {
        tracing::debug!("building block {}", spec.name);
        let block = match spec.kind()? {
            BlockKind::ListNested(b) => GeneratorBlock::ListNested(NestedCollectionBlock::new(
                CollectionKind::List,
                &spec.name,
                b,
            )?),
            BlockKind::SetNested(b) => GeneratorBlock::SetNested(NestedCollectionBlock::new(
                CollectionKind::Set,
                &spec.name,
                b,
            )?),
            BlockKind::SingleNested(b) => GeneratorBlock::SingleNested(SingleNestedBlock::new(b)?),
        };
        Ok(block)
    }

    pub fn generator_schema_type(&self) -> GeneratorSchemaType {
        match self {
            GeneratorBlock::ListNested(_) => GeneratorSchemaType::ListNestedBlock,
            GeneratorBlock::SetNested(_) => GeneratorSchemaType::SetNestedBlock,
            GeneratorBlock::SingleNested(_) => GeneratorSchemaType::SingleNestedBlock,
        }
    }

    pub fn schema(&self, name: &str, templates: &Templates) -> Result<String> {
        match self {
            GeneratorBlock::ListNested(b) | GeneratorBlock::SetNested(b) => b.schema(name, templates),
            GeneratorBlock::SingleNested(b) => b.schema(name, templates),
        }
    }

    pub fn imports(&self) -> Imports {
        match self {
            GeneratorBlock::ListNested(b) | GeneratorBlock::SetNested(b) => b.imports(),
            GeneratorBlock::SingleNested(b) => b.imports(),
        }
    }

    pub fn model_field(&self, name: &str) -> ModelField {
        match self {
            GeneratorBlock::ListNested(b) | GeneratorBlock::SetNested(b) => b.model_field(name),
            GeneratorBlock::SingleNested(b) => b.model_field(name),
        }
    }

    pub fn attr_type(&self, name: &str) -> String {
        match self {
            GeneratorBlock::ListNested(b) | GeneratorBlock::SetNested(b) => b.attr_type(name),
            GeneratorBlock::SingleNested(b) => b.attr_type(name),
        }
    }

    pub fn attr_value(&self, name: &str) -> String {
        match self {
            GeneratorBlock::ListNested(b) | GeneratorBlock::SetNested(b) => b.attr_value(),
            GeneratorBlock::SingleNested(b) => b.attr_value(name),
        }
    }

    /// Only externally typed single nested blocks convert.
    pub fn to(&self) -> Option<ToFromConversion> {
        match self {
            GeneratorBlock::SingleNested(b) => b.to(),
            _ => None,
        }
    }

    pub fn from(&self) -> Option<ToFromConversion> {
        match self {
            GeneratorBlock::SingleNested(b) => b.from(),
            _ => None,
        }
    }

    pub fn custom_type_and_value(&self, name: &str, templates: &Templates) -> Result<String> {
        match self {
            GeneratorBlock::ListNested(b) | GeneratorBlock::SetNested(b) => {
                b.custom_type_and_value(name, templates)
            }
            GeneratorBlock::SingleNested(b) => b.custom_type_and_value(name, templates),
        }
    }

    pub fn to_from_functions(&self, name: &str, templates: &Templates) -> Result<String> {
        match self {
            GeneratorBlock::ListNested(b) | GeneratorBlock::SetNested(b) => {
                b.to_from_functions(name, templates)
            }
            GeneratorBlock::SingleNested(b) => b.to_from_functions(name, templates),
        }
    }

    pub fn models(&self, name: &str) -> Vec<Model> {
        match self {
            GeneratorBlock::ListNested(b) | GeneratorBlock::SetNested(b) => b.models(name),
            GeneratorBlock::SingleNested(b) => b.models(name),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;
    use crate::test_utils::block_from_json as block;
    use serde_json::json;

    #[test]
    fn test_dispatch_exhaustiveness() {
        let cases = [
            ("list_nested", json!({"nested_object": {}}), GeneratorSchemaType::ListNestedBlock),
            ("set_nested", json!({"nested_object": {}}), GeneratorSchemaType::SetNestedBlock),
            ("single_nested", json!({}), GeneratorSchemaType::SingleNestedBlock),
        ];
        for (field, payload, expected) in cases.iter() {
            let mut spec = json!({"name": "member"});
            spec[*field] = payload.clone();
            assert_eq!(block(spec).unwrap().generator_schema_type(), *expected);
        }
    }

    #[test]
    fn test_dispatch_rejection() {
        let err = block(json!({"name": "empty"})).unwrap_err();
        match err {
            Error::UnknownKind { member, spec } => {
                assert_eq!(member, "block");
                assert!(spec.contains("empty"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_equality_is_variant_strict() {
        let list = block(json!({"name": "b", "list_nested": {"nested_object": {}}})).unwrap();
        let set = block(json!({"name": "b", "set_nested": {"nested_object": {}}})).unwrap();
        assert_ne!(list, set);
        assert_eq!(
            list,
            block(json!({"name": "b", "list_nested": {"nested_object": {}}})).unwrap()
        );
    }

    #[test]
    fn test_blocks_nest_blocks() {
        let templates = Templates::new().unwrap();
        let b = block(json!({
            "name": "outer",
            "single_nested": {"blocks": [{"name": "inner", "list_nested": {"nested_object": {
                "blocks": [{"name": "innermost", "single_nested": {}}]
            }}}]}
        }))
        .unwrap();
        let schema = b.schema("outer", &templates).unwrap();
        assert!(schema.contains("\"inner\": schema.ListNestedBlock{"));
        assert!(schema.contains("\"innermost\": schema.SingleNestedBlock{"));
        let names: Vec<String> = b.models("outer").into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["OuterModel", "InnerModel", "InnermostModel"]);
    }
}
