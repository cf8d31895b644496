//! Top level schemas.
//!
//! A [`GeneratorSchema`] holds the attributes and blocks of one resource, data
//! source or provider and renders the four outputs of a generated file: the
//! schema function, the model structs, the custom types and the converters.

use crate::attribute::GeneratorAttributes;
use crate::block::GeneratorBlocks;
use crate::error::Result;
use crate::identifier::go_quote;
use crate::imports::{Imports, CONTEXT_IMPORT};
use crate::model::Model;
use crate::nested::{attributes_schema, blocks_schema, members, new_members};
use crate::spec::{self, SchemaItem, Specification};
use crate::templates::{Templates, SCHEMA};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratorSchema {
    pub attributes: GeneratorAttributes,
    pub blocks: GeneratorBlocks,
    pub description: Option<String>,
    pub markdown_description: Option<String>,
    pub deprecation_message: Option<String>,
}

#[derive(Serialize)]
struct SchemaContext<'a> {
    func_name: &'a str,
    attributes: String,
    blocks: String,
    description: Option<String>,
    markdown_description: Option<String>,
    deprecation_message: Option<String>,
}

impl GeneratorSchema {
    pub fn new(spec: &spec::Schema) -> Result<Self> {
        let (attributes, blocks) = new_members(&spec.attributes, &spec.blocks)?;
        Ok(Self {
            attributes,
            blocks,
            description: spec.description.clone(),
            markdown_description: spec.markdown_description.clone(),
            deprecation_message: spec.deprecation_message.clone(),
        })
    }

    /// Go function `func <func_name>(ctx context.Context) schema.Schema`.
    pub fn schema(&self, func_name: &str, templates: &Templates) -> Result<String> {
        templates.render(
            SCHEMA,
            &SchemaContext {
                func_name,
                attributes: attributes_schema(&self.attributes, templates)?,
                blocks: blocks_schema(&self.blocks, templates)?,
                description: self.description.as_deref().map(go_quote),
                markdown_description: self.markdown_description.as_deref().map(go_quote),
                deprecation_message: self.deprecation_message.as_deref().map(go_quote),
            },
        )
    }

    /// The model of the schema itself followed by those of nested objects,
    /// depth first in key order.
    pub fn models(&self, name: &str) -> Vec<Model> {
        let members = members(&self.attributes, Some(&self.blocks));
        let fields = members
            .iter()
            .map(|(child, member)| member.model_field(child))
            .collect();
        let mut models = vec![Model::new(name, fields)];
        for (child, member) in &members {
            models.extend(member.models(child));
        }
        models
    }

    /// Imports of the schema function and model structs.
    pub fn imports(&self) -> Imports {
        let mut imports = Imports::new();
        imports.add_path(CONTEXT_IMPORT);
        for (_, member) in members(&self.attributes, Some(&self.blocks)) {
            imports.append(&member.imports());
        }
        imports
    }

    pub fn custom_type_values(&self, templates: &Templates) -> Result<String> {
        let mut s = String::new();
        for (name, member) in members(&self.attributes, Some(&self.blocks)) {
            s.push_str(&member.custom_type_and_value(name, templates)?);
        }
        Ok(s)
    }

    pub fn to_from_functions(&self, templates: &Templates) -> Result<String> {
        let mut s = String::new();
        for (name, member) in members(&self.attributes, Some(&self.blocks)) {
            s.push_str(&member.to_from_functions(name, templates)?);
        }
        Ok(s)
    }
}

/// Schemas keyed by resource, data source or provider name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratorSchemas {
    pub schemas: BTreeMap<String, GeneratorSchema>,
}

impl GeneratorSchemas {
    /// Builds every schema of `items`. The first failing item aborts the batch.
    pub fn new(items: &[SchemaItem]) -> Result<Self> {
        let mut schemas = BTreeMap::new();
        for item in items {
            tracing::debug!("building schema {}", item.name);
            schemas.insert(item.name.clone(), GeneratorSchema::new(&item.schema)?);
        }
        Ok(Self { schemas })
    }

    /// Resource schemas of `spec`.
    pub fn resources(spec: &Specification) -> Result<Self> {
        Self::new(&spec.resources)
    }

    /// Data source schemas of `spec`.
    pub fn data_sources(spec: &Specification) -> Result<Self> {
        Self::new(&spec.datasources)
    }

    /// Provider schema of `spec`, empty when the provider has none.
    pub fn provider(spec: &Specification) -> Result<Self> {
        let mut schemas = BTreeMap::new();
        if let Some(provider) = &spec.provider {
            if let Some(schema) = &provider.schema {
                schemas.insert(provider.name.clone(), GeneratorSchema::new(schema)?);
            }
        }
        Ok(Self { schemas })
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &GeneratorSchema)> {
        self.schemas.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::imports::{Import, TYPES_IMPORT};
    use crate::test_utils::schema_from_json;
    use serde_json::json;

    fn schema(v: serde_json::Value) -> GeneratorSchema {
        schema_from_json(v).unwrap()
    }

    #[test]
    fn test_enabled_resource_schema() {
        let templates = Templates::new().unwrap();
        let s = schema(json!({
            "attributes": [{"name": "enabled", "bool": {"computed_optional_required": "optional", "sensitive": true}}],
            "description": "An \"example\" resource."
        }));
        assert_eq!(
            s.schema("ExampleResourceSchema", &templates).unwrap(),
            "func ExampleResourceSchema(ctx context.Context) schema.Schema {\n\
             \treturn schema.Schema{\n\
             \t\tAttributes: map[string]schema.Attribute{\n\
             \"enabled\": schema.BoolAttribute{\n\
             Optional: true,\n\
             Sensitive: true,\n\
             },\n\
             \t\t},\n\
             \t\tDescription: \"An \\\"example\\\" resource.\",\n\
             \t}\n\
             }\n"
        );
        assert_eq!(
            s.imports().all(),
            &[Import::new(CONTEXT_IMPORT), Import::new(TYPES_IMPORT)]
        );
        let models = s.models("example");
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].fields[0].to_string(), "Enabled types.Bool `tfsdk:\"enabled\"`");
    }

    #[test]
    fn test_models_cover_blocks() {
        let s = schema(json!({
            "attributes": [{"name": "name", "string": {}}],
            "blocks": [{"name": "network", "list_nested": {"nested_object": {
                "attributes": [{"name": "cidr", "string": {}}]
            }}}]
        }));
        let models = s.models("server");
        let names: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["ServerModel", "NetworkModel"]);
        assert_eq!(models[0].fields[1].value_type, "types.List");
    }

    #[test]
    fn test_custom_type_values_are_ordered() {
        let templates = Templates::new().unwrap();
        let s = schema(json!({
            "attributes": [
                {"name": "zone", "single_nested": {}},
                {"name": "area", "single_nested": {}}
            ]
        }));
        let out = s.custom_type_values(&templates).unwrap();
        let area = out.find("type AreaType struct").unwrap();
        let zone = out.find("type ZoneType struct").unwrap();
        assert!(area < zone);
        assert_eq!(out, s.custom_type_values(&templates).unwrap());
        assert_eq!(s.to_from_functions(&templates).unwrap(), "");
    }

    #[test]
    fn test_batch_aborts_on_first_error() {
        let items: Vec<SchemaItem> = serde_json::from_value(json!([
            {"name": "good", "schema": {"attributes": [{"name": "a", "bool": {}}]}},
            {"name": "bad", "schema": {"attributes": [{"name": "b"}]}}
        ]))
        .unwrap();
        assert!(GeneratorSchemas::new(&items).is_err());
        let ok = GeneratorSchemas::new(&items[..1]).unwrap();
        assert_eq!(ok.iter().map(|(n, _)| n.as_str()).collect::<Vec<_>>(), vec!["good"]);
    }

    #[test]
    fn test_duplicate_member_names_are_rejected() {
        let spec: spec::Schema = serde_json::from_value(json!({
            "attributes": [{"name": "network", "string": {}}],
            "blocks": [{"name": "network", "list_nested": {"nested_object": {}}}]
        }))
        .unwrap();
        assert!(matches!(
            GeneratorSchema::new(&spec),
            Err(crate::error::Error::DuplicateMember { .. })
        ));

        let items: Vec<SchemaItem> = serde_json::from_value(json!([
            {"name": "twice", "schema": {"blocks": [
                {"name": "disk", "single_nested": {}},
                {"name": "disk", "single_nested": {}}
            ]}}
        ]))
        .unwrap();
        assert!(GeneratorSchemas::new(&items).is_err());
    }

    #[test]
    fn test_trees_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeneratorSchemas>();
        assert_send_sync::<Templates>();
    }

    #[test]
    fn test_provider_without_schema() {
        let spec: Specification = serde_json::from_value(json!({"provider": {"name": "example"}})).unwrap();
        assert!(GeneratorSchemas::provider(&spec).unwrap().is_empty());
    }
}
