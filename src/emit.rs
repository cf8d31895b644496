// SPDX-License-Identifier: MIT OR Apache-2.0

//! Go source emission.
//!
//! One file is written per schema: the header comment, the package clause, the
//! import block, the schema function, the model structs, then any custom
//! types and converter functions.

use crate::config::{CodeGeneratorConfig, GeneratorType};
use crate::custom_type::custom_value_imports;
use crate::error::Result;
use crate::identifier::to_pascal_case;
use crate::imports::{Import, Imports};
use crate::model::render_models;
use crate::schema::{GeneratorSchema, GeneratorSchemas};
use crate::templates::Templates;
use crate::to_from::to_from_imports;
use serde_generate::indent::{IndentConfig, IndentedWriter};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

const GENERATED_MARKER: &str = "// Code generated by tfgogen. DO NOT EDIT.";

const HEADER_WIDTH: usize = 77;

/// Main configuration object for Go code generation.
pub struct CodeGenerator<'a> {
    config: &'a CodeGeneratorConfig,
    templates: &'a Templates,
}

/// Rendered parts of one generated file.
struct SchemaSource {
    package: String,
    imports: Imports,
    schema: String,
    models: String,
    custom_types: String,
    to_from: String,
}

/// Shared state for writing a Go source file.
struct GoEmitter<'a, T> {
    out: IndentedWriter<T>,
    generator: &'a CodeGenerator<'a>,
}

impl<'a> CodeGenerator<'a> {
    pub fn new(config: &'a CodeGeneratorConfig, templates: &'a Templates) -> Self {
        Self { config, templates }
    }

    /// Writes the Go file of the schema `name` to `out`.
    pub fn output(&self, out: &mut dyn Write, name: &str, schema: &GeneratorSchema) -> Result<()> {
        let source = self.render(name, schema)?;
        let mut emitter = GoEmitter {
            out: IndentedWriter::new(out, IndentConfig::Tab),
            generator: self,
        };
        emitter.output_preamble(&source.package)?;
        emitter.output_imports(&source.imports)?;
        emitter.output_body(&source)?;
        Ok(())
    }

    /// Go files of every schema in `schemas`, keyed by their relative path,
    /// e.g. `resource_thing/thing_resource_gen.go`.
    pub fn output_all(&self, schemas: &GeneratorSchemas) -> Result<BTreeMap<PathBuf, String>> {
        let mut files = BTreeMap::new();
        for (name, schema) in schemas.iter() {
            let mut buffer = Vec::new();
            self.output(&mut buffer, name, schema)?;
            let source = String::from_utf8(buffer)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            let path = PathBuf::from(self.config.package_for(name)).join(format!(
                "{}_{}_gen.go",
                name,
                file_kind(self.config.generator_type())
            ));
            tracing::debug!("generated {}", path.display());
            files.insert(path, source);
        }
        Ok(files)
    }

    fn render(&self, name: &str, schema: &GeneratorSchema) -> Result<SchemaSource> {
        let generator_type = self.config.generator_type();
        let func_name = format!("{}{}", to_pascal_case(name), generator_type.func_suffix());
        let schema_text = schema.schema(&func_name, self.templates)?;
        let models = render_models(&schema.models(name))?;
        let custom_types = schema.custom_type_values(self.templates)?;
        let to_from = schema.to_from_functions(self.templates)?;

        let mut imports = schema.imports();
        imports.add_path(generator_type.schema_import());
        if !custom_types.is_empty() {
            imports.append(&custom_value_imports());
        }
        if !to_from.is_empty() {
            imports.append(&to_from_imports());
        }

        Ok(SchemaSource {
            package: self.config.package_for(name),
            imports,
            schema: schema_text,
            models,
            custom_types,
            to_from,
        })
    }
}

fn file_kind(generator_type: GeneratorType) -> &'static str {
    match generator_type {
        GeneratorType::Resource => "resource",
        GeneratorType::DataSource => "data_source",
        GeneratorType::Provider => "provider",
    }
}

fn is_standard_library(import: &Import) -> bool {
    let first = import.path.split('/').next().unwrap_or_default();
    !first.contains('.')
}

impl<'a, T> GoEmitter<'a, T>
where
    T: std::io::Write,
{
    fn output_preamble(&mut self, package: &str) -> std::io::Result<()> {
        if let Some(header) = &self.generator.config.header {
            for line in textwrap::wrap(header.trim_end(), HEADER_WIDTH) {
                if line.is_empty() {
                    writeln!(self.out, "//")?;
                } else {
                    writeln!(self.out, "// {}", line)?;
                }
            }
            writeln!(self.out, "//")?;
        }
        writeln!(self.out, "{}", GENERATED_MARKER)?;
        writeln!(self.out)?;
        writeln!(self.out, "package {}", package)?;
        writeln!(self.out)
    }

    /// Standard library imports first, then the rest, each group sorted.
    fn output_imports(&mut self, imports: &Imports) -> std::io::Result<()> {
        let (mut std_imports, mut other_imports): (Vec<&Import>, Vec<&Import>) =
            imports.into_iter().partition(|i| is_standard_library(i));
        std_imports.sort_by(|a, b| a.path.cmp(&b.path));
        other_imports.sort_by(|a, b| a.path.cmp(&b.path));

        writeln!(self.out, "import (")?;
        self.out.indent();
        for import in &std_imports {
            writeln!(self.out, "{}", import)?;
        }
        if !std_imports.is_empty() && !other_imports.is_empty() {
            self.out.unindent();
            writeln!(self.out)?;
            self.out.indent();
        }
        for import in &other_imports {
            writeln!(self.out, "{}", import)?;
        }
        self.out.unindent();
        writeln!(self.out, ")")?;
        writeln!(self.out)
    }

    fn output_body(&mut self, source: &SchemaSource) -> std::io::Result<()> {
        write!(self.out, "{}", source.schema)?;
        writeln!(self.out)?;
        write!(self.out, "{}", source.models)?;
        if !source.custom_types.is_empty() {
            write!(self.out, "{}", source.custom_types)?;
            writeln!(self.out)?;
        }
        if !source.to_from.is_empty() {
            write!(self.out, "{}", source.to_from)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::{fixture, schema_from_json};
    use serde_json::json;
    use tempfile::tempdir;

    fn enabled_schema() -> GeneratorSchema {
        schema_from_json(json!({
            "attributes": [{"name": "enabled", "bool": {"computed_optional_required": "optional", "sensitive": true}}]
        }))
        .unwrap()
    }

    #[test]
    fn test_output_resource_file() {
        let templates = Templates::new().unwrap();
        let config = CodeGeneratorConfig::new().with_header("Copyright Example Corp.");
        let generator = CodeGenerator::new(&config, &templates);
        let mut out = Vec::new();
        generator.output(&mut out, "example", &enabled_schema()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "// Copyright Example Corp.\n\
             //\n\
             // Code generated by tfgogen. DO NOT EDIT.\n\
             \n\
             package resource_example\n\
             \n\
             import (\n\
             \t\"context\"\n\
             \n\
             \t\"github.com/hashicorp/terraform-plugin-framework/resource/schema\"\n\
             \t\"github.com/hashicorp/terraform-plugin-framework/types\"\n\
             )\n\
             \n\
             func ExampleResourceSchema(ctx context.Context) schema.Schema {\n\
             \treturn schema.Schema{\n\
             \t\tAttributes: map[string]schema.Attribute{\n\
             \"enabled\": schema.BoolAttribute{\n\
             Optional: true,\n\
             Sensitive: true,\n\
             },\n\
             \t\t},\n\
             \t}\n\
             }\n\
             \n\
             type ExampleModel struct {\n\
             \tEnabled types.Bool `tfsdk:\"enabled\"`\n\
             }\n\
             \n"
        );
    }

    #[test]
    fn test_custom_types_bring_their_imports() {
        let templates = Templates::new().unwrap();
        let config = CodeGeneratorConfig::new()
            .with_generator_type(GeneratorType::DataSource)
            .with_package_name("generated");
        let schema = schema_from_json(json!({
            "attributes": [{"name": "settings", "single_nested": {
                "associated_external_type": {"import": {"path": "example.com/apisdk"}, "type": "*apisdk.Settings"},
                "attributes": [{"name": "level", "int64": {}}]
            }}]
        }))
        .unwrap();
        let mut out = Vec::new();
        CodeGenerator::new(&config, &templates)
            .output(&mut out, "thing", &schema)
            .unwrap();
        let source = String::from_utf8(out).unwrap();
        assert!(source.contains("package generated\n"));
        assert!(source.contains("\t\"fmt\"\n"));
        assert!(source.contains("\t\"example.com/apisdk\"\n"));
        assert!(source.contains("\t\"github.com/hashicorp/terraform-plugin-framework/datasource/schema\"\n"));
        assert!(source.contains("func ThingDataSourceSchema(ctx context.Context) schema.Schema {"));
        assert!(source.contains("type SettingsValue struct {"));
        assert!(source.contains("func (v SettingsValue) ToApisdkSettings(ctx context.Context)"));
    }

    #[test]
    fn test_external_number_imports_math_big() {
        let templates = Templates::new().unwrap();
        let config = CodeGeneratorConfig::new();
        let schema = schema_from_json(json!({
            "attributes": [{"name": "price", "number": {
                "computed_optional_required": "optional",
                "associated_external_type": {"import": {"path": "example.com/apisdk"}, "type": "*apisdk.Price"}
            }}]
        }))
        .unwrap();
        let mut out = Vec::new();
        CodeGenerator::new(&config, &templates)
            .output(&mut out, "product", &schema)
            .unwrap();
        let source = String::from_utf8(out).unwrap();
        assert!(source.contains("types.NumberValue((*big.Float)(apiObject))"));
        let imports = &source[source.find("import (").unwrap()..source.find(")\n").unwrap()];
        assert!(imports.contains("\t\"math/big\"\n"));
    }

    #[test]
    fn test_output_all_from_fixture() {
        let spec = fixture("example-spec.json").unwrap();
        let templates = Templates::new().unwrap();
        let config = CodeGeneratorConfig::new();
        let schemas = GeneratorSchemas::resources(&spec).unwrap();
        let files = CodeGenerator::new(&config, &templates)
            .output_all(&schemas)
            .unwrap();
        let paths: Vec<PathBuf> = files.keys().cloned().collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("resource_network/network_resource_gen.go"),
                PathBuf::from("resource_server/server_resource_gen.go"),
            ]
        );

        let dir = tempdir().unwrap();
        for (path, source) in &files {
            let target = dir.path().join(path);
            std::fs::create_dir_all(target.parent().unwrap()).unwrap();
            std::fs::write(&target, source).unwrap();
        }
        let server =
            std::fs::read_to_string(dir.path().join("resource_server/server_resource_gen.go"))
                .unwrap();
        assert!(server.starts_with("// Code generated by tfgogen. DO NOT EDIT.\n"));
        assert!(server.contains("type ServerModel struct {"));
        assert!(server.contains("type DisksModel struct {"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let spec = fixture("example-spec.json").unwrap();
        let templates = Templates::new().unwrap();
        let config = CodeGeneratorConfig::new();
        let generator = CodeGenerator::new(&config, &templates);
        let first = generator
            .output_all(&GeneratorSchemas::resources(&spec).unwrap())
            .unwrap();
        let second = generator
            .output_all(&GeneratorSchemas::resources(&spec).unwrap())
            .unwrap();
        assert_eq!(first, second);
    }
}
