//! State model structs.
//!
//! Every schema level produces a Go struct whose fields carry the `tfsdk` tag
//! of the member they hold, e.g.
//!
//! ```go
//! type ExampleModel struct {
//! 	Enabled types.Bool `tfsdk:"enabled"`
//! }
//! ```

use crate::error::Result;
use crate::identifier::to_pascal_case;
use serde_generate::indent::{IndentConfig, IndentedWriter};
use std::fmt;
use std::io::Write;

/// Model struct field of a single attribute or block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelField {
    /// Go field name.
    pub name: String,
    /// Schema member name.
    pub tfsdk_name: String,
    /// Go storage type.
    pub value_type: String,
}

impl ModelField {
    pub fn new(name: &str, value_type: impl Into<String>) -> Self {
        Self {
            name: to_pascal_case(name),
            tfsdk_name: name.to_string(),
            value_type: value_type.into(),
        }
    }
}

impl fmt::Display for ModelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} `tfsdk:\"{}\"`",
            self.name, self.value_type, self.tfsdk_name
        )
    }
}

/// A model struct definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub name: String,
    pub fields: Vec<ModelField>,
}

impl Model {
    /// Model of the schema level named `name`, e.g. `bool_attribute` ->
    /// `BoolAttributeModel`.
    pub fn new(name: &str, fields: Vec<ModelField>) -> Self {
        Self {
            name: format!("{}Model", to_pascal_case(name)),
            fields,
        }
    }
}

struct ModelEmitter<T> {
    out: IndentedWriter<T>,
}

impl<T: Write> ModelEmitter<T> {
    fn output_model(&mut self, model: &Model) -> std::io::Result<()> {
        writeln!(self.out, "type {} struct {{", model.name)?;
        self.out.indent();
        for field in &model.fields {
            writeln!(self.out, "{}", field)?;
        }
        self.out.unindent();
        writeln!(self.out, "}}")?;
        writeln!(self.out)
    }
}

/// Go source of `models`, one struct per entry, separated by blank lines.
pub fn render_models(models: &[Model]) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut emitter = ModelEmitter {
            out: IndentedWriter::new(&mut buffer, IndentConfig::Tab),
        };
        for model in models {
            emitter.output_model(model)?;
        }
    }
    let source = String::from_utf8(buffer)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    Ok(source)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_model_field_display() {
        let field = ModelField::new("bool_attribute", "types.Bool");
        assert_eq!(field.name, "BoolAttribute");
        assert_eq!(field.to_string(), "BoolAttribute types.Bool `tfsdk:\"bool_attribute\"`");
    }

    #[test]
    fn test_render_models() {
        let models = vec![
            Model::new(
                "example",
                vec![
                    ModelField::new("enabled", "types.Bool"),
                    ModelField::new("rules", "types.List"),
                ],
            ),
            Model::new("rules", vec![ModelField::new("name", "types.String")]),
        ];
        assert_eq!(
            render_models(&models).unwrap(),
            "type ExampleModel struct {\n\tEnabled types.Bool `tfsdk:\"enabled\"`\n\tRules types.List `tfsdk:\"rules\"`\n}\n\ntype RulesModel struct {\n\tName types.String `tfsdk:\"name\"`\n}\n\n"
        );
    }

    #[test]
    fn test_render_empty_model() {
        let models = vec![Model::new("empty", vec![])];
        assert_eq!(render_models(&models).unwrap(), "type EmptyModel struct {\n}\n\n");
    }
}
