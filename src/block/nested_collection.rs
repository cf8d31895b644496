use crate::attribute::CollectionKind;
use crate::convert::{custom_type_field, custom_type_imports, BlockFields, PlanModifiers, Validators};
use crate::error::{Error, Result};
use crate::identifier::{go_quote, to_pascal_case};
use crate::imports::{Imports, ATTR_IMPORT, TYPES_IMPORT};
use crate::model::{Model, ModelField};
use crate::nested::NestedBlockObject;
use crate::spec::{self, CustomType};
use crate::templates::{Templates, NESTED_BLOCK};
use serde::Serialize;

/// List or set of nested block objects.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedCollectionBlock {
    kind: CollectionKind,
    nested_object: NestedBlockObject,
    custom_type: Option<CustomType>,
    fields: BlockFields,
    plan_modifiers: PlanModifiers,
    validators: Validators,
}

#[derive(Serialize)]
struct NestedBlockContext<'a> {
    name: String,
    kind: &'a str,
    attributes: String,
    blocks: String,
    custom_type: String,
    plan_modifiers: String,
    validators: String,
    fields: String,
}

impl NestedCollectionBlock {
    /// Fails with a nil spec error when the nested object is absent.
    pub fn new(kind: CollectionKind, name: &str, spec: &spec::NestedCollectionBlock) -> Result<Self> {
        let nested_object = spec.nested_object.as_ref().ok_or_else(|| {
            Error::nil_spec(
                match kind {
                    CollectionKind::Set => "set_nested.nested_object",
                    _ => "list_nested.nested_object",
                },
                name,
            )
        })?;
        Ok(Self {
            kind,
            nested_object: NestedBlockObject::new(nested_object)?,
            custom_type: spec.custom_type.clone(),
            fields: BlockFields::new(spec.description.as_ref(), spec.deprecation_message.as_ref()),
            plan_modifiers: PlanModifiers::new(kind.name(), &spec.plan_modifiers),
            validators: Validators::new(kind.name(), &spec.validators),
        })
    }

    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    pub fn nested_object(&self) -> &NestedBlockObject {
        &self.nested_object
    }

    pub fn schema(&self, name: &str, templates: &Templates) -> Result<String> {
        let mut fields = String::new();
        if let Some(custom_type) = &self.custom_type {
            fields.push_str(&custom_type_field(custom_type));
        }
        fields.push_str(&self.fields.schema());
        fields.push_str(&self.plan_modifiers.schema());
        fields.push_str(&self.validators.schema());

        templates.render(
            NESTED_BLOCK,
            &NestedBlockContext {
                name: go_quote(name),
                kind: self.kind.name(),
                attributes: self.nested_object.attributes_schema(templates)?,
                blocks: self.nested_object.blocks_schema(templates)?,
                custom_type: self.nested_object.custom_type_schema(name),
                plan_modifiers: self.nested_object.plan_modifiers().schema(),
                validators: self.nested_object.validators().schema(),
                fields,
            },
        )
    }

    pub fn imports(&self) -> Imports {
        let mut imports = Imports::new();
        if self.custom_type.is_some() {
            imports.append(&custom_type_imports(self.custom_type.as_ref()));
        } else {
            imports.add_path(TYPES_IMPORT);
        }
        imports.append(&self.plan_modifiers.imports());
        imports.append(&self.validators.imports());
        imports.append(&self.nested_object.imports());
        imports.add_path(ATTR_IMPORT);
        if let Some(assoc) = self.nested_object.associated_external_type() {
            imports.append(assoc.imports());
        }
        imports
    }

    pub fn model_field(&self, name: &str) -> ModelField {
        let value_type = match &self.custom_type {
            Some(custom_type) => custom_type.value_type.clone(),
            None => format!("types.{}", self.kind.name()),
        };
        ModelField::new(name, value_type)
    }

    pub fn attr_type(&self, name: &str) -> String {
        match &self.custom_type {
            Some(custom_type) => custom_type.r#type.clone(),
            None => format!(
                "basetypes.{}Type{{\nElemType: {}Value{{}}.Type(ctx),\n}}",
                self.kind.name(),
                to_pascal_case(name)
            ),
        }
    }

    pub fn attr_value(&self) -> String {
        match &self.custom_type {
            Some(custom_type) => custom_type.value_type.clone(),
            None => format!("basetypes.{}Value", self.kind.name()),
        }
    }

    pub fn custom_type_and_value(&self, name: &str, templates: &Templates) -> Result<String> {
        self.nested_object.custom_type_and_value(name, templates)
    }

    pub fn to_from_functions(&self, name: &str, templates: &Templates) -> Result<String> {
        self.nested_object.to_from_functions(name, templates)
    }

    pub fn models(&self, name: &str) -> Vec<Model> {
        self.nested_object.models(name)
    }
}
