use crate::convert::{custom_type_imports, BlockFields, PlanModifiers, Validators};
use crate::error::Result;
use crate::identifier::{go_quote, to_pascal_case};
use crate::imports::{Imports, ATTR_IMPORT, TYPES_IMPORT};
use crate::model::{Model, ModelField};
use crate::nested::NestedBlockObject;
use crate::spec;
use crate::templates::{Templates, SINGLE_NESTED_BLOCK};
use crate::to_from::ToFromConversion;
use serde::Serialize;

/// A single nested block held inline.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleNestedBlock {
    object: NestedBlockObject,
    fields: BlockFields,
    plan_modifiers: PlanModifiers,
    validators: Validators,
}

#[derive(Serialize)]
struct SingleNestedBlockContext {
    name: String,
    attributes: String,
    blocks: String,
    fields: String,
}

impl SingleNestedBlock {
    pub fn new(spec: &spec::SingleNestedBlock) -> Result<Self> {
        Ok(Self {
            object: NestedBlockObject::inline(
                &spec.attributes,
                &spec.blocks,
                spec.associated_external_type.as_ref(),
                spec.custom_type.as_ref(),
            )?,
            fields: BlockFields::new(spec.description.as_ref(), spec.deprecation_message.as_ref()),
            plan_modifiers: PlanModifiers::new("Object", &spec.plan_modifiers),
            validators: Validators::new("Object", &spec.validators),
        })
    }

    pub fn object(&self) -> &NestedBlockObject {
        &self.object
    }

    pub fn schema(&self, name: &str, templates: &Templates) -> Result<String> {
        let mut fields = self.object.custom_type_schema(name);
        fields.push_str(&self.fields.schema());
        fields.push_str(&self.plan_modifiers.schema());
        fields.push_str(&self.validators.schema());

        templates.render(
            SINGLE_NESTED_BLOCK,
            &SingleNestedBlockContext {
                name: go_quote(name),
                attributes: self.object.attributes_schema(templates)?,
                blocks: self.object.blocks_schema(templates)?,
                fields,
            },
        )
    }

    pub fn imports(&self) -> Imports {
        let mut imports = Imports::new();
        match self.object.custom_type() {
            Some(custom_type) => imports.append(&custom_type_imports(Some(custom_type))),
            None => imports.add_path(TYPES_IMPORT),
        }
        imports.append(&self.plan_modifiers.imports());
        imports.append(&self.validators.imports());
        imports.append(&self.object.imports());
        imports.add_path(ATTR_IMPORT);
        if let Some(assoc) = self.object.associated_external_type() {
            imports.append(assoc.imports());
        }
        imports
    }

    pub fn model_field(&self, name: &str) -> ModelField {
        ModelField::new(name, self.attr_value(name))
    }

    pub fn attr_type(&self, name: &str) -> String {
        match self.object.custom_type() {
            Some(custom_type) => custom_type.r#type.clone(),
            None => {
                let pascal = to_pascal_case(name);
                format!(
                    "{}Type{{\nObjectType: basetypes.ObjectType{{\nAttrTypes: {}Value{{}}.AttributeTypes(ctx),\n}},\n}}",
                    pascal, pascal
                )
            }
        }
    }

    pub fn attr_value(&self, name: &str) -> String {
        match self.object.custom_type() {
            Some(custom_type) => custom_type.value_type.clone(),
            None => format!("{}Value", to_pascal_case(name)),
        }
    }

    pub fn to(&self) -> Option<ToFromConversion> {
        self.object
            .associated_external_type()
            .cloned()
            .map(ToFromConversion::AssocExtType)
    }

    pub fn from(&self) -> Option<ToFromConversion> {
        self.to()
    }

    pub fn custom_type_and_value(&self, name: &str, templates: &Templates) -> Result<String> {
        self.object.custom_type_and_value(name, templates)
    }

    pub fn to_from_functions(&self, name: &str, templates: &Templates) -> Result<String> {
        self.object.to_from_functions(name, templates)
    }

    pub fn models(&self, name: &str) -> Vec<Model> {
        self.object.models(name)
    }
}
