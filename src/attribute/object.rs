use crate::convert::{
    custom_type_field, custom_type_imports, default_imports, default_schema, generated_type_field,
    AttributeFields, DefaultValue, PlanModifiers, Validators,
};
use crate::custom_type::render_custom_type;
use crate::element_type::{attr_types_string, element_type_imports};
use crate::error::Result;
use crate::identifier::{go_quote, to_pascal_case};
use crate::imports::{Imports, ATTR_IMPORT, BASE_TYPES_IMPORT, TYPES_IMPORT};
use crate::model::ModelField;
use crate::spec::{self, CustomType, ObjectAttributeType};
use crate::templates::Templates;
use crate::to_from::{render_object, AssocExtType, ToFromConversion};

/// Object attribute with a fixed set of typed fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectAttribute {
    associated_external_type: Option<AssocExtType>,
    attribute_types: Vec<ObjectAttributeType>,
    custom_type: Option<CustomType>,
    default: Option<DefaultValue>,
    fields: AttributeFields,
    plan_modifiers: PlanModifiers,
    validators: Validators,
}

impl ObjectAttribute {
    pub fn new(spec: &spec::ObjectAttribute) -> Self {
        Self {
            associated_external_type: spec.associated_external_type.as_ref().map(AssocExtType::new),
            attribute_types: spec.attribute_types.clone(),
            custom_type: spec.custom_type.clone(),
            default: DefaultValue::custom(spec.default.as_ref()),
            fields: AttributeFields::new(
                spec.computed_optional_required,
                spec.sensitive,
                spec.description.as_ref(),
                spec.deprecation_message.as_ref(),
            ),
            plan_modifiers: PlanModifiers::new("Object", &spec.plan_modifiers),
            validators: Validators::new("Object", &spec.validators),
        }
    }

    pub fn attribute_types(&self) -> &[ObjectAttributeType] {
        &self.attribute_types
    }

    fn base_type(&self) -> Result<String> {
        Ok(format!(
            "basetypes.ObjectType{{\nAttrTypes: map[string]attr.Type{{\n{}}},\n}}",
            attr_types_string(&self.attribute_types)?
        ))
    }

    pub fn schema(&self, name: &str) -> Result<String> {
        let mut s = format!("{}: schema.ObjectAttribute{{\n", go_quote(name));
        if let Some(custom_type) = &self.custom_type {
            s.push_str(&custom_type_field(custom_type));
        } else if self.associated_external_type.is_some() {
            s.push_str(&generated_type_field(name, "Object", &self.base_type()?));
        } else {
            s.push_str(&format!(
                "AttributeTypes: map[string]attr.Type{{\n{}}},\n",
                attr_types_string(&self.attribute_types)?
            ));
        }
        s.push_str(&self.fields.schema());
        s.push_str(&self.validators.schema());
        s.push_str(&self.plan_modifiers.schema());
        s.push_str(&default_schema(self.default.as_ref()));
        s.push_str("},\n");
        Ok(s)
    }

    pub fn imports(&self) -> Imports {
        let mut imports = Imports::new();
        if self.custom_type.is_some() {
            imports.append(&custom_type_imports(self.custom_type.as_ref()));
        } else {
            imports.add_path(TYPES_IMPORT);
            if !self.attribute_types.is_empty() {
                imports.add_path(ATTR_IMPORT);
            }
            for attr in &self.attribute_types {
                imports.append(&element_type_imports(&attr.element_type));
            }
            if self.associated_external_type.is_some() {
                imports.add_path(BASE_TYPES_IMPORT);
            }
        }
        imports.append(&default_imports(self.default.as_ref()));
        imports.append(&self.plan_modifiers.imports());
        imports.append(&self.validators.imports());
        if let Some(assoc) = &self.associated_external_type {
            imports.append(assoc.imports());
        }
        imports
    }

    pub fn model_field(&self, name: &str) -> ModelField {
        ModelField::new(name, self.value_type(name, "types.Object"))
    }

    fn value_type(&self, name: &str, fallback: &str) -> String {
        match (&self.custom_type, &self.associated_external_type) {
            (Some(custom_type), _) => custom_type.value_type.clone(),
            (None, Some(_)) => format!("{}Value", to_pascal_case(name)),
            (None, None) => fallback.to_string(),
        }
    }

    pub fn attr_type(&self, name: &str) -> Result<String> {
        let s = match (&self.custom_type, &self.associated_external_type) {
            (Some(custom_type), _) => custom_type.r#type.clone(),
            (None, Some(_)) => format!(
                "{}Type{{\nObjectType: {},\n}}",
                to_pascal_case(name),
                self.base_type()?
            ),
            (None, None) => self.base_type()?,
        };
        Ok(s)
    }

    pub fn attr_value(&self, name: &str) -> String {
        self.value_type(name, "basetypes.ObjectValue")
    }

    /// Objects only convert through an associated external type.
    pub fn to(&self) -> Option<ToFromConversion> {
        self.associated_external_type
            .clone()
            .map(ToFromConversion::AssocExtType)
    }

    pub fn from(&self) -> Option<ToFromConversion> {
        self.to()
    }

    pub fn custom_type_and_value(&self, name: &str, templates: &Templates) -> Result<String> {
        if self.associated_external_type.is_none() {
            return Ok(String::new());
        }
        render_custom_type(templates, name, "Object", &self.base_type()?)
    }

    pub fn to_from_functions(&self, name: &str, templates: &Templates) -> Result<String> {
        let assoc = match &self.associated_external_type {
            Some(assoc) => assoc,
            None => return Ok(String::new()),
        };
        render_object(templates, name, assoc, &attr_types_string(&self.attribute_types)?)
    }
}
