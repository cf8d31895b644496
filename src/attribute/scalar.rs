use crate::convert::{
    custom_type_field, custom_type_imports, default_imports, default_schema, generated_type_field,
    AttributeFields, DefaultValue, PlanModifiers, Validators,
};
use crate::custom_type::render_custom_type;
use crate::error::Result;
use crate::identifier::{go_quote, to_pascal_case};
use crate::imports::{Imports, BASE_TYPES_IMPORT, MATH_BIG_IMPORT, TYPES_IMPORT};
use crate::model::ModelField;
use crate::spec::{self, CustomType};
use crate::templates::Templates;
use crate::to_from::{render_scalar, AssocExtType, ScalarToFrom, ToFromConversion};

/// Primitive framework kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Bool,
    Float64,
    Int64,
    Number,
    String,
}

impl ScalarKind {
    /// Framework kind name, e.g. `Bool` in `schema.BoolAttribute`.
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "Bool",
            ScalarKind::Float64 => "Float64",
            ScalarKind::Int64 => "Int64",
            ScalarKind::Number => "Number",
            ScalarKind::String => "String",
        }
    }

    fn to_func(self) -> &'static str {
        match self {
            ScalarKind::Bool => "ValueBoolPointer",
            ScalarKind::Float64 => "ValueFloat64Pointer",
            ScalarKind::Int64 => "ValueInt64Pointer",
            ScalarKind::Number => "ValueBigFloat",
            ScalarKind::String => "ValueStringPointer",
        }
    }

    fn from_func(self) -> &'static str {
        match self {
            ScalarKind::Bool => "BoolPointerValue",
            ScalarKind::Float64 => "Float64PointerValue",
            ScalarKind::Int64 => "Int64PointerValue",
            ScalarKind::Number => "NumberValue",
            ScalarKind::String => "StringPointerValue",
        }
    }

    fn go_type(self) -> &'static str {
        match self {
            ScalarKind::Bool => "*bool",
            ScalarKind::Float64 => "*float64",
            ScalarKind::Int64 => "*int64",
            ScalarKind::Number => "*big.Float",
            ScalarKind::String => "*string",
        }
    }
}

/// Bool, float64, int64, number or string attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarAttribute {
    kind: ScalarKind,
    associated_external_type: Option<AssocExtType>,
    custom_type: Option<CustomType>,
    default: Option<DefaultValue>,
    fields: AttributeFields,
    plan_modifiers: PlanModifiers,
    validators: Validators,
}

macro_rules! scalar_from_spec {
    ($kind:expr, $spec:expr, $default:expr) => {
        ScalarAttribute {
            kind: $kind,
            associated_external_type: $spec.associated_external_type.as_ref().map(AssocExtType::new),
            custom_type: $spec.custom_type.clone(),
            default: $default,
            fields: AttributeFields::new(
                $spec.computed_optional_required,
                $spec.sensitive,
                $spec.description.as_ref(),
                $spec.deprecation_message.as_ref(),
            ),
            plan_modifiers: PlanModifiers::new($kind.name(), &$spec.plan_modifiers),
            validators: Validators::new($kind.name(), &$spec.validators),
        }
    };
}

impl ScalarAttribute {
    pub fn bool(spec: &spec::BoolAttribute) -> Self {
        scalar_from_spec!(ScalarKind::Bool, spec, DefaultValue::bool(spec.default.as_ref()))
    }

    pub fn float64(spec: &spec::Float64Attribute) -> Self {
        scalar_from_spec!(
            ScalarKind::Float64,
            spec,
            DefaultValue::float64(spec.default.as_ref())
        )
    }

    pub fn int64(spec: &spec::Int64Attribute) -> Self {
        scalar_from_spec!(ScalarKind::Int64, spec, DefaultValue::int64(spec.default.as_ref()))
    }

    pub fn number(spec: &spec::NumberAttribute) -> Self {
        scalar_from_spec!(
            ScalarKind::Number,
            spec,
            DefaultValue::custom(spec.default.as_ref())
        )
    }

    pub fn string(spec: &spec::StringAttribute) -> Self {
        scalar_from_spec!(
            ScalarKind::String,
            spec,
            DefaultValue::string(spec.default.as_ref())
        )
    }

    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    fn base_type(&self) -> String {
        format!("basetypes.{}Type{{}}", self.kind.name())
    }

    pub fn schema(&self, name: &str) -> String {
        let mut s = format!("{}: schema.{}Attribute{{\n", go_quote(name), self.kind.name());
        if let Some(custom_type) = &self.custom_type {
            s.push_str(&custom_type_field(custom_type));
        } else if self.associated_external_type.is_some() {
            s.push_str(&generated_type_field(name, self.kind.name(), &self.base_type()));
        }
        s.push_str(&self.fields.schema());
        s.push_str(&self.plan_modifiers.schema());
        s.push_str(&self.validators.schema());
        s.push_str(&default_schema(self.default.as_ref()));
        s.push_str("},\n");
        s
    }

    pub fn imports(&self) -> Imports {
        let mut imports = Imports::new();
        if self.custom_type.is_some() {
            imports.append(&custom_type_imports(self.custom_type.as_ref()));
        } else if self.associated_external_type.is_some() {
            imports.add_path(BASE_TYPES_IMPORT);
        } else {
            imports.add_path(TYPES_IMPORT);
        }
        imports.append(&default_imports(self.default.as_ref()));
        imports.append(&self.plan_modifiers.imports());
        imports.append(&self.validators.imports());
        if let Some(assoc) = &self.associated_external_type {
            // The From converter casts to *big.Float.
            if self.kind == ScalarKind::Number {
                imports.add_path(MATH_BIG_IMPORT);
            }
            imports.append(assoc.imports());
        }
        imports
    }

    pub fn model_field(&self, name: &str) -> ModelField {
        let value_type = match (&self.custom_type, &self.associated_external_type) {
            (Some(custom_type), _) => custom_type.value_type.clone(),
            (None, Some(_)) => format!("{}Value", to_pascal_case(name)),
            (None, None) => format!("types.{}", self.kind.name()),
        };
        ModelField::new(name, value_type)
    }

    pub fn attr_type(&self, name: &str) -> String {
        match (&self.custom_type, &self.associated_external_type) {
            (Some(custom_type), _) => custom_type.r#type.clone(),
            (None, Some(_)) => format!("{}Type{{}}", to_pascal_case(name)),
            (None, None) => self.base_type(),
        }
    }

    pub fn attr_value(&self, name: &str) -> String {
        match (&self.custom_type, &self.associated_external_type) {
            (Some(custom_type), _) => custom_type.value_type.clone(),
            (None, Some(_)) => format!("{}Value", to_pascal_case(name)),
            (None, None) => format!("basetypes.{}Value", self.kind.name()),
        }
    }

    pub fn to(&self) -> ToFromConversion {
        match &self.associated_external_type {
            Some(assoc) => ToFromConversion::AssocExtType(assoc.clone()),
            None => ToFromConversion::Default(self.kind.to_func().to_string()),
        }
    }

    pub fn from(&self) -> ToFromConversion {
        match &self.associated_external_type {
            Some(assoc) => ToFromConversion::AssocExtType(assoc.clone()),
            None => ToFromConversion::Default(self.kind.from_func().to_string()),
        }
    }

    pub fn custom_type_and_value(&self, name: &str, templates: &Templates) -> Result<String> {
        if self.associated_external_type.is_none() {
            return Ok(String::new());
        }
        render_custom_type(templates, name, self.kind.name(), &self.base_type())
    }

    pub fn to_from_functions(&self, name: &str, templates: &Templates) -> Result<String> {
        let assoc = match &self.associated_external_type {
            Some(assoc) => assoc,
            None => return Ok(String::new()),
        };
        render_scalar(
            templates,
            name,
            assoc,
            ScalarToFrom {
                kind: self.kind.name(),
                to_func: self.kind.to_func(),
                from_func: self.kind.from_func(),
                go_type: self.kind.go_type(),
            },
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::imports::Import;
    use serde_json::json;

    fn bool_attribute(v: serde_json::Value) -> ScalarAttribute {
        ScalarAttribute::bool(&serde_json::from_value(v).unwrap())
    }

    #[test]
    fn test_optional_sensitive_bool_schema() {
        let attr = bool_attribute(json!({"computed_optional_required": "optional", "sensitive": true}));
        assert_eq!(
            attr.schema("enabled"),
            "\"enabled\": schema.BoolAttribute{\nOptional: true,\nSensitive: true,\n},\n"
        );
        assert_eq!(attr.schema("enabled"), attr.schema("enabled"));
    }

    #[test]
    fn test_schema_field_order() {
        let attr = ScalarAttribute::string(
            &serde_json::from_value(json!({
                "computed_optional_required": "computed_optional",
                "custom_type": {"type": "my_types.StringType", "value_type": "my_types.String"},
                "default": {"static": "x"},
                "deprecation_message": "gone",
                "description": "a string",
                "plan_modifiers": [{"custom": {"schema_definition": "stringplanmodifier.UseStateForUnknown()"}}],
                "sensitive": true,
                "validators": [{"custom": {"schema_definition": "stringvalidator.LengthAtLeast(1)"}}]
            }))
            .unwrap(),
        );
        assert_eq!(
            attr.schema("name"),
            "\"name\": schema.StringAttribute{\n\
             CustomType: my_types.StringType,\n\
             Computed: true,\n\
             Optional: true,\n\
             Sensitive: true,\n\
             Description: \"a string\",\n\
             MarkdownDescription: \"a string\",\n\
             DeprecationMessage: \"gone\",\n\
             PlanModifiers: []planmodifier.String{\n\
             stringplanmodifier.UseStateForUnknown(),\n\
             },\n\
             Validators: []validator.String{\n\
             stringvalidator.LengthAtLeast(1),\n\
             },\n\
             Default: stringdefault.StaticString(\"x\"),\n\
             },\n"
        );
    }

    #[test]
    fn test_associated_external_type() {
        let attr = bool_attribute(json!({
            "computed_optional_required": "required",
            "associated_external_type": {"import": {"path": "example.com/apisdk"}, "type": "*apisdk.Type"}
        }));
        assert_eq!(
            attr.schema("enabled"),
            "\"enabled\": schema.BoolAttribute{\nCustomType: EnabledType{\nBoolType: basetypes.BoolType{},\n},\nRequired: true,\n},\n"
        );
        assert_eq!(attr.model_field("enabled").value_type, "EnabledValue");
        assert_eq!(attr.attr_type("enabled"), "EnabledType{}");
        assert_eq!(attr.attr_value("enabled"), "EnabledValue");
        assert!(matches!(attr.to(), ToFromConversion::AssocExtType(_)));
        assert_eq!(
            attr.imports().all(),
            &[Import::new(BASE_TYPES_IMPORT), Import::new("example.com/apisdk")]
        );

        let templates = Templates::new().unwrap();
        assert!(attr
            .custom_type_and_value("enabled", &templates)
            .unwrap()
            .contains("type EnabledValue struct {"));
        assert!(attr
            .to_from_functions("enabled", &templates)
            .unwrap()
            .contains("func (v EnabledValue) FromApisdkType("));
    }

    #[test]
    fn test_external_number_imports_math_big() {
        let attr = ScalarAttribute::number(
            &serde_json::from_value(json!({
                "associated_external_type": {"import": {"path": "example.com/apisdk"}, "type": "*apisdk.Price"}
            }))
            .unwrap(),
        );
        assert_eq!(
            attr.imports().all(),
            &[
                Import::new(BASE_TYPES_IMPORT),
                Import::new(MATH_BIG_IMPORT),
                Import::new("example.com/apisdk"),
            ]
        );
        assert!(!ScalarAttribute::number(&Default::default())
            .imports()
            .contains(MATH_BIG_IMPORT));
    }

    #[test]
    fn test_defaults_without_external_type() {
        let attr = ScalarAttribute::number(&Default::default());
        assert_eq!(attr.model_field("ratio").value_type, "types.Number");
        assert_eq!(attr.attr_type("ratio"), "basetypes.NumberType{}");
        assert_eq!(attr.attr_value("ratio"), "basetypes.NumberValue");
        assert_eq!(attr.to(), ToFromConversion::Default("ValueBigFloat".to_string()));
        assert_eq!(attr.from(), ToFromConversion::Default("NumberValue".to_string()));
        assert_eq!(attr.imports().all(), &[Import::new(TYPES_IMPORT)]);

        let templates = Templates::new().unwrap();
        assert_eq!(attr.custom_type_and_value("ratio", &templates).unwrap(), "");
        assert_eq!(attr.to_from_functions("ratio", &templates).unwrap(), "");
    }

    #[test]
    fn test_conversion_table() {
        let cases = [
            (ScalarAttribute::bool(&Default::default()), "ValueBoolPointer", "BoolPointerValue"),
            (
                ScalarAttribute::float64(&Default::default()),
                "ValueFloat64Pointer",
                "Float64PointerValue",
            ),
            (ScalarAttribute::int64(&Default::default()), "ValueInt64Pointer", "Int64PointerValue"),
            (
                ScalarAttribute::string(&Default::default()),
                "ValueStringPointer",
                "StringPointerValue",
            ),
        ];
        for (attr, to, from) in cases.iter() {
            assert_eq!(attr.to(), ToFromConversion::Default(to.to_string()));
            assert_eq!(attr.from(), ToFromConversion::Default(from.to_string()));
        }
    }

    #[test]
    fn test_custom_type_imports_replace_types() {
        let attr = bool_attribute(json!({
            "custom_type": {
                "import": {"path": "example.com/my_types"},
                "type": "my_types.BoolType",
                "value_type": "my_types.Bool"
            },
            "default": {"static": false}
        }));
        assert_eq!(
            attr.imports().all(),
            &[
                Import::new("example.com/my_types"),
                Import::new("github.com/hashicorp/terraform-plugin-framework/resource/schema/booldefault"),
            ]
        );
        assert_eq!(attr.model_field("flag").value_type, "my_types.Bool");
    }
}
