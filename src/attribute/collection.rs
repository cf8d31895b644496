use crate::convert::{
    custom_type_field, custom_type_imports, default_imports, default_schema, generated_type_field,
    AttributeFields, DefaultValue, PlanModifiers, Validators,
};
use crate::custom_type::render_custom_type;
use crate::element_type::{
    element_attr_type_and_value, element_type_go_type, element_type_imports, element_type_string,
};
use crate::error::Result;
use crate::identifier::{go_quote, to_pascal_case};
use crate::imports::{Imports, BASE_TYPES_IMPORT, TYPES_IMPORT};
use crate::model::ModelField;
use crate::spec::{self, CustomType, ElementType};
use crate::templates::Templates;
use crate::to_from::{render_collection, AssocExtType, CollectionFields, ToFromConversion};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    List,
    Map,
    Set,
}

impl CollectionKind {
    pub fn name(self) -> &'static str {
        match self {
            CollectionKind::List => "List",
            CollectionKind::Map => "Map",
            CollectionKind::Set => "Set",
        }
    }

    fn go_type(self, element: &str) -> String {
        match self {
            CollectionKind::List | CollectionKind::Set => format!("[]{}", element),
            CollectionKind::Map => format!("map[string]{}", element),
        }
    }
}

/// List, map or set attribute of a single element type.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionAttribute {
    kind: CollectionKind,
    associated_external_type: Option<AssocExtType>,
    custom_type: Option<CustomType>,
    default: Option<DefaultValue>,
    element_type: ElementType,
    fields: AttributeFields,
    plan_modifiers: PlanModifiers,
    validators: Validators,
}

impl CollectionAttribute {
    pub fn new(kind: CollectionKind, spec: &spec::CollectionAttribute) -> Self {
        Self {
            kind,
            associated_external_type: spec.associated_external_type.as_ref().map(AssocExtType::new),
            custom_type: spec.custom_type.clone(),
            default: DefaultValue::custom(spec.default.as_ref()),
            element_type: spec.element_type.clone(),
            fields: AttributeFields::new(
                spec.computed_optional_required,
                spec.sensitive,
                spec.description.as_ref(),
                spec.deprecation_message.as_ref(),
            ),
            plan_modifiers: PlanModifiers::new(kind.name(), &spec.plan_modifiers),
            validators: Validators::new(kind.name(), &spec.validators),
        }
    }

    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    pub fn element_type(&self) -> &ElementType {
        &self.element_type
    }

    /// `basetypes.<K>Type{\nElemType: <element>,\n}`
    fn base_type(&self) -> Result<String> {
        Ok(format!(
            "basetypes.{}Type{{\nElemType: {},\n}}",
            self.kind.name(),
            element_type_string(&self.element_type)?
        ))
    }

    pub fn schema(&self, name: &str) -> Result<String> {
        let mut s = format!("{}: schema.{}Attribute{{\n", go_quote(name), self.kind.name());
        if let Some(custom_type) = &self.custom_type {
            s.push_str(&custom_type_field(custom_type));
        } else if self.associated_external_type.is_some() {
            s.push_str(&generated_type_field(name, self.kind.name(), &self.base_type()?));
        } else {
            s.push_str(&format!(
                "ElementType: {},\n",
                element_type_string(&self.element_type)?
            ));
        }
        s.push_str(&self.fields.schema());
        s.push_str(&self.plan_modifiers.schema());
        s.push_str(&self.validators.schema());
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
            imports.append(&element_type_imports(&self.element_type));
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
        let value_type = match (&self.custom_type, &self.associated_external_type) {
            (Some(custom_type), _) => custom_type.value_type.clone(),
            (None, Some(_)) => format!("{}Value", to_pascal_case(name)),
            (None, None) => format!("types.{}", self.kind.name()),
        };
        ModelField::new(name, value_type)
    }

    pub fn attr_type(&self, name: &str) -> Result<String> {
        let s = match (&self.custom_type, &self.associated_external_type) {
            (Some(custom_type), _) => custom_type.r#type.clone(),
            (None, Some(_)) => format!(
                "{}Type{{\n{}Type: {},\n}}",
                to_pascal_case(name),
                self.kind.name(),
                self.base_type()?
            ),
            (None, None) => self.base_type()?,
        };
        Ok(s)
    }

    pub fn attr_value(&self, name: &str) -> String {
        match (&self.custom_type, &self.associated_external_type) {
            (Some(custom_type), _) => custom_type.value_type.clone(),
            (None, Some(_)) => format!("{}Value", to_pascal_case(name)),
            (None, None) => format!("basetypes.{}Value", self.kind.name()),
        }
    }

    /// Native Go target of `ElementsAs`, unless externally typed.
    pub fn to(&self) -> Result<ToFromConversion> {
        if let Some(assoc) = &self.associated_external_type {
            return Ok(ToFromConversion::AssocExtType(assoc.clone()));
        }
        Ok(ToFromConversion::Collection(CollectionFields {
            go_type: self.kind.go_type(&element_type_go_type(&self.element_type)?),
            ..Default::default()
        }))
    }

    pub fn from(&self) -> Result<ToFromConversion> {
        if let Some(assoc) = &self.associated_external_type {
            return Ok(ToFromConversion::AssocExtType(assoc.clone()));
        }
        Ok(ToFromConversion::Collection(self.from_fields()?))
    }

    fn from_fields(&self) -> Result<CollectionFields> {
        Ok(CollectionFields {
            element_type: element_type_string(&self.element_type)?,
            type_value_func: format!("types.{}ValueFrom", self.kind.name()),
            ..Default::default()
        })
    }

    /// Element type and `types.<K>ValueFrom` function, or `None` when the
    /// conversion is delegated to an external type.
    pub fn collection_type(&self) -> Result<Option<CollectionFields>> {
        if self.associated_external_type.is_some() {
            return Ok(None);
        }
        self.from_fields().map(Some)
    }

    pub fn custom_type_and_value(&self, name: &str, templates: &Templates) -> Result<String> {
        if self.associated_external_type.is_none() {
            return Ok(String::new());
        }
        render_custom_type(templates, name, self.kind.name(), &self.base_type()?)
    }

    pub fn to_from_functions(&self, name: &str, templates: &Templates) -> Result<String> {
        let assoc = match &self.associated_external_type {
            Some(assoc) => assoc,
            None => return Ok(String::new()),
        };
        let (elem_type, elem_value) = element_attr_type_and_value(&self.element_type)?;
        render_collection(templates, name, assoc, self.kind.name(), &elem_type, &elem_value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;
    use crate::imports::Import;
    use serde_json::json;

    fn list(v: serde_json::Value) -> CollectionAttribute {
        CollectionAttribute::new(CollectionKind::List, &serde_json::from_value(v).unwrap())
    }

    #[test]
    fn test_list_of_strings() {
        let attr = list(json!({
            "computed_optional_required": "computed",
            "element_type": {"string": {}}
        }));
        assert_eq!(
            attr.schema("tags").unwrap(),
            "\"tags\": schema.ListAttribute{\nElementType: types.StringType,\nComputed: true,\n},\n"
        );
        assert_eq!(attr.model_field("tags").value_type, "types.List");
        assert_eq!(attr.imports().all(), &[Import::new(TYPES_IMPORT)]);
    }

    #[test]
    fn test_custom_type_replaces_element_type() {
        let attr = list(json!({
            "computed_optional_required": "optional",
            "custom_type": {
                "import": {"path": "github.com/my_account/my_project/my_types"},
                "type": "my_types.ListType",
                "value_type": "my_types.List"
            },
            "element_type": {"string": {}}
        }));
        let schema = attr.schema("list_attribute").unwrap();
        assert_eq!(
            schema,
            "\"list_attribute\": schema.ListAttribute{\nCustomType: my_types.ListType,\nOptional: true,\n},\n"
        );
        assert!(!schema.contains("ElementType"));
        let imports = attr.imports();
        assert!(imports.contains("github.com/my_account/my_project/my_types"));
        assert!(!imports.contains(TYPES_IMPORT));
        assert_eq!(attr.model_field("list_attribute").value_type, "my_types.List");
    }

    #[test]
    fn test_to_from() {
        let attr = CollectionAttribute::new(
            CollectionKind::Map,
            &serde_json::from_value(json!({"element_type": {"int64": {}}})).unwrap(),
        );
        assert_eq!(
            attr.to().unwrap(),
            ToFromConversion::Collection(CollectionFields {
                go_type: "map[string]*int64".to_string(),
                ..Default::default()
            })
        );
        assert_eq!(
            attr.from().unwrap(),
            ToFromConversion::Collection(CollectionFields {
                element_type: "types.Int64Type".to_string(),
                type_value_func: "types.MapValueFrom".to_string(),
                ..Default::default()
            })
        );
        assert!(attr.collection_type().unwrap().is_some());
    }

    #[test]
    fn test_object_elements_have_no_go_type() {
        let attr = list(json!({"element_type": {"object": {"attribute_types": [{"name": "a", "bool": {}}]}}}));
        assert!(matches!(attr.to(), Err(Error::UnconvertibleType { .. })));
        assert!(attr.from().is_ok());
    }

    #[test]
    fn test_associated_external_type() {
        let attr = list(json!({
            "element_type": {"string": {}},
            "associated_external_type": {"type": "*apisdk.Tags"}
        }));
        assert_eq!(
            attr.schema("tags").unwrap(),
            "\"tags\": schema.ListAttribute{\nCustomType: TagsType{\nListType: basetypes.ListType{\nElemType: types.StringType,\n},\n},\n},\n"
        );
        assert_eq!(attr.collection_type().unwrap(), None);
        assert_eq!(attr.attr_value("tags"), "TagsValue");
        assert!(attr.imports().contains(BASE_TYPES_IMPORT));

        let templates = Templates::new().unwrap();
        let functions = attr.to_from_functions("tags", &templates).unwrap();
        assert!(functions.contains("func (v TagsValue) ToApisdkTags(ctx context.Context) (*apisdk.Tags, diag.Diagnostics) {"));
        assert!(functions.contains("elems = append(elems, types.StringValue(e))"));
    }

    #[test]
    fn test_nested_element_conversion_is_unsupported() {
        let attr = list(json!({
            "element_type": {"list": {"element_type": {"string": {}}}},
            "associated_external_type": {"type": "*apisdk.Matrix"}
        }));
        let templates = Templates::new().unwrap();
        assert!(matches!(
            attr.to_from_functions("matrix", &templates),
            Err(Error::UnsupportedConversion { element: "list" })
        ));
    }

    #[test]
    fn test_missing_element_type_still_compares() {
        let a = list(json!({}));
        let b = list(json!({}));
        assert_eq!(a, b);
        assert_ne!(a, list(json!({"element_type": {"bool": {}}})));
        assert!(a.schema("x").is_err());
    }
}
