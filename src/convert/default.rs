use crate::identifier::go_quote;
use crate::imports::{Import, Imports, RESOURCE_SCHEMA_PREFIX};
use crate::spec::{BoolDefault, CustomDefault, CustomDefinition, Float64Default, Int64Default, StringDefault};

/// Resolved `Default:` field of a resource attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// Call into one of the framework `<kind>default` packages.
    Static { package: &'static str, call: String },
    Custom(CustomDefinition),
}

impl DefaultValue {
    pub fn bool(default: Option<&BoolDefault>) -> Option<Self> {
        let default = default?;
        if let Some(v) = default.static_value {
            return Some(DefaultValue::Static {
                package: "booldefault",
                call: format!("booldefault.StaticBool({})", v),
            });
        }
        default.custom.clone().map(DefaultValue::Custom)
    }

    pub fn float64(default: Option<&Float64Default>) -> Option<Self> {
        let default = default?;
        if let Some(v) = default.static_value {
            return Some(DefaultValue::Static {
                package: "float64default",
                call: format!("float64default.StaticFloat64({})", v),
            });
        }
        default.custom.clone().map(DefaultValue::Custom)
    }

    pub fn int64(default: Option<&Int64Default>) -> Option<Self> {
        let default = default?;
        if let Some(v) = default.static_value {
            return Some(DefaultValue::Static {
                package: "int64default",
                call: format!("int64default.StaticInt64({})", v),
            });
        }
        default.custom.clone().map(DefaultValue::Custom)
    }

    pub fn string(default: Option<&StringDefault>) -> Option<Self> {
        let default = default?;
        if let Some(v) = &default.static_value {
            return Some(DefaultValue::Static {
                package: "stringdefault",
                call: format!("stringdefault.StaticString({})", go_quote(v)),
            });
        }
        default.custom.clone().map(DefaultValue::Custom)
    }

    /// Number, collection, object and nested kinds only take custom defaults.
    pub fn custom(default: Option<&CustomDefault>) -> Option<Self> {
        default?.custom.clone().map(DefaultValue::Custom)
    }

    pub fn schema(&self) -> String {
        match self {
            DefaultValue::Static { call, .. } => format!("Default: {},\n", call),
            DefaultValue::Custom(c) => format!("Default: {},\n", c.schema_definition),
        }
    }

    pub fn imports(&self) -> Imports {
        match self {
            DefaultValue::Static { package, .. } => {
                let mut imports = Imports::new();
                imports.add(Import::new(format!("{}{}", RESOURCE_SCHEMA_PREFIX, package)));
                imports
            }
            DefaultValue::Custom(c) => c.imports.iter().cloned().collect(),
        }
    }
}

/// Schema text of an optional default.
pub(crate) fn default_schema(default: Option<&DefaultValue>) -> String {
    default.map(DefaultValue::schema).unwrap_or_default()
}

/// Imports of an optional default.
pub(crate) fn default_imports(default: Option<&DefaultValue>) -> Imports {
    default.map(DefaultValue::imports).unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_static_defaults() {
        let b = DefaultValue::bool(Some(&BoolDefault {
            custom: None,
            static_value: Some(true),
        }))
        .unwrap();
        assert_eq!(b.schema(), "Default: booldefault.StaticBool(true),\n");
        assert!(b
            .imports()
            .contains("github.com/hashicorp/terraform-plugin-framework/resource/schema/booldefault"));

        let s = DefaultValue::string(Some(&StringDefault {
            custom: None,
            static_value: Some("a \"b\"".to_string()),
        }))
        .unwrap();
        assert_eq!(s.schema(), "Default: stringdefault.StaticString(\"a \\\"b\\\"\"),\n");

        let i = DefaultValue::int64(Some(&Int64Default {
            custom: None,
            static_value: Some(-12),
        }))
        .unwrap();
        assert_eq!(i.schema(), "Default: int64default.StaticInt64(-12),\n");

        let f = DefaultValue::float64(Some(&Float64Default {
            custom: None,
            static_value: Some(1.5),
        }))
        .unwrap();
        assert_eq!(f.schema(), "Default: float64default.StaticFloat64(1.5),\n");
    }

    #[test]
    fn test_custom_default() {
        let d = DefaultValue::custom(Some(&CustomDefault {
            custom: Some(CustomDefinition {
                imports: vec![Import::new("github.com/example/defaults")],
                schema_definition: "defaults.Empty()".to_string(),
            }),
        }))
        .unwrap();
        assert_eq!(d.schema(), "Default: defaults.Empty(),\n");
        assert_eq!(d.imports().all(), &[Import::new("github.com/example/defaults")]);
    }

    #[test]
    fn test_absent_default() {
        assert_eq!(DefaultValue::bool(None), None);
        assert_eq!(DefaultValue::custom(Some(&CustomDefault::default())), None);
        assert_eq!(default_schema(None), "");
        assert!(default_imports(None).is_empty());
    }
}
