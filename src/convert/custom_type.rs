use crate::identifier::to_pascal_case;
use crate::imports::Imports;
use crate::spec::CustomType;

/// `CustomType: <override>,`
pub fn custom_type_field(custom_type: &CustomType) -> String {
    format!("CustomType: {},\n", custom_type.r#type)
}

/// `CustomType` field referring to the wrapper type generated for `name`,
/// embedding the framework base type given by `kind` and `type_literal`.
pub fn generated_type_field(name: &str, kind: &str, type_literal: &str) -> String {
    format!(
        "CustomType: {}Type{{\n{}Type: {},\n}},\n",
        to_pascal_case(name),
        kind,
        type_literal
    )
}

pub fn custom_type_imports(custom_type: Option<&CustomType>) -> Imports {
    let mut imports = Imports::new();
    if let Some(import) = custom_type.and_then(|c| c.import.as_ref()) {
        imports.add(import.clone());
    }
    imports
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::imports::Import;

    #[test]
    fn test_custom_type_field() {
        let custom_type = CustomType {
            import: None,
            r#type: "my_types.StringType".to_string(),
            value_type: "my_types.String".to_string(),
        };
        assert_eq!(custom_type_field(&custom_type), "CustomType: my_types.StringType,\n");
    }

    #[test]
    fn test_generated_type_field() {
        assert_eq!(
            generated_type_field("enabled", "Bool", "basetypes.BoolType{}"),
            "CustomType: EnabledType{\nBoolType: basetypes.BoolType{},\n},\n"
        );
    }

    #[test]
    fn test_custom_type_imports() {
        let custom_type = CustomType {
            import: Some(Import::new("github.com/my_account/my_project/my_types")),
            r#type: "my_types.StringType".to_string(),
            value_type: "my_types.String".to_string(),
        };
        let imports = custom_type_imports(Some(&custom_type));
        assert!(imports.contains("github.com/my_account/my_project/my_types"));
        assert!(custom_type_imports(None).is_empty());
    }
}
