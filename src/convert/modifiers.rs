use crate::imports::{Imports, PLAN_MODIFIER_IMPORT, VALIDATOR_IMPORT};
use crate::spec::{CustomDefinition, PlanModifier, Validator};

/// Custom plan modifiers, typed to the framework element type `kind`
/// (`Bool`, `List`, `Object`, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanModifiers {
    kind: &'static str,
    custom: Vec<CustomDefinition>,
}

impl PlanModifiers {
    pub fn new(kind: &'static str, specs: &[PlanModifier]) -> Self {
        Self {
            kind,
            custom: specs.iter().filter_map(|p| p.custom.clone()).collect(),
        }
    }

    pub fn schema(&self) -> String {
        list_schema("PlanModifiers", "planmodifier", self.kind, &self.custom)
    }

    pub fn imports(&self) -> Imports {
        list_imports(PLAN_MODIFIER_IMPORT, &self.custom)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validators {
    kind: &'static str,
    custom: Vec<CustomDefinition>,
}

impl Validators {
    pub fn new(kind: &'static str, specs: &[Validator]) -> Self {
        Self {
            kind,
            custom: specs.iter().filter_map(|v| v.custom.clone()).collect(),
        }
    }

    pub fn schema(&self) -> String {
        list_schema("Validators", "validator", self.kind, &self.custom)
    }

    pub fn imports(&self) -> Imports {
        list_imports(VALIDATOR_IMPORT, &self.custom)
    }
}

fn list_schema(field: &str, package: &str, kind: &str, custom: &[CustomDefinition]) -> String {
    if custom.is_empty() {
        return String::new();
    }
    let mut s = format!("{}: []{}.{}{{\n", field, package, kind);
    for c in custom {
        s.push_str(&c.schema_definition);
        s.push_str(",\n");
    }
    s.push_str("},\n");
    s
}

fn list_imports(package_import: &str, custom: &[CustomDefinition]) -> Imports {
    let mut imports = Imports::new();
    if custom.is_empty() {
        return imports;
    }
    imports.add_path(package_import);
    for c in custom {
        for import in &c.imports {
            imports.add(import.clone());
        }
    }
    imports
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::imports::Import;

    fn custom(definition: &str, path: &str) -> CustomDefinition {
        CustomDefinition {
            imports: vec![Import::new(path)],
            schema_definition: definition.to_string(),
        }
    }

    #[test]
    fn test_plan_modifiers_schema() {
        let modifiers = PlanModifiers::new(
            "Bool",
            &[
                PlanModifier {
                    custom: Some(custom("boolplanmodifier.RequiresReplace()", "github.com/hashicorp/terraform-plugin-framework/resource/schema/boolplanmodifier")),
                },
                PlanModifier { custom: None },
            ],
        );
        assert_eq!(
            modifiers.schema(),
            "PlanModifiers: []planmodifier.Bool{\nboolplanmodifier.RequiresReplace(),\n},\n"
        );
        let imports = modifiers.imports();
        assert_eq!(imports.all()[0].path, PLAN_MODIFIER_IMPORT);
        assert_eq!(imports.len(), 2);
    }

    #[test]
    fn test_validators_schema() {
        let validators = Validators::new(
            "List",
            &[
                Validator {
                    custom: Some(custom("listvalidator.SizeAtLeast(1)", "github.com/hashicorp/terraform-plugin-framework-validators/listvalidator")),
                },
                Validator {
                    custom: Some(custom("listvalidator.SizeAtMost(5)", "github.com/hashicorp/terraform-plugin-framework-validators/listvalidator")),
                },
            ],
        );
        assert_eq!(
            validators.schema(),
            "Validators: []validator.List{\nlistvalidator.SizeAtLeast(1),\nlistvalidator.SizeAtMost(5),\n},\n"
        );
        assert_eq!(validators.imports().len(), 2);
    }

    #[test]
    fn test_empty_lists_emit_nothing() {
        assert_eq!(PlanModifiers::new("String", &[]).schema(), "");
        assert!(Validators::new("String", &[]).imports().is_empty());
    }
}
