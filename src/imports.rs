//! Go import tracking.
//!
//! Every generated member reports the Go packages its emitted text refers to.
//! The [`Imports`] accumulator keeps the first-seen order of each path so that
//! the import block of a generated file is stable across runs.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const TYPES_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/types";
pub const BASE_TYPES_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/types/basetypes";
pub const ATTR_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/attr";
pub const DIAG_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/diag";
pub const VALIDATOR_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/schema/validator";
pub const PLAN_MODIFIER_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/resource/schema/planmodifier";
pub const TFTYPES_IMPORT: &str = "github.com/hashicorp/terraform-plugin-go/tftypes";
pub const RESOURCE_SCHEMA_PREFIX: &str = "github.com/hashicorp/terraform-plugin-framework/resource/schema/";
pub const CONTEXT_IMPORT: &str = "context";
pub const FMT_IMPORT: &str = "fmt";
pub const MATH_BIG_IMPORT: &str = "math/big";

/// A single Go import, optionally aliased.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Import {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{} \"{}\"", alias, self.path),
            None => write!(f, "\"{}\"", self.path),
        }
    }
}

/// Ordered, deduplicated set of imports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Imports {
    imports: Vec<Import>,
}

impl Imports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an import unless its path is already present.
    pub fn add(&mut self, import: Import) {
        if !self.contains(&import.path) {
            self.imports.push(import);
        }
    }

    /// Adds an unaliased import by path.
    pub fn add_path(&mut self, path: &str) {
        self.add(Import::new(path));
    }

    /// Adds every import of `other`, in its order.
    pub fn append(&mut self, other: &Imports) {
        for import in &other.imports {
            self.add(import.clone());
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.imports.iter().any(|i| i.path == path)
    }

    pub fn all(&self) -> &[Import] {
        &self.imports
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

impl<'a> IntoIterator for &'a Imports {
    type Item = &'a Import;
    type IntoIter = std::slice::Iter<'a, Import>;

    fn into_iter(self) -> Self::IntoIter {
        self.imports.iter()
    }
}

impl FromIterator<Import> for Imports {
    fn from_iter<I: IntoIterator<Item = Import>>(iter: I) -> Self {
        let mut imports = Imports::new();
        for import in iter {
            imports.add(import);
        }
        imports
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn paths(imports: &Imports) -> Vec<&str> {
        imports.all().iter().map(|i| i.path.as_str()).collect()
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut imports = Imports::new();
        for _ in 0..5 {
            imports.add_path(TYPES_IMPORT);
        }
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn test_duplicates_keep_first_seen_position() {
        let mut imports = Imports::new();
        imports.add_path(TYPES_IMPORT);
        imports.add_path(ATTR_IMPORT);
        imports.add_path(TYPES_IMPORT);
        imports.add_path(VALIDATOR_IMPORT);
        imports.add_path(ATTR_IMPORT);

        assert_eq!(
            paths(&imports),
            vec![TYPES_IMPORT, ATTR_IMPORT, VALIDATOR_IMPORT]
        );
    }

    #[test]
    fn test_append_equivalent_orders_match() {
        let mut first = Imports::new();
        first.add_path(TYPES_IMPORT);
        first.add_path(ATTR_IMPORT);

        let mut second = Imports::new();
        second.add_path(TYPES_IMPORT);
        second.add_path(TYPES_IMPORT);
        second.add_path(ATTR_IMPORT);

        let mut a = Imports::new();
        a.append(&first);
        a.append(&second);

        let mut b = Imports::new();
        b.append(&second);
        b.append(&first);

        assert_eq!(a, b);
    }

    #[test]
    fn test_alias_display() {
        let import = Import::new("github.com/example/apisdk").with_alias("sdk");
        assert_eq!(import.to_string(), "sdk \"github.com/example/apisdk\"");
        assert_eq!(Import::new(FMT_IMPORT).to_string(), "\"fmt\"");
    }
}
