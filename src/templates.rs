//! Compiled Go source templates.
//!
//! Boilerplate that is identical for every generated member (nested object
//! wrappers, custom type/value declarations, converter functions) lives in
//! `templates/*.gotmpl`. The templates are compiled once into a [`Templates`]
//! registry which is passed explicitly to the rendering calls that need it.

use crate::error::Result;
use serde::Serialize;
use tera::{Context, Tera};

pub const NESTED_ATTRIBUTE: &str = "nested_attribute.gotmpl";
pub const SINGLE_NESTED_ATTRIBUTE: &str = "single_nested_attribute.gotmpl";
pub const NESTED_BLOCK: &str = "nested_block.gotmpl";
pub const SINGLE_NESTED_BLOCK: &str = "single_nested_block.gotmpl";
pub const SCHEMA: &str = "schema.gotmpl";
pub const CUSTOM_TYPE: &str = "custom_type.gotmpl";
pub const CUSTOM_OBJECT: &str = "custom_object.gotmpl";
pub const TO_FROM_SCALAR: &str = "to_from_scalar.gotmpl";
pub const TO_FROM_COLLECTION: &str = "to_from_collection.gotmpl";
pub const TO_FROM_OBJECT: &str = "to_from_object.gotmpl";
pub const TO_FROM_NESTED_OBJECT: &str = "to_from_nested_object.gotmpl";

const SOURCES: &[(&str, &str)] = &[
    (NESTED_ATTRIBUTE, include_str!("../templates/nested_attribute.gotmpl")),
    (
        SINGLE_NESTED_ATTRIBUTE,
        include_str!("../templates/single_nested_attribute.gotmpl"),
    ),
    (NESTED_BLOCK, include_str!("../templates/nested_block.gotmpl")),
    (SINGLE_NESTED_BLOCK, include_str!("../templates/single_nested_block.gotmpl")),
    (SCHEMA, include_str!("../templates/schema.gotmpl")),
    (CUSTOM_TYPE, include_str!("../templates/custom_type.gotmpl")),
    (CUSTOM_OBJECT, include_str!("../templates/custom_object.gotmpl")),
    (TO_FROM_SCALAR, include_str!("../templates/to_from_scalar.gotmpl")),
    (TO_FROM_COLLECTION, include_str!("../templates/to_from_collection.gotmpl")),
    (TO_FROM_OBJECT, include_str!("../templates/to_from_object.gotmpl")),
    (
        TO_FROM_NESTED_OBJECT,
        include_str!("../templates/to_from_nested_object.gotmpl"),
    ),
];

/// Immutable registry of compiled templates.
#[derive(Debug)]
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Compiles every bundled template.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(SOURCES.iter().copied())?;
        // Go source is emitted verbatim.
        tera.autoescape_on(vec![]);
        Ok(Self { tera })
    }

    /// Renders template `name` with the fields of `context`.
    pub fn render<T: Serialize>(&self, name: &str, context: &T) -> Result<String> {
        let context = Context::from_serialize(context)?;
        Ok(self.tera.render(name, &context)?)
    }
}
