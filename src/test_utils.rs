use crate::attribute::GeneratorAttribute;
use crate::block::GeneratorBlock;
use crate::error::Result;
use crate::schema::GeneratorSchema;
use crate::spec::{read_spec_from_file, Specification};
use std::path::Path;

/// Reads `tests/fixtures/<name>` relative to the crate root.
pub fn fixture(name: &str) -> Result<Specification> {
    read_spec_from_file(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name))
}

pub fn attribute_from_json(value: serde_json::Value) -> Result<GeneratorAttribute> {
    GeneratorAttribute::new(&serde_json::from_value(value)?)
}

pub fn block_from_json(value: serde_json::Value) -> Result<GeneratorBlock> {
    GeneratorBlock::new(&serde_json::from_value(value)?)
}

pub fn schema_from_json(value: serde_json::Value) -> Result<GeneratorSchema> {
    GeneratorSchema::new(&serde_json::from_value(value)?)
}
