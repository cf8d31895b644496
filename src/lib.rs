//! This crate generates Go source for the Terraform Plugin Framework from a
//! provider specification.
//!
//! ## Quick Start
//!
//! A provider specification is a JSON document listing the resources, data
//! sources and provider schema of a Terraform provider. Every attribute names
//! exactly one kind:
//!
//! ```json
//! {
//!     "resources": [{
//!         "name": "example",
//!         "schema": {
//!             "attributes": [
//!                 {"name": "enabled", "bool": {"computed_optional_required": "optional", "sensitive": true}}
//!             ]
//!         }
//!     }]
//! }
//! ```
//!
//! For each schema the generator produces the schema function, the state model
//! structs and, for members with an associated external type or nested
//! objects, custom type/value wrappers and `To`/`From` converter functions.
//!
//! ```
//! use tfschema_gogen::schema::GeneratorSchema;
//! use tfschema_gogen::templates::Templates;
//!
//! let spec = serde_json::from_str(
//!     r#"{"attributes": [{"name": "enabled", "bool": {"computed_optional_required": "optional"}}]}"#,
//! )
//! .unwrap();
//! let schema = GeneratorSchema::new(&spec).unwrap();
//! let templates = Templates::new().unwrap();
//!
//! let text = schema.schema("ExampleResourceSchema", &templates).unwrap();
//! assert!(text.contains("\"enabled\": schema.BoolAttribute{\nOptional: true,\n},\n"));
//!
//! let models = schema.models("example");
//! assert_eq!(models[0].name, "ExampleModel");
//! ```
//!
//! In addition to a Rust library, this crate provides a binary tool `tfgogen`
//! to process specifications saved on disk:
//!
//! ```bash
//! cargo run --bin tfgogen -- --input provider-spec.json --output ./internal
//! ```
//!
//! Without `--output` the generated files are written to stdout. `--kind`
//! restricts generation to `resources`, `data-sources` or `provider`.

// errors
pub mod error;

// input model
pub mod spec;

// go imports and identifiers
pub mod identifier;
pub mod imports;

// schema fragments shared by every member kind
pub mod convert;
pub mod element_type;

// text templates
pub mod templates;

// generated members
pub mod attribute;
pub mod block;
pub mod nested;
pub mod schema;

// custom types, converters and models
pub mod custom_type;
pub mod model;
pub mod to_from;

// code generator
pub mod emit;

// configuration support for code generation
pub mod config;

/// Utility functions to help testing code generators.
#[doc(hidden)]
pub mod test_utils;
