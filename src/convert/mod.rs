//! Renderers for the primitive fragments of a schema struct literal.
//!
//! Each type here turns one resolved spec value into the Go field text it
//! contributes (e.g. `Optional: true,\n`) plus the imports that text needs.
//! Attribute variants concatenate these fragments in a fixed order.

mod common;
mod custom_type;
mod default;
mod modifiers;

pub use common::{
    AttributeFields, BlockFields, ComputedOptionalRequired, DeprecationMessage, Description,
    Sensitive,
};
pub use custom_type::{custom_type_field, custom_type_imports, generated_type_field};
pub(crate) use default::{default_imports, default_schema};
pub use default::DefaultValue;
pub use modifiers::{PlanModifiers, Validators};
