//! Provider specification input model.
//!
//! The specification is a JSON document describing the provider, resource and
//! data source schemas of a Terraform provider. Every attribute and block entry
//! carries its name plus exactly one populated kind payload, e.g.
//!
//! ```json
//! {"name": "enabled", "bool": {"computed_optional_required": "optional"}}
//! ```
//!
//! The model is read-only input for the generators.

use crate::error::{Error, Result};
use crate::imports::Import;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Specification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<SchemaItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub datasources: Vec<SchemaItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Provider {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

/// A named resource or data source schema.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SchemaItem {
    pub name: String,
    #[serde(default)]
    pub schema: Schema,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Schema {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<BlockSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ComputedOptionalRequired {
    Computed,
    ComputedOptional,
    Optional,
    Required,
}

/// Caller supplied type override, e.g. `timetypes.RFC3339Type{}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CustomType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<Import>,
    #[serde(rename = "type")]
    pub r#type: String,
    #[serde(default)]
    pub value_type: String,
}

/// Foreign Go type that a generated value converts to and from.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AssociatedExternalType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<Import>,
    #[serde(rename = "type")]
    pub r#type: String,
}

/// Opaque Go expression plus the imports it requires.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CustomDefinition {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<Import>,
    pub schema_definition: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PlanModifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomDefinition>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Validator {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomDefinition>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BoolDefault {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomDefinition>,
    #[serde(rename = "static", default, skip_serializing_if = "Option::is_none")]
    pub static_value: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Float64Default {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomDefinition>,
    #[serde(rename = "static", default, skip_serializing_if = "Option::is_none")]
    pub static_value: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Int64Default {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomDefinition>,
    #[serde(rename = "static", default, skip_serializing_if = "Option::is_none")]
    pub static_value: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct StringDefault {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomDefinition>,
    #[serde(rename = "static", default, skip_serializing_if = "Option::is_none")]
    pub static_value: Option<String>,
}

/// Default for kinds that only support custom definitions.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CustomDefault {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomDefinition>,
}

// Element types

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ElementType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bool: Option<PrimitiveElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub float64: Option<PrimitiveElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub int64: Option<PrimitiveElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<PrimitiveElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string: Option<PrimitiveElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<Box<CollectionElement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<Box<CollectionElement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<Box<CollectionElement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<ObjectElement>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PrimitiveElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CollectionElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default)]
    pub element_type: ElementType,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ObjectElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default)]
    pub attribute_types: Vec<ObjectAttributeType>,
}

/// A named field of an object type.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ObjectAttributeType {
    pub name: String,
    #[serde(flatten)]
    pub element_type: ElementType,
}

/// Borrowed view of the populated tag of an [`ElementType`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementKind<'a> {
    Bool(&'a PrimitiveElement),
    Float64(&'a PrimitiveElement),
    Int64(&'a PrimitiveElement),
    Number(&'a PrimitiveElement),
    String(&'a PrimitiveElement),
    List(&'a CollectionElement),
    Map(&'a CollectionElement),
    Set(&'a CollectionElement),
    Object(&'a ObjectElement),
}

impl ElementType {
    /// Returns the populated tag, or an error when none is set.
    pub fn kind(&self) -> Result<ElementKind<'_>> {
        if let Some(e) = &self.bool {
            Ok(ElementKind::Bool(e))
        } else if let Some(e) = &self.float64 {
            Ok(ElementKind::Float64(e))
        } else if let Some(e) = &self.int64 {
            Ok(ElementKind::Int64(e))
        } else if let Some(e) = &self.number {
            Ok(ElementKind::Number(e))
        } else if let Some(e) = &self.string {
            Ok(ElementKind::String(e))
        } else if let Some(e) = &self.list {
            Ok(ElementKind::List(e))
        } else if let Some(e) = &self.map {
            Ok(ElementKind::Map(e))
        } else if let Some(e) = &self.set {
            Ok(ElementKind::Set(e))
        } else if let Some(e) = &self.object {
            Ok(ElementKind::Object(e))
        } else {
            Err(Error::unknown_kind("element", self))
        }
    }
}

impl<'a> ElementKind<'a> {
    pub fn custom_type(&self) -> Option<&'a CustomType> {
        match self {
            ElementKind::Bool(e)
            | ElementKind::Float64(e)
            | ElementKind::Int64(e)
            | ElementKind::Number(e)
            | ElementKind::String(e) => e.custom_type.as_ref(),
            ElementKind::List(e) | ElementKind::Map(e) | ElementKind::Set(e) => {
                e.custom_type.as_ref()
            }
            ElementKind::Object(e) => e.custom_type.as_ref(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Bool(_) => "bool",
            ElementKind::Float64(_) => "float64",
            ElementKind::Int64(_) => "int64",
            ElementKind::Number(_) => "number",
            ElementKind::String(_) => "string",
            ElementKind::List(_) => "list",
            ElementKind::Map(_) => "map",
            ElementKind::Set(_) => "set",
            ElementKind::Object(_) => "object",
        }
    }
}

// Attributes

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AttributeSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bool: Option<BoolAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub float64: Option<Float64Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub int64: Option<Int64Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<NumberAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string: Option<StringAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<CollectionAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<CollectionAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<CollectionAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<ObjectAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_nested: Option<NestedCollectionAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_nested: Option<NestedCollectionAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_nested: Option<NestedCollectionAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_nested: Option<SingleNestedAttribute>,
}

/// Borrowed view of the populated kind of an [`AttributeSpec`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeKind<'a> {
    Bool(&'a BoolAttribute),
    Float64(&'a Float64Attribute),
    Int64(&'a Int64Attribute),
    Number(&'a NumberAttribute),
    String(&'a StringAttribute),
    List(&'a CollectionAttribute),
    Map(&'a CollectionAttribute),
    Set(&'a CollectionAttribute),
    Object(&'a ObjectAttribute),
    ListNested(&'a NestedCollectionAttribute),
    MapNested(&'a NestedCollectionAttribute),
    SetNested(&'a NestedCollectionAttribute),
    SingleNested(&'a SingleNestedAttribute),
}

impl AttributeSpec {
    /// Resolves the kind payload. The first populated field wins; a spec with
    /// no populated field is rejected.
    pub fn kind(&self) -> Result<AttributeKind<'_>> {
        if let Some(a) = &self.bool {
            Ok(AttributeKind::Bool(a))
        } else if let Some(a) = &self.float64 {
            Ok(AttributeKind::Float64(a))
        } else if let Some(a) = &self.int64 {
            Ok(AttributeKind::Int64(a))
        } else if let Some(a) = &self.number {
            Ok(AttributeKind::Number(a))
        } else if let Some(a) = &self.string {
            Ok(AttributeKind::String(a))
        } else if let Some(a) = &self.list {
            Ok(AttributeKind::List(a))
        } else if let Some(a) = &self.map {
            Ok(AttributeKind::Map(a))
        } else if let Some(a) = &self.set {
            Ok(AttributeKind::Set(a))
        } else if let Some(a) = &self.object {
            Ok(AttributeKind::Object(a))
        } else if let Some(a) = &self.list_nested {
            Ok(AttributeKind::ListNested(a))
        } else if let Some(a) = &self.map_nested {
            Ok(AttributeKind::MapNested(a))
        } else if let Some(a) = &self.set_nested {
            Ok(AttributeKind::SetNested(a))
        } else if let Some(a) = &self.single_nested {
            Ok(AttributeKind::SingleNested(a))
        } else {
            Err(Error::unknown_kind("attribute", self))
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BoolAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed_optional_required: Option<ComputedOptionalRequired>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<BoolDefault>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Float64Attribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed_optional_required: Option<ComputedOptionalRequired>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Float64Default>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Int64Attribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed_optional_required: Option<ComputedOptionalRequired>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Int64Default>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NumberAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed_optional_required: Option<ComputedOptionalRequired>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<CustomDefault>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct StringAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed_optional_required: Option<ComputedOptionalRequired>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<StringDefault>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

/// Payload shared by list, map and set attributes.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CollectionAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed_optional_required: Option<ComputedOptionalRequired>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<CustomDefault>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub element_type: ElementType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ObjectAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed_optional_required: Option<ComputedOptionalRequired>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default)]
    pub attribute_types: Vec<ObjectAttributeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<CustomDefault>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

/// Object definition wrapped by list, map and set nested attributes.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NestedAttributeObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

/// Payload shared by list, map and set nested attributes.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NestedCollectionAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested_object: Option<NestedAttributeObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed_optional_required: Option<ComputedOptionalRequired>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<CustomDefault>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SingleNestedAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed_optional_required: Option<ComputedOptionalRequired>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<CustomDefault>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

// Blocks

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BlockSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_nested: Option<NestedCollectionBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_nested: Option<NestedCollectionBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_nested: Option<SingleNestedBlock>,
}

/// Borrowed view of the populated kind of a [`BlockSpec`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlockKind<'a> {
    ListNested(&'a NestedCollectionBlock),
    SetNested(&'a NestedCollectionBlock),
    SingleNested(&'a SingleNestedBlock),
}

impl BlockSpec {
    /// Resolves the kind payload, rejecting a spec with none populated.
    pub fn kind(&self) -> Result<BlockKind<'_>> {
        if let Some(b) = &self.list_nested {
            Ok(BlockKind::ListNested(b))
        } else if let Some(b) = &self.set_nested {
            Ok(BlockKind::SetNested(b))
        } else if let Some(b) = &self.single_nested {
            Ok(BlockKind::SingleNested(b))
        } else {
            Err(Error::unknown_kind("block", self))
        }
    }
}

/// Object definition wrapped by list and set nested blocks.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NestedBlockObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<BlockSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NestedCollectionBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested_object: Option<NestedBlockObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SingleNestedBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<BlockSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

impl FromStr for Specification {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

pub fn read_spec_from_file<P: AsRef<Path>>(path: P) -> Result<Specification> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let spec: Specification = serde_json::from_reader(reader)?;
    Ok(spec)
}
