//! Nested objects.
//!
//! List, map and set nested attributes wrap a [`NestedAttributeObject`]; list
//! and set nested blocks wrap a [`NestedBlockObject`], which may also hold
//! child blocks. Single nested members carry the same content inline and reuse
//! these types for it.
//!
//! Every traversal that produces text visits members in key order, with
//! attributes and blocks of one level merged.

use crate::attribute::{GeneratorAttribute, GeneratorAttributes};
use crate::block::{GeneratorBlock, GeneratorBlocks};
use crate::convert::{custom_type_field, custom_type_imports, PlanModifiers, Validators};
use crate::custom_type::{render_custom_object, ObjectField};
use crate::error::{Error, Result};
use crate::identifier::to_pascal_case;
use crate::imports::{Imports, TYPES_IMPORT};
use crate::model::{Model, ModelField};
use crate::spec::{self, AssociatedExternalType, AttributeSpec, BlockSpec, CustomType};
use crate::templates::Templates;
use crate::to_from::{render_nested_object, AssocExtType, ToFromConversion, ToFromField};
use std::collections::BTreeMap;

/// Borrowed view over a child attribute or block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Member<'a> {
    Attribute(&'a GeneratorAttribute),
    Block(&'a GeneratorBlock),
}

impl<'a> Member<'a> {
    pub fn schema(&self, name: &str, templates: &Templates) -> Result<String> {
        match self {
            Member::Attribute(a) => a.schema(name, templates),
            Member::Block(b) => b.schema(name, templates),
        }
    }

    pub fn imports(&self) -> Imports {
        match self {
            Member::Attribute(a) => a.imports(),
            Member::Block(b) => b.imports(),
        }
    }

    pub fn model_field(&self, name: &str) -> ModelField {
        match self {
            Member::Attribute(a) => a.model_field(name),
            Member::Block(b) => b.model_field(name),
        }
    }

    pub fn attr_type(&self, name: &str) -> Result<String> {
        match self {
            Member::Attribute(a) => a.attr_type(name),
            Member::Block(b) => Ok(b.attr_type(name)),
        }
    }

    pub fn attr_value(&self, name: &str) -> String {
        match self {
            Member::Attribute(a) => a.attr_value(name),
            Member::Block(b) => b.attr_value(name),
        }
    }

    pub fn to(&self) -> Result<Option<ToFromConversion>> {
        match self {
            Member::Attribute(a) => a.to(),
            Member::Block(b) => Ok(b.to()),
        }
    }

    pub fn from(&self) -> Result<Option<ToFromConversion>> {
        match self {
            Member::Attribute(a) => a.from(),
            Member::Block(b) => Ok(b.from()),
        }
    }

    pub fn custom_type_and_value(&self, name: &str, templates: &Templates) -> Result<String> {
        match self {
            Member::Attribute(a) => a.custom_type_and_value(name, templates),
            Member::Block(b) => b.custom_type_and_value(name, templates),
        }
    }

    pub fn to_from_functions(&self, name: &str, templates: &Templates) -> Result<String> {
        match self {
            Member::Attribute(a) => a.to_from_functions(name, templates),
            Member::Block(b) => b.to_from_functions(name, templates),
        }
    }

    pub fn models(&self, name: &str) -> Vec<Model> {
        match self {
            Member::Attribute(a) => a.models(name),
            Member::Block(b) => b.models(name),
        }
    }
}

/// Attributes and blocks of one level, merged in key order.
pub fn members<'a>(
    attributes: &'a GeneratorAttributes,
    blocks: Option<&'a GeneratorBlocks>,
) -> Vec<(&'a str, Member<'a>)> {
    let mut merged: BTreeMap<&str, Member<'_>> = attributes
        .iter()
        .map(|(k, v)| (k.as_str(), Member::Attribute(v)))
        .collect();
    if let Some(blocks) = blocks {
        merged.extend(blocks.iter().map(|(k, v)| (k.as_str(), Member::Block(v))));
    }
    merged.into_iter().collect()
}

/// Builds the child attributes of a nested level through the common
/// dispatcher. The first failing child aborts construction.
pub fn new_attributes(specs: &[AttributeSpec]) -> Result<GeneratorAttributes> {
    let mut attributes = GeneratorAttributes::new();
    for spec in specs {
        if attributes.contains_key(&spec.name) {
            return Err(Error::duplicate_member(&spec.name));
        }
        attributes.insert(spec.name.clone(), GeneratorAttribute::new(spec)?);
    }
    Ok(attributes)
}

pub fn new_blocks(specs: &[BlockSpec]) -> Result<GeneratorBlocks> {
    let mut blocks = GeneratorBlocks::new();
    for spec in specs {
        if blocks.contains_key(&spec.name) {
            return Err(Error::duplicate_member(&spec.name));
        }
        blocks.insert(spec.name.clone(), GeneratorBlock::new(spec)?);
    }
    Ok(blocks)
}

/// Attributes and blocks of one level. A name may appear once across both.
pub fn new_members(
    attributes: &[AttributeSpec],
    blocks: &[BlockSpec],
) -> Result<(GeneratorAttributes, GeneratorBlocks)> {
    let attributes = new_attributes(attributes)?;
    let blocks = new_blocks(blocks)?;
    if let Some(name) = blocks.keys().find(|name| attributes.contains_key(*name)) {
        return Err(Error::duplicate_member(name));
    }
    Ok((attributes, blocks))
}

/// Concatenated schema text of `attributes` in key order.
pub fn attributes_schema(attributes: &GeneratorAttributes, templates: &Templates) -> Result<String> {
    let mut s = String::new();
    for (name, attribute) in attributes {
        s.push_str(&attribute.schema(name, templates)?);
    }
    Ok(s)
}

pub fn blocks_schema(blocks: &GeneratorBlocks, templates: &Templates) -> Result<String> {
    let mut s = String::new();
    for (name, block) in blocks {
        s.push_str(&block.schema(name, templates)?);
    }
    Ok(s)
}

/// `CustomType` field of a nested object: the override when set, otherwise
/// the object type generated for `name`.
pub fn object_custom_type_field(name: &str, custom_type: Option<&CustomType>) -> String {
    match custom_type {
        Some(custom_type) => custom_type_field(custom_type),
        None => {
            let pascal = to_pascal_case(name);
            format!(
                "CustomType: {}Type{{\nObjectType: types.ObjectType{{\nAttrTypes: {}Value{{}}.AttributeTypes(ctx),\n}},\n}},\n",
                pascal, pascal
            )
        }
    }
}

/// Content shared by attribute and block objects.
#[derive(Debug, Clone, Default, PartialEq)]
struct ObjectCommon {
    associated_external_type: Option<AssocExtType>,
    custom_type: Option<CustomType>,
    plan_modifiers: PlanModifiers,
    validators: Validators,
}

impl ObjectCommon {
    fn new(
        associated_external_type: Option<&AssociatedExternalType>,
        custom_type: Option<&CustomType>,
        plan_modifiers: &[spec::PlanModifier],
        validators: &[spec::Validator],
    ) -> Self {
        Self {
            associated_external_type: associated_external_type.map(AssocExtType::new),
            custom_type: custom_type.cloned(),
            plan_modifiers: PlanModifiers::new("Object", plan_modifiers),
            validators: Validators::new("Object", validators),
        }
    }

    /// Own imports, before those of the children.
    fn imports(&self) -> Imports {
        let mut imports = Imports::new();
        if self.custom_type.is_some() {
            imports.append(&custom_type_imports(self.custom_type.as_ref()));
        } else {
            imports.add_path(TYPES_IMPORT);
        }
        imports.append(&self.plan_modifiers.imports());
        imports.append(&self.validators.imports());
        imports
    }

    fn custom_type_and_value(
        &self,
        name: &str,
        members: &[(&str, Member<'_>)],
        templates: &Templates,
    ) -> Result<String> {
        let mut s = String::new();
        if self.custom_type.is_none() {
            let mut fields = Vec::with_capacity(members.len());
            for (child, member) in members {
                fields.push(ObjectField::new(
                    child,
                    member.attr_type(child)?,
                    member.attr_value(child),
                ));
            }
            s.push_str(&render_custom_object(templates, name, &fields)?);
        }
        for (child, member) in members {
            s.push_str(&member.custom_type_and_value(child, templates)?);
        }
        Ok(s)
    }

    fn to_from_functions(
        &self,
        name: &str,
        members: &[(&str, Member<'_>)],
        templates: &Templates,
    ) -> Result<String> {
        let mut s = String::new();
        if let Some(assoc) = &self.associated_external_type {
            let mut fields = Vec::new();
            for (child, member) in members {
                if let (Some(to), Some(from)) = (member.to()?, member.from()?) {
                    fields.extend(ToFromField::new(child, &to, &from, &member.attr_value(child)));
                }
            }
            s.push_str(&render_nested_object(templates, name, assoc, &fields)?);
        }
        for (child, member) in members {
            s.push_str(&member.to_from_functions(child, templates)?);
        }
        Ok(s)
    }
}

/// Model struct of a nested level, followed by those of its children.
fn object_models(name: &str, members: &[(&str, Member<'_>)]) -> Vec<Model> {
    let fields = members
        .iter()
        .map(|(child, member)| member.model_field(child))
        .collect();
    let mut models = vec![Model::new(name, fields)];
    for (child, member) in members {
        models.extend(member.models(child));
    }
    models
}

/// Object wrapped by a list, map or set nested attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedAttributeObject {
    attributes: GeneratorAttributes,
    common: ObjectCommon,
}

impl NestedAttributeObject {
    pub fn new(spec: &spec::NestedAttributeObject) -> Result<Self> {
        Ok(Self {
            attributes: new_attributes(&spec.attributes)?,
            common: ObjectCommon::new(
                spec.associated_external_type.as_ref(),
                spec.custom_type.as_ref(),
                &spec.plan_modifiers,
                &spec.validators,
            ),
        })
    }

    /// Inline content of a single nested attribute. Its plan modifiers and
    /// validators belong to the attribute itself.
    pub(crate) fn inline(
        attributes: &[AttributeSpec],
        associated_external_type: Option<&AssociatedExternalType>,
        custom_type: Option<&CustomType>,
    ) -> Result<Self> {
        Ok(Self {
            attributes: new_attributes(attributes)?,
            common: ObjectCommon::new(associated_external_type, custom_type, &[], &[]),
        })
    }

    pub fn attributes(&self) -> &GeneratorAttributes {
        &self.attributes
    }

    pub fn associated_external_type(&self) -> Option<&AssocExtType> {
        self.common.associated_external_type.as_ref()
    }

    pub fn custom_type(&self) -> Option<&CustomType> {
        self.common.custom_type.as_ref()
    }

    pub fn plan_modifiers(&self) -> &PlanModifiers {
        &self.common.plan_modifiers
    }

    pub fn validators(&self) -> &Validators {
        &self.common.validators
    }

    pub fn attributes_schema(&self, templates: &Templates) -> Result<String> {
        attributes_schema(&self.attributes, templates)
    }

    pub fn custom_type_schema(&self, name: &str) -> String {
        object_custom_type_field(name, self.custom_type())
    }

    /// Object custom type, plan modifier and validator imports, then those of
    /// every child in key order.
    pub fn imports(&self) -> Imports {
        let mut imports = self.common.imports();
        for attribute in self.attributes.values() {
            imports.append(&attribute.imports());
        }
        imports
    }

    pub fn custom_type_and_value(&self, name: &str, templates: &Templates) -> Result<String> {
        let members = members(&self.attributes, None);
        self.common.custom_type_and_value(name, &members, templates)
    }

    pub fn to_from_functions(&self, name: &str, templates: &Templates) -> Result<String> {
        let members = members(&self.attributes, None);
        self.common.to_from_functions(name, &members, templates)
    }

    pub fn models(&self, name: &str) -> Vec<Model> {
        object_models(name, &members(&self.attributes, None))
    }
}

/// Object wrapped by a list or set nested block.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedBlockObject {
    attributes: GeneratorAttributes,
    blocks: GeneratorBlocks,
    common: ObjectCommon,
}

impl NestedBlockObject {
    pub fn new(spec: &spec::NestedBlockObject) -> Result<Self> {
        let (attributes, blocks) = new_members(&spec.attributes, &spec.blocks)?;
        Ok(Self {
            attributes,
            blocks,
            common: ObjectCommon::new(
                spec.associated_external_type.as_ref(),
                spec.custom_type.as_ref(),
                &spec.plan_modifiers,
                &spec.validators,
            ),
        })
    }

    /// Inline content of a single nested block.
    pub(crate) fn inline(
        attributes: &[AttributeSpec],
        blocks: &[BlockSpec],
        associated_external_type: Option<&AssociatedExternalType>,
        custom_type: Option<&CustomType>,
    ) -> Result<Self> {
        let (attributes, blocks) = new_members(attributes, blocks)?;
        Ok(Self {
            attributes,
            blocks,
            common: ObjectCommon::new(associated_external_type, custom_type, &[], &[]),
        })
    }

    pub fn attributes(&self) -> &GeneratorAttributes {
        &self.attributes
    }

    pub fn blocks(&self) -> &GeneratorBlocks {
        &self.blocks
    }

    pub fn associated_external_type(&self) -> Option<&AssocExtType> {
        self.common.associated_external_type.as_ref()
    }

    pub fn custom_type(&self) -> Option<&CustomType> {
        self.common.custom_type.as_ref()
    }

    pub fn plan_modifiers(&self) -> &PlanModifiers {
        &self.common.plan_modifiers
    }

    pub fn validators(&self) -> &Validators {
        &self.common.validators
    }

    pub fn attributes_schema(&self, templates: &Templates) -> Result<String> {
        attributes_schema(&self.attributes, templates)
    }

    pub fn blocks_schema(&self, templates: &Templates) -> Result<String> {
        blocks_schema(&self.blocks, templates)
    }

    pub fn custom_type_schema(&self, name: &str) -> String {
        object_custom_type_field(name, self.custom_type())
    }

    pub fn imports(&self) -> Imports {
        let mut imports = self.common.imports();
        for attribute in self.attributes.values() {
            imports.append(&attribute.imports());
        }
        for block in self.blocks.values() {
            imports.append(&block.imports());
        }
        imports
    }

    pub fn custom_type_and_value(&self, name: &str, templates: &Templates) -> Result<String> {
        let members = members(&self.attributes, Some(&self.blocks));
        self.common.custom_type_and_value(name, &members, templates)
    }

    pub fn to_from_functions(&self, name: &str, templates: &Templates) -> Result<String> {
        let members = members(&self.attributes, Some(&self.blocks));
        self.common.to_from_functions(name, &members, templates)
    }

    pub fn models(&self, name: &str) -> Vec<Model> {
        object_models(name, &members(&self.attributes, Some(&self.blocks)))
    }
}
