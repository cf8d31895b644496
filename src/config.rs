// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::str::FromStr;

/// Framework surface a generated schema belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeneratorType {
    Resource,
    DataSource,
    Provider,
}

impl GeneratorType {
    /// Import path of the framework `schema` package for this surface.
    pub fn schema_import(self) -> &'static str {
        match self {
            GeneratorType::Resource => "github.com/hashicorp/terraform-plugin-framework/resource/schema",
            GeneratorType::DataSource => {
                "github.com/hashicorp/terraform-plugin-framework/datasource/schema"
            }
            GeneratorType::Provider => "github.com/hashicorp/terraform-plugin-framework/provider/schema",
        }
    }

    /// Suffix of the generated schema function, e.g. `ThingResourceSchema`.
    pub fn func_suffix(self) -> &'static str {
        match self {
            GeneratorType::Resource => "ResourceSchema",
            GeneratorType::DataSource => "DataSourceSchema",
            GeneratorType::Provider => "ProviderSchema",
        }
    }

    /// Prefix of the per-schema Go package and output directory.
    pub fn package_prefix(self) -> &'static str {
        match self {
            GeneratorType::Resource => "resource_",
            GeneratorType::DataSource => "datasource_",
            GeneratorType::Provider => "provider_",
        }
    }
}

impl fmt::Display for GeneratorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GeneratorType::Resource => "resource",
            GeneratorType::DataSource => "data source",
            GeneratorType::Provider => "provider",
        };
        f.write_str(s)
    }
}

impl FromStr for GeneratorType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resource" | "resources" => Ok(GeneratorType::Resource),
            "datasource" | "data-source" | "data-sources" => Ok(GeneratorType::DataSource),
            "provider" => Ok(GeneratorType::Provider),
            other => Err(format!("unknown generator type: {}", other)),
        }
    }
}

/// Code generation options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeGeneratorConfig {
    pub(crate) package_name: Option<String>,
    pub(crate) header: Option<String>,
    pub(crate) generator_type: GeneratorType,
}

impl CodeGeneratorConfig {
    /// Default config: resource schemas, one package per schema, no header.
    pub fn new() -> Self {
        Self {
            package_name: None,
            header: None,
            generator_type: GeneratorType::Resource,
        }
    }

    /// Fixed Go package name. When unset, each schema gets its own package
    /// named after the generator type prefix and the schema name.
    pub fn with_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = Some(package_name.into());
        self
    }

    /// Free text written as a comment above the generated code marker.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        // Make sure the header ends with a (single) newline.
        self.header = Some(format!("{}\n", header.into().trim()));
        self
    }

    pub fn with_generator_type(mut self, generator_type: GeneratorType) -> Self {
        self.generator_type = generator_type;
        self
    }

    pub fn generator_type(&self) -> GeneratorType {
        self.generator_type
    }

    /// Go package of the file generated for `schema_name`.
    pub fn package_for(&self, schema_name: &str) -> String {
        match &self.package_name {
            Some(name) => name.clone(),
            None => format!("{}{}", self.generator_type.package_prefix(), schema_name),
        }
    }
}

impl Default for CodeGeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
