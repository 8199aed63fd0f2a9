//! Declarative mapping configuration.
//!
//! Resource mappings are described in JSON and resolved against a
//! [`SchemaRegistry`] into [`ResourceMapper`]s:
//!
//! ```json
//! {
//!   "resources": [{
//!     "name": "User",
//!     "structuralObjectClass": "inetOrgPerson",
//!     "objectClasses": ["top", "person", "organizationalPerson", "inetOrgPerson"],
//!     "rdnAttribute": "uid",
//!     "attributes": [
//!       { "name": "userName", "simple": { "ldapAttribute": "uid" } },
//!       { "name": "name", "complex": {
//!           "sortSubAttribute": "familyName",
//!           "subAttributes": [{ "name": "familyName", "ldapAttribute": "sn" }] } },
//!       { "name": "emails", "plural": { "types": [
//!           { "type": "work", "subAttributes": [{ "name": "value", "ldapAttribute": "mail" }] }
//!       ] } }
//!     ]
//!   }]
//! }
//! ```

use super::attribute::AttributeMapper;
use super::plural_value::PluralValueMapper;
use super::resource::ResourceMapper;
use super::value::{Transformation, ValueMapper};
use crate::error::{ConfigError, ConfigResult};
use crate::schema::{SCHEMA_URI_CORE, SchemaRegistry};

use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Mapping configuration for a set of resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingConfig {
    pub resources: Vec<ResourceDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDefinition {
    pub name: String,
    #[serde(default = "default_schema")]
    pub schema: String,
    #[serde(default)]
    pub structural_object_class: Option<String>,
    #[serde(default)]
    pub object_classes: Vec<String>,
    #[serde(default)]
    pub rdn_attribute: Option<String>,
    pub attributes: Vec<AttributeDefinition>,
}

/// Mapping of one SCIM attribute. Exactly one of `simple`, `complex` and
/// `plural` must be given.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDefinition {
    pub name: String,
    /// Schema of the attribute; defaults to the resource's schema
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple: Option<SimpleDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complex: Option<ComplexDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<PluralDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleDefinition {
    pub ldap_attribute: String,
    #[serde(default)]
    pub transformation: Transformation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubAttributeDefinition {
    pub name: String,
    pub ldap_attribute: String,
    #[serde(default)]
    pub transformation: Transformation,
    #[serde(default)]
    pub single_valued: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexDefinition {
    #[serde(default)]
    pub sort_sub_attribute: Option<String>,
    pub sub_attributes: Vec<SubAttributeDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluralDefinition {
    pub types: Vec<PluralTypeDefinition>,
}

/// Value mappers for one plural type; no `type` means the default mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluralTypeDefinition {
    #[serde(rename = "type", default)]
    pub type_value: Option<String>,
    pub sub_attributes: Vec<SubAttributeDefinition>,
}

fn default_schema() -> String {
    SCHEMA_URI_CORE.to_string()
}

impl MappingConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(&path)?;
        let config = Self::from_json(&content)?;
        info!(
            "Loaded {} resource mappings from {}",
            config.resources.len(),
            path.as_ref().display()
        );
        Ok(config)
    }

    /// Resolve every resource definition into a mapper.
    pub fn build(&self, registry: &SchemaRegistry) -> ConfigResult<Vec<ResourceMapper>> {
        self.resources
            .iter()
            .map(|resource| resource.build(registry))
            .collect()
    }
}

impl ResourceDefinition {
    pub fn build(&self, registry: &SchemaRegistry) -> ConfigResult<ResourceMapper> {
        let mut builder = ResourceMapper::builder(&self.name)
            .schema(&self.schema)
            .object_classes(self.object_classes.iter().cloned());
        if let Some(object_class) = &self.structural_object_class {
            builder = builder.structural_object_class(object_class);
        }
        if let Some(rdn) = &self.rdn_attribute {
            builder = builder.rdn_attribute(rdn);
        }

        for attribute in &self.attributes {
            builder = builder.attribute_mapper(attribute.build(&self.name, &self.schema, registry)?);
        }
        builder.build()
    }
}

impl AttributeDefinition {
    fn build(
        &self,
        resource: &str,
        default_schema: &str,
        registry: &SchemaRegistry,
    ) -> ConfigResult<AttributeMapper> {
        let schema = self.schema.as_deref().unwrap_or(default_schema);
        let descriptor = registry.require_attribute(schema, &self.name)?;

        match (&self.simple, &self.complex, &self.plural) {
            (Some(simple), None, None) => AttributeMapper::simple(
                descriptor,
                ValueMapper::new(&self.name, &simple.ldap_attribute)
                    .with_transformation(simple.transformation),
            ),
            (None, Some(complex), None) => AttributeMapper::complex(
                descriptor,
                complex
                    .sub_attributes
                    .iter()
                    .map(SubAttributeDefinition::to_value_mapper)
                    .collect(),
                complex.sort_sub_attribute.as_deref(),
            ),
            (None, None, Some(plural)) => AttributeMapper::plural(
                descriptor,
                plural
                    .types
                    .iter()
                    .map(|t| {
                        PluralValueMapper::new(
                            t.type_value.clone(),
                            t.sub_attributes
                                .iter()
                                .map(SubAttributeDefinition::to_value_mapper)
                                .collect(),
                        )
                    })
                    .collect(),
            ),
            _ => Err(ConfigError::invalid_resource(
                resource,
                format!(
                    "attribute '{}' must have exactly one of simple, complex or plural",
                    self.name
                ),
            )),
        }
    }
}

impl SubAttributeDefinition {
    fn to_value_mapper(&self) -> ValueMapper {
        ValueMapper::new(&self.name, &self.ldap_attribute)
            .with_transformation(self.transformation)
            .single_valued(self.single_valued)
    }
}
