//! Core schema type definitions for SCIM resources.
//!
//! This module contains the descriptors that define SCIM attributes and the
//! schemas that group them. Descriptors are loaded once, validated by the
//! [`SchemaRegistry`](super::SchemaRegistry) and never mutated afterwards.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// URI of the SCIM core schema.
pub const SCHEMA_URI_CORE: &str = "urn:scim:schemas:core:1.0";

/// URI of the SCIM enterprise user extension schema.
pub const SCHEMA_URI_ENTERPRISE_EXTENSION: &str = "urn:scim:schemas:extension:enterprise:1.0";

/// Name of the sub-attribute that discriminates plural values.
pub const TYPE_SUB_ATTRIBUTE: &str = "type";

/// Default canonical value holder of a multi-valued complex attribute.
pub const VALUE_SUB_ATTRIBUTE: &str = "value";

/// A SCIM schema definition.
///
/// A schema is identified by its URI and declares the attributes it owns
/// together with the resource types that are built from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    /// Unique schema identifier (URI)
    pub id: String,
    /// Human-readable schema name
    pub name: String,
    /// Schema description
    #[serde(default)]
    pub description: String,
    /// Resource types defined by this schema
    #[serde(default)]
    pub resources: Vec<ResourceDescriptor>,
    /// List of attribute descriptors
    pub attributes: Vec<AttributeDescriptor>,
}

impl Schema {
    /// Look up a top-level attribute by name, ignoring case.
    pub fn attribute(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }
}

/// A SCIM resource type such as User or Group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Resource name, e.g. "User"
    pub name: String,
    /// URI of the schema that defines the resource's core attributes
    #[serde(default)]
    pub schema: String,
    /// Resource description
    #[serde(default)]
    pub description: String,
    /// Query endpoint, e.g. "Users"
    #[serde(default)]
    pub endpoint: String,
}

/// Descriptor of a SCIM attribute.
///
/// Identifies one attribute by (schema URI, name) and records its data type,
/// multiplicity and, for complex attributes, its sub-attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDescriptor {
    /// Attribute name
    pub name: String,
    /// URI of the schema the attribute belongs to
    #[serde(default)]
    pub schema: String,
    /// Data type of the attribute
    #[serde(rename = "type")]
    pub data_type: DataType,
    /// Whether this attribute can have multiple values
    #[serde(default)]
    pub multi_valued: bool,
    /// Attribute description
    #[serde(default)]
    pub description: String,
    /// Whether this attribute is required
    #[serde(default)]
    pub required: bool,
    /// Whether string comparison is case-sensitive
    #[serde(default)]
    pub case_exact: bool,
    /// Sub-attributes for complex types
    #[serde(default)]
    pub sub_attributes: Vec<AttributeDescriptor>,
    /// Sub-attribute holding the canonical value of a complex attribute
    #[serde(default)]
    pub canonical_sub_attribute: Option<String>,
}

impl AttributeDescriptor {
    /// Create a singular attribute of a simple data type.
    pub fn simple(schema: impl Into<String>, name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
            data_type,
            multi_valued: false,
            description: String::new(),
            required: false,
            case_exact: false,
            sub_attributes: Vec::new(),
            canonical_sub_attribute: None,
        }
    }

    /// Create a singular complex attribute.
    pub fn complex(
        schema: impl Into<String>,
        name: impl Into<String>,
        sub_attributes: Vec<AttributeDescriptor>,
    ) -> Self {
        Self {
            sub_attributes,
            ..Self::simple(schema, name, DataType::Complex)
        }
    }

    /// Create a multi-valued complex attribute.
    pub fn plural(
        schema: impl Into<String>,
        name: impl Into<String>,
        sub_attributes: Vec<AttributeDescriptor>,
    ) -> Self {
        Self {
            multi_valued: true,
            ..Self::complex(schema, name, sub_attributes)
        }
    }

    pub fn is_complex(&self) -> bool {
        self.data_type == DataType::Complex
    }

    /// Look up a sub-attribute by name, ignoring case.
    pub fn sub_attribute(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.sub_attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// Name of the sub-attribute that carries the canonical value.
    pub fn value_sub_attribute(&self) -> &str {
        self.canonical_sub_attribute
            .as_deref()
            .unwrap_or(VALUE_SUB_ATTRIBUTE)
    }

    /// Copy `schema` into this descriptor and all of its sub-attributes.
    pub(crate) fn assign_schema(&mut self, schema: &str) {
        self.schema = schema.to_string();
        for sub in &mut self.sub_attributes {
            sub.assign_schema(schema);
        }
    }

    /// Check the structural invariants of the descriptor.
    ///
    /// Complex attributes must declare uniquely named sub-attributes, which
    /// must themselves be simple. Simple attributes declare none.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.name.is_empty() {
            return Err(ConfigError::invalid_schema(
                &self.schema,
                "attribute with an empty name",
            ));
        }

        if !self.is_complex() {
            if !self.sub_attributes.is_empty() {
                return Err(ConfigError::invalid_schema(
                    &self.schema,
                    format!("simple attribute '{}' declares sub-attributes", self.name),
                ));
            }
            return Ok(());
        }

        if self.sub_attributes.is_empty() {
            return Err(ConfigError::invalid_schema(
                &self.schema,
                format!("complex attribute '{}' has no sub-attributes", self.name),
            ));
        }

        let mut seen = HashSet::new();
        for sub in &self.sub_attributes {
            if sub.is_complex() {
                return Err(ConfigError::invalid_schema(
                    &self.schema,
                    format!("'{}.{}' nests a complex attribute", self.name, sub.name),
                ));
            }
            if sub.multi_valued {
                return Err(ConfigError::invalid_schema(
                    &self.schema,
                    format!("'{}.{}' nests a multi-valued attribute", self.name, sub.name),
                ));
            }
            if !seen.insert(sub.name.to_ascii_lowercase()) {
                return Err(ConfigError::invalid_schema(
                    &self.schema,
                    format!("'{}' declares sub-attribute '{}' twice", self.name, sub.name),
                ));
            }
        }

        if let Some(canonical) = &self.canonical_sub_attribute {
            if self.sub_attribute(canonical).is_none() {
                return Err(ConfigError::UnknownSubAttribute {
                    attribute: self.name.clone(),
                    sub_attribute: canonical.clone(),
                });
            }
        }

        Ok(())
    }
}

/// SCIM attribute data types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum DataType {
    /// String value
    #[default]
    String,
    /// Boolean value
    Boolean,
    /// Integer number
    Integer,
    /// DateTime in RFC3339 format
    DateTime,
    /// Binary data (base64 encoded in string form)
    Binary,
    /// Complex attribute with sub-attributes
    Complex,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::String => "string",
            DataType::Boolean => "boolean",
            DataType::Integer => "integer",
            DataType::DateTime => "dateTime",
            DataType::Binary => "binary",
            DataType::Complex => "complex",
        };
        f.write_str(name)
    }
}
