//! Schema registry for loading, managing, and accessing SCIM schemas.
//!
//! The registry is built once at startup and handed by reference to every
//! mapper that needs attribute descriptors. It is never mutated while
//! requests are being served.

use super::embedded;
use super::types::{AttributeDescriptor, ResourceDescriptor, Schema};
use crate::error::{ConfigError, ConfigResult};

use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Registry of SCIM schemas and the attribute descriptors they define.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, Arc<Schema>>,
    attributes: HashMap<(String, String), Arc<AttributeDescriptor>>,
    resources: HashMap<String, ResourceDescriptor>,
}

impl SchemaRegistry {
    /// Create a registry holding the embedded core and enterprise schemas.
    pub fn new() -> ConfigResult<Self> {
        Self::with_embedded_schemas()
    }

    /// Create a registry holding the embedded core and enterprise schemas.
    pub fn with_embedded_schemas() -> ConfigResult<Self> {
        let mut registry = Self::empty();
        registry.add_schema(Self::load_schema_from_str(embedded::core_schema())?)?;
        registry.add_schema(Self::load_schema_from_str(
            embedded::enterprise_extension_schema(),
        )?)?;
        Ok(registry)
    }

    /// Create a registry without any schemas.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a schema from a JSON file and add it to the registry.
    pub fn add_schema_file<P: AsRef<Path>>(&mut self, path: P) -> ConfigResult<()> {
        let content = fs::read_to_string(&path)?;
        self.add_schema(Self::load_schema_from_str(&content)?)
    }

    /// Load a schema from a JSON string.
    fn load_schema_from_str(content: &str) -> ConfigResult<Schema> {
        Ok(serde_json::from_str(content)?)
    }

    /// Add a schema to the registry.
    ///
    /// Every descriptor is stamped with the schema URI and validated. A
    /// schema URI may only be registered once and attribute names must be
    /// unique within a schema.
    pub fn add_schema(&mut self, mut schema: Schema) -> ConfigResult<()> {
        if schema.id.is_empty() {
            return Err(ConfigError::invalid_schema("", "schema without an id"));
        }
        if self.schemas.contains_key(&schema.id) {
            return Err(ConfigError::invalid_schema(
                &schema.id,
                "schema is already registered",
            ));
        }

        let schema_id = schema.id.clone();
        let mut attributes = HashMap::new();
        for descriptor in &mut schema.attributes {
            descriptor.assign_schema(&schema_id);
            descriptor.validate()?;

            let key = (schema_id.clone(), descriptor.name.to_ascii_lowercase());
            if attributes
                .insert(key, Arc::new(descriptor.clone()))
                .is_some()
            {
                return Err(ConfigError::invalid_schema(
                    &schema_id,
                    format!("attribute '{}' is declared twice", descriptor.name),
                ));
            }
        }

        for resource in &mut schema.resources {
            if resource.schema.is_empty() {
                resource.schema = schema_id.clone();
            }
            self.resources
                .insert(resource.name.to_ascii_lowercase(), resource.clone());
        }

        debug!(
            "Registered schema {} with {} attributes",
            schema_id,
            attributes.len()
        );
        self.attributes.extend(attributes);
        self.schemas.insert(schema_id, Arc::new(schema));
        Ok(())
    }

    /// Get all available schemas.
    pub fn get_schemas(&self) -> Vec<&Schema> {
        self.schemas.values().map(|s| s.as_ref()).collect()
    }

    /// Get a specific schema by URI.
    pub fn get_schema(&self, id: &str) -> Option<&Schema> {
        self.schemas.get(id).map(|s| s.as_ref())
    }

    /// Get a shared attribute descriptor by schema URI and name.
    pub fn attribute(&self, schema: &str, name: &str) -> Option<Arc<AttributeDescriptor>> {
        self.attributes
            .get(&(schema.to_string(), name.to_ascii_lowercase()))
            .cloned()
    }

    /// Get a shared attribute descriptor, failing if it is not registered.
    pub fn require_attribute(
        &self,
        schema: &str,
        name: &str,
    ) -> ConfigResult<Arc<AttributeDescriptor>> {
        if !self.schemas.contains_key(schema) {
            return Err(ConfigError::UnknownSchema {
                schema: schema.to_string(),
            });
        }
        self.attribute(schema, name)
            .ok_or_else(|| ConfigError::UnknownAttribute {
                schema: schema.to_string(),
                attribute: name.to_string(),
            })
    }

    /// Get a resource descriptor by resource name, ignoring case.
    pub fn resource_descriptor(&self, name: &str) -> Option<&ResourceDescriptor> {
        self.resources.get(&name.to_ascii_lowercase())
    }
}
