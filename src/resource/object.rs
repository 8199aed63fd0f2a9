//! SCIM objects as a collection of attributes grouped by schema.

use super::attribute::ScimAttribute;
use crate::schema::SCHEMA_URI_CORE;

use std::collections::HashMap;

/// A SCIM resource instance, such as one User.
///
/// Attributes are keyed by schema URI and then by attribute name. Names are
/// matched without regard to case and each (schema, name) pair holds at
/// most one attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScimObject {
    resource_name: String,
    attributes: HashMap<String, HashMap<String, ScimAttribute>>,
}

impl ScimObject {
    pub fn new(resource_name: impl Into<String>) -> Self {
        Self {
            resource_name: resource_name.into(),
            attributes: HashMap::new(),
        }
    }

    /// Name of the resource type, e.g. "User".
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    pub fn set_resource_name(&mut self, resource_name: impl Into<String>) {
        self.resource_name = resource_name.into();
    }

    /// Add an attribute unless one with the same schema and name exists.
    ///
    /// Returns `false` and leaves the object untouched on a duplicate.
    pub fn add_attribute(&mut self, attribute: ScimAttribute) -> bool {
        let by_name = self
            .attributes
            .entry(attribute.schema().to_string())
            .or_default();
        let key = attribute.name().to_ascii_lowercase();
        if by_name.contains_key(&key) {
            return false;
        }
        by_name.insert(key, attribute);
        true
    }

    /// Add an attribute, replacing any existing one with the same schema and name.
    pub fn set_attribute(&mut self, attribute: ScimAttribute) -> Option<ScimAttribute> {
        self.attributes
            .entry(attribute.schema().to_string())
            .or_default()
            .insert(attribute.name().to_ascii_lowercase(), attribute)
    }

    pub fn get_attribute(&self, schema: &str, name: &str) -> Option<&ScimAttribute> {
        self.attributes
            .get(schema)
            .and_then(|by_name| by_name.get(&name.to_ascii_lowercase()))
    }

    pub fn has_attribute(&self, schema: &str, name: &str) -> bool {
        self.get_attribute(schema, name).is_some()
    }

    pub fn remove_attribute(&mut self, schema: &str, name: &str) -> Option<ScimAttribute> {
        let by_name = self.attributes.get_mut(schema)?;
        let removed = by_name.remove(&name.to_ascii_lowercase());
        if by_name.is_empty() {
            self.attributes.remove(schema);
        }
        removed
    }

    /// Schema URIs that have at least one attribute in this object.
    pub fn schemas(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Attributes of a single schema.
    pub fn attributes(&self, schema: &str) -> impl Iterator<Item = &ScimAttribute> {
        self.attributes
            .get(schema)
            .into_iter()
            .flat_map(|by_name| by_name.values())
    }

    /// All attributes across every schema.
    pub fn all_attributes(&self) -> impl Iterator<Item = &ScimAttribute> {
        self.attributes.values().flat_map(|by_name| by_name.values())
    }

    pub fn len(&self) -> usize {
        self.attributes.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The core `id` attribute as a string, if present.
    pub fn id(&self) -> Option<&str> {
        self.get_attribute(SCHEMA_URI_CORE, "id")
            .and_then(|a| a.value().as_str())
    }
}
