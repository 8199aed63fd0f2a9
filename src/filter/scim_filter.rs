//! Parsed SCIM filters.

use super::operation::FilterOperation;
use crate::error::MappingResult;
use crate::resource::path::split_schema;
use crate::schema::SCHEMA_URI_CORE;

use std::fmt;

/// A parsed SCIM filter.
///
/// A leaf filter compares the attribute at `attribute_schema` and
/// `attribute_path` using `operation`. The `and`/`or` operations combine
/// the filters in `components` instead. The operation is kept as given and
/// only interpreted when the filter is translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScimFilter {
    operation: String,
    value: Option<String>,
    attribute_schema: String,
    attribute_path: Vec<String>,
    components: Vec<ScimFilter>,
}

impl ScimFilter {
    pub fn new(
        operation: impl Into<String>,
        value: Option<String>,
        attribute_schema: impl Into<String>,
        attribute_path: Vec<String>,
    ) -> Self {
        Self {
            operation: operation.into(),
            value,
            attribute_schema: attribute_schema.into(),
            attribute_path,
            components: Vec::new(),
        }
    }

    /// Build a leaf filter from a `filterBy` attribute reference.
    ///
    /// The schema is split off at the last `:` and defaults to the core
    /// schema; the remainder is split into path segments on `.`.
    pub fn from_filter_by(filter_by: &str, operation: impl Into<String>, value: Option<String>) -> Self {
        let (schema, path) = split_schema(filter_by, SCHEMA_URI_CORE);
        let attribute_path = path.split('.').map(str::to_string).collect();
        Self::new(operation, value, schema, attribute_path)
    }

    pub fn equality(filter_by: &str, value: impl Into<String>) -> Self {
        Self::from_filter_by(filter_by, "equals", Some(value.into()))
    }

    pub fn equals_ignore_case(filter_by: &str, value: impl Into<String>) -> Self {
        Self::from_filter_by(filter_by, "equalsIgnoreCase", Some(value.into()))
    }

    pub fn contains(filter_by: &str, value: impl Into<String>) -> Self {
        Self::from_filter_by(filter_by, "contains", Some(value.into()))
    }

    pub fn starts_with(filter_by: &str, value: impl Into<String>) -> Self {
        Self::from_filter_by(filter_by, "startswith", Some(value.into()))
    }

    pub fn presence(filter_by: &str) -> Self {
        Self::from_filter_by(filter_by, "present", None)
    }

    pub fn greater_than(filter_by: &str, value: impl Into<String>) -> Self {
        Self::from_filter_by(filter_by, "gt", Some(value.into()))
    }

    pub fn greater_or_equal(filter_by: &str, value: impl Into<String>) -> Self {
        Self::from_filter_by(filter_by, "ge", Some(value.into()))
    }

    pub fn less_than(filter_by: &str, value: impl Into<String>) -> Self {
        Self::from_filter_by(filter_by, "lt", Some(value.into()))
    }

    pub fn less_or_equal(filter_by: &str, value: impl Into<String>) -> Self {
        Self::from_filter_by(filter_by, "le", Some(value.into()))
    }

    pub fn and(components: Vec<ScimFilter>) -> Self {
        Self::compound("and", components)
    }

    pub fn or(components: Vec<ScimFilter>) -> Self {
        Self::compound("or", components)
    }

    fn compound(operation: &str, components: Vec<ScimFilter>) -> Self {
        Self {
            operation: operation.to_string(),
            value: None,
            attribute_schema: String::new(),
            attribute_path: Vec::new(),
            components,
        }
    }

    /// The operation as given.
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Interpret the operation.
    pub fn filter_operation(&self) -> MappingResult<FilterOperation> {
        self.operation.parse()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn attribute_schema(&self) -> &str {
        &self.attribute_schema
    }

    pub fn attribute_path(&self) -> &[String] {
        &self.attribute_path
    }

    /// The first path segment.
    pub fn attribute_name(&self) -> Option<&str> {
        self.attribute_path.first().map(String::as_str)
    }

    /// The second path segment.
    pub fn sub_attribute_name(&self) -> Option<&str> {
        self.attribute_path.get(1).map(String::as_str)
    }

    pub fn components(&self) -> &[ScimFilter] {
        &self.components
    }
}

impl fmt::Display for ScimFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.components.is_empty() || self.attribute_path.is_empty() {
            f.write_str("(")?;
            for (index, component) in self.components.iter().enumerate() {
                if index > 0 {
                    write!(f, " {} ", self.operation)?;
                }
                write!(f, "{}", component)?;
            }
            return f.write_str(")");
        }

        if self.attribute_schema != SCHEMA_URI_CORE {
            write!(f, "{}:", self.attribute_schema)?;
        }
        write!(f, "{} {}", self.attribute_path.join("."), self.operation)?;
        if let Some(value) = &self.value {
            write!(f, " \"{}\"", value)?;
        }
        Ok(())
    }
}
