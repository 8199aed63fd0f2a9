//! Attributes requested by a query.

use super::attribute::ScimAttribute;
use super::path::AttributePath;
use super::value::AttributeValue;
use crate::schema::AttributeDescriptor;

use std::collections::BTreeMap;
use std::sync::Arc;

/// The set of attributes a client asked to be returned.
///
/// An empty set requests every attribute. A request for `name.givenName`
/// requests the `name` attribute pared down to that sub-attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryAttributes {
    paths: Vec<AttributePath>,
}

impl QueryAttributes {
    /// Request every attribute.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn from_paths(paths: Vec<AttributePath>) -> Self {
        Self { paths }
    }

    /// Parse a comma separated `attributes` query parameter.
    pub fn parse(attributes: &str) -> Self {
        Self {
            paths: attributes
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(AttributePath::parse)
                .collect(),
        }
    }

    pub fn paths(&self) -> &[AttributePath] {
        &self.paths
    }

    pub fn all_attributes_requested(&self) -> bool {
        self.paths.is_empty()
    }

    /// Whether an attribute of this name is requested in any schema.
    pub fn is_attribute_requested(&self, name: &str) -> bool {
        self.all_attributes_requested()
            || self
                .paths
                .iter()
                .any(|p| p.attribute_name.eq_ignore_ascii_case(name))
    }

    /// Whether the attribute described by `descriptor` is requested.
    pub fn is_descriptor_requested(&self, descriptor: &AttributeDescriptor) -> bool {
        self.all_attributes_requested()
            || self
                .paths
                .iter()
                .any(|p| p.refers_to(&descriptor.schema, &descriptor.name))
    }

    /// Reduce an attribute to the requested sub-attributes.
    ///
    /// Returns `None` when the attribute is not requested or when nothing of
    /// it remains after paring.
    pub fn pare_attribute(&self, attribute: ScimAttribute) -> Option<ScimAttribute> {
        if self.all_attributes_requested() {
            return Some(attribute);
        }

        let mut sub_attributes = Vec::new();
        for path in self
            .paths
            .iter()
            .filter(|p| p.refers_to(attribute.schema(), attribute.name()))
        {
            match &path.sub_attribute_name {
                None => return Some(attribute),
                Some(sub) => sub_attributes.push(sub.as_str()),
            }
        }
        if sub_attributes.is_empty() {
            return None;
        }

        let descriptor = Arc::clone(attribute.descriptor());
        let pared = match attribute.into_value() {
            AttributeValue::Complex(map) => {
                AttributeValue::Complex(pare_complex(map, &sub_attributes)?)
            }
            AttributeValue::Plural(values) => {
                let values: Vec<AttributeValue> = values
                    .into_iter()
                    .filter_map(|value| match value {
                        AttributeValue::Complex(map) => {
                            pare_complex(map, &sub_attributes).map(AttributeValue::Complex)
                        }
                        other => Some(other),
                    })
                    .collect();
                if values.is_empty() {
                    return None;
                }
                AttributeValue::Plural(values)
            }
            scalar => scalar,
        };
        Some(ScimAttribute::from_conforming(descriptor, pared))
    }
}

fn pare_complex(
    map: BTreeMap<String, AttributeValue>,
    sub_attributes: &[&str],
) -> Option<BTreeMap<String, AttributeValue>> {
    let pared: BTreeMap<String, AttributeValue> = map
        .into_iter()
        .filter(|(name, _)| sub_attributes.iter().any(|s| s.eq_ignore_ascii_case(name)))
        .collect();
    if pared.is_empty() { None } else { Some(pared) }
}
