//! Mapping of a singular complex attribute.
//!
//! Each mapped sub-attribute is stored in its own single-valued directory
//! attribute, e.g. `name.familyName` in `sn` and `name.givenName` in
//! `givenName`.

use super::attribute::leaf_filter;
use super::value::ValueMapper;
use crate::error::{ConfigError, ConfigResult, MappingResult};
use crate::filter::ScimFilter;
use crate::ldap::{Entry, LdapAttribute, LdapFilter, LdapFilterExt};
use crate::resource::{AttributeValue, ScimAttribute, ScimObject};
use crate::schema::AttributeDescriptor;

use log::{debug, warn};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ComplexSingularAttributeMapper {
    descriptor: Arc<AttributeDescriptor>,
    value_mappers: Vec<ValueMapper>,
    sort_ldap_attribute: Option<String>,
    ldap_attribute_types: Vec<String>,
}

impl ComplexSingularAttributeMapper {
    /// Create the mapper.
    ///
    /// Every value mapper must name a sub-attribute of `descriptor`, and
    /// `sort_sub_attribute`, when given, must be one of the mapped
    /// sub-attributes.
    pub fn new(
        descriptor: Arc<AttributeDescriptor>,
        value_mappers: Vec<ValueMapper>,
        sort_sub_attribute: Option<&str>,
    ) -> ConfigResult<Self> {
        if !descriptor.is_complex() {
            return Err(ConfigError::mismatch(
                &descriptor.name,
                "complex",
                "attribute is not complex",
            ));
        }
        if descriptor.multi_valued {
            return Err(ConfigError::mismatch(
                &descriptor.name,
                "complex",
                "attribute is multi-valued",
            ));
        }
        if value_mappers.is_empty() {
            return Err(ConfigError::EmptyMapping {
                attribute: descriptor.name.clone(),
            });
        }

        let mut seen = HashSet::new();
        for mapper in &value_mappers {
            if descriptor.sub_attribute(mapper.scim_attribute()).is_none() {
                return Err(ConfigError::UnknownSubAttribute {
                    attribute: descriptor.name.clone(),
                    sub_attribute: mapper.scim_attribute().to_string(),
                });
            }
            if !seen.insert(mapper.scim_attribute().to_ascii_lowercase()) {
                return Err(ConfigError::mismatch(
                    &descriptor.name,
                    "complex",
                    format!("sub-attribute '{}' is mapped twice", mapper.scim_attribute()),
                ));
            }
        }

        let sort_ldap_attribute = match sort_sub_attribute {
            Some(sub) => Some(
                value_mappers
                    .iter()
                    .find(|m| m.scim_attribute().eq_ignore_ascii_case(sub))
                    .map(|m| m.ldap_attribute().to_string())
                    .ok_or_else(|| ConfigError::UnmappedSortAttribute {
                        attribute: descriptor.name.clone(),
                        sub_attribute: sub.to_string(),
                    })?,
            ),
            None => None,
        };

        let ldap_attribute_types = value_mappers
            .iter()
            .map(|m| m.ldap_attribute().to_string())
            .collect();

        Ok(Self {
            descriptor,
            value_mappers,
            sort_ldap_attribute,
            ldap_attribute_types,
        })
    }

    pub fn descriptor(&self) -> &Arc<AttributeDescriptor> {
        &self.descriptor
    }

    pub fn value_mappers(&self) -> &[ValueMapper] {
        &self.value_mappers
    }

    pub fn ldap_attribute_types(&self) -> &[String] {
        &self.ldap_attribute_types
    }

    pub fn sort_ldap_attribute(&self) -> Option<&str> {
        self.sort_ldap_attribute.as_deref()
    }

    pub fn to_ldap_attributes(&self, object: &ScimObject, attributes: &mut Vec<LdapAttribute>) {
        let Some(value) = object
            .get_attribute(&self.descriptor.schema, &self.descriptor.name)
            .and_then(ScimAttribute::singular_value)
        else {
            return;
        };

        for mapper in &self.value_mappers {
            if let Some(ldap_value) = value
                .sub_attribute(mapper.scim_attribute())
                .and_then(|sub| mapper.to_ldap_value(sub))
            {
                attributes.push(LdapAttribute::new(mapper.ldap_attribute(), ldap_value));
            }
        }
    }

    pub fn to_scim_attribute(&self, entry: &Entry) -> Option<ScimAttribute> {
        let mut sub_attributes = BTreeMap::new();
        for mapper in &self.value_mappers {
            let Some(ldap_value) = entry.attribute_value(mapper.ldap_attribute()) else {
                continue;
            };
            let Some(sub_descriptor) = self.descriptor.sub_attribute(mapper.scim_attribute())
            else {
                continue;
            };
            match mapper.to_scim_value(ldap_value, sub_descriptor) {
                Ok(value) => {
                    sub_attributes.insert(sub_descriptor.name.clone(), value);
                }
                Err(e) => warn!(
                    "Dropping value of {} from {}: {}",
                    mapper.ldap_attribute(),
                    entry.dn(),
                    e
                ),
            }
        }

        if sub_attributes.is_empty() {
            return None;
        }
        ScimAttribute::singular(
            Arc::clone(&self.descriptor),
            AttributeValue::Complex(sub_attributes),
        )
        .inspect_err(|e| warn!("Dropping attribute {}: {}", self.descriptor.name, e))
        .ok()
    }

    pub fn to_ldap_filter(&self, filter: &ScimFilter) -> MappingResult<LdapFilter> {
        let operation = filter.filter_operation()?;
        let Some(sub_attribute) = filter.sub_attribute_name() else {
            debug!(
                "Filter {} does not name a sub-attribute of {}, matching nothing",
                filter, self.descriptor.name
            );
            return Ok(LdapFilter::always_false());
        };

        match self
            .value_mappers
            .iter()
            .find(|m| m.scim_attribute().eq_ignore_ascii_case(sub_attribute))
        {
            Some(mapper) => leaf_filter(operation, mapper, filter),
            None => {
                debug!(
                    "Sub-attribute {}.{} is not mapped, filter matches nothing",
                    self.descriptor.name, sub_attribute
                );
                Ok(LdapFilter::always_false())
            }
        }
    }
}
