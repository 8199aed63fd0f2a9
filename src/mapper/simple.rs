//! Mapping of a singular simple attribute to one directory attribute.

use super::attribute::leaf_filter;
use super::value::ValueMapper;
use crate::error::{ConfigError, ConfigResult, MappingResult};
use crate::filter::ScimFilter;
use crate::ldap::{Entry, LdapAttribute, LdapFilter, LdapFilterExt};
use crate::resource::{ScimAttribute, ScimObject};
use crate::schema::AttributeDescriptor;

use log::{debug, warn};
use std::sync::Arc;

/// Maps a singular simple SCIM attribute to a single directory attribute.
#[derive(Debug, Clone)]
pub struct SimpleAttributeMapper {
    descriptor: Arc<AttributeDescriptor>,
    value_mapper: ValueMapper,
    ldap_attribute_types: Vec<String>,
}

impl SimpleAttributeMapper {
    /// Fails if the descriptor is complex or multi-valued.
    pub fn new(descriptor: Arc<AttributeDescriptor>, value_mapper: ValueMapper) -> ConfigResult<Self> {
        if descriptor.is_complex() {
            return Err(ConfigError::mismatch(
                &descriptor.name,
                "simple",
                "attribute is complex",
            ));
        }
        if descriptor.multi_valued {
            return Err(ConfigError::mismatch(
                &descriptor.name,
                "simple",
                "attribute is multi-valued",
            ));
        }
        let ldap_attribute_types = vec![value_mapper.ldap_attribute().to_string()];
        Ok(Self {
            descriptor,
            value_mapper,
            ldap_attribute_types,
        })
    }

    pub fn descriptor(&self) -> &Arc<AttributeDescriptor> {
        &self.descriptor
    }

    pub fn value_mapper(&self) -> &ValueMapper {
        &self.value_mapper
    }

    pub fn ldap_attribute_types(&self) -> &[String] {
        &self.ldap_attribute_types
    }

    pub fn to_ldap_attributes(&self, object: &ScimObject, attributes: &mut Vec<LdapAttribute>) {
        let Some(value) = object
            .get_attribute(&self.descriptor.schema, &self.descriptor.name)
            .and_then(ScimAttribute::singular_value)
        else {
            return;
        };
        if let Some(ldap_value) = self.value_mapper.to_ldap_value(value) {
            attributes.push(LdapAttribute::new(
                self.value_mapper.ldap_attribute(),
                ldap_value,
            ));
        }
    }

    pub fn to_scim_attribute(&self, entry: &Entry) -> Option<ScimAttribute> {
        let ldap_value = entry.attribute_value(self.value_mapper.ldap_attribute())?;
        let value = self
            .value_mapper
            .to_scim_value(ldap_value, &self.descriptor)
            .inspect_err(|e| {
                warn!(
                    "Dropping value of {} from {}: {}",
                    self.value_mapper.ldap_attribute(),
                    entry.dn(),
                    e
                )
            })
            .ok()?;
        ScimAttribute::singular(Arc::clone(&self.descriptor), value)
            .inspect_err(|e| warn!("Dropping attribute {}: {}", self.descriptor.name, e))
            .ok()
    }

    pub fn to_ldap_filter(&self, filter: &ScimFilter) -> MappingResult<LdapFilter> {
        let operation = filter.filter_operation()?;
        if filter.attribute_path().len() > 1 {
            debug!(
                "Simple attribute {} has no sub-attributes, filter {} matches nothing",
                self.descriptor.name, filter
            );
            return Ok(LdapFilter::always_false());
        }
        leaf_filter(operation, &self.value_mapper, filter)
    }
}
