//! Mapping of a plural complex attribute.
//!
//! Elements are routed by their `type` sub-attribute. Each type has its
//! own value mappers, so `phoneNumbers` of type `work` can be stored in
//! `telephoneNumber` while type `home` goes to `homePhone`. An untyped
//! mapper catches elements whose type is not configured and reads every
//! value of its directory attribute back as one element.

use super::attribute::leaf_filter;
use super::plural_value::PluralValueMapper;
use super::value::ValueMapper;
use crate::error::{ConfigError, ConfigResult, MappingResult};
use crate::filter::ScimFilter;
use crate::ldap::{Entry, LdapAttribute, LdapFilter, LdapFilterExt};
use crate::resource::{AttributeValue, ScimAttribute, ScimObject};
use crate::schema::{AttributeDescriptor, TYPE_SUB_ATTRIBUTE};

use log::{debug, trace, warn};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Maps a plural complex SCIM attribute, fanning its values out to
/// directory attributes by their `type` sub-attribute.
#[derive(Debug, Clone)]
pub struct PluralAttributeMapper {
    descriptor: Arc<AttributeDescriptor>,
    plural_value_mappers: Vec<PluralValueMapper>,
    ldap_attribute_types: Vec<String>,
}

impl PluralAttributeMapper {
    pub fn new(
        descriptor: Arc<AttributeDescriptor>,
        plural_value_mappers: Vec<PluralValueMapper>,
    ) -> ConfigResult<Self> {
        if !descriptor.multi_valued || !descriptor.is_complex() {
            return Err(ConfigError::mismatch(
                &descriptor.name,
                "plural",
                "attribute is not a multi-valued complex attribute",
            ));
        }
        if plural_value_mappers.is_empty() {
            return Err(ConfigError::EmptyMapping {
                attribute: descriptor.name.clone(),
            });
        }

        let mut discriminators: Vec<Option<&str>> = Vec::new();
        let mut owners: HashMap<String, String> = HashMap::new();
        let mut ldap_attribute_types = Vec::new();
        for plural_mapper in &plural_value_mappers {
            let type_value = plural_mapper.type_value();
            if discriminators.contains(&type_value) {
                return Err(ConfigError::DuplicateDiscriminator {
                    attribute: descriptor.name.clone(),
                    type_value: type_value.map(str::to_string),
                });
            }
            discriminators.push(type_value);

            if type_value.is_some() && descriptor.sub_attribute(TYPE_SUB_ATTRIBUTE).is_none() {
                return Err(ConfigError::mismatch(
                    &descriptor.name,
                    "plural",
                    "typed mappings need a 'type' sub-attribute",
                ));
            }
            if plural_mapper.value_mappers().is_empty() {
                return Err(ConfigError::EmptyMapping {
                    attribute: plural_mapper.label(&descriptor.name),
                });
            }

            let label = plural_mapper.label(&descriptor.name);
            for mapper in plural_mapper.value_mappers() {
                if descriptor.sub_attribute(mapper.scim_attribute()).is_none() {
                    return Err(ConfigError::UnknownSubAttribute {
                        attribute: descriptor.name.clone(),
                        sub_attribute: mapper.scim_attribute().to_string(),
                    });
                }
                let key = mapper.ldap_attribute().to_ascii_lowercase();
                match owners.get(&key) {
                    Some(owner) if owner != &label => {
                        return Err(ConfigError::mismatch(
                            &descriptor.name,
                            "plural",
                            format!(
                                "LDAP attribute '{}' is used by both {} and {}",
                                mapper.ldap_attribute(),
                                owner,
                                label
                            ),
                        ));
                    }
                    Some(_) => {}
                    None => {
                        owners.insert(key, label.clone());
                        ldap_attribute_types.push(mapper.ldap_attribute().to_string());
                    }
                }
            }
        }

        Ok(Self {
            descriptor,
            plural_value_mappers,
            ldap_attribute_types,
        })
    }

    pub fn descriptor(&self) -> &Arc<AttributeDescriptor> {
        &self.descriptor
    }

    pub fn plural_value_mappers(&self) -> &[PluralValueMapper] {
        &self.plural_value_mappers
    }

    pub fn ldap_attribute_types(&self) -> &[String] {
        &self.ldap_attribute_types
    }

    /// The mapper for an element type: an exact typed match, else the default.
    fn mapper_for_type(&self, type_value: Option<&str>) -> Option<&PluralValueMapper> {
        type_value
            .and_then(|t| {
                self.plural_value_mappers
                    .iter()
                    .find(|m| m.type_value() == Some(t))
            })
            .or_else(|| self.plural_value_mappers.iter().find(|m| m.is_default()))
    }

    pub fn to_ldap_attributes(&self, object: &ScimObject, attributes: &mut Vec<LdapAttribute>) {
        let Some(attribute) = object.get_attribute(&self.descriptor.schema, &self.descriptor.name)
        else {
            return;
        };

        let mut produced: Vec<LdapAttribute> = Vec::new();
        for element in attribute.plural_values() {
            let type_value = element
                .sub_attribute(TYPE_SUB_ATTRIBUTE)
                .and_then(AttributeValue::as_str);
            let Some(plural_mapper) = self.mapper_for_type(type_value) else {
                debug!(
                    "Dropping {} value of type {:?}: no mapping for that type",
                    self.descriptor.name, type_value
                );
                continue;
            };

            for mapper in plural_mapper.value_mappers() {
                let Some(ldap_value) = element
                    .sub_attribute(mapper.scim_attribute())
                    .and_then(|sub| mapper.to_ldap_value(sub))
                else {
                    continue;
                };
                match produced
                    .iter_mut()
                    .find(|a| a.is_named(mapper.ldap_attribute()))
                {
                    Some(_) if mapper.is_single_valued() => debug!(
                        "{} holds a single value, dropping {} value '{}'",
                        mapper.ldap_attribute(),
                        plural_mapper.label(&self.descriptor.name),
                        ldap_value
                    ),
                    Some(existing) => {
                        existing.add_value(ldap_value);
                    }
                    None => produced.push(LdapAttribute::new(mapper.ldap_attribute(), ldap_value)),
                }
            }
        }
        attributes.extend(produced);
    }

    pub fn to_scim_attribute(&self, entry: &Entry) -> Option<ScimAttribute> {
        let type_name = self
            .descriptor
            .sub_attribute(TYPE_SUB_ATTRIBUTE)
            .map(|d| d.name.clone());

        let mut values = Vec::new();
        for plural_mapper in &self.plural_value_mappers {
            match plural_mapper.type_value() {
                Some(type_value) => {
                    let mut sub_attributes = BTreeMap::new();
                    for mapper in plural_mapper.value_mappers() {
                        if let Some((name, value)) = entry
                            .attribute_value(mapper.ldap_attribute())
                            .and_then(|v| self.sub_attribute_value(mapper, v, entry))
                        {
                            sub_attributes.insert(name, value);
                        }
                    }
                    if sub_attributes.is_empty() {
                        continue;
                    }
                    if let Some(type_name) = &type_name {
                        sub_attributes.insert(type_name.clone(), AttributeValue::string(type_value));
                    }
                    values.push(AttributeValue::Complex(sub_attributes));
                }
                None => {
                    let Some(mapper) = plural_mapper.value_mappers().first() else {
                        continue;
                    };
                    for ldap_value in entry.attribute_values(mapper.ldap_attribute()) {
                        if let Some(sub) = self.sub_attribute_value(mapper, ldap_value, entry) {
                            values.push(AttributeValue::complex([sub]));
                        }
                    }
                }
            }
        }

        if values.is_empty() {
            return None;
        }
        trace!(
            "Read {} {} values from {}",
            values.len(),
            self.descriptor.name,
            entry.dn()
        );
        ScimAttribute::plural(Arc::clone(&self.descriptor), values)
            .inspect_err(|e| warn!("Dropping attribute {}: {}", self.descriptor.name, e))
            .ok()
    }

    fn sub_attribute_value(
        &self,
        mapper: &ValueMapper,
        ldap_value: &str,
        entry: &Entry,
    ) -> Option<(String, AttributeValue)> {
        let sub_descriptor = self.descriptor.sub_attribute(mapper.scim_attribute())?;
        match mapper.to_scim_value(ldap_value, sub_descriptor) {
            Ok(value) => Some((sub_descriptor.name.clone(), value)),
            Err(e) => {
                warn!(
                    "Dropping value of {} from {}: {}",
                    mapper.ldap_attribute(),
                    entry.dn(),
                    e
                );
                None
            }
        }
    }

    pub fn to_ldap_filter(&self, filter: &ScimFilter) -> MappingResult<LdapFilter> {
        let operation = filter.filter_operation()?;
        let sub_attribute = match filter.attribute_path() {
            [_] => self.descriptor.value_sub_attribute(),
            [_, sub_attribute] => sub_attribute.as_str(),
            _ => {
                debug!(
                    "Filter {} is too deep for {}, matching nothing",
                    filter, self.descriptor.name
                );
                return Ok(LdapFilter::always_false());
            }
        };

        let mut components = Vec::new();
        for plural_mapper in &self.plural_value_mappers {
            if let Some(mapper) = plural_mapper.value_mapper(sub_attribute) {
                components.push(leaf_filter(operation, mapper, filter)?);
            }
        }

        Ok(match components.len() {
            0 => {
                debug!(
                    "Sub-attribute {}.{} is not mapped, filter matches nothing",
                    self.descriptor.name, sub_attribute
                );
                LdapFilter::always_false()
            }
            1 => components.remove(0),
            _ => LdapFilter::or(components),
        })
    }
}
