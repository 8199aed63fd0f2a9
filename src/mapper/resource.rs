//! Mapping of whole SCIM resources to and from directory entries.

use super::attribute::AttributeMapper;
use crate::error::{ConfigError, ConfigResult, MappingError, MappingResult};
use crate::filter::{FilterOperation, ScimFilter};
use crate::ldap::{
    self, Entry, LdapAttribute, LdapFilter, LdapFilterExt, Mod, OBJECT_CLASS, SortKey,
};
use crate::resource::{AttributePath, QueryAttributes, ScimAttribute, ScimObject, SortParameters};
use crate::schema::SCHEMA_URI_CORE;

use ldap3::dn_escape;
use log::{debug, trace};
use std::collections::HashMap;

/// Maps one SCIM resource type, such as User, to directory entries.
///
/// Each SCIM attribute is owned by at most one [`AttributeMapper`] and each
/// directory attribute is written by at most one mapper.
#[derive(Debug, Clone)]
pub struct ResourceMapper {
    resource_name: String,
    schema: String,
    structural_object_class: Option<String>,
    object_classes: Vec<String>,
    rdn_attribute: Option<String>,
    attribute_mappers: Vec<AttributeMapper>,
    ldap_attribute_types: Vec<String>,
}

impl ResourceMapper {
    pub fn builder(resource_name: impl Into<String>) -> ResourceMapperBuilder {
        ResourceMapperBuilder::new(resource_name)
    }

    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    /// URI of the schema that defines the resource's core attributes.
    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn structural_object_class(&self) -> Option<&str> {
        self.structural_object_class.as_deref()
    }

    pub fn object_classes(&self) -> &[String] {
        &self.object_classes
    }

    pub fn rdn_attribute(&self) -> Option<&str> {
        self.rdn_attribute.as_deref()
    }

    pub fn attribute_mappers(&self) -> &[AttributeMapper] {
        &self.attribute_mappers
    }

    /// All directory attribute types written by this resource's mappers.
    pub fn ldap_attribute_types(&self) -> &[String] {
        &self.ldap_attribute_types
    }

    /// The mapper owning an attribute; the name is matched ignoring case.
    pub fn attribute_mapper(&self, schema: &str, name: &str) -> Option<&AttributeMapper> {
        self.attribute_mappers.iter().find(|m| {
            let descriptor = m.descriptor();
            descriptor.schema == schema && descriptor.name.eq_ignore_ascii_case(name)
        })
    }

    /// Whether the entry is an instance of this resource type.
    pub fn is_resource_entry(&self, entry: &Entry) -> bool {
        match &self.structural_object_class {
            Some(object_class) => entry.has_object_class(object_class),
            None => true,
        }
    }

    /// Directory attributes representing the SCIM object.
    pub fn to_ldap_attributes(&self, object: &ScimObject) -> Vec<LdapAttribute> {
        let mut attributes = Vec::new();
        for mapper in &self.attribute_mappers {
            mapper.to_ldap_attributes(object, &mut attributes);
        }
        attributes
    }

    /// A new directory entry for the SCIM object, named below `base_dn`.
    ///
    /// The entry carries the configured object classes and its DN is formed
    /// from the RDN attribute's first value.
    pub fn to_ldap_entry(&self, object: &ScimObject, base_dn: &str) -> MappingResult<Entry> {
        let rdn_attribute = self
            .rdn_attribute
            .as_deref()
            .ok_or_else(|| MappingError::NoRdnAttribute {
                resource: self.resource_name.clone(),
            })?;

        let mut entry = Entry::new("");
        if !self.object_classes.is_empty() {
            entry.add_attribute(LdapAttribute::with_values(
                OBJECT_CLASS,
                self.object_classes.iter().cloned(),
            ));
        }
        for attribute in self.to_ldap_attributes(object) {
            entry.add_attribute(attribute);
        }

        let rdn_value =
            entry
                .attribute_value(rdn_attribute)
                .ok_or_else(|| MappingError::MissingRdnValue {
                    attribute: rdn_attribute.to_string(),
                })?;
        let rdn = format!("{}={}", rdn_attribute, dn_escape(rdn_value));
        let dn = if base_dn.is_empty() {
            rdn
        } else {
            format!("{},{}", rdn, base_dn)
        };
        debug!("Mapped {} to new entry {}", self.resource_name, dn);
        entry.set_dn(dn);
        Ok(entry)
    }

    /// Modifications that replace the mapped content of `current` with the
    /// SCIM object. Attributes not written by this resource are untouched.
    pub fn to_ldap_modifications(&self, current: &Entry, object: &ScimObject) -> Vec<Mod<String>> {
        let target = self.to_ldap_attributes(object);
        let modifications = ldap::diff(current, &target, &self.ldap_attribute_types);
        trace!(
            "{} modifications for {} {}",
            modifications.len(),
            self.resource_name,
            current.dn()
        );
        modifications
    }

    /// SCIM attributes read from the entry, limited to the requested ones.
    pub fn to_scim_attributes(&self, entry: &Entry, requested: &QueryAttributes) -> Vec<ScimAttribute> {
        self.attribute_mappers
            .iter()
            .filter(|m| requested.is_descriptor_requested(m.descriptor()))
            .filter_map(|m| m.to_scim_attribute(entry))
            .filter_map(|attribute| requested.pare_attribute(attribute))
            .collect()
    }

    /// A SCIM object holding the requested attributes of the entry.
    pub fn to_scim_object(&self, entry: &Entry, requested: &QueryAttributes) -> ScimObject {
        let mut object = ScimObject::new(self.resource_name.clone());
        for attribute in self.to_scim_attributes(entry, requested) {
            object.add_attribute(attribute);
        }
        object
    }

    /// Directory attribute types to fetch for the requested SCIM attributes.
    pub fn to_ldap_attribute_types(&self, requested: &QueryAttributes) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        if self.structural_object_class.is_some() {
            types.push(OBJECT_CLASS.to_string());
        }
        for mapper in self
            .attribute_mappers
            .iter()
            .filter(|m| requested.is_descriptor_requested(m.descriptor()))
        {
            for ldap_type in mapper.ldap_attribute_types() {
                if !types.iter().any(|t| t.eq_ignore_ascii_case(ldap_type)) {
                    types.push(ldap_type.clone());
                }
            }
        }
        types
    }

    /// Translate a SCIM filter into a directory filter.
    ///
    /// Filters on attributes this resource does not map match nothing, and
    /// so do `and`/`or` filters without components.
    pub fn to_ldap_filter(&self, filter: &ScimFilter) -> MappingResult<LdapFilter> {
        let operation = filter.filter_operation()?;
        if operation.is_compound() {
            if filter.components().is_empty() {
                debug!("Compound filter {} has no components, matches nothing", filter);
                return Ok(LdapFilter::always_false());
            }
            let components = filter
                .components()
                .iter()
                .map(|component| self.to_ldap_filter(component))
                .collect::<MappingResult<Vec<_>>>()?;
            return Ok(match operation {
                FilterOperation::And => LdapFilter::and(components),
                _ => LdapFilter::or(components),
            });
        }

        let Some(attribute_name) = filter.attribute_name() else {
            return Ok(LdapFilter::always_false());
        };
        match self.attribute_mapper(filter.attribute_schema(), attribute_name) {
            Some(mapper) => mapper.to_ldap_filter(filter),
            None => {
                debug!(
                    "{} does not map {}, filter {} matches nothing",
                    self.resource_name, attribute_name, filter
                );
                Ok(LdapFilter::always_false())
            }
        }
    }

    /// The search filter for this resource: the structural object class
    /// combined with the translated SCIM filter, if any.
    pub fn to_ldap_search_filter(&self, filter: Option<&ScimFilter>) -> MappingResult<LdapFilter> {
        let base = self
            .structural_object_class
            .as_ref()
            .map(|oc| LdapFilter::equality(OBJECT_CLASS, oc.clone()));
        let translated = filter.map(|f| self.to_ldap_filter(f)).transpose()?;

        Ok(match (base, translated) {
            (Some(base), Some(translated)) => LdapFilter::and(vec![translated, base]),
            (Some(base), None) => base,
            (None, Some(translated)) => translated,
            (None, None) => LdapFilter::presence(OBJECT_CLASS),
        })
    }

    /// The directory attribute to sort on, or `None` if the attribute is
    /// not mapped or cannot be sorted.
    pub fn to_sort_key(&self, path: &AttributePath) -> Option<String> {
        self.attribute_mapper(&path.schema, &path.attribute_name)
            .and_then(AttributeMapper::sort_key_ldap_attribute)
            .map(str::to_string)
    }

    /// The server-side sort key for the sort parameters.
    pub fn to_ldap_sort_key(&self, sort: &SortParameters) -> Option<SortKey> {
        self.to_sort_key(&sort.sort_by)
            .map(|attribute| ldap::sort_key(attribute, !sort.ascending))
    }
}

/// Builder for [`ResourceMapper`].
///
/// ```rust
/// use scim_ldap::mapper::{AttributeMapper, ResourceMapper, ValueMapper};
/// use scim_ldap::schema::{SchemaRegistry, SCHEMA_URI_CORE};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = SchemaRegistry::new()?;
/// let mapper = ResourceMapper::builder("Group")
///     .structural_object_class("groupOfUniqueNames")
///     .rdn_attribute("cn")
///     .attribute_mapper(AttributeMapper::simple(
///         registry.require_attribute(SCHEMA_URI_CORE, "displayName")?,
///         ValueMapper::new("displayName", "cn"),
///     )?)
///     .build()?;
/// assert_eq!(mapper.ldap_attribute_types(), ["cn"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ResourceMapperBuilder {
    resource_name: String,
    schema: String,
    structural_object_class: Option<String>,
    object_classes: Vec<String>,
    rdn_attribute: Option<String>,
    attribute_mappers: Vec<AttributeMapper>,
}

impl ResourceMapperBuilder {
    pub fn new(resource_name: impl Into<String>) -> Self {
        Self {
            resource_name: resource_name.into(),
            schema: SCHEMA_URI_CORE.to_string(),
            structural_object_class: None,
            object_classes: Vec::new(),
            rdn_attribute: None,
            attribute_mappers: Vec::new(),
        }
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    pub fn structural_object_class(mut self, object_class: impl Into<String>) -> Self {
        self.structural_object_class = Some(object_class.into());
        self
    }

    pub fn object_classes<I, S>(mut self, object_classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.object_classes = object_classes.into_iter().map(Into::into).collect();
        self
    }

    pub fn rdn_attribute(mut self, rdn_attribute: impl Into<String>) -> Self {
        self.rdn_attribute = Some(rdn_attribute.into());
        self
    }

    pub fn attribute_mapper(mut self, mapper: AttributeMapper) -> Self {
        self.attribute_mappers.push(mapper);
        self
    }

    pub fn attribute_mappers(mut self, mappers: impl IntoIterator<Item = AttributeMapper>) -> Self {
        self.attribute_mappers.extend(mappers);
        self
    }

    /// Build the mapper, checking that no SCIM attribute and no directory
    /// attribute is owned twice.
    pub fn build(self) -> ConfigResult<ResourceMapper> {
        if self.resource_name.is_empty() {
            return Err(ConfigError::invalid_resource("", "resource without a name"));
        }

        let mut scim_owners: Vec<(String, String)> = Vec::new();
        let mut ldap_owners: HashMap<String, String> = HashMap::new();
        let mut ldap_attribute_types = Vec::new();
        for mapper in &self.attribute_mappers {
            let descriptor = mapper.descriptor();
            let scim_key = (descriptor.schema.clone(), descriptor.name.to_ascii_lowercase());
            if scim_owners.contains(&scim_key) {
                return Err(ConfigError::DuplicateScimAttribute {
                    resource: self.resource_name.clone(),
                    attribute: descriptor.name.clone(),
                });
            }
            scim_owners.push(scim_key);

            for ldap_type in mapper.ldap_attribute_types() {
                let key = ldap_type.to_ascii_lowercase();
                if let Some(first) = ldap_owners.get(&key) {
                    return Err(ConfigError::DuplicateLdapAttribute {
                        resource: self.resource_name.clone(),
                        ldap_attribute: ldap_type.clone(),
                        first: first.clone(),
                        second: descriptor.name.clone(),
                    });
                }
                ldap_owners.insert(key, descriptor.name.clone());
                ldap_attribute_types.push(ldap_type.clone());
            }
        }

        let mut object_classes = self.object_classes;
        if let Some(structural) = &self.structural_object_class {
            if !object_classes.iter().any(|oc| oc.eq_ignore_ascii_case(structural)) {
                object_classes.push(structural.clone());
            }
        }

        debug!(
            "Built {} mapper with {} attribute mappers",
            self.resource_name,
            self.attribute_mappers.len()
        );
        Ok(ResourceMapper {
            resource_name: self.resource_name,
            schema: self.schema,
            structural_object_class: self.structural_object_class,
            object_classes,
            rdn_attribute: self.rdn_attribute,
            attribute_mappers: self.attribute_mappers,
            ldap_attribute_types,
        })
    }
}
