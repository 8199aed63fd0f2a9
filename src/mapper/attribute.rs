//! Attribute mappers.
//!
//! An [`AttributeMapper`] owns the mapping of one SCIM attribute to the
//! directory attributes that store it. The three variants cover simple
//! attributes, singular complex attributes and plural complex attributes
//! discriminated by `type`.

use super::complex::ComplexSingularAttributeMapper;
use super::plural::PluralAttributeMapper;
use super::plural_value::PluralValueMapper;
use super::simple::SimpleAttributeMapper;
use super::value::ValueMapper;
use crate::error::{ConfigResult, MappingError, MappingResult};
use crate::filter::{FilterOperation, ScimFilter};
use crate::ldap::{Entry, LdapAttribute, LdapFilter, LdapFilterExt};
use crate::resource::{ScimAttribute, ScimObject};
use crate::schema::AttributeDescriptor;

use std::sync::Arc;

/// Maps one SCIM attribute to and from directory attributes.
#[derive(Debug, Clone)]
pub enum AttributeMapper {
    Simple(SimpleAttributeMapper),
    ComplexSingular(ComplexSingularAttributeMapper),
    Plural(PluralAttributeMapper),
}

impl AttributeMapper {
    /// Map a singular simple attribute to one directory attribute.
    pub fn simple(
        descriptor: Arc<AttributeDescriptor>,
        value_mapper: ValueMapper,
    ) -> ConfigResult<Self> {
        SimpleAttributeMapper::new(descriptor, value_mapper).map(AttributeMapper::Simple)
    }

    /// Map a singular complex attribute, one directory attribute per sub-attribute.
    pub fn complex(
        descriptor: Arc<AttributeDescriptor>,
        value_mappers: Vec<ValueMapper>,
        sort_sub_attribute: Option<&str>,
    ) -> ConfigResult<Self> {
        ComplexSingularAttributeMapper::new(descriptor, value_mappers, sort_sub_attribute)
            .map(AttributeMapper::ComplexSingular)
    }

    /// Map a plural attribute with one group of value mappers per type.
    pub fn plural(
        descriptor: Arc<AttributeDescriptor>,
        plural_value_mappers: Vec<PluralValueMapper>,
    ) -> ConfigResult<Self> {
        PluralAttributeMapper::new(descriptor, plural_value_mappers).map(AttributeMapper::Plural)
    }

    /// Descriptor of the SCIM attribute being mapped.
    pub fn descriptor(&self) -> &Arc<AttributeDescriptor> {
        match self {
            AttributeMapper::Simple(m) => m.descriptor(),
            AttributeMapper::ComplexSingular(m) => m.descriptor(),
            AttributeMapper::Plural(m) => m.descriptor(),
        }
    }

    /// Directory attribute types this mapper reads and writes.
    pub fn ldap_attribute_types(&self) -> &[String] {
        match self {
            AttributeMapper::Simple(m) => m.ldap_attribute_types(),
            AttributeMapper::ComplexSingular(m) => m.ldap_attribute_types(),
            AttributeMapper::Plural(m) => m.ldap_attribute_types(),
        }
    }

    /// Append the directory attributes for this mapper's SCIM attribute.
    ///
    /// Nothing is appended when the object does not carry the attribute.
    pub fn to_ldap_attributes(&self, object: &ScimObject, attributes: &mut Vec<LdapAttribute>) {
        match self {
            AttributeMapper::Simple(m) => m.to_ldap_attributes(object, attributes),
            AttributeMapper::ComplexSingular(m) => m.to_ldap_attributes(object, attributes),
            AttributeMapper::Plural(m) => m.to_ldap_attributes(object, attributes),
        }
    }

    /// Build the SCIM attribute from an entry, if the entry carries any of it.
    pub fn to_scim_attribute(&self, entry: &Entry) -> Option<ScimAttribute> {
        match self {
            AttributeMapper::Simple(m) => m.to_scim_attribute(entry),
            AttributeMapper::ComplexSingular(m) => m.to_scim_attribute(entry),
            AttributeMapper::Plural(m) => m.to_scim_attribute(entry),
        }
    }

    /// Translate a leaf filter on this mapper's attribute.
    pub fn to_ldap_filter(&self, filter: &ScimFilter) -> MappingResult<LdapFilter> {
        match self {
            AttributeMapper::Simple(m) => m.to_ldap_filter(filter),
            AttributeMapper::ComplexSingular(m) => m.to_ldap_filter(filter),
            AttributeMapper::Plural(m) => m.to_ldap_filter(filter),
        }
    }

    /// Directory attribute to sort by, or `None` if unsortable.
    pub fn sort_key_ldap_attribute(&self) -> Option<&str> {
        match self {
            AttributeMapper::Simple(m) => Some(m.value_mapper().ldap_attribute()),
            AttributeMapper::ComplexSingular(m) => m.sort_ldap_attribute(),
            AttributeMapper::Plural(_) => None,
        }
    }

    /// Name of the mapper variant as used in mapping definitions.
    pub fn kind(&self) -> &'static str {
        match self {
            AttributeMapper::Simple(_) => "simple",
            AttributeMapper::ComplexSingular(_) => "complex",
            AttributeMapper::Plural(_) => "plural",
        }
    }
}

/// Build the directory filter for one (attribute, value mapper) pair.
pub(crate) fn leaf_filter(
    operation: FilterOperation,
    value_mapper: &ValueMapper,
    filter: &ScimFilter,
) -> MappingResult<LdapFilter> {
    let attribute = value_mapper.ldap_attribute();
    let value = || {
        filter
            .value()
            .map(|v| value_mapper.to_ldap_filter_value(v))
            .ok_or_else(|| MappingError::MissingFilterValue {
                operation: filter.operation().to_string(),
                attribute: filter.attribute_path().join("."),
            })
    };

    let ldap_filter = match operation {
        FilterOperation::Present => LdapFilter::presence(attribute),
        FilterOperation::Equals | FilterOperation::EqualsIgnoreCase => {
            LdapFilter::equality(attribute, value()?)
        }
        FilterOperation::Contains => LdapFilter::substring_contains(attribute, value()?),
        FilterOperation::StartsWith => LdapFilter::substring_prefix(attribute, value()?),
        FilterOperation::GreaterOrEqual => LdapFilter::greater_or_equal(attribute, value()?),
        FilterOperation::LessOrEqual => LdapFilter::less_or_equal(attribute, value()?),
        FilterOperation::GreaterThan => {
            let value = value()?;
            LdapFilter::and(vec![
                LdapFilter::greater_or_equal(attribute, value.clone()),
                LdapFilter::not(LdapFilter::equality(attribute, value)),
            ])
        }
        FilterOperation::LessThan => {
            let value = value()?;
            LdapFilter::and(vec![
                LdapFilter::less_or_equal(attribute, value.clone()),
                LdapFilter::not(LdapFilter::equality(attribute, value)),
            ])
        }
        FilterOperation::And | FilterOperation::Or => {
            return Err(MappingError::unsupported_operation(filter.operation()));
        }
    };
    Ok(ldap_filter)
}
