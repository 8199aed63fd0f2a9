//! Directory entries and attributes.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use ldap3::SearchEntry;
use ldap3_proto::proto::{LdapPartialAttribute, LdapSearchResultEntry};
use std::collections::HashMap;

/// A directory attribute: a name with one or more string values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LdapAttribute {
    name: String,
    values: Vec<String>,
}

impl LdapAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: vec![value.into()],
        }
    }

    pub fn with_values<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn first_value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Append a value unless it is already present.
    pub fn add_value(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.has_value(&value) {
            return false;
        }
        self.values.push(value);
        true
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl From<LdapAttribute> for LdapPartialAttribute {
    fn from(attribute: LdapAttribute) -> Self {
        LdapPartialAttribute {
            atype: attribute.name,
            vals: attribute.values.into_iter().map(String::into_bytes).collect(),
        }
    }
}

/// A directory entry: a DN and its attributes.
///
/// Wraps the [`SearchEntry`] an `ldap3` search yields. The directory treats
/// attribute names case-insensitively, so every lookup here does too, and
/// values added under a differently-cased name merge into the existing
/// attribute.
#[derive(Debug, Clone)]
pub struct Entry {
    inner: SearchEntry,
}

impl Entry {
    pub fn new(dn: impl Into<String>) -> Self {
        Self {
            inner: SearchEntry {
                dn: dn.into(),
                attrs: HashMap::new(),
                bin_attrs: HashMap::new(),
            },
        }
    }

    pub fn with_attributes(dn: impl Into<String>, attributes: Vec<LdapAttribute>) -> Self {
        let mut entry = Self::new(dn);
        for attribute in attributes {
            entry.add_attribute(attribute);
        }
        entry
    }

    pub fn dn(&self) -> &str {
        &self.inner.dn
    }

    pub fn set_dn(&mut self, dn: impl Into<String>) {
        self.inner.dn = dn.into();
    }

    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.inner.attrs.keys().map(String::as_str)
    }

    fn key_of(&self, name: &str) -> Option<&String> {
        self.inner
            .attrs
            .keys()
            .find(|key| key.eq_ignore_ascii_case(name))
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        !self.attribute_values(name).is_empty()
    }

    /// First value of the named attribute.
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attribute_values(name).first().map(String::as_str)
    }

    /// All values of the named attribute, empty when absent.
    pub fn attribute_values(&self, name: &str) -> &[String] {
        self.key_of(name)
            .and_then(|key| self.inner.attrs.get(key))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Add an attribute, merging its values into an existing one of the same name.
    pub fn add_attribute(&mut self, attribute: LdapAttribute) {
        let key = self.key_of(&attribute.name).cloned();
        let values = self
            .inner
            .attrs
            .entry(key.unwrap_or(attribute.name))
            .or_default();
        for value in attribute.values {
            if !values.contains(&value) {
                values.push(value);
            }
        }
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<LdapAttribute> {
        let key = self.key_of(name)?.clone();
        let values = self.inner.attrs.remove(&key)?;
        Some(LdapAttribute { name: key, values })
    }

    /// Whether the entry carries the object class, ignoring case.
    pub fn has_object_class(&self, object_class: &str) -> bool {
        self.attribute_values(super::OBJECT_CLASS)
            .iter()
            .any(|oc| oc.eq_ignore_ascii_case(object_class))
    }

    pub fn into_search_entry(self) -> SearchEntry {
        self.inner
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::new("")
    }
}

/// Binary-valued attributes of a search result are carried base64 encoded,
/// the form SCIM binary values take.
impl From<SearchEntry> for Entry {
    fn from(search_entry: SearchEntry) -> Self {
        let SearchEntry {
            dn,
            attrs,
            bin_attrs,
        } = search_entry;
        let mut entry = Self::new(dn);
        for (name, values) in attrs {
            entry.add_attribute(LdapAttribute::with_values(name, values));
        }
        for (name, values) in bin_attrs {
            entry.add_attribute(LdapAttribute::with_values(
                name,
                values.iter().map(|value| STANDARD.encode(value)),
            ));
        }
        entry
    }
}

impl From<Entry> for LdapSearchResultEntry {
    fn from(entry: Entry) -> Self {
        let SearchEntry {
            dn,
            attrs,
            bin_attrs,
        } = entry.inner;
        let attributes = attrs
            .into_iter()
            .map(|(name, values)| LdapPartialAttribute::from(LdapAttribute { name, values }))
            .chain(bin_attrs.into_iter().map(|(atype, vals)| LdapPartialAttribute { atype, vals }))
            .collect();
        LdapSearchResultEntry { dn, attributes }
    }
}
