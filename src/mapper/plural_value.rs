//! Value mappers grouped under one plural type discriminator.

use super::value::ValueMapper;

/// The value mappers that apply to plural elements of one `type`.
///
/// A mapper without a type value is the default mapper. It applies to
/// elements whose type no typed mapper claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralValueMapper {
    type_value: Option<String>,
    value_mappers: Vec<ValueMapper>,
}

impl PluralValueMapper {
    pub fn new(type_value: Option<String>, value_mappers: Vec<ValueMapper>) -> Self {
        Self {
            type_value,
            value_mappers,
        }
    }

    pub fn typed(type_value: impl Into<String>, value_mappers: Vec<ValueMapper>) -> Self {
        Self::new(Some(type_value.into()), value_mappers)
    }

    pub fn untyped(value_mappers: Vec<ValueMapper>) -> Self {
        Self::new(None, value_mappers)
    }

    pub fn type_value(&self) -> Option<&str> {
        self.type_value.as_deref()
    }

    pub fn is_default(&self) -> bool {
        self.type_value.is_none()
    }

    pub fn value_mappers(&self) -> &[ValueMapper] {
        &self.value_mappers
    }

    /// The value mapper for a sub-attribute, ignoring case.
    pub fn value_mapper(&self, sub_attribute: &str) -> Option<&ValueMapper> {
        self.value_mappers
            .iter()
            .find(|m| m.scim_attribute().eq_ignore_ascii_case(sub_attribute))
    }

    /// Label used in logs and errors, e.g. `emails[work]`.
    pub(crate) fn label(&self, attribute: &str) -> String {
        match &self.type_value {
            Some(t) => format!("{}[{}]", attribute, t),
            None => format!("{}[*]", attribute),
        }
    }
}
