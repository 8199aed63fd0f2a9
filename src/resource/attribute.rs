//! A SCIM attribute: a descriptor paired with a conforming value.

use super::value::AttributeValue;
use crate::error::{ValidationError, ValidationResult};
use crate::schema::AttributeDescriptor;

use std::sync::Arc;

/// An attribute of a SCIM object.
///
/// Construction checks the value against the descriptor, so a
/// `ScimAttribute` always has the multiplicity and data types its
/// descriptor declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScimAttribute {
    descriptor: Arc<AttributeDescriptor>,
    value: AttributeValue,
}

impl ScimAttribute {
    /// Create a singular attribute.
    pub fn singular(
        descriptor: Arc<AttributeDescriptor>,
        value: AttributeValue,
    ) -> ValidationResult<Self> {
        if descriptor.multi_valued {
            return Err(ValidationError::ExpectedMultiValue {
                attribute: descriptor.name.clone(),
            });
        }
        value.conforms_to(&descriptor)?;
        Ok(Self { descriptor, value })
    }

    /// Create a multi-valued attribute from its element values.
    pub fn plural(
        descriptor: Arc<AttributeDescriptor>,
        values: Vec<AttributeValue>,
    ) -> ValidationResult<Self> {
        if !descriptor.multi_valued {
            return Err(ValidationError::ExpectedSingleValue {
                attribute: descriptor.name.clone(),
            });
        }
        let value = AttributeValue::Plural(values);
        value.conforms_to(&descriptor)?;
        Ok(Self { descriptor, value })
    }

    /// Wrap a value already known to conform, such as a pared copy of a
    /// validated attribute.
    pub(crate) fn from_conforming(
        descriptor: Arc<AttributeDescriptor>,
        value: AttributeValue,
    ) -> Self {
        debug_assert!(value.conforms_to(&descriptor).is_ok());
        Self { descriptor, value }
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    pub fn schema(&self) -> &str {
        &self.descriptor.schema
    }

    pub fn descriptor(&self) -> &Arc<AttributeDescriptor> {
        &self.descriptor
    }

    pub fn value(&self) -> &AttributeValue {
        &self.value
    }

    pub fn into_value(self) -> AttributeValue {
        self.value
    }

    pub fn is_plural(&self) -> bool {
        self.descriptor.multi_valued
    }

    /// The value of a singular attribute.
    pub fn singular_value(&self) -> Option<&AttributeValue> {
        if self.is_plural() {
            None
        } else {
            Some(&self.value)
        }
    }

    /// The element values of a multi-valued attribute.
    pub fn plural_values(&self) -> &[AttributeValue] {
        self.value.plural_values()
    }
}
