//! Generic SCIM attribute values.
//!
//! A value is either a typed scalar, a complex value holding named
//! sub-attribute values, or a plural sequence of values. Which shape is
//! legal for an attribute is decided by its [`AttributeDescriptor`].

use crate::error::{ValidationError, ValidationResult};
use crate::schema::{AttributeDescriptor, DataType};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeMap;
use std::fmt;

/// A single typed value of a simple attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarValue {
    String(String),
    Boolean(bool),
    Integer(i64),
    DateTime(DateTime<Utc>),
    Binary(Vec<u8>),
}

impl ScalarValue {
    /// The data type this value represents.
    pub fn data_type(&self) -> DataType {
        match self {
            ScalarValue::String(_) => DataType::String,
            ScalarValue::Boolean(_) => DataType::Boolean,
            ScalarValue::Integer(_) => DataType::Integer,
            ScalarValue::DateTime(_) => DataType::DateTime,
            ScalarValue::Binary(_) => DataType::Binary,
        }
    }

    /// Parse the string form of a value of the given data type.
    ///
    /// Booleans accept `true`/`false` in any case, date-times use RFC 3339
    /// and binary values are base64 encoded.
    pub fn parse(data_type: DataType, text: &str) -> ValidationResult<Self> {
        match data_type {
            DataType::String => Ok(ScalarValue::String(text.to_string())),
            DataType::Boolean => {
                if text.eq_ignore_ascii_case("true") {
                    Ok(ScalarValue::Boolean(true))
                } else if text.eq_ignore_ascii_case("false") {
                    Ok(ScalarValue::Boolean(false))
                } else {
                    Err(ValidationError::unparsable(text, "boolean"))
                }
            }
            DataType::Integer => text
                .trim()
                .parse::<i64>()
                .map(ScalarValue::Integer)
                .map_err(|_| ValidationError::unparsable(text, "integer")),
            DataType::DateTime => DateTime::parse_from_rfc3339(text)
                .map(|dt| ScalarValue::DateTime(dt.with_timezone(&Utc)))
                .map_err(|_| ValidationError::unparsable(text, "dateTime")),
            DataType::Binary => STANDARD
                .decode(text)
                .map(ScalarValue::Binary)
                .map_err(|_| ValidationError::unparsable(text, "binary")),
            DataType::Complex => Err(ValidationError::unparsable(text, "complex value")),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScalarValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ScalarValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<&DateTime<Utc>> {
        match self {
            ScalarValue::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            ScalarValue::Binary(b) => Some(b),
            _ => None,
        }
    }
}

/// String form of the value, the inverse of [`ScalarValue::parse`].
impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::String(s) => f.write_str(s),
            ScalarValue::Boolean(b) => write!(f, "{}", b),
            ScalarValue::Integer(i) => write!(f, "{}", i),
            ScalarValue::DateTime(dt) => {
                f.write_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            ScalarValue::Binary(b) => f.write_str(&STANDARD.encode(b)),
        }
    }
}

/// A SCIM attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// Value of a simple attribute
    Scalar(ScalarValue),
    /// Sub-attribute values of a complex attribute, keyed by name
    Complex(BTreeMap<String, AttributeValue>),
    /// Ordered values of a multi-valued attribute
    Plural(Vec<AttributeValue>),
}

impl AttributeValue {
    pub fn string(value: impl Into<String>) -> Self {
        AttributeValue::Scalar(ScalarValue::String(value.into()))
    }

    pub fn boolean(value: bool) -> Self {
        AttributeValue::Scalar(ScalarValue::Boolean(value))
    }

    pub fn integer(value: i64) -> Self {
        AttributeValue::Scalar(ScalarValue::Integer(value))
    }

    pub fn date_time(value: DateTime<Utc>) -> Self {
        AttributeValue::Scalar(ScalarValue::DateTime(value))
    }

    pub fn binary(value: Vec<u8>) -> Self {
        AttributeValue::Scalar(ScalarValue::Binary(value))
    }

    /// Build a complex value from (sub-attribute name, value) pairs.
    pub fn complex<I, K>(sub_attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, AttributeValue)>,
        K: Into<String>,
    {
        AttributeValue::Complex(
            sub_attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        )
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, AttributeValue::Complex(_))
    }

    pub fn is_plural(&self) -> bool {
        matches!(self, AttributeValue::Plural(_))
    }

    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            AttributeValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// The string payload of a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(ScalarValue::as_str)
    }

    /// String form of a scalar of any type.
    pub fn string_value(&self) -> Option<String> {
        self.as_scalar().map(ToString::to_string)
    }

    /// Look up a sub-attribute of a complex value, ignoring case.
    pub fn sub_attribute(&self, name: &str) -> Option<&AttributeValue> {
        match self {
            AttributeValue::Complex(map) => map
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Elements of a plural value; empty for any other shape.
    pub fn plural_values(&self) -> &[AttributeValue] {
        match self {
            AttributeValue::Plural(values) => values,
            _ => &[],
        }
    }

    /// Check that the value has the shape the descriptor calls for.
    pub fn conforms_to(&self, descriptor: &AttributeDescriptor) -> ValidationResult<()> {
        match (descriptor.multi_valued, self) {
            (true, AttributeValue::Plural(values)) => {
                for value in values {
                    if value.is_plural() {
                        return Err(ValidationError::NestedPluralValue {
                            attribute: descriptor.name.clone(),
                        });
                    }
                    value.conforms_to_element(descriptor)?;
                }
                Ok(())
            }
            (true, _) => Err(ValidationError::ExpectedMultiValue {
                attribute: descriptor.name.clone(),
            }),
            (false, AttributeValue::Plural(_)) => Err(ValidationError::ExpectedSingleValue {
                attribute: descriptor.name.clone(),
            }),
            (false, value) => value.conforms_to_element(descriptor),
        }
    }

    fn conforms_to_element(&self, descriptor: &AttributeDescriptor) -> ValidationResult<()> {
        match self {
            AttributeValue::Complex(map) => {
                if !descriptor.is_complex() {
                    return Err(ValidationError::invalid_type(
                        &descriptor.name,
                        descriptor.data_type.to_string(),
                        "complex",
                    ));
                }
                for (name, value) in map {
                    let sub = descriptor.sub_attribute(name).ok_or_else(|| {
                        ValidationError::UnknownSubAttribute {
                            attribute: descriptor.name.clone(),
                            sub_attribute: name.clone(),
                        }
                    })?;
                    match value.as_scalar() {
                        Some(scalar) if scalar.data_type() == sub.data_type => {}
                        Some(scalar) => {
                            return Err(ValidationError::invalid_type(
                                format!("{}.{}", descriptor.name, sub.name),
                                sub.data_type.to_string(),
                                scalar.data_type().to_string(),
                            ));
                        }
                        None => {
                            return Err(ValidationError::invalid_type(
                                format!("{}.{}", descriptor.name, sub.name),
                                sub.data_type.to_string(),
                                "complex",
                            ));
                        }
                    }
                }
                Ok(())
            }
            AttributeValue::Scalar(scalar) => {
                if scalar.data_type() == descriptor.data_type {
                    Ok(())
                } else {
                    Err(ValidationError::invalid_type(
                        &descriptor.name,
                        descriptor.data_type.to_string(),
                        scalar.data_type().to_string(),
                    ))
                }
            }
            AttributeValue::Plural(_) => Err(ValidationError::ExpectedSingleValue {
                attribute: descriptor.name.clone(),
            }),
        }
    }
}
