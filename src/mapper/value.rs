//! Value-level mapping between one SCIM (sub-)attribute and one directory attribute.

use crate::error::{ValidationError, ValidationResult};
use crate::resource::{AttributeValue, ScalarValue};
use crate::schema::{AttributeDescriptor, DataType};

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

const GENERALIZED_TIME_FORMAT: &str = "%Y%m%d%H%M%S%.fZ";

/// Conversion applied to values as they cross between SCIM and LDAP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Transformation {
    /// Values are copied unchanged
    #[default]
    Default,
    /// SCIM line breaks are stored as `$` in postal address syntax
    FormattedAddress,
    /// SCIM dateTime values are stored as LDAP generalized time
    GeneralizedTime,
}

impl Transformation {
    /// Convert a SCIM value to its directory string form.
    pub fn to_ldap_value(self, value: &ScalarValue) -> String {
        match (self, value) {
            (Transformation::FormattedAddress, value) => value.to_string().replace('\n', "$"),
            (Transformation::GeneralizedTime, ScalarValue::DateTime(dt)) => {
                dt.format(GENERALIZED_TIME_FORMAT).to_string()
            }
            (_, value) => value.to_string(),
        }
    }

    /// Convert a SCIM filter comparison value to its directory form.
    pub fn to_ldap_filter_value(self, value: &str) -> String {
        match self {
            Transformation::Default => value.to_string(),
            Transformation::FormattedAddress => value.replace('\n', "$"),
            Transformation::GeneralizedTime => match DateTime::parse_from_rfc3339(value) {
                Ok(dt) => dt
                    .with_timezone(&Utc)
                    .format(GENERALIZED_TIME_FORMAT)
                    .to_string(),
                Err(_) => value.to_string(),
            },
        }
    }

    /// Convert a directory value to a SCIM value of the given data type.
    pub fn to_scim_value(self, value: &str, data_type: DataType) -> ValidationResult<ScalarValue> {
        match self {
            Transformation::Default => ScalarValue::parse(data_type, value),
            Transformation::FormattedAddress => {
                ScalarValue::parse(data_type, &value.replace('$', "\n"))
            }
            Transformation::GeneralizedTime if data_type == DataType::DateTime => {
                parse_generalized_time(value)
                    .map(ScalarValue::DateTime)
                    .ok_or_else(|| ValidationError::unparsable(value, "generalized time"))
            }
            Transformation::GeneralizedTime => ScalarValue::parse(data_type, value),
        }
    }
}

/// Parse `YYYYMMDDHHMMSS[.fraction](Z|±HHMM)`.
fn parse_generalized_time(value: &str) -> Option<DateTime<Utc>> {
    if let Some(local) = value.strip_suffix('Z') {
        return NaiveDateTime::parse_from_str(local, "%Y%m%d%H%M%S%.f")
            .ok()
            .map(|naive| Utc.from_utc_datetime(&naive));
    }
    DateTime::parse_from_str(value, "%Y%m%d%H%M%S%.f%z")
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Maps one SCIM sub-attribute (or simple attribute) to one directory attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueMapper {
    scim_attribute: String,
    ldap_attribute: String,
    transformation: Transformation,
    single_valued: bool,
}

impl ValueMapper {
    pub fn new(scim_attribute: impl Into<String>, ldap_attribute: impl Into<String>) -> Self {
        Self {
            scim_attribute: scim_attribute.into(),
            ldap_attribute: ldap_attribute.into(),
            transformation: Transformation::Default,
            single_valued: false,
        }
    }

    pub fn with_transformation(mut self, transformation: Transformation) -> Self {
        self.transformation = transformation;
        self
    }

    /// Mark the directory attribute as holding at most one value.
    pub fn single_valued(mut self, single_valued: bool) -> Self {
        self.single_valued = single_valued;
        self
    }

    pub fn scim_attribute(&self) -> &str {
        &self.scim_attribute
    }

    pub fn ldap_attribute(&self) -> &str {
        &self.ldap_attribute
    }

    pub fn transformation(&self) -> Transformation {
        self.transformation
    }

    pub fn is_single_valued(&self) -> bool {
        self.single_valued
    }

    /// Directory form of a scalar SCIM value; `None` for other shapes.
    pub fn to_ldap_value(&self, value: &AttributeValue) -> Option<String> {
        value
            .as_scalar()
            .map(|scalar| self.transformation.to_ldap_value(scalar))
    }

    pub fn to_ldap_filter_value(&self, value: &str) -> String {
        self.transformation.to_ldap_filter_value(value)
    }

    /// SCIM value for a directory value, typed by `descriptor`.
    pub fn to_scim_value(
        &self,
        value: &str,
        descriptor: &AttributeDescriptor,
    ) -> ValidationResult<AttributeValue> {
        self.transformation
            .to_scim_value(value, descriptor.data_type)
            .map(AttributeValue::Scalar)
    }
}
