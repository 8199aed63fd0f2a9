//! Error types for SCIM to LDAP mapping.
//!
//! Errors fall into three groups. Configuration errors are raised while
//! schemas and mappers are being constructed and should stop startup.
//! Mapping errors are raised while translating a request and indicate a
//! malformed request or mapper setup that cannot be degraded gracefully.
//! Validation errors report values that do not agree with their descriptor.
//!
//! Missing data is never an error: mappers return `None`, emit nothing, or
//! produce a filter that matches no entries.

/// Main error type for the mapping engine.
#[derive(Debug, thiserror::Error)]
pub enum ScimError {
    /// Mapper or schema configuration is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A request could not be translated
    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),

    /// Value does not conform to its attribute descriptor
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while building schemas, descriptors and mappers.
///
/// These are programming or deployment errors and are expected to surface
/// when the mapping layer is registered, never per request.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Schema URI is not registered
    #[error("Unknown schema: {schema}")]
    UnknownSchema { schema: String },

    /// Attribute is not defined in the schema
    #[error("Unknown attribute '{attribute}' in schema '{schema}'")]
    UnknownAttribute { schema: String, attribute: String },

    /// Sub-attribute is not defined by the complex attribute
    #[error("Attribute '{attribute}' has no sub-attribute '{sub_attribute}'")]
    UnknownSubAttribute {
        attribute: String,
        sub_attribute: String,
    },

    /// Descriptor kind does not suit the requested mapper variant
    #[error("Attribute '{attribute}' cannot be mapped as {mapper}: {reason}")]
    DescriptorMismatch {
        attribute: String,
        mapper: &'static str,
        reason: String,
    },

    /// Two attribute mappers write the same LDAP attribute
    #[error(
        "LDAP attribute '{ldap_attribute}' is mapped by both '{first}' and '{second}' in resource '{resource}'"
    )]
    DuplicateLdapAttribute {
        resource: String,
        ldap_attribute: String,
        first: String,
        second: String,
    },

    /// Two attribute mappers claim the same SCIM attribute
    #[error("SCIM attribute '{attribute}' is mapped more than once in resource '{resource}'")]
    DuplicateScimAttribute { resource: String, attribute: String },

    /// Two plural value mappers share a discriminator
    #[error("Plural attribute '{attribute}' has more than one mapping for type {type_value:?}")]
    DuplicateDiscriminator {
        attribute: String,
        type_value: Option<String>,
    },

    /// Sort sub-attribute has no value mapper
    #[error("Sort sub-attribute '{sub_attribute}' of '{attribute}' is not mapped")]
    UnmappedSortAttribute {
        attribute: String,
        sub_attribute: String,
    },

    /// Attribute mapper has nothing to map
    #[error("Attribute '{attribute}' has no value mappings")]
    EmptyMapping { attribute: String },

    /// Schema definition is malformed
    #[error("Invalid schema '{schema}': {message}")]
    InvalidSchema { schema: String, message: String },

    /// Resource definition is malformed
    #[error("Invalid resource '{resource}': {message}")]
    InvalidResource { resource: String, message: String },

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while translating between SCIM and LDAP.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    /// Filter operation is not recognized
    #[error("Filter operation '{operation}' is not supported")]
    UnsupportedFilterOperation { operation: String },

    /// Filter operation requires a comparison value
    #[error("Filter operation '{operation}' on '{attribute}' requires a value")]
    MissingFilterValue {
        operation: String,
        attribute: String,
    },

    /// Entry cannot be named because its RDN attribute has no value
    #[error("Cannot construct a DN: RDN attribute '{attribute}' has no value")]
    MissingRdnValue { attribute: String },

    /// Resource mapper has no RDN attribute and cannot name new entries
    #[error("Resource '{resource}' has no RDN attribute configured")]
    NoRdnAttribute { resource: String },
}

/// Errors for values that do not conform to their attribute descriptor.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Plural value supplied for a singular attribute
    #[error("Attribute '{attribute}' must be single-valued")]
    ExpectedSingleValue { attribute: String },

    /// Singular value supplied for a multi-valued attribute
    #[error("Attribute '{attribute}' must be multi-valued")]
    ExpectedMultiValue { attribute: String },

    /// Plural value nested inside a plural value
    #[error("Attribute '{attribute}' contains a nested multi-valued value")]
    NestedPluralValue { attribute: String },

    /// Value kind does not match the descriptor's data type
    #[error("Attribute '{attribute}' has invalid type, expected {expected}, got {actual}")]
    InvalidAttributeType {
        attribute: String,
        expected: String,
        actual: String,
    },

    /// Complex value carries a sub-attribute the descriptor does not define
    #[error("Complex attribute '{attribute}' contains unknown sub-attribute '{sub_attribute}'")]
    UnknownSubAttribute {
        attribute: String,
        sub_attribute: String,
    },

    /// Text could not be parsed as the descriptor's data type
    #[error("Value '{value}' is not a valid {expected}")]
    UnparsableValue { value: String, expected: String },
}

impl ConfigError {
    /// Create a descriptor mismatch error
    pub fn mismatch(
        attribute: impl Into<String>,
        mapper: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::DescriptorMismatch {
            attribute: attribute.into(),
            mapper,
            reason: reason.into(),
        }
    }

    /// Create an invalid schema error
    pub fn invalid_schema(schema: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSchema {
            schema: schema.into(),
            message: message.into(),
        }
    }

    /// Create an invalid resource error
    pub fn invalid_resource(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidResource {
            resource: resource.into(),
            message: message.into(),
        }
    }
}

impl MappingError {
    /// Create an unsupported filter operation error
    pub fn unsupported_operation(operation: impl Into<String>) -> Self {
        Self::UnsupportedFilterOperation {
            operation: operation.into(),
        }
    }
}

impl ValidationError {
    /// Create an invalid type error
    pub fn invalid_type(
        attribute: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidAttributeType {
            attribute: attribute.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an unparsable value error
    pub fn unparsable(value: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::UnparsableValue {
            value: value.into(),
            expected: expected.into(),
        }
    }
}

// Result type aliases for convenience
pub type ScimResult<T> = Result<T, ScimError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type MappingResult<T> = Result<T, MappingError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
