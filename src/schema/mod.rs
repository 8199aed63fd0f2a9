//! Schema definitions for SCIM resources.
//!
//! This module provides the attribute descriptors every mapper is built
//! from, and the registry that loads and hands them out.
//!
//! # Key Types
//!
//! - [`Schema`] - SCIM schema definition with attributes and resource types
//! - [`SchemaRegistry`] - Registry for loading and accessing schemas
//! - [`AttributeDescriptor`] - Individual attribute type, multiplicity and sub-attributes
//!
//! # Examples
//!
//! ```rust
//! use scim_ldap::schema::{SchemaRegistry, SCHEMA_URI_CORE};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new()?;
//! let emails = registry.require_attribute(SCHEMA_URI_CORE, "emails")?;
//! assert!(emails.multi_valued);
//! # Ok(())
//! # }
//! ```

pub mod embedded;
pub mod registry;
pub mod types;


pub use registry::SchemaRegistry;
pub use types::{
    AttributeDescriptor, DataType, ResourceDescriptor, SCHEMA_URI_CORE,
    SCHEMA_URI_ENTERPRISE_EXTENSION, Schema, TYPE_SUB_ATTRIBUTE, VALUE_SUB_ATTRIBUTE,
};
