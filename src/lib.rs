//! SCIM to LDAP attribute mapping for Rust.
//!
//! Translates between the schema-driven SCIM object model and flat LDAP
//! directory entries in both directions, including filter translation,
//! plural attribute handling and sort-key derivation.
//!
//! # Core Components
//!
//! - [`SchemaRegistry`] - Attribute descriptors of the SCIM schemas
//! - [`ScimObject`] - Generic SCIM resource made of typed attributes
//! - [`ResourceMapper`] - Maps one resource type to and from directory entries
//! - [`MappingConfig`] - Declarative mapping definitions loaded from JSON
//!
//! # Quick Start
//!
//! ```rust
//! use scim_ldap::{LdapFilterExt, SchemaRegistry, ScimFilter};
//! use scim_ldap::mapper::defaults;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new()?;
//! let users = defaults::default_resource_mapper(&registry, "User")?;
//!
//! let filter = ScimFilter::contains("emails", "@example.com");
//! let ldap_filter = users.to_ldap_search_filter(Some(&filter))?;
//! assert_eq!(
//!     ldap_filter.display().to_string(),
//!     "(&(mail=*@example.com*)(objectClass=inetOrgPerson))"
//! );
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod filter;
pub mod ldap;
pub mod mapper;
pub mod resource;
pub mod schema;

// Re-export commonly used types for convenience
pub use error::{ConfigError, MappingError, ScimError, ScimResult, ValidationError};
pub use filter::{FilterOperation, ScimFilter};
pub use ldap::{Entry, LdapAttribute, LdapFilter, LdapFilterExt, Mod, SortKey};
pub use mapper::{AttributeMapper, MappingConfig, ResourceMapper, ResourceMapperBuilder};
pub use resource::{AttributeValue, QueryAttributes, ScimAttribute, ScimObject};
pub use schema::{AttributeDescriptor, Schema, SchemaRegistry};
