//! Mapping between SCIM resources and LDAP directory entries.
//!
//! Mapping happens at three levels:
//!
//! * [`ValueMapper`] converts single values between one SCIM
//!   (sub-)attribute and one directory attribute, optionally applying a
//!   [`Transformation`].
//! * [`AttributeMapper`] maps one SCIM attribute. Simple, complex and
//!   plural attributes each have their own variant.
//! * [`ResourceMapper`] maps a whole resource type and also translates
//!   filters and sort requests.
//!
//! Mappers are built once, from code or from a [`MappingConfig`], and are
//! immutable afterwards. They can be shared freely between threads.
//!
//! # Example
//!
//! ```rust
//! use scim_ldap::ldap::{Entry, LdapAttribute};
//! use scim_ldap::mapper::defaults;
//! use scim_ldap::resource::QueryAttributes;
//! use scim_ldap::schema::{SchemaRegistry, SCHEMA_URI_CORE};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new()?;
//! let users = defaults::default_resource_mapper(&registry, "User")?;
//!
//! let entry = Entry::with_attributes(
//!     "uid=bjensen,ou=people,dc=example,dc=com",
//!     vec![
//!         LdapAttribute::new("uid", "bjensen"),
//!         LdapAttribute::new("sn", "Jensen"),
//!     ],
//! );
//! let user = users.to_scim_object(&entry, &QueryAttributes::all());
//! assert!(user.has_attribute(SCHEMA_URI_CORE, "userName"));
//! assert!(user.has_attribute(SCHEMA_URI_CORE, "name"));
//! # Ok(())
//! # }
//! ```

pub mod attribute;
pub mod complex;
pub mod config;
pub mod defaults;
pub mod plural;
pub mod plural_value;
pub mod resource;
pub mod simple;
pub mod value;


pub use attribute::AttributeMapper;
pub use complex::ComplexSingularAttributeMapper;
pub use config::MappingConfig;
pub use plural::PluralAttributeMapper;
pub use plural_value::PluralValueMapper;
pub use resource::{ResourceMapper, ResourceMapperBuilder};
pub use simple::SimpleAttributeMapper;
pub use value::{Transformation, ValueMapper};
