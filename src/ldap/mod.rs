//! Directory-side primitives.
//!
//! Filters, sort keys and modifications are the `ldap3_proto` and `ldap3`
//! protocol types; this module adds what the mapping layer needs on top of
//! them. Connections and protocol encoding live elsewhere.

pub mod entry;
pub mod filter;
pub mod modification;
pub mod sort;


pub use entry::{Entry, LdapAttribute};
pub use filter::{FilterDisplay, LdapFilter, LdapFilterExt, LdapSubstringFilter};
pub use modification::{Mod, diff, modified_attribute};
pub use sort::{SortKey, sort_key};

/// The attribute holding an entry's object classes.
pub const OBJECT_CLASS: &str = "objectClass";
