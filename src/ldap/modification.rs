//! Modifications applied to an existing directory entry.
//!
//! Changes are expressed as [`ldap3::Mod`] values ready for `Ldap::modify`.
//! A `Delete` with an empty value set removes the whole attribute.

use super::entry::{Entry, LdapAttribute};

pub use ldap3::Mod;
use std::collections::HashSet;

/// The attribute a modification touches.
pub fn modified_attribute(modification: &Mod<String>) -> &str {
    match modification {
        Mod::Add(attribute, _)
        | Mod::Delete(attribute, _)
        | Mod::Replace(attribute, _)
        | Mod::Increment(attribute, _) => attribute,
    }
}

/// Compute the modifications that turn `current` into `target` for the
/// given attribute types.
///
/// Attributes outside `attribute_types` are left alone. Values are compared
/// as sets, so reordering alone produces no modification.
pub fn diff(
    current: &Entry,
    target: &[LdapAttribute],
    attribute_types: &[String],
) -> Vec<Mod<String>> {
    let mut modifications = Vec::new();
    for attribute_type in attribute_types {
        let before: HashSet<&str> = current
            .attribute_values(attribute_type)
            .iter()
            .map(String::as_str)
            .collect();
        let after: HashSet<String> = target
            .iter()
            .filter(|a| a.is_named(attribute_type))
            .flat_map(|a| a.values().iter().cloned())
            .collect();
        if before.len() == after.len() && after.iter().all(|v| before.contains(v.as_str())) {
            continue;
        }

        if after.is_empty() {
            modifications.push(Mod::Delete(attribute_type.clone(), HashSet::new()));
        } else {
            modifications.push(Mod::Replace(attribute_type.clone(), after));
        }
    }
    modifications
}
