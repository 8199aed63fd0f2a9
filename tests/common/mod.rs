//! Shared fixtures for the mapping integration tests.

#![allow(dead_code)]

use scim_ldap::ldap::{Entry, LdapAttribute};
use scim_ldap::mapper::{ResourceMapper, defaults};
use scim_ldap::resource::{AttributeValue, ScimAttribute, ScimObject};
use scim_ldap::schema::{AttributeDescriptor, SCHEMA_URI_CORE, SchemaRegistry};
use std::sync::Arc;

/// Route `log` output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn registry() -> SchemaRegistry {
    SchemaRegistry::new().expect("Failed to create registry")
}

pub fn user_mapper(registry: &SchemaRegistry) -> ResourceMapper {
    defaults::default_resource_mapper(registry, "User").expect("default User mapping")
}

pub fn group_mapper(registry: &SchemaRegistry) -> ResourceMapper {
    defaults::default_resource_mapper(registry, "Group").expect("default Group mapping")
}

pub fn core(registry: &SchemaRegistry, name: &str) -> Arc<AttributeDescriptor> {
    registry
        .require_attribute(SCHEMA_URI_CORE, name)
        .expect("core attribute")
}

pub fn string_attribute(registry: &SchemaRegistry, name: &str, value: &str) -> ScimAttribute {
    ScimAttribute::singular(core(registry, name), AttributeValue::string(value))
        .expect("valid string attribute")
}

/// A complex element with string sub-attributes.
pub fn element(pairs: &[(&str, &str)]) -> AttributeValue {
    AttributeValue::complex(
        pairs
            .iter()
            .map(|(name, value)| (*name, AttributeValue::string(*value))),
    )
}

pub fn plural_attribute(
    registry: &SchemaRegistry,
    name: &str,
    values: Vec<AttributeValue>,
) -> ScimAttribute {
    ScimAttribute::plural(core(registry, name), values).expect("valid plural attribute")
}

/// The person entry used across the end-to-end tests.
pub fn robert_smith() -> Entry {
    Entry::with_attributes(
        "uid=rsmith,ou=people,dc=example,dc=com",
        vec![
            LdapAttribute::with_values("objectClass", ["top", "person", "inetOrgPerson"]),
            LdapAttribute::new("cn", "Robert Smith"),
            LdapAttribute::new("sn", "Smith"),
            LdapAttribute::new("givenName", "Robert"),
            LdapAttribute::new("mail", "r.smith@work.example"),
        ],
    )
}

/// Barbara Jensen as a SCIM User.
pub fn barbara_jensen(registry: &SchemaRegistry) -> ScimObject {
    let mut user = ScimObject::new("User");
    user.add_attribute(string_attribute(registry, "userName", "bjensen"));
    user.add_attribute(
        ScimAttribute::singular(
            core(registry, "name"),
            AttributeValue::complex([
                ("formatted", AttributeValue::string("Ms. Barbara J Jensen III")),
                ("familyName", AttributeValue::string("Jensen")),
                ("givenName", AttributeValue::string("Barbara")),
            ]),
        )
        .expect("valid name"),
    );
    user.add_attribute(string_attribute(registry, "displayName", "Babs Jensen"));
    user.add_attribute(string_attribute(registry, "title", "Tour Guide"));
    user.add_attribute(plural_attribute(
        registry,
        "emails",
        vec![element(&[("value", "bjensen@example.com"), ("type", "work")])],
    ));
    user.add_attribute(plural_attribute(
        registry,
        "phoneNumbers",
        vec![
            element(&[("value", "555-555-5555"), ("type", "work")]),
            element(&[("value", "555-555-4444"), ("type", "home")]),
        ],
    ));
    user.add_attribute(plural_attribute(
        registry,
        "addresses",
        vec![
            element(&[
                ("formatted", "100 Universal City Plaza\nHollywood, CA 91608 USA"),
                ("streetAddress", "100 Universal City Plaza"),
                ("locality", "Hollywood"),
                ("region", "CA"),
                ("postalCode", "91608"),
                ("type", "work"),
            ]),
            element(&[
                ("formatted", "456 Hollywood Blvd\nHollywood, CA 91608 USA"),
                ("type", "home"),
            ]),
        ],
    ));
    user
}
