//! End-to-end tests of the default Group mapping.

mod common;

use common::*;
use scim_ldap::ScimObject;
use scim_ldap::ldap::{Entry, LdapAttribute, LdapFilterExt, Mod};
use std::collections::HashSet;
use scim_ldap::resource::{AttributeValue, QueryAttributes};
use scim_ldap::schema::SCHEMA_URI_CORE;

const ALICE: &str = "uid=alice,ou=people,dc=example,dc=com";
const BOB: &str = "uid=bob,ou=people,dc=example,dc=com";

fn administrators(registry: &scim_ldap::SchemaRegistry, members: &[&str]) -> ScimObject {
    let mut group = ScimObject::new("Group");
    group.add_attribute(string_attribute(registry, "displayName", "Administrators"));
    if !members.is_empty() {
        group.add_attribute(plural_attribute(
            registry,
            "members",
            members.iter().map(|m| element(&[("value", *m)])).collect(),
        ));
    }
    group
}

#[test]
fn test_group_maps_to_new_entry() {
    init_logging();
    let registry = registry();
    let mapper = group_mapper(&registry);

    let entry = mapper
        .to_ldap_entry(
            &administrators(&registry, &[ALICE, BOB]),
            "ou=groups,dc=example,dc=com",
        )
        .unwrap();

    assert_eq!(entry.dn(), "cn=Administrators,ou=groups,dc=example,dc=com");
    assert!(entry.has_object_class("groupOfUniqueNames"));
    assert_eq!(entry.attribute_values("uniqueMember"), &[ALICE, BOB]);
}

#[test]
fn test_entry_maps_to_group() {
    let registry = registry();
    let mapper = group_mapper(&registry);
    let entry = Entry::with_attributes(
        "cn=Administrators,ou=groups,dc=example,dc=com",
        vec![
            LdapAttribute::with_values("objectClass", ["top", "groupOfUniqueNames"]),
            LdapAttribute::new("cn", "Administrators"),
            LdapAttribute::with_values("uniqueMember", [ALICE, BOB]),
        ],
    );

    let group = mapper.to_scim_object(&entry, &QueryAttributes::all());

    let display_name = group.get_attribute(SCHEMA_URI_CORE, "displayName").unwrap();
    assert_eq!(
        display_name.singular_value().and_then(AttributeValue::as_str),
        Some("Administrators")
    );

    let members = group.get_attribute(SCHEMA_URI_CORE, "members").unwrap();
    assert_eq!(
        members.plural_values(),
        &[element(&[("value", ALICE)]), element(&[("value", BOB)])]
    );
}

#[test]
fn test_empty_group_has_no_members_attribute() {
    let registry = registry();
    let mapper = group_mapper(&registry);
    let entry = Entry::with_attributes(
        "cn=Empty,ou=groups,dc=example,dc=com",
        vec![
            LdapAttribute::new("objectClass", "groupOfUniqueNames"),
            LdapAttribute::new("cn", "Empty"),
        ],
    );

    let group = mapper.to_scim_object(&entry, &QueryAttributes::all());
    assert_eq!(group.len(), 1);
    assert!(!group.has_attribute(SCHEMA_URI_CORE, "members"));
}

#[test]
fn test_membership_change_replaces_unique_member() {
    let registry = registry();
    let mapper = group_mapper(&registry);
    let current = mapper
        .to_ldap_entry(&administrators(&registry, &[ALICE]), "ou=groups,dc=example,dc=com")
        .unwrap();

    let modifications = mapper.to_ldap_modifications(&current, &administrators(&registry, &[ALICE, BOB]));
    assert_eq!(
        modifications,
        vec![Mod::Replace(
            "uniqueMember".to_string(),
            HashSet::from([ALICE.to_string(), BOB.to_string()]),
        )]
    );

    let modifications = mapper.to_ldap_modifications(&current, &administrators(&registry, &[]));
    assert_eq!(
        modifications,
        vec![Mod::Delete("uniqueMember".to_string(), HashSet::new())]
    );
}

#[test]
fn test_member_filter_targets_unique_member() {
    let registry = registry();
    let mapper = group_mapper(&registry);

    let filter = scim_ldap::ScimFilter::equality("members", ALICE);
    let ldap_filter = mapper.to_ldap_search_filter(Some(&filter)).unwrap();
    assert_eq!(
        ldap_filter.display().to_string(),
        format!("(&(uniqueMember={})(objectClass=groupOfUniqueNames))", ALICE)
    );
}
