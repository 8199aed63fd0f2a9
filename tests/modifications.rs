//! Modifications computed when a SCIM resource replaces an existing entry.

mod common;

use common::*;
use scim_ldap::ldap::{Entry, LdapAttribute, Mod, modified_attribute};
use std::collections::HashSet;
use scim_ldap::schema::SCHEMA_URI_CORE;

fn current_entry() -> Entry {
    Entry::with_attributes(
        "uid=bjensen,ou=people,dc=example,dc=com",
        vec![
            LdapAttribute::with_values(
                "objectClass",
                ["top", "person", "organizationalPerson", "inetOrgPerson"],
            ),
            LdapAttribute::new("uid", "bjensen"),
            LdapAttribute::new("cn", "Ms. Barbara J Jensen III"),
            LdapAttribute::new("sn", "Jensen"),
            LdapAttribute::new("givenName", "Barbara"),
            LdapAttribute::new("displayName", "Babs Jensen"),
            LdapAttribute::new("title", "Tour Guide"),
            LdapAttribute::new("mail", "bjensen@example.com"),
            LdapAttribute::new("preferredLanguage", "en-US"),
            LdapAttribute::new("userPassword", "{SSHA}secret"),
            LdapAttribute::new("manager", "uid=boss,ou=people,dc=example,dc=com"),
        ],
    )
}

#[test]
fn test_changed_and_removed_attributes() {
    init_logging();
    let registry = registry();
    let mapper = user_mapper(&registry);

    let mut user = barbara_jensen(&registry);
    user.set_attribute(string_attribute(&registry, "title", "Senior Tour Guide"));
    user.remove_attribute(SCHEMA_URI_CORE, "phoneNumbers");
    user.remove_attribute(SCHEMA_URI_CORE, "addresses");

    let modifications = mapper.to_ldap_modifications(&current_entry(), &user);

    assert_eq!(
        modifications,
        vec![
            Mod::Replace(
                "title".to_string(),
                HashSet::from(["Senior Tour Guide".to_string()])
            ),
            Mod::Delete("preferredLanguage".to_string(), HashSet::new()),
        ]
    );
}

#[test]
fn test_unowned_attributes_are_untouched() {
    let registry = registry();
    let mapper = user_mapper(&registry);

    let modifications = mapper.to_ldap_modifications(&current_entry(), &scim_ldap::ScimObject::new("User"));

    let touched: Vec<&str> = modifications.iter().map(modified_attribute).collect();
    assert!(!touched.contains(&"objectClass"));
    assert!(!touched.contains(&"userPassword"));
    assert!(!touched.contains(&"manager"));
    assert!(touched.contains(&"uid"));
    assert!(touched.contains(&"mail"));
    assert!(modifications
        .iter()
        .all(|m| matches!(m, Mod::Delete(_, values) if values.is_empty())));
}

#[test]
fn test_new_attributes_are_written_with_replace() {
    let registry = registry();
    let mapper = user_mapper(&registry);

    let mut current = current_entry();
    current.remove_attribute("mail");
    let mut user = barbara_jensen(&registry);
    user.remove_attribute(SCHEMA_URI_CORE, "phoneNumbers");
    user.remove_attribute(SCHEMA_URI_CORE, "addresses");
    user.add_attribute(string_attribute(&registry, "preferredLanguage", "en-US"));

    let modifications = mapper.to_ldap_modifications(&current, &user);
    assert_eq!(
        modifications,
        vec![Mod::Replace(
            "mail".to_string(),
            HashSet::from(["bjensen@example.com".to_string()])
        )]
    );
}

#[test]
fn test_value_order_is_not_a_change() {
    let registry = registry();
    let mapper = group_mapper(&registry);

    let current = Entry::with_attributes(
        "cn=Administrators,ou=groups,dc=example,dc=com",
        vec![
            LdapAttribute::new("cn", "Administrators"),
            LdapAttribute::with_values("uniqueMember", ["uid=b", "uid=a"]),
        ],
    );

    let mut group = scim_ldap::ScimObject::new("Group");
    group.add_attribute(string_attribute(&registry, "displayName", "Administrators"));
    group.add_attribute(plural_attribute(
        &registry,
        "members",
        vec![element(&[("value", "uid=a")]), element(&[("value", "uid=b")])],
    ));

    assert!(mapper.to_ldap_modifications(&current, &group).is_empty());
}
