//! End-to-end tests of the default User mapping.

mod common;

use common::*;
use scim_ldap::ldap::{Entry, LdapAttribute};
use scim_ldap::resource::{AttributeValue, QueryAttributes, SortParameters};
use scim_ldap::schema::{SCHEMA_URI_CORE, SCHEMA_URI_ENTERPRISE_EXTENSION};
use scim_ldap::{MappingError, ScimAttribute, ScimObject};

#[test]
fn test_entry_maps_to_user() {
    init_logging();
    let registry = registry();
    let mapper = user_mapper(&registry);

    let user = mapper.to_scim_object(&robert_smith(), &QueryAttributes::all());

    assert_eq!(user.resource_name(), "User");
    assert_eq!(user.len(), 2);

    let name = user.get_attribute(SCHEMA_URI_CORE, "name").unwrap();
    assert_eq!(
        name.singular_value().unwrap(),
        &element(&[
            ("formatted", "Robert Smith"),
            ("familyName", "Smith"),
            ("givenName", "Robert"),
        ])
    );

    let emails = user.get_attribute(SCHEMA_URI_CORE, "emails").unwrap();
    assert_eq!(
        emails.plural_values(),
        &[element(&[("value", "r.smith@work.example"), ("type", "work")])]
    );

    assert!(!user.has_attribute(SCHEMA_URI_CORE, "userName"));
    assert!(!user.has_attribute(SCHEMA_URI_CORE, "phoneNumbers"));
}

#[test]
fn test_entry_without_mapped_attributes_maps_to_empty_user() {
    let registry = registry();
    let mapper = user_mapper(&registry);
    let entry = Entry::with_attributes(
        "uid=nobody,ou=people,dc=example,dc=com",
        vec![
            LdapAttribute::new("objectClass", "inetOrgPerson"),
            LdapAttribute::new("seeAlso", "cn=other"),
        ],
    );

    let user = mapper.to_scim_object(&entry, &QueryAttributes::all());
    assert!(user.is_empty());
}

#[test]
fn test_requested_attributes_limit_the_user() {
    let registry = registry();
    let mapper = user_mapper(&registry);

    let requested = QueryAttributes::parse("name.familyName");
    let user = mapper.to_scim_object(&robert_smith(), &requested);

    assert_eq!(user.len(), 1);
    let name = user.get_attribute(SCHEMA_URI_CORE, "name").unwrap();
    assert_eq!(
        name.singular_value().unwrap(),
        &element(&[("familyName", "Smith")])
    );
}

#[test]
fn test_requested_attributes_select_ldap_types() {
    let registry = registry();
    let mapper = user_mapper(&registry);

    let types = mapper.to_ldap_attribute_types(&QueryAttributes::parse("userName,emails"));
    assert_eq!(types, vec!["objectClass", "uid", "mail"]);

    let all = mapper.to_ldap_attribute_types(&QueryAttributes::all());
    for expected in ["objectClass", "uid", "cn", "sn", "mail", "homePhone", "postalCode"] {
        assert!(all.iter().any(|t| t == expected), "missing {}", expected);
    }
}

#[test]
fn test_user_maps_to_new_entry() {
    init_logging();
    let registry = registry();
    let mapper = user_mapper(&registry);

    let entry = mapper
        .to_ldap_entry(&barbara_jensen(&registry), "ou=people,dc=example,dc=com")
        .unwrap();

    assert_eq!(entry.dn(), "uid=bjensen,ou=people,dc=example,dc=com");
    assert_eq!(
        entry.attribute_values("objectClass"),
        &["top", "person", "organizationalPerson", "inetOrgPerson"]
    );
    assert_eq!(entry.attribute_value("uid"), Some("bjensen"));
    assert_eq!(entry.attribute_value("cn"), Some("Ms. Barbara J Jensen III"));
    assert_eq!(entry.attribute_value("sn"), Some("Jensen"));
    assert_eq!(entry.attribute_value("givenName"), Some("Barbara"));
    assert_eq!(entry.attribute_value("displayName"), Some("Babs Jensen"));
    assert_eq!(entry.attribute_value("mail"), Some("bjensen@example.com"));
    assert_eq!(entry.attribute_value("telephoneNumber"), Some("555-555-5555"));
    assert_eq!(entry.attribute_value("homePhone"), Some("555-555-4444"));
    assert_eq!(
        entry.attribute_value("postalAddress"),
        Some("100 Universal City Plaza$Hollywood, CA 91608 USA")
    );
    assert_eq!(
        entry.attribute_value("homePostalAddress"),
        Some("456 Hollywood Blvd$Hollywood, CA 91608 USA")
    );
    assert_eq!(entry.attribute_value("l"), Some("Hollywood"));
    assert!(!entry.has_attribute("facsimileTelephoneNumber"));
}

#[test]
fn test_user_without_user_name_cannot_become_entry() {
    let registry = registry();
    let mapper = user_mapper(&registry);
    let mut user = barbara_jensen(&registry);
    user.remove_attribute(SCHEMA_URI_CORE, "userName");

    let result = mapper.to_ldap_entry(&user, "ou=people,dc=example,dc=com");
    assert!(matches!(
        result,
        Err(MappingError::MissingRdnValue { ref attribute }) if attribute == "uid"
    ));
}

#[test]
fn test_user_survives_directory_round_trip() {
    let registry = registry();
    let mapper = user_mapper(&registry);
    let original = barbara_jensen(&registry);

    let entry = mapper
        .to_ldap_entry(&original, "ou=people,dc=example,dc=com")
        .unwrap();
    let read_back = mapper.to_scim_object(&entry, &QueryAttributes::all());

    for name in ["userName", "name", "displayName", "title", "emails"] {
        assert_eq!(
            read_back.get_attribute(SCHEMA_URI_CORE, name),
            original.get_attribute(SCHEMA_URI_CORE, name),
            "attribute {} changed",
            name
        );
    }

    let phones = read_back
        .get_attribute(SCHEMA_URI_CORE, "phoneNumbers")
        .unwrap();
    assert_eq!(phones.plural_values().len(), 2);
    assert!(
        phones
            .plural_values()
            .contains(&element(&[("value", "555-555-4444"), ("type", "home")]))
    );

    let addresses = read_back.get_attribute(SCHEMA_URI_CORE, "addresses").unwrap();
    let work = addresses
        .plural_values()
        .iter()
        .find(|a| a.sub_attribute("type").and_then(AttributeValue::as_str) == Some("work"))
        .unwrap();
    assert_eq!(
        work.sub_attribute("formatted").and_then(AttributeValue::as_str),
        Some("100 Universal City Plaza\nHollywood, CA 91608 USA")
    );
    assert_eq!(
        work.sub_attribute("postalCode").and_then(AttributeValue::as_str),
        Some("91608")
    );
}

#[test]
fn test_emails_of_unmapped_type_are_dropped() {
    let registry = registry();
    let mapper = user_mapper(&registry);

    let mut user = ScimObject::new("User");
    user.add_attribute(string_attribute(&registry, "userName", "bjensen"));
    user.add_attribute(plural_attribute(
        &registry,
        "emails",
        vec![
            element(&[("value", "babs@jensen.org"), ("type", "home")]),
            element(&[("value", "bjensen@example.com"), ("type", "work")]),
        ],
    ));

    let attributes = mapper.to_ldap_attributes(&user);
    let mail: Vec<&LdapAttribute> = attributes.iter().filter(|a| a.is_named("mail")).collect();
    assert_eq!(mail.len(), 1);
    assert_eq!(mail[0].values(), &["bjensen@example.com"]);
}

#[test]
fn test_enterprise_attributes_map_to_directory() {
    let registry = registry();
    let mapper = user_mapper(&registry);

    let mut user = ScimObject::new("User");
    user.add_attribute(string_attribute(&registry, "userName", "bjensen"));
    user.add_attribute(
        ScimAttribute::singular(
            registry
                .require_attribute(SCHEMA_URI_ENTERPRISE_EXTENSION, "department")
                .unwrap(),
            AttributeValue::string("Tour Operations"),
        )
        .unwrap(),
    );

    let entry = mapper.to_ldap_entry(&user, "").unwrap();
    assert_eq!(entry.dn(), "uid=bjensen");
    assert_eq!(entry.attribute_value("departmentNumber"), Some("Tour Operations"));

    let read_back = mapper.to_scim_object(&entry, &QueryAttributes::all());
    let department = read_back
        .get_attribute(SCHEMA_URI_ENTERPRISE_EXTENSION, "department")
        .unwrap();
    assert_eq!(
        department.singular_value().and_then(AttributeValue::as_str),
        Some("Tour Operations")
    );
}

#[test]
fn test_sort_keys() {
    let registry = registry();
    let mapper = user_mapper(&registry);

    let key = mapper
        .to_ldap_sort_key(&SortParameters::from_query("userName", None))
        .unwrap();
    assert_eq!(key.attribute_name, "uid");
    assert!(!key.reverse_order);

    let key = mapper
        .to_ldap_sort_key(&SortParameters::from_query("name", Some("descending")))
        .unwrap();
    assert_eq!(key.attribute_name, "sn");
    assert!(key.reverse_order);

    assert!(
        mapper
            .to_ldap_sort_key(&SortParameters::from_query("emails", None))
            .is_none()
    );
    assert!(
        mapper
            .to_ldap_sort_key(&SortParameters::from_query("nickName", None))
            .is_none()
    );
}

#[test]
fn test_entry_recognition() {
    let registry = registry();
    let mapper = user_mapper(&registry);

    assert!(mapper.is_resource_entry(&robert_smith()));

    let group = Entry::with_attributes(
        "cn=admins,ou=groups,dc=example,dc=com",
        vec![LdapAttribute::new("objectClass", "groupOfUniqueNames")],
    );
    assert!(!mapper.is_resource_entry(&group));
}
