//! Property-based tests of the value and attribute mapping laws.

mod common;

use chrono::{DateTime, TimeZone, Utc};
use common::*;
use proptest::prelude::*;
use scim_ldap::ldap::Entry;
use scim_ldap::mapper::{AttributeMapper, Transformation, ValueMapper};
use scim_ldap::resource::{AttributeValue, QueryAttributes, ScalarValue, ScimAttribute};
use scim_ldap::schema::{AttributeDescriptor, SCHEMA_URI_CORE};
use scim_ldap::ScimObject;
use std::collections::HashSet;
use std::sync::Arc;

fn type_value_pairs(values: &[AttributeValue]) -> HashSet<(String, String)> {
    values
        .iter()
        .map(|element| {
            (
                element
                    .sub_attribute("type")
                    .and_then(AttributeValue::as_str)
                    .unwrap_or_default()
                    .to_string(),
                element
                    .sub_attribute("value")
                    .and_then(AttributeValue::as_str)
                    .unwrap_or_default()
                    .to_string(),
            )
        })
        .collect()
}

/// Instants with a four digit year, down to the nanosecond.
fn date_time() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..253_402_300_800, 0u32..1_000_000_000)
        .prop_filter_map("valid instant", |(seconds, nanos)| {
            Utc.timestamp_opt(seconds, nanos).single()
        })
}

fn scalar_value() -> impl Strategy<Value = ScalarValue> {
    prop_oneof![
        "\\PC{1,40}".prop_map(ScalarValue::String),
        any::<bool>().prop_map(ScalarValue::Boolean),
        any::<i64>().prop_map(ScalarValue::Integer),
        date_time().prop_map(ScalarValue::DateTime),
        prop::collection::vec(any::<u8>(), 0..64).prop_map(ScalarValue::Binary),
    ]
}

/// Write `value` through a simple mapper typed after it and read it back.
fn simple_round_trip(value: ScalarValue, transformation: Transformation) -> Option<AttributeValue> {
    let descriptor = Arc::new(AttributeDescriptor::simple(
        "urn:test:schemas:sample",
        "sample",
        value.data_type(),
    ));
    let mapper = AttributeMapper::simple(
        Arc::clone(&descriptor),
        ValueMapper::new("sample", "sampleValue").with_transformation(transformation),
    )
    .unwrap();

    let mut object = ScimObject::new("Sample");
    object.add_attribute(ScimAttribute::singular(descriptor, AttributeValue::Scalar(value)).unwrap());
    let mut attributes = Vec::new();
    mapper.to_ldap_attributes(&object, &mut attributes);
    assert_eq!(attributes.len(), 1);

    let entry = Entry::with_attributes("cn=sample", attributes);
    mapper.to_scim_attribute(&entry).map(ScimAttribute::into_value)
}

proptest! {
    #[test]
    fn test_every_scalar_kind_round_trips(value in scalar_value()) {
        let expected = AttributeValue::Scalar(value.clone());
        prop_assert_eq!(simple_round_trip(value, Transformation::Default), Some(expected));
    }

    #[test]
    fn test_generalized_time_round_trip(instant in date_time()) {
        let expected = AttributeValue::date_time(instant);
        prop_assert_eq!(
            simple_round_trip(ScalarValue::DateTime(instant), Transformation::GeneralizedTime),
            Some(expected)
        );
    }

    #[test]
    fn test_simple_mapping_round_trip(user_name in "[a-zA-Z0-9._@-]{1,40}") {
        let registry = registry();
        let mapper = user_mapper(&registry);

        let mut user = ScimObject::new("User");
        user.add_attribute(string_attribute(&registry, "userName", &user_name));

        let entry = Entry::with_attributes("uid=x", mapper.to_ldap_attributes(&user));
        prop_assert_eq!(entry.attribute_values("uid"), &[user_name.clone()]);

        let read_back = mapper.to_scim_object(&entry, &QueryAttributes::all());
        prop_assert_eq!(
            read_back.get_attribute(SCHEMA_URI_CORE, "userName"),
            user.get_attribute(SCHEMA_URI_CORE, "userName")
        );
    }

    #[test]
    fn test_formatted_address_round_trip(formatted in "[^$]{0,60}") {
        let registry = registry();
        let addresses = core(&registry, "addresses");
        let descriptor = addresses.sub_attribute("formatted").unwrap();
        let mapper = ValueMapper::new("formatted", "postalAddress")
            .with_transformation(Transformation::FormattedAddress);

        let ldap_value = mapper
            .to_ldap_value(&AttributeValue::string(formatted.as_str()))
            .unwrap();
        prop_assert!(!ldap_value.contains('\n'));

        let scim_value = mapper.to_scim_value(&ldap_value, descriptor).unwrap();
        prop_assert_eq!(scim_value.as_str(), Some(formatted.as_str()));
    }

    #[test]
    fn test_plural_fan_out_reconstructs_typed_values(
        work in "\\+?[0-9][0-9 -]{3,15}",
        home in "\\+?[0-9][0-9 -]{3,15}",
    ) {
        let registry = registry();
        let mapper = user_mapper(&registry);

        let phones = vec![
            element(&[("value", work.as_str()), ("type", "work")]),
            element(&[("value", home.as_str()), ("type", "home")]),
        ];
        let mut user = ScimObject::new("User");
        user.add_attribute(plural_attribute(&registry, "phoneNumbers", phones.clone()));

        let entry = Entry::with_attributes("uid=x", mapper.to_ldap_attributes(&user));
        prop_assert_eq!(entry.attribute_values("telephoneNumber"), &[work.clone()]);
        prop_assert_eq!(entry.attribute_values("homePhone"), &[home.clone()]);

        let read_back = mapper.to_scim_object(&entry, &QueryAttributes::all());
        let attribute = read_back.get_attribute(SCHEMA_URI_CORE, "phoneNumbers").unwrap();
        prop_assert_eq!(attribute.plural_values().len(), 2);
        prop_assert_eq!(
            type_value_pairs(attribute.plural_values()),
            type_value_pairs(&phones)
        );
    }
}

#[test]
fn test_absent_values_stay_absent() {
    let registry = registry();
    let mapper = user_mapper(&registry);

    let empty = ScimObject::new("User");
    assert!(mapper.to_ldap_attributes(&empty).is_empty());

    let entry = Entry::new("uid=x");
    for attribute_mapper in mapper.attribute_mappers() {
        assert!(
            attribute_mapper.to_scim_attribute(&entry).is_none(),
            "{} produced a value from an empty entry",
            attribute_mapper.descriptor().name
        );
    }
}
