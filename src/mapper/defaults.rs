//! Built-in mappings of the SCIM User and Group resources onto the
//! standard `inetOrgPerson` and `groupOfUniqueNames` object classes.

use super::config::MappingConfig;
use super::resource::ResourceMapper;
use crate::error::{ConfigError, ConfigResult};
use crate::schema::SchemaRegistry;

/// The default mapping configuration.
pub fn default_mappings() -> &'static str {
    r#"{
  "resources": [
    {
      "name": "User",
      "structuralObjectClass": "inetOrgPerson",
      "objectClasses": ["top", "person", "organizationalPerson", "inetOrgPerson"],
      "rdnAttribute": "uid",
      "attributes": [
        { "name": "userName", "simple": { "ldapAttribute": "uid" } },
        {
          "name": "name",
          "complex": {
            "sortSubAttribute": "familyName",
            "subAttributes": [
              { "name": "formatted", "ldapAttribute": "cn" },
              { "name": "familyName", "ldapAttribute": "sn" },
              { "name": "givenName", "ldapAttribute": "givenName" }
            ]
          }
        },
        { "name": "displayName", "simple": { "ldapAttribute": "displayName" } },
        { "name": "title", "simple": { "ldapAttribute": "title" } },
        { "name": "preferredLanguage", "simple": { "ldapAttribute": "preferredLanguage" } },
        {
          "name": "emails",
          "plural": {
            "types": [
              { "type": "work", "subAttributes": [ { "name": "value", "ldapAttribute": "mail" } ] }
            ]
          }
        },
        {
          "name": "phoneNumbers",
          "plural": {
            "types": [
              { "type": "work", "subAttributes": [ { "name": "value", "ldapAttribute": "telephoneNumber" } ] },
              { "type": "home", "subAttributes": [ { "name": "value", "ldapAttribute": "homePhone" } ] },
              { "type": "fax", "subAttributes": [ { "name": "value", "ldapAttribute": "facsimileTelephoneNumber" } ] }
            ]
          }
        },
        {
          "name": "addresses",
          "plural": {
            "types": [
              {
                "type": "work",
                "subAttributes": [
                  { "name": "formatted", "ldapAttribute": "postalAddress", "transformation": "formattedAddress" },
                  { "name": "streetAddress", "ldapAttribute": "street", "singleValued": true },
                  { "name": "locality", "ldapAttribute": "l", "singleValued": true },
                  { "name": "region", "ldapAttribute": "st", "singleValued": true },
                  { "name": "postalCode", "ldapAttribute": "postalCode", "singleValued": true }
                ]
              },
              {
                "type": "home",
                "subAttributes": [
                  { "name": "formatted", "ldapAttribute": "homePostalAddress", "transformation": "formattedAddress" }
                ]
              }
            ]
          }
        },
        {
          "name": "employeeNumber",
          "schema": "urn:scim:schemas:extension:enterprise:1.0",
          "simple": { "ldapAttribute": "employeeNumber" }
        },
        {
          "name": "department",
          "schema": "urn:scim:schemas:extension:enterprise:1.0",
          "simple": { "ldapAttribute": "departmentNumber" }
        }
      ]
    },
    {
      "name": "Group",
      "structuralObjectClass": "groupOfUniqueNames",
      "objectClasses": ["top", "groupOfUniqueNames"],
      "rdnAttribute": "cn",
      "attributes": [
        { "name": "displayName", "simple": { "ldapAttribute": "cn" } },
        {
          "name": "members",
          "plural": {
            "types": [
              { "subAttributes": [ { "name": "value", "ldapAttribute": "uniqueMember" } ] }
            ]
          }
        }
      ]
    }
  ]
}"#
}

/// Build the default User and Group mappers.
pub fn default_resource_mappers(registry: &SchemaRegistry) -> ConfigResult<Vec<ResourceMapper>> {
    MappingConfig::from_json(default_mappings())?.build(registry)
}

/// Build the default mapper of one resource, looked up ignoring case.
pub fn default_resource_mapper(
    registry: &SchemaRegistry,
    resource_name: &str,
) -> ConfigResult<ResourceMapper> {
    default_resource_mappers(registry)?
        .into_iter()
        .find(|m| m.resource_name().eq_ignore_ascii_case(resource_name))
        .ok_or_else(|| ConfigError::invalid_resource(resource_name, "no default mapping"))
}
