//! Embedded SCIM schemas.
//!
//! The core schema (shared by User and Group) and the enterprise user
//! extension are embedded as static JSON so that a registry can be built
//! without any schema files on disk.

/// Returns the SCIM core schema as a JSON string.
pub fn core_schema() -> &'static str {
    r#"{
  "id": "urn:scim:schemas:core:1.0",
  "name": "Core",
  "description": "Core schema shared by Users and Groups",
  "resources": [
    {
      "name": "User",
      "description": "User Account",
      "endpoint": "Users"
    },
    {
      "name": "Group",
      "description": "Group",
      "endpoint": "Groups"
    }
  ],
  "attributes": [
    {
      "name": "id",
      "type": "string",
      "multiValued": false,
      "description": "Unique identifier for the resource",
      "caseExact": true
    },
    {
      "name": "externalId",
      "type": "string",
      "multiValued": false,
      "description": "Identifier defined by the provisioning client",
      "caseExact": true
    },
    {
      "name": "userName",
      "type": "string",
      "multiValued": false,
      "description": "Unique identifier for the User",
      "required": true
    },
    {
      "name": "name",
      "type": "complex",
      "multiValued": false,
      "description": "The components of the User's real name",
      "subAttributes": [
        {
          "name": "formatted",
          "type": "string",
          "multiValued": false,
          "description": "The full name"
        },
        {
          "name": "familyName",
          "type": "string",
          "multiValued": false,
          "description": "The family name"
        },
        {
          "name": "givenName",
          "type": "string",
          "multiValued": false,
          "description": "The given name"
        },
        {
          "name": "middleName",
          "type": "string",
          "multiValued": false,
          "description": "The middle name(s)"
        },
        {
          "name": "honorificPrefix",
          "type": "string",
          "multiValued": false,
          "description": "The honorific prefix(es)"
        },
        {
          "name": "honorificSuffix",
          "type": "string",
          "multiValued": false,
          "description": "The honorific suffix(es)"
        }
      ]
    },
    {
      "name": "displayName",
      "type": "string",
      "multiValued": false,
      "description": "The name of the resource, suitable for display"
    },
    {
      "name": "nickName",
      "type": "string",
      "multiValued": false,
      "description": "The casual way to address the User"
    },
    {
      "name": "profileUrl",
      "type": "string",
      "multiValued": false,
      "description": "URL to the User's online profile"
    },
    {
      "name": "title",
      "type": "string",
      "multiValued": false,
      "description": "The User's title"
    },
    {
      "name": "userType",
      "type": "string",
      "multiValued": false,
      "description": "The organization-to-user relationship"
    },
    {
      "name": "preferredLanguage",
      "type": "string",
      "multiValued": false,
      "description": "The User's preferred written or spoken language"
    },
    {
      "name": "locale",
      "type": "string",
      "multiValued": false,
      "description": "The User's default location"
    },
    {
      "name": "timezone",
      "type": "string",
      "multiValued": false,
      "description": "The User's time zone"
    },
    {
      "name": "active",
      "type": "boolean",
      "multiValued": false,
      "description": "The User's administrative status"
    },
    {
      "name": "password",
      "type": "string",
      "multiValued": false,
      "description": "The User's clear text password"
    },
    {
      "name": "emails",
      "type": "complex",
      "multiValued": true,
      "description": "E-mail addresses for the User",
      "subAttributes": [
        {
          "name": "value",
          "type": "string",
          "multiValued": false,
          "description": "The attribute's significant value"
        },
        {
          "name": "display",
          "type": "string",
          "multiValued": false,
          "description": "A human readable name, primarily used for display purposes"
        },
        {
          "name": "type",
          "type": "string",
          "multiValued": false,
          "description": "A label indicating the attribute's function"
        },
        {
          "name": "primary",
          "type": "boolean",
          "multiValued": false,
          "description": "Whether this is the primary value"
        }
      ],
      "canonicalSubAttribute": "value"
    },
    {
      "name": "phoneNumbers",
      "type": "complex",
      "multiValued": true,
      "description": "Phone numbers for the User",
      "subAttributes": [
        {
          "name": "value",
          "type": "string",
          "multiValued": false,
          "description": "The attribute's significant value"
        },
        {
          "name": "display",
          "type": "string",
          "multiValued": false,
          "description": "A human readable name, primarily used for display purposes"
        },
        {
          "name": "type",
          "type": "string",
          "multiValued": false,
          "description": "A label indicating the attribute's function"
        },
        {
          "name": "primary",
          "type": "boolean",
          "multiValued": false,
          "description": "Whether this is the primary value"
        }
      ],
      "canonicalSubAttribute": "value"
    },
    {
      "name": "ims",
      "type": "complex",
      "multiValued": true,
      "description": "Instant messaging addresses for the User",
      "subAttributes": [
        {
          "name": "value",
          "type": "string",
          "multiValued": false,
          "description": "The attribute's significant value"
        },
        {
          "name": "display",
          "type": "string",
          "multiValued": false,
          "description": "A human readable name, primarily used for display purposes"
        },
        {
          "name": "type",
          "type": "string",
          "multiValued": false,
          "description": "A label indicating the attribute's function"
        },
        {
          "name": "primary",
          "type": "boolean",
          "multiValued": false,
          "description": "Whether this is the primary value"
        }
      ],
      "canonicalSubAttribute": "value"
    },
    {
      "name": "photos",
      "type": "complex",
      "multiValued": true,
      "description": "URLs of photos of the User",
      "subAttributes": [
        {
          "name": "value",
          "type": "string",
          "multiValued": false,
          "description": "The attribute's significant value"
        },
        {
          "name": "display",
          "type": "string",
          "multiValued": false,
          "description": "A human readable name, primarily used for display purposes"
        },
        {
          "name": "type",
          "type": "string",
          "multiValued": false,
          "description": "A label indicating the attribute's function"
        },
        {
          "name": "primary",
          "type": "boolean",
          "multiValued": false,
          "description": "Whether this is the primary value"
        }
      ],
      "canonicalSubAttribute": "value"
    },
    {
      "name": "addresses",
      "type": "complex",
      "multiValued": true,
      "description": "Physical mailing addresses for the User",
      "subAttributes": [
        {
          "name": "formatted",
          "type": "string",
          "multiValued": false,
          "description": "The full mailing address"
        },
        {
          "name": "streetAddress",
          "type": "string",
          "multiValued": false,
          "description": "The full street address component"
        },
        {
          "name": "locality",
          "type": "string",
          "multiValued": false,
          "description": "The city or locality component"
        },
        {
          "name": "region",
          "type": "string",
          "multiValued": false,
          "description": "The state or region component"
        },
        {
          "name": "postalCode",
          "type": "string",
          "multiValued": false,
          "description": "The zipcode or postal code component"
        },
        {
          "name": "country",
          "type": "string",
          "multiValued": false,
          "description": "The country name component"
        },
        {
          "name": "type",
          "type": "string",
          "multiValued": false,
          "description": "A label indicating the address's function"
        },
        {
          "name": "primary",
          "type": "boolean",
          "multiValued": false,
          "description": "Whether this is the primary address"
        }
      ],
      "canonicalSubAttribute": "formatted"
    },
    {
      "name": "groups",
      "type": "complex",
      "multiValued": true,
      "description": "Groups the User belongs to",
      "subAttributes": [
        {
          "name": "value",
          "type": "string",
          "multiValued": false,
          "description": "The attribute's significant value"
        },
        {
          "name": "display",
          "type": "string",
          "multiValued": false,
          "description": "A human readable name, primarily used for display purposes"
        },
        {
          "name": "type",
          "type": "string",
          "multiValued": false,
          "description": "A label indicating the attribute's function"
        },
        {
          "name": "primary",
          "type": "boolean",
          "multiValued": false,
          "description": "Whether this is the primary value"
        }
      ],
      "canonicalSubAttribute": "value"
    },
    {
      "name": "entitlements",
      "type": "complex",
      "multiValued": true,
      "description": "Entitlements of the User",
      "subAttributes": [
        {
          "name": "value",
          "type": "string",
          "multiValued": false,
          "description": "The attribute's significant value"
        },
        {
          "name": "display",
          "type": "string",
          "multiValued": false,
          "description": "A human readable name, primarily used for display purposes"
        },
        {
          "name": "type",
          "type": "string",
          "multiValued": false,
          "description": "A label indicating the attribute's function"
        },
        {
          "name": "primary",
          "type": "boolean",
          "multiValued": false,
          "description": "Whether this is the primary value"
        }
      ],
      "canonicalSubAttribute": "value"
    },
    {
      "name": "roles",
      "type": "complex",
      "multiValued": true,
      "description": "Roles of the User",
      "subAttributes": [
        {
          "name": "value",
          "type": "string",
          "multiValued": false,
          "description": "The attribute's significant value"
        },
        {
          "name": "display",
          "type": "string",
          "multiValued": false,
          "description": "A human readable name, primarily used for display purposes"
        },
        {
          "name": "type",
          "type": "string",
          "multiValued": false,
          "description": "A label indicating the attribute's function"
        },
        {
          "name": "primary",
          "type": "boolean",
          "multiValued": false,
          "description": "Whether this is the primary value"
        }
      ],
      "canonicalSubAttribute": "value"
    },
    {
      "name": "x509Certificates",
      "type": "complex",
      "multiValued": true,
      "description": "Certificates issued to the User",
      "subAttributes": [
        {
          "name": "value",
          "type": "binary",
          "multiValued": false,
          "description": "The attribute's significant value"
        },
        {
          "name": "display",
          "type": "string",
          "multiValued": false,
          "description": "A human readable name, primarily used for display purposes"
        },
        {
          "name": "type",
          "type": "string",
          "multiValued": false,
          "description": "A label indicating the attribute's function"
        },
        {
          "name": "primary",
          "type": "boolean",
          "multiValued": false,
          "description": "Whether this is the primary value"
        }
      ],
      "canonicalSubAttribute": "value"
    },
    {
      "name": "members",
      "type": "complex",
      "multiValued": true,
      "description": "Members of the Group",
      "subAttributes": [
        {
          "name": "value",
          "type": "string",
          "multiValued": false,
          "description": "The attribute's significant value"
        },
        {
          "name": "display",
          "type": "string",
          "multiValued": false,
          "description": "A human readable name, primarily used for display purposes"
        },
        {
          "name": "type",
          "type": "string",
          "multiValued": false,
          "description": "A label indicating the attribute's function"
        },
        {
          "name": "primary",
          "type": "boolean",
          "multiValued": false,
          "description": "Whether this is the primary value"
        }
      ],
      "canonicalSubAttribute": "value"
    },
    {
      "name": "meta",
      "type": "complex",
      "multiValued": false,
      "description": "Resource metadata",
      "subAttributes": [
        {
          "name": "created",
          "type": "dateTime",
          "multiValued": false,
          "description": "When the resource was added"
        },
        {
          "name": "lastModified",
          "type": "dateTime",
          "multiValued": false,
          "description": "When the resource was last modified"
        },
        {
          "name": "location",
          "type": "string",
          "multiValued": false,
          "description": "URI of the resource"
        },
        {
          "name": "version",
          "type": "string",
          "multiValued": false,
          "description": "Version of the resource"
        }
      ]
    }
  ]
}"#
}

/// Returns the enterprise user extension schema as a JSON string.
pub fn enterprise_extension_schema() -> &'static str {
    r#"{
  "id": "urn:scim:schemas:extension:enterprise:1.0",
  "name": "EnterpriseUser",
  "description": "Enterprise User extension",
  "attributes": [
    {
      "name": "employeeNumber",
      "type": "string",
      "multiValued": false,
      "description": "Numeric or alphanumeric identifier assigned to a person"
    },
    {
      "name": "costCenter",
      "type": "string",
      "multiValued": false,
      "description": "Identifies the name of a cost center"
    },
    {
      "name": "organization",
      "type": "string",
      "multiValued": false,
      "description": "Identifies the name of an organization"
    },
    {
      "name": "division",
      "type": "string",
      "multiValued": false,
      "description": "Identifies the name of a division"
    },
    {
      "name": "department",
      "type": "string",
      "multiValued": false,
      "description": "Identifies the name of a department"
    },
    {
      "name": "manager",
      "type": "complex",
      "multiValued": false,
      "description": "The User's manager",
      "subAttributes": [
        {
          "name": "managerId",
          "type": "string",
          "multiValued": false,
          "description": "The id of the User's manager"
        },
        {
          "name": "displayName",
          "type": "string",
          "multiValued": false,
          "description": "The displayName of the User's manager"
        }
      ]
    }
  ]
}"#
}
