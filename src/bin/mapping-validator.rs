//! # SCIM to LDAP Mapping Validator
//!
//! A command-line utility that checks a mapping configuration file against
//! the SCIM schemas before it is deployed.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin mapping-validator mappings.json
//! cargo run --bin mapping-validator mappings.json extra-schema.json
//! cargo run --bin mapping-validator --defaults
//! ```
//!
//! Additional schema files are registered next to the embedded core and
//! enterprise schemas before the mappings are resolved. `--defaults`
//! validates the built-in User and Group mappings.
//!
//! ## Output Example
//!
//! ```text
//! Validating mapping file: mappings.json
//! ✓ Mapping is valid!
//!
//! Resource: User (urn:scim:schemas:core:1.0)
//!   Structural object class: inetOrgPerson
//!   RDN attribute: uid
//!   Attributes:
//!     - userName (simple) -> uid
//!     - name (complex) -> cn, sn, givenName
//!     - emails (plural) -> mail
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: The mapping is valid
//! - `1`: The mapping or a schema could not be loaded or resolved

use scim_ldap::mapper::{MappingConfig, ResourceMapper, defaults};
use scim_ldap::schema::SchemaRegistry;
use std::env;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <mapping-file> [schema-file...]", args[0]);
        eprintln!("       {} --defaults", args[0]);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} mappings.json", args[0]);
        eprintln!("  {} mappings.json schemas/extension.json", args[0]);
        process::exit(1);
    }

    let mut registry = match SchemaRegistry::new() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("❌ Failed to load embedded schemas: {}", e);
            process::exit(1);
        }
    };

    for schema_file in &args[2..] {
        if let Err(e) = registry.add_schema_file(schema_file) {
            eprintln!("❌ Failed to load schema {}: {}", schema_file, e);
            process::exit(1);
        }
        println!("Loaded schema file: {}", schema_file);
    }

    let result = if args[1] == "--defaults" {
        println!("Validating built-in mappings");
        defaults::default_resource_mappers(&registry)
    } else {
        let path = Path::new(&args[1]);
        println!("Validating mapping file: {}", path.display());
        MappingConfig::from_file(path).and_then(|config| config.build(&registry))
    };

    match result {
        Ok(mappers) => {
            println!("✓ Mapping is valid!");
            for mapper in &mappers {
                print_resource_summary(mapper);
            }
        }
        Err(e) => {
            eprintln!("❌ Mapping validation failed: {}", e);
            process::exit(1);
        }
    }
}

fn print_resource_summary(mapper: &ResourceMapper) {
    println!();
    println!("Resource: {} ({})", mapper.resource_name(), mapper.schema());
    if let Some(object_class) = mapper.structural_object_class() {
        println!("  Structural object class: {}", object_class);
    }
    if !mapper.object_classes().is_empty() {
        println!("  Object classes: {}", mapper.object_classes().join(", "));
    }
    match mapper.rdn_attribute() {
        Some(rdn) => println!("  RDN attribute: {}", rdn),
        None => println!("  RDN attribute: none (entries cannot be created)"),
    }

    println!("  Attributes:");
    for attribute_mapper in mapper.attribute_mappers() {
        println!(
            "    - {} ({}) -> {}",
            attribute_mapper.descriptor().name,
            attribute_mapper.kind(),
            attribute_mapper.ldap_attribute_types().join(", ")
        );
    }
}
