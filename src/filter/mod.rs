//! SCIM query filters.
//!
//! Filters arrive already parsed from the protocol front end. This module
//! only models them; translation to LDAP is done by the mappers.
//!
//! ```rust
//! use scim_ldap::filter::{FilterOperation, ScimFilter};
//!
//! let filter = ScimFilter::contains("emails.value", "example.com");
//! assert_eq!(filter.attribute_path(), ["emails", "value"]);
//! assert_eq!(filter.filter_operation().unwrap(), FilterOperation::Contains);
//! ```

pub mod operation;
pub mod scim_filter;

pub use operation::FilterOperation;
pub use scim_filter::ScimFilter;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MappingError;
    use crate::schema::{SCHEMA_URI_CORE, SCHEMA_URI_ENTERPRISE_EXTENSION};

    #[test]
    fn test_filter_by_defaults_to_core_schema() {
        let filter = ScimFilter::equality("name.familyName", "Smith");
        assert_eq!(filter.attribute_schema(), SCHEMA_URI_CORE);
        assert_eq!(filter.attribute_name(), Some("name"));
        assert_eq!(filter.sub_attribute_name(), Some("familyName"));
        assert_eq!(filter.value(), Some("Smith"));
    }

    #[test]
    fn test_filter_by_splits_schema_at_last_colon() {
        let filter = ScimFilter::presence("urn:scim:schemas:extension:enterprise:1.0:manager.managerId");
        assert_eq!(filter.attribute_schema(), SCHEMA_URI_ENTERPRISE_EXTENSION);
        assert_eq!(filter.attribute_path(), ["manager", "managerId"]);
        assert!(filter.value().is_none());
    }

    #[test]
    fn test_operations_parse_ignoring_case() {
        assert_eq!("EQUALS".parse::<FilterOperation>().unwrap(), FilterOperation::Equals);
        assert_eq!("eq".parse::<FilterOperation>().unwrap(), FilterOperation::Equals);
        assert_eq!("StartsWith".parse::<FilterOperation>().unwrap(), FilterOperation::StartsWith);
        assert_eq!("sw".parse::<FilterOperation>().unwrap(), FilterOperation::StartsWith);
        assert_eq!(
            "equalsIgnoreCase".parse::<FilterOperation>().unwrap(),
            FilterOperation::EqualsIgnoreCase
        );
        assert_eq!("PR".parse::<FilterOperation>().unwrap(), FilterOperation::Present);
        assert_eq!("ge".parse::<FilterOperation>().unwrap(), FilterOperation::GreaterOrEqual);
    }

    #[test]
    fn test_unknown_operation_rejected() {
        let filter = ScimFilter::from_filter_by("userName", "regex", Some(".*".to_string()));
        match filter.filter_operation() {
            Err(MappingError::UnsupportedFilterOperation { operation }) => {
                assert_eq!(operation, "regex")
            }
            other => panic!("Expected UnsupportedFilterOperation, got {:?}", other),
        }
    }

    #[test]
    fn test_compound_filters() {
        let filter = ScimFilter::and(vec![
            ScimFilter::starts_with("userName", "b"),
            ScimFilter::presence("title"),
        ]);
        assert_eq!(filter.filter_operation().unwrap(), FilterOperation::And);
        assert_eq!(filter.components().len(), 2);
        assert!(filter.attribute_path().is_empty());
        assert_eq!(
            filter.to_string(),
            "(userName startswith \"b\" and title present)"
        );
    }

    #[test]
    fn test_value_requirements() {
        assert!(FilterOperation::Contains.requires_value());
        assert!(!FilterOperation::Present.requires_value());
        assert!(FilterOperation::Or.is_compound());
    }
}
