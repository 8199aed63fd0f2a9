//! LDAP search filters.
//!
//! Filters are the protocol types of `ldap3_proto`. [`LdapFilterExt`] adds
//! the constructors the mappers use, evaluation against an in-memory
//! [`Entry`] and the RFC 4515 string form. Assertion values are escaped on
//! output, never when a filter is constructed.

use super::entry::Entry;

use ldap3::ldap_escape;
pub use ldap3_proto::proto::{LdapFilter, LdapSubstringFilter};
use std::cmp::Ordering;
use std::fmt;

/// Construction, evaluation and rendering of [`LdapFilter`] values.
pub trait LdapFilterExt {
    fn equality(attribute: impl Into<String>, value: impl Into<String>) -> Self;

    /// `(attribute=*value*)`
    fn substring_contains(attribute: impl Into<String>, value: impl Into<String>) -> Self;

    /// `(attribute=value*)`
    fn substring_prefix(attribute: impl Into<String>, value: impl Into<String>) -> Self;

    fn presence(attribute: impl Into<String>) -> Self;

    fn greater_or_equal(attribute: impl Into<String>, value: impl Into<String>) -> Self;

    fn less_or_equal(attribute: impl Into<String>, value: impl Into<String>) -> Self;

    fn and(components: Vec<LdapFilter>) -> Self;

    fn or(components: Vec<LdapFilter>) -> Self;

    fn not(component: LdapFilter) -> Self;

    /// A filter that matches no entry: the empty OR.
    fn always_false() -> Self;

    fn is_always_false(&self) -> bool;

    /// Evaluate the filter against an entry held in memory.
    ///
    /// Attribute names and values are compared without regard to case.
    /// Ordering assertions compare numerically when both sides are
    /// integers and lexicographically otherwise.
    fn matches(&self, entry: &Entry) -> bool;

    /// RFC 4515 string form, for use with `{}`.
    fn display(&self) -> FilterDisplay<'_>;
}

impl LdapFilterExt for LdapFilter {
    fn equality(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        LdapFilter::Equality(attribute.into(), value.into())
    }

    fn substring_contains(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        LdapFilter::Substring(
            attribute.into(),
            LdapSubstringFilter {
                any: vec![value.into()],
                ..LdapSubstringFilter::default()
            },
        )
    }

    fn substring_prefix(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        LdapFilter::Substring(
            attribute.into(),
            LdapSubstringFilter {
                initial: Some(value.into()),
                ..LdapSubstringFilter::default()
            },
        )
    }

    fn presence(attribute: impl Into<String>) -> Self {
        LdapFilter::Present(attribute.into())
    }

    fn greater_or_equal(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        LdapFilter::GreaterOrEqual(attribute.into(), value.into())
    }

    fn less_or_equal(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        LdapFilter::LessOrEqual(attribute.into(), value.into())
    }

    fn and(components: Vec<LdapFilter>) -> Self {
        LdapFilter::And(components)
    }

    fn or(components: Vec<LdapFilter>) -> Self {
        LdapFilter::Or(components)
    }

    fn not(component: LdapFilter) -> Self {
        LdapFilter::Not(Box::new(component))
    }

    fn always_false() -> Self {
        LdapFilter::Or(Vec::new())
    }

    fn is_always_false(&self) -> bool {
        matches!(self, LdapFilter::Or(components) if components.is_empty())
    }

    fn matches(&self, entry: &Entry) -> bool {
        match self {
            LdapFilter::And(components) => components.iter().all(|c| c.matches(entry)),
            LdapFilter::Or(components) => components.iter().any(|c| c.matches(entry)),
            LdapFilter::Not(component) => !component.matches(entry),
            LdapFilter::Present(attribute) => entry.has_attribute(attribute),
            LdapFilter::Equality(attribute, value) | LdapFilter::Approx(attribute, value) => {
                has_equal_value(entry, attribute, value)
            }
            LdapFilter::Substring(attribute, substring) => entry
                .attribute_values(attribute)
                .iter()
                .any(|v| substring_matches(substring, v)),
            LdapFilter::GreaterOrEqual(attribute, value) => entry
                .attribute_values(attribute)
                .iter()
                .any(|v| compare_values(v, value) != Ordering::Less),
            LdapFilter::LessOrEqual(attribute, value) => entry
                .attribute_values(attribute)
                .iter()
                .any(|v| compare_values(v, value) != Ordering::Greater),
            LdapFilter::Extensible(assertion) => match &assertion.type_ {
                Some(attribute) => has_equal_value(entry, attribute, &assertion.match_value),
                None => false,
            },
        }
    }

    fn display(&self) -> FilterDisplay<'_> {
        FilterDisplay(self)
    }
}

fn has_equal_value(entry: &Entry, attribute: &str, value: &str) -> bool {
    entry
        .attribute_values(attribute)
        .iter()
        .any(|v| v.eq_ignore_ascii_case(value))
}

fn substring_matches(substring: &LdapSubstringFilter, value: &str) -> bool {
    let value = value.to_lowercase();
    let mut rest = value.as_str();

    if let Some(initial) = &substring.initial {
        let initial = initial.to_lowercase();
        match rest.strip_prefix(initial.as_str()) {
            Some(remaining) => rest = remaining,
            None => return false,
        }
    }
    for any in &substring.any {
        let any = any.to_lowercase();
        match rest.find(any.as_str()) {
            Some(index) => rest = &rest[index + any.len()..],
            None => return false,
        }
    }
    match &substring.final_ {
        Some(final_) => rest.ends_with(final_.to_lowercase().as_str()),
        None => true,
    }
}

fn compare_values(left: &str, right: &str) -> Ordering {
    match (left.parse::<i64>(), right.parse::<i64>()) {
        (Ok(l), Ok(r)) => l.cmp(&r),
        _ => left.to_lowercase().cmp(&right.to_lowercase()),
    }
}

/// Helper returned by [`LdapFilterExt::display`].
pub struct FilterDisplay<'a>(&'a LdapFilter);

impl fmt::Display for FilterDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            LdapFilter::And(components) => {
                f.write_str("(&")?;
                for component in components {
                    write!(f, "{}", component.display())?;
                }
                f.write_str(")")
            }
            LdapFilter::Or(components) => {
                f.write_str("(|")?;
                for component in components {
                    write!(f, "{}", component.display())?;
                }
                f.write_str(")")
            }
            LdapFilter::Not(component) => write!(f, "(!{})", component.display()),
            LdapFilter::Equality(attribute, value) => {
                write!(f, "({}={})", attribute, ldap_escape(value.as_str()))
            }
            LdapFilter::Substring(attribute, substring) => {
                write!(f, "({}=", attribute)?;
                if let Some(initial) = &substring.initial {
                    write!(f, "{}", ldap_escape(initial.as_str()))?;
                }
                f.write_str("*")?;
                for any in &substring.any {
                    write!(f, "{}*", ldap_escape(any.as_str()))?;
                }
                if let Some(final_) = &substring.final_ {
                    write!(f, "{}", ldap_escape(final_.as_str()))?;
                }
                f.write_str(")")
            }
            LdapFilter::GreaterOrEqual(attribute, value) => {
                write!(f, "({}>={})", attribute, ldap_escape(value.as_str()))
            }
            LdapFilter::LessOrEqual(attribute, value) => {
                write!(f, "({}<={})", attribute, ldap_escape(value.as_str()))
            }
            LdapFilter::Approx(attribute, value) => {
                write!(f, "({}~={})", attribute, ldap_escape(value.as_str()))
            }
            LdapFilter::Present(attribute) => write!(f, "({}=*)", attribute),
            LdapFilter::Extensible(assertion) => {
                f.write_str("(")?;
                if let Some(attribute) = &assertion.type_ {
                    f.write_str(attribute)?;
                }
                if assertion.dn_attributes {
                    f.write_str(":dn")?;
                }
                if let Some(rule) = &assertion.matching_rule {
                    write!(f, ":{}", rule)?;
                }
                write!(f, ":={})", ldap_escape(assertion.match_value.as_str()))
            }
        }
    }
}
