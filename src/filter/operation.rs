//! SCIM filter operations.

use crate::error::MappingError;

use std::fmt;
use std::str::FromStr;

/// A SCIM filter operation.
///
/// Parsed without regard to case from either the long names used by SCIM
/// 1.0 (`equals`, `startswith`, ...) or the short codes (`eq`, `sw`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOperation {
    And,
    Or,
    Equals,
    EqualsIgnoreCase,
    Contains,
    StartsWith,
    Present,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
}

impl FilterOperation {
    /// Whether the operation compares against a value.
    pub fn requires_value(self) -> bool {
        !matches!(
            self,
            FilterOperation::And | FilterOperation::Or | FilterOperation::Present
        )
    }

    pub fn is_compound(self) -> bool {
        matches!(self, FilterOperation::And | FilterOperation::Or)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterOperation::And => "and",
            FilterOperation::Or => "or",
            FilterOperation::Equals => "equals",
            FilterOperation::EqualsIgnoreCase => "equalsIgnoreCase",
            FilterOperation::Contains => "contains",
            FilterOperation::StartsWith => "startswith",
            FilterOperation::Present => "present",
            FilterOperation::GreaterThan => "greaterThan",
            FilterOperation::GreaterOrEqual => "greaterOrEqual",
            FilterOperation::LessThan => "lessThan",
            FilterOperation::LessOrEqual => "lessOrEqual",
        }
    }
}

impl FromStr for FilterOperation {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let operation = match s.to_ascii_lowercase().as_str() {
            "and" => FilterOperation::And,
            "or" => FilterOperation::Or,
            "equals" | "eq" => FilterOperation::Equals,
            "equalsignorecase" => FilterOperation::EqualsIgnoreCase,
            "contains" | "co" => FilterOperation::Contains,
            "startswith" | "sw" => FilterOperation::StartsWith,
            "present" | "pr" => FilterOperation::Present,
            "greaterthan" | "gt" => FilterOperation::GreaterThan,
            "greaterorequal" | "ge" => FilterOperation::GreaterOrEqual,
            "lessthan" | "lt" => FilterOperation::LessThan,
            "lessorequal" | "le" => FilterOperation::LessOrEqual,
            _ => return Err(MappingError::unsupported_operation(s)),
        };
        Ok(operation)
    }
}

impl fmt::Display for FilterOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
