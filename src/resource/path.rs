//! Attribute paths and sort parameters.

use crate::schema::SCHEMA_URI_CORE;

use std::fmt;

/// A reference to an attribute, optionally narrowed to one sub-attribute.
///
/// The textual form is `[schema:]attribute[.subAttribute]`. The schema is
/// separated at the last `:` and defaults to the core schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributePath {
    pub schema: String,
    pub attribute_name: String,
    pub sub_attribute_name: Option<String>,
}

impl AttributePath {
    pub fn new(
        schema: impl Into<String>,
        attribute_name: impl Into<String>,
        sub_attribute_name: Option<String>,
    ) -> Self {
        Self {
            schema: schema.into(),
            attribute_name: attribute_name.into(),
            sub_attribute_name,
        }
    }

    /// Parse a qualified attribute path using the core schema as default.
    pub fn parse(text: &str) -> Self {
        Self::parse_with_default_schema(text, SCHEMA_URI_CORE)
    }

    /// Parse a qualified attribute path.
    pub fn parse_with_default_schema(text: &str, default_schema: &str) -> Self {
        let (schema, path) = split_schema(text, default_schema);
        let mut segments = path.splitn(2, '.');
        let attribute_name = segments.next().unwrap_or_default().to_string();
        let sub_attribute_name = segments.next().map(str::to_string);
        Self {
            schema: schema.to_string(),
            attribute_name,
            sub_attribute_name,
        }
    }

    /// Whether this path names the given attribute, ignoring the sub-attribute.
    pub fn refers_to(&self, schema: &str, attribute_name: &str) -> bool {
        self.schema == schema && self.attribute_name.eq_ignore_ascii_case(attribute_name)
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.schema != SCHEMA_URI_CORE {
            write!(f, "{}:", self.schema)?;
        }
        f.write_str(&self.attribute_name)?;
        if let Some(sub) = &self.sub_attribute_name {
            write!(f, ".{}", sub)?;
        }
        Ok(())
    }
}

/// Split `schema:path` at the last colon.
pub(crate) fn split_schema<'a>(text: &'a str, default_schema: &'a str) -> (&'a str, &'a str) {
    match text.rfind(':') {
        Some(index) => (&text[..index], &text[index + 1..]),
        None => (default_schema, text),
    }
}

/// Requested sort order of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortParameters {
    pub sort_by: AttributePath,
    pub ascending: bool,
}

impl SortParameters {
    pub fn new(sort_by: AttributePath, ascending: bool) -> Self {
        Self { sort_by, ascending }
    }

    /// Build sort parameters from query parameters.
    ///
    /// Any order other than `descending` (ignoring case) sorts ascending.
    pub fn from_query(sort_by: &str, sort_order: Option<&str>) -> Self {
        let ascending = !sort_order.is_some_and(|order| order.eq_ignore_ascii_case("descending"));
        Self::new(AttributePath::parse(sort_by), ascending)
    }
}
