//! Generic SCIM object model.
//!
//! Values are schema-typed and either scalar, complex or plural. The model
//! knows nothing about directories; mappers translate it to and from LDAP.
//!
//! # Key Components
//!
//! * [`AttributeValue`] - Recursive value representation
//! * [`ScimAttribute`] - Descriptor paired with a conforming value
//! * [`ScimObject`] - Attributes of one resource, keyed by schema and name
//! * [`QueryAttributes`] - Attributes requested by a client
//! * [`AttributePath`] / [`SortParameters`] - Attribute references in queries

pub mod attribute;
pub mod object;
pub mod path;
pub mod query;
pub mod value;

pub use attribute::ScimAttribute;
pub use object::ScimObject;
pub use path::{AttributePath, SortParameters};
pub use query::QueryAttributes;
pub use value::{AttributeValue, ScalarValue};
