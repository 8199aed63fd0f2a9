//! Server-side sort keys (RFC 2891).

use ldap3_proto::control::ServerSortRequet;

/// A sort key as carried by the server-side sort request control.
pub type SortKey = ServerSortRequet;

/// Sort on `attribute` with the attribute's default ordering rule.
pub fn sort_key(attribute: impl Into<String>, reverse_order: bool) -> SortKey {
    ServerSortRequet {
        attribute_name: attribute.into(),
        ordering_rule: None,
        reverse_order,
    }
}
