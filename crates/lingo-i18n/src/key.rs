//! Lookup key parsing

use crate::catalog::Catalog;

/// A lookup key split into the group and the entry inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKey<'a> {
    /// Group the entry is looked up in
    pub group: &'a str,
    /// Entry key inside the group
    pub entry: &'a str,
}

/// Split `key` into `(group, entry)`.
///
/// The first dot segment names a group only when the catalog has a group
/// with exactly that name. Otherwise the whole key, dots included, is an
/// entry of `default_group`.
pub fn parse_key<'a>(catalog: &Catalog, key: &'a str, default_group: &'a str) -> ParsedKey<'a> {
    match key.split_once('.') {
        Some((group, entry)) if catalog.has_group(group) => ParsedKey { group, entry },
        _ => ParsedKey {
            group: default_group,
            entry: key,
        },
    }
}
