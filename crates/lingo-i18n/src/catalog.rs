//! Grouped message catalogs

use crate::error::{LangError, LangResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Entry key -> template for a single group
pub type Messages = HashMap<String, String>;

/// Group name -> messages.
///
/// A catalog is immutable once handed to [`Lang`](crate::Lang); updates go
/// through [`Lang::set_messages`](crate::Lang::set_messages), which swaps
/// the whole catalog at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    groups: HashMap<String, Messages>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group, builder style
    #[must_use]
    pub fn with_group<I, K, V>(mut self, name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let messages = entries
            .into_iter()
            .map(|(key, template)| (key.into(), template.into()))
            .collect();
        self.groups.insert(name.into(), messages);
        self
    }

    /// Insert or replace a whole group
    pub fn insert_group(&mut self, name: impl Into<String>, messages: Messages) {
        self.groups.insert(name.into(), messages);
    }

    /// Insert a single template, creating the group if needed
    pub fn insert(
        &mut self,
        group: impl Into<String>,
        entry: impl Into<String>,
        template: impl Into<String>,
    ) {
        self.groups
            .entry(group.into())
            .or_default()
            .insert(entry.into(), template.into());
    }

    /// Whether `name` is a group of this catalog
    pub fn has_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Iterate over `(group, entry, template)` triples
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.groups.iter().flat_map(|(group, messages)| {
            messages
                .iter()
                .map(move |(entry, template)| (group.as_str(), entry.as_str(), template.as_str()))
        })
    }

    /// Template stored under `group` / `entry`
    pub fn lookup(&self, group: &str, entry: &str) -> Option<&str> {
        self.groups.get(group)?.get(entry).map(String::as_str)
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the catalog has no groups
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Build a catalog from an untyped document.
    ///
    /// The top level must be an object of objects. Groups that are not
    /// objects and entries that are not strings are skipped, so they behave
    /// like missing keys during lookup.
    pub fn from_value(value: Value) -> LangResult<Self> {
        let Value::Object(document) = value else {
            return Err(LangError::InvalidCatalog(
                "top level must map group names to messages".to_string(),
            ));
        };

        let mut catalog = Self::new();
        for (group, messages) in document {
            let Value::Object(entries) = messages else {
                debug!("Skipping group '{}': not a map of messages", group);
                continue;
            };

            let mut templates = Messages::with_capacity(entries.len());
            for (entry, template) in entries {
                match template {
                    Value::String(template) => {
                        templates.insert(entry, template);
                    }
                    other => debug!(
                        "Skipping '{}.{}': expected a string template, found {}",
                        group, entry, other
                    ),
                }
            }
            catalog.insert_group(group, templates);
        }

        Ok(catalog)
    }
}
