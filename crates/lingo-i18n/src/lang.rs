//! Message resolution over a swappable catalog

use crate::catalog::Catalog;
use crate::count::Count;
use crate::error::{LangError, LangResult, TemplateError};
use crate::key::{parse_key, ParsedKey};
use crate::plural;
use crate::replacements::{apply_replacements, Replacements, COUNT_KEY};
use arc_swap::ArcSwap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Group used for keys without an explicit group prefix.
pub const DEFAULT_GROUP: &str = "messages";

/// Tunables for a [`Lang`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangOptions {
    /// Group used for keys without a known group prefix
    pub default_group: String,
    /// Log invalid pluralization rules at warn level
    pub warn_on_invalid_rules: bool,
}

impl Default for LangOptions {
    fn default() -> Self {
        Self {
            default_group: DEFAULT_GROUP.to_string(),
            warn_on_invalid_rules: true,
        }
    }
}

/// A template with a malformed explicit rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Key that resolves to the template
    pub key: String,
    /// The raw template
    pub template: String,
    /// What is wrong with it
    pub error: TemplateError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (template: {:?})", self.key, self.error, self.template)
    }
}

/// Resolves keys against a message catalog.
///
/// Reads take a snapshot of the current catalog, so a concurrent
/// [`set_messages`](Self::set_messages) is seen either entirely or not at
/// all. Share it between threads behind an `Arc`.
///
/// ```rust
/// use lingo_i18n::{replacements, Catalog, Lang};
///
/// let catalog = Catalog::new().with_group(
///     "messages",
///     [("apples", "{0}No apples|{1}One apple|[2,*]:count apples")],
/// );
/// let lang = Lang::new(catalog);
///
/// assert_eq!(lang.choice("apples", 0, None), "No apples");
/// assert_eq!(lang.choice("apples", 7, None), "7 apples");
/// assert_eq!(lang.get("missing.key", None, None), "missing.key");
/// ```
pub struct Lang {
    catalog: ArcSwap<Catalog>,
    options: LangOptions,
}

impl fmt::Debug for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lang")
            .field("groups", &self.catalog.load().len())
            .field("options", &self.options)
            .finish()
    }
}

impl Lang {
    /// Create an engine over `catalog` with default options
    pub fn new(catalog: Catalog) -> Self {
        Self::with_options(catalog, LangOptions::default())
    }

    /// Create an engine over `catalog` with the given options
    pub fn with_options(catalog: Catalog, options: LangOptions) -> Self {
        debug!(
            "Lang initialized with {} group(s), default group '{}'",
            catalog.len(),
            options.default_group
        );
        Self {
            catalog: ArcSwap::from_pointee(catalog),
            options,
        }
    }

    /// Start building an engine from explicit and fallback catalogs
    pub fn builder() -> LangBuilder {
        LangBuilder::default()
    }

    /// Replace the whole catalog in one atomic swap
    pub fn set_messages(&self, catalog: Catalog) {
        let groups = catalog.len();
        self.catalog.store(Arc::new(catalog));
        info!("Replaced message catalog ({} group(s))", groups);
    }

    /// Snapshot of the current catalog
    pub fn messages(&self) -> Arc<Catalog> {
        self.catalog.load_full()
    }

    /// Options this engine was built with
    pub fn options(&self) -> &LangOptions {
        &self.options
    }

    /// Resolve `key`.
    ///
    /// Unknown keys come back unchanged. The count is the explicit `count`,
    /// else a numeric `count` replacement, else zero. Placeholders are
    /// substituted only when `replacements` is given.
    pub fn get(&self, key: &str, replacements: Option<&Replacements>, count: Option<Count>) -> String {
        let catalog = self.catalog.load();
        let Some(template) = self.lookup(&catalog, key) else {
            return key.to_string();
        };

        let count = count
            .map(|count| count.normalize())
            .or_else(|| replacements.and_then(Replacements::count))
            .unwrap_or(0.0);

        let selected = plural::select_branch(key, template, count, self.options.warn_on_invalid_rules);

        match replacements {
            Some(replacements) => apply_replacements(&selected, replacements),
            None => selected.into_owned(),
        }
    }

    /// Resolve `key` for `count`, also exposing it as the `:count` placeholder.
    ///
    /// Equivalent to `get` with `count` inserted into a copy of the
    /// replacements (overwriting any existing `count`).
    pub fn choice(
        &self,
        key: &str,
        count: impl Into<Count>,
        replacements: Option<&Replacements>,
    ) -> String {
        let count = count.into().normalize();
        let mut replacements = replacements.cloned().unwrap_or_default();
        replacements.insert(COUNT_KEY, count);

        self.get(key, Some(&replacements), Some(Count::Numeric(count)))
    }

    /// Whether `key` resolves to a template
    pub fn has(&self, key: &str) -> bool {
        let catalog = self.catalog.load();
        self.lookup(&catalog, key).is_some()
    }

    /// Report every template whose explicit rules are malformed.
    ///
    /// Most such templates resolve to their raw text; see
    /// [`TemplateError::falls_back_to_raw`]. Results are sorted by key.
    pub fn validate(&self) -> Vec<Diagnostic> {
        let catalog = self.catalog.load();
        let mut diagnostics: Vec<Diagnostic> = catalog
            .entries()
            .flat_map(|(group, entry, template)| {
                plural::problems(template)
                    .into_iter()
                    .map(move |error| Diagnostic {
                        key: self.display_key(group, entry),
                        template: template.to_string(),
                        error,
                    })
            })
            .collect();

        diagnostics.sort_by(|a, b| a.key.cmp(&b.key));
        diagnostics
    }

    fn lookup<'c>(&self, catalog: &'c Catalog, key: &str) -> Option<&'c str> {
        let ParsedKey { group, entry } = parse_key(catalog, key, &self.options.default_group);
        catalog.lookup(group, entry)
    }

    /// The key a caller would use to reach `group` / `entry`.
    fn display_key(&self, group: &str, entry: &str) -> String {
        if group == self.options.default_group {
            entry.to_string()
        } else {
            format!("{group}.{entry}")
        }
    }
}

/// Builder for [`Lang`].
///
/// The explicit catalog wins; the fallback is used only when no explicit
/// catalog was given. Building without either fails.
#[derive(Debug, Default)]
pub struct LangBuilder {
    messages: Option<Catalog>,
    fallback: Option<Catalog>,
    options: LangOptions,
}

impl LangBuilder {
    /// Catalog to resolve against
    #[must_use]
    pub fn messages(mut self, catalog: impl Into<Option<Catalog>>) -> Self {
        self.messages = catalog.into();
        self
    }

    /// Catalog used when no explicit catalog is supplied
    #[must_use]
    pub fn fallback(mut self, catalog: impl Into<Option<Catalog>>) -> Self {
        self.fallback = catalog.into();
        self
    }

    /// Override the default group name
    #[must_use]
    pub fn default_group(mut self, group: impl Into<String>) -> Self {
        self.options.default_group = group.into();
        self
    }

    /// Toggle warnings for invalid pluralization rules
    #[must_use]
    pub fn warn_on_invalid_rules(mut self, enabled: bool) -> Self {
        self.options.warn_on_invalid_rules = enabled;
        self
    }

    /// Replace all options at once
    #[must_use]
    pub fn options(mut self, options: LangOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the engine
    pub fn build(self) -> LangResult<Lang> {
        let catalog = match (self.messages, self.fallback) {
            (Some(messages), _) => messages,
            (None, Some(fallback)) => {
                debug!("No explicit catalog given, using the fallback catalog");
                fallback
            }
            (None, None) => return Err(LangError::MissingCatalog),
        };

        Ok(Lang::with_options(catalog, self.options))
    }
}

/// Build an engine from an optional catalog.
///
/// Fails with [`LangError::MissingCatalog`] when `catalog` is `None`; there is
/// no ambient fallback. Use [`Lang::builder`] to register one.
pub fn init(catalog: impl Into<Option<Catalog>>) -> LangResult<Lang> {
    Lang::builder().messages(catalog).build()
}
