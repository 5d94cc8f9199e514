//! # Lingo I18n
//!
//! Message resolution for grouped catalogs: dotted key lookup, interval-based
//! pluralization, and `:name` placeholder replacement.
//!
//! A template is either plain text or a list of `|`-separated branches, each
//! optionally guarded by an interval such as `{0}`, `[2,4]` or `[5,*]`:
//!
//! ```rust
//! use lingo_i18n::{replacements, Catalog, Lang};
//!
//! let catalog = Catalog::new()
//!     .with_group("messages", [
//!         ("greeting", "Hi :name"),
//!         ("inbox", "{0}No messages|{1}One message|[2,*]:count messages"),
//!     ])
//!     .with_group("errors", [("missing", "Not found")]);
//!
//! let lang = Lang::new(catalog);
//!
//! assert_eq!(lang.get("greeting", Some(&replacements!["name" => "Ada"]), None), "Hi Ada");
//! assert_eq!(lang.choice("inbox", 3, None), "3 messages");
//! assert_eq!(lang.get("errors.missing", None, None), "Not found");
//! assert!(!lang.has("errors.unknown"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod count;
pub mod error;
pub mod interval;
pub mod key;
pub mod lang;
pub mod loader;
pub mod plural;
pub mod replacements;

pub use catalog::{Catalog, Messages};
pub use count::Count;
pub use error::{IntervalError, LangError, LangResult, TemplateError};
pub use interval::{test_interval, Interval};
pub use key::{parse_key, ParsedKey};
pub use lang::{init, Diagnostic, Lang, LangBuilder, LangOptions, DEFAULT_GROUP};
pub use loader::{parse_catalog, CatalogFormat, CatalogLoader};
pub use plural::{scan_branches, select_branch, Branch};
pub use replacements::{apply_replacements, ReplacementValue, Replacements};
