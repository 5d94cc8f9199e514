//! Integration tests for lingo-i18n crate.
//!
//! These run the full resolution pipeline against the shared catalog fixture.

use lingo_common::test_utils::{catalog_fixtures, create_temp_dir, init_test_logging, write_fixture};
use lingo_i18n::{
    parse_catalog, replacements, test_interval, Catalog, CatalogFormat, CatalogLoader, Count, Lang,
    LangError, Replacements,
};
use std::io;
use std::sync::{Arc, Mutex};
use std::thread;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

struct CapturedWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedWriter(Arc::clone(&self.0))
    }
}

/// Run `f` under a WARN-level subscriber and return what it logged.
fn capture_warnings(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(Level::WARN)
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = logs.0.lock().expect("log buffer poisoned").clone();
    String::from_utf8(bytes).expect("log output is UTF-8")
}

fn lang() -> Lang {
    init_test_logging();
    let catalog = parse_catalog(catalog_fixtures::messages_json(), CatalogFormat::Json)
        .expect("fixture catalog parses");
    Lang::new(catalog)
}

#[test]
fn test_missing_key_is_returned_verbatim() {
    let lang = lang();
    assert_eq!(lang.get("non-existent-key", None, None), "non-existent-key");
    assert!(!lang.has("non-existent-key"));
}

#[test]
fn test_empty_catalog() {
    let lang = Lang::new(Catalog::new());
    assert_eq!(lang.get("hi", None, None), "hi");
    assert!(!lang.has("hi"));
}

#[test]
fn test_apply_replacements() {
    let lang = lang();

    let partial = replacements!["partial" => "world!"];
    assert_eq!(lang.get("test-with-replacements", Some(&partial), None), "Hello world!");
    assert_eq!(lang.get("test-with-replacements-2", Some(&partial), None), "Hello ( world! )");
}

#[test]
fn test_pluralization_with_explicit_count() {
    let lang = lang();
    let key = "test-with-pluralization";
    let empty = Replacements::new();

    assert_eq!(lang.get(key, Some(&empty), Some(Count::from(1))), "one apple");
    assert_eq!(lang.get(key, Some(&empty), Some(Count::from(10))), "more than six apples");
}

#[test]
fn test_pluralization_and_replacement() {
    let lang = lang();
    let key = "test-with-pluralization-and-replacement";

    let value = replacements!["value" => "X"];
    assert_eq!(lang.get(key, Some(&value), Some(Count::from(1))), "One apple - X");
    assert_eq!(lang.get(key, Some(&value), Some(Count::from(10))), "More than one, - X");
}

#[test]
fn test_count_from_replacements() {
    let lang = lang();
    let key = "test-with-count";

    for (count, expected) in [(1, "1st"), (2, "2nd"), (3, "3rd"), (4, "4th"), (11, "11th")] {
        let replacements = replacements!["count" => count];
        assert_eq!(lang.get(key, Some(&replacements), None), expected);
    }
}

#[test]
fn test_choice() {
    let lang = lang();
    let key = "test-with-pluralization";

    assert_eq!(lang.choice(key, 0, None), "No apple");
    assert_eq!(lang.choice(key, 1, None), "one apple");
    assert_eq!(lang.choice(key, 2, None), "two to four apples");
    assert_eq!(lang.choice(key, 3, None), "two to four apples");
    assert_eq!(lang.choice(key, 5, None), "five apples");
    assert_eq!(lang.choice(key, 100, None), "more than six apples");
}

#[test]
fn test_choice_with_replacements() {
    let lang = lang();
    let key = "test-with-pluralization-and-replacement";

    let hooray = replacements!["value" => "Hooray"];
    assert_eq!(lang.choice(key, 1, Some(&hooray)), "One apple - Hooray");
    let yeah = replacements!["value" => "yeaaaah"];
    assert_eq!(lang.choice(key, 10, Some(&yeah)), "More than one, - yeaaaah");
}

#[test]
fn test_choice_matches_get_with_folded_count() {
    let lang = lang();
    let base = replacements!["value" => "V", "count" => 42];

    for key in ["test-with-count", "test-with-pluralization-and-replacement", "apples", "hi"] {
        for n in [0, 1, 2, 3, 7] {
            let mut folded = base.clone();
            folded.insert("count", n);
            assert_eq!(
                lang.choice(key, n, Some(&base)),
                lang.get(key, Some(&folded), Some(Count::from(n))),
                "key {key}, count {n}"
            );
        }
    }
}

#[test]
fn test_two_way_pluralization() {
    let lang = lang();
    assert_eq!(lang.choice("apples", 1, None), "apple");
    assert_eq!(lang.choice("apples", 2, None), "apples");
    assert_eq!(lang.choice("apples", 0, None), "apple");
}

#[test]
fn test_group_resolution() {
    let lang = lang();
    assert_eq!(lang.get("errors.missing", None, None), "Not found");
    assert_eq!(lang.get("hi", None, None), "Hello!");
    assert_eq!(lang.get("unknown.hi", None, None), "unknown.hi");
    assert!(lang.has("errors.missing"));
    assert!(!lang.has("unknown.hi"));
}

#[test]
fn test_malformed_rule_returns_raw_template() {
    let lang = lang();
    for count in [0, 1, 2, 10] {
        assert_eq!(lang.choice("errors.broken", count, None), "apple|{2}apples");
    }

    let diagnostics = lang.validate();
    let keys: Vec<&str> = diagnostics.iter().map(|d| d.key.as_str()).collect();
    assert_eq!(keys, vec!["errors.broken"]);
}

#[test]
fn test_malformed_rule_logs_a_warning() {
    let lang = lang();

    let logs = capture_warnings(|| {
        assert_eq!(lang.choice("errors.broken", 2, None), "apple|{2}apples");
    });
    assert!(logs.contains("WARN"), "no warning in: {logs}");
    assert!(logs.contains("errors.broken"), "key missing from: {logs}");
    assert!(logs.contains("apple|{2}apples"), "template missing from: {logs}");

    let logs = capture_warnings(|| {
        assert_eq!(lang.get("hi", None, None), "Hello!");
    });
    assert!(logs.is_empty(), "unexpected output: {logs}");
}

#[test]
fn test_rule_warnings_can_be_disabled() {
    let catalog = parse_catalog(catalog_fixtures::messages_json(), CatalogFormat::Json).unwrap();
    let lang = Lang::builder()
        .messages(catalog)
        .warn_on_invalid_rules(false)
        .build()
        .unwrap();

    let logs = capture_warnings(|| {
        assert_eq!(lang.choice("errors.broken", 2, None), "apple|{2}apples");
    });
    assert!(logs.is_empty(), "unexpected output: {logs}");
}

#[test]
fn test_empty_template_resolves_without_warning() {
    let lang = Lang::new(Catalog::new().with_group("messages", [("empty", ""), ("pipes", "||")]));

    let logs = capture_warnings(|| {
        assert_eq!(lang.get("empty", None, None), "");
        assert_eq!(lang.choice("pipes", 2, None), "||");
    });
    assert!(logs.is_empty(), "unexpected output: {logs}");
    assert!(lang.validate().is_empty());
}

#[test]
fn test_rule_that_never_matches_logs_a_warning() {
    let lang = Lang::new(Catalog::new().with_group("messages", [("odd", "{1]odd|[2,*]many")]));

    let logs = capture_warnings(|| {
        assert_eq!(lang.choice("odd", 1, None), "odd");
    });
    assert!(logs.contains("WARN"), "no warning in: {logs}");
    assert!(logs.contains("{1]"), "rule missing from: {logs}");

    assert_eq!(lang.validate().len(), 1);
}

#[test]
fn test_interval_examples() {
    assert!(test_interval(2.0, "[1,5]"));
    assert!(!test_interval(5.0, "(1,5)"));
    assert!(test_interval(0.0, "{0,3,5}"));
    assert!(test_interval(6.0, "[6,*]"));
    assert!(!test_interval(0.0, "[6,*]"));
}

#[test]
fn test_init_without_catalog_fails() {
    let err = lingo_i18n::init(None).unwrap_err();
    assert!(matches!(err, LangError::MissingCatalog));
    assert!(err.to_string().contains("No message catalog"));
}

#[test]
fn test_concurrent_readers_see_whole_catalogs() {
    let old = Catalog::new()
        .with_group("messages", [("state", "old")])
        .with_group("errors", [("state", "old")]);
    let new = Catalog::new()
        .with_group("messages", [("state", "new")])
        .with_group("errors", [("state", "new")]);

    let lang = Arc::new(Lang::new(old));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let lang = Arc::clone(&lang);
            thread::spawn(move || {
                for _ in 0..500 {
                    let snapshot = lang.messages();
                    assert_eq!(
                        snapshot.lookup("messages", "state"),
                        snapshot.lookup("errors", "state")
                    );
                }
            })
        })
        .collect();

    for _ in 0..50 {
        lang.set_messages(new.clone());
    }

    for reader in readers {
        reader.join().expect("reader thread panicked");
    }
    assert_eq!(lang.get("errors.state", None, None), "new");
}

#[test]
fn test_load_catalog_files_in_every_format() {
    init_test_logging();
    let dir = create_temp_dir();
    let yaml = write_fixture(&dir, "en.yaml", catalog_fixtures::messages_yaml());
    let toml = write_fixture(&dir, "en.toml", catalog_fixtures::messages_toml());

    let from_yaml = CatalogLoader::new(&yaml).load().expect("yaml fixture loads");
    let from_toml = CatalogLoader::new(&toml).load().expect("toml fixture loads");
    assert_eq!(from_yaml, from_toml);

    let lang = Lang::new(from_yaml);
    assert_eq!(lang.get("hi", None, None), "Hello!");
    assert_eq!(lang.choice("items", 0, None), "No items");
    assert_eq!(lang.choice("items", 1, None), "One item");
    assert_eq!(lang.choice("items", 9, None), "9 items");
    assert_eq!(lang.get("errors.missing", None, None), "Not found");
}

#[test]
fn test_builder_falls_back_to_loaded_catalog() {
    let dir = create_temp_dir();
    let path = write_fixture(&dir, "fallback.json", catalog_fixtures::messages_json());
    let fallback = CatalogLoader::new(path).load().expect("json fixture loads");

    let lang = Lang::builder().messages(None).fallback(fallback).build().expect("fallback used");
    assert_eq!(lang.get("hi", None, None), "Hello!");

    let explicit = Catalog::new().with_group("messages", [("hi", "Hey")]);
    let lang = Lang::builder()
        .messages(explicit)
        .fallback(Catalog::new().with_group("messages", [("hi", "ignored")]))
        .build()
        .expect("explicit catalog used");
    assert_eq!(lang.get("hi", None, None), "Hey");
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn missing_keys_echo_back(key in "[a-z][a-z0-9_.-]{0,24}") {
            let lang = Lang::new(Catalog::new().with_group("messages", [("present", "here")]));
            prop_assume!(key != "present" && key != "messages.present");
            prop_assert_eq!(lang.get(&key, None, None), key.clone());
            prop_assert!(!lang.has(&key));
        }

        #[test]
        fn empty_replacements_are_idempotent(template in "[A-Za-z][A-Za-z :!?.]{0,30}[A-Za-z!?.]") {
            let lang = Lang::new(Catalog::new().with_group("messages", [("key", template.clone())]));
            let empty = Replacements::new();
            prop_assert_eq!(lang.get("key", Some(&empty), None), lang.get("key", None, None));
        }

        #[test]
        fn plain_templates_substitute_every_placeholder(
            prefix in "[A-Za-z ]{0,10}",
            value in "[A-Za-z0-9]{1,10}",
            repeats in 1usize..4,
        ) {
            let template = format!("X{}{}Y", prefix, " :name".repeat(repeats));
            let lang = Lang::new(Catalog::new().with_group("messages", [("key", template.clone())]));
            let replacements = replacements!["name" => value.clone()];

            let resolved = lang.get("key", Some(&replacements), None);
            prop_assert_eq!(resolved, template.replace(":name", &value));
        }

        #[test]
        fn choice_is_get_with_folded_count(count in 0u32..20) {
            let lang = lang();
            let mut folded = Replacements::new();
            folded.insert("count", count);
            prop_assert_eq!(
                lang.choice("test-with-count", count, None),
                lang.get("test-with-count", Some(&folded), Some(Count::from(count)))
            );
        }
    }
}
