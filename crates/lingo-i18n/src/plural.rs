//! Branch scanning and selection for pluralizable templates
//!
//! A template is a list of branches separated by `|`:
//!
//! ```text
//! {0}No apples|{1}One apple|[2,*]:count apples
//! ```
//!
//! Each branch may start with an interval rule (see [`crate::interval`])
//! followed directly by its text. Branches are tried in order; the first
//! rule containing the count wins. Without a matching rule the first branch
//! is the singular and the second the plural.

use crate::error::{IntervalError, TemplateError};
use crate::interval::Interval;
use std::borrow::Cow;
use tracing::{debug, warn};

/// Separates branches; `\|` is a literal pipe.
pub const BRANCH_SEPARATOR: char = '|';

const ESCAPE: char = '\\';
const RULE_OPENERS: &[char] = &['{', '[', ']', '('];
const RULE_CLOSERS: &[char] = &['}', '[', ']', ')'];

/// One alternative of a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    /// The leading interval rule, delimiters included
    pub rule: Option<String>,
    /// Trimmed branch text
    pub text: String,
}

fn is_rule_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || matches!(c, ',' | '*' | '-' | '+' | 'I' | 'n' | 'f')
}

/// Split on unescaped separators, unescaping `\|` along the way.
fn split_segments(template: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE if chars.peek() == Some(&BRANCH_SEPARATOR) => {
                current.push(BRANCH_SEPARATOR);
                chars.next();
            }
            BRANCH_SEPARATOR => segments.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    segments.push(current);

    segments
}

/// Split a leading rule off a segment.
///
/// One whitespace character may precede the rule, and the rule must be
/// followed by at least one character of text; otherwise the whole segment
/// is text.
fn split_rule(segment: &str) -> (Option<&str>, &str) {
    let offset = segment
        .chars()
        .next()
        .filter(|c| c.is_whitespace())
        .map_or(0, char::len_utf8);
    let rest = &segment[offset..];

    let mut chars = rest.char_indices();
    if !chars.next().is_some_and(|(_, c)| RULE_OPENERS.contains(&c)) {
        return (None, segment);
    }

    let mut body = 0;
    let mut end = None;
    for (index, c) in chars {
        if is_rule_char(c) {
            body += 1;
            continue;
        }
        if body > 0 && RULE_CLOSERS.contains(&c) {
            end = Some(index + c.len_utf8());
        }
        break;
    }

    match end {
        Some(end) if end < rest.len() => (Some(&rest[..end]), &rest[end..]),
        _ => (None, segment),
    }
}

/// Tokenize a template into branches. Empty segments yield no branch.
pub fn scan_branches(template: &str) -> Vec<Branch> {
    split_segments(template)
        .iter()
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (rule, text) = split_rule(segment);
            Branch {
                rule: rule.map(str::to_string),
                text: text.trim().to_string(),
            }
        })
        .collect()
}

/// Scan a template and check its explicit rules.
///
/// Rules whose delimiters match no interval shape are kept; they simply
/// never match. Rules with unparseable bounds, and unguarded branches that
/// precede a guarded one, make the whole template invalid.
pub fn inspect(template: &str) -> Result<Vec<Branch>, TemplateError> {
    let branches = scan_branches(template);
    if branches.is_empty() {
        return Err(TemplateError::NoBranches);
    }

    if let Some(last_guarded) = branches.iter().rposition(|branch| branch.rule.is_some()) {
        if let Some(index) = branches[..last_guarded]
            .iter()
            .position(|branch| branch.rule.is_none())
        {
            return Err(TemplateError::UnguardedBeforeGuarded { index });
        }
    }

    for (index, branch) in branches.iter().enumerate() {
        let Some(rule) = &branch.rule else { continue };
        match Interval::parse(rule) {
            Ok(_) | Err(IntervalError::UnknownShape(_)) => {}
            Err(source) => return Err(TemplateError::InvalidRule { index, source }),
        }
    }

    Ok(branches)
}

/// Rules that `inspect` keeps but that fit no interval shape.
pub fn unknown_shapes(branches: &[Branch]) -> Vec<TemplateError> {
    branches
        .iter()
        .enumerate()
        .filter_map(|(index, branch)| {
            let rule = branch.rule.as_deref()?;
            matches!(Interval::parse(rule), Err(IntervalError::UnknownShape(_))).then(|| {
                TemplateError::UnknownShape {
                    index,
                    rule: rule.to_string(),
                }
            })
        })
        .collect()
}

/// Every reportable problem in `template`, including rules that never match.
pub fn problems(template: &str) -> Vec<TemplateError> {
    match inspect(template) {
        Ok(branches) => unknown_shapes(&branches),
        Err(err) if err.is_invalid_rule() => vec![err],
        Err(_) => Vec::new(),
    }
}

/// Pick the branch of `template` for `count`.
///
/// Invalid templates come back unchanged. Rules that fit no interval shape
/// are skipped. With `warn_invalid` set, both cases log the key and template
/// at warn level.
pub fn select_branch<'a>(key: &str, template: &'a str, count: f64, warn_invalid: bool) -> Cow<'a, str> {
    let branches = match inspect(template) {
        Ok(branches) => branches,
        Err(err) => {
            if err.is_invalid_rule() && warn_invalid {
                warn!(
                    key = %key,
                    template = %template,
                    "The key {} may contain an invalid explicit rule: {}",
                    key,
                    err
                );
            } else {
                debug!("Template for '{}' used verbatim: {}", key, err);
            }
            return Cow::Borrowed(template);
        }
    };

    if warn_invalid {
        for problem in unknown_shapes(&branches) {
            warn!(
                key = %key,
                template = %template,
                "The key {} has a rule that never matches: {}",
                key,
                problem
            );
        }
    }

    let explicit = branches.iter().find(|branch| {
        branch
            .rule
            .as_deref()
            .and_then(|rule| Interval::parse(rule).ok())
            .is_some_and(|interval| interval.contains(count))
    });

    let chosen = match explicit {
        Some(branch) => branch,
        None if count > 1.0 => branches.get(1).unwrap_or(&branches[0]),
        None => &branches[0],
    };

    Cow::Owned(chosen.text.clone())
}
