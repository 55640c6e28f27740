//! Template formatting for log lines
//!
//! Templates are plain text with `$name` placeholders. Substitution walks the
//! parameters in insertion order and replaces only the **first** occurrence of
//! each `$name` token. A template that repeats `$message` therefore keeps the
//! second `$message` verbatim:
//!
//! ```
//! use module_logger::core::formatter::{format_string, FormatParams};
//!
//! let mut params = FormatParams::new();
//! params.insert("message", "hi");
//! assert_eq!(format_string("$message / $message", &params), "hi / $message");
//! ```
//!
//! Tokens without a matching parameter pass through untouched, and
//! parameters whose token is absent are ignored.

use std::fmt::Display;

/// Template used when a logger is built without an explicit format
pub const DEFAULT_FORMAT: &str = "[level=$logLevel, module=$moduleName, $formattedTimestamp]: $message";

/// Placeholder names recognised by the logger
pub mod placeholder {
    pub const MODULE_NAME: &str = "moduleName";
    pub const FORMATTED_TIMESTAMP: &str = "formattedTimestamp";
    pub const LOG_LEVEL: &str = "logLevel";
    pub const MESSAGE: &str = "message";
}

/// Ordered placeholder name to value mapping
///
/// Iteration order is insertion order, which is also the substitution order
/// used by [`format_string`]. Inserting an existing key overwrites its value
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatParams {
    entries: Vec<(String, String)>,
}

impl FormatParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert a parameter, converting the value to its textual form
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) -> &mut Self {
        let key = key.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for FormatParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = FormatParams::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Piece of the output: template text still open to substitution, or a
/// value that has already been substituted
enum Segment<'a> {
    Template(&'a str),
    Value(&'a str),
}

/// Substitute `$key` placeholders in `template`, first occurrence per key
///
/// Only the template's own text is searched. Values are inserted literally
/// and never re-scanned by later keys, so a `$` inside a value has no special
/// meaning. Never fails.
#[must_use]
pub fn format_string(template: &str, params: &FormatParams) -> String {
    let mut segments = vec![Segment::Template(template)];
    for (key, value) in params.iter() {
        let token = format!("${}", key);
        let hit = segments.iter().enumerate().find_map(|(idx, segment)| match segment {
            Segment::Template(text) => text.find(&token).map(|start| (idx, *text, start)),
            Segment::Value(_) => None,
        });

        if let Some((idx, text, start)) = hit {
            let (before, rest) = text.split_at(start);
            let after = &rest[token.len()..];
            segments[idx] = Segment::Template(before);
            segments.insert(idx + 1, Segment::Value(value));
            segments.insert(idx + 2, Segment::Template(after));
        }
    }

    segments
        .iter()
        .map(|segment| match segment {
            Segment::Template(text) | Segment::Value(text) => *text,
        })
        .collect()
}
