use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{Error, Result};

// Lazy `.*?` stops at the first `};` after the opening brace, even inside a string value.
static INITIAL_DATA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)(?:var\s+ytInitialData|window\["ytInitialData"\])\s*=\s*(\{.*?\});"#)
        .expect("ytInitialData pattern is valid")
});

/// Returns the `ytInitialData` object literal embedded in a page, braces included.
pub fn locate_initial_data(html: &str) -> Result<&str> {
    INITIAL_DATA_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(Error::MarkerNotFound)
}

pub fn parse_tree(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|err| Error::json_in(text, err))
}

/// Locates and parses the embedded blob in one step.
pub fn initial_data(html: &str) -> Result<Value> {
    let text = locate_initial_data(html)?;
    log::debug!("located ytInitialData ({} bytes)", text.len());
    parse_tree(text)
}

/// Path lookups over a parsed tree. A missing segment, or a step through a scalar,
/// resolves to `None` rather than an error.
pub trait Lookup {
    fn get_path(&self, path: &[&str]) -> Option<&Value>;

    fn get_array(&self, path: &[&str]) -> &[Value] {
        self.get_path(path)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn exists(&self, key: &str) -> bool;
}

impl Lookup for Value {
    fn get_path(&self, path: &[&str]) -> Option<&Value> {
        path.iter().try_fold(self, |node, segment| match node {
            Value::Object(map) => map.get(*segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }

    fn exists(&self, key: &str) -> bool {
        self.as_object().is_some_and(|map| map.contains_key(key))
    }
}
