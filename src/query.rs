//! Queries built on top of the traversal.
//!
//! [`juery`] yields every location whose path matches a [`Pattern`];
//! [`juery_one`] stops at the first. [`keys_with`] and [`values_with`] are
//! plain keyword filters over the same walk. Every function treats an absent
//! document as an empty one.

use std::iter::FusedIterator;

use log::{debug, trace};

use crate::{
    pattern::Pattern,
    record::LocationRecord,
    traverse::{Traverser, traverse},
    value::Value,
};

/// Lazy iterator over the locations matching a pattern, see [`juery`].
pub struct Juery<'a, 'p> {
    records: Traverser<'a>,
    pattern: &'p Pattern,
}

/// Yields every location of `document` whose path matches `pattern`.
///
/// Results come in traversal order.
///
/// # Examples
///
/// ```
/// use juery::{juery, Pattern, Value};
///
/// let doc: Value = serde_json::json!({"a": {"b": {"c": 1}}}).into();
///
/// let found: Vec<_> = juery(Some(&doc), &Pattern::new(["a", "c"])).collect();
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].value, &Value::Integer(1));
///
/// assert_eq!(juery(Some(&doc), &Pattern::new(["a", "^c"])).count(), 0);
/// ```
pub fn juery<'a, 'p>(document: Option<&'a Value>, pattern: &'p Pattern) -> Juery<'a, 'p> {
    debug!("juery pattern: [{}]", pattern);
    Juery {
        records: traverse(document),
        pattern,
    }
}

/// First location matching `pattern`, in traversal order.
///
/// Returns `None` when the document is absent or nothing matches.
pub fn juery_one<'a>(document: Option<&'a Value>, pattern: &Pattern) -> Option<LocationRecord<'a>> {
    juery(document, pattern).next()
}

impl<'a> Iterator for Juery<'a, '_> {
    type Item = LocationRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let pattern = self.pattern;
        let record = self.records.find(|r| pattern.matches(&r.path))?;
        trace!("juery matched {}", record);
        Some(record)
    }
}

impl FusedIterator for Juery<'_, '_> {}

/// Lowercases keywords once so each record only lowercases its own side.
fn normalize_keywords<I, S>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keywords
        .into_iter()
        .map(|k| k.as_ref().to_lowercase())
        .collect()
}

fn contains_any(haystack: &str, keywords: &[String]) -> bool {
    let haystack = haystack.to_lowercase();
    keywords.iter().any(|k| haystack.contains(k.as_str()))
}

/// Lazy iterator over locations whose key contains a keyword, see [`keys_with`].
pub struct KeysWith<'a> {
    records: Traverser<'a>,
    keywords: Vec<String>,
}

/// Yields every location whose key contains at least one of `keywords`,
/// ignoring case.
///
/// ```
/// use juery::{keys_with, Value};
///
/// let doc: Value = serde_json::json!({"Name": "x", "age": 3}).into();
/// let keys: Vec<String> = keys_with(Some(&doc), ["nam"]).map(|r| r.key).collect();
/// assert_eq!(keys, ["Name"]);
/// ```
pub fn keys_with<I, S>(document: Option<&Value>, keywords: I) -> KeysWith<'_>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let keywords = normalize_keywords(keywords);
    debug!("keys_with keywords: {:?}", keywords);
    KeysWith {
        records: traverse(document),
        keywords,
    }
}

impl<'a> Iterator for KeysWith<'a> {
    type Item = LocationRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let keywords = &self.keywords;
        let record = self.records.find(|r| contains_any(&r.key, keywords))?;
        trace!("keys_with matched {}", record);
        Some(record)
    }
}

impl FusedIterator for KeysWith<'_> {}

/// Lazy iterator over locations whose value contains a keyword, see [`values_with`].
pub struct ValuesWith<'a> {
    records: Traverser<'a>,
    keywords: Vec<String>,
}

/// Yields every location holding a string or number whose text contains at
/// least one of `keywords`, ignoring case.
///
/// Objects, arrays, booleans and null are never yielded. A location is
/// yielded once no matter how many keywords it contains; it is not repeated
/// per matching keyword, which makes this a filter like [`keys_with`].
/// Number text uses JavaScript-style formatting, see [`Value::search_text`].
///
/// ```
/// use juery::{values_with, Value};
///
/// let doc: Value = serde_json::json!({"n": "HELLO", "port": 8080, "on": true}).into();
/// let keys: Vec<String> = values_with(Some(&doc), ["hello", "80"]).map(|r| r.key).collect();
/// assert_eq!(keys, ["n", "port"]);
/// ```
pub fn values_with<I, S>(document: Option<&Value>, keywords: I) -> ValuesWith<'_>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let keywords = normalize_keywords(keywords);
    debug!("values_with keywords: {:?}", keywords);
    ValuesWith {
        records: traverse(document),
        keywords,
    }
}

impl<'a> Iterator for ValuesWith<'a> {
    type Item = LocationRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let keywords = &self.keywords;
        let record = self.records.find(|r| {
            r.value
                .search_text()
                .is_some_and(|text| contains_any(&text, keywords))
        })?;
        trace!("values_with matched {}", record);
        Some(record)
    }
}

impl FusedIterator for ValuesWith<'_> {}
