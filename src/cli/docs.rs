//! Documentation content for the juery CLI

use super::CliError;

/// Available documentation topics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTopic {
    Patterns,
    Traversal,
    Filters,
    Output,
}

impl DocTopic {
    /// Parse topic name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "patterns" | "pattern" | "query" => Some(Self::Patterns),
            "traversal" | "order" | "paths" => Some(Self::Traversal),
            "filters" | "filter" | "keys" | "values" => Some(Self::Filters),
            "output" | "format" => Some(Self::Output),
            _ => None,
        }
    }
}

/// Get the docs overview (topic listing)
pub fn get_docs_overview() -> &'static str {
    r#"JUERY DOCUMENTATION

juery finds every location in a JSON document whose key path matches a short
pattern, and prints each match as a {path, key, value} record.

DOCUMENTATION TOPICS

  patterns          Pattern tokens, the ^ anchor and end-of-path alignment
  traversal         The order in which locations are visited
  filters           Key and value keyword searches
  output            Record format and output flags

QUICK REFERENCE

  juery query a c         c anywhere below a, c is the last key
  juery query a ^c        c directly below a
  juery query a --first   only the first match
  juery keys nam          keys containing "nam" (any case)
  juery values hello      string/number values containing "hello"
  juery paths             every location in visiting order

Run 'juery doc <topic>' for detailed documentation.
"#
}

/// Get documentation for a specific topic
pub fn get_doc_topic(name: &str) -> Result<&'static str, CliError> {
    match DocTopic::from_name(name) {
        Some(DocTopic::Patterns) => Ok(PATTERNS_DOC),
        Some(DocTopic::Traversal) => Ok(TRAVERSAL_DOC),
        Some(DocTopic::Filters) => Ok(FILTERS_DOC),
        Some(DocTopic::Output) => Ok(OUTPUT_DOC),
        None => Err(CliError::UnknownTopic(name.to_string())),
    }
}

const PATTERNS_DOC: &str = r#"PATTERNS - Tokens and Anchors

BARE TOKENS
  key
    Matches a path segment with the same name, ignoring case. Any number of
    segments may sit between it and the previous match.

    Example:
      Input:   {"a": {"b": {"c": 1}}}
      Pattern: a c
      Matches: a/b/c => 1

ANCHORED TOKENS
  ^key
    Must match the segment immediately after the previous match.

    Example:
      Input:   {"a": {"b": {"c": 1}}}
      Pattern: a ^c
      Matches: nothing (b sits between a and c)

      Pattern: b ^c
      Matches: a/b/c => 1

END-OF-PATH ALIGNMENT
    The last token must match the last segment of the path. A pattern used
    up before the path ends does not match that location.

    Example:
      Input:   {"a": {"b": 1}}
      Pattern: a
      Matches: a => {"b": 1}   (a/b is not matched by "a")

ARRAY INDICES
    Array elements are keyed by their index as a string.

    Example:
      Input:   {"users": [{"name": "Ada"}]}
      Pattern: users ^0 ^name
      Matches: users/0/name => "Ada"

    Constraints:
      - No wildcards or regular expressions
      - ^ cannot be escaped; only one leading ^ is stripped
      - An empty pattern matches nothing
      - Tokens starting with - go after --, e.g. juery query -- -x
"#;

const TRAVERSAL_DOC: &str = r#"TRAVERSAL - Visiting Order

    All direct children of a container are visited first, in order
    (object keys as written, array indices ascending). Nested containers
    found along the way are stacked, and the last one found is descended
    into first.

    Example:
      Input:  {"a": {"x": 1}, "b": {"y": 2}}
      Order:  a, b, b/y, a/x

    The root itself is never reported. A scalar root has no locations.
    Results of every command follow this order.
"#;

const FILTERS_DOC: &str = r#"FILTERS - Keyword Searches

KEYS
  juery keys <keyword>...
    Locations whose key contains at least one keyword, ignoring case.

    Example:
      Input:   {"Name": "x"}
      Command: juery keys nam
      Matches: Name => "x"

VALUES
  juery values <keyword>...
    Locations holding a string or number whose text contains at least one
    keyword, ignoring case. Objects, arrays, booleans and null are skipped.

    Example:
      Input:   {"n": "HELLO", "port": 8080}
      Command: juery values hello 80
      Matches: n => "HELLO", port => 8080

    Each location is reported once even if several keywords match.
"#;

const OUTPUT_DOC: &str = r#"OUTPUT - Record Format

    Each match is printed as one JSON object per line:

      {"path":["a","b"],"key":"b","value":1}

FLAGS
  -i, --input <JSON>   Document to search (otherwise read from stdin)
  -p, --pretty         Indent each record
  --values-only        Print only the matched values
  --first              (query) Print only the first match, or null

LOGGING
    Set RUST_LOG=debug to see query diagnostics on stderr.
"#;
