//! Pattern tokens and the path matcher.
//!
//! A pattern is an ordered list of keys. A bare key may match after any
//! number of intervening path segments; a key prefixed with `^` must match
//! the segment right after the previous match. The last token always has to
//! land on the last segment of the path, so a pattern that is used up before
//! the path ends does not match that path.
//!
//! ```
//! use juery::Pattern;
//!
//! let path = vec!["a".to_string(), "b".to_string(), "c".to_string()];
//! assert!(Pattern::new(["a", "c"]).matches(&path));
//! assert!(!Pattern::new(["a", "^c"]).matches(&path));
//! assert!(!Pattern::new(["a", "b"]).matches(&path));
//! ```

use std::{convert::Infallible, fmt, str::FromStr};

/// Marker that anchors a token to the segment right after the previous match
pub const ANCHOR: char = '^';

/// One unit of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternToken {
    /// Key to compare against a path segment, without the anchor marker
    pub key: String,

    /// Must match the immediately next path segment
    pub anchored: bool,
}

impl PatternToken {
    /// Parses a raw token; a single leading `^` marks it anchored.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(ANCHOR) {
            Some(key) => PatternToken {
                key: key.to_string(),
                anchored: true,
            },
            None => PatternToken {
                key: raw.to_string(),
                anchored: false,
            },
        }
    }

    /// Case-insensitive comparison against one path segment.
    fn accepts(&self, segment: &str) -> bool {
        self.key == segment || self.key.to_lowercase() == segment.to_lowercase()
    }
}

impl fmt::Display for PatternToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.anchored {
            write!(f, "{}{}", ANCHOR, self.key)
        } else {
            write!(f, "{}", self.key)
        }
    }
}

/// An ordered sequence of [`PatternToken`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    tokens: Vec<PatternToken>,
}

impl Pattern {
    /// Builds a pattern from raw tokens such as `["users", "^name"]`.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Pattern {
            tokens: tokens
                .into_iter()
                .map(|t| PatternToken::parse(t.as_ref()))
                .collect(),
        }
    }

    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Decides whether `path` matches this pattern.
    ///
    /// Scans the path left to right with a cursor into the tokens. A matching
    /// segment consumes the current token. A mismatch fails the whole path
    /// when the token is anchored and is skipped otherwise. Running out of
    /// tokens while segments remain also fails, so the match is only
    /// accepted when the last token is consumed by the last segment.
    pub fn matches<S: AsRef<str>>(&self, path: &[S]) -> bool {
        if self.tokens.len() > path.len() {
            return false;
        }

        let mut index = 0;

        for segment in path {
            let Some(token) = self.tokens.get(index) else {
                // Tokens used up before the path ended
                return false;
            };

            if token.accepts(segment.as_ref()) {
                index += 1;
            } else if token.anchored {
                return false;
            }
        }

        index == self.tokens.len()
    }
}

impl FromStr for Pattern {
    type Err = Infallible;

    /// Whitespace-separated tokens, e.g. `"users ^name"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Pattern::new(s.split_whitespace()))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

impl<S: AsRef<str>> FromIterator<S> for Pattern {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Pattern::new(iter)
    }
}

/// Matches `path` against raw pattern tokens without keeping a [`Pattern`].
pub fn matches<P, T>(path: &[P], tokens: &[T]) -> bool
where
    P: AsRef<str>,
    T: AsRef<str>,
{
    Pattern::new(tokens).matches(path)
}
