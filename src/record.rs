use std::fmt;

use crate::value::Value;

/// Keys leading from the document root to a location.
///
/// Array indices appear as their decimal string (`"0"`, `"1"`, ...).
///
/// # Examples
///
/// For `{"users": [{"name": "Ada"}]}` the location of `"Ada"` is
/// `["users", "0", "name"]`.
pub type Path = Vec<String>;

/// One location discovered while walking a document.
///
/// `key` is always the last element of `path`, and `value` borrows the
/// value stored there.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord<'a> {
    /// Keys from the root down to this location, never empty
    pub path: Path,

    /// Last key of `path`
    pub key: String,

    /// Value stored at `path`
    pub value: &'a Value,
}

impl<'a> LocationRecord<'a> {
    /// Number of keys between the root and this location.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Clone of the value, for callers that outlive the document borrow.
    pub fn to_owned_value(&self) -> Value {
        self.value.clone()
    }
}

impl fmt::Display for LocationRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.join("/"))
    }
}
