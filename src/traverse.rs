//! Stack-driven walk over every location of a document.
//!
//! The walk keeps an explicit LIFO stack of frames. The active frame's own
//! keys are all emitted first; every container found among them is pushed
//! as a new frame while the active frame is still being enumerated. Once the
//! active frame runs dry the most recently pushed frame is popped, so the
//! last-discovered subtree is descended into before its earlier siblings.
//!
//! ```
//! use juery::{traverse, Value};
//!
//! let doc: Value = serde_json::json!({"a": {"x": 1}, "b": {"y": 2}}).into();
//! let keys: Vec<String> = traverse(Some(&doc)).map(|r| r.key).collect();
//! assert_eq!(keys, ["a", "b", "y", "x"]);
//! ```

use std::iter::FusedIterator;

use crate::{
    record::{LocationRecord, Path},
    value::{Children, Value},
};

/// A pending context: the path leading to it and the container itself.
struct Frame<'a> {
    prefix: Path,
    context: &'a Value,
}

/// The frame currently being enumerated.
struct ActiveFrame<'a> {
    prefix: Path,
    children: Children<'a>,
}

/// Lazy iterator over every [`LocationRecord`] of a document.
///
/// Created by [`traverse`]. Each pull does the work for exactly one record;
/// dropping the iterator abandons the rest of the walk.
pub struct Traverser<'a> {
    stack: Vec<Frame<'a>>,
    active: Option<ActiveFrame<'a>>,
}

/// Walks `document`, yielding one record per reachable location.
///
/// An absent document yields nothing. The root itself is never yielded, and
/// a scalar root has no locations below it.
pub fn traverse(document: Option<&Value>) -> Traverser<'_> {
    let stack = match document {
        Some(root) => vec![Frame {
            prefix: Vec::new(),
            context: root,
        }],
        None => Vec::new(),
    };

    Traverser {
        stack,
        active: None,
    }
}

impl<'a> Iterator for Traverser<'a> {
    type Item = LocationRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(active) = self.active.as_mut() {
                if let Some((key, value)) = active.children.next() {
                    let mut path = active.prefix.clone();
                    path.push(key.clone());

                    if value.is_container() {
                        self.stack.push(Frame {
                            prefix: path.clone(),
                            context: value,
                        });
                    }

                    return Some(LocationRecord { path, key, value });
                }
            }

            let frame = self.stack.pop()?;
            self.active = Some(ActiveFrame {
                prefix: frame.prefix,
                children: frame.context.children(),
            });
        }
    }
}

impl FusedIterator for Traverser<'_> {}
