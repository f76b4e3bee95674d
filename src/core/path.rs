//! Explicit optional-field lookup into JSON documents.
//!
//! Every field the extractors treat as optional goes through [`lookup`], so
//! which fields may be absent is visible at the call site.

use serde_json::Value;

/// One step of a path: an object key or an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seg<'a> {
    Key(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for Seg<'a> {
    fn from(key: &'a str) -> Self {
        Seg::Key(key)
    }
}

impl From<usize> for Seg<'_> {
    fn from(index: usize) -> Self {
        Seg::Index(index)
    }
}

// Integer literals in `path![..]` default to i32.
impl From<i32> for Seg<'_> {
    fn from(index: i32) -> Self {
        Seg::Index(usize::try_from(index).unwrap_or(usize::MAX))
    }
}

/// Walk `path` from `root`, returning `None` at the first missing step.
pub fn lookup<'v>(root: &'v Value, path: &[Seg<'_>]) -> Option<&'v Value> {
    path.iter().try_fold(root, |node, seg| match seg {
        Seg::Key(key) => node.get(*key),
        Seg::Index(i) => node.get(*i),
    })
}

/// Build a `&[Seg]` from mixed keys and indexes: `path!["teams", 0, "teamStats"]`.
#[macro_export]
macro_rules! path {
    ($($seg:expr),* $(,)?) => {
        [$($crate::core::path::Seg::from($seg)),*]
    };
}

pub fn lookup_str<'v>(root: &'v Value, path: &[Seg<'_>]) -> Option<&'v str> {
    lookup(root, path).and_then(Value::as_str)
}
