// Copyright 2024 The DocAssert Authors
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use regex::Regex;
use serde_json::Value;
use std::fmt;

/// Optional first segment of a path expression, standing for the document root.
pub const ROOT_MARKER: &str = "$";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Path<'a> {
    Root,
    Keys(Vec<Key<'a>>),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key<'a> {
    Idx(usize),
    Field(&'a str),
}

// We cannot implement FromStr for Path because it borrows from the input
pub trait DottedPath {
    fn dotted_path(&self) -> Path;
}

impl DottedPath for str {
    fn dotted_path(&self) -> Path {
        Path::from_dotted(self)
    }
}

impl<'a> fmt::Display for Key<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Key::Idx(idx) => write!(f, "[{}]", idx),
            Key::Field(key) => write!(f, ".{}", key),
        }
    }
}

/// Splits a path expression on its last `.` into the parent path and the
/// name of the field it addresses.
///
/// Without a dot the parent path is empty, i.e. the root.
///
/// ```
/// use json_compare::path::split_parent;
///
/// assert_eq!(split_parent("$.nested.id"), ("$.nested", "id"));
/// assert_eq!(split_parent("id"), ("", "id"));
/// ```
pub fn split_parent(path: &str) -> (&str, &str) {
    match path.rfind('.') {
        Some(idx) => (&path[..idx], &path[idx + 1..]),
        None => ("", path),
    }
}

/// Resolves a parent path against `document`.
///
/// Returns `None` when a segment is missing or the value on the way is not
/// an object, so callers can tell "nothing to do" apart from a container of
/// the wrong kind.
pub fn lookup<'v>(document: &'v mut Value, parent_path: &str) -> Option<&'v mut Value> {
    parent_path.dotted_path().lookup(document)
}

/// Checks whether an expression uses JSONPath syntax (brackets, wildcards
/// or recursive descent) which is not interpreted here.
pub(crate) fn has_query_syntax(expression: &str) -> bool {
    Regex::new(r"\[[^\]]*\]|\*|\.\.")
        .map(|re| re.is_match(expression))
        .unwrap_or(false)
}

impl<'a> Path<'a> {
    pub(crate) fn append(&self, next: Key<'a>) -> Path<'a> {
        match self {
            Path::Root => Path::Keys(vec![next]),
            Path::Keys(list) => {
                let mut copy = list.clone();
                copy.push(next);
                Path::Keys(copy)
            }
        }
    }

    /// Parses a dotted expression. A leading `$` segment is dropped and an
    /// empty expression is the root.
    pub fn from_dotted(expression: &'a str) -> Self {
        if expression.is_empty() || expression == ROOT_MARKER {
            return Path::Root;
        }

        let mut segments = expression.split('.').peekable();
        if segments.peek() == Some(&ROOT_MARKER) {
            segments.next();
        }

        Path::Keys(segments.map(Key::Field).collect())
    }

    pub fn lookup<'v>(&self, document: &'v mut Value) -> Option<&'v mut Value> {
        match self {
            Path::Root => Some(document),
            Path::Keys(keys) => keys.iter().try_fold(document, |current, key| match key {
                Key::Field(field) => current.as_object_mut()?.get_mut(*field),
                Key::Idx(idx) => current.as_array_mut()?.get_mut(*idx),
            }),
        }
    }
}

impl<'a> fmt::Display for Path<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Path::Root => write!(f, "(root)"),
            Path::Keys(keys) => {
                for key in keys {
                    write!(f, "{}", key)?;
                }
                Ok(())
            }
        }
    }
}
