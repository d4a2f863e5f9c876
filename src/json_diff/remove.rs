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

use log::{debug, warn};
use serde_json::Value;
use thiserror::Error;

use super::path::{self, DottedPath, ROOT_MARKER};

/// A parent path resolved to something other than an object, so the field
/// it should hold cannot be removed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parent path {parent} is not a map (found {found})")]
pub struct StructuralError {
    /// The parent path as written in the ignore list.
    pub parent: String,
    /// Kind of the value found at the parent path.
    pub found: &'static str,
}

/// Removes every field addressed by `paths` from `document`, in place.
///
/// Paths whose parent does not exist are skipped, as are fields missing from
/// an existing parent. Processing stops at the first parent that is not an
/// object; removals applied before that point are kept.
///
/// # Examples
///
/// ```
/// use json_compare::remove_fields;
/// use serde_json::json;
///
/// let mut doc = json!({ "key": "value", "nested": { "id": 7 } });
/// remove_fields(&mut doc, &["$.nested.id", "$.missing.id"]).unwrap();
/// assert_eq!(doc, json!({ "key": "value", "nested": {} }));
/// ```
pub fn remove_fields<I>(document: &mut Value, paths: I) -> Result<(), StructuralError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for expression in paths {
        let expression = expression.as_ref();

        if path::has_query_syntax(expression) {
            warn!(
                "ignore path {} uses query syntax, it is matched as plain field names",
                expression
            );
        }

        if expression == ROOT_MARKER {
            warn!("ignore path {} addresses the whole document, skipping", expression);
            continue;
        }

        let (parent_path, field) = path::split_parent(expression);

        let Some(parent) = parent_path.dotted_path().lookup(document) else {
            debug!("parent path of {} not found, skipping", expression);
            continue;
        };

        match parent {
            Value::Object(map) => {
                if map.remove(field).is_some() {
                    debug!("removed {}", expression);
                }
            }
            other => {
                return Err(StructuralError {
                    parent: parent_path.to_string(),
                    found: kind_of(other),
                })
            }
        }
    }

    Ok(())
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
