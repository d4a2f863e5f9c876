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

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

use log::debug;
use serde_json::Value;

pub use crate::error::{Document, Error, Result};
pub use crate::json_diff::{deep_equal, diff, path, remove_fields, Difference, StructuralError};

mod error;
pub mod input;
mod json_diff;

/// Builder for a comparison.
///
/// The builder collects the ignore paths that are stripped from both
/// documents before they are checked for equality.
///
/// # Examples
///
/// ```
/// use json_compare::JsonCompare;
/// use serde_json::json;
///
/// let result = JsonCompare::new()
///     .with_ignore_path("$.id")
///     .with_ignore_paths(["$.meta.updated"])
///     .compare(
///         json!({ "id": 1, "name": "John", "meta": { "updated": 10 } }),
///         json!({ "id": 2, "name": "John", "meta": { "updated": 20 } }),
///     );
/// assert!(result.is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonCompare {
    ignore_paths: Vec<String>,
}

impl JsonCompare {
    /// Constructs a new `JsonCompare` builder without ignore paths.
    pub fn new() -> Self {
        Self {
            ignore_paths: vec![],
        }
    }

    /// Adds a path to the list of paths to ignore.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_compare::JsonCompare;
    /// let compare = JsonCompare::new().with_ignore_path("$.nested.id");
    /// assert_eq!(compare.ignore_paths(), ["$.nested.id"]);
    /// ```
    pub fn with_ignore_path(mut self, path: impl Into<String>) -> Self {
        self.ignore_paths.push(path.into());
        self
    }

    /// Adds several paths to the list of paths to ignore.
    pub fn with_ignore_paths<I>(mut self, paths: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.ignore_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// The paths removed from both documents before comparing them.
    pub fn ignore_paths(&self) -> &[String] {
        &self.ignore_paths
    }

    /// Removes the ignored fields from both documents and checks whether
    /// they are equal.
    ///
    /// The documents are consumed since the removal mutates them. On
    /// inequality the returned [`Error::NotEqual`] lists the differences.
    pub fn compare(&self, mut first: Value, mut second: Value) -> Result<()> {
        remove_fields(&mut first, &self.ignore_paths).map_err(|source| Error::Removal {
            document: Document::First,
            source,
        })?;

        remove_fields(&mut second, &self.ignore_paths).map_err(|source| Error::Removal {
            document: Document::Second,
            source,
        })?;

        if deep_equal(&first, &second) {
            return Ok(());
        }

        let differences = diff(&first, &second)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        debug!("documents differ at {} locations", differences.len());

        Err(Error::NotEqual { differences })
    }
}

/// Compares two documents after removing `ignore_paths` from both.
///
/// Shorthand for [`JsonCompare`] with the given ignore paths.
///
/// # Examples
///
/// ```
/// use json_compare::{compare, Error};
/// use serde_json::json;
///
/// let first = json!({ "key": "value", "ignoreField": "x" });
/// let second = json!({ "key": "value", "ignoreField": "y" });
/// assert!(compare(first.clone(), second.clone(), &["$.ignoreField"]).is_ok());
///
/// let no_paths: [&str; 0] = [];
/// let result = compare(first, second, no_paths);
/// assert!(matches!(result, Err(Error::NotEqual { .. })));
/// ```
pub fn compare<I>(first: Value, second: Value, ignore_paths: I) -> Result<()>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    JsonCompare::new()
        .with_ignore_paths(ignore_paths.into_iter().map(|path| path.as_ref().to_string()))
        .compare(first, second)
}
