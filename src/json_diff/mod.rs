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

pub mod path;
mod remove;

pub use remove::{remove_fields, StructuralError};

pub(crate) use remove::kind_of;

use path::{Key, Path};
use serde_json::{Number, Value};
use std::{cmp, collections::BTreeSet, fmt};

/// Structural equality of two JSON values.
///
/// Object key order is irrelevant, array order is not. Numbers are compared
/// by value, so `1` and `1.0` are equal.
///
/// # Examples
///
/// ```
/// use json_compare::deep_equal;
/// use serde_json::json;
///
/// assert!(deep_equal(&json!({ "a": 1, "b": [true] }), &json!({ "b": [true], "a": 1.0 })));
/// assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(a, b)| deep_equal(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, a)| b.get(key).map_or(false, |b| deep_equal(a, b)))
        }
        _ => false,
    }
}

// Integers are compared exactly, anything involving a float by its f64 value.
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a == b;
    }

    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a == b;
    }

    a.as_f64() == b.as_f64()
}

/// Lists every location at which `first` and `second` differ.
///
/// The result is empty exactly when [`deep_equal`] holds. Object keys are
/// visited in sorted order and array elements by ascending index.
pub fn diff<'a>(first: &'a Value, second: &'a Value) -> Vec<Difference<'a>> {
    let mut acc = vec![];
    diff_with(first, second, Path::Root, &mut acc);
    acc
}

fn diff_with<'a>(first: &'a Value, second: &'a Value, path: Path<'a>, acc: &mut Vec<Difference<'a>>) {
    let mut folder = DiffFolder { second, path, acc };

    fold_json(first, &mut folder);
}

#[derive(Debug)]
struct DiffFolder<'a, 'b> {
    second: &'a Value,
    path: Path<'a>,
    acc: &'b mut Vec<Difference<'a>>,
}

macro_rules! direct_compare {
    ($name:ident) => {
        fn $name(&mut self, first: &'a Value) {
            if self.second != first {
                self.mismatch(first);
            }
        }
    };
}

impl<'a, 'b> DiffFolder<'a, 'b> {
    direct_compare!(on_null);
    direct_compare!(on_bool);
    direct_compare!(on_string);

    fn on_number(&mut self, first: &'a Value) {
        let is_equal = match (first, self.second) {
            (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
            _ => false,
        };

        if !is_equal {
            self.mismatch(first);
        }
    }

    fn on_array(&mut self, first: &'a Value) {
        let (Value::Array(first_items), Some(second_items)) = (first, self.second.as_array()) else {
            self.mismatch(first);
            return;
        };

        for idx in 0..cmp::max(first_items.len(), second_items.len()) {
            let path = self.path.append(Key::Idx(idx));
            self.compare_entry(first_items.get(idx), second_items.get(idx), path);
        }
    }

    fn on_object(&mut self, first: &'a Value) {
        let (Value::Object(first_map), Some(second_map)) = (first, self.second.as_object()) else {
            self.mismatch(first);
            return;
        };

        let all_keys = first_map
            .keys()
            .chain(second_map.keys())
            .collect::<BTreeSet<_>>();
        for key in all_keys {
            let path = self.path.append(Key::Field(key));
            self.compare_entry(first_map.get(key), second_map.get(key), path);
        }
    }

    fn compare_entry(&mut self, first: Option<&'a Value>, second: Option<&'a Value>, path: Path<'a>) {
        match (first, second) {
            (Some(first), Some(second)) => diff_with(first, second, path, self.acc),
            (None, None) => unreachable!("at least one side should have the entry"),
            (first, second) => self.acc.push(Difference {
                path,
                first,
                second,
            }),
        }
    }

    fn mismatch(&mut self, first: &'a Value) {
        self.acc.push(Difference {
            path: self.path.clone(),
            first: Some(first),
            second: Some(self.second),
        });
    }
}

/// A single location where two documents disagree.
///
/// A side is `None` when the entry exists only in the other document.
#[derive(Debug, PartialEq)]
pub struct Difference<'a> {
    pub path: Path<'a>,
    pub first: Option<&'a Value>,
    pub second: Option<&'a Value>,
}

impl<'a> fmt::Display for Difference<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let json_to_string = |json: &Value| serde_json::to_string_pretty(json).map_err(|_| fmt::Error);

        match (self.first, self.second) {
            (Some(first), Some(second)) => {
                writeln!(f, "json atoms at path \"{}\" are not equal:", self.path)?;
                writeln!(f, "    first:")?;
                writeln!(f, "{}", indent(&json_to_string(first)?, 8))?;
                writeln!(f, "    second:")?;
                write!(f, "{}", indent(&json_to_string(second)?, 8))?;
            }
            (Some(_), None) => {
                write!(f, "json atom at path \"{}\" is missing from second", self.path)?;
            }
            (None, Some(_)) => {
                write!(f, "json atom at path \"{}\" is missing from first", self.path)?;
            }
            (None, None) => unreachable!("can't both be missing"),
        }

        Ok(())
    }
}

fn indent(text: &str, level: usize) -> String {
    let prefix = " ".repeat(level);

    text.lines()
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn fold_json<'a>(json: &'a Value, folder: &mut DiffFolder<'a, '_>) {
    match json {
        Value::Null => folder.on_null(json),
        Value::Bool(_) => folder.on_bool(json),
        Value::Number(_) => folder.on_number(json),
        Value::String(_) => folder.on_string(json),
        Value::Array(_) => folder.on_array(json),
        Value::Object(_) => folder.on_object(json),
    }
}
