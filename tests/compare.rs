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

use std::fs;
use std::path::{Path, PathBuf};

use json_compare::input::{ignore_paths, load_ignore_file, read_document};
use json_compare::{compare, remove_fields, Error};
use serde_json::json;
use tempfile::{tempdir, TempDir};

const FIXTURES: [(&str, &str); 6] = [
    ("equal1.json", r#"{"key": "value"}"#),
    ("equal2.json", r#"{"key": "value"}"#),
    ("different1.json", r#"{"key": "value1"}"#),
    ("different2.json", r#"{"key": "value2"}"#),
    (
        "ignore1.json",
        r#"{"key": "value", "ignoreField": "ignore", "nested": {"ignoreField": "ignore"}}"#,
    ),
    (
        "ignore2.json",
        r#"{"key": "value", "ignoreField": "different", "nested": {"ignoreField": "different"}}"#,
    ),
];

fn fixtures() -> TempDir {
    let dir = tempdir().unwrap();
    for (name, content) in FIXTURES {
        fs::write(dir.path().join(name), content).unwrap();
    }
    fs::write(
        dir.path().join("ignore_file.txt"),
        "\n$.ignoreField\n$.nested.ignoreField\n",
    )
    .unwrap();
    dir
}

fn compare_files(dir: &Path, first: &str, second: &str, paths: &[String]) -> json_compare::Result<()> {
    let first = read_document(dir.join(first)).unwrap();
    let second = read_document(dir.join(second)).unwrap();
    compare(first, second, paths)
}

#[test]
fn compare_json_files() {
    let dir = fixtures();
    let ignored = vec!["$.ignoreField".to_string(), "$.nested.ignoreField".to_string()];

    let cases: Vec<(&str, &str, Vec<String>, bool)> = vec![
        ("equal1.json", "equal2.json", vec![], true),
        ("different1.json", "different2.json", vec![], false),
        ("ignore1.json", "ignore2.json", vec![], false),
        ("ignore1.json", "ignore2.json", ignored, true),
    ];

    for (first, second, paths, equal) in cases {
        let result = compare_files(dir.path(), first, second, &paths);
        assert_eq!(result.is_ok(), equal, "{} vs {}: {:?}", first, second, result);
    }
}

#[test]
fn compare_json_files_with_ignore_file() {
    let dir = fixtures();
    let paths = load_ignore_file(dir.path().join("ignore_file.txt")).unwrap();
    assert_eq!(paths, vec!["$.ignoreField", "$.nested.ignoreField"]);

    assert!(compare_files(dir.path(), "ignore1.json", "ignore2.json", &paths).is_ok());

    let result = compare_files(dir.path(), "different1.json", "different2.json", &paths);
    assert!(matches!(result, Err(Error::NotEqual { .. })));
}

#[test]
fn compare_json_files_with_file_and_inline_paths() {
    let dir = fixtures();
    let ignore_file: PathBuf = dir.path().join("ignore_file.txt");
    let paths = ignore_paths(Some(ignore_file), ["$.key"]).unwrap();

    assert_eq!(paths, vec!["$.ignoreField", "$.nested.ignoreField", "$.key"]);
    assert!(compare_files(dir.path(), "different1.json", "different2.json", &paths).is_ok());
    assert!(compare_files(dir.path(), "different1.json", "ignore2.json", &paths).is_err());
}

#[test]
fn remove_fields_from_documents() {
    let mut doc = json!({ "key": "value", "ignoreField": "ignore" });
    remove_fields(&mut doc, ["$.ignoreField"]).unwrap();
    assert_eq!(doc, json!({ "key": "value" }));

    let mut doc = json!({ "key": "value", "nested": { "ignoreField": "ignore" } });
    remove_fields(&mut doc, ["$.nested.ignoreField"]).unwrap();
    assert_eq!(doc, json!({ "key": "value", "nested": {} }));

    let mut doc = json!({ "key": "value" });
    remove_fields(&mut doc, ["$.nonExistentField"]).unwrap();
    assert_eq!(doc, json!({ "key": "value" }));
}

#[test]
fn compare_reports_differences() {
    let first = json!({ "user": { "name": "John", "age": 30, "tags": ["a"] }, "id": 1 });
    let second = json!({ "user": { "name": "Jane", "age": 30, "tags": ["a", "b"] }, "id": 2 });

    match compare(first, second, ["$.id"]) {
        Err(Error::NotEqual { differences }) => {
            assert_eq!(differences.len(), 2);
            assert!(differences[0].starts_with("json atoms at path \".user.name\" are not equal"));
            assert_eq!(
                differences[1],
                "json atom at path \".user.tags[1]\" is missing from first"
            );
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn compare_fails_on_non_object_parent() {
    let first = json!({ "items": [{ "id": 1 }] });
    let second = json!({ "items": [{ "id": 2 }] });

    let err = compare(first, second, ["$.items.id"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed removing fields from first document: parent path $.items is not a map (found array)"
    );
}
