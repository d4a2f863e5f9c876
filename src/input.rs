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

//! Loading of documents and ignore lists.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::json_diff::kind_of;

/// Name used for standard input in error messages.
pub const STDIN: &str = "stdin";

/// Reads and parses a JSON document from a file.
///
/// The top-level value must be an object.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let source_name = path.display().to_string();

    let content = fs::read(path).map_err(|source| Error::Input {
        source_name: source_name.clone(),
        source,
    })?;

    parse_document(&content, &source_name)
}

/// Reads and parses a JSON document from `reader`, e.g. standard input.
pub fn read_document_from<R: Read>(mut reader: R, source_name: &str) -> Result<Value> {
    let mut content = vec![];
    reader
        .read_to_end(&mut content)
        .map_err(|source| Error::Input {
            source_name: source_name.to_string(),
            source,
        })?;

    parse_document(&content, source_name)
}

fn parse_document(content: &[u8], source_name: &str) -> Result<Value> {
    let value: Value = serde_json::from_slice(content).map_err(|source| Error::Parse {
        source_name: source_name.to_string(),
        source,
    })?;

    if !value.is_object() {
        return Err(Error::NotAnObject {
            source_name: source_name.to_string(),
            found: kind_of(&value),
        });
    }

    debug!("loaded document from {}", source_name);
    Ok(value)
}

/// Loads ignore paths from a file, one per line.
///
/// Lines are trimmed and blank lines skipped.
pub fn load_ignore_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let to_error = |source: io::Error| Error::IgnoreFile {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(to_error)?;
    let mut paths = vec![];

    for line in BufReader::new(file).lines() {
        let line = line.map_err(to_error)?;
        let line = line.trim();
        if !line.is_empty() {
            paths.push(line.to_string());
        }
    }

    debug!("loaded {} ignore paths from {}", paths.len(), path.display());
    Ok(paths)
}

/// Splits a comma-separated list of ignore paths. Entries are trimmed and
/// empty entries dropped.
///
/// ```
/// use json_compare::input::split_ignore_list;
///
/// assert_eq!(split_ignore_list("$.id, $.meta.updated,"), vec!["$.id", "$.meta.updated"]);
/// ```
pub fn split_ignore_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(String::from)
        .collect()
}

/// Assembles the ignore list: entries of the ignore file first, followed by
/// every inline comma-separated list in order.
pub fn ignore_paths<P, I>(ignore_file: Option<P>, inline: I) -> Result<Vec<String>>
where
    P: AsRef<Path>,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut paths = match ignore_file {
        Some(file) => load_ignore_file(file)?,
        None => vec![],
    };

    for list in inline {
        paths.extend(split_ignore_list(list.as_ref()));
    }

    Ok(paths)
}
