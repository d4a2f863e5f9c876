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

use std::fmt::Display;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::json_diff::StructuralError;

/// Which of the two compared documents an error refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Document {
    First,
    Second,
}

impl Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Document::First => write!(f, "first"),
            Document::Second => write!(f, "second"),
        }
    }
}

/// Error type for a comparison run.
#[derive(Debug, Error)]
pub enum Error {
    /// A document could not be read from a file or standard input.
    #[error("failed to read {source_name}: {source}")]
    Input {
        source_name: String,
        #[source]
        source: io::Error,
    },
    /// A document is not valid JSON.
    #[error("failed to parse JSON from {source_name}: {source}")]
    Parse {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },
    /// A document is valid JSON but its top-level value is not an object.
    #[error("failed to parse JSON from {source_name}: expected an object, found {found}")]
    NotAnObject {
        source_name: String,
        found: &'static str,
    },
    /// The ignore file could not be read.
    #[error("failed to read ignore file {}: {source}", .path.display())]
    IgnoreFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// An ignore path could not be applied to one of the documents.
    #[error("failed removing fields from {document} document: {source}")]
    Removal {
        document: Document,
        #[source]
        source: StructuralError,
    },
    /// The documents differ once the ignored fields are removed.
    #[error("documents not equal")]
    NotEqual { differences: Vec<String> },
}

pub type Result<T> = std::result::Result<T, Error>;
