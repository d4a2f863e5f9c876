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

use std::io;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};

use json_compare::input;
use json_compare::{Error, JsonCompare};

#[doc(hidden)]
#[macro_export]
macro_rules! handle_error {
    ($code:expr, $msg:expr, $($arg:tt)*) => {
        println!($msg, $($arg)*);
        std::process::exit($code);
    };

    ($code:expr, $msg:expr) => {
        println!($msg);
        std::process::exit($code);
    };
}

#[doc(hidden)]
struct Code;

impl Code {
    const SUCCESS: i32 = 0;
    const FAILURE: i32 = 1;
}

const USAGE: &str =
    "Usage: json-compare [-i <ignore-file>] [-d <ignore-paths>] [-p] <file1.json> <file2.json>";

#[doc(hidden)]
#[derive(Debug, Parser)]
#[command(name = "json-compare", version, about, long_about = None, disable_version_flag = true)]
struct Cli {
    /// JSON files to compare, only the second one when reading from standard input
    #[clap(value_name = "FILE", num_args = 1..=2, required = true)]
    files: Vec<PathBuf>,

    /// File containing paths to ignore during comparison, one per line
    #[clap(short, long)]
    ignore_file: Option<PathBuf>,

    /// Comma-separated paths to ignore during comparison, can be specified multiple times
    #[clap(short = 'd', long = "ignore")]
    ignore: Vec<String>,

    /// Read the first JSON document from standard input
    #[clap(short = 'p', long = "stdin")]
    stdin: bool,

    /// Print the version of the tool
    #[clap(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

#[doc(hidden)]
fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{}", err);
                std::process::exit(Code::SUCCESS);
            }
            _ => {
                handle_error!(Code::FAILURE, "{}", err);
            }
        },
    };

    let expected_files = if cli.stdin { 1 } else { 2 };
    if cli.files.len() != expected_files {
        handle_error!(Code::FAILURE, "{}", USAGE);
    }

    let (first, second) = if cli.stdin {
        (
            input::read_document_from(io::stdin().lock(), input::STDIN),
            input::read_document(&cli.files[0]),
        )
    } else {
        (
            input::read_document(&cli.files[0]),
            input::read_document(&cli.files[1]),
        )
    };

    let (first, second) = match (first, second) {
        (Ok(first), Ok(second)) => (first, second),
        (Err(err), _) | (_, Err(err)) => {
            handle_error!(Code::FAILURE, "Error: {}", err);
        }
    };

    let ignore_paths = match input::ignore_paths(cli.ignore_file.as_ref(), &cli.ignore) {
        Ok(paths) => paths,
        Err(err) => {
            handle_error!(Code::FAILURE, "Error loading ignore file: {}", err);
        }
    };

    println!("Comparing JSON files with ignore paths: {:?}", ignore_paths);

    let compare = JsonCompare::new().with_ignore_paths(ignore_paths);

    match compare.compare(first, second) {
        Ok(()) => {
            println!("JSON files are equal.");
            std::process::exit(Code::SUCCESS);
        }
        Err(err) => {
            println!("Comparison failed: {}", err);
            if let Error::NotEqual { differences } = &err {
                for difference in differences {
                    println!("{}", difference);
                }
            }
            std::process::exit(Code::FAILURE);
        }
    }
}
