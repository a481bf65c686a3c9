// Copyright 2025 osmatch developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OsMatchError {
    /// A peculiarity references an attribute kind no extractor chain link
    /// claims. The catalog and the registered lookups are out of sync.
    #[error("no extractor registered for {kind} attributes (while reading {attribute})")]
    UnhandledAttribute { kind: String, attribute: String },

    /// A peculiarity references a match kind no matcher chain link claims.
    #[error("no matcher registered for {kind} matches")]
    UnhandledMatch { kind: String },

    #[error("no match out of {candidates:?}")]
    NoMatch { candidates: Vec<String> },

    #[error("more than one match: {matching:?}")]
    AmbiguousMatch { matching: Vec<String> },

    #[error("invalid override '{0}': expected 'OS|ARCH' or 'OS|ARCH|DISTRIBUTION|VERSION'")]
    InvalidOverride(String),

    #[error("unknown {position} '{token}', expected one of {alternatives:?}")]
    UnknownOverrideToken {
        position: &'static str,
        token: String,
        alternatives: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, OsMatchError>;
