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

//! Observable fact sources and the extractor dispatch chain.

mod extractor;
mod system;

pub use extractor::{AttributeExtractor, ExtractorLookup};
pub use system::{ReleaseFileReader, SystemPropertyReader};

use crate::types::ReleaseFile;
use std::fmt;

/// Typed handle naming one observable fact source.
///
/// Equality is by identity (kind plus key), never by the value the fact
/// currently has. Attributes are constructed once, in catalog declarations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// A named system fact such as `os.name`, `os.arch` or `os.version`.
    SystemProperty { name: String },
    /// A text file at a fixed path, parsed into key/value entries.
    ReleaseFile { path: String },
}

impl Attribute {
    pub fn kind(&self) -> AttributeKind {
        match self {
            Attribute::SystemProperty { .. } => AttributeKind::SystemProperty,
            Attribute::ReleaseFile { .. } => AttributeKind::ReleaseFile,
        }
    }

    /// The identifying key: the property name or the file path.
    pub fn name(&self) -> &str {
        match self {
            Attribute::SystemProperty { name } => name,
            Attribute::ReleaseFile { path } => path,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::SystemProperty { name } => write!(f, "system property '{name}'"),
            Attribute::ReleaseFile { path } => write!(f, "release file '{path}'"),
        }
    }
}

/// The dispatch key of the extractor chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    SystemProperty,
    ReleaseFile,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            AttributeKind::SystemProperty => "system property",
            AttributeKind::ReleaseFile => "release file",
        };
        write!(f, "{kind}")
    }
}

/// An observed fact value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Text(String),
    Map(ReleaseFile),
}

impl AttributeValue {
    pub fn text(value: impl Into<String>) -> Self {
        AttributeValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => Some(text),
            AttributeValue::Map(_) => None,
        }
    }

    pub fn as_map(&self) -> Option<&ReleaseFile> {
        match self {
            AttributeValue::Map(map) => Some(map),
            AttributeValue::Text(_) => None,
        }
    }
}

/// A system-property fact handle.
pub fn system_property(name: &str) -> Attribute {
    Attribute::SystemProperty {
        name: name.to_string(),
    }
}

/// A release-file fact handle.
pub fn release_file(path: &str) -> Attribute {
    Attribute::ReleaseFile {
        path: path.to_string(),
    }
}
