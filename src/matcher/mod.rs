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

//! Acceptance specs and the matcher dispatch chain.

mod lookup;

pub use lookup::{MatcherLookup, ValueMatcher};

use regex::Regex;
use std::fmt;

/// Value-kind-specific acceptance spec for an observed fact.
#[derive(Debug, Clone)]
pub enum Match {
    /// The observed text value must fully match the pattern.
    Pattern(Regex),
    /// The observed release-file map must hold `key`, whose value must
    /// fully match the pattern.
    MapEntry { key: String, value: Regex },
}

impl Match {
    pub fn kind(&self) -> MatchKind {
        match self {
            Match::Pattern(_) => MatchKind::Pattern,
            Match::MapEntry { .. } => MatchKind::MapEntry,
        }
    }
}

/// The dispatch key of the matcher chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Pattern,
    MapEntry,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            MatchKind::Pattern => "pattern",
            MatchKind::MapEntry => "map entry",
        };
        write!(f, "{kind}")
    }
}

/// Full-match acceptance over a text fact.
///
/// # Panics
///
/// Panics if `pattern` is not a valid regular expression. Patterns are
/// catalog constants, so an invalid one is a defect caught at catalog
/// construction.
pub fn match_pattern(pattern: &str) -> Match {
    Match::Pattern(full_match(pattern))
}

/// Full-match acceptance over one release-file entry.
///
/// # Panics
///
/// Panics if `value_pattern` is not a valid regular expression.
pub fn map_entry(key: &str, value_pattern: &str) -> Match {
    Match::MapEntry {
        key: key.to_string(),
        value: full_match(value_pattern),
    }
}

// Anchoring makes `is_match` a whole-value test.
fn full_match(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{pattern})$"))
        .expect("catalog pattern must be a valid regular expression")
}
