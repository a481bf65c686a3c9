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

//! Recursive peculiarity evaluation and catalog filtering.

use crate::attributes::ExtractorLookup;
use crate::catalog::CatalogEntry;
use crate::error::{OsMatchError, Result};
use crate::matcher::MatcherLookup;
use crate::peculiarity::Peculiarity;

/// Evaluate one peculiarity against the observed facts.
///
/// The only errors are configuration defects surfaced by a `failing()`
/// chain terminal; an absent fact or an unclaimed kind on an open chain is
/// an ordinary non-match.
pub fn matches(
    extractors: &ExtractorLookup,
    matchers: &MatcherLookup,
    peculiarity: &Peculiarity,
) -> Result<bool> {
    match peculiarity {
        Peculiarity::Distinct { attribute, accepts } => {
            let value = extractors.extract(attribute)?;
            matchers.matches(value.as_ref(), accepts)
        }
        Peculiarity::OneOf(children) => {
            for child in children {
                if matches(extractors, matchers, child)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        Peculiarity::AllOf(children) => {
            for child in children {
                if !matches(extractors, matchers, child)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
    }
}

/// Conjunction over a variant's full peculiarity list; vacuously true when
/// the list is empty.
pub fn matches_all(
    extractors: &ExtractorLookup,
    matchers: &MatcherLookup,
    peculiarities: &[Peculiarity],
) -> Result<bool> {
    for peculiarity in peculiarities {
        if !matches(extractors, matchers, peculiarity)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Order-preserving filter: every candidate whose peculiarity list holds.
pub fn matching<'a, T: CatalogEntry>(
    extractors: &ExtractorLookup,
    matchers: &MatcherLookup,
    candidates: &'a [T],
) -> Result<Vec<&'a T>> {
    let mut eligible = Vec::new();
    for candidate in candidates {
        if matches_all(extractors, matchers, candidate.peculiarities())? {
            eligible.push(candidate);
        }
    }
    Ok(eligible)
}

/// Several candidates were eligible at once during a non-strict selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ambiguity {
    /// Every eligible candidate name, in input order.
    pub candidates: Vec<String>,
}

/// Non-strict selection.
///
/// Zero eligible candidates is none; several is the first in input order,
/// together with an [`Ambiguity`] naming all of them.
pub fn find<'a, T: CatalogEntry>(
    extractors: &ExtractorLookup,
    matchers: &MatcherLookup,
    candidates: &'a [T],
) -> Result<(Option<&'a T>, Option<Ambiguity>)> {
    let eligible = matching(extractors, matchers, candidates)?;
    let ambiguity = (eligible.len() > 1).then(|| Ambiguity {
        candidates: names(&eligible),
    });
    Ok((eligible.first().copied(), ambiguity))
}

/// Strict selection: exactly one eligible candidate, or a resolution error
/// carrying every name considered.
pub fn match_one<'a, T: CatalogEntry>(
    extractors: &ExtractorLookup,
    matchers: &MatcherLookup,
    candidates: &'a [T],
) -> Result<&'a T> {
    let eligible = matching(extractors, matchers, candidates)?;
    match eligible.as_slice() {
        [single] => Ok(single),
        [] => Err(OsMatchError::NoMatch {
            candidates: candidates.iter().map(|c| c.name().to_string()).collect(),
        }),
        several => Err(OsMatchError::AmbiguousMatch {
            matching: several.iter().map(|c| c.name().to_string()).collect(),
        }),
    }
}

fn names<T: CatalogEntry>(entries: &[&T]) -> Vec<String> {
    entries.iter().map(|e| e.name().to_string()).collect()
}
