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

//! Platform resolution: turning a catalog plus observed facts into resolved
//! [`Platform`] values.

use crate::attributes::ExtractorLookup;
use crate::catalog::{Architecture, CatalogEntry, OperatingSystem};
use crate::error::{OsMatchError, Result};
use crate::inspector;
use crate::matcher::MatcherLookup;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;

/// A resolved platform.
///
/// Plain value type: two platforms with identical fields compare equal, no
/// matter how they were produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Platform {
    pub operating_system: String,
    pub architecture: String,
    pub distribution: Option<String>,
    pub version: Option<String>,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.operating_system, self.architecture)?;
        if let (Some(distribution), Some(version)) = (&self.distribution, &self.version) {
            write!(f, "|{distribution}|{version}")?;
        }
        Ok(())
    }
}

/// Outcome of [`Platform::detect`]: the resolved platform plus any
/// ambiguities that were collapsed along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub platform: Platform,
    pub notes: Vec<AmbiguityNote>,
}

/// The catalog level at which an ambiguity was diagnosed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Distribution,
    Version,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            Stage::Distribution => "distribution",
            Stage::Version => "version",
        };
        write!(f, "{stage}")
    }
}

/// Records one non-fatal ambiguity: several candidates at `stage` were
/// eligible at once, so the field (and everything below it) was left
/// unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguityNote {
    pub stage: Stage,
    pub candidates: Vec<String>,
}

impl fmt::Display for AmbiguityNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "more than one eligible {}: {:?}",
            self.stage, self.candidates
        )
    }
}

impl Platform {
    /// Detect the current platform.
    ///
    /// OS and architecture must resolve uniquely; anything else is an
    /// error. Distribution and version are best-effort: ambiguity at either
    /// level leaves the field and everything below it unset and records an
    /// [`AmbiguityNote`] instead.
    pub fn detect(
        catalog: &[OperatingSystem],
        extractors: &ExtractorLookup,
        matchers: &MatcherLookup,
    ) -> Result<Detection> {
        let os = inspector::match_one(extractors, matchers, catalog)?;
        let architecture = inspector::match_one(extractors, matchers, os.architectures())?;
        log::debug!("resolved {} on {}", os.name(), architecture.name());

        let mut notes = Vec::new();
        let distribution = resolve_unique(
            extractors,
            matchers,
            os.distributions(),
            Stage::Distribution,
            &mut notes,
        )?;
        let version = match distribution {
            Some(distribution) => resolve_unique(
                extractors,
                matchers,
                distribution.versions(),
                Stage::Version,
                &mut notes,
            )?,
            None => None,
        };

        Ok(Detection {
            platform: assemble(
                os,
                architecture,
                distribution.map(|d| d.name()),
                version.map(|v| v.name()),
            ),
            notes,
        })
    }

    /// Detect using the system-default extractor and matcher chains.
    pub fn detect_host(catalog: &[OperatingSystem]) -> Result<Detection> {
        Platform::detect(
            catalog,
            &ExtractorLookup::system_default(),
            &MatcherLookup::system_default(),
        )
    }

    /// Every plausible platform interpretation.
    ///
    /// OS and architecture still resolve strictly; every eligible
    /// distribution contributes one platform per eligible version (or one
    /// without a version when none of its versions is eligible). Sorted by
    /// descending version priority, input order breaking ties. With no
    /// eligible distribution at all, the single OS-and-architecture
    /// platform is returned.
    pub fn guess(
        catalog: &[OperatingSystem],
        extractors: &ExtractorLookup,
        matchers: &MatcherLookup,
    ) -> Result<Vec<Platform>> {
        let os = inspector::match_one(extractors, matchers, catalog)?;
        let architecture = inspector::match_one(extractors, matchers, os.architectures())?;

        let mut ranked: Vec<(i32, Platform)> = Vec::new();
        for distribution in inspector::matching(extractors, matchers, os.distributions())? {
            let versions = inspector::matching(extractors, matchers, distribution.versions())?;
            if versions.is_empty() {
                ranked.push((
                    0,
                    assemble(os, architecture, Some(distribution.name()), None),
                ));
            } else {
                for version in versions {
                    ranked.push((
                        version.priority(),
                        assemble(
                            os,
                            architecture,
                            Some(distribution.name()),
                            Some(version.name()),
                        ),
                    ));
                }
            }
        }

        if ranked.is_empty() {
            return Ok(vec![assemble(os, architecture, None, None)]);
        }

        // Stable sort keeps input order among equal priorities.
        ranked.sort_by_key(|(priority, _)| Reverse(*priority));
        Ok(ranked.into_iter().map(|(_, platform)| platform).collect())
    }

    /// Resolve a platform by name instead of by facts.
    ///
    /// Accepts `OS|ARCH` or `OS|ARCH|DISTRIBUTION|VERSION`. Each token must
    /// exactly match a declared catalog name at its nesting level; nothing
    /// is inferred.
    pub fn parse_override(catalog: &[OperatingSystem], text: &str) -> Result<Platform> {
        let tokens: Vec<&str> = text.split('|').collect();
        if tokens.len() != 2 && tokens.len() != 4 {
            return Err(OsMatchError::InvalidOverride(text.to_string()));
        }

        let os = lookup(catalog, tokens[0], "operating system")?;
        let architecture = lookup(os.architectures(), tokens[1], "architecture")?;

        let (distribution, version) = if tokens.len() == 4 {
            let distribution = lookup(os.distributions(), tokens[2], "distribution")?;
            let version = lookup(distribution.versions(), tokens[3], "version")?;
            (Some(distribution.name()), Some(version.name()))
        } else {
            (None, None)
        };

        Ok(assemble(os, architecture, distribution, version))
    }
}

fn assemble(
    os: &OperatingSystem,
    architecture: &Architecture,
    distribution: Option<&str>,
    version: Option<&str>,
) -> Platform {
    Platform {
        operating_system: os.name().to_string(),
        architecture: architecture.name().to_string(),
        distribution: distribution.map(str::to_string),
        version: version.map(str::to_string),
    }
}

fn resolve_unique<'a, T: CatalogEntry>(
    extractors: &ExtractorLookup,
    matchers: &MatcherLookup,
    candidates: &'a [T],
    stage: Stage,
    notes: &mut Vec<AmbiguityNote>,
) -> Result<Option<&'a T>> {
    let (found, ambiguity) = inspector::find(extractors, matchers, candidates)?;
    match ambiguity {
        Some(ambiguity) => {
            // Ambiguity collapses the field entirely; the caller can fall
            // back to `guess` for the full candidate set.
            notes.push(AmbiguityNote {
                stage,
                candidates: ambiguity.candidates,
            });
            Ok(None)
        }
        None => Ok(found),
    }
}

fn lookup<'a, T: CatalogEntry>(
    candidates: &'a [T],
    token: &str,
    position: &'static str,
) -> Result<&'a T> {
    candidates.iter().find(|c| c.name() == token).ok_or_else(|| {
        OsMatchError::UnknownOverrideToken {
            position,
            token: token.to_string(),
            alternatives: candidates.iter().map(|c| c.name().to_string()).collect(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(
        operating_system: &str,
        architecture: &str,
        distribution: Option<&str>,
        version: Option<&str>,
    ) -> Platform {
        Platform {
            operating_system: operating_system.to_string(),
            architecture: architecture.to_string(),
            distribution: distribution.map(str::to_string),
            version: version.map(str::to_string),
        }
    }

    #[test]
    fn equality_is_by_field_values() {
        let a = platform("Linux", "X86_64", Some("Ubuntu"), Some("Ubuntu_18_10"));
        let b = platform("Linux", "X86_64", Some("Ubuntu"), Some("Ubuntu_18_10"));
        assert_eq!(a, b);

        assert_ne!(a, platform("Linux", "X86_32", Some("Ubuntu"), Some("Ubuntu_18_10")));
        assert_ne!(a, platform("Linux", "X86_64", Some("Debian"), Some("Ubuntu_18_10")));
        assert_ne!(a, platform("Linux", "X86_64", Some("Ubuntu"), None));
        assert_ne!(a, platform("OS_X", "X86_64", Some("Ubuntu"), Some("Ubuntu_18_10")));
    }

    #[test]
    fn display_uses_the_override_grammar() {
        assert_eq!(
            platform("Linux", "X86_64", Some("CentOS"), Some("CentOS_7")).to_string(),
            "Linux|X86_64|CentOS|CentOS_7"
        );
        assert_eq!(platform("OS_X", "ARM_64", None, None).to_string(), "OS_X|ARM_64");
    }

    #[test]
    fn serializes_as_plain_names() {
        let json =
            serde_json::to_value(platform("Linux", "X86_64", Some("Ubuntu"), None)).unwrap();
        assert_eq!(json["operating_system"], "Linux");
        assert_eq!(json["architecture"], "X86_64");
        assert_eq!(json["distribution"], "Ubuntu");
        assert!(json["version"].is_null());
    }
}
