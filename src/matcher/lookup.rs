use super::{Match, MatchKind};
use crate::attributes::AttributeValue;
use crate::error::{OsMatchError, Result};

/// Strategy testing an observed value (possibly absent) against a [`Match`].
///
/// Implemented for closures so tests can fake acceptance rules.
pub trait ValueMatcher {
    fn matches(&self, value: Option<&AttributeValue>, spec: &Match) -> bool;
}

impl<F> ValueMatcher for F
where
    F: Fn(Option<&AttributeValue>, &Match) -> bool,
{
    fn matches(&self, value: Option<&AttributeValue>, spec: &Match) -> bool {
        self(value, spec)
    }
}

/// Full-match of a text value against the spec's pattern. Absent values and
/// non-text values never match.
struct PatternMatcher;

impl ValueMatcher for PatternMatcher {
    fn matches(&self, value: Option<&AttributeValue>, spec: &Match) -> bool {
        match (value.and_then(AttributeValue::as_text), spec) {
            (Some(text), Match::Pattern(pattern)) => pattern.is_match(text),
            _ => false,
        }
    }
}

/// Full-match of one release-file entry. A missing key, an absent value or
/// a non-map value never matches.
struct MapEntryMatcher;

impl ValueMatcher for MapEntryMatcher {
    fn matches(&self, value: Option<&AttributeValue>, spec: &Match) -> bool {
        match (value.and_then(AttributeValue::as_map), spec) {
            (Some(map), Match::MapEntry { key, value: pattern }) => map
                .value_of(key)
                .is_some_and(|entry| pattern.is_match(entry)),
            _ => false,
        }
    }
}

enum Link {
    Handler {
        kind: MatchKind,
        matcher: Box<dyn ValueMatcher>,
    },
    Failing,
}

/// Ordered dispatch chain resolving "how to test this fact" by match kind.
///
/// Same composition rules as the extractor chain: `join` tries the left
/// chain first, the first link claiming a kind wins, and a reached
/// [`failing`](Self::failing) terminal is a configuration defect.
pub struct MatcherLookup {
    links: Vec<Link>,
}

impl MatcherLookup {
    /// A one-link chain handling the given match kind.
    pub fn with(kind: MatchKind, matcher: impl ValueMatcher + 'static) -> Self {
        MatcherLookup {
            links: vec![Link::Handler {
                kind,
                matcher: Box::new(matcher),
            }],
        }
    }

    /// A terminal chain treating any match spec reaching it as a
    /// configuration defect.
    pub fn failing() -> Self {
        MatcherLookup {
            links: vec![Link::Failing],
        }
    }

    /// Chain `self` before `other`.
    pub fn join(mut self, other: MatcherLookup) -> Self {
        self.links.extend(other.links);
        self
    }

    /// The chain covering every built-in match kind.
    pub fn system_default() -> Self {
        MatcherLookup::with(MatchKind::Pattern, PatternMatcher)
            .join(MatcherLookup::with(MatchKind::MapEntry, MapEntryMatcher))
            .join(MatcherLookup::failing())
    }

    /// Apply the matcher registered for the spec's kind.
    ///
    /// A chain that runs out of links without a terminal resolves to a
    /// non-match.
    pub fn matches(&self, value: Option<&AttributeValue>, spec: &Match) -> Result<bool> {
        for link in &self.links {
            match link {
                Link::Handler { kind, matcher } if *kind == spec.kind() => {
                    return Ok(matcher.matches(value, spec));
                }
                Link::Handler { .. } => {}
                Link::Failing => {
                    return Err(OsMatchError::UnhandledMatch {
                        kind: spec.kind().to_string(),
                    });
                }
            }
        }
        Ok(false)
    }
}
