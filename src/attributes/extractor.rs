use super::{Attribute, AttributeKind, AttributeValue, ReleaseFileReader, SystemPropertyReader};
use crate::error::{OsMatchError, Result};

/// Strategy turning a concrete [`Attribute`] into an observed value.
///
/// Absence (missing file, unset property) is `None`, never an error.
/// Implemented for closures so tests can fake facts.
pub trait AttributeExtractor {
    fn extract(&self, attribute: &Attribute) -> Option<AttributeValue>;
}

impl<F> AttributeExtractor for F
where
    F: Fn(&Attribute) -> Option<AttributeValue>,
{
    fn extract(&self, attribute: &Attribute) -> Option<AttributeValue> {
        self(attribute)
    }
}

enum Link {
    Handler {
        kind: AttributeKind,
        extractor: Box<dyn AttributeExtractor>,
    },
    /// Terminal link: reaching it means the catalog references an attribute
    /// kind no registered link claims.
    Failing,
}

/// Ordered dispatch chain resolving "how to read this fact" by attribute
/// kind.
///
/// Composing chains with [`join`](ExtractorLookup::join) tries the left
/// chain first; the first link claiming a kind wins.
pub struct ExtractorLookup {
    links: Vec<Link>,
}

impl ExtractorLookup {
    /// A one-link chain handling the given attribute kind.
    pub fn with(kind: AttributeKind, extractor: impl AttributeExtractor + 'static) -> Self {
        ExtractorLookup {
            links: vec![Link::Handler {
                kind,
                extractor: Box::new(extractor),
            }],
        }
    }

    /// A terminal chain treating any attribute reaching it as a
    /// configuration defect.
    pub fn failing() -> Self {
        ExtractorLookup {
            links: vec![Link::Failing],
        }
    }

    /// Chain `self` before `other`.
    pub fn join(mut self, other: ExtractorLookup) -> Self {
        self.links.extend(other.links);
        self
    }

    /// The chain reading real host facts, ending in
    /// [`failing`](Self::failing).
    pub fn system_default() -> Self {
        ExtractorLookup::with(AttributeKind::SystemProperty, SystemPropertyReader)
            .join(ExtractorLookup::with(
                AttributeKind::ReleaseFile,
                ReleaseFileReader,
            ))
            .join(ExtractorLookup::failing())
    }

    /// Observe the attribute's value.
    ///
    /// `Ok(None)` covers both an absent fact and a chain that ran out of
    /// links without a terminal; only a reached
    /// [`failing`](Self::failing) terminal is an error.
    pub fn extract(&self, attribute: &Attribute) -> Result<Option<AttributeValue>> {
        for link in &self.links {
            match link {
                Link::Handler { kind, extractor } if *kind == attribute.kind() => {
                    return Ok(extractor.extract(attribute));
                }
                Link::Handler { .. } => {}
                Link::Failing => {
                    return Err(OsMatchError::UnhandledAttribute {
                        kind: attribute.kind().to_string(),
                        attribute: attribute.to_string(),
                    });
                }
            }
        }
        log::trace!("no extractor claims {attribute}");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{release_file, system_property};

    fn os_name_is(content: &str) -> ExtractorLookup {
        let content = content.to_string();
        ExtractorLookup::with(AttributeKind::SystemProperty, move |attribute: &Attribute| {
            (attribute.name() == "os.name").then(|| AttributeValue::text(content.clone()))
        })
    }

    #[test]
    fn handler_claims_its_kind() {
        let lookup = os_name_is("Linux");

        let value = lookup.extract(&system_property("os.name")).unwrap();
        assert_eq!(value, Some(AttributeValue::text("Linux")));
    }

    #[test]
    fn claimed_kind_with_absent_fact_is_none() {
        let lookup = os_name_is("Linux");

        let value = lookup.extract(&system_property("os.version")).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn open_chain_without_handler_is_none() {
        let lookup = os_name_is("Linux");

        let value = lookup.extract(&release_file("/etc/os-release")).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn failing_terminal_rejects_unclaimed_kind() {
        let lookup = os_name_is("Linux").join(ExtractorLookup::failing());

        let result = lookup.extract(&release_file("/etc/os-release"));
        assert!(matches!(
            result,
            Err(OsMatchError::UnhandledAttribute { .. })
        ));
    }

    #[test]
    fn first_registered_link_wins() {
        let lookup = os_name_is("first").join(os_name_is("second"));

        let value = lookup.extract(&system_property("os.name")).unwrap();
        assert_eq!(value, Some(AttributeValue::text("first")));
    }

    #[test]
    fn later_link_handles_what_earlier_links_skip() {
        let lookup = os_name_is("Linux")
            .join(ExtractorLookup::with(
                AttributeKind::ReleaseFile,
                |_: &Attribute| Some(AttributeValue::text("claimed")),
            ))
            .join(ExtractorLookup::failing());

        let value = lookup.extract(&release_file("/etc/os-release")).unwrap();
        assert_eq!(value, Some(AttributeValue::text("claimed")));
    }
}
