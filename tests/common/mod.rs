//! Shared fixtures: fake fact chains standing in for a real host.

use osmatch::attributes::{Attribute, AttributeKind, AttributeValue, ExtractorLookup};
use osmatch::matcher::MatcherLookup;
use osmatch::types::ReleaseFile;

/// Facts describing one imagined host.
#[derive(Default, Clone)]
pub struct Host {
    pub os_name: Option<&'static str>,
    pub os_arch: Option<&'static str>,
    pub os_version: Option<&'static str>,
    /// Contents of `/etc/os-release`, if the file exists.
    pub os_release: Option<&'static str>,
}

impl Host {
    /// An extractor chain serving exactly these facts, terminated by
    /// `failing()` so an unregistered attribute kind cannot slip through.
    pub fn extractors(&self) -> ExtractorLookup {
        let facts = self.clone();
        let properties =
            ExtractorLookup::with(AttributeKind::SystemProperty, move |attribute: &Attribute| {
                let value = match attribute.name() {
                    "os.name" => facts.os_name,
                    "os.arch" => facts.os_arch,
                    "os.version" => facts.os_version,
                    _ => None,
                };
                value.map(AttributeValue::text)
            });

        let os_release = self.os_release;
        let files = ExtractorLookup::with(AttributeKind::ReleaseFile, move |attribute: &Attribute| {
            match (attribute.name(), os_release) {
                ("/etc/os-release", Some(content)) => {
                    Some(AttributeValue::Map(ReleaseFile::parse(content)))
                }
                _ => None,
            }
        });

        properties.join(files).join(ExtractorLookup::failing())
    }
}

pub fn matchers() -> MatcherLookup {
    MatcherLookup::system_default()
}
