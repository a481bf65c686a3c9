//! Extractors reading real host facts.

use super::{Attribute, AttributeExtractor, AttributeValue};
use crate::types::ReleaseFile;
use std::fs;

/// Reads the `os.name`, `os.arch` and `os.version` facts from the host.
///
/// Unknown property names yield no value.
pub struct SystemPropertyReader;

impl AttributeExtractor for SystemPropertyReader {
    fn extract(&self, attribute: &Attribute) -> Option<AttributeValue> {
        match attribute.name() {
            "os.name" => Some(AttributeValue::text(os_name())),
            "os.arch" => Some(AttributeValue::text(std::env::consts::ARCH)),
            // Kernel version, e.g. "5.15.0-141-generic" or
            // "4.14.256-197.484.amzn2.x86_64".
            "os.version" => sysinfo::System::kernel_version().map(AttributeValue::text),
            _ => None,
        }
    }
}

/// Maps the compile-time target OS to the `os.name` vocabulary the catalog
/// patterns are written against.
fn os_name() -> &'static str {
    match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "Mac OS X",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        "solaris" | "illumos" => "SunOS",
        other => other,
    }
}

/// Reads and parses a release file.
///
/// A missing or unreadable file is an absent fact, not an error.
pub struct ReleaseFileReader;

impl AttributeExtractor for ReleaseFileReader {
    fn extract(&self, attribute: &Attribute) -> Option<AttributeValue> {
        let bytes = fs::read(attribute.name()).ok()?;
        let content = String::from_utf8_lossy(&bytes);
        Some(AttributeValue::Map(ReleaseFile::parse(&content)))
    }
}
