//! The built-in catalog: the operating systems, architectures and Linux
//! distributions the crate can tell apart out of the box.

use super::{Architecture, Distribution, OperatingSystem, Version};
use crate::attributes::{release_file, system_property};
use crate::matcher::{map_entry, match_pattern};
use crate::peculiarity::Peculiarity;
use std::sync::OnceLock;

pub const OS_RELEASE_PATH: &str = "/etc/os-release";
pub const LSB_RELEASE_PATH: &str = "/etc/lsb-release";
const CENTOS_RELEASE_PATH: &str = "/etc/centos-release";

/// The built-in catalog, constructed once.
pub fn common() -> &'static [OperatingSystem] {
    static CATALOG: OnceLock<Vec<OperatingSystem>> = OnceLock::new();
    CATALOG.get_or_init(build).as_slice()
}

fn build() -> Vec<OperatingSystem> {
    vec![
        OperatingSystem::new(
            "Linux",
            vec![os_name_matches("Linux")],
            common_architectures(),
            linux_distributions(),
        ),
        OperatingSystem::new(
            "Windows",
            vec![os_name_matches("Windows.*")],
            common_architectures(),
            vec![],
        ),
        OperatingSystem::new(
            "OS_X",
            vec![os_name_matches("Mac OS X|Darwin")],
            common_architectures(),
            vec![],
        ),
        OperatingSystem::new(
            "FreeBSD",
            vec![os_name_matches("FreeBSD")],
            common_architectures(),
            vec![],
        ),
        OperatingSystem::new(
            "Solaris",
            vec![os_name_matches("SunOS.*")],
            common_architectures(),
            vec![],
        ),
    ]
}

fn common_architectures() -> Vec<Architecture> {
    vec![
        Architecture::new("X86_32", vec![os_arch_matches("x86|i[3-6]86")]),
        Architecture::new("X86_64", vec![os_arch_matches("amd64|ia32e|x64|x86_64")]),
        Architecture::new("ARM_32", vec![os_arch_matches("arm|arm32|armv7l")]),
        Architecture::new("ARM_64", vec![os_arch_matches("aarch64|arm64")]),
    ]
}

fn linux_distributions() -> Vec<Distribution> {
    vec![
        Distribution::new(
            "Ubuntu",
            // Ubuntu hosts carry both files; either one settles it.
            vec![Peculiarity::one_of(vec![
                os_release_name_matches("Ubuntu"),
                Peculiarity::distinct(
                    release_file(LSB_RELEASE_PATH),
                    map_entry("DISTRIB_ID", "Ubuntu"),
                ),
            ])],
            ubuntu_versions(),
        ),
        Distribution::new(
            "Debian",
            vec![os_release_name_matches("Debian.*")],
            debian_versions(),
        ),
        Distribution::new(
            "CentOS",
            // The dedicated release file predates os-release; accept either.
            vec![Peculiarity::one_of(vec![
                release_name_matches(CENTOS_RELEASE_PATH, "CentOS.*"),
                release_name_matches(OS_RELEASE_PATH, "CentOS.*"),
            ])],
            centos_versions(),
        ),
        Distribution::new(
            "Amazon",
            vec![os_version_matches(".*amzn.*")],
            amazon_versions(),
        ),
    ]
}

fn ubuntu_versions() -> Vec<Version> {
    vec![
        ubuntu_version("Ubuntu_16_04", "16\\.04"),
        ubuntu_version("Ubuntu_18_04", "18\\.04"),
        ubuntu_version("Ubuntu_18_10", "18\\.10"),
        ubuntu_version("Ubuntu_20_04", "20\\.04"),
        ubuntu_version("Ubuntu_22_04", "22\\.04"),
        ubuntu_version("Ubuntu_24_04", "24\\.04"),
    ]
}

fn ubuntu_version(name: &'static str, version_pattern: &str) -> Version {
    Version::new(
        name,
        vec![release_version_matches(OS_RELEASE_PATH, version_pattern)],
    )
}

fn debian_versions() -> Vec<Version> {
    vec![
        Version::new(
            "Debian_11",
            vec![release_version_matches(OS_RELEASE_PATH, "11")],
        ),
        Version::new(
            "Debian_12",
            vec![release_version_matches(OS_RELEASE_PATH, "12")],
        ),
    ]
}

fn centos_versions() -> Vec<Version> {
    vec![
        centos_version("CentOS_6", "6"),
        centos_version("CentOS_7", "7"),
        centos_version("CentOS_8", "8"),
    ]
}

fn centos_version(name: &'static str, version_pattern: &str) -> Version {
    Version::new(
        name,
        vec![Peculiarity::one_of(vec![
            release_version_matches(CENTOS_RELEASE_PATH, version_pattern),
            release_version_matches(OS_RELEASE_PATH, version_pattern),
        ])],
    )
}

fn amazon_versions() -> Vec<Version> {
    // Kernel-version suffixes are a weak signal, hence the negative
    // priority: anything matched through a release file outranks these.
    vec![
        Version::with_priority("AmazonLinux", vec![os_version_matches(".*\\.amzn1\\..*")], -1),
        Version::with_priority("AmazonLinux2", vec![os_version_matches(".*\\.amzn2\\..*")], -1),
        Version::with_priority(
            "AmazonLinux2023",
            vec![os_version_matches(".*\\.amzn2023\\..*")],
            -1,
        ),
    ]
}

fn os_name_matches(pattern: &str) -> Peculiarity {
    Peculiarity::distinct(system_property("os.name"), match_pattern(pattern))
}

fn os_arch_matches(pattern: &str) -> Peculiarity {
    Peculiarity::distinct(system_property("os.arch"), match_pattern(pattern))
}

fn os_version_matches(pattern: &str) -> Peculiarity {
    Peculiarity::distinct(system_property("os.version"), match_pattern(pattern))
}

fn os_release_name_matches(pattern: &str) -> Peculiarity {
    release_name_matches(OS_RELEASE_PATH, pattern)
}

fn release_name_matches(path: &str, pattern: &str) -> Peculiarity {
    Peculiarity::distinct(release_file(path), map_entry("NAME", pattern))
}

fn release_version_matches(path: &str, pattern: &str) -> Peculiarity {
    Peculiarity::distinct(release_file(path), map_entry("VERSION_ID", pattern))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{Attribute, AttributeKind, AttributeValue, ExtractorLookup};
    use crate::catalog::CatalogEntry;
    use crate::inspector;
    use crate::matcher::MatcherLookup;

    fn os_arch_is(content: &'static str) -> ExtractorLookup {
        ExtractorLookup::with(AttributeKind::SystemProperty, move |attribute: &Attribute| {
            (attribute.name() == "os.arch").then(|| AttributeValue::text(content))
        })
        .join(ExtractorLookup::failing())
    }

    fn resolve_architecture(os_arch: &'static str) -> &'static str {
        inspector::match_one(
            &os_arch_is(os_arch),
            &MatcherLookup::system_default(),
            common()[0].architectures(),
        )
        .unwrap()
        .name()
    }

    #[test]
    fn detects_x86_64_for_every_alias() {
        for os_arch in ["amd64", "ia32e", "x64", "x86_64"] {
            assert_eq!(resolve_architecture(os_arch), "X86_64", "alias {os_arch}");
        }
    }

    #[test]
    fn detects_arm_64() {
        assert_eq!(resolve_architecture("aarch64"), "ARM_64");
    }

    #[test]
    fn detects_x86_32() {
        for os_arch in ["x86", "i386", "i686"] {
            assert_eq!(resolve_architecture(os_arch), "X86_32", "alias {os_arch}");
        }
    }

    #[test]
    fn every_os_has_the_common_architectures() {
        for os in common() {
            let names: Vec<&str> = os.architectures().iter().map(|a| a.name()).collect();
            assert_eq!(names, vec!["X86_32", "X86_64", "ARM_32", "ARM_64"]);
        }
    }

    #[test]
    fn only_linux_carries_distributions() {
        for os in common() {
            if os.name() == "Linux" {
                assert!(!os.distributions().is_empty());
            } else {
                assert!(os.distributions().is_empty(), "{}", os.name());
            }
        }
    }

    #[test]
    fn amazon_versions_are_weak_signals() {
        let amazon = common()[0]
            .distributions()
            .iter()
            .find(|d| d.name() == "Amazon")
            .unwrap();
        assert!(amazon.versions().iter().all(|v| v.priority() < 0));
    }
}
