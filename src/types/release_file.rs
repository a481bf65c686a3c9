use std::collections::BTreeMap;

/// Parsed contents of a `KEY=VALUE` release file.
///
/// Covers both the os-release shape (`NAME`, `VERSION_ID`, ...) and the
/// lsb-release shape (`DISTRIB_ID`, `DISTRIB_RELEASE`, `DISTRIB_CODENAME`,
/// `DISTRIB_DESCRIPTION`); the two formats parse identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseFile {
    entries: BTreeMap<String, String>,
}

impl ReleaseFile {
    /// Parse release-file text.
    ///
    /// Blank lines, `#` comments and lines without a `=` are skipped;
    /// surrounding single or double quotes around values are stripped.
    pub fn parse(content: &str) -> Self {
        let mut entries = BTreeMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            entries.insert(key.to_string(), unquote(value.trim()).to_string());
        }
        ReleaseFile { entries }
    }

    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn unquote(value: &str) -> &str {
    if value.len() >= 2 {
        let quoted = (value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\''));
        if quoted {
            return &value[1..value.len() - 1];
        }
    }
    value
}
