//! Version parsing and minimum-version comparison.
//!
//! Runtimes report versions in many shapes (`v22.1.0`, `Python 3.11.4`,
//! `ruby 3.2.2p53`). [`Version::parse`] takes the first dotted number run it
//! finds. Components missing from a minimum are not compared, so a minimum of
//! `20` accepts any `20.x`.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)(?:\.(\d+))?(?:\.(\d+))?").expect("valid version regex"));

/// A parsed `major[.minor[.patch]]` version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
}

/// Error returned when no version number can be found in a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse a version from '{0}'")]
pub struct VersionParseError(pub String);

impl Version {
    /// The first version-looking token in `input`, as written.
    pub fn find(input: &str) -> Option<&str> {
        VERSION_PATTERN.find(input).map(|m| m.as_str())
    }

    /// Extract the first version-looking token from `input`.
    pub fn parse(input: &str) -> Result<Self, VersionParseError> {
        let caps = VERSION_PATTERN
            .captures(input)
            .ok_or_else(|| VersionParseError(input.trim().to_string()))?;

        let component = |idx: usize| -> Result<Option<u64>, VersionParseError> {
            caps.get(idx)
                .map(|m| m.as_str().parse::<u64>())
                .transpose()
                .map_err(|_| VersionParseError(input.trim().to_string()))
        };

        let major = component(1)?.ok_or_else(|| VersionParseError(input.trim().to_string()))?;
        Ok(Self {
            major,
            minor: component(2)?,
            patch: component(3)?,
        })
    }

    /// Whether this version satisfies `minimum`.
    ///
    /// Only the components present in `minimum` take part in the comparison;
    /// a component missing from `self` counts as zero.
    pub fn meets(&self, minimum: &Version) -> bool {
        let ours = [
            self.major,
            self.minor.unwrap_or(0),
            self.patch.unwrap_or(0),
        ];
        let theirs = [Some(minimum.major), minimum.minor, minimum.patch];

        for (o, t) in ours.iter().zip(theirs.iter()) {
            let Some(t) = t else { break };
            if o > t {
                return true;
            }
            if o < t {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;
        if let Some(minor) = self.minor {
            write!(f, ".{}", minor)?;
            if let Some(patch) = self.patch {
                write!(f, ".{}", patch)?;
            }
        }
        Ok(())
    }
}
