use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Single ASCII digit per component; `1.12.3` is rejected.
const VERSION_PATTERN: &str = r"^([0-9])\.([0-9])\.([0-9])$";

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VERSION_PATTERN).expect("Invalid regex"));

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a manifest version string (e.g., "1.2.3" -> Version(1,2,3))
    ///
    /// No prefix is stripped: "v1.2.3" is rejected.
    pub fn parse(version: &str) -> Result<Self> {
        let invalid = || ReleaseError::InvalidVersionFormat(version.to_string());

        let captures = VERSION_REGEX.captures(version).ok_or_else(invalid)?;
        let component = |index: usize| -> Result<u32> {
            captures
                .get(index)
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .ok_or_else(invalid)
        };

        Ok(Version {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
        })
    }

    /// Bump version according to bump type
    pub fn bump(&self, bump_type: VersionBump) -> Self {
        match bump_type {
            VersionBump::Major => Version {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            VersionBump::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            VersionBump::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Version bump type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

/// The three candidate versions offered to the operator.
///
/// Every candidate is bumped from the same current version; they are not
/// chained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextVersionSet {
    pub patch: Version,
    pub minor: Version,
    pub major: Version,
}

impl NextVersionSet {
    /// Build the candidate set from an already parsed version
    pub fn from_version(current: Version) -> Self {
        NextVersionSet {
            patch: current.bump(VersionBump::Patch),
            minor: current.bump(VersionBump::Minor),
            major: current.bump(VersionBump::Major),
        }
    }

    /// String forms ordered [patch, minor, major]
    pub fn list(&self) -> Vec<String> {
        vec![
            self.patch.to_string(),
            self.minor.to_string(),
            self.major.to_string(),
        ]
    }
}

/// Computes the patch, minor and major successors of `current`.
///
/// # Errors
/// * `ReleaseError::InvalidVersionFormat` - if `current` is not `D.D.D`
///
/// # Example
/// ```ignore
/// let next = compute_next_versions("1.4.2")?;
/// assert_eq!(next.list(), vec!["1.4.3", "1.5.0", "2.0.0"]);
/// ```
pub fn compute_next_versions(current: &str) -> Result<NextVersionSet> {
    Version::parse(current).map(NextVersionSet::from_version)
}
