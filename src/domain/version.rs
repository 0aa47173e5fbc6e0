use crate::error::{Result, SemverFileError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A single dot-separated pre-release identifier.
///
/// Variant order matters: numeric identifiers always have lower precedence
/// than alphanumeric ones, so the derived `Ord` is the semver ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identifier {
    Numeric(u64),
    AlphaNumeric(String),
}

impl Identifier {
    fn parse(s: &str) -> Result<Self> {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            let n = s.parse::<u64>().map_err(|_| {
                SemverFileError::version(format!("Numeric identifier out of range: '{}'", s))
            })?;
            Ok(Identifier::Numeric(n))
        } else {
            Ok(Identifier::AlphaNumeric(s.to_string()))
        }
    }

    pub fn as_numeric(&self) -> Option<u64> {
        match self {
            Identifier::Numeric(n) => Some(*n),
            Identifier::AlphaNumeric(_) => None,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => f.write_str(s),
        }
    }
}

/// Semantic version with pre-release and build metadata.
///
/// Equality is structural (build metadata included). Use
/// [`SemanticVersion::cmp_precedence`] when build metadata must be ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SemanticVersion {
    pub(crate) major: u64,
    pub(crate) minor: u64,
    pub(crate) patch: u64,
    pub(crate) pre: Vec<Identifier>,
    pub(crate) build: Vec<String>,
}

impl SemanticVersion {
    /// Create a release version with no pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            pre: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Parse a canonical semver string such as `1.4.0-beta.2+build.7`.
    ///
    /// Surrounding whitespace is ignored; a `v` prefix is not accepted.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let parsed = semver::Version::parse(trimmed).map_err(|e| {
            SemverFileError::version(format!("Invalid version '{}': {}", trimmed, e))
        })?;

        let pre = if parsed.pre.is_empty() {
            Vec::new()
        } else {
            parsed
                .pre
                .as_str()
                .split('.')
                .map(Identifier::parse)
                .collect::<Result<Vec<_>>>()?
        };

        let build = if parsed.build.is_empty() {
            Vec::new()
        } else {
            parsed.build.as_str().split('.').map(String::from).collect()
        };

        Ok(SemanticVersion {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            pre,
            build,
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre(&self) -> &[Identifier] {
        &self.pre
    }

    pub fn build(&self) -> &[String] {
        &self.build
    }

    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }

    /// Compare by semver precedence, ignoring build metadata.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (self.pre.is_empty(), other.pre.is_empty()) {
                (true, true) => Ordering::Equal,
                // A release outranks any of its pre-releases
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => self.pre.cmp(&other.pre),
            })
    }

    /// True when this version has precedence greater than or equal to `cursor`.
    pub fn is_at_least(&self, cursor: &SemanticVersion) -> bool {
        self.cmp_precedence(cursor) != Ordering::Less
    }
}

impl Default for SemanticVersion {
    fn default() -> Self {
        SemanticVersion::new(0, 0, 0)
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_precedence(other)
            .then_with(|| self.build.cmp(&other.build))
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        for (i, id) in self.pre.iter().enumerate() {
            f.write_str(if i == 0 { "-" } else { "." })?;
            write!(f, "{}", id)?;
        }
        for (i, id) in self.build.iter().enumerate() {
            f.write_str(if i == 0 { "+" } else { "." })?;
            f.write_str(id)?;
        }
        Ok(())
    }
}

impl FromStr for SemanticVersion {
    type Err = SemverFileError;

    fn from_str(s: &str) -> Result<Self> {
        SemanticVersion::parse(s)
    }
}

impl TryFrom<String> for SemanticVersion {
    type Error = SemverFileError;

    fn try_from(value: String) -> Result<Self> {
        SemanticVersion::parse(&value)
    }
}

impl From<SemanticVersion> for String {
    fn from(version: SemanticVersion) -> Self {
        version.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> SemanticVersion {
        SemanticVersion::parse(s).unwrap()
    }

    #[test]
    fn test_version_parse() {
        let version = v("1.2.3");
        assert_eq!(version, SemanticVersion::new(1, 2, 3));
        assert!(!version.is_prerelease());
    }

    #[test]
    fn test_version_parse_prerelease_and_build() {
        let version = v("1.4.0-beta.2+exp.sha.5114f85");
        assert_eq!(
            version.pre,
            vec![
                Identifier::AlphaNumeric("beta".to_string()),
                Identifier::Numeric(2)
            ]
        );
        assert_eq!(version.build, vec!["exp", "sha", "5114f85"]);
    }

    #[test]
    fn test_accessors() {
        let version = v("3.2.1-rc.4+sha.9");
        assert_eq!((version.major(), version.minor(), version.patch()), (3, 2, 1));
        assert_eq!(version.pre()[1], Identifier::Numeric(4));
        assert_eq!(version.build(), ["sha", "9"]);
    }

    #[test]
    fn test_version_parse_trims_whitespace() {
        assert_eq!(v("  0.0.1\n"), SemanticVersion::new(0, 0, 1));
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(SemanticVersion::parse("not-a-version").is_err());
        assert!(SemanticVersion::parse("1.2").is_err());
        assert!(SemanticVersion::parse("v1.2.3").is_err());
        assert!(SemanticVersion::parse("1.2.3-01").is_err());
        assert!(SemanticVersion::parse("").is_err());
    }

    #[test]
    fn test_version_parse_numeric_overflow() {
        assert!(SemanticVersion::parse("1.0.0-99999999999999999999999").is_err());
    }

    #[test]
    fn test_version_display_is_canonical() {
        for s in ["1.2.3", "1.2.3-beta.1", "1.2.3+build.01", "0.0.0-rc.1.x-y+meta"] {
            assert_eq!(v(s).to_string(), s);
        }
    }

    #[test]
    fn test_precedence_chain() {
        let ordered = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
            "2.0.0",
            "2.1.0",
            "2.1.1",
        ];
        for pair in ordered.windows(2) {
            assert_eq!(
                v(pair[0]).cmp_precedence(&v(pair[1])),
                Ordering::Less,
                "{} should precede {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_precedence_ignores_build_metadata() {
        let a = v("1.0.0+a");
        let b = v("1.0.0+b");
        assert_eq!(a.cmp_precedence(&b), Ordering::Equal);
        assert_ne!(a, b);
        assert!(a.is_at_least(&b));
        assert!(b.is_at_least(&a));
    }

    #[test]
    fn test_is_at_least() {
        assert!(v("1.2.3").is_at_least(&v("1.2.3")));
        assert!(v("1.2.3").is_at_least(&v("1.2.3-rc.1")));
        assert!(!v("1.2.3-rc.1").is_at_least(&v("1.2.3")));
    }

    #[test]
    fn test_serde_as_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            version: SemanticVersion,
        }
        let w: Wrapper = toml::from_str("version = \"1.2.3-beta.1\"").unwrap();
        assert_eq!(w.version, v("1.2.3-beta.1"));

        let bad: std::result::Result<Wrapper, _> = toml::from_str("version = \"nope\"");
        assert!(bad.is_err());
    }
}
