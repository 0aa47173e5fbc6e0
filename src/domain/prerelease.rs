//! Pre-release label handling for semantic versioning
//!
//! A pre-release sequence such as `beta.3` is read as a label prefix (`beta`)
//! followed by an optional trailing numeric counter (`3`).
//! See https://semver.org/#spec-item-9

use crate::domain::version::Identifier;
use crate::error::{Result, SemverFileError};
use std::fmt;
use std::str::FromStr;

/// Validated pre-release label used by pre-release bumps.
///
/// A label is one or more dot-separated identifiers of `[0-9A-Za-z-]`.
/// Its last identifier may not be purely numeric, since that position
/// is reserved for the counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreReleaseLabel {
    identifiers: Vec<Identifier>,
}

impl PreReleaseLabel {
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    /// Whether `pre` carries this label as its non-numeric prefix.
    ///
    /// # Examples
    /// ```ignore
    /// let beta = PreReleaseLabel::parse("beta")?;
    /// assert!(beta.matches(&SemanticVersion::parse("1.0.0-beta.4")?.pre()));
    /// assert!(beta.matches(&SemanticVersion::parse("1.0.0-beta")?.pre()));
    /// assert!(!beta.matches(&SemanticVersion::parse("1.0.0-alpha.1")?.pre()));
    /// ```
    pub fn matches(&self, pre: &[Identifier]) -> bool {
        let (prefix, _) = split_counter(pre);
        prefix == self.identifiers.as_slice()
    }

    /// Build the pre-release sequence `<label>.<counter>`.
    pub fn with_counter(&self, counter: u64) -> Vec<Identifier> {
        let mut pre = self.identifiers.clone();
        pre.push(Identifier::Numeric(counter));
        pre
    }
}

impl FromStr for PreReleaseLabel {
    type Err = SemverFileError;

    fn from_str(s: &str) -> Result<Self> {
        let re = regex::Regex::new(r"^[0-9A-Za-z-]+(\.[0-9A-Za-z-]+)*$")
            .map_err(|e| SemverFileError::version(e.to_string()))?;
        if !re.is_match(s) {
            return Err(SemverFileError::version(format!(
                "Invalid pre-release label: '{}'",
                s
            )));
        }

        let identifiers = s
            .split('.')
            .map(|part| {
                if part.bytes().all(|b| b.is_ascii_digit()) {
                    part.parse::<u64>().map(Identifier::Numeric).map_err(|_| {
                        SemverFileError::version(format!(
                            "Numeric identifier out of range in label: '{}'",
                            s
                        ))
                    })
                } else {
                    Ok(Identifier::AlphaNumeric(part.to_string()))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        if matches!(identifiers.last(), Some(Identifier::Numeric(_))) {
            return Err(SemverFileError::version(format!(
                "Pre-release label must not end with a numeric identifier: '{}'",
                s
            )));
        }

        Ok(PreReleaseLabel { identifiers })
    }
}

impl fmt::Display for PreReleaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.identifiers.iter().map(|id| id.to_string()).collect();
        f.write_str(&parts.join("."))
    }
}

/// Split a pre-release sequence into its prefix and trailing numeric counter.
///
/// `beta.2` -> (`beta`, Some(2)); `beta` -> (`beta`, None); `7` -> (``, Some(7))
pub fn split_counter(pre: &[Identifier]) -> (&[Identifier], Option<u64>) {
    match pre.split_last() {
        Some((Identifier::Numeric(n), prefix)) => (prefix, Some(*n)),
        _ => (pre, None),
    }
}
