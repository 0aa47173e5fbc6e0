use crate::domain::prerelease::{split_counter, PreReleaseLabel};
use crate::domain::version::SemanticVersion;
use crate::error::{Result, SemverFileError};
use std::fmt;
use std::str::FromStr;

/// How to derive the successor of a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpInstruction {
    Major,
    Minor,
    Patch,
    Final,
    PreRelease(PreReleaseLabel),
}

impl BumpInstruction {
    /// Build an instruction from pipeline-style `bump` / `pre` parameters.
    ///
    /// `bump` is one of `major`, `minor`, `patch`, `final` or `pre`; a `pre`
    /// label alone (or with `bump = "pre"`) selects a pre-release bump.
    /// Exactly one instruction results, so a numeric bump combined with a
    /// label is rejected.
    pub fn from_params(bump: Option<&str>, pre: Option<&str>) -> Result<Self> {
        let bump = bump.map(str::trim).filter(|b| !b.is_empty());
        let pre = pre.map(str::trim).filter(|p| !p.is_empty());

        match (bump.map(str::to_lowercase).as_deref(), pre) {
            (None, None) => Err(SemverFileError::version("No bump specified")),
            (None | Some("pre"), Some(label)) => {
                Ok(BumpInstruction::PreRelease(PreReleaseLabel::parse(label)?))
            }
            (Some("pre"), None) => Err(SemverFileError::version(
                "Pre-release bump requires a label",
            )),
            (Some(kind), None) => kind.parse(),
            (Some(kind), Some(label)) => Err(SemverFileError::version(format!(
                "Cannot combine '{}' bump with pre-release label '{}'",
                kind, label
            ))),
        }
    }

    /// Apply the instruction to `current`.
    ///
    /// - **Major**: `(major + 1, 0, 0)`
    /// - **Minor**: `(major, minor + 1, 0)`
    /// - **Patch**: a pre-release becomes its own release, otherwise `patch + 1`
    /// - **Final**: drops the pre-release, keeps everything else
    /// - **PreRelease**: advances the counter of a matching label; a different
    ///   label restarts at `.1` on the same triple; a release gets `patch + 1`
    ///   and `<label>.1`
    ///
    /// Every variant except `Final` clears build metadata.
    ///
    /// Fails with a version error when a component or counter would pass
    /// `u64::MAX`.
    ///
    /// # Example
    /// ```ignore
    /// let v = SemanticVersion::parse("1.2.3-beta.1")?;
    /// assert_eq!(BumpInstruction::Patch.apply(&v)?.to_string(), "1.2.3");
    /// assert_eq!(BumpInstruction::Major.apply(&v)?.to_string(), "2.0.0");
    /// ```
    pub fn apply(&self, current: &SemanticVersion) -> Result<SemanticVersion> {
        let (major, minor, patch) = (current.major, current.minor, current.patch);
        let next = match self {
            BumpInstruction::Major => {
                SemanticVersion::new(increment(major, "major", current)?, 0, 0)
            }
            BumpInstruction::Minor => {
                SemanticVersion::new(major, increment(minor, "minor", current)?, 0)
            }
            BumpInstruction::Patch => {
                let patch = if current.is_prerelease() {
                    patch
                } else {
                    increment(patch, "patch", current)?
                };
                SemanticVersion::new(major, minor, patch)
            }
            BumpInstruction::Final => SemanticVersion {
                pre: Vec::new(),
                ..current.clone()
            },
            BumpInstruction::PreRelease(label) => {
                if label.matches(&current.pre) {
                    let next = match split_counter(&current.pre).1 {
                        Some(n) => increment(n, "pre-release counter", current)?,
                        None => 1,
                    };
                    SemanticVersion {
                        pre: label.with_counter(next),
                        ..SemanticVersion::new(major, minor, patch)
                    }
                } else if current.is_prerelease() {
                    // Switching labels stays on the same release line
                    SemanticVersion {
                        pre: label.with_counter(1),
                        ..SemanticVersion::new(major, minor, patch)
                    }
                } else {
                    SemanticVersion {
                        pre: label.with_counter(1),
                        ..SemanticVersion::new(major, minor, increment(patch, "patch", current)?)
                    }
                }
            }
        };
        Ok(next)
    }
}

fn increment(value: u64, component: &str, current: &SemanticVersion) -> Result<u64> {
    value.checked_add(1).ok_or_else(|| {
        SemverFileError::version(format!(
            "Cannot bump {} of '{}': value would overflow",
            component, current
        ))
    })
}

impl FromStr for BumpInstruction {
    type Err = SemverFileError;

    /// Accepts `major`, `minor`, `patch`, `final` and `pre:<label>`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Some(label) = trimmed
            .strip_prefix("pre:")
            .or_else(|| trimmed.strip_prefix("PRE:"))
        {
            return Ok(BumpInstruction::PreRelease(PreReleaseLabel::parse(label)?));
        }

        match trimmed.to_lowercase().as_str() {
            "major" => Ok(BumpInstruction::Major),
            "minor" => Ok(BumpInstruction::Minor),
            "patch" => Ok(BumpInstruction::Patch),
            "final" => Ok(BumpInstruction::Final),
            _ => Err(SemverFileError::version(format!(
                "Unknown bump '{}': expected major, minor, patch, final or pre:<label>",
                s
            ))),
        }
    }
}

impl fmt::Display for BumpInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpInstruction::Major => write!(f, "major"),
            BumpInstruction::Minor => write!(f, "minor"),
            BumpInstruction::Patch => write!(f, "patch"),
            BumpInstruction::Final => write!(f, "final"),
            BumpInstruction::PreRelease(label) => write!(f, "pre:{}", label),
        }
    }
}
