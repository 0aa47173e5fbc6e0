//! Version storage backends
//!
//! A [Driver] persists a single semantic version and exposes the three
//! operations the pipeline resource needs: bump it, set it, or check
//! whether it is at least a given cursor.
//!
//! - [file::FileDriver]: stores the version in a plain text file
//! - [memory::MemoryDriver]: keeps the version in process memory
//!
//! Callers should depend on the [Driver] trait so backends stay
//! interchangeable.
//!
//! ```rust
//! # use semver_file::driver::Driver;
//! # use semver_file::domain::BumpInstruction;
//! # fn example<D: Driver>(driver: &D) -> semver_file::Result<()> {
//! let next = driver.bump(&BumpInstruction::Patch)?;
//! let found = driver.check(Some(&next))?;
//! assert_eq!(found, vec![next]);
//! # Ok(())
//! # }
//! ```

pub mod file;
pub mod memory;

pub use file::{FileDriver, StoredVersion};
pub use memory::MemoryDriver;

use crate::domain::{BumpInstruction, SemanticVersion};
use crate::error::Result;

/// Common storage operations for a tracked version.
///
/// Implementations perform no locking; concurrent writers race and the last
/// write wins.
pub trait Driver {
    /// Apply `bump` to the stored version (or the initial version when
    /// nothing is stored yet), persist and return the result.
    fn bump(&self, bump: &BumpInstruction) -> Result<SemanticVersion>;

    /// Persist `version` verbatim, discarding whatever was stored.
    fn set(&self, version: &SemanticVersion) -> Result<()>;

    /// Report the stored version if it is at least `cursor`.
    ///
    /// # Returns
    /// * `[initial]` - Nothing stored yet, regardless of `cursor`
    /// * `[current]` - `cursor` is absent or `current >= cursor`
    /// * `[]` - `cursor` is newer than the stored version
    fn check(&self, cursor: Option<&SemanticVersion>) -> Result<Vec<SemanticVersion>>;
}

/// Shared `check` rule for backends that can tell "nothing stored" apart
/// from a stored version.
pub(crate) fn versions_since(
    stored: Option<SemanticVersion>,
    initial: &SemanticVersion,
    cursor: Option<&SemanticVersion>,
) -> Vec<SemanticVersion> {
    match stored {
        None => vec![initial.clone()],
        Some(current) => match cursor {
            Some(cursor) if !current.is_at_least(cursor) => Vec::new(),
            _ => vec![current],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> SemanticVersion {
        SemanticVersion::parse(s).unwrap()
    }

    #[test]
    fn test_versions_since_absent_ignores_cursor() {
        let initial = v("0.0.1");
        assert_eq!(versions_since(None, &initial, None), vec![initial.clone()]);
        assert_eq!(
            versions_since(None, &initial, Some(&v("9.9.9"))),
            vec![initial.clone()]
        );
    }

    #[test]
    fn test_versions_since_cursor_comparison() {
        let initial = v("0.0.0");
        let current = v("1.2.3");
        assert_eq!(
            versions_since(Some(current.clone()), &initial, Some(&v("1.2.3"))),
            vec![current.clone()]
        );
        assert_eq!(
            versions_since(Some(current.clone()), &initial, Some(&v("1.0.0"))),
            vec![current.clone()]
        );
        assert!(versions_since(Some(current), &initial, Some(&v("1.2.4"))).is_empty());
    }
}
