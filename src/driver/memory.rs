use crate::domain::{BumpInstruction, SemanticVersion};
use crate::driver::{versions_since, Driver};
use crate::error::Result;
use std::cell::RefCell;

/// In-memory version store with the same semantics as the file backend
pub struct MemoryDriver {
    initial_version: SemanticVersion,
    stored: RefCell<Option<SemanticVersion>>,
}

impl MemoryDriver {
    /// Create an empty store that falls back to `initial_version`
    pub fn new(initial_version: SemanticVersion) -> Self {
        MemoryDriver {
            initial_version,
            stored: RefCell::new(None),
        }
    }

    /// Create a store that already holds `version`
    pub fn with_stored(initial_version: SemanticVersion, version: SemanticVersion) -> Self {
        MemoryDriver {
            initial_version,
            stored: RefCell::new(Some(version)),
        }
    }

    pub fn stored(&self) -> Option<SemanticVersion> {
        self.stored.borrow().clone()
    }
}

impl Default for MemoryDriver {
    fn default() -> Self {
        Self::new(SemanticVersion::default())
    }
}

impl Driver for MemoryDriver {
    fn bump(&self, bump: &BumpInstruction) -> Result<SemanticVersion> {
        let current = self
            .stored()
            .unwrap_or_else(|| self.initial_version.clone());
        let next = bump.apply(&current)?;
        *self.stored.borrow_mut() = Some(next.clone());
        Ok(next)
    }

    fn set(&self, version: &SemanticVersion) -> Result<()> {
        *self.stored.borrow_mut() = Some(version.clone());
        Ok(())
    }

    fn check(&self, cursor: Option<&SemanticVersion>) -> Result<Vec<SemanticVersion>> {
        Ok(versions_since(self.stored(), &self.initial_version, cursor))
    }
}
