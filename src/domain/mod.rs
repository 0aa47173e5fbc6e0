//! Domain logic - pure version rules independent of storage

pub mod bump;
pub mod prerelease;
pub mod version;

pub use bump::BumpInstruction;
pub use prerelease::PreReleaseLabel;
pub use version::{Identifier, SemanticVersion};
