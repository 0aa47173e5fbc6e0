pub mod cli;
pub mod config;
pub mod domain;
pub mod driver;
pub mod error;
pub mod logging;
pub mod ui;

pub use domain::{BumpInstruction, SemanticVersion};
pub use driver::{Driver, FileDriver};
pub use error::{ErrorKind, ReadFailure, Result, SemverFileError};
