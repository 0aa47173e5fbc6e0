use crate::config::StoreConfig;
use crate::domain::{BumpInstruction, SemanticVersion};
use crate::driver::{versions_since, Driver};
use crate::error::{ReadFailure, Result, SemverFileError};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Outcome of reading the version file.
///
/// A missing file is a normal first-run state, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredVersion {
    Absent,
    Found(SemanticVersion),
}

impl StoredVersion {
    pub fn into_option(self) -> Option<SemanticVersion> {
        match self {
            StoredVersion::Absent => None,
            StoredVersion::Found(version) => Some(version),
        }
    }
}

/// Version store backed by a single text file.
///
/// The file holds one canonical version string followed by a newline.
#[derive(Debug, Clone)]
pub struct FileDriver {
    config: StoreConfig,
}

impl FileDriver {
    pub fn new(config: StoreConfig) -> Self {
        FileDriver { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Read the version stored at the read path.
    pub fn read_version(&self) -> Result<StoredVersion> {
        read_version_file(self.config.read_path())
    }

    /// Write `version` to the write path, creating parent directories.
    pub fn write_version(&self, version: &SemanticVersion) -> Result<()> {
        write_version_file(self.config.write_path(), version)
    }
}

impl Driver for FileDriver {
    fn bump(&self, bump: &BumpInstruction) -> Result<SemanticVersion> {
        let current = match self.read_version()? {
            StoredVersion::Found(version) => version,
            StoredVersion::Absent => {
                debug!(initial = %self.config.initial_version, "no stored version, using initial");
                self.config.initial_version.clone()
            }
        };

        let next = bump.apply(&current)?;
        self.write_version(&next)?;
        info!(from = %current, to = %next, %bump, "bumped version");

        Ok(next)
    }

    fn set(&self, version: &SemanticVersion) -> Result<()> {
        self.write_version(version)?;
        info!(%version, "set version");
        Ok(())
    }

    fn check(&self, cursor: Option<&SemanticVersion>) -> Result<Vec<SemanticVersion>> {
        let stored = self.read_version()?.into_option();
        Ok(versions_since(
            stored,
            &self.config.initial_version,
            cursor,
        ))
    }
}

/// Read a version from `path`.
///
/// # Returns
/// * `Ok(StoredVersion::Absent)` - `path` does not exist
/// * `Ok(StoredVersion::Found(..))` - The first whitespace-delimited token parsed
/// * `Err(Read)` - Any other open/read failure, an empty file, or malformed content
pub fn read_version_file(path: &Path) -> Result<StoredVersion> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "version file absent");
            return Ok(StoredVersion::Absent);
        }
        Err(e) => return Err(SemverFileError::read(path, e)),
    };

    let token = contents
        .split_whitespace()
        .next()
        .ok_or_else(|| SemverFileError::read(path, ReadFailure::Empty))?;

    let version = SemanticVersion::parse(token).map_err(|e| {
        SemverFileError::read(
            path,
            ReadFailure::Malformed {
                content: token.to_string(),
                reason: e.to_string(),
            },
        )
    })?;

    debug!(path = %path.display(), %version, "read version file");
    Ok(StoredVersion::Found(version))
}

/// Replace the contents of `path` with `version` and a trailing newline.
///
/// The new contents go to a temporary sibling which is then renamed over
/// `path`, so readers see either the old file or the complete new one.
pub fn write_version_file(path: &Path, version: &SemanticVersion) -> Result<()> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(|e| SemverFileError::write(path, e))?;
            parent
        }
        None => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(|e| SemverFileError::write(path, e))?;
    staged
        .write_all(format!("{}\n", version).as_bytes())
        .and_then(|_| staged.as_file().sync_all())
        .map_err(|e| SemverFileError::write(path, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(staged.path(), fs::Permissions::from_mode(0o644))
            .map_err(|e| SemverFileError::write(path, e))?;
    }

    staged
        .persist(path)
        .map_err(|e| SemverFileError::write(path, e.error))?;

    debug!(path = %path.display(), %version, "wrote version file");
    Ok(())
}
