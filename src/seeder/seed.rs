//! Placeholder creation
//!
//! This module performs the filesystem side of seeding: make sure the parent
//! directories exist, then write the payload only when nothing is already at
//! the target path.

use crate::error::{SeedError, SeedResult};
use std::fs;
use std::io;
use std::path::Path;

/// Outcome of a seeding attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// No file existed; the placeholder was written
    Created,

    /// A file was already at the target path and was left untouched
    AlreadyPresent,
}

/// Ensure a placeholder file exists at `path`
///
/// Parent directories are created recursively; creating an already-existing
/// tree is not an error. Any pre-existing file at `path`, whatever its
/// content, suppresses the write. The only failures are filesystem ones,
/// with permission errors surfaced as their own kind.
pub fn ensure_placeholder(path: &Path, payload: &[u8]) -> SeedResult<SeedOutcome> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| map_io_error(e, parent, true))?;
    }

    // Existence of any file short-circuits the write. The check-then-write
    // pair is not atomic against external writers, but the payload is a
    // constant default, so a duplicate write is harmless.
    if path.exists() {
        return Ok(SeedOutcome::AlreadyPresent);
    }

    fs::write(path, payload).map_err(|e| map_io_error(e, path, false))?;

    Ok(SeedOutcome::Created)
}

fn map_io_error(err: io::Error, path: &Path, creating_dir: bool) -> SeedError {
    if err.kind() == io::ErrorKind::PermissionDenied {
        return SeedError::PermissionDenied {
            path: path.to_path_buf(),
        };
    }
    if creating_dir {
        SeedError::CreateDir {
            path: path.to_path_buf(),
            source: err,
        }
    } else {
        SeedError::Write {
            path: path.to_path_buf(),
            source: err,
        }
    }
}
