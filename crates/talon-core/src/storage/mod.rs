//! Snapshot blob storage (atomic file write/read).
//!
//! Snapshots are single `rkyv` blobs written with a temp-file-then-rename
//! sequence so a crash mid-write never leaves a torn snapshot behind.

pub mod error;


pub use error::{StorageError, StorageResult};

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use rkyv::util::AlignedVec;

const TEMP_EXTENSION: &str = "tmp";

/// Writes `bytes` to `path` atomically (temp file, fsync, rename).
///
/// Parent directories are created as needed.
pub fn write_snapshot(path: &Path, bytes: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension(TEMP_EXTENSION);

    {
        let mut file = File::create(&temp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
    }

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Reads a snapshot into an aligned buffer suitable for `rkyv` access.
///
/// A missing file is reported as [`StorageError::NotFound`] so callers can
/// distinguish "no snapshot yet" from a real I/O failure.
pub fn read_snapshot(path: &Path) -> StorageResult<AlignedVec> {
    if !path.exists() {
        return Err(StorageError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path)?;

    let mut aligned = AlignedVec::new();
    aligned.extend_from_slice(&bytes);
    Ok(aligned)
}
