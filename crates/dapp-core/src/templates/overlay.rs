//! Directory overlay: recursive copy that overwrites but never deletes

use crate::error::{Result, ScaffoldError};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Copy the tree under `source` into `dest`.
///
/// Entries whose file name is in `excludes` are skipped together with their
/// whole subtree, at any depth. Existing files in `dest` are overwritten;
/// files only present in `dest` are left alone. Returns the number of files
/// copied.
pub fn overlay(source: &Path, dest: &Path, excludes: &HashSet<&str>) -> Result<usize> {
    fs::create_dir_all(dest).map_err(|e| ScaffoldError::io(dest, e))?;

    let walker = WalkDir::new(source)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry
                .file_name()
                .to_str()
                .map_or(true, |name| !excludes.contains(name))
        });

    let mut copied = 0;
    for entry in walker {
        let entry = entry.map_err(|e| walk_error(source, e))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| ScaffoldError::io(entry.path(), std::io::Error::other(e)))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| ScaffoldError::io(&target, e))?;
        } else {
            copy_file(entry.path(), &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Copy the files sitting directly inside `source` (no recursion)
pub fn overlay_files(source: &Path, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest).map_err(|e| ScaffoldError::io(dest, e))?;

    let mut copied = 0;
    for entry in WalkDir::new(source)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| walk_error(source, e))?;
        if !entry.file_type().is_dir() {
            copy_file(entry.path(), &dest.join(entry.file_name()))?;
            copied += 1;
        }
    }
    Ok(copied)
}

fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
    }
    fs::copy(from, to).map_err(|e| ScaffoldError::io(from, e))?;
    Ok(())
}

fn walk_error(source: &Path, err: walkdir::Error) -> ScaffoldError {
    let path = err.path().unwrap_or(source).to_path_buf();
    let io = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
    ScaffoldError::io(path, io)
}
