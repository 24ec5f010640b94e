//! Recursive file discovery, exclusion filtering, and directory creation.
//!
//! [`walk`] enumerates the regular files under a root directory and returns
//! root-relative paths with `/` separators. A missing root is not an error —
//! it yields an empty list, so optional directories (a site with no helpers,
//! say) just contribute nothing. If the configured directory is merely
//! *wrong*, discovery still succeeds empty and the failure surfaces later as
//! a missing partial or helper at render time.
//!
//! ## Traversal Order
//!
//! Collision resolution depends on traversal order, so the order is pinned:
//!
//! - entries at each level are sorted lexicographically by name
//! - a directory's own files precede any file in its subdirectories
//! - subdirectories are visited in sorted order, depth first
//!
//! ## Junk Filtering
//!
//! OS and editor clutter never reaches a registry: dotfiles (`.DS_Store`,
//! `.git`, swap files), `Thumbs.db` and friends, `__MACOSX`, and `~` backup
//! files are skipped, whether file or directory.
//!
//! ## Symlink Cycles
//!
//! Directories are tracked by canonical path; a symlink loop is visited once
//! and then ignored, so the walk always terminates.

use log::debug;
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Clutter filenames skipped in addition to dotfiles and `~` backups.
const JUNK_NAMES: &[&str] = &[
    "Thumbs.db",
    "ehthumbs.db",
    "Desktop.ini",
    "desktop.ini",
    "$RECYCLE.BIN",
    "__MACOSX",
    "npm-debug.log",
];

fn is_junk(name: &str) -> bool {
    name.starts_with('.') || name.ends_with('~') || JUNK_NAMES.contains(&name)
}

/// Recursively enumerate regular files under `root` as root-relative paths.
///
/// Returns an empty vector when `root` does not exist. Any other filesystem
/// failure (unreadable directory, permission error) is fatal.
pub fn walk(root: &Path) -> io::Result<Vec<String>> {
    if !root.exists() {
        debug!("directory does not exist, skipping: {}", root.display());
        return Ok(Vec::new());
    }

    let mut visited = HashSet::new();
    let mut files = Vec::new();
    walk_dir(root, root, &mut visited, &mut files)?;
    Ok(files)
}

fn walk_dir(
    dir: &Path,
    root: &Path,
    visited: &mut HashSet<PathBuf>,
    files: &mut Vec<String>,
) -> io::Result<()> {
    // Symlink loops resolve to an already-seen canonical path
    let canonical = fs::canonicalize(dir)?;
    if !visited.insert(canonical) {
        debug!("already visited, skipping: {}", dir.display());
        return Ok(());
    }

    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .map(|n| !is_junk(&n.to_string_lossy()))
                .unwrap_or(false)
        })
        .collect();
    entries.sort();

    // Own files first, then subdirectories — later entries overwrite earlier
    // ones on name collision, so this order is part of the contract
    for entry in &entries {
        if entry.is_file() {
            files.push(relative_string(entry, root));
        }
    }
    for entry in &entries {
        if entry.is_dir() {
            walk_dir(entry, root, visited, files)?;
        }
    }
    Ok(())
}

/// Root-relative path with `/` separators, regardless of platform.
fn relative_string(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap()
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Drop every path whose exact string appears in `excludes`.
///
/// Identity when the set is empty. Exact match only — no globs, no prefix
/// matching. Only page discovery applies this today.
pub fn filter(paths: Vec<String>, excludes: &BTreeSet<String>) -> Vec<String> {
    if excludes.is_empty() {
        return paths;
    }
    let kept: Vec<String> = paths
        .into_iter()
        .filter(|path| !excludes.contains(path))
        .collect();
    debug!("after exclusion filter: {kept:?}");
    kept
}

/// Create a directory and any missing parents.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
