//! Shared test utilities for the hbt test suite.
//!
//! Tests build their fixture workspaces in temp directories: a
//! [`BuildConfig`] whose five roots live under one `TempDir`, and a file
//! writer that creates parent directories on the way.

use crate::config::BuildConfig;
use std::fs;
use std::path::Path;

/// Write `contents` at `root/rel`, creating parent directories as needed.
pub fn write_file(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
}

/// A [`BuildConfig`] rooted under `base`, with the default layout:
/// `partials/`, `content/`, `helpers/`, `pages/`, `public/`.
///
/// Only `pages/` is created eagerly; the other roots appear when a test
/// writes into them, so missing-directory behavior stays testable.
pub fn test_config(base: &Path) -> BuildConfig {
    let config = BuildConfig {
        output_dir: base.join("public"),
        helpers_dir: base.join("helpers"),
        data_dir: base.join("content"),
        partials_dir: base.join("partials"),
        pages_dir: base.join("pages"),
        ..BuildConfig::default()
    };
    fs::create_dir_all(&config.pages_dir).unwrap();
    config
}
