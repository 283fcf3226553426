// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fuzzy lookup of executables and paths.
//!
//! - [`osa_distance`]: the edit distance used everywhere
//! - [`ExecutableIndex`]: `$PATH` executables with nearest-name lookup
//! - [`closest_path`]: segment-by-segment correction of filesystem paths
//! - [`Resolver`]: the index plus the directory relative paths start from

mod distance;
mod index;
mod walker;

use std::path::{Path, PathBuf};

pub use distance::osa_distance;
pub use index::{Candidate, ExecutableIndex, DEFAULT_MAX_DISTANCE};
pub(crate) use index::is_executable;
pub use walker::closest_path;

/// Everything command resolution needs to look things up.
#[derive(Debug, Clone)]
pub struct Resolver<'i> {
    index: &'i ExecutableIndex,
    base: PathBuf,
    max_distance: usize,
}

impl<'i> Resolver<'i> {
    /// Resolve against `index`, with relative paths starting at `base`.
    pub fn new(index: &'i ExecutableIndex, base: impl Into<PathBuf>) -> Self {
        Self {
            index,
            base: base.into(),
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }

    /// Override the maximum edit distance for command suggestions.
    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub fn index(&self) -> &'i ExecutableIndex {
        self.index
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// Nearest indexed command to `name`.
    pub fn suggest_command(&self, name: &str) -> Option<Candidate<'i>> {
        self.index.closest(name, self.max_distance)
    }

    /// Nearest existing path to `path`, relative to the base directory.
    pub fn suggest_path(&self, path: &Path) -> Option<PathBuf> {
        closest_path(path, &self.base)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Create an empty file with mode 0755.
    pub fn make_executable(dir: &Path, name: &str) -> PathBuf {
        let path = make_file(dir, name);
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }
        path
    }

    /// Create an empty, non-executable file.
    pub fn make_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
        }
        path
    }
}
