// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Index of executables reachable through `$PATH`.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use super::distance::osa_distance;

/// Default maximum edit distance for command suggestions.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Candidates whose length differs from the query by more than this are
/// never considered.
const MAX_LENGTH_DIFFERENCE: usize = 2;

/// A suggested executable for a misspelled command name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'i> {
    pub name: &'i str,
    pub path: &'i Path,
    pub distance: usize,
}

/// Executable file names mapped to their canonical paths.
///
/// Built once from a `$PATH`-style list and read-only afterwards. When two
/// directories provide the same name, the earlier directory wins.
#[derive(Debug, Clone, Default)]
pub struct ExecutableIndex {
    entries: HashMap<String, PathBuf>,
}

impl ExecutableIndex {
    /// Build the index from a colon-separated directory list.
    ///
    /// Empty entries, missing directories and unreadable directories are
    /// skipped. Only regular files (after following symlinks) with an execute
    /// bit are kept.
    pub fn from_path_var(path: &OsStr) -> Self {
        let mut entries = HashMap::new();
        let mut directories = 0usize;

        for dir in std::env::split_paths(path) {
            if dir.as_os_str().is_empty() {
                continue;
            }
            let listing = match fs::read_dir(&dir) {
                Ok(listing) => listing,
                Err(e) => {
                    tracing::warn!(dir = %dir.display(), error = %e, "skipping PATH entry");
                    continue;
                }
            };
            directories += 1;

            for entry in listing.flatten() {
                let path = entry.path();
                if !is_executable(&path) {
                    continue;
                }
                let Some(name) = path.file_name().and_then(OsStr::to_str) else {
                    continue;
                };
                if entries.contains_key(name) {
                    continue;
                }
                let canonical = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
                entries.insert(name.to_string(), canonical);
            }
        }

        tracing::info!(
            executables = entries.len(),
            directories,
            "indexed executables"
        );
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an executable with exactly this name is indexed.
    pub fn exists(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Canonical path of the executable called `name`.
    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
    }

    /// The indexed name closest to `name`, if within `max_distance` edits.
    ///
    /// Names whose length differs from `name` by more than two characters
    /// are skipped. Equal distances are broken by name so the answer does not
    /// depend on hash order.
    pub fn closest(&self, name: &str, max_distance: usize) -> Option<Candidate<'_>> {
        let len = name.chars().count();
        self.iter()
            .filter(|(candidate, _)| {
                candidate.chars().count().abs_diff(len) <= MAX_LENGTH_DIFFERENCE
            })
            .map(|(candidate, path)| Candidate {
                name: candidate,
                path,
                distance: osa_distance(name, candidate),
            })
            .min_by(|a, b| (a.distance, a.name).cmp(&(b.distance, b.name)))
            .filter(|best| best.distance <= max_distance)
    }
}

impl FromIterator<(String, PathBuf)> for ExecutableIndex {
    /// Collect entries, keeping the first path seen for each name.
    fn from_iter<I: IntoIterator<Item = (String, PathBuf)>>(iter: I) -> Self {
        let mut entries = HashMap::new();
        for (name, path) in iter {
            entries.entry(name).or_insert(path);
        }
        Self { entries }
    }
}

#[cfg(unix)]
pub(crate) fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
pub(crate) fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
