// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typo correction for filesystem paths.

use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};

use super::distance::osa_distance;

enum Step {
    Parent,
    Name(OsString),
}

/// Find the existing path that looks most like `path`.
///
/// Walks the path one segment at a time, starting at `/` for absolute paths
/// and at `base` otherwise. At each level the directory child with the
/// smallest edit distance to the segment is taken; `.` segments are skipped
/// and `..` is followed as written. Gives up when a directory cannot be
/// listed or is empty, when the best child is more than `2 + 2 * segments`
/// edits away, or when an intermediate segment is not a directory.
///
/// The result is relative to `base` when it lies below it. Filesystem errors
/// are reported as no match.
pub fn closest_path(path: &Path, base: &Path) -> Option<PathBuf> {
    let mut current = if path.is_absolute() {
        PathBuf::from("/")
    } else {
        base.to_path_buf()
    };

    let steps: Vec<Step> = path
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(Step::Name(name.to_os_string())),
            Component::ParentDir => Some(Step::Parent),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => None,
        })
        .collect();

    let segments = steps.iter().filter(|s| matches!(s, Step::Name(_))).count();
    if segments == 0 {
        return None;
    }
    let threshold = 2 + 2 * segments;
    let mut remaining = segments;

    for step in &steps {
        let name = match step {
            Step::Parent => {
                current.push("..");
                continue;
            }
            Step::Name(name) => name.to_string_lossy(),
        };

        let (closest, distance) = closest_child(&current, &name)?;
        if distance > threshold {
            tracing::debug!(segment = %name, distance, threshold, "no close path segment");
            return None;
        }
        current.push(closest);

        remaining -= 1;
        if remaining > 0 && !current.is_dir() {
            return None;
        }
    }

    match current.strip_prefix(base) {
        Ok(relative) => Some(relative.to_path_buf()),
        Err(_) => Some(current),
    }
}

/// The child of `dir` closest to `segment`, with its distance.
fn closest_child(dir: &Path, segment: &str) -> Option<(OsString, usize)> {
    let listing = fs::read_dir(dir).ok()?;
    let mut best: Option<(usize, OsString)> = None;

    for entry in listing.flatten() {
        let name = entry.file_name();
        let distance = osa_distance(&name.to_string_lossy(), segment);
        let better = match &best {
            None => true,
            Some((d, n)) => (distance, &name) < (*d, n),
        };
        if better {
            best = Some((distance, name));
        }
        if distance == 0 {
            break;
        }
    }

    best.map(|(distance, name)| (name, distance))
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
