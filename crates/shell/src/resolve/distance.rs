// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Optimal string alignment distance.

/// Edit distance between `a` and `b` counting insertions, deletions,
/// substitutions and transpositions of adjacent characters, each at cost 1.
/// No substring is edited more than once (the "restricted" Damerau variant).
///
/// Runs in O(n·m) time over characters and keeps three rows sized to the
/// shorter string.
///
/// ```
/// use cchell_shell::resolve::osa_distance;
///
/// assert_eq!(osa_distance("kitten", "sitting"), 3);
/// assert_eq!(osa_distance("sl", "ls"), 1);
/// assert_eq!(osa_distance("ca", "abc"), 3);
/// ```
pub fn osa_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    // The distance is symmetric, so iterate the longer string in the outer
    // loop and size the rows by the shorter one.
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let width = short.len() + 1;
    let mut before: Vec<usize> = vec![0; width];
    let mut prev: Vec<usize> = (0..width).collect();
    let mut curr: Vec<usize> = vec![0; width];

    for i in 1..=long.len() {
        curr[0] = i;
        for j in 1..width {
            let cost = usize::from(long[i - 1] != short[j - 1]);
            let mut best = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
            if i > 1 && j > 1 && long[i - 1] == short[j - 2] && long[i - 2] == short[j - 1] {
                best = best.min(before[j - 2] + 1);
            }
            curr[j] = best;
        }
        std::mem::swap(&mut before, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}
