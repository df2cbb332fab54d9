// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Longest strictly increasing subsequence.

use alloc::vec;
use alloc::vec::Vec;

/// Returns the positions (indices into `seq`) of a longest strictly increasing
/// subsequence of `seq`, in ascending order.
///
/// Runs in `O(n log n)` using patience sorting with predecessor links.
/// When several longest subsequences exist, any one of them may be returned;
/// callers must not depend on which.
///
/// ```
/// use thicket_keyed::longest_increasing_subsequence;
///
/// // Values 0, 2, 3 are increasing; 1 is out of place.
/// assert_eq!(longest_increasing_subsequence(&[0, 2, 1, 3]).len(), 3);
/// assert!(longest_increasing_subsequence::<u32>(&[]).is_empty());
/// ```
pub fn longest_increasing_subsequence<T: Ord>(seq: &[T]) -> Vec<usize> {
    // `tails[k]` is the position of the smallest tail among increasing runs of length `k + 1`.
    let mut tails: Vec<usize> = Vec::new();
    let mut predecessor: Vec<Option<usize>> = vec![None; seq.len()];

    for (i, value) in seq.iter().enumerate() {
        let len = tails.partition_point(|&t| seq[t] < *value);
        if len > 0 {
            predecessor[i] = Some(tails[len - 1]);
        }
        if len == tails.len() {
            tails.push(i);
        } else {
            tails[len] = i;
        }
    }

    let mut out = Vec::with_capacity(tails.len());
    let mut cursor = tails.last().copied();
    while let Some(i) = cursor {
        out.push(i);
        cursor = predecessor[i];
    }
    out.reverse();
    out
}
