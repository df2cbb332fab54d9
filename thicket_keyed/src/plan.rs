// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed edit plan between two sibling sequences.
//!
//! ## Overview
//!
//! [`plan`] matches the keys of a previous and a next sibling sequence and
//! classifies every next entry:
//!
//! - [`Source::New`]: no previous counterpart; the entry must be created and inserted.
//! - [`Source::Kept`]: matched, and part of the longest increasing run of previous
//!   indices; the entry is already in the right relative order and must not move.
//! - [`Source::Moved`]: matched, but out of order; the entry must be repositioned.
//!
//! Previous entries with no counterpart are listed in [`Plan::removed`].
//!
//! ## Applying a plan
//!
//! Walk the next sequence from right to left and place every `New` or `Moved`
//! entry immediately before the entry to its right (or at the end when it is
//! last). The right neighbour is always already in its final position when it
//! is used as an anchor, and `Kept` entries are never touched, so the number of
//! moves equals `matched - |LIS|`.
//!
//! ## Duplicate keys
//!
//! Keys must be unique per sequence. Violations are reported in
//! [`Plan::duplicates`] and resolved first-match-wins: a later previous duplicate
//! is never matched (it ends up in [`Plan::removed`]), and a later next duplicate
//! is treated as [`Source::New`].

use alloc::collections::BTreeMap;
use alloc::collections::btree_map::Entry;
use alloc::vec;
use alloc::vec::Vec;

use crate::lis::longest_increasing_subsequence;

/// Where a next entry comes from, and whether it has to be repositioned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// No previous entry carries this key.
    New,
    /// Matched previous entry that is already in the right relative order.
    Kept {
        /// Index of the matched entry in the previous sequence.
        prev: usize,
    },
    /// Matched previous entry that must be moved.
    Moved {
        /// Index of the matched entry in the previous sequence.
        prev: usize,
    },
}

impl Source {
    /// Index of the matched previous entry, if any.
    pub fn prev(self) -> Option<usize> {
        match self {
            Self::New => None,
            Self::Kept { prev } | Self::Moved { prev } => Some(prev),
        }
    }
}

/// Which of the two sequences a duplicate key was found in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// The previous sequence.
    Previous,
    /// The next sequence.
    Next,
}

/// A key that occurs more than once within one sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Duplicate {
    /// Sequence the duplicate was found in.
    pub side: Side,
    /// Index of the ignored occurrence.
    pub index: usize,
    /// Index of the first occurrence, which wins.
    pub first: usize,
}

/// Edit plan for one sibling list. Produced by [`plan`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Plan {
    sources: Vec<Source>,
    removed: Vec<usize>,
    duplicates: Vec<Duplicate>,
}

impl Plan {
    /// One entry per next index.
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Previous indices with no counterpart in the next sequence, ascending.
    pub fn removed(&self) -> &[usize] {
        &self.removed
    }

    /// Key uniqueness violations, in discovery order.
    pub fn duplicates(&self) -> &[Duplicate] {
        &self.duplicates
    }

    /// Matched pairs as `(next, prev)`, in next order.
    pub fn matched(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.sources
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.prev().map(|j| (i, j)))
    }

    /// Number of entries that must be created.
    pub fn insert_count(&self) -> usize {
        self.sources
            .iter()
            .filter(|s| matches!(s, Source::New))
            .count()
    }

    /// Number of matched entries that must be repositioned.
    pub fn move_count(&self) -> usize {
        self.sources
            .iter()
            .filter(|s| matches!(s, Source::Moved { .. }))
            .count()
    }

    /// True if applying the plan requires no insertion, move, or removal.
    pub fn is_structurally_unchanged(&self) -> bool {
        self.removed.is_empty()
            && self
                .sources
                .iter()
                .all(|s| matches!(s, Source::Kept { .. }))
    }
}

/// Compute the keyed edit plan from `previous` keys to `next` keys.
///
/// ```
/// use thicket_keyed::{plan, Source};
///
/// let p = plan(&["a", "b", "c"], &["c", "a", "b"]);
/// assert_eq!(p.move_count(), 1);
/// assert_eq!(p.sources()[0], Source::Moved { prev: 2 });
/// assert!(p.removed().is_empty());
/// ```
pub fn plan<K: Ord>(previous: &[K], next: &[K]) -> Plan {
    let mut duplicates = Vec::new();

    let mut lookup: BTreeMap<&K, usize> = BTreeMap::new();
    for (j, key) in previous.iter().enumerate() {
        match lookup.entry(key) {
            Entry::Vacant(v) => {
                v.insert(j);
            }
            Entry::Occupied(o) => duplicates.push(Duplicate {
                side: Side::Previous,
                index: j,
                first: *o.get(),
            }),
        }
    }

    let mut sources = Vec::with_capacity(next.len());
    let mut claimed = vec![false; previous.len()];
    let mut matched_next = Vec::new();
    let mut matched_prev = Vec::new();
    let mut seen: BTreeMap<&K, usize> = BTreeMap::new();

    for (i, key) in next.iter().enumerate() {
        match seen.entry(key) {
            Entry::Vacant(v) => {
                v.insert(i);
            }
            Entry::Occupied(o) => {
                duplicates.push(Duplicate {
                    side: Side::Next,
                    index: i,
                    first: *o.get(),
                });
                sources.push(Source::New);
                continue;
            }
        }
        match lookup.get(key) {
            Some(&j) => {
                claimed[j] = true;
                matched_next.push(i);
                matched_prev.push(j);
                sources.push(Source::Moved { prev: j });
            }
            None => sources.push(Source::New),
        }
    }

    for p in longest_increasing_subsequence(&matched_prev) {
        sources[matched_next[p]] = Source::Kept {
            prev: matched_prev[p],
        };
    }

    let removed = claimed
        .iter()
        .enumerate()
        .filter_map(|(j, &c)| (!c).then_some(j))
        .collect();

    Plan {
        sources,
        removed,
        duplicates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Apply `plan` to `previous` using the right-to-left anchoring rule and
    /// return the resulting order plus the number of moves issued.
    fn simulate(previous: &[&'static str], next: &[&'static str]) -> (Vec<&'static str>, usize) {
        let p = plan(previous, next);
        let mut list: Vec<&'static str> = previous.to_vec();
        let mut moves = 0;
        for i in (0..next.len()).rev() {
            let anchor = next.get(i + 1).copied();
            match p.sources()[i] {
                Source::Kept { .. } => continue,
                Source::Moved { prev } => {
                    let item = previous[prev];
                    let at = list.iter().position(|x| *x == item).unwrap();
                    list.remove(at);
                    moves += 1;
                }
                Source::New => {}
            }
            let at = match anchor {
                Some(a) => list.iter().position(|x| *x == a).unwrap(),
                None => list.len(),
            };
            list.insert(at, next[i]);
        }
        for &j in p.removed() {
            let at = list.iter().position(|x| *x == previous[j]).unwrap();
            list.remove(at);
        }
        (list, moves)
    }

    #[test]
    fn rotation_moves_one() {
        let p = plan(&["a", "b", "c"], &["c", "a", "b"]);
        assert_eq!(
            p.sources(),
            &[
                Source::Moved { prev: 2 },
                Source::Kept { prev: 0 },
                Source::Kept { prev: 1 },
            ]
        );
        assert_eq!(p.insert_count(), 0);
        assert!(p.removed().is_empty());
        assert_eq!(p.matched().count(), 3);
    }

    #[test]
    fn insertion_in_the_middle() {
        let p = plan(&["a", "b"], &["a", "c", "b"]);
        assert_eq!(p.sources()[1], Source::New);
        assert_eq!(p.move_count(), 0);
        assert_eq!(simulate(&["a", "b"], &["a", "c", "b"]).0, ["a", "c", "b"]);
    }

    #[test]
    fn removal_without_moves() {
        let p = plan(&["a", "b", "c"], &["a", "c"]);
        assert_eq!(p.removed(), &[1]);
        assert_eq!(p.move_count(), 0);
        assert_eq!(p.insert_count(), 0);
    }

    #[test]
    fn empty_sides() {
        let p = plan::<&str>(&[], &["a", "b"]);
        assert_eq!(p.insert_count(), 2);
        let p = plan(&["a", "b"], &[]);
        assert_eq!(p.removed(), &[0, 1]);
        assert!(p.sources().is_empty());
    }

    #[test]
    fn unchanged_sequence_is_noop() {
        let p = plan(&[1, 2, 3], &[1, 2, 3]);
        assert!(p.is_structurally_unchanged());
        assert!(!plan(&[1, 2, 3], &[1, 3, 2]).is_structurally_unchanged());
    }

    #[test]
    fn reversal_moves_all_but_one() {
        let prev = ["a", "b", "c", "d", "e"];
        let next = ["e", "d", "c", "b", "a"];
        let (order, moves) = simulate(&prev, &next);
        assert_eq!(order, next);
        assert_eq!(moves, 4);
        assert_eq!(plan(&prev, &next).move_count(), 4);
    }

    #[test]
    fn mixed_edit_converges_with_minimal_moves() {
        let prev = ["a", "b", "c", "d", "e", "f"];
        let next = ["x", "d", "a", "f", "c", "y", "e"];
        let p = plan(&prev, &next);
        // Matched previous indices in next order; `0, 2, 4` is a longest increasing run.
        let matched: Vec<usize> = p.matched().map(|(_, j)| j).collect();
        assert_eq!(matched, [3, 0, 5, 2, 4]);
        let lis = longest_increasing_subsequence(&matched).len();
        assert_eq!(lis, 3);
        assert_eq!(p.move_count(), matched.len() - lis);
        assert_eq!(p.removed(), &[1]);

        let (order, moves) = simulate(&prev, &next);
        assert_eq!(order, next);
        assert_eq!(moves, p.move_count());
    }

    #[test]
    fn duplicate_keys_first_match_wins() {
        let p = plan(&["a", "a", "b"], &["b", "a", "a"]);
        assert_eq!(
            p.duplicates(),
            &[
                Duplicate {
                    side: Side::Previous,
                    index: 1,
                    first: 0,
                },
                Duplicate {
                    side: Side::Next,
                    index: 2,
                    first: 1,
                },
            ]
        );
        assert_eq!(p.sources()[1].prev(), Some(0));
        assert_eq!(p.sources()[2], Source::New);
        assert_eq!(p.removed(), &[1]);
    }
}
