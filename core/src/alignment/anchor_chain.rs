//! Anchor selection using Longest Increasing Subsequence (LIS).
//!
//! Candidate token pairs are expanded into every combination of their
//! positions, sorted by X (then Y), and reduced to the longest chain that is
//! strictly increasing in both coordinates. For example, given the points
//!
//! - (0, 0)
//! - (1, 2)
//! - (2, 1)
//! - (3, 3)
//!
//! the chain is {(0,0), (2,1), (3,3)}: (1,2) and (2,1) cross, and of the two
//! equally long chains the LIS keeps the one with the lower Y tail.
//!
//! The LIS runs on Y over points already ordered by (X, Y), so X acts as the
//! secondary key through processing order. Points that share an X index are
//! placed onto the LIS piles as one batch, so a point can never extend a chain
//! ending in its own X column.

use crate::alignment::candidates::CandidatePair;
use crate::alignment::frequency::PositionIndex;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Anchor {
    pub x: usize,
    pub y: usize,
}

/// Expands candidates into position pairs and selects the anchor chain.
///
/// Returns `None` when no candidate has a single position pair, which the
/// aligner reports as a `?` segment. Otherwise the chain is non-empty.
pub fn select_anchors(
    candidates: &[CandidatePair],
    positions_x: &PositionIndex,
    positions_y: &PositionIndex,
) -> Option<Vec<Anchor>> {
    let points = expand_position_pairs(candidates, positions_x, positions_y);
    if points.is_empty() {
        return None;
    }
    Some(build_anchor_chain(points))
}

pub fn expand_position_pairs(
    candidates: &[CandidatePair],
    positions_x: &PositionIndex,
    positions_y: &PositionIndex,
) -> Vec<Anchor> {
    let mut points = Vec::new();
    for &(tx, ty) in candidates {
        let ys = positions_y.positions(ty);
        for &x in positions_x.positions(tx) {
            points.extend(ys.iter().map(|&y| Anchor { x, y }));
        }
    }
    points
}

pub fn build_anchor_chain(mut points: Vec<Anchor>) -> Vec<Anchor> {
    points.sort_unstable();
    points.dedup();
    let indices = lis_indices_grouped(&points, |p| p.y, |a, b| a.x == b.x);
    indices.into_iter().map(|idx| points[idx]).collect()
}

/// Longest strictly increasing subsequence of `seq`.
///
/// Among equally long answers the one built from the smallest pile tails wins,
/// e.g. `[0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15]` yields
/// `[0, 2, 6, 9, 11, 15]`.
pub fn longest_increasing_subsequence<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
    lis_indices(seq, |value| value.clone())
        .into_iter()
        .map(|idx| seq[idx].clone())
        .collect()
}

/// Indices of a longest subsequence whose keys are strictly increasing.
pub fn lis_indices<T, K, F>(items: &[T], key: F) -> Vec<usize>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    lis_indices_grouped(items, key, |_, _| false)
}

/// Patience-sorting LIS where consecutive items for which `same_group` holds
/// are placed as one batch: each is positioned against the piles as they were
/// before the batch, so no item can chain onto another of its own group.
fn lis_indices_grouped<T, K, F, G>(items: &[T], key: F, same_group: G) -> Vec<usize>
where
    K: Ord,
    F: Fn(&T) -> K,
    G: Fn(&T, &T) -> bool,
{
    let mut piles: Vec<usize> = Vec::new();
    let mut predecessors: Vec<Option<usize>> = vec![None; items.len()];
    let mut placements: Vec<(usize, usize)> = Vec::new();

    let mut start = 0usize;
    while start < items.len() {
        let mut end = start + 1;
        while end < items.len() && same_group(&items[start], &items[end]) {
            end += 1;
        }

        placements.clear();
        for idx in start..end {
            let k = key(&items[idx]);
            let pos = piles.partition_point(|&pile_idx| key(&items[pile_idx]) < k);
            if pos > 0 {
                predecessors[idx] = Some(piles[pos - 1]);
            }
            placements.push((idx, pos));
        }

        for &(idx, pos) in &placements {
            if pos == piles.len() {
                piles.push(idx);
            } else if key(&items[idx]) < key(&items[piles[pos]]) {
                piles[pos] = idx;
            }
        }

        start = end;
    }

    let Some(&last) = piles.last() else {
        return Vec::new();
    };

    let mut result: Vec<usize> = Vec::new();
    let mut current = last;
    loop {
        result.push(current);
        if let Some(prev) = predecessors[current] {
            current = prev;
        } else {
            break;
        }
    }
    result.reverse();
    result
}
