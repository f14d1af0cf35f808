//! Spelling similarity between tokens.
//!
//! Similarity is `1 - normalized edit distance`, computed over Unicode scalar
//! values. [`SimilarityCache`] memoizes scores per ordered token pair for the
//! lifetime of one alignment run.

use rustc_hash::FxHashMap;

use crate::token_pool::{TokenId, TokenPool};

/// Levenshtein distance with unit costs.
///
/// Runs in `O(|s1| * |s2|)` time and keeps a single row sized to the shorter
/// string, iterating the longer one against it.
pub fn edit_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, &lc) in long.iter().enumerate() {
        // row[j] still holds the previous row here; `diag` trails one column behind.
        let mut diag = i;
        row[0] = i + 1;
        for (j, &sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);
            let above = row[j + 1];
            row[j + 1] = (diag + cost).min(row[j] + 1).min(above + 1);
            diag = above;
        }
    }
    row[short.len()]
}

pub fn normalized_edit_distance(s1: &str, s2: &str) -> f64 {
    let longest = s1.chars().count().max(s2.chars().count()).max(1);
    edit_distance(s1, s2) as f64 / longest as f64
}

/// Uncached similarity score in `[0.0, 1.0]`.
pub fn spelling_similarity(s1: &str, s2: &str) -> f64 {
    if s1 == s2 {
        return 1.0;
    }
    1.0 - normalized_edit_distance(s1, s2)
}

/// Per-run memo of similarity scores keyed by ordered token pair.
///
/// Entries are never evicted; the table is bounded by the number of distinct
/// candidate pairs the run ever scores.
#[derive(Debug, Default)]
pub struct SimilarityCache {
    scores: FxHashMap<(TokenId, TokenId), f64>,
    hits: u64,
    misses: u64,
}

impl SimilarityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn similarity(&mut self, pool: &TokenPool, a: TokenId, b: TokenId) -> f64 {
        if a == b {
            return 1.0;
        }
        if let Some(&score) = self.scores.get(&(a, b)) {
            self.hits += 1;
            return score;
        }
        self.misses += 1;
        let score = spelling_similarity(pool.resolve(a), pool.resolve(b));
        self.scores.insert((a, b), score);
        score
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
