//! Per-text frequency and position indexes.
//!
//! Tokens are bucketed by how often they occur. Only buckets whose frequency
//! appears in both texts take part in candidate generation, and a token's
//! positions are what turn a candidate pair into position pairs.

use rustc_hash::FxHashMap;

use crate::token_pool::TokenId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyIndex {
    pub freqs: FxHashMap<TokenId, usize>,
    /// Frequency -> distinct tokens with exactly that many occurrences, in id order.
    pub by_freq: FxHashMap<usize, Vec<TokenId>>,
}

impl FrequencyIndex {
    pub fn tokens_with_frequency(&self, freq: usize) -> &[TokenId] {
        self.by_freq.get(&freq).map(Vec::as_slice).unwrap_or(&[])
    }
}

pub fn build_frequency_index(tokens: &[TokenId]) -> FrequencyIndex {
    let mut freqs: FxHashMap<TokenId, usize> = FxHashMap::default();
    for &token in tokens {
        *freqs.entry(token).or_insert(0) += 1;
    }

    let mut by_freq: FxHashMap<usize, Vec<TokenId>> = FxHashMap::default();
    for (&token, &freq) in &freqs {
        by_freq.entry(freq).or_default().push(token);
    }
    for bucket in by_freq.values_mut() {
        bucket.sort_unstable();
    }

    FrequencyIndex { freqs, by_freq }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionIndex {
    positions: FxHashMap<TokenId, Vec<usize>>,
}

impl PositionIndex {
    /// Ascending positions of `token`, empty if it never occurs.
    pub fn positions(&self, token: TokenId) -> &[usize] {
        self.positions.get(&token).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Records where each token occurs. `base` is the absolute index of
/// `tokens[0]`, so sub-ranges report positions in whole-text coordinates.
pub fn build_position_index(tokens: &[TokenId], base: usize) -> PositionIndex {
    let mut positions: FxHashMap<TokenId, Vec<usize>> = FxHashMap::default();
    for (offset, &token) in tokens.iter().enumerate() {
        positions.entry(token).or_default().push(base + offset);
    }
    PositionIndex { positions }
}
