//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use unl_align::{AlignConfig, Segment, align};

pub fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

pub fn config(mincpl: usize, minsim: f64, maxrec: i64) -> AlignConfig {
    AlignConfig {
        min_common_prefix: mincpl,
        min_similarity: minsim,
        max_recursion: maxrec,
    }
}

pub fn align_all(x: &[String], y: &[String], config: &AlignConfig) -> Vec<Segment> {
    align(x, y, config)
        .unwrap_or_else(|e| panic!("config {config:?} should be valid: {e}"))
        .collect()
}

pub fn triples(segments: &[Segment]) -> Vec<(String, String, String)> {
    segments
        .iter()
        .map(|seg| (seg.x_text(), seg.y_text(), seg.tag.to_string()))
        .collect()
}

/// Deterministic pseudo-random token stream drawn from `vocab`.
pub fn random_text(seed: u64, len: usize, vocab: &[&str]) -> Vec<String> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    let mut tokens = Vec::with_capacity(len);
    for _ in 0..len {
        state = state
            .wrapping_mul(2862933555777941757)
            .wrapping_add(3037000493);
        let idx = ((state >> 32) as usize) % vocab.len();
        tokens.push(vocab[idx].to_owned());
    }
    tokens
}

pub fn concat_x(segments: &[Segment]) -> Vec<String> {
    segments.iter().flat_map(|seg| seg.x.iter().cloned()).collect()
}

pub fn concat_y(segments: &[Segment]) -> Vec<String> {
    segments.iter().flat_map(|seg| seg.y.iter().cloned()).collect()
}
