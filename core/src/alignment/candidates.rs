//! Candidate token pairs and the filters that prune them.
//!
//! Candidates come from frequency buckets shared by both texts: every token of
//! X with frequency `f` is paired with every token of Y with frequency `f`.
//! The pairs then pass through the filters selected by [`FilterPlan`]:
//!
//! - **ExactOnly**: `min_similarity == 1.0`, tokens must be identical
//! - **Prefix**: `min_similarity == 0.0` and `min_common_prefix > 0`
//! - **Similarity**: `0.0 < min_similarity < 1.0`, optionally preceded by the prefix filter
//! - **Unfiltered**: no threshold at all, every same-frequency pair survives
//!
//! The prefix filter always runs before the similarity filter because it is
//! far cheaper than an edit distance.

use tracing::trace;

use crate::alignment::frequency::FrequencyIndex;
use crate::config::AlignConfig;
use crate::similarity::SimilarityCache;
use crate::token_pool::{TokenId, TokenPool};

pub type CandidatePair = (TokenId, TokenId);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FilterPlan {
    ExactOnly,
    Prefix { len: usize },
    Similarity { prefix: Option<usize>, threshold: f64 },
    Unfiltered,
}

impl FilterPlan {
    pub fn from_config(config: &AlignConfig) -> Self {
        let minsim = config.min_similarity;
        let mincpl = config.min_common_prefix;
        let plan = if config.is_exact() {
            FilterPlan::ExactOnly
        } else if minsim > 0.0 && minsim < 1.0 {
            FilterPlan::Similarity {
                prefix: (mincpl > 0).then_some(mincpl),
                threshold: minsim,
            }
        } else if mincpl > 0 {
            FilterPlan::Prefix { len: mincpl }
        } else {
            FilterPlan::Unfiltered
        };
        trace!(?plan, "selected candidate filter plan");
        plan
    }
}

/// Lazily yields the cross product of same-frequency tokens for every
/// frequency present in both indexes.
pub fn generate_candidates<'a>(
    x: &'a FrequencyIndex,
    y: &'a FrequencyIndex,
) -> impl Iterator<Item = CandidatePair> + 'a {
    x.by_freq
        .iter()
        .filter_map(move |(freq, tokens_x)| y.by_freq.get(freq).map(|tokens_y| (tokens_x, tokens_y)))
        .flat_map(|(tokens_x, tokens_y)| {
            tokens_x
                .iter()
                .flat_map(move |&tx| tokens_y.iter().map(move |&ty| (tx, ty)))
        })
}

pub fn exact_filter<I>(candidates: I) -> impl Iterator<Item = CandidatePair>
where
    I: Iterator<Item = CandidatePair>,
{
    candidates.filter(|(tx, ty)| tx == ty)
}

pub fn prefix_filter<'a, I>(
    candidates: I,
    pool: &'a TokenPool,
    len: usize,
) -> impl Iterator<Item = CandidatePair> + 'a
where
    I: Iterator<Item = CandidatePair> + 'a,
{
    candidates.filter(move |&(tx, ty)| shares_prefix(pool.resolve(tx), pool.resolve(ty), len))
}

pub fn similarity_filter<'a, I>(
    candidates: I,
    pool: &'a TokenPool,
    cache: &'a mut SimilarityCache,
    threshold: f64,
) -> impl Iterator<Item = CandidatePair> + 'a
where
    I: Iterator<Item = CandidatePair> + 'a,
{
    candidates.filter(move |&(tx, ty)| cache.similarity(pool, tx, ty) >= threshold)
}

/// True when the first `len` characters agree. A token shorter than `len`
/// takes part with all of its characters, so `"ab"` only matches `"ab"` at
/// `len = 3`.
pub fn shares_prefix(a: &str, b: &str, len: usize) -> bool {
    a.chars().take(len).eq(b.chars().take(len))
}

pub fn filter_candidates<'a, I>(
    candidates: I,
    plan: FilterPlan,
    pool: &'a TokenPool,
    cache: &'a mut SimilarityCache,
) -> Vec<CandidatePair>
where
    I: Iterator<Item = CandidatePair> + 'a,
{
    match plan {
        FilterPlan::ExactOnly => exact_filter(candidates).collect(),
        FilterPlan::Prefix { len } => prefix_filter(candidates, pool, len).collect(),
        FilterPlan::Similarity {
            prefix: Some(len),
            threshold,
        } => similarity_filter(prefix_filter(candidates, pool, len), pool, cache, threshold)
            .collect(),
        FilterPlan::Similarity {
            prefix: None,
            threshold,
        } => similarity_filter(candidates, pool, cache, threshold).collect(),
        FilterPlan::Unfiltered => candidates.collect(),
    }
}
