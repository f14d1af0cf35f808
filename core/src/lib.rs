//! unl-align: word-level alignment of parallel texts.
//!
//! This crate provides functionality for:
//! - Tokenizing texts into word streams with end-of-line markers
//! - Finding monotonic word correspondences by frequency, spelling similarity
//!   and longest-increasing-subsequence anchor chains
//! - Streaming the resulting segments as TSV or JSON Lines
//!
//! # Quick Start
//!
//! ```
//! use unl_align::{AlignConfig, align, tokenize_text};
//!
//! let x = tokenize_text("the white house\n");
//! let y = tokenize_text("the white house\n");
//! for segment in align(&x, &y, &AlignConfig::default()).unwrap() {
//!     println!("{}", segment.to_tsv());
//! }
//! ```

pub mod alignment;
mod config;
mod metrics;
mod output;
mod segment;
mod similarity;
mod sink;
mod token_pool;
mod tokenize;

pub use alignment::anchor_chain::{
    Anchor, build_anchor_chain, expand_position_pairs, lis_indices,
    longest_increasing_subsequence, select_anchors,
};
pub use alignment::candidates::{
    CandidatePair, FilterPlan, exact_filter, filter_candidates, generate_candidates,
    prefix_filter, shares_prefix, similarity_filter,
};
pub use alignment::frequency::{
    FrequencyIndex, PositionIndex, build_frequency_index, build_position_index,
};
pub use alignment::{Aligner, align, align_to_sink};
pub use config::{AlignConfig, AlignConfigBuilder, ConfigError};
pub use metrics::AlignMetrics;
pub use output::json_lines::JsonLinesSink;
pub use output::tsv::TsvSink;
pub use segment::{AlignError, Segment, SegmentTag};
pub use similarity::{
    SimilarityCache, edit_distance, normalized_edit_distance, spelling_similarity,
};
pub use sink::{CallbackSink, SegmentSink, VecSink};
pub use token_pool::{TokenId, TokenPool};
pub use tokenize::{EOL_MARKER, decode_lossy, join_tokens, tokenize_bytes, tokenize_text};
