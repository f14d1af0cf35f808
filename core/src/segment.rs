//! Alignment output types.
//!
//! - [`Segment`]: one aligned pair of token slices with its [`SegmentTag`]
//! - [`AlignError`]: errors raised while streaming segments into a sink

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;
use crate::tokenize::join_tokens;

/// How a segment came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentTag {
    /// A single-token correspondence found at this recursion depth.
    Anchor { depth: u32 },
    /// No candidate pair survived the filters for this sub-range (`?`).
    NoCandidate,
    /// The sub-range sits below the recursion bound (`!`).
    DepthExceeded,
}

impl SegmentTag {
    pub fn is_anchor(&self) -> bool {
        matches!(self, SegmentTag::Anchor { .. })
    }
}

impl std::fmt::Display for SegmentTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmentTag::Anchor { depth } => write!(f, "{depth}"),
            SegmentTag::NoCandidate => f.write_str("?"),
            SegmentTag::DepthExceeded => f.write_str("!"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub x: Vec<String>,
    pub y: Vec<String>,
    pub tag: SegmentTag,
}

impl Segment {
    pub fn x_text(&self) -> String {
        join_tokens(&self.x)
    }

    pub fn y_text(&self) -> String {
        join_tokens(&self.y)
    }

    /// The three tab-separated fields of the text output, without a newline.
    pub fn to_tsv(&self) -> String {
        format!("{}\t{}\t{}", self.x_text(), self.y_text(), self.tag)
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AlignError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("[UNL_ALIGN_001] sink error: {message}. Suggestion: check the output destination and retry.")]
    SinkError { message: String },
}

impl AlignError {
    pub fn code(&self) -> &'static str {
        match self {
            AlignError::Config(err) => err.code(),
            AlignError::SinkError { .. } => "UNL_ALIGN_001",
        }
    }

    pub(crate) fn sink(err: impl std::fmt::Display) -> Self {
        AlignError::SinkError {
            message: err.to_string(),
        }
    }
}
