//! Recursive assembly of aligned segments.
//!
//! A range pair is either closed with a terminal segment or split around its
//! anchors. Ranges below the recursion bound close as `!`, ranges without any
//! candidate position pair close as `?`. Pending sub-ranges and anchors live
//! on an explicit work stack, popped in document order.

use std::ops::Range;
use std::time::Instant;

use tracing::{debug, info};

use crate::alignment::anchor_chain::{Anchor, select_anchors};
use crate::alignment::candidates::{FilterPlan, filter_candidates, generate_candidates};
use crate::alignment::frequency::{build_frequency_index, build_position_index};
use crate::config::{AlignConfig, ConfigError};
use crate::metrics::AlignMetrics;
use crate::segment::{AlignError, Segment, SegmentTag};
use crate::similarity::SimilarityCache;
use crate::sink::SegmentSink;
use crate::token_pool::{TokenId, TokenPool};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Task {
    /// Find anchors inside `x`/`y`, or close the range with a `?`/`!` segment.
    Align {
        x: Range<usize>,
        y: Range<usize>,
        depth: u32,
    },
    Anchor { anchor: Anchor, depth: u32 },
}

/// Lazy, depth-first alignment of two token streams.
///
/// Yields segments in document order. Work that would recurse is kept on an
/// explicit stack, so deep gap nesting never grows the call stack. An
/// `Aligner` cannot be rewound; build a new one to align the texts again.
pub struct Aligner {
    pool: TokenPool,
    text_x: Vec<TokenId>,
    text_y: Vec<TokenId>,
    config: AlignConfig,
    plan: FilterPlan,
    cache: SimilarityCache,
    stack: Vec<Task>,
    metrics: AlignMetrics,
    finished: bool,
}

impl Aligner {
    pub fn new<S: AsRef<str>>(
        text_x: &[S],
        text_y: &[S],
        config: &AlignConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut pool = TokenPool::new();
        let text_x = pool.intern_all(text_x);
        let text_y = pool.intern_all(text_y);
        let plan = FilterPlan::from_config(config);

        let metrics = AlignMetrics::new(text_x.len(), text_y.len(), pool.len());
        let root = Task::Align {
            x: 0..text_x.len(),
            y: 0..text_y.len(),
            depth: 0,
        };

        Ok(Self {
            pool,
            text_x,
            text_y,
            config: config.clone(),
            plan,
            cache: SimilarityCache::new(),
            stack: vec![root],
            metrics,
            finished: false,
        })
    }

    pub fn config(&self) -> &AlignConfig {
        &self.config
    }

    pub fn plan(&self) -> FilterPlan {
        self.plan
    }

    /// Metrics for the segments produced so far.
    pub fn metrics(&self) -> AlignMetrics {
        let mut metrics = self.metrics.clone();
        metrics.similarity_cache_entries = self.cache.len() as u64;
        metrics.similarity_cache_hits = self.cache.hits();
        metrics.similarity_cache_misses = self.cache.misses();
        metrics
    }

    fn expand(&mut self, x: Range<usize>, y: Range<usize>, depth: u32) -> Option<Segment> {
        self.metrics.observe_depth(depth);

        if i64::from(depth) > self.config.max_recursion {
            debug!(depth, x_len = x.len(), y_len = y.len(), "recursion bound reached");
            return Some(self.segment(x, y, SegmentTag::DepthExceeded));
        }

        self.metrics.ranges_examined += 1;
        let Some(anchors) = self.find_anchors(&x, &y) else {
            debug!(depth, x_len = x.len(), y_len = y.len(), "no candidate correspondences");
            return Some(self.segment(x, y, SegmentTag::NoCandidate));
        };
        debug!(
            depth,
            x_len = x.len(),
            y_len = y.len(),
            anchors = anchors.len(),
            "anchored range"
        );

        let mut tasks = Vec::with_capacity(anchors.len() * 2 + 1);
        let (mut x1, mut y1) = (x.start, y.start);
        for anchor in anchors {
            if anchor.x > x1 || anchor.y > y1 {
                tasks.push(Task::Align {
                    x: x1..anchor.x,
                    y: y1..anchor.y,
                    depth: depth + 1,
                });
            }
            tasks.push(Task::Anchor { anchor, depth });
            x1 = anchor.x + 1;
            y1 = anchor.y + 1;
        }
        if x1 < x.end || y1 < y.end {
            tasks.push(Task::Align {
                x: x1..x.end,
                y: y1..y.end,
                depth: depth + 1,
            });
        }

        // Popped back in document order.
        self.stack.extend(tasks.into_iter().rev());
        None
    }

    fn find_anchors(&mut self, x: &Range<usize>, y: &Range<usize>) -> Option<Vec<Anchor>> {
        let tokens_x = &self.text_x[x.clone()];
        let tokens_y = &self.text_y[y.clone()];

        let freq_x = build_frequency_index(tokens_x);
        let freq_y = build_frequency_index(tokens_y);
        let candidates = filter_candidates(
            generate_candidates(&freq_x, &freq_y),
            self.plan,
            &self.pool,
            &mut self.cache,
        );
        self.metrics.add_candidate_pairs(candidates.len());

        let positions_x = build_position_index(tokens_x, x.start);
        let positions_y = build_position_index(tokens_y, y.start);
        select_anchors(&candidates, &positions_x, &positions_y)
    }

    fn segment(&mut self, x: Range<usize>, y: Range<usize>, tag: SegmentTag) -> Segment {
        self.metrics.segments += 1;
        match tag {
            SegmentTag::Anchor { .. } => self.metrics.anchor_segments += 1,
            SegmentTag::NoCandidate => self.metrics.no_candidate_segments += 1,
            SegmentTag::DepthExceeded => self.metrics.depth_exceeded_segments += 1,
        }
        Segment {
            x: self.pool.resolve_all(&self.text_x[x]),
            y: self.pool.resolve_all(&self.text_y[y]),
            tag,
        }
    }
}

impl Iterator for Aligner {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let started = Instant::now();
        let mut produced = None;

        while let Some(task) = self.stack.pop() {
            produced = match task {
                Task::Anchor { anchor, depth } => Some(self.segment(
                    anchor.x..anchor.x + 1,
                    anchor.y..anchor.y + 1,
                    SegmentTag::Anchor { depth },
                )),
                Task::Align { x, y, depth } => self.expand(x, y, depth),
            };
            if produced.is_some() {
                break;
            }
        }

        self.metrics.add_elapsed(started.elapsed());
        if produced.is_none() && !self.finished {
            self.finished = true;
            info!(
                segments = self.metrics.segments,
                anchors = self.metrics.anchor_segments,
                unmatched = self.metrics.no_candidate_segments,
                truncated = self.metrics.depth_exceeded_segments,
                "alignment finished"
            );
        }
        produced
    }
}

impl std::iter::FusedIterator for Aligner {}

/// Aligns two token streams, returning the lazy segment iterator.
pub fn align<S: AsRef<str>>(
    text_x: &[S],
    text_y: &[S],
    config: &AlignConfig,
) -> Result<Aligner, ConfigError> {
    Aligner::new(text_x, text_y, config)
}

/// Streams every segment into `sink` and returns the run's metrics.
pub fn align_to_sink<S: AsRef<str>, K: SegmentSink>(
    text_x: &[S],
    text_y: &[S],
    config: &AlignConfig,
    sink: &mut K,
) -> Result<AlignMetrics, AlignError> {
    let mut aligner = Aligner::new(text_x, text_y, config)?;
    sink.begin()?;
    for segment in aligner.by_ref() {
        sink.emit(segment)?;
    }
    sink.finish()?;
    Ok(aligner.metrics())
}
