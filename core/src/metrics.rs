use std::time::Duration;

/// Counters describing the work done by one alignment run.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AlignMetrics {
    pub tokens_x: u64,
    pub tokens_y: u64,
    pub distinct_tokens: u64,
    pub segments: u64,
    pub anchor_segments: u64,
    pub no_candidate_segments: u64,
    pub depth_exceeded_segments: u64,
    pub ranges_examined: u64,
    pub candidate_pairs: u64,
    pub max_depth_reached: u32,
    pub similarity_cache_entries: u64,
    pub similarity_cache_hits: u64,
    pub similarity_cache_misses: u64,
    pub alignment_time_ms: u64,
    #[serde(skip)]
    elapsed: Duration,
}

impl AlignMetrics {
    pub(crate) fn new(tokens_x: usize, tokens_y: usize, distinct_tokens: usize) -> Self {
        Self {
            tokens_x: tokens_x as u64,
            tokens_y: tokens_y as u64,
            distinct_tokens: distinct_tokens as u64,
            ..Self::default()
        }
    }

    pub(crate) fn add_elapsed(&mut self, elapsed: Duration) {
        self.elapsed += elapsed;
        self.alignment_time_ms = self.elapsed.as_millis() as u64;
    }

    pub(crate) fn add_candidate_pairs(&mut self, count: usize) {
        self.candidate_pairs = self.candidate_pairs.saturating_add(count as u64);
    }

    pub(crate) fn observe_depth(&mut self, depth: u32) {
        self.max_depth_reached = self.max_depth_reached.max(depth);
    }
}
