use crate::segment::{AlignError, Segment};

/// Trait for streaming alignment segments to a consumer.
pub trait SegmentSink {
    /// Called once before any segment is emitted.
    ///
    /// Default is a no-op so sinks that don't need setup can ignore it.
    fn begin(&mut self) -> Result<(), AlignError> {
        Ok(())
    }

    fn emit(&mut self, segment: Segment) -> Result<(), AlignError>;

    fn finish(&mut self) -> Result<(), AlignError> {
        Ok(())
    }
}

/// A sink that collects segments into a Vec.
#[derive(Debug, Default)]
pub struct VecSink {
    segments: Vec<Segment>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}

impl SegmentSink for VecSink {
    fn emit(&mut self, segment: Segment) -> Result<(), AlignError> {
        self.segments.push(segment);
        Ok(())
    }
}

/// A sink that forwards segments to a callback.
pub struct CallbackSink<F: FnMut(Segment)> {
    f: F,
}

impl<F: FnMut(Segment)> CallbackSink<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: FnMut(Segment)> SegmentSink for CallbackSink<F> {
    fn emit(&mut self, segment: Segment) -> Result<(), AlignError> {
        (self.f)(segment);
        Ok(())
    }
}
