use std::io::Write;

use crate::segment::{AlignError, Segment};
use crate::sink::SegmentSink;

/// Writes one `x<TAB>y<TAB>tag` line per segment.
pub struct TsvSink<W: Write> {
    w: W,
}

impl<W: Write> TsvSink<W> {
    pub fn new(w: W) -> Self {
        Self { w }
    }

    pub fn into_inner(self) -> W {
        self.w
    }
}

impl<W: Write> SegmentSink for TsvSink<W> {
    fn emit(&mut self, segment: Segment) -> Result<(), AlignError> {
        writeln!(self.w, "{}", segment.to_tsv()).map_err(AlignError::sink)
    }

    fn finish(&mut self) -> Result<(), AlignError> {
        self.w.flush().map_err(AlignError::sink)
    }
}
