use serde::Serialize;
use std::io::Write;

use crate::segment::{AlignError, Segment};
use crate::sink::SegmentSink;

#[derive(Serialize)]
struct JsonLinesHeader<'a> {
    kind: &'static str,
    version: &'a str,
}

/// Writes a header line followed by one JSON object per segment.
pub struct JsonLinesSink<W: Write> {
    w: W,
    wrote_header: bool,
    version: &'static str,
}

impl<W: Write> JsonLinesSink<W> {
    pub const SCHEMA_VERSION: &'static str = "1";

    pub fn new(w: W) -> Self {
        Self {
            w,
            wrote_header: false,
            version: Self::SCHEMA_VERSION,
        }
    }

    pub fn into_inner(self) -> W {
        self.w
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> Result<(), AlignError> {
        serde_json::to_writer(&mut self.w, value).map_err(AlignError::sink)?;
        self.w.write_all(b"\n").map_err(AlignError::sink)
    }
}

impl<W: Write> SegmentSink for JsonLinesSink<W> {
    fn begin(&mut self) -> Result<(), AlignError> {
        if self.wrote_header {
            return Ok(());
        }
        let header = JsonLinesHeader {
            kind: "Header",
            version: self.version,
        };
        self.write_line(&header)?;
        self.wrote_header = true;
        Ok(())
    }

    fn emit(&mut self, segment: Segment) -> Result<(), AlignError> {
        self.write_line(&segment)
    }

    fn finish(&mut self) -> Result<(), AlignError> {
        self.w.flush().map_err(AlignError::sink)
    }
}
