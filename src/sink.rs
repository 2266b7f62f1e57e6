//! Marker publication adapters.
//!
//! The projector produces plain marker values; sinks translate them into an
//! output surface. The browser demos mutate absolutely-positioned page
//! elements — the equivalent here is one JSON record per frame on a writer.

use crate::{landmark::Landmark, projector::Marker, Result};
use std::io::Write;

/// Consumer of per-frame projection output
pub trait MarkerSink {
    /// Publish one frame's marker state. `points` carries the normalized
    /// chakra positions behind the markers, in the same order.
    fn publish(&mut self, markers: &[Marker], points: &[Landmark]) -> Result<()>;

    /// Sink name for logging
    fn name(&self) -> &str;
}

/// Writes one JSON array of markers per frame
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MarkerSink for JsonLinesSink<W> {
    fn publish(&mut self, markers: &[Marker], _points: &[Landmark]) -> Result<()> {
        serde_json::to_writer(&mut self.writer, markers)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json_lines"
    }
}

/// Retains every published frame; used by tests
#[derive(Default)]
pub struct MemorySink {
    pub frames: Vec<Vec<Marker>>,
}

impl MarkerSink for MemorySink {
    fn publish(&mut self, markers: &[Marker], _points: &[Landmark]) -> Result<()> {
        self.frames.push(markers.to_vec());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
