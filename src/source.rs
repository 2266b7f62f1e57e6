//! Frame record sources.
//!
//! Landmark detection runs outside this crate; recorded detection results
//! are replayed from JSON-lines streams, one frame object per line:
//!
//! ```text
//! {"pose": [{"x": 0.5, "y": 0.4, "z": -0.1}, ...], "face": [...]}
//! ```

use crate::{landmark::FrameLandmarks, Result};
use log::info;
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read},
    path::PathBuf,
};

/// Where frame records come from
#[derive(Debug, Clone)]
pub enum FrameSource {
    /// JSON-lines file of recorded detection results
    File(PathBuf),
    /// JSON-lines records on standard input
    Stdin,
}

/// Streaming reader over a frame source
pub struct FrameReader {
    lines: io::Lines<BufReader<Box<dyn Read>>>,
}

impl FrameReader {
    /// Open a frame source for reading
    pub fn open(source: &FrameSource) -> Result<Self> {
        let reader: Box<dyn Read> = match source {
            FrameSource::File(path) => {
                info!("Opening frame recording: {}", path.display());
                Box::new(File::open(path)?)
            }
            FrameSource::Stdin => {
                info!("Reading frame records from stdin");
                Box::new(io::stdin())
            }
        };

        Ok(Self::from_reader(reader))
    }

    /// Wrap an arbitrary byte stream of JSON-lines frame records
    pub fn from_reader(reader: Box<dyn Read>) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
        }
    }

    /// Next frame record, or `None` when the stream is exhausted.
    /// Blank lines are skipped; malformed lines are an error.
    pub fn next_frame(&mut self) -> Result<Option<FrameLandmarks>> {
        for line in self.lines.by_ref() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            return Ok(Some(serde_json::from_str(&line)?));
        }

        Ok(None)
    }
}
