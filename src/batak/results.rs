//! Result sinks.

use std::io::Write;

use itertools::Itertools;

/// Receives the final scores of each completed game, in seat order.
pub trait ResultSink {
    fn record(&mut self, scores: &[i32]) -> std::io::Result<()>;
}

/// Writes one line per game: the scores, separated by commas.
pub struct LineSink<W> {
    writer: W,
}

impl<W: Write> LineSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ResultSink for LineSink<W> {
    fn record(&mut self, scores: &[i32]) -> std::io::Result<()> {
        writeln!(self.writer, "{}", scores.iter().join(", "))?;
        self.writer.flush()
    }
}
