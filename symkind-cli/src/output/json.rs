//! JSON classification writer

use super::ClassificationWriter;
use anyhow::Result;
use std::io::Write;

use symkind_core::Classification;

/// JSON writer - buffers decisions and emits one pretty-printed array
pub struct JsonWriter<W: Write> {
    writer: W,
    decisions: Vec<Classification>,
}

impl<W: Write> JsonWriter<W> {
    /// Create a new JSON writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            decisions: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> ClassificationWriter for JsonWriter<W> {
    fn write_classification(&mut self, decision: &Classification) -> Result<()> {
        self.decisions.push(decision.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.decisions)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
