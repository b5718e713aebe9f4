//! Plain text classification writer

use super::ClassificationWriter;
use anyhow::Result;
use std::io::{self, Write};

use symkind_core::Classification;

/// Text writer - one decision per line, kind column first
pub struct TextWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextWriter<W> {
    /// Create a new text writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextWriter<io::Stdout> {
    /// Create a writer that prints to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> ClassificationWriter for TextWriter<W> {
    fn write_classification(&mut self, decision: &Classification) -> Result<()> {
        writeln!(self.writer, "{:<8} {}", decision.kind, decision.symbol.name)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
