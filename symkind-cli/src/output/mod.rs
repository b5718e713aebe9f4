//! Classification output module

use anyhow::Result;
use std::io::Write;

use symkind_core::Classification;

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One decision per line: the kind, then the symbol name
    Text,
    /// JSON array of classification records
    Json,
}

/// Trait for classification writers
pub trait ClassificationWriter: Send + Sync {
    /// Write a single classification
    fn write_classification(&mut self, decision: &Classification) -> Result<()>;

    /// Finalize output (e.g., close the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonWriter;
pub use text::TextWriter;

/// Write a whole decision set to `writer` in the requested format.
pub fn write_all<W: Write + Send + Sync>(
    writer: W,
    format: OutputFormat,
    decisions: &[Classification],
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let mut text = TextWriter::new(writer);
            for decision in decisions {
                text.write_classification(decision)?;
            }
            text.finish()
        }
        OutputFormat::Json => {
            let mut json = JsonWriter::new(writer);
            for decision in decisions {
                json.write_classification(decision)?;
            }
            json.finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symkind_core::{Classification, Symbol};

    fn decisions() -> Vec<Classification> {
        vec![
            Classification::tag(Symbol::new(1, "v1-0")),
            Classification::branch(Symbol::new(2, "topic")),
        ]
    }

    #[test]
    fn test_write_all_text() {
        let mut buffer = Vec::new();
        write_all(&mut buffer, OutputFormat::Text, &decisions()).unwrap();
        let rendered = String::from_utf8(buffer).unwrap();
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.lines().next().unwrap().starts_with("tag"));
        assert!(rendered.contains("v1-0"));
    }

    #[test]
    fn test_write_all_json() {
        let mut buffer = Vec::new();
        write_all(&mut buffer, OutputFormat::Json, &decisions()).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[1]["kind"], "branch");
        assert_eq!(parsed[1]["symbol"]["id"], 2);
    }
}
