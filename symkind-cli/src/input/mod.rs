//! Statistics input module

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;

use symkind_core::SymbolStats;

/// Read collector statistics: a JSON array with one record per symbol.
///
/// `-` reads from stdin. The collector guarantees at most one record per
/// symbol id; nothing here deduplicates.
pub fn read_stats(source: &str) -> Result<Vec<SymbolStats>> {
    let content = if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read statistics from stdin")?;
        buffer
    } else {
        fs::read_to_string(source)
            .with_context(|| format!("Failed to read statistics file: {source}"))?
    };
    let stats: Vec<SymbolStats> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse symbol statistics from '{source}'"))?;
    Ok(stats)
}
