//! Info command implementation

use anyhow::Result;
use clap::Args;

use symkind_core::SymbolStats;

use crate::input;
use crate::output::OutputFormat;

/// Arguments for the info command
///
/// Prints each symbol's usage line plus a one-line breakdown, the raw
/// material for choosing forced patterns before a classify run.
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Statistics file produced by the collector ('-' for stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl InfoArgs {
    /// Execute the info command
    pub fn execute(&self) -> Result<()> {
        let stats = input::read_stats(&self.input)?;
        match self.format {
            OutputFormat::Text => {
                for record in &stats {
                    println!("{record}");
                }
                println!();
                println!("{}", summary_line(&stats));
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(std::io::stdout(), &stats)?;
                println!();
            }
        }
        Ok(())
    }
}

/// One-line usage breakdown across the whole symbol set.
fn summary_line(stats: &[SymbolStats]) -> String {
    let mut tag_only = 0;
    let mut branch_only = 0;
    let mut mixed = 0;
    let mut unused = 0;
    for record in stats {
        let used_as_tag = record.tag_create_count > 0;
        let used_as_branch = record.branch_create_count > 0 || record.branch_commit_count > 0;
        match (used_as_tag, used_as_branch) {
            (true, true) => mixed += 1,
            (true, false) => tag_only += 1,
            (false, true) => branch_only += 1,
            (false, false) => unused += 1,
        }
    }
    format!(
        "{} symbols: {} tag-only, {} branch-only, {} mixed, {} unused",
        stats.len(),
        tag_only,
        branch_only,
        mixed,
        unused
    )
}
