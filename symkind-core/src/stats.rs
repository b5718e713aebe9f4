//! Per-symbol usage statistics collected by an upstream scan of the
//! source history.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::symbol::Symbol;

/// Usage counters for one symbol.
///
/// A statistics pass over the source history produces one record per
/// symbol. The counters count occurrences across the whole history;
/// what one occurrence corresponds to (a file, a revision) is up to the
/// collector and irrelevant here. Rules only compare counters against
/// zero and against each other.
///
/// Counter fields default to zero when absent from serialized input, so
/// collectors may omit counters they never incremented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolStats {
    /// The symbol these counters describe.
    pub symbol: Symbol,
    /// How many times the name marked a tag.
    #[serde(default)]
    pub tag_create_count: u32,
    /// How many times the name was used to create a branch.
    #[serde(default)]
    pub branch_create_count: u32,
    /// How many commits were made on a branch of this name.
    #[serde(default)]
    pub branch_commit_count: u32,
}

impl SymbolStats {
    /// Creates a record with all counters at zero, ready for a collector
    /// to increment.
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            tag_create_count: 0,
            branch_create_count: 0,
            branch_commit_count: 0,
        }
    }
}

impl fmt::Display for SymbolStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is tagged {} times, branched {} times, and has {} branch commits",
            self.symbol.name, self.tag_create_count, self.branch_create_count,
            self.branch_commit_count
        )
    }
}
