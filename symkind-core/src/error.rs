//! Error types for rule construction and chain evaluation.

use thiserror::Error;

use crate::stats::SymbolStats;

/// Errors produced while building or evaluating a rule chain.
///
/// These are the only two failure points in the crate: a pattern rule can
/// reject its pattern at construction time, and a whole-set evaluation can
/// fail after the full pass when symbols remain unresolved. A rule that
/// merely abstains from a decision is never an error.
#[derive(Error, Debug)]
pub enum StrategyError {
    /// A pattern rule was given a string that does not compile as a
    /// regular expression. Raised at construction, before any symbol is
    /// evaluated.
    #[error("'{pattern}' is not a valid regular expression")]
    InvalidPattern {
        /// The pattern string as supplied, without the implicit anchors.
        pattern: String,
        /// The underlying compilation error.
        #[source]
        source: regex::Error,
    },

    /// One or more symbols matched no rule in the chain.
    ///
    /// Raised only after every record has been evaluated. Carries the
    /// full statistics of each unresolved symbol, in input order, so
    /// callers can report every ambiguity at once.
    #[error("no rule matched {} symbol(s)", unresolved.len())]
    UnresolvedSymbols {
        /// Statistics for every symbol the chain could not classify.
        unresolved: Vec<SymbolStats>,
    },
}

/// Result alias for strategy operations.
pub type Result<T> = std::result::Result<T, StrategyError>;
