//! Symbol identity and classification decision types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named symbol observed in the source history.
///
/// The numeric id is assigned by the statistics collector and is opaque to
/// this crate; it travels alongside the name so downstream consumers can
/// join decisions back to their own records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    /// Collector-assigned identifier, unique within one conversion run.
    pub id: u32,
    /// The symbol name exactly as it appears in the source history.
    pub name: String,
}

impl Symbol {
    /// Creates a symbol from its collector-assigned id and name.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.name)
    }
}

/// What a symbol becomes in the converted history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    /// Convert the symbol as a branch.
    Branch,
    /// Convert the symbol as a tag.
    Tag,
    /// Leave the symbol out of the conversion entirely.
    Excluded,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SymbolKind::Branch => "branch",
            SymbolKind::Tag => "tag",
            SymbolKind::Excluded => "excluded",
        };
        f.pad(label)
    }
}

/// The decision for one symbol: its identity plus the kind it becomes.
///
/// A successful chain pass produces exactly one classification per input
/// record; exclusion is an ordinary decision, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// The symbol being classified.
    pub symbol: Symbol,
    /// The decided kind.
    pub kind: SymbolKind,
}

impl Classification {
    /// Classifies `symbol` as a branch.
    pub fn branch(symbol: Symbol) -> Self {
        Self {
            symbol,
            kind: SymbolKind::Branch,
        }
    }

    /// Classifies `symbol` as a tag.
    pub fn tag(symbol: Symbol) -> Self {
        Self {
            symbol,
            kind: SymbolKind::Tag,
        }
    }

    /// Excludes `symbol` from the conversion.
    pub fn excluded(symbol: Symbol) -> Self {
        Self {
            symbol,
            kind: SymbolKind::Excluded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_the_expected_kind() {
        let symbol = Symbol::new(7, "rel-1.0");
        assert_eq!(
            Classification::branch(symbol.clone()).kind,
            SymbolKind::Branch
        );
        assert_eq!(Classification::tag(symbol.clone()).kind, SymbolKind::Tag);
        assert_eq!(
            Classification::excluded(symbol.clone()).kind,
            SymbolKind::Excluded
        );
        assert_eq!(Classification::tag(symbol.clone()).symbol, symbol);
    }

    #[test]
    fn test_symbol_displays_as_its_name() {
        assert_eq!(Symbol::new(3, "vendor-branch").to_string(), "vendor-branch");
    }

    #[test]
    fn test_kind_displays_lowercase() {
        assert_eq!(SymbolKind::Branch.to_string(), "branch");
        assert_eq!(SymbolKind::Tag.to_string(), "tag");
        assert_eq!(SymbolKind::Excluded.to_string(), "excluded");
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&SymbolKind::Excluded).unwrap(),
            "\"excluded\""
        );
        let kind: SymbolKind = serde_json::from_str("\"tag\"").unwrap();
        assert_eq!(kind, SymbolKind::Tag);
    }

    #[test]
    fn test_classification_serializes_with_symbol_identity() {
        let decision = Classification::tag(Symbol::new(12, "v1-0"));
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["symbol"]["id"], 12);
        assert_eq!(json["symbol"]["name"], "v1-0");
        assert_eq!(json["kind"], "tag");
    }
}
