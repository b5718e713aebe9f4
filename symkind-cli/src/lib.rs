//! symkind CLI library
//!
//! This library provides the command-line interface for the symkind
//! symbol classification system: argument parsing, rules-file handling,
//! statistics input, and report output.

pub mod commands;
pub mod config;
pub mod input;
pub mod output;

pub use config::{RuleAction, RulesConfig, SymbolDefault};
