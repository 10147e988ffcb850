//! Command-line interface
//!
//! A thin consumer of the ledger's public operations; all chain logic
//! lives in `core`.

pub mod commands;

pub use commands::{Command, Opt};
