//! Command-line interface for tasklink.

pub mod args;
pub mod commands;
