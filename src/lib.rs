//! tasklink - markdown task lines to task-tracker drafts
//!
//! This crate parses single lines of markdown for checklist structure,
//! wiki-links, dated markers and priority glyphs, and builds the tracker
//! drafts and note edits a host integration needs from them.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TasklinkError;
