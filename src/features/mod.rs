//! Feature implementations for tasklink.
//!
//! The parser in [`crate::core`] only reads lines; this module connects it
//! to the outside world:
//! - Tracker task and project drafts
//! - Deep links back into the vault
//! - Link insertion into notes

pub mod link;
