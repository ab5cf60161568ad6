//! Configuration management for tasklink.
//!
//! This module handles loading and saving configuration from `~/.tasklink/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, LinksConfig, VaultConfig};
