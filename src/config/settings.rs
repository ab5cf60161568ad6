//! Configuration settings for tasklink.
//!
//! Settings are loaded from `~/.tasklink/config.yaml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::TasklinkError;
use crate::features::link::{DEFAULT_BACK_REFERENCE_LABEL, DEFAULT_PROJECT_LINK_LABEL};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Vault used for deep links and link resolution.
    pub vault: VaultConfig,
    /// Labels of generated links.
    pub links: LinksConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Vault settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct VaultConfig {
    /// Vault name as the note app knows it.
    pub name: Option<String>,
    /// Directory holding the vault's notes.
    pub root: Option<PathBuf>,
}

/// Link label settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LinksConfig {
    /// Label of the back-reference placed in task descriptions.
    #[serde(default = "default_back_reference_label")]
    pub back_reference_label: String,
    /// Label of the project link inserted into notes.
    #[serde(default = "default_project_link_label")]
    pub project_link_label: String,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

fn default_back_reference_label() -> String {
    DEFAULT_BACK_REFERENCE_LABEL.to_string()
}

fn default_project_link_label() -> String {
    DEFAULT_PROJECT_LINK_LABEL.to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            back_reference_label: default_back_reference_label(),
            project_link_label: default_project_link_label(),
        }
    }
}

impl VaultConfig {
    /// The vault name for a note.
    ///
    /// Falls back to the root directory's name, then to the note's parent
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns `TasklinkError::Config` if no name can be determined.
    pub fn name_for(&self, note: &Path) -> Result<String, TasklinkError> {
        let dir_name = |p: &Path| {
            p.file_name()
                .and_then(|n| n.to_str())
                .filter(|n| !n.is_empty())
                .map(str::to_string)
        };

        self.name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| self.root.as_deref().and_then(dir_name))
            .or_else(|| note.parent().and_then(dir_name))
            .ok_or_else(|| {
                TasklinkError::Config(
                    "Vault name unknown: set vault.name or pass --vault".to_string(),
                )
            })
    }

    /// The note's path relative to the vault root.
    ///
    /// Notes outside the root, or with no root configured, are named by
    /// their file name alone.
    #[must_use]
    pub fn note_path(&self, note: &Path) -> String {
        self.root
            .as_deref()
            .and_then(|root| note.strip_prefix(root).ok())
            .unwrap_or_else(|| note.file_name().map_or(note, Path::new))
            .to_string_lossy()
            .replace('\\', "/")
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, TasklinkError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TasklinkError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            TasklinkError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &Path) -> Result<(), TasklinkError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| TasklinkError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            TasklinkError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Render the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, TasklinkError> {
        serde_yaml::to_string(self)
            .map_err(|e| TasklinkError::Config(format!("Failed to serialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.general.color, ColorSetting::Auto);
        assert_eq!(config.vault, VaultConfig::default());
        assert_eq!(config.links.back_reference_label, "o");
        assert_eq!(config.links.project_link_label, "Todoist");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.vault.name = Some("Second Brain".to_string());
        config.links.back_reference_label = "note".to_string();

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.vault.name.as_deref(), Some("Second Brain"));
        assert_eq!(loaded.links.back_reference_label, "note");
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = r#"
general:
  default_output: json
links:
  project_link_label: Tracker
"#;
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Custom values should be loaded
        assert_eq!(config.general.default_output, OutputFormat::Json);
        assert_eq!(config.links.project_link_label, "Tracker");
        // Defaults should be used for missing fields
        assert_eq!(config.general.color, ColorSetting::Auto);
        assert_eq!(config.links.back_reference_label, "o");
    }

    #[test]
    fn test_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "general: [not, a, map]").unwrap();

        assert!(matches!(
            Config::load_from_path(&config_path),
            Err(TasklinkError::Config(_))
        ));
    }

    #[test]
    fn test_vault_name_fallbacks() {
        let note = Path::new("/notes/Brain/Inbox.md");

        let named = VaultConfig {
            name: Some("Work".to_string()),
            root: Some(PathBuf::from("/notes/Brain")),
        };
        assert_eq!(named.name_for(note).unwrap(), "Work");

        let rooted = VaultConfig {
            name: None,
            root: Some(PathBuf::from("/notes/Brain")),
        };
        assert_eq!(rooted.name_for(note).unwrap(), "Brain");

        assert_eq!(VaultConfig::default().name_for(note).unwrap(), "Brain");
        assert!(VaultConfig::default().name_for(Path::new("Inbox.md")).is_err());
    }

    #[test]
    fn test_note_path() {
        let vault = VaultConfig {
            name: None,
            root: Some(PathBuf::from("/notes/Brain")),
        };
        assert_eq!(vault.note_path(Path::new("/notes/Brain/Daily/Mon.md")), "Daily/Mon.md");
        assert_eq!(vault.note_path(Path::new("/elsewhere/Loose.md")), "Loose.md");
        assert_eq!(VaultConfig::default().note_path(Path::new("a/b/C.md")), "C.md");
    }
}
