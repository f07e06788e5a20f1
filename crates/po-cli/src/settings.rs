//! Last-used directory persistence.
//!
//! Settings are stored as TOML in the platform-specific config folder:
//! - macOS: ~/Library/Application Support/com.po-formatter.PO Formatter/
//! - Windows: %APPDATA%/po-formatter/PO Formatter/config/
//! - Linux: ~/.config/poformatter/
//!
//! `PO_FORMATTER_SETTINGS` overrides the file location.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "po-formatter";
const APP_NAME: &str = "PO Formatter";
const CONFIG_FILENAME: &str = "settings.toml";

/// Environment variable naming an explicit settings file.
pub const SETTINGS_ENV: &str = "PO_FORMATTER_SETTINGS";

/// Directories remembered between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Folder the last order sheet was read from.
    pub input_dir: Option<PathBuf>,
    /// Folder the last vendor document was written to.
    pub output_dir: Option<PathBuf>,
}

/// Which remembered directory to update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirKind {
    Input,
    Output,
}

impl Settings {
    pub fn get(&self, kind: DirKind) -> Option<&Path> {
        match kind {
            DirKind::Input => self.input_dir.as_deref(),
            DirKind::Output => self.output_dir.as_deref(),
        }
    }

    pub fn set(&mut self, kind: DirKind, dir: PathBuf) {
        match kind {
            DirKind::Input => self.input_dir = Some(dir),
            DirKind::Output => self.output_dir = Some(dir),
        }
    }
}

/// Settings file location plus `load` / `save` operations.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: Option<PathBuf>,
}

impl SettingsStore {
    /// Store backed by an explicit file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Store at `PO_FORMATTER_SETTINGS`, or the platform config folder.
    ///
    /// The path is `None` if the platform-specific directory cannot be determined.
    pub fn discover() -> Self {
        let path = std::env::var_os(SETTINGS_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
                    .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
            });
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load settings from disk.
    ///
    /// Returns default settings if the file is missing, unreadable or cannot
    /// be parsed.
    pub fn load(&self) -> Settings {
        let Some(path) = &self.path else {
            tracing::warn!("Could not determine settings path, using defaults");
            return Settings::default();
        };

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    tracing::debug!(path = %path.display(), "Loaded settings");
                    settings
                }
                Err(e) => {
                    tracing::warn!("Failed to parse settings file: {}, using defaults", e);
                    Settings::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No settings file, using defaults");
                Settings::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read settings file: {}, using defaults", e);
                Settings::default()
            }
        }
    }

    /// Remember `dir` as the last-used directory of `kind`.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self, kind: DirKind, dir: &Path) -> Result<()> {
        let mut settings = self.load();
        settings.set(kind, dir.to_path_buf());
        self.write(&settings)
    }

    /// Remove the settings file. Returns whether a file was removed.
    pub fn clear(&self) -> Result<bool> {
        let path = self.require_path()?;
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("remove {}", path.display())),
        }
    }

    fn write(&self, settings: &Settings) -> Result<()> {
        let path = self.require_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(settings).context("serialize settings")?;
        fs::write(path, content).with_context(|| format!("write {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Saved settings");
        Ok(())
    }

    fn require_path(&self) -> Result<&Path> {
        self.path()
            .ok_or_else(|| anyhow!("could not determine settings path"))
    }
}
