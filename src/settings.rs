use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default backing file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "proyectos.csv";
/// Seed for the first-run sample table.
pub const DEFAULT_SEED: u64 = 42;

/// Persisted user settings (lives in the OS config directory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub data_file: PathBuf,
    pub seed: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            seed: DEFAULT_SEED,
        }
    }
}

impl AppSettings {
    /// Load `settings.json` from the config directory, falling back to defaults.
    pub fn load() -> Self {
        match Self::settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read settings, using defaults");
                return Self::default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "invalid settings file, using defaults");
                Self::default()
            }
        }
    }

    fn settings_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "ProjectTracker")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }
}
