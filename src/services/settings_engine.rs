// DruckerForum shell Settings Engine
// Loads the shell configuration from a JSON file at the platform-specific config path.
// The shell never writes it; a missing file means defaults.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::ShellSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<ShellSettings, SettingsError>;
    fn get_settings(&self) -> &ShellSettings;
    fn get_config_path(&self) -> &str;
}

/// Settings engine implementation that reads settings from JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: ShellSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses the platform-specific config directory with `settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => platform::get_config_dir()
                .join("settings.json")
                .to_string_lossy()
                .to_string(),
        };

        Self {
            config_path,
            settings: ShellSettings::default(),
        }
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// If the file does not exist, returns default settings.
    /// If the file exists but is malformed, returns a serialization error.
    fn load(&mut self) -> Result<ShellSettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            debug!(path = %self.config_path, "no settings file, using defaults");
            self.settings = ShellSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        let settings: ShellSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;

        debug!(path = %self.config_path, "settings loaded");
        self.settings = settings;
        Ok(self.settings.clone())
    }

    fn get_settings(&self) -> &ShellSettings {
        &self.settings
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
