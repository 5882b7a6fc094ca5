use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{ActivityLevel, Goal, PersonProfile, Units};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application metadata
    pub metadata: ConfigMetadata,

    /// General application settings
    pub settings: AppSettings,

    /// Saved profiles, keyed by a user-chosen name
    pub profiles: HashMap<String, PersonProfile>,

    /// Name of the currently active profile
    pub default_profile: Option<String>,
}

/// Configuration metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigMetadata {
    /// Configuration format version
    pub version: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Default units for display (metric/imperial)
    pub default_units: Units,

    /// Activity level assumed when none is given on the command line
    pub default_activity: Option<ActivityLevel>,

    /// Goal assumed when none is given on the command line
    pub default_goal: Option<Goal>,

    /// Directory exported reports are written to
    pub report_dir: PathBuf,
}

impl Default for ConfigMetadata {
    fn default() -> Self {
        let now = Utc::now();
        ConfigMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            default_units: Units::Metric,
            default_activity: None,
            default_goal: None,
            report_dir: PathBuf::from("./reports"),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            metadata: ConfigMetadata::default(),
            settings: AppSettings::default(),
            profiles: HashMap::new(),
            default_profile: None,
        }
    }
}

/// Configuration management implementation
impl AppConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: AppConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML configuration")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        // Update modification timestamp
        self.metadata.updated_at = Utc::now();

        // Create directory if it doesn't exist
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml_content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration to TOML")?;

        fs::write(&path, toml_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Get default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fitrs")
            .join("config.toml")
    }

    /// Load configuration with fallback to defaults
    pub fn load_or_default() -> Self {
        let config_path = Self::default_config_path();

        match Self::load_from_file(&config_path) {
            Ok(config) => config,
            Err(_) => {
                tracing::debug!(path = %config_path.display(), "config file not found, using defaults");
                Self::default()
            }
        }
    }

    /// Save configuration to default location
    pub fn save_default(&mut self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to_file(config_path)
    }

    /// Add or replace a saved profile
    pub fn add_profile(&mut self, name: impl Into<String>, profile: PersonProfile) {
        let name = name.into();

        // First profile becomes the active one
        if self.profiles.is_empty() {
            self.default_profile = Some(name.clone());
        }

        self.profiles.insert(name, profile);
        self.metadata.updated_at = Utc::now();
    }

    /// Remove a saved profile
    pub fn remove_profile(&mut self, name: &str) -> Result<()> {
        if self.profiles.remove(name).is_none() {
            return Err(anyhow::anyhow!("Profile not found: {}", name));
        }

        // Clear the active pointer if it referenced the removed profile
        if self.default_profile.as_deref() == Some(name) {
            self.default_profile = self.profiles.keys().next().cloned();
        }

        self.metadata.updated_at = Utc::now();
        Ok(())
    }

    /// Get a saved profile by name
    pub fn get_profile(&self, name: &str) -> Option<&PersonProfile> {
        self.profiles.get(name)
    }

    /// Get the currently active profile
    pub fn get_default_profile(&self) -> Option<(&str, &PersonProfile)> {
        self.default_profile
            .as_deref()
            .and_then(|name| self.profiles.get(name).map(|p| (name, p)))
    }

    /// Set the active profile
    pub fn set_default_profile(&mut self, name: &str) -> Result<()> {
        if !self.profiles.contains_key(name) {
            return Err(anyhow::anyhow!("Profile not found: {}", name));
        }

        self.default_profile = Some(name.to_string());
        self.metadata.updated_at = Utc::now();
        Ok(())
    }
}
