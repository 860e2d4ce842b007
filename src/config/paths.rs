//! Path management for the contact assistant
//!
//! Provides XDG-compliant path resolution for the configuration directory.
//!
//! ## Path Resolution Order
//!
//! 1. `ASSISTANT_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/contact-assistant` or `~/.config/contact-assistant`
//! 3. Windows: `%APPDATA%\contact-assistant`

use std::path::PathBuf;

use crate::error::AssistantError;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "ASSISTANT_CONFIG_DIR";

const APP_DIR_NAME: &str = "contact-assistant";

/// Manages all paths used by the contact assistant
#[derive(Debug, Clone)]
pub struct AssistantPaths {
    base_dir: PathBuf,
}

impl AssistantPaths {
    /// Create a new AssistantPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, AssistantError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create AssistantPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/contact-assistant/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), AssistantError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            AssistantError::Io(format!("Failed to create config directory: {}", e))
        })?;
        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default config directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, AssistantError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                AssistantError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join(APP_DIR_NAME))
}

/// Resolve the default config directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, AssistantError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| AssistantError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR_NAME))
}
