//! TOML configuration loader with validation.
//!
//! Loads [`ControllerConfig`] from TOML, validates every parameter
//! bound, and resolves the platform profile for the configured variant.
//! Any failure here is fatal — the controller is never constructed from
//! a half-valid configuration.

use std::path::Path;

use acu_common::config::ControllerConfig;
use acu_common::platform::PlatformProfile;

use crate::error::ConfigError;

/// Complete validated configuration bundle, ready for runtime use.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub controller: ControllerConfig,
    pub profile: PlatformProfile,
}

impl LoadedConfig {
    /// Total vehicle mass including the configured cargo allowance [kg].
    #[inline]
    pub fn total_mass_kg(&self) -> f64 {
        self.profile.total_mass_kg(self.controller.cargo_mass_kg)
    }
}

/// Load and validate the controller configuration from a TOML file.
///
/// 1. Read + parse `path` → [`ControllerConfig`]
/// 2. Validate parameter bounds
/// 3. Resolve the platform profile for the configured variant
pub fn load_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    load_config_from_str(&raw)
}

/// Load config from a TOML string (also used by tests).
pub fn load_config_from_str(raw: &str) -> Result<LoadedConfig, ConfigError> {
    let controller: ControllerConfig =
        toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;

    controller.validate().map_err(ConfigError::Validation)?;

    let profile = controller.variant.profile();
    Ok(LoadedConfig {
        controller,
        profile,
    })
}
