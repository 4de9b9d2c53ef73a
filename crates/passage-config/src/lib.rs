//! Passage configuration system
//!
//! This crate provides centralized configuration management for passage
//! hosts, loading transition settings from `passage.toml` as an alternative
//! to environment variables.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use passage_core::{PropsMap, TransitionDefaults, TransitionDescriptor};

/// Main configuration structure for passage hosts
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PassageConfig {
    /// Transition settings
    pub transition: TransitionConfig,
    /// Container styling settings
    pub style: StyleConfig,
}

/// Transition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Named css transition (e.g. "fade"); wins over `props`
    pub name: Option<String>,
    /// Default timeout for class-driven transitions in milliseconds
    pub timeout_ms: Option<f32>,
    /// Raw engine props used when no name is set
    pub props: Option<toml::value::Table>,
    /// Engine props applied to every route; per-route props take precedence
    pub global_props: Option<toml::value::Table>,
}

/// Container styling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Disable default container classes on every route
    pub disable_default_classes: bool,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            name: None,
            timeout_ms: None,
            props: None,
            global_props: None,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            disable_default_classes: false,
        }
    }
}

impl PassageConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the passage.toml configuration file
    ///
    /// # Returns
    /// * `Ok(PassageConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (passage.toml in the
    /// current directory) or return default configuration if file doesn't exist
    ///
    /// A file that exists but fails to read or parse also falls back to the
    /// defaults, logged at WARN so a broken config is distinguishable from an
    /// absent one.
    pub fn load_or_default() -> Self {
        Self::load_or_default_from("passage.toml")
    }

    fn load_or_default_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(error) => {
                warn!("{}, using defaults", error);
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// This allows for temporary overrides without modifying the config file.
    pub fn merge_with_env(&mut self) {
        if let Ok(name) = std::env::var("PASSAGE_TRANSITION") {
            self.transition.name = Some(name);
        }
        if let Ok(val) = std::env::var("PASSAGE_TIMEOUT_MS") {
            if let Ok(timeout_ms) = val.parse::<f32>() {
                self.transition.timeout_ms = Some(timeout_ms);
            }
        }
        if let Ok(val) = std::env::var("PASSAGE_DISABLE_STYLE") {
            self.style.disable_default_classes = val == "1" || val.eq_ignore_ascii_case("true");
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// This is the recommended way to load configuration:
    /// 1. Load from passage.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }

    /// Build the transition descriptor configured by this file.
    ///
    /// `name` wins over `props`; with neither set the descriptor is
    /// `Unrecognized`, which resolves to the no-op passthrough.
    pub fn descriptor(&self) -> TransitionDescriptor {
        if let Some(name) = &self.transition.name {
            return TransitionDescriptor::named(name.clone());
        }
        if let Some(props) = &self.transition.props {
            if let Some(props) = table_to_props(props) {
                return TransitionDescriptor::props(props);
            }
        }
        TransitionDescriptor::Unrecognized
    }

    /// Build the composition-root defaults configured by this file.
    pub fn defaults(&self) -> TransitionDefaults {
        let mut defaults = TransitionDefaults::new(self.descriptor());
        if let Some(timeout_ms) = self.transition.timeout_ms {
            defaults = defaults.with_timeout_ms(timeout_ms);
        }
        if let Some(global) = &self.transition.global_props {
            if let Some(props) = table_to_props(global) {
                defaults.engine_props = props;
            }
        }
        defaults
    }
}

/// Convert a TOML table to a JSON prop map.
fn table_to_props(table: &toml::value::Table) -> Option<PropsMap> {
    match serde_json::to_value(table) {
        Ok(serde_json::Value::Object(props)) => Some(props),
        _ => None,
    }
}
