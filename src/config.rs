//! Embed configuration: where the SVG comes from, where the component goes,
//! and how the component is named
//!
//! Both paths are injected configuration with compiled-in defaults,
//! overridable from a TOML file or the CLI.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default location of the source SVG, relative to the working directory
pub const DEFAULT_SOURCE: &str = "assets/logo.svg";

/// Default destination component file
pub const DEFAULT_DESTINATION: &str = "src/components/Logo.tsx";

/// Default component (and props-interface) name
pub const DEFAULT_COMPONENT_NAME: &str = "Logo";

/// Default Tailwind classes joined with the caller-supplied `className`
pub const DEFAULT_BASE_CLASS: &str = "h-6 w-auto";

/// Errors that can occur when loading or parsing a config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for a single embed run
#[derive(Debug, Clone)]
pub struct EmbedConfig {
    /// Source SVG file
    pub source: PathBuf,
    /// Destination component file (overwritten unconditionally)
    pub destination: PathBuf,
    /// Name of the generated component; the props interface is `<name>Props`
    pub component_name: String,
    /// Base classes placed first in the `cn(...)` expression
    pub base_class: String,
}

/// TOML structure for deserializing config files
#[derive(Deserialize)]
struct TomlConfig {
    paths: Option<TomlPaths>,
    component: Option<TomlComponent>,
}

#[derive(Deserialize)]
struct TomlPaths {
    source: Option<PathBuf>,
    destination: Option<PathBuf>,
}

#[derive(Deserialize)]
struct TomlComponent {
    name: Option<String>,
    base_class: Option<String>,
}

impl EmbedConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    ///
    /// Missing keys fall back to the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(paths) = parsed.paths {
            if let Some(source) = paths.source {
                config.source = source;
            }
            if let Some(destination) = paths.destination {
                config.destination = destination;
            }
        }
        if let Some(component) = parsed.component {
            if let Some(name) = component.name {
                config.component_name = name;
            }
            if let Some(base_class) = component.base_class {
                config.base_class = base_class;
            }
        }

        Ok(config)
    }

    /// Set the source SVG path
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    /// Set the destination component path
    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = destination.into();
        self
    }

    /// Set the component name
    pub fn with_component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = name.into();
        self
    }

    /// Set the base class string
    pub fn with_base_class(mut self, base_class: impl Into<String>) -> Self {
        self.base_class = base_class.into();
        self
    }
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            destination: PathBuf::from(DEFAULT_DESTINATION),
            component_name: DEFAULT_COMPONENT_NAME.to_string(),
            base_class: DEFAULT_BASE_CLASS.to_string(),
        }
    }
}
