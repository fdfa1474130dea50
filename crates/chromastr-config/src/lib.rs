//! Chromastr Config
//!
//! This crate handles configuration loading and the choice of default
//! color format for chromastr, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/chromastr/config.toml`
//! - macOS: `~/Library/Application Support/chromastr/config.toml`
//! - Windows: `%APPDATA%\chromastr\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use chromastr_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//! let format = config.default_format();
//!
//! // Or load with an inline override
//! let config = Config::load_with_override(Some("[color]\nFormat = \"24b\"")).unwrap();
//! ```

mod color;
pub mod detect;

pub use color::ColorConfig;

use chromastr_core::{ChromaError, ColorFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[color]
# Format   = "8b"   # "4b", "8b" or "24b"; unset picks from terminal support
# Extended = true   # override terminal detection
# Reset    = true   # emit ESC[0m after styled text
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Color output configuration
    #[serde(default)]
    pub color: ColorConfig,
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use chromastr_config::Config;
    /// assert!(Config::default_toml().contains("[color]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "chromastr")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| ChromaError::Config("Could not determine config directory".into()))?;

        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            log::debug!("writing default config to {}", config_path.display());
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        log::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        log::debug!("loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| ChromaError::Config(format!("in {}: {e}", path.display())))
    }

    /// Parse configuration from a TOML string.
    ///
    /// ```
    /// use chromastr_config::Config;
    /// use chromastr_core::ColorFormat;
    ///
    /// let config = Config::parse("[color]\nFormat = \"4b\"").unwrap();
    /// assert_eq!(config.default_format(), ColorFormat::Ansi4);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ChromaError::Config(format!("Parse error: {e}")))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` names an existing file, load and merge it;
    ///    otherwise parse it as inline TOML and merge that
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            let override_toml = if override_path.exists() {
                std::fs::read_to_string(override_path)?
            } else {
                override_str.to_string()
            };

            let override_config: Config = toml::from_str(&override_toml)
                .map_err(|e| ChromaError::Config(format!("Override parse error: {e}")))?;

            config.merge(&override_config);
        }

        Ok(config)
    }

    /// Merge another config into this one.
    ///
    /// Values set in `other` take precedence over values in `self`.
    ///
    /// ```
    /// use chromastr_config::Config;
    /// use chromastr_core::ColorFormat;
    ///
    /// let mut base = Config::default();
    /// let other = Config::parse("[color]\nFormat = \"24b\"").unwrap();
    /// base.merge(&other);
    /// assert_eq!(base.color.format, Some(ColorFormat::Ansi24));
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.color.merge(&other.color);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ChromaError::Config(format!("Serialization error: {e}")))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// The color format new styled text should be quantized into.
    ///
    /// An explicit `Format` wins; otherwise 8-bit when the terminal
    /// supports extended colors, 4-bit when it does not.
    pub fn default_format(&self) -> ColorFormat {
        self.color
            .format_for(detect::terminal_supports_extended_colors())
    }
}
