//! Configuration file support
//!
//! Loads settings from `$HILITE_CONFIG`, or ~/.hilite.toml
//! (%USERPROFILE%\.hilite.toml on Windows). A missing file means defaults.
//!
//! Example:
//! ```text
//! # hilite configuration
//! font_size = 16
//! theme = "dark"
//! token_cache_capacity = 512
//! render_cache_capacity = 128
//! ```

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::syntax::ThemeMode;

/// Smallest font size the viewer allows
pub const MIN_FONT_SIZE: f32 = 10.0;
/// Largest font size the viewer allows
pub const MAX_FONT_SIZE: f32 = 40.0;

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum cached token span sets
    pub token_cache_capacity: usize,
    /// Maximum cached styled outputs
    pub render_cache_capacity: usize,
    /// Base font size in points
    pub font_size: f32,
    /// Display mode
    pub theme: ThemeMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token_cache_capacity: 256,
            render_cache_capacity: 128,
            font_size: 14.0,
            theme: ThemeMode::Light,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("HILITE_CONFIG") {
            return Some(PathBuf::from(path));
        }

        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".hilite.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".hilite.toml"))
        }
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Some(path) => path,
            None => return Ok(Self::default()),
        };

        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!(path = %path.display(), "loading config");
                Self::parse(&contents)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        config.normalize();
        Ok(config)
    }

    /// Clamp values into their allowed ranges
    fn normalize(&mut self) {
        self.font_size = clamp_font_size(self.font_size);
        self.token_cache_capacity = self.token_cache_capacity.max(1);
        self.render_cache_capacity = self.render_cache_capacity.max(1);
    }
}

/// Clamp a font size to the viewer's range
pub fn clamp_font_size(size: f32) -> f32 {
    if size.is_nan() {
        return Config::default().font_size;
    }
    size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}
