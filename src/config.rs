//! Presentation settings loaded from TOML.
//!
//! The calculation itself is not configurable: thresholds and axis constants are fixed.
//! What can be tuned is how a result is drawn.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// File name looked up in the working directory when no path is given.
pub const LOCAL_CONFIG_NAME: &str = "flowcalc.toml";

/// Smallest usable terminal plot width in columns.
pub const MIN_TERMINAL_WIDTH: usize = 8;

/// Smallest usable terminal plot height in rows.
pub const MIN_TERMINAL_HEIGHT: usize = 4;

/// Where a legend is placed relative to the plot area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    /// Above the plot.
    Top,
    /// Below the plot.
    #[default]
    Bottom,
    /// Left of the plot.
    Left,
    /// Right of the plot.
    Right,
}

/// Visual style of the two chart series and the axes.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartStyle {
    /// Legend label of the theoretical line.
    pub trend_label: String,
    /// Line colour of the theoretical line.
    pub trend_color: String,
    /// Line width of the theoretical line in pixels.
    pub trend_width: u32,
    /// Dash pattern of the theoretical line; empty for a solid line.
    pub trend_dash: Vec<u32>,
    /// Legend label of the user's point.
    pub point_label: String,
    /// Fill colour of the user's point.
    pub point_color: String,
    /// Radius of the user's point in pixels.
    pub point_radius: u32,
    /// Radius of the user's point while hovered.
    pub point_hover_radius: u32,
    /// Title of the velocity axis.
    pub x_title: String,
    /// Title of the discharge axis.
    pub y_title: String,
    /// Legend placement.
    pub legend_position: LegendPosition,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            trend_label: "Behaviour curve (Q = A·v)".to_owned(),
            trend_color: "#9ca3af".to_owned(),
            trend_width: 2,
            trend_dash: vec![5, 5],
            point_label: "Your current point".to_owned(),
            point_color: "#4f46e5".to_owned(),
            point_radius: 6,
            point_hover_radius: 8,
            x_title: "Velocity v (m/s)".to_owned(),
            y_title: "Discharge Q (m³/s)".to_owned(),
            legend_position: LegendPosition::Bottom,
        }
    }
}

/// Size of the plot drawn by the terminal front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerminalConfig {
    /// Plot width in columns.
    pub width: usize,
    /// Plot height in rows.
    pub height: usize,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 16,
        }
    }
}

/// Complete configuration of the calculator front ends.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Chart appearance.
    pub chart: ChartStyle,
    /// Terminal plot size.
    pub terminal: TerminalConfig,
}

impl Config {
    /// Parse a configuration from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::Invalid`] when a value is out of range.
    ///
    /// # Examples
    /// ```
    /// use flowcalc::Config;
    ///
    /// let config = Config::from_toml_str("[terminal]\nwidth = 40\n").expect("valid config");
    /// assert_eq!(config.terminal.width, 40);
    /// assert_eq!(config.terminal.height, 16);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.check()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, otherwise the errors of
    /// [`Config::from_toml_str`].
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Resolve the configuration used by a front end.
    ///
    /// An explicit path must exist. Without one, [`LOCAL_CONFIG_NAME`] in `dir` is used when
    /// present and the defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Config::load_from_path`] for whichever file is read.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }
        let local: PathBuf = dir.join(LOCAL_CONFIG_NAME);
        if local.is_file() {
            Self::load_from_path(&local)
        } else {
            debug!("no {LOCAL_CONFIG_NAME} in {}, using defaults", dir.display());
            Ok(Self::default())
        }
    }

    /// Reject values that parse but cannot be drawn.
    fn check(&self) -> Result<(), ConfigError> {
        if self.terminal.width < MIN_TERMINAL_WIDTH {
            return Err(ConfigError::Invalid {
                key: "terminal.width",
                reason: format!(
                    "must be at least {MIN_TERMINAL_WIDTH} (received {})",
                    self.terminal.width
                ),
            });
        }
        if self.terminal.height < MIN_TERMINAL_HEIGHT {
            return Err(ConfigError::Invalid {
                key: "terminal.height",
                reason: format!(
                    "must be at least {MIN_TERMINAL_HEIGHT} (received {})",
                    self.terminal.height
                ),
            });
        }
        Ok(())
    }
}
