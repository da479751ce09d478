//! Switch configuration loaded from YAML or TOML.
//!
//! Every field is optional; a missing field takes the value a
//! [`SwitchControl`](crate::SwitchControl) would use without any config.
//!
//! ```yaml
//! width: 64
//! height: 36
//! border_margin: 3
//! on_thumb_tint: "#34c759"
//! on: true
//! ```

use crate::error::ConfigError;
use pmz_core::{Color, Rect};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Width of the frame used when none (or an empty one) is given.
pub const DEFAULT_WIDTH: f32 = 50.0;
/// Height of the frame used when none (or an empty one) is given.
pub const DEFAULT_HEIGHT: f32 = 30.0;
/// Gap between the track edge and the thumb.
pub const DEFAULT_BORDER_MARGIN: f32 = 2.0;
/// Length of every state transition, in seconds.
pub const DEFAULT_ANIMATION_DURATION: f64 = 0.3;
/// Width of the two sign strokes.
pub const DEFAULT_STROKE_WIDTH: f32 = 4.0;

/// The 50x30 frame at the origin.
#[must_use]
pub const fn default_frame() -> Rect {
    Rect::new(0.0, 0.0, DEFAULT_WIDTH, DEFAULT_HEIGHT)
}

/// Switch configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwitchConfig {
    /// Track width
    #[serde(default = "default_width")]
    pub width: f32,
    /// Track height (also the thumb's outer side)
    #[serde(default = "default_height")]
    pub height: f32,
    /// Gap between the track edge and the thumb
    #[serde(default = "default_border_margin")]
    pub border_margin: f32,
    /// Transition length in seconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration: f64,
    /// Width of the sign strokes
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
    /// Track fill
    #[serde(with = "hex_color", default = "default_track_color")]
    pub track_color: Color,
    /// Thumb fill while off
    #[serde(with = "hex_color", default = "default_thumb_tint")]
    pub thumb_tint: Color,
    /// Thumb fill while on
    #[serde(with = "hex_color", default = "default_on_thumb_tint")]
    pub on_thumb_tint: Color,
    /// Thumb drop shadow color
    #[serde(with = "hex_color", default = "default_shadow_color")]
    pub shadow_color: Color,
    /// Initial value
    #[serde(default)]
    pub on: bool,
}

const fn default_width() -> f32 {
    DEFAULT_WIDTH
}

const fn default_height() -> f32 {
    DEFAULT_HEIGHT
}

const fn default_border_margin() -> f32 {
    DEFAULT_BORDER_MARGIN
}

const fn default_animation_duration() -> f64 {
    DEFAULT_ANIMATION_DURATION
}

const fn default_stroke_width() -> f32 {
    DEFAULT_STROKE_WIDTH
}

const fn default_track_color() -> Color {
    Color::WHITE
}

fn default_thumb_tint() -> Color {
    Color::rgb(0.78, 0.78, 0.8)
}

fn default_on_thumb_tint() -> Color {
    Color::rgb(0.3, 0.85, 0.39)
}

const fn default_shadow_color() -> Color {
    Color::GRAY
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            border_margin: DEFAULT_BORDER_MARGIN,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            stroke_width: DEFAULT_STROKE_WIDTH,
            track_color: default_track_color(),
            thumb_tint: default_thumb_tint(),
            on_thumb_tint: default_on_thumb_tint(),
            shadow_color: default_shadow_color(),
            on: false,
        }
    }
}

impl SwitchConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. Files ending in `.toml` are read as TOML,
    /// anything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        log::debug!("loading switch config from {}", path.display());
        if is_toml {
            Self::from_toml(&source)
        } else {
            Self::from_yaml(&source)
        }
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check that the geometry leaves room for a thumb and that times and
    /// widths are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(ConfigError::invalid("width", "must be a positive number"));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(ConfigError::invalid("height", "must be a positive number"));
        }
        if self.width < self.height {
            return Err(ConfigError::invalid(
                "width",
                format!(
                    "{} is narrower than the thumb (height {})",
                    self.width, self.height
                ),
            ));
        }
        if !(self.border_margin.is_finite() && self.border_margin >= 0.0) {
            return Err(ConfigError::invalid(
                "border_margin",
                "must be zero or a positive number",
            ));
        }
        if 2.0 * self.border_margin >= self.height {
            return Err(ConfigError::invalid(
                "border_margin",
                format!(
                    "{} leaves no room for a thumb in a track {} high",
                    self.border_margin, self.height
                ),
            ));
        }
        if !(self.animation_duration.is_finite() && self.animation_duration >= 0.0) {
            return Err(ConfigError::invalid(
                "animation_duration",
                "must be zero or a positive number of seconds",
            ));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(ConfigError::invalid(
                "stroke_width",
                "must be a positive number",
            ));
        }
        Ok(())
    }

    /// The control frame at the origin.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Colors as `#rrggbb` / `#rrggbbaa` strings.
mod hex_color {
    use pmz_core::Color;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let hex = if color.a < 1.0 {
            color.to_hex_with_alpha()
        } else {
            color.to_hex()
        };
        serializer.serialize_str(&hex)
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        Color::from_hex(&hex).map_err(|e| D::Error::custom(format!("color '{hex}': {e}")))
    }
}
