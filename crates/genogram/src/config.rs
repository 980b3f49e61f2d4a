//! Configuration types for genogram layout and rendering.
//!
//! All types implement [`serde::Deserialize`] with every field defaulted, so
//! a configuration file only needs to name the values it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - The geometry consumed by the layout engine.
//! - [`StyleConfig`] - Visual styling of the SVG output.
//!
//! # Example
//!
//! ```
//! # use genogram::config::AppConfig;
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     [layout]
//!     vertical_spacing = 160.0
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.layout().vertical_spacing(), 160.0);
//! assert_eq!(config.layout().person_width(), 80.0);
//! assert!(config.layout().validate().is_ok());
//! ```

use serde::Deserialize;

use genogram_core::{color::Color, geometry::Size};

use crate::GenogramError;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Geometry of the layout, in abstract layout units.
///
/// Every value must be positive and finite; see [`LayoutConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    person_width: f32,
    person_height: f32,
    horizontal_spacing: f32,
    vertical_spacing: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            person_width: 80.0,
            person_height: 80.0,
            horizontal_spacing: 40.0,
            vertical_spacing: 120.0,
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    ///
    /// # Arguments
    ///
    /// * `person_width` - Width of one person's footprint.
    /// * `person_height` - Height of one person's footprint.
    /// * `horizontal_spacing` - Gap between two adjacent slots.
    /// * `vertical_spacing` - Distance between two consecutive tiers.
    pub fn new(
        person_width: f32,
        person_height: f32,
        horizontal_spacing: f32,
        vertical_spacing: f32,
    ) -> Self {
        Self {
            person_width,
            person_height,
            horizontal_spacing,
            vertical_spacing,
        }
    }

    pub fn person_width(&self) -> f32 {
        self.person_width
    }

    pub fn person_height(&self) -> f32 {
        self.person_height
    }

    pub fn horizontal_spacing(&self) -> f32 {
        self.horizontal_spacing
    }

    pub fn vertical_spacing(&self) -> f32 {
        self.vertical_spacing
    }

    /// Returns the footprint of a single person.
    pub fn person_size(&self) -> Size {
        Size::new(self.person_width, self.person_height)
    }

    /// Returns the horizontal distance between the centers of two adjacent slots.
    pub fn slot_pitch(&self) -> f32 {
        self.person_width + self.horizontal_spacing
    }

    /// Checks that every value is positive and finite.
    ///
    /// # Errors
    ///
    /// Returns [`GenogramError::Configuration`] naming the first offending value.
    pub fn validate(&self) -> Result<(), GenogramError> {
        let values = [
            ("person_width", self.person_width),
            ("person_height", self.person_height),
            ("horizontal_spacing", self.horizontal_spacing),
            ("vertical_spacing", self.vertical_spacing),
        ];

        for (name, value) in values {
            if !(value.is_finite() && value > 0.0) {
                return Err(GenogramError::Configuration(format!(
                    "`{name}` must be a positive number, got {value}"
                )));
            }
        }

        Ok(())
    }
}

/// Visual styling configuration for rendered genograms.
///
/// Colors are CSS color strings. They are validated when a document is
/// rendered, not when the configuration is loaded.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: Option<String>,
    stroke_color: String,
    fill_color: String,
    text_color: String,
    stroke_width: f32,
    font_size: f32,
    /// Distance from the bottom edge of a person's symbol to its name label.
    label_offset: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            stroke_color: "#1f2937".to_string(),
            fill_color: "white".to_string(),
            text_color: "#1f2937".to_string(),
            stroke_width: 2.0,
            font_size: 14.0,
            label_offset: 15.0,
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the color of outlines and connector lines.
    pub fn stroke_color(&self) -> Result<Color, String> {
        Color::new(&self.stroke_color).map_err(|err| format!("Invalid stroke color in config: {err}"))
    }

    /// Returns the fill color of person symbols.
    pub fn fill_color(&self) -> Result<Color, String> {
        Color::new(&self.fill_color).map_err(|err| format!("Invalid fill color in config: {err}"))
    }

    /// Returns the color of name labels.
    pub fn text_color(&self) -> Result<Color, String> {
        Color::new(&self.text_color).map_err(|err| format!("Invalid text color in config: {err}"))
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn label_offset(&self) -> f32 {
        self.label_offset
    }

    /// Checks the numeric style settings.
    ///
    /// Stroke width and label offset may be zero but not negative; the font
    /// size must be positive. None of them may be NaN or infinite.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first offending value.
    pub fn validate(&self) -> Result<(), String> {
        let non_negative = [
            ("stroke_width", self.stroke_width),
            ("label_offset", self.label_offset),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("`{name}` must be a non-negative number, got {value}"));
            }
        }

        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(format!(
                "`font_size` must be a positive number, got {}",
                self.font_size
            ));
        }

        Ok(())
    }
}
