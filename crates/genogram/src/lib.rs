//! Genogram - deterministic tiered layout for family-relationship diagrams.
//!
//! Given people and the partnerships between them, [`layout::layout`]
//! assigns every person a position: partners side by side on one tier,
//! their children centered on the tier below. [`GenogramBuilder`] bundles
//! the layout with SVG rendering.

pub mod config;
pub mod export;
pub mod layout;

mod error;

pub use genogram_core::{color, family, geometry, identifier};

pub use error::GenogramError;

use log::{debug, info};

use config::AppConfig;
use export::svg::SvgBuilder;
use family::GenogramData;
use layout::Layout;

/// Builder for laying out and rendering genograms.
///
/// # Examples
///
/// ```rust
/// use genogram::{
///     GenogramBuilder,
///     config::AppConfig,
///     family::{GenogramData, Person, Relationship, Sex},
/// };
///
/// let data = GenogramData::new(
///     vec![
///         Person::new("a", "Adam", Sex::Male),
///         Person::new("b", "Beth", Sex::Female),
///     ],
///     vec![Relationship::new("r1", "a", "b")],
/// );
///
/// let builder = GenogramBuilder::new(AppConfig::default());
///
/// let layout = builder.layout(&data).expect("Failed to lay out");
/// assert_eq!(layout.len(), 2);
///
/// let svg = builder.render_svg(&data).expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct GenogramBuilder {
    config: AppConfig,
}

impl GenogramBuilder {
    /// Create a new genogram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder uses.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Compute the position of every person in `data`.
    ///
    /// # Errors
    ///
    /// Returns `GenogramError` for an invalid layout configuration or a
    /// dataset without people.
    pub fn layout(&self, data: &GenogramData) -> Result<Layout, GenogramError> {
        layout::layout(data, self.config.layout())
    }

    /// Lay out `data` and render it to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `GenogramError` for layout failures and for style colors
    /// that do not parse.
    pub fn render_svg(&self, data: &GenogramData) -> Result<String, GenogramError> {
        let layout = self.layout(data)?;

        let svg = SvgBuilder::new(self.config.layout())
            .with_style(self.config.style())
            .build()?;
        debug!("SVG renderer configured");

        let document = svg.render(data, &layout);

        info!(people_count = layout.len(); "SVG rendered successfully");
        Ok(document.to_string())
    }
}
