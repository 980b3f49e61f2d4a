//! SVG export of a genogram layout.
//!
//! The document is sized to the layout's bounding box. Connectors are drawn
//! first so that person symbols cover their ends.

mod person;

use log::debug;
use svg::{Document, node::element as svg_element};

use genogram_core::{color::Color, family::GenogramData, geometry::Size};

use crate::{
    GenogramError,
    config::{LayoutConfig, StyleConfig},
    export::connector::{self, Connector},
    layout::Layout,
};

/// Builder for [`Svg`], resolving style settings up front.
pub struct SvgBuilder<'a> {
    layout_config: &'a LayoutConfig,
    style: Option<&'a StyleConfig>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new(layout_config: &'a LayoutConfig) -> Self {
        Self {
            layout_config,
            style: None,
        }
    }

    /// Use `style` instead of the default style.
    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Validates the style settings and creates the renderer.
    ///
    /// # Errors
    ///
    /// Returns [`GenogramError::Style`] if a configured color does not parse
    /// or a stroke width, font size or label offset is out of range.
    pub fn build(self) -> Result<Svg<'a>, GenogramError> {
        let default_style = StyleConfig::default();
        let style = self.style.unwrap_or(&default_style);

        style.validate().map_err(GenogramError::Style)?;

        let palette = Palette {
            background: style.background_color().map_err(GenogramError::Style)?,
            stroke: style.stroke_color().map_err(GenogramError::Style)?,
            fill: style.fill_color().map_err(GenogramError::Style)?,
            text: style.text_color().map_err(GenogramError::Style)?,
        };

        Ok(Svg {
            layout_config: self.layout_config,
            palette,
            stroke_width: style.stroke_width(),
            font_size: style.font_size(),
            label_offset: style.label_offset(),
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct Palette {
    background: Option<Color>,
    stroke: Color,
    fill: Color,
    text: Color,
}

/// Renders layouts to SVG documents.
pub struct Svg<'a> {
    layout_config: &'a LayoutConfig,
    palette: Palette,
    stroke_width: f32,
    font_size: f32,
    label_offset: f32,
}

impl Svg<'_> {
    /// Draws every person of `data` at their position in `layout`, plus all
    /// connectors between them.
    pub fn render(&self, data: &GenogramData, layout: &Layout) -> Document {
        let size = layout.size();

        let doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", size.width(), size.height()),
            )
            .set("width", size.width())
            .set("height", size.height());

        let mut doc = self.add_background(doc, size);

        let connectors = connector::connectors(data, layout, self.layout_config);
        debug!(connectors_count = connectors.len(); "Rendering connectors");

        let lines = connectors
            .iter()
            .fold(svg_element::Group::new().set("class", "connectors"), |group, c| {
                group.add(self.render_connector(c))
            });
        doc = doc.add(lines);

        let mut people = svg_element::Group::new().set("class", "people");
        for person in data.people() {
            if let Some(position) = layout.position(person.id()) {
                people = people.add(self.render_person(person, position));
            }
        }

        doc.add(people)
    }

    fn add_background(&self, doc: Document, size: Size) -> Document {
        let Some(background) = &self.palette.background else {
            return doc;
        };

        doc.add(
            svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", size.width())
                .set("height", size.height())
                .set("fill", background),
        )
    }

    fn render_connector(&self, connector: &Connector) -> svg_element::Line {
        svg_element::Line::new()
            .set("x1", connector.start().x())
            .set("y1", connector.start().y())
            .set("x2", connector.end().x())
            .set("y2", connector.end().y())
            .set("stroke", &self.palette.stroke)
            .set("stroke-width", self.stroke_width)
    }
}

#[cfg(test)]
mod tests {
    use genogram_core::family::{Person, Relationship, Sex};

    use super::*;
    use crate::{config::AppConfig, layout::layout};

    fn family() -> GenogramData {
        GenogramData::new(
            vec![
                Person::new("a", "Adam", Sex::Male),
                Person::new("b", "Beth", Sex::Female),
                Person::new("c", "Cleo", Sex::Female),
            ],
            vec![Relationship::new("r1", "a", "b").with_children(["c"])],
        )
    }

    fn render(config: &AppConfig) -> Result<String, GenogramError> {
        let data = family();
        let layout = layout(&data, config.layout())?;
        let svg = SvgBuilder::new(config.layout())
            .with_style(config.style())
            .build()?;
        Ok(svg.render(&data, &layout).to_string())
    }

    #[test]
    fn test_document_sized_to_layout() {
        let output = render(&AppConfig::default()).unwrap();

        assert!(output.contains(r#"width="280""#));
        assert!(output.contains(r#"height="280""#));
        assert!(output.contains(r#"viewBox="0 0 280 280""#));
    }

    #[test]
    fn test_symbols_follow_sex() {
        let output = render(&AppConfig::default()).unwrap();

        assert_eq!(output.matches("<rect").count(), 1);
        assert_eq!(output.matches("<circle").count(), 2);
        assert_eq!(output.matches("<line").count(), 3);
        assert!(output.contains("Adam"));
        assert!(output.contains("Cleo"));
    }

    #[test]
    fn test_background_rect_when_configured() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            background_color = "white"
            "#,
        )
        .unwrap();

        let output = render(&config).unwrap();

        assert_eq!(output.matches("<rect").count(), 2);
    }

    #[test]
    fn test_invalid_color_fails_build() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            stroke_color = "definitely-not-a-color"
            "#,
        )
        .unwrap();

        let result = render(&config);
        assert!(matches!(result, Err(GenogramError::Style(_))));
    }

    #[test]
    fn test_nan_font_size_fails_build() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            font_size = nan
            "#,
        )
        .unwrap();

        match render(&config) {
            Err(GenogramError::Style(message)) => assert!(message.contains("font_size")),
            other => panic!("Expected Style error, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_stroke_width_fails_build() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            stroke_width = -2.0
            "#,
        )
        .unwrap();

        let result = render(&config);
        assert!(matches!(result, Err(GenogramError::Style(_))));
    }
}
