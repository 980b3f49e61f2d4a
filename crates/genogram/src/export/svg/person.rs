//! Person symbols: a square for men, a circle for women, name underneath.

use svg::node::element as svg_element;

use genogram_core::{
    family::{Person, Sex},
    geometry::Point,
};

use super::Svg;

impl Svg<'_> {
    pub(super) fn render_person(&self, person: &Person, position: Point) -> svg_element::Group {
        let size = self.layout_config.person_size();

        let group = svg_element::Group::new().set("data-person", person.id().to_string());

        let group = match person.sex() {
            Sex::Male => {
                let top_left = position.to_bounds(size).min_point();
                group.add(
                    svg_element::Rectangle::new()
                        .set("x", top_left.x())
                        .set("y", top_left.y())
                        .set("width", size.width())
                        .set("height", size.height())
                        .set("fill", &self.palette.fill)
                        .set("stroke", &self.palette.stroke)
                        .set("stroke-width", self.stroke_width),
                )
            }
            Sex::Female => group.add(
                svg_element::Circle::new()
                    .set("cx", position.x())
                    .set("cy", position.y())
                    .set("r", size.width() / 2.0)
                    .set("fill", &self.palette.fill)
                    .set("stroke", &self.palette.stroke)
                    .set("stroke-width", self.stroke_width),
            ),
        };

        group.add(
            svg_element::Text::new(person.name())
                .set("x", position.x())
                .set("y", position.y() + size.height() / 2.0 + self.label_offset)
                .set("text-anchor", "middle")
                .set("font-family", "sans-serif")
                .set("font-size", self.font_size)
                .set("fill", &self.palette.text),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{LayoutConfig, StyleConfig};
    use crate::export::svg::SvgBuilder;

    use super::*;

    #[test]
    fn test_male_symbol_is_centered_square() {
        let config = LayoutConfig::default();
        let svg = SvgBuilder::new(&config).build().unwrap();
        let person = Person::new("a", "Adam", Sex::Male);

        let output = svg.render_person(&person, Point::new(80.0, 80.0)).to_string();

        assert!(output.contains(r#"x="40""#));
        assert!(output.contains(r#"y="40""#));
        assert!(output.contains(r#"width="80""#));
        assert!(!output.contains("<circle"));
    }

    #[test]
    fn test_female_symbol_is_circle() {
        let config = LayoutConfig::default();
        let svg = SvgBuilder::new(&config).build().unwrap();
        let person = Person::new("b", "Beth", Sex::Female);

        let output = svg.render_person(&person, Point::new(200.0, 80.0)).to_string();

        assert!(output.contains(r#"cx="200""#));
        assert!(output.contains(r#"r="40""#));
        assert!(!output.contains("<rect"));
    }

    #[test]
    fn test_label_sits_below_symbol() {
        let config = LayoutConfig::default();
        let style = StyleConfig::default();
        let svg = SvgBuilder::new(&config).with_style(&style).build().unwrap();
        let person = Person::new("c", "Cleo", Sex::Female);

        let output = svg.render_person(&person, Point::new(140.0, 200.0)).to_string();

        // 200 + 80 / 2 + 15
        assert!(output.contains(r#"y="255""#));
        assert!(output.contains("Cleo"));
    }
}
