//! Connector segments between partners and from partners to children.
//!
//! For a relationship whose partners are both positioned:
//!
//! ```text
//!   [A]──────────[B]      Partners
//!          │              Descent, down to the branch point
//!       ┌──┴──┐
//!      (C)   [D]          Child, one per positioned child
//! ```
//!
//! Child segments run straight from the branch point to the top edge of the
//! child's footprint.

use genogram_core::{family::GenogramData, geometry::Point, identifier::Id};

use crate::{config::LayoutConfig, layout::Layout};

/// Which part of a relationship a connector belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorKind {
    /// Between the two partners.
    Partners,
    /// From the partner midpoint down to the branch point.
    Descent,
    /// From the branch point to one child.
    Child,
}

/// A straight line segment to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    kind: ConnectorKind,
    relationship: Id,
    start: Point,
    end: Point,
}

impl Connector {
    fn new(kind: ConnectorKind, relationship: Id, start: Point, end: Point) -> Self {
        Self {
            kind,
            relationship,
            start,
            end,
        }
    }

    pub fn kind(&self) -> ConnectorKind {
        self.kind
    }

    /// Returns the relationship this connector was derived from.
    pub fn relationship(&self) -> Id {
        self.relationship
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }
}

/// Derives every connector implied by `data` under `layout`.
///
/// Relationships whose partners are not both positioned contribute nothing.
/// The descent is drawn when at least one child reference resolves to a
/// person in `data`.
pub fn connectors(data: &GenogramData, layout: &Layout, config: &LayoutConfig) -> Vec<Connector> {
    let people = data.people_by_id();
    let mut connectors = Vec::new();

    for relationship in data.relationships() {
        let (Some(partner_a), Some(partner_b)) = (
            layout.position(relationship.partner_a()),
            layout.position(relationship.partner_b()),
        ) else {
            continue;
        };

        let id = relationship.id();
        connectors.push(Connector::new(
            ConnectorKind::Partners,
            id,
            partner_a,
            partner_b,
        ));

        let children: Vec<Id> = relationship
            .children()
            .iter()
            .filter(|child| people.contains_key(*child))
            .copied()
            .collect();
        if children.is_empty() {
            continue;
        }

        let midpoint = partner_a.with_x(partner_a.x() + (partner_b.x() - partner_a.x()) / 2.0);
        let branch = midpoint.with_y(midpoint.y() + config.vertical_spacing() / 2.0);
        connectors.push(Connector::new(ConnectorKind::Descent, id, midpoint, branch));

        for child in children {
            let Some(position) = layout.position(child) else {
                continue;
            };
            let top = position.with_y(position.y() - config.person_height() / 2.0);
            connectors.push(Connector::new(ConnectorKind::Child, id, branch, top));
        }
    }

    connectors
}
