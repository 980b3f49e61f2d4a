//! Tiered layout of a genogram.
//!
//! [`layout`] makes a single forward pass over the relationships of a
//! [`GenogramData`], then sweeps the people list for anyone left over:
//!
//! 1. Partners are placed side by side on the current tier. A person's
//!    horizontal slot is the number of people positioned before them, so x
//!    depends on the order in which people are first touched.
//! 2. Children are centered beneath their partners on the tier below.
//! 3. The tier moves down only after a relationship that declares children.
//! 4. People no relationship reached are appended to the final tier.
//!
//! The first position assigned to a person is kept for the rest of the pass.
//! Relationships naming an unknown partner are skipped, and unknown children
//! are dropped. Neither is an error.

mod placement;

use indexmap::IndexMap;
use log::{debug, info};

use genogram_core::{
    family::GenogramData,
    geometry::{Point, Size},
    identifier::Id,
};

use crate::{GenogramError, config::LayoutConfig};

use placement::Placement;

/// Result of a layout pass: a center point per person and the bounding box.
///
/// Positions iterate in placement order.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    positions: IndexMap<Id, Point>,
    size: Size,
}

impl Layout {
    fn new(positions: IndexMap<Id, Point>, size: Size) -> Self {
        Self { positions, size }
    }

    /// Returns every assigned position, in placement order.
    pub fn positions(&self) -> &IndexMap<Id, Point> {
        &self.positions
    }

    /// Returns the center point assigned to `id`, if any.
    pub fn position(&self, id: Id) -> Option<Point> {
        self.positions.get(&id).copied()
    }

    /// Returns the size of the origin-anchored bounding box.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the number of positioned people.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if nobody is positioned.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Computes the position of every person in `data`.
///
/// # Errors
///
/// - [`GenogramError::Configuration`] if `config` holds a non-positive or
///   non-finite value. This is checked before anything is placed.
/// - [`GenogramError::EmptyInput`] if the dataset has no people.
///
/// # Examples
///
/// ```
/// use genogram::{
///     config::LayoutConfig,
///     family::{GenogramData, Person, Relationship, Sex},
///     geometry::Point,
///     identifier::Id,
///     layout::layout,
/// };
///
/// let data = GenogramData::new(
///     vec![
///         Person::new("a", "Adam", Sex::Male),
///         Person::new("b", "Beth", Sex::Female),
///         Person::new("c", "Cleo", Sex::Female),
///     ],
///     vec![Relationship::new("r1", "a", "b").with_children(["c"])],
/// );
///
/// let layout = layout(&data, &LayoutConfig::default()).unwrap();
///
/// assert_eq!(layout.position(Id::new("a")), Some(Point::new(80.0, 80.0)));
/// assert_eq!(layout.position(Id::new("b")), Some(Point::new(200.0, 80.0)));
/// assert_eq!(layout.position(Id::new("c")), Some(Point::new(140.0, 200.0)));
/// ```
pub fn layout(data: &GenogramData, config: &LayoutConfig) -> Result<Layout, GenogramError> {
    config.validate()?;

    info!(
        people_count = data.people().len(),
        relationships_count = data.relationships().len();
        "Calculating genogram layout"
    );

    let people = data.people_by_id();

    let layout = data
        .relationships()
        .iter()
        .fold(Placement::new(config), |placement, relationship| {
            placement.place_relationship(relationship, &people)
        })
        .place_remaining(data.people())
        .finish()?;

    debug!(
        positioned = layout.len(),
        width = layout.size().width(),
        height = layout.size().height();
        "Layout calculated"
    );

    Ok(layout)
}
