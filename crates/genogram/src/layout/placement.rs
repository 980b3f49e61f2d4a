//! The running state of one layout pass.
//!
//! [`Placement`] is threaded by value through a fold over the relationships
//! and then through the sweep over people. It owns the tier cursor and the
//! positions assigned so far. The next free slot is always the number of
//! people already positioned, so it is derived from the map instead of
//! being tracked on its own.

use std::collections::HashMap;

use indexmap::{IndexMap, map::Entry};
use log::{debug, trace};

use genogram_core::{
    family::{Person, Relationship},
    geometry::{Point, Size},
    identifier::Id,
};

use crate::{GenogramError, config::LayoutConfig, layout::Layout};

/// Accumulator for a single layout pass.
#[derive(Debug, Clone)]
pub(super) struct Placement<'a> {
    config: &'a LayoutConfig,
    current_y: f32,
    positions: IndexMap<Id, Point>,
}

impl<'a> Placement<'a> {
    /// Starts a pass with the first tier one person-height below the top edge.
    pub(super) fn new(config: &'a LayoutConfig) -> Self {
        Self {
            config,
            current_y: config.person_height(),
            positions: IndexMap::new(),
        }
    }

    /// Returns the y-coordinate of the tier new partners are placed on.
    pub(super) fn current_y(&self) -> f32 {
        self.current_y
    }

    /// Returns the slot index the next person placed at a slot will take.
    pub(super) fn next_slot_index(&self) -> usize {
        self.positions.len()
    }

    /// Returns the x-coordinate of the next free slot.
    fn next_slot_x(&self) -> f32 {
        self.config.slot_pitch() * self.next_slot_index() as f32 + self.config.person_width()
    }

    /// Assigns `point` to `id` unless it already has a position.
    ///
    /// Returns the position `id` holds afterwards.
    fn place(&mut self, id: Id, point: Point) -> Point {
        match self.positions.entry(id) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                trace!(person = id.to_string(), x = point.x(), y = point.y(); "Placed person");
                *entry.insert(point)
            }
        }
    }

    /// Assigns `id` the next free slot on the current tier unless it already
    /// has a position.
    fn place_at_next_slot(&mut self, id: Id) -> Point {
        let point = Point::new(self.next_slot_x(), self.current_y);
        self.place(id, point)
    }

    /// Places the partners and children of one relationship.
    ///
    /// A relationship with an unresolved partner leaves the placement
    /// untouched. Unresolved children are dropped, but the tier still
    /// advances when the declared child list is non-empty.
    pub(super) fn place_relationship(
        mut self,
        relationship: &Relationship,
        people: &HashMap<Id, &Person>,
    ) -> Self {
        let (Some(partner_a), Some(partner_b)) = (
            people.get(&relationship.partner_a()),
            people.get(&relationship.partner_b()),
        ) else {
            debug!(
                relationship = relationship.id().to_string();
                "Skipping relationship with an unresolved partner"
            );
            return self;
        };

        let pitch = self.config.slot_pitch();

        let position_a = self.place_at_next_slot(partner_a.id());
        // Partner B mirrors partner A's current y, even when A sits on an
        // earlier tier than `current_y`.
        let position_b = self.place(partner_b.id(), position_a.with_x(position_a.x() + pitch));

        let children: Vec<Id> = relationship
            .children()
            .iter()
            .filter_map(|child| people.get(child).map(|person| person.id()))
            .collect();

        if children.len() < relationship.children().len() {
            debug!(
                relationship = relationship.id().to_string(),
                dropped = relationship.children().len() - children.len();
                "Dropping unresolved children"
            );
        }

        let child_y = self.current_y + self.config.vertical_spacing();
        let block_width = children.len() as f32 * pitch - self.config.horizontal_spacing();
        let start_x = position_a.x() + (position_b.x() - position_a.x() - block_width) / 2.0;

        for (index, child) in children.into_iter().enumerate() {
            let x = start_x + index as f32 * pitch + self.config.person_width() / 2.0;
            self.place(child, Point::new(x, child_y));
        }

        if !relationship.children().is_empty() {
            self.current_y += self.config.vertical_spacing();
        }

        self
    }

    /// Places everyone still without a position at the next free slots of
    /// the final tier, in dataset order.
    pub(super) fn place_remaining(mut self, people: &[Person]) -> Self {
        debug!(
            tier_y = self.current_y(),
            first_slot = self.next_slot_index();
            "Placing remaining people"
        );
        for person in people {
            self.place_at_next_slot(person.id());
        }
        self
    }

    /// Computes the bounding box and hands out the finished [`Layout`].
    ///
    /// # Errors
    ///
    /// Returns [`GenogramError::EmptyInput`] when nobody was positioned.
    pub(super) fn finish(self) -> Result<Layout, GenogramError> {
        let mut points = self.positions.values();
        let Some(first) = points.next() else {
            return Err(GenogramError::EmptyInput);
        };

        let (max_x, max_y) = points.fold((first.x(), first.y()), |(max_x, max_y), point| {
            (max_x.max(point.x()), max_y.max(point.y()))
        });

        let size = Size::new(
            max_x + self.config.person_width(),
            max_y + self.config.person_height(),
        );

        Ok(Layout::new(self.positions, size))
    }
}
