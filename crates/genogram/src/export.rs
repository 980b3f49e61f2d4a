//! Presentation of a computed [`Layout`](crate::layout::Layout).
//!
//! Nothing in here moves people around. [`connector`] derives the line
//! segments implied by the relationships, and [`svg`] draws people and
//! connectors at exactly the coordinates the layout assigned.

pub mod connector;
pub mod svg;
