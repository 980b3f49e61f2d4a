//! Genogram Core Types and Definitions
//!
//! This crate provides the foundational types shared by the genogram layout
//! engine and its outer surfaces. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Family**: The people and relationships being laid out ([`family`] module)

pub mod color;
pub mod family;
pub mod geometry;
pub mod identifier;
