//! **graphex-core**: shared geometry types for the *graphex* crates.
//!
//! Grid coordinates ([`Point`], [`Range`]) double as hashable graph nodes, and
//! the [`Planar`] trait exposes the coordinates the distance heuristics of
//! `graphex-paths` work on.

pub mod geom;

pub use geom::{Planar, Point, Range, RangeIter};
