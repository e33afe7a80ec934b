//! Pure geometry data for the swipe button
//!
//! Client coordinates, element sizes and paddings as reported by the host
//! layout engine. Everything here is plain `Copy` data in CSS pixels.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
