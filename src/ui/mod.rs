//! Rendering layer: the panels around the map, and the map itself.

pub mod map;
pub mod panels;
