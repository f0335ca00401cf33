//! Geometry and identification constants shared by the builder and renderers.

/// Extra pixels added around `max(radius)` when a stroke's bounds are
/// finalized, covering anti-aliasing and the segment end caps.
pub const BOUNDS_PADDING: f32 = 3.0;

/// Minimum radius painted on the identification surface so thin strokes
/// stay clickable.
pub const MIN_HIT_RADIUS: f32 = 2.0;

/// Number of distinct 24-bit hit colors (`#000000` ..= `#ffffff`).
pub const HIT_COLOR_SPACE: u32 = 0x0100_0000;
