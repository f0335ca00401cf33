//! Render protocol consumed by the drawing and erasing logic.
//!
//! Drawing is incremental: `stroke_start` paints the first dot and each
//! `stroke_continue` paints only the newest segment, so a frame touches as
//! few pixels as possible. `stroke_render` replays a finished stroke, which
//! is how neighbours are restored after an erase clears their pixels.
//!
//! Every implementation keeps two surfaces in lock-step: the visible one,
//! painted with display colors, and the identification one, painted with
//! hit colors at a radius of at least [`MIN_HIT_RADIUS`].
//!
//! [`MIN_HIT_RADIUS`]: scribble_core::consts::MIN_HIT_RADIUS

use scribble_core::{Aabb, HitColor, Segment, Stroke, StyledPoint, Vec2};

pub trait Renderer {
    /// Sample the identification surface. `None` means background.
    fn hit_color_at(&self, position: Vec2) -> Option<HitColor>;

    /// Clear both surfaces inside `rect`.
    fn clear_rect(&mut self, rect: Aabb);

    /// Paint the first sample of a new stroke.
    fn stroke_start(&mut self, point: &StyledPoint);

    /// Paint one segment between the previous and the newest sample.
    fn stroke_continue(&mut self, segment: &Segment);

    /// Paint a whole stroke from its first sample to its last.
    fn stroke_render(&mut self, stroke: &Stroke) {
        self.stroke_start(&stroke.first());
        for segment in stroke.segments() {
            self.stroke_continue(&segment);
        }
    }
}
