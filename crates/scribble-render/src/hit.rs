//! Hit testing: point → stroke lookup.
//!
//! Instead of testing the pointer against every stroke's outline, read the
//! identification surface at the pointer and treat the sampled hit color
//! as the stroke key. One pixel read per query, independent of how many
//! strokes are stored.

use crate::renderer::Renderer;
use scribble_core::{HitColor, StrokeStore, Vec2};

/// Find the stroke under `position`.
/// Returns `None` on background, or when the sampled color is not a live key.
pub fn hit_test<R: Renderer + ?Sized>(
    renderer: &R,
    store: &StrokeStore,
    position: Vec2,
) -> Option<HitColor> {
    let sampled = renderer.hit_color_at(position)?;
    if store.contains(sampled) {
        Some(sampled)
    } else {
        log::trace!("hit: sampled {sampled} is not a live stroke");
        None
    }
}
